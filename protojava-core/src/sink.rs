use std::{
    io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

/// A key-addressed write target for generated artifacts.
///
/// Paths are logical, `/`-separated and relative to whatever root the sink
/// represents. Each call is an independent, fully committed write.
pub trait OutputSink {
    /// Write `content` at the logical `path`.
    fn write(&mut self, path: &str, content: &[u8]) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, path: &str, content: &[u8]) -> io::Result<()> {
        (**self).write(path, content)
    }
}

/// In-memory sink that keeps files in first-write order.
///
/// Writing a path twice replaces its content but keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: IndexMap<String, Vec<u8>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content written at `path`.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Get the content written at `path` as UTF-8 text.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|c| std::str::from_utf8(c).ok())
    }

    /// Check whether anything was written at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Iterate over written paths in first-write order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Iterate over `(path, content)` pairs in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_slice()))
    }

    /// Number of distinct paths written.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Replay every buffered file into another sink, in order.
    pub fn flush_to(&self, sink: &mut dyn OutputSink) -> io::Result<()> {
        for (path, content) in &self.files {
            sink.write(path, content)?;
        }
        Ok(())
    }

    /// Consume the sink, returning its files in order.
    pub fn into_files(self) -> Vec<(String, Vec<u8>)> {
        self.files.into_iter().collect()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &str, content: &[u8]) -> io::Result<()> {
        if self
            .files
            .insert(path.to_string(), content.to_vec())
            .is_some()
        {
            tracing::warn!(path, "output path written more than once, keeping last write");
        }
        Ok(())
    }
}

/// Sink rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSink {
    base: PathBuf,
}

impl DirSink {
    /// Create a sink that writes below `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Get the root directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve a logical path below the root directory.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if any segment is `..`, so
    /// nothing can be written outside the root.
    pub fn full_path(&self, path: &str) -> io::Result<PathBuf> {
        let mut full = self.base.clone();
        for part in path.split('/').filter(|part| !part.is_empty()) {
            if part == ".." {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("output path `{path}` escapes the output directory"),
                ));
            }
            full.push(part);
        }
        Ok(full)
    }
}

impl OutputSink for DirSink {
    fn write(&mut self, path: &str, content: &[u8]) -> io::Result<()> {
        let full = self.full_path(path)?;
        write_file(&full, content)?;
        tracing::debug!(path = %full.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
