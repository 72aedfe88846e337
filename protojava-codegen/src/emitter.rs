//! The per-variant emitter capability.

use protojava_core::{CodeWriter, OutputSink};
use protojava_ir::FileDescriptor;

use crate::{Configuration, Error, Result, Variant};

/// Turns one (schema file, configuration, variant) triple into source code.
///
/// The driver validates every emitter before any of them writes, then for each
/// one writes the primary file produced by [`Emitter::generate_main`] and lets
/// [`Emitter::generate_siblings`] write any extra files.
pub trait Emitter {
    /// The variant this emitter generates.
    fn variant(&self) -> Variant;

    /// Reject schema shapes this variant cannot generate.
    ///
    /// Should return [`Error::EmitterValidationFailed`].
    fn validate(&self) -> Result<()>;

    /// Dotted namespace of the primary file (e.g. "com.example").
    fn package(&self) -> &str;

    /// Class name of the primary file, without extension.
    fn class_name(&self) -> &str;

    /// Extension of generated source files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Write the primary file's content.
    fn generate_main(&self, writer: &mut CodeWriter) -> Result<()>;

    /// Write sibling files below `package_dir` and report their paths.
    ///
    /// When annotating, each sibling's annotation file is written here too and
    /// its path reported in [`SiblingOutput::annotations`].
    fn generate_siblings(&self, package_dir: &str, sink: &mut dyn OutputSink)
    -> Result<SiblingOutput>;
}

/// Creates emitters for a target language.
pub trait EmitterFactory {
    /// Target language identifier (e.g. "java").
    fn language(&self) -> &'static str;

    /// Build an emitter bound to `file`, `config` and `variant`.
    fn create<'a>(
        &self,
        file: &'a FileDescriptor,
        config: &'a Configuration,
        variant: Variant,
    ) -> Box<dyn Emitter + 'a>;
}

/// Paths written by sibling generation, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiblingOutput {
    pub files: Vec<String>,
    pub annotations: Vec<String>,
}

impl SiblingOutput {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.annotations.is_empty()
    }
}

/// Write one artifact, wrapping I/O failures with the logical path.
pub fn write_artifact(sink: &mut dyn OutputSink, path: &str, content: &[u8]) -> Result<()> {
    sink.write(path, content).map_err(|source| Error::Emission {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(path, bytes = content.len(), "emitted artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use protojava_core::MemorySink;

    use super::*;

    struct BrokenSink;

    impl OutputSink for BrokenSink {
        fn write(&mut self, _path: &str, _content: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_write_artifact_ok() {
        let mut sink = MemorySink::new();
        write_artifact(&mut sink, "a/B.java", b"class B {}").unwrap();
        assert_eq!(sink.get_str("a/B.java"), Some("class B {}"));
    }

    #[test]
    fn test_write_artifact_wraps_io_error() {
        let err = write_artifact(&mut BrokenSink, "a/B.java", b"").unwrap_err();
        match err {
            Error::Emission { path, source } => {
                assert_eq!(path, "a/B.java");
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
