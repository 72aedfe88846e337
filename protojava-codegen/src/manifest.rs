//! Build manifests listing generated paths.
//!
//! Each manifest is UTF-8 text with one path per line, in generation order.

use protojava_core::OutputSink;

use crate::{Artifacts, Configuration, Result, emitter::write_artifact};

/// Writes the output and annotation listings requested by the configuration.
pub struct ManifestWriter<'a> {
    config: &'a Configuration,
}

impl<'a> ManifestWriter<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Write the configured listings and return the paths written.
    ///
    /// A listing whose path is not configured is skipped rather than written
    /// empty. The annotation listing is also skipped unless `annotate_code`
    /// is set.
    pub fn write(&self, artifacts: &Artifacts, sink: &mut dyn OutputSink) -> Result<Vec<String>> {
        let mut written = Vec::new();

        if let Some(path) = &self.config.output_list_file {
            write_artifact(sink, path, render_listing(&artifacts.files).as_bytes())?;
            written.push(path.clone());
        }

        if let Some(path) = &self.config.annotation_list_file {
            if self.config.annotate_code {
                write_artifact(sink, path, render_listing(&artifacts.annotations).as_bytes())?;
                written.push(path.clone());
            } else {
                tracing::debug!(path = %path, "annotation listing skipped, annotate_code not set");
            }
        }

        Ok(written)
    }
}

/// Render paths as newline-terminated lines.
pub fn render_listing(paths: &[String]) -> String {
    let mut out = String::with_capacity(paths.iter().map(|p| p.len() + 1).sum());
    for path in paths {
        out.push_str(path);
        out.push('\n');
    }
    out
}
