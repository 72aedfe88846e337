//! Generate command report data structures.

use std::path::PathBuf;

use protojava_codegen::Variant;

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema file name from the descriptor.
    pub source: String,

    /// Variants that ran, in plan order.
    pub variants: Vec<Variant>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Generated source files.
    pub files: Vec<String>,
    /// Annotation files.
    pub annotations: Vec<String>,
    /// Manifest files.
    pub manifests: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content, or a placeholder for binary files.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn variant_list(&self) -> String {
        self.variants
            .iter()
            .map(Variant::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Source", &self.source);
        out.key_value("Variants", &self.variant_list());
        out.key_value("Output", &written.output_dir.display().to_string());
        out.newline();

        out.section(&format!("Generated ({})", written.files.len()));
        for file in &written.files {
            out.added_item(file);
        }

        if !written.annotations.is_empty() {
            out.newline();
            out.section(&format!("Annotations ({})", written.annotations.len()));
            for file in &written.annotations {
                out.added_item(file);
            }
        }

        if !written.manifests.is_empty() {
            out.newline();
            out.section("Manifests");
            for file in &written.manifests {
                out.list_item(file);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated ({})",
            preview.files.len(),
            self.variant_list()
        ));
    }
}
