//! Check command report data structures.

use protojava_codegen::Plan;

use super::output::{Output, Report};

/// Report data from resolving and validating an invocation.
#[derive(Debug)]
pub struct CheckReport {
    /// Schema file name from the descriptor.
    pub source: String,
    /// The resolved plan.
    pub plan: Plan,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let config = &self.plan.configuration;

        if self.plan.variants.is_empty() {
            out.warning("no variants planned; nothing would be generated");
        }

        out.preformatted(&format!("✓ {} is valid", self.source));
        out.newline();

        out.section("Options");
        let flags = [
            ("immutable", config.generate_immutable),
            ("mutable", config.generate_mutable),
            ("shared", config.generate_shared),
            ("lite", config.enforce_lite),
            ("annotate_code", config.annotate_code),
        ];
        for (name, enabled) in flags {
            if enabled {
                out.list_item(name);
            }
        }
        if let Some(path) = &config.output_list_file {
            out.list_item(&format!("output_list_file={path}"));
        }
        if let Some(path) = &config.annotation_list_file {
            out.list_item(&format!("annotation_list_file={path}"));
        }
        out.newline();

        out.section("Primary files");
        for (variant, path) in self.plan.variants.iter().zip(&self.plan.primary_files) {
            out.list_item(&format!("{path} ({variant})"));
        }
    }
}
