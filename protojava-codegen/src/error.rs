use miette::Diagnostic;
use thiserror::Error;

use crate::Variant;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a generation invocation can fail.
///
/// The `Display` output is the single error string reported back to the
/// build pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Unknown generator option: {key}")]
    #[diagnostic(
        code(protojava::unknown_option),
        help(
            "valid options are: output_list_file, immutable, mutable, shared, lite, annotate_code, annotation_list_file"
        )
    )]
    UnknownOption { key: String },

    #[error("{message}")]
    #[diagnostic(code(protojava::incompatible_options))]
    IncompatibleOptions { message: String },

    #[error("{message}")]
    #[diagnostic(code(protojava::validation_failed))]
    EmitterValidationFailed { variant: Variant, message: String },

    #[error("failed to write '{path}': {source}")]
    #[diagnostic(code(protojava::emission_failed))]
    Emission {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to generate '{path}': {message}")]
    #[diagnostic(code(protojava::generation_failed))]
    Generation { path: String, message: String },
}

impl Error {
    /// Create a validation failure for `variant`.
    pub fn validation(variant: Variant, message: impl Into<String>) -> Self {
        Error::EmitterValidationFailed {
            variant,
            message: message.into(),
        }
    }

    /// Create a non-I/O generation failure for the file at `path`.
    pub fn generation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Generation {
            path: path.into(),
            message: message.into(),
        }
    }
}
