//! Source-map annotations for generated code.
//!
//! Annotations tie a byte range in a generated file back to the descriptor
//! element it came from. They are serialized as a protobuf
//! `GeneratedCodeInfo` message next to the generated file.

use prost::Message;
use prost_types::{GeneratedCodeInfo, generated_code_info};

/// Suffix appended to a generated file's path to name its annotation file.
pub const ANNOTATION_SUFFIX: &str = ".pb.meta";

/// Derive the annotation file path for a generated file.
pub fn annotation_path(generated: &str) -> String {
    format!("{generated}{ANNOTATION_SUFFIX}")
}

/// A single annotated span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Descriptor path of the element (field numbers and indices).
    pub path: Vec<i32>,
    /// Byte offset where the span starts.
    pub begin: usize,
    /// Byte offset one past the end of the span.
    pub end: usize,
}

/// Records annotations for one generated file.
#[derive(Debug, Clone)]
pub struct AnnotationCollector {
    source_file: String,
    annotations: Vec<Annotation>,
}

impl AnnotationCollector {
    /// Create a collector for spans originating in `source_file`.
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            annotations: Vec::new(),
        }
    }

    /// The schema file the spans refer to.
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Record a span.
    pub fn record(&mut self, path: &[i32], begin: usize, end: usize) {
        self.annotations.push(Annotation {
            path: path.to_vec(),
            begin,
            end,
        });
    }

    /// All spans recorded so far, in recording order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Check if no spans were recorded.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Convert to the protobuf representation.
    pub fn to_code_info(&self) -> GeneratedCodeInfo {
        GeneratedCodeInfo {
            annotation: self
                .annotations
                .iter()
                .map(|a| generated_code_info::Annotation {
                    path: a.path.clone(),
                    source_file: Some(self.source_file.clone()),
                    begin: Some(to_offset(a.begin)),
                    end: Some(to_offset(a.end)),
                    ..Default::default()
                })
                .collect(),
        }
    }

    /// Serialize as protobuf binary.
    pub fn encode(&self) -> Vec<u8> {
        self.to_code_info().encode_to_vec()
    }
}

fn to_offset(offset: usize) -> i32 {
    i32::try_from(offset).unwrap_or(i32::MAX)
}
