//! Core utilities and types for the protojava generator.
//!
//! This crate provides the primitives every generation pass writes through:
//! key-addressed output sinks, the annotation collector that maps emitted byte
//! ranges back to descriptor elements, and an indenting code writer.

mod annotation;
mod naming;
mod sink;
mod writer;

// Source-map annotations
pub use annotation::{ANNOTATION_SUFFIX, Annotation, AnnotationCollector, annotation_path};
// Output sinks
pub use sink::{DirSink, MemorySink, OutputSink};
// Code writing
pub use writer::CodeWriter;
// String utilities
pub use naming::{file_base_name, package_to_dir, underscores_to_camel_case};
