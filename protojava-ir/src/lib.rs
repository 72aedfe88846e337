//! Schema descriptor model for the protojava generator.
//!
//! This crate provides the immutable, already-validated view of one schema
//! file that code generation reads from. Descriptors can be loaded from TOML
//! or JSON files, or lowered from the `FileDescriptorProto` that protoc hands
//! to plugins.
//!
//! # Architecture
//!
//! ```text
//! foo.toml / CodeGeneratorRequest → protojava-ir (descriptors) → codegen
//! ```

mod descriptor;
mod load;
mod proto;

pub use descriptor::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, FieldLabel, FileDescriptor,
    FileOptions, MessageDescriptor, MethodDescriptor, OptimizeMode, ServiceDescriptor,
};
pub use load::LoadError;
