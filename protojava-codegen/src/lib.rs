//! Generation orchestration for the protojava generator.
//!
//! This crate turns one schema file plus a flat generator parameter string into
//! a set of generated files and build manifests. Target-language emission is
//! delegated to an [`Emitter`] supplied by a language crate
//! (e.g. `protojava-java`).
//!
//! # Module Organization
//!
//! - [`options`] - Parameter string parsing (`key[=value]` lists)
//! - [`config`] - Configuration resolution, defaulting and exclusivity rules
//! - [`variant`] - Variant tags and the variant planner
//! - [`emitter`] - The per-variant emitter capability
//! - [`driver`] - Validation pass and per-variant emission loop
//! - [`manifest`] - Output and annotation listings
//! - [`testing`] - Stub emitters and sinks (feature-gated)
//!
//! # Example
//!
//! ```ignore
//! let generator = Generator::new(JavaEmitters);
//! let mut sink = MemorySink::new();
//! let artifacts = generator.generate(&file, "immutable,annotate_code", &mut sink)?;
//! ```

pub mod config;
pub mod driver;
pub mod emitter;
mod error;
mod generator;
pub mod manifest;
pub mod options;
pub mod variant;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{Configuration, GeneratorSettings};
pub use driver::{Artifacts, Driver, primary_path};
pub use emitter::{Emitter, EmitterFactory, SiblingOutput, write_artifact};
pub use error::{Error, Result};
pub use generator::{Generator, Plan};
pub use manifest::ManifestWriter;
pub use options::{GeneratorOption, parse_parameter};
pub use variant::{Variant, VariantPlanner};
