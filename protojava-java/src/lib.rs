mod emitter;
mod names;
mod type_mapper;

pub mod files;
pub mod plugin;

pub use emitter::{JavaEmitter, JavaEmitters};
pub use names::{ClassNames, DEFAULT_INTERNAL_PACKAGE, OUTER_CLASS_SUFFIX};
pub use protojava_codegen::{Artifacts, Error, Generator, GeneratorSettings, Plan, Result};
pub use type_mapper::JavaTypeMapper;

/// A [`Generator`] emitting Java sources.
pub type JavaGenerator = Generator<JavaEmitters>;

/// Create a Java generator with the given host settings.
pub fn java_generator(settings: GeneratorSettings) -> JavaGenerator {
    Generator::new(JavaEmitters).with_settings(settings)
}
