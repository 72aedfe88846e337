//! Generation driver.
//!
//! The driver fans out over the planned variants:
//!
//! 1. Build one emitter per variant.
//! 2. Validate all of them; the first failure aborts before anything is written.
//! 3. For each emitter in plan order, write the primary file, let the emitter
//!    write its siblings, then write the primary file's annotations.
//!
//! The primary annotation path is listed before any sibling's even though it
//! is written after them, so the annotation listing order differs from the
//! sink write order.
//!
//! Writes are committed to the sink as they happen. A failure in step 3 leaves
//! earlier files in place; callers wanting all-or-nothing output should drive a
//! [`MemorySink`](protojava_core::MemorySink) and flush it on success.

use protojava_core::{AnnotationCollector, CodeWriter, OutputSink, annotation_path, package_to_dir};
use protojava_ir::FileDescriptor;
use serde::Serialize;

use crate::{
    Configuration, Emitter, EmitterFactory, Result, SiblingOutput, Variant, emitter::write_artifact,
};

/// Paths produced by one invocation, in production order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    /// Variants that ran.
    pub variants: Vec<Variant>,
    /// Generated source files.
    pub files: Vec<String>,
    /// Annotation files (empty unless `annotate_code`).
    pub annotations: Vec<String>,
    /// Manifest files written after generation.
    pub manifests: Vec<String>,
}

impl Artifacts {
    fn append(&mut self, siblings: SiblingOutput) {
        self.files.extend(siblings.files);
        self.annotations.extend(siblings.annotations);
    }
}

/// Primary output path of an emitter: `<package-dir>/<ClassName>.<ext>`.
pub fn primary_path(emitter: &dyn Emitter) -> String {
    format!(
        "{}{}.{}",
        package_to_dir(emitter.package()),
        emitter.class_name(),
        emitter.file_extension()
    )
}

/// Runs emitters for one schema file under one configuration.
pub struct Driver<'a> {
    file: &'a FileDescriptor,
    config: &'a Configuration,
}

impl<'a> Driver<'a> {
    pub fn new(file: &'a FileDescriptor, config: &'a Configuration) -> Self {
        Self { file, config }
    }

    /// Build and validate emitters for `variants`, in order.
    pub fn prepare<F: EmitterFactory + ?Sized>(
        &self,
        factory: &F,
        variants: &[Variant],
    ) -> Result<Vec<Box<dyn Emitter + 'a>>> {
        let emitters: Vec<_> = variants
            .iter()
            .map(|&variant| factory.create(self.file, self.config, variant))
            .collect();

        for emitter in &emitters {
            emitter.validate()?;
        }

        Ok(emitters)
    }

    /// Validate and run every planned variant, writing into `sink`.
    pub fn run<F: EmitterFactory + ?Sized>(
        &self,
        factory: &F,
        variants: &[Variant],
        sink: &mut dyn OutputSink,
    ) -> Result<Artifacts> {
        let emitters = self.prepare(factory, variants)?;

        let mut artifacts = Artifacts::default();
        for emitter in &emitters {
            tracing::debug!(
                file = %self.file.name,
                variant = %emitter.variant(),
                "generating variant"
            );
            self.emit(emitter.as_ref(), sink, &mut artifacts)?;
            artifacts.variants.push(emitter.variant());
        }

        Ok(artifacts)
    }

    fn emit(
        &self,
        emitter: &dyn Emitter,
        sink: &mut dyn OutputSink,
        artifacts: &mut Artifacts,
    ) -> Result<()> {
        let package_dir = package_to_dir(emitter.package());
        let primary = primary_path(emitter);

        let collector = self
            .config
            .annotate_code
            .then(|| AnnotationCollector::new(&self.file.name));
        let mut writer = CodeWriter::new(collector);
        emitter.generate_main(&mut writer)?;
        let (code, annotations) = writer.finish();

        write_artifact(sink, &primary, code.as_bytes())?;
        artifacts.files.push(primary.clone());

        let info_path = annotation_path(&primary);
        if annotations.is_some() {
            artifacts.annotations.push(info_path.clone());
        }

        let siblings = emitter.generate_siblings(&package_dir, sink)?;
        artifacts.append(siblings);

        if let Some(annotations) = annotations {
            write_artifact(sink, &info_path, &annotations.encode())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use protojava_core::MemorySink;

    use super::*;
    use crate::{
        Error, GeneratorSettings,
        testing::{FailingSink, StubEmitters},
    };

    fn foo() -> FileDescriptor {
        FileDescriptor::new("Foo.proto", "com.example")
    }

    fn config(parameter: &str) -> Configuration {
        Configuration::from_parameter(parameter, &GeneratorSettings::default()).unwrap()
    }

    #[test]
    fn test_single_variant_writes_primary() {
        let file = foo();
        let config = config("immutable");
        let mut sink = MemorySink::new();

        let artifacts = Driver::new(&file, &config)
            .run(&StubEmitters::new(), &[Variant::Immutable], &mut sink)
            .unwrap();

        assert_eq!(artifacts.files, vec!["com/example/Foo.stub"]);
        assert!(artifacts.annotations.is_empty());
        assert_eq!(artifacts.variants, vec![Variant::Immutable]);
        assert_eq!(sink.paths().collect::<Vec<_>>(), vec!["com/example/Foo.stub"]);
    }

    #[test]
    fn test_primary_annotation_listed_first_written_last() {
        let file = foo();
        let config = config("immutable,annotate_code");
        let factory = StubEmitters::new().with_siblings(&["FooA", "FooB"]);
        let mut sink = MemorySink::new();

        let artifacts = Driver::new(&file, &config)
            .run(&factory, &[Variant::Immutable], &mut sink)
            .unwrap();

        assert_eq!(
            artifacts.files,
            vec![
                "com/example/Foo.stub",
                "com/example/FooA.stub",
                "com/example/FooB.stub"
            ]
        );
        assert_eq!(
            artifacts.annotations,
            vec![
                "com/example/Foo.stub.pb.meta",
                "com/example/FooA.stub.pb.meta",
                "com/example/FooB.stub.pb.meta"
            ]
        );
        // Primary annotations are written after the siblings.
        assert_eq!(
            sink.paths().last(),
            Some("com/example/Foo.stub.pb.meta")
        );
    }

    #[test]
    fn test_validation_failure_writes_nothing() {
        let file = foo();
        let config = config("immutable,mutable");
        let factory = StubEmitters::new().failing_validation(Variant::Mutable);
        let mut sink = MemorySink::new();

        let err = Driver::new(&file, &config)
            .run(&factory, &[Variant::Immutable, Variant::Mutable], &mut sink)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::EmitterValidationFailed {
                variant: Variant::Mutable,
                ..
            }
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_earlier_variant() {
        let file = foo();
        let config = config("immutable,mutable");
        let mut sink = FailingSink::failing_on("com/example/MutableFoo.stub");

        let err = Driver::new(&file, &config)
            .run(
                &StubEmitters::new(),
                &[Variant::Immutable, Variant::Mutable],
                &mut sink,
            )
            .unwrap_err();

        assert!(matches!(err, Error::Emission { ref path, .. } if path == "com/example/MutableFoo.stub"));
        assert!(sink.inner().contains("com/example/Foo.stub"));
        assert!(!sink.inner().contains("com/example/MutableFoo.stub"));
    }

    #[test]
    fn test_generation_failure_aborts_remaining_variants() {
        let file = foo();
        let config = config("immutable,mutable");
        let factory = StubEmitters::new().failing_generation(Variant::Immutable);
        let mut sink = MemorySink::new();

        let err = Driver::new(&file, &config)
            .run(&factory, &[Variant::Immutable, Variant::Mutable], &mut sink)
            .unwrap_err();

        assert!(matches!(err, Error::Generation { .. }));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_no_variants_produces_nothing() {
        let file = foo();
        let config = config("shared");
        let mut sink = MemorySink::new();

        let artifacts = Driver::new(&file, &config)
            .run(&StubEmitters::new(), &[], &mut sink)
            .unwrap();

        assert_eq!(artifacts, Artifacts::default());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_primary_path_without_package() {
        let file = FileDescriptor::new("Foo.proto", "");
        let config = config("");
        let emitter = StubEmitters::new().create(&file, &config, Variant::Immutable);
        assert_eq!(primary_path(emitter.as_ref()), "Foo.stub");
    }

    #[test]
    fn test_primary_annotation_file_is_decodable() {
        use prost::Message;

        let file = foo();
        let config = config("immutable,annotate_code");
        let mut sink = MemorySink::new();

        Driver::new(&file, &config)
            .run(&StubEmitters::new(), &[Variant::Immutable], &mut sink)
            .unwrap();

        let bytes = sink.get("com/example/Foo.stub.pb.meta").unwrap();
        let info = prost_types::GeneratedCodeInfo::decode(bytes).unwrap();
        assert_eq!(info.annotation.len(), 1);
        assert_eq!(info.annotation[0].source_file.as_deref(), Some("Foo.proto"));
    }
}
