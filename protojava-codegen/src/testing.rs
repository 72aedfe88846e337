//! Test utilities for the generation driver.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::io;

use protojava_core::{AnnotationCollector, CodeWriter, MemorySink, OutputSink, annotation_path};
use protojava_ir::FileDescriptor;

use crate::{
    Configuration, Emitter, EmitterFactory, Error, Result, SiblingOutput, Variant,
    emitter::write_artifact,
};

/// Factory for [`StubEmitter`]s with scriptable failures.
///
/// Primary files are named after the schema file's base name, prefixed with
/// `Mutable` for the mutable variant, and use the `stub` extension.
#[derive(Debug, Clone, Default)]
pub struct StubEmitters {
    siblings: Vec<String>,
    fail_validation: Option<Variant>,
    fail_generation: Option<Variant>,
}

impl StubEmitters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one sibling file per name.
    pub fn with_siblings(mut self, names: &[&str]) -> Self {
        self.siblings = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Fail validation for `variant`.
    pub fn failing_validation(mut self, variant: Variant) -> Self {
        self.fail_validation = Some(variant);
        self
    }

    /// Fail primary generation for `variant`.
    pub fn failing_generation(mut self, variant: Variant) -> Self {
        self.fail_generation = Some(variant);
        self
    }
}

impl EmitterFactory for StubEmitters {
    fn language(&self) -> &'static str {
        "stub"
    }

    fn create<'a>(
        &self,
        file: &'a FileDescriptor,
        config: &'a Configuration,
        variant: Variant,
    ) -> Box<dyn Emitter + 'a> {
        let base = protojava_core::file_base_name(&file.name);
        let class_name = match variant {
            Variant::Immutable => base.to_string(),
            Variant::Mutable => format!("Mutable{base}"),
        };

        Box::new(StubEmitter {
            file,
            config,
            variant,
            class_name,
            siblings: self.siblings.clone(),
            fail_validation: self.fail_validation == Some(variant),
            fail_generation: self.fail_generation == Some(variant),
        })
    }
}

/// Emitter that writes a one-line body per file.
pub struct StubEmitter<'a> {
    file: &'a FileDescriptor,
    config: &'a Configuration,
    variant: Variant,
    class_name: String,
    siblings: Vec<String>,
    fail_validation: bool,
    fail_generation: bool,
}

impl Emitter for StubEmitter<'_> {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn validate(&self) -> Result<()> {
        if self.fail_validation {
            return Err(Error::validation(
                self.variant,
                format!("{} cannot be generated as {}", self.file.name, self.variant),
            ));
        }
        Ok(())
    }

    fn package(&self) -> &str {
        &self.file.package
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn file_extension(&self) -> &'static str {
        "stub"
    }

    fn generate_main(&self, writer: &mut CodeWriter) -> Result<()> {
        if self.fail_generation {
            return Err(Error::generation(&self.class_name, "stub generation failed"));
        }
        let line = format!("stub {}", self.class_name);
        writer.annotated_line(&line, &self.class_name, &[4, 0]);
        Ok(())
    }

    fn generate_siblings(
        &self,
        package_dir: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<SiblingOutput> {
        let mut output = SiblingOutput::default();
        for (index, name) in self.siblings.iter().enumerate() {
            let path = format!("{package_dir}{name}.stub");
            let collector = self
                .config
                .annotate_code
                .then(|| AnnotationCollector::new(&self.file.name));
            let mut writer = CodeWriter::new(collector);
            writer.annotated_line(&format!("stub {name}"), name, &[4, index as i32]);
            let (code, annotations) = writer.finish();

            write_artifact(sink, &path, code.as_bytes())?;
            output.files.push(path.clone());

            if let Some(annotations) = annotations {
                let info_path = annotation_path(&path);
                write_artifact(sink, &info_path, &annotations.encode())?;
                output.annotations.push(info_path);
            }
        }
        Ok(output)
    }
}

/// Sink that fails when a specific path is written, buffering everything else.
#[derive(Debug, Default)]
pub struct FailingSink {
    inner: MemorySink,
    fail_on: String,
}

impl FailingSink {
    pub fn failing_on(path: impl Into<String>) -> Self {
        Self {
            inner: MemorySink::new(),
            fail_on: path.into(),
        }
    }

    /// Files written before (and after) the failing path.
    pub fn inner(&self) -> &MemorySink {
        &self.inner
    }
}

impl OutputSink for FailingSink {
    fn write(&mut self, path: &str, content: &[u8]) -> io::Result<()> {
        if path == self.fail_on {
            return Err(io::Error::other(format!("refusing to write {path}")));
        }
        self.inner.write(path, content)
    }
}
