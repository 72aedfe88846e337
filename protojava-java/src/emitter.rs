//! Java [`Emitter`] implementation.

use protojava_codegen::{
    Configuration, Emitter, EmitterFactory, Error, Result, SiblingOutput, Variant, write_artifact,
};
use protojava_core::{AnnotationCollector, CodeWriter, OutputSink, annotation_path};
use protojava_ir::{FileDescriptor, OptimizeMode};

use crate::{
    ClassNames,
    files::{
        EnumClass, FileHeader, MessageClass, MessageInterface, OuterClass, Placement,
        ServiceClass, generates_services,
    },
    names::declared_type_names,
};

/// Creates [`JavaEmitter`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEmitters;

impl EmitterFactory for JavaEmitters {
    fn language(&self) -> &'static str {
        "java"
    }

    fn create<'a>(
        &self,
        file: &'a FileDescriptor,
        config: &'a Configuration,
        variant: Variant,
    ) -> Box<dyn Emitter + 'a> {
        Box::new(JavaEmitter::new(file, config, variant))
    }
}

/// Generates Java sources for one schema file and variant.
pub struct JavaEmitter<'a> {
    file: &'a FileDescriptor,
    config: &'a Configuration,
    variant: Variant,
    names: ClassNames,
}

impl<'a> JavaEmitter<'a> {
    pub fn new(file: &'a FileDescriptor, config: &'a Configuration, variant: Variant) -> Self {
        Self {
            file,
            config,
            variant,
            names: ClassNames::resolve(file, config, variant),
        }
    }

    fn writer(&self) -> CodeWriter {
        let collector = self
            .config
            .annotate_code
            .then(|| AnnotationCollector::new(&self.file.name));
        CodeWriter::new(collector)
    }

    /// Write `<package_dir><name>.java` (and its annotations) for one declaration.
    fn write_sibling(
        &self,
        package_dir: &str,
        name: &str,
        sink: &mut dyn OutputSink,
        output: &mut SiblingOutput,
        render: impl FnOnce(&mut CodeWriter),
    ) -> Result<()> {
        let path = format!("{package_dir}{name}.{}", self.file_extension());
        let mut writer = self.writer();

        FileHeader {
            source: &self.file.name,
            package: &self.names.package,
        }
        .render(&mut writer);
        render(&mut writer);

        let (code, annotations) = writer.finish();
        write_artifact(sink, &path, code.as_bytes())?;
        output.files.push(path.clone());

        if let Some(annotations) = annotations {
            let info_path = annotation_path(&path);
            write_artifact(sink, &info_path, &annotations.encode())?;
            output.annotations.push(info_path);
        }

        Ok(())
    }
}

impl Emitter for JavaEmitter<'_> {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn validate(&self) -> Result<()> {
        let class_name = &self.names.outer_class;

        for declared in declared_type_names(self.file) {
            if declared == class_name {
                return Err(Error::validation(
                    self.variant,
                    format!(
                        "Cannot generate Java output because the file's outer class name, \
                         \"{class_name}\", matches the name of one of the types declared inside \
                         it.  Please either rename the type or use the java_outer_classname \
                         option to specify a different outer class name for the .proto file."
                    ),
                ));
            }
            if declared.eq_ignore_ascii_case(class_name) {
                tracing::warn!(
                    file = %self.file.name,
                    class = %class_name,
                    declared,
                    "outer class name differs only in case from a declared type; \
                     this may cause compilation issues on case-insensitive filesystems"
                );
            }
        }

        if self.file.options.optimize_for == OptimizeMode::LiteRuntime && !self.config.enforce_lite
        {
            tracing::warn!(
                file = %self.file.name,
                "The optimize_for = LITE_RUNTIME option is no longer supported by protobuf Java \
                 code generator and is ignored--protoc will always generate full runtime code for \
                 Java. To use Java Lite runtime, users should use the Java Lite plugin instead."
            );
        }

        Ok(())
    }

    fn package(&self) -> &str {
        &self.names.package
    }

    fn class_name(&self) -> &str {
        &self.names.outer_class
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn generate_main(&self, writer: &mut CodeWriter) -> Result<()> {
        OuterClass {
            file: self.file,
            config: self.config,
            names: &self.names,
            variant: self.variant,
        }
        .render(writer);
        Ok(())
    }

    fn generate_siblings(
        &self,
        package_dir: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<SiblingOutput> {
        let mut output = SiblingOutput::default();
        if !self.file.options.java_multiple_files {
            return Ok(output);
        }

        for (index, descriptor) in self.file.enums.iter().enumerate() {
            let path = vec![FileDescriptor::ENUM_TYPE_FIELD, index as i32];
            self.write_sibling(package_dir, &descriptor.name, sink, &mut output, |writer| {
                EnumClass { descriptor, path }.render(writer)
            })?;
        }

        for (index, message) in self.file.messages.iter().enumerate() {
            let path = vec![FileDescriptor::MESSAGE_TYPE_FIELD, index as i32];

            if self.variant.is_immutable() {
                let interface = MessageInterface {
                    message,
                    path: path.clone(),
                };
                self.write_sibling(package_dir, &interface.name(), sink, &mut output, |writer| {
                    interface.render(writer)
                })?;
            }

            self.write_sibling(package_dir, &message.name, sink, &mut output, |writer| {
                MessageClass {
                    message,
                    path,
                    variant: self.variant,
                    placement: Placement::TopLevel,
                }
                .render(writer)
            })?;
        }

        if generates_services(self.file, self.config) {
            for (index, service) in self.file.services.iter().enumerate() {
                let path = vec![FileDescriptor::SERVICE_FIELD, index as i32];
                self.write_sibling(package_dir, &service.name, sink, &mut output, |writer| {
                    ServiceClass {
                        service,
                        path,
                        placement: Placement::TopLevel,
                    }
                    .render(writer)
                })?;
            }
        }

        tracing::debug!(
            file = %self.file.name,
            variant = %self.variant,
            count = output.files.len(),
            "generated sibling files"
        );
        Ok(output)
    }
}
