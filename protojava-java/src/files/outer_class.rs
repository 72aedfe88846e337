use protojava_codegen::{Configuration, Variant};
use protojava_core::CodeWriter;
use protojava_ir::FileDescriptor;

use super::{
    EnumClass, FileHeader, MessageClass, MessageInterface, Placement, ServiceClass,
    generates_services,
};
use crate::ClassNames;

/// The primary compilation unit of a schema file.
///
/// Holds the descriptor accessor for shared code and, unless the file asks for
/// multiple files, every top-level type as a nested declaration.
pub struct OuterClass<'a> {
    pub file: &'a FileDescriptor,
    pub config: &'a Configuration,
    pub names: &'a ClassNames,
    pub variant: Variant,
}

impl OuterClass<'_> {
    pub fn render(&self, writer: &mut CodeWriter) {
        let name = &self.names.outer_class;

        FileHeader {
            source: &self.file.name,
            package: &self.names.package,
        }
        .render(writer);

        writer
            .line(&format!("public final class {name} {{"))
            .indent()
            .line(&format!("private {name}() {{}}"));

        if self.config.generate_shared && !self.config.enforce_lite {
            self.render_descriptor_accessor(writer);
        }

        if !self.file.options.java_multiple_files {
            self.render_nested_types(writer);
        }

        writer.dedent().line("}");
    }

    fn render_descriptor_accessor(&self, writer: &mut CodeWriter) {
        writer
            .blank()
            .line("public static com.google.protobuf.Descriptors.FileDescriptor getDescriptor() {")
            .indent()
            .line("return descriptor;")
            .dedent()
            .line("}")
            .blank()
            .line("private static com.google.protobuf.Descriptors.FileDescriptor descriptor;");
    }

    fn render_nested_types(&self, writer: &mut CodeWriter) {
        for (index, descriptor) in self.file.enums.iter().enumerate() {
            writer.blank();
            EnumClass {
                descriptor,
                path: vec![FileDescriptor::ENUM_TYPE_FIELD, index as i32],
            }
            .render(writer);
        }

        for (index, message) in self.file.messages.iter().enumerate() {
            let path = vec![FileDescriptor::MESSAGE_TYPE_FIELD, index as i32];
            if self.variant.is_immutable() {
                writer.blank();
                MessageInterface {
                    message,
                    path: path.clone(),
                }
                .render(writer);
            }
            writer.blank();
            MessageClass {
                message,
                path,
                variant: self.variant,
                placement: Placement::Nested,
            }
            .render(writer);
        }

        if generates_services(self.file, self.config) {
            for (index, service) in self.file.services.iter().enumerate() {
                writer.blank();
                ServiceClass {
                    service,
                    path: vec![FileDescriptor::SERVICE_FIELD, index as i32],
                    placement: Placement::Nested,
                }
                .render(writer);
            }
        }
    }
}
