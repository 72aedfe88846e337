use protojava_codegen::Variant;
use protojava_core::CodeWriter;
use protojava_ir::{FieldDescriptor, MessageDescriptor};

use super::{
    EnumClass, MessageInterface, ORBUILDER_SUFFIX, Placement, child_path, getter_name,
    member_name, setter_name,
};
use crate::JavaTypeMapper;

/// A Java class for a proto message.
///
/// The immutable variant implements the message's `OrBuilder` interface and
/// exposes getters only; the mutable variant adds chainable setters. Nested
/// types are emitted inside the class (with their interfaces for immutable).
pub struct MessageClass<'a> {
    pub message: &'a MessageDescriptor,
    /// Descriptor path of the message.
    pub path: Vec<i32>,
    pub variant: Variant,
    pub placement: Placement,
}

impl MessageClass<'_> {
    pub fn render(&self, writer: &mut CodeWriter) {
        let name = &self.message.name;
        let prefix = format!("public {}final class ", self.placement.static_modifier());
        let suffix = if self.variant.is_immutable() {
            format!(" implements {name}{ORBUILDER_SUFFIX} {{")
        } else {
            " {".to_string()
        };

        writer.declaration(&prefix, name, &suffix, &self.path).indent();
        self.render_constructor(writer);

        for (index, field) in self.message.fields.iter().enumerate() {
            let path = child_path(&self.path, MessageDescriptor::FIELD_FIELD, index);
            writer.blank();
            self.render_field(writer, field, &path);
        }

        for (index, nested) in self.message.nested_enums.iter().enumerate() {
            writer.blank();
            EnumClass {
                descriptor: nested,
                path: child_path(&self.path, MessageDescriptor::ENUM_TYPE_FIELD, index),
            }
            .render(writer);
        }

        for (index, nested) in self.message.nested_messages.iter().enumerate() {
            let path = child_path(&self.path, MessageDescriptor::NESTED_TYPE_FIELD, index);
            if self.variant.is_immutable() {
                writer.blank();
                MessageInterface {
                    message: nested,
                    path: path.clone(),
                }
                .render(writer);
            }
            writer.blank();
            MessageClass {
                message: nested,
                path,
                variant: self.variant,
                placement: Placement::Nested,
            }
            .render(writer);
        }

        writer.dedent().line("}");
    }

    fn render_constructor(&self, writer: &mut CodeWriter) {
        let name = &self.message.name;
        match self.variant {
            Variant::Immutable => {
                writer
                    .line(&format!("private {name}() {{}}"))
                    .blank()
                    .line(&format!(
                        "private static final {name} DEFAULT_INSTANCE = new {name}();"
                    ))
                    .blank()
                    .line(&format!("public static {name} getDefaultInstance() {{"))
                    .indent()
                    .line("return DEFAULT_INSTANCE;")
                    .dedent()
                    .line("}");
            }
            Variant::Mutable => {
                writer.line(&format!("public {name}() {{}}"));
            }
        }
    }

    fn render_field(&self, writer: &mut CodeWriter, field: &FieldDescriptor, path: &[i32]) {
        let mapper = JavaTypeMapper;
        let java_type = mapper.map_field(field);
        let member = member_name(&field.name);

        match mapper.default_value(field) {
            Some(init) => writer.line(&format!("private {java_type} {member} = {init};")),
            None => writer.line(&format!("private {java_type} {member};")),
        };

        writer
            .blank()
            .declaration(
                &format!("public {java_type} "),
                &getter_name(&field.name),
                "() {",
                path,
            )
            .indent()
            .line(&format!("return {member};"))
            .dedent()
            .line("}");

        if self.variant == Variant::Mutable {
            writer
                .blank()
                .line(&format!(
                    "public {} {}({java_type} value) {{",
                    self.message.name,
                    setter_name(&field.name)
                ))
                .indent()
                .line(&format!("{member} = value;"))
                .line("return this;")
                .dedent()
                .line("}");
        }
    }
}
