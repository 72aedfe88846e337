use protojava_core::CodeWriter;
use protojava_ir::EnumDescriptor;

use super::child_path;

/// A Java `enum` for a proto enum.
///
/// Nested enums are implicitly static; the declaration is the same either way.
pub struct EnumClass<'a> {
    pub descriptor: &'a EnumDescriptor,
    /// Descriptor path of the enum.
    pub path: Vec<i32>,
}

impl EnumClass<'_> {
    pub fn render(&self, writer: &mut CodeWriter) {
        let name = &self.descriptor.name;

        writer.declaration("public enum ", name, " {", &self.path).indent();

        for (index, value) in self.descriptor.values.iter().enumerate() {
            let path = child_path(&self.path, EnumDescriptor::VALUE_FIELD, index);
            writer.declaration("", &value.name, &format!("({}),", value.number), &path);
        }

        writer
            .line(";")
            .blank()
            .line("private final int value;")
            .blank()
            .line(&format!("{name}(int value) {{"))
            .indent()
            .line("this.value = value;")
            .dedent()
            .line("}")
            .blank()
            .line("public final int getNumber() {")
            .indent()
            .line("return value;")
            .dedent()
            .line("}")
            .dedent()
            .line("}");
    }
}
