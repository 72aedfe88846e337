use protojava_core::CodeWriter;
use protojava_ir::MessageDescriptor;

use super::{child_path, getter_name};
use crate::JavaTypeMapper;

/// Appended to a message name to form its accessor interface.
pub const ORBUILDER_SUFFIX: &str = "OrBuilder";

/// The read-only accessor interface of an immutable message.
pub struct MessageInterface<'a> {
    pub message: &'a MessageDescriptor,
    /// Descriptor path of the message.
    pub path: Vec<i32>,
}

impl MessageInterface<'_> {
    /// Interface name, e.g. `FooOrBuilder`.
    pub fn name(&self) -> String {
        format!("{}{ORBUILDER_SUFFIX}", self.message.name)
    }

    pub fn render(&self, writer: &mut CodeWriter) {
        let mapper = JavaTypeMapper;
        let name = self.name();

        writer
            .declaration("public interface ", &name, " {", &self.path)
            .indent();

        for (index, field) in self.message.fields.iter().enumerate() {
            let path = child_path(&self.path, MessageDescriptor::FIELD_FIELD, index);
            writer.declaration(
                &format!("{} ", mapper.map_field(field)),
                &getter_name(&field.name),
                "();",
                &path,
            );
        }

        writer.dedent().line("}");
    }
}

#[cfg(test)]
mod tests {
    use protojava_ir::FieldDescriptor;

    use super::*;

    #[test]
    fn test_render_interface() {
        let message = MessageDescriptor::new("User")
            .with_field(FieldDescriptor::new("id", 1, "int64"))
            .with_field(FieldDescriptor::new("tags", 2, "string").repeated());
        let mut writer = CodeWriter::plain();

        MessageInterface {
            message: &message,
            path: vec![4, 0],
        }
        .render(&mut writer);

        insta::assert_snapshot!(writer.as_str(), @r"
        public interface UserOrBuilder {
          long getId();
          java.util.List<java.lang.String> getTags();
        }
        ");
    }
}
