use protojava_core::{CodeWriter, underscores_to_camel_case};
use protojava_ir::ServiceDescriptor;

use super::{Placement, child_path};
use crate::JavaTypeMapper;

/// An abstract generic service class.
pub struct ServiceClass<'a> {
    pub service: &'a ServiceDescriptor,
    /// Descriptor path of the service.
    pub path: Vec<i32>,
    pub placement: Placement,
}

impl ServiceClass<'_> {
    pub fn render(&self, writer: &mut CodeWriter) {
        let mapper = JavaTypeMapper;
        let name = &self.service.name;
        let prefix = format!("public {}abstract class ", self.placement.static_modifier());

        writer
            .declaration(&prefix, name, " {", &self.path)
            .indent()
            .line(&format!("protected {name}() {{}}"));

        for (index, method) in self.service.methods.iter().enumerate() {
            let path = child_path(&self.path, ServiceDescriptor::METHOD_FIELD, index);
            let input = mapper.map_reference(&method.input_type);
            let output = mapper.map_reference(&method.output_type);

            writer
                .blank()
                .declaration(
                    "public abstract void ",
                    &underscores_to_camel_case(&method.name, false),
                    "(",
                    &path,
                )
                .indent()
                .indent()
                .line("com.google.protobuf.RpcController controller,")
                .line(&format!("{input} request,"))
                .line(&format!("com.google.protobuf.RpcCallback<{output}> done);"))
                .dedent()
                .dedent();
        }

        writer.dedent().line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_service() {
        let service = ServiceDescriptor::new("UserService").with_method(
            "GetUser",
            ".com.example.GetUserRequest",
            ".com.example.User",
        );
        let mut writer = CodeWriter::plain();

        ServiceClass {
            service: &service,
            path: vec![6, 0],
            placement: Placement::TopLevel,
        }
        .render(&mut writer);

        insta::assert_snapshot!(writer.as_str(), @r"
        public abstract class UserService {
          protected UserService() {}

          public abstract void getUser(
              com.google.protobuf.RpcController controller,
              GetUserRequest request,
              com.google.protobuf.RpcCallback<User> done);
        }
        ");
    }
}
