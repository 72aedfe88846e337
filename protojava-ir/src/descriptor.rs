//! Descriptor types.
//!
//! These mirror the parts of `descriptor.proto` the Java generator reads.
//! Descriptor paths used for annotations follow the same field numbers:
//! `message_type = 4`, `enum_type = 5`, `service = 6`.

use serde::{Deserialize, Serialize};

/// One schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name as given to the compiler (e.g. "protos/foo.proto").
    pub name: String,
    /// Proto package, empty if none.
    #[serde(default)]
    pub package: String,
    /// File-level options.
    #[serde(default)]
    pub options: FileOptions,
    /// Top-level messages, in declaration order.
    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,
    /// Top-level enums, in declaration order.
    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,
    /// Services, in declaration order.
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
}

impl FileDescriptor {
    /// Field number of `message_type` in `FileDescriptorProto`.
    pub const MESSAGE_TYPE_FIELD: i32 = 4;
    /// Field number of `enum_type` in `FileDescriptorProto`.
    pub const ENUM_TYPE_FIELD: i32 = 5;
    /// Field number of `service` in `FileDescriptorProto`.
    pub const SERVICE_FIELD: i32 = 6;

    /// Create an empty descriptor for `name` in `package`.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            options: FileOptions::default(),
            messages: Vec::new(),
            enums: Vec::new(),
            services: Vec::new(),
        }
    }

    /// Add a top-level message.
    pub fn with_message(mut self, message: MessageDescriptor) -> Self {
        self.messages.push(message);
        self
    }

    /// Add a top-level enum.
    pub fn with_enum(mut self, enum_desc: EnumDescriptor) -> Self {
        self.enums.push(enum_desc);
        self
    }

    /// Add a service.
    pub fn with_service(mut self, service: ServiceDescriptor) -> Self {
        self.services.push(service);
        self
    }

    /// Replace the file options.
    pub fn with_options(mut self, options: FileOptions) -> Self {
        self.options = options;
        self
    }

    /// Names of all top-level types (messages, enums, services).
    pub fn top_level_names(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .map(|m| m.name.as_str())
            .chain(self.enums.iter().map(|e| e.name.as_str()))
            .chain(self.services.iter().map(|s| s.name.as_str()))
    }

    /// Check whether a top-level type is named `name`.
    pub fn declares_top_level(&self, name: &str) -> bool {
        self.top_level_names().any(|n| n == name)
    }
}

/// File-level options relevant to Java generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOptions {
    /// Explicit Java package.
    pub java_package: Option<String>,
    /// Explicit outer class name.
    pub java_outer_classname: Option<String>,
    /// Emit one file per top-level type instead of nesting them.
    pub java_multiple_files: bool,
    /// Emit abstract service classes for `service` definitions.
    pub java_generic_services: bool,
    /// Requested optimization mode.
    pub optimize_for: OptimizeMode,
}

/// `FileOptions.optimize_for`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizeMode {
    #[default]
    Speed,
    CodeSize,
    LiteRuntime,
}

/// A message type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub nested_messages: Vec<MessageDescriptor>,
    #[serde(default)]
    pub nested_enums: Vec<EnumDescriptor>,
}

impl MessageDescriptor {
    /// Field number of `field` in `DescriptorProto`.
    pub const FIELD_FIELD: i32 = 2;
    /// Field number of `nested_type` in `DescriptorProto`.
    pub const NESTED_TYPE_FIELD: i32 = 3;
    /// Field number of `enum_type` in `DescriptorProto`.
    pub const ENUM_TYPE_FIELD: i32 = 4;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            nested_messages: Vec::new(),
            nested_enums: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_nested_message(mut self, message: MessageDescriptor) -> Self {
        self.nested_messages.push(message);
        self
    }

    pub fn with_nested_enum(mut self, enum_desc: EnumDescriptor) -> Self {
        self.nested_enums.push(enum_desc);
        self
    }
}

/// A message field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub number: i32,
    #[serde(default)]
    pub label: FieldLabel,
    /// Scalar type name ("int32", "string", ...) or fully-qualified type name.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, number: i32, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number,
            label: FieldLabel::Optional,
            type_name: type_name.into(),
        }
    }

    pub fn repeated(mut self) -> Self {
        self.label = FieldLabel::Repeated;
        self
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    #[default]
    Optional,
    Required,
    Repeated,
}

/// An enum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValueDescriptor>,
}

impl EnumDescriptor {
    /// Field number of `value` in `EnumDescriptorProto`.
    pub const VALUE_FIELD: i32 = 2;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, number: i32) -> Self {
        self.values.push(EnumValueDescriptor {
            name: name.into(),
            number,
        });
        self
    }
}

/// An enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueDescriptor {
    pub name: String,
    pub number: i32,
}

/// A service definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// Field number of `method` in `ServiceDescriptorProto`.
    pub const METHOD_FIELD: i32 = 2;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(
        mut self,
        name: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        self.methods.push(MethodDescriptor {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
        });
        self
    }
}

/// An RPC method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub input_type: String,
    pub output_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_names_in_declaration_order() {
        let file = FileDescriptor::new("foo.proto", "pkg")
            .with_message(MessageDescriptor::new("User"))
            .with_enum(EnumDescriptor::new("Role"))
            .with_service(ServiceDescriptor::new("UserService"))
            .with_message(MessageDescriptor::new("Group"));

        let names: Vec<_> = file.top_level_names().collect();
        assert_eq!(names, vec!["User", "Group", "Role", "UserService"]);
        assert!(file.declares_top_level("Role"));
        assert!(!file.declares_top_level("Missing"));
    }

    #[test]
    fn test_nested_types_are_not_top_level() {
        let file = FileDescriptor::new("foo.proto", "").with_message(
            MessageDescriptor::new("Outer").with_nested_message(MessageDescriptor::new("Inner")),
        );

        assert!(!file.declares_top_level("Inner"));
    }
}
