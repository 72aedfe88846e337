//! Java type mapper.

use protojava_ir::{FieldDescriptor, FieldLabel};

/// Maps descriptor field types to Java type syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl JavaTypeMapper {
    /// Primitive (or final reference) Java type for a scalar proto type.
    ///
    /// Returns `None` for message and enum references.
    pub fn map_scalar(&self, type_name: &str) -> Option<&'static str> {
        let ty = match type_name {
            "int32" | "sint32" | "sfixed32" | "uint32" | "fixed32" => "int",
            "int64" | "sint64" | "sfixed64" | "uint64" | "fixed64" => "long",
            "float" => "float",
            "double" => "double",
            "bool" => "boolean",
            "string" => "java.lang.String",
            "bytes" => "com.google.protobuf.ByteString",
            _ => return None,
        };
        Some(ty)
    }

    /// Boxed counterpart of a mapped type, for use in generics.
    pub fn boxed<'a>(&self, java_type: &'a str) -> &'a str {
        match java_type {
            "int" => "java.lang.Integer",
            "long" => "java.lang.Long",
            "float" => "java.lang.Float",
            "double" => "java.lang.Double",
            "boolean" => "java.lang.Boolean",
            other => other,
        }
    }

    /// Simple Java name of a referenced message or enum (".pkg.Outer.Inner" → "Inner").
    pub fn map_reference<'a>(&self, type_name: &'a str) -> &'a str {
        type_name.rsplit('.').next().unwrap_or(type_name)
    }

    /// Java type of a field accessor's return value.
    pub fn map_field(&self, field: &FieldDescriptor) -> String {
        let element = self
            .map_scalar(&field.type_name)
            .unwrap_or_else(|| self.map_reference(&field.type_name));

        match field.label {
            FieldLabel::Repeated => format!("java.util.List<{}>", self.boxed(element)),
            FieldLabel::Optional | FieldLabel::Required => element.to_string(),
        }
    }

    /// Initializer for a field's backing member, if Java's zero value is not right.
    pub fn default_value(&self, field: &FieldDescriptor) -> Option<&'static str> {
        if field.label == FieldLabel::Repeated {
            return Some("java.util.Collections.emptyList()");
        }
        match field.type_name.as_str() {
            "string" => Some("\"\""),
            "bytes" => Some("com.google.protobuf.ByteString.EMPTY"),
            _ => None,
        }
    }
}
