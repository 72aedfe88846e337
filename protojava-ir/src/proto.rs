//! Lowering from protoc's `FileDescriptorProto`.

use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    ServiceDescriptorProto, field_descriptor_proto::Label, file_options,
};

use crate::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, FieldLabel, FileDescriptor,
    FileOptions, MessageDescriptor, MethodDescriptor, OptimizeMode, ServiceDescriptor,
};

impl From<&FileDescriptorProto> for FileDescriptor {
    fn from(proto: &FileDescriptorProto) -> Self {
        let options = proto.options.as_ref();
        Self {
            name: proto.name().to_string(),
            package: proto.package().to_string(),
            options: FileOptions {
                java_package: options.and_then(|o| o.java_package.clone()),
                java_outer_classname: options.and_then(|o| o.java_outer_classname.clone()),
                java_multiple_files: options.is_some_and(|o| o.java_multiple_files()),
                java_generic_services: options.is_some_and(|o| o.java_generic_services()),
                optimize_for: options
                    .map(|o| o.optimize_for().into())
                    .unwrap_or_default(),
            },
            messages: proto.message_type.iter().map(Into::into).collect(),
            enums: proto.enum_type.iter().map(Into::into).collect(),
            services: proto.service.iter().map(Into::into).collect(),
        }
    }
}

impl From<file_options::OptimizeMode> for OptimizeMode {
    fn from(mode: file_options::OptimizeMode) -> Self {
        match mode {
            file_options::OptimizeMode::Speed => OptimizeMode::Speed,
            file_options::OptimizeMode::CodeSize => OptimizeMode::CodeSize,
            file_options::OptimizeMode::LiteRuntime => OptimizeMode::LiteRuntime,
        }
    }
}

impl From<&DescriptorProto> for MessageDescriptor {
    fn from(proto: &DescriptorProto) -> Self {
        Self {
            name: proto.name().to_string(),
            fields: proto.field.iter().map(Into::into).collect(),
            nested_messages: proto.nested_type.iter().map(Into::into).collect(),
            nested_enums: proto.enum_type.iter().map(Into::into).collect(),
        }
    }
}

impl From<&FieldDescriptorProto> for FieldDescriptor {
    fn from(proto: &FieldDescriptorProto) -> Self {
        // Message and enum fields carry a type name; scalars only a type tag.
        let type_name = match proto.type_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => proto
                .r#type()
                .as_str_name()
                .trim_start_matches("TYPE_")
                .to_ascii_lowercase(),
        };

        Self {
            name: proto.name().to_string(),
            number: proto.number(),
            label: match proto.label() {
                Label::Optional => FieldLabel::Optional,
                Label::Required => FieldLabel::Required,
                Label::Repeated => FieldLabel::Repeated,
            },
            type_name,
        }
    }
}

impl From<&EnumDescriptorProto> for EnumDescriptor {
    fn from(proto: &EnumDescriptorProto) -> Self {
        Self {
            name: proto.name().to_string(),
            values: proto
                .value
                .iter()
                .map(|v| EnumValueDescriptor {
                    name: v.name().to_string(),
                    number: v.number(),
                })
                .collect(),
        }
    }
}

impl From<&ServiceDescriptorProto> for ServiceDescriptor {
    fn from(proto: &ServiceDescriptorProto) -> Self {
        Self {
            name: proto.name().to_string(),
            methods: proto
                .method
                .iter()
                .map(|m| MethodDescriptor {
                    name: m.name().to_string(),
                    input_type: m.input_type().to_string(),
                    output_type: m.output_type().to_string(),
                })
                .collect(),
        }
    }
}
