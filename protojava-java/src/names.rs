//! Java package and class naming.

use protojava_codegen::{Configuration, Variant};
use protojava_core::{file_base_name, underscores_to_camel_case};
use protojava_ir::{FileDescriptor, MessageDescriptor};

/// Package prefix used when targeting the internal runtime.
pub const DEFAULT_INTERNAL_PACKAGE: &str = "com.google.protos";

/// Appended to a derived outer class name that collides with a declared type.
pub const OUTER_CLASS_SUFFIX: &str = "OuterClass";

const MUTABLE_PREFIX: &str = "Mutable";

/// Resolved Java names for one file and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub package: String,
    pub outer_class: String,
}

impl ClassNames {
    pub fn resolve(file: &FileDescriptor, config: &Configuration, variant: Variant) -> Self {
        let outer = outer_class_name(file);
        let outer_class = match variant {
            Variant::Immutable => outer,
            Variant::Mutable => format!("{MUTABLE_PREFIX}{outer}"),
        };

        Self {
            package: java_package(file, config),
            outer_class,
        }
    }
}

/// Java package for `file`.
pub fn java_package(file: &FileDescriptor, config: &Configuration) -> String {
    if let Some(package) = &file.options.java_package {
        return package.clone();
    }

    if config.opensource_runtime {
        file.package.clone()
    } else if file.package.is_empty() {
        DEFAULT_INTERNAL_PACKAGE.to_string()
    } else {
        format!("{DEFAULT_INTERNAL_PACKAGE}.{}", file.package)
    }
}

/// Outer class name for the immutable variant.
pub fn outer_class_name(file: &FileDescriptor) -> String {
    if let Some(name) = &file.options.java_outer_classname {
        return name.clone();
    }

    let name = underscores_to_camel_case(file_base_name(&file.name), true);
    if declared_type_names(file).any(|declared| declared == name) {
        format!("{name}{OUTER_CLASS_SUFFIX}")
    } else {
        name
    }
}

/// Every message, enum and service name declared in `file`, nested ones included.
pub fn declared_type_names(file: &FileDescriptor) -> impl Iterator<Item = &str> {
    let mut names = Vec::new();
    for message in &file.messages {
        collect_message_names(message, &mut names);
    }
    names.extend(file.enums.iter().map(|e| e.name.as_str()));
    names.extend(file.services.iter().map(|s| s.name.as_str()));
    names.into_iter()
}

fn collect_message_names<'a>(message: &'a MessageDescriptor, names: &mut Vec<&'a str>) {
    names.push(&message.name);
    names.extend(message.nested_enums.iter().map(|e| e.name.as_str()));
    for nested in &message.nested_messages {
        collect_message_names(nested, names);
    }
}

#[cfg(test)]
mod tests {
    use protojava_codegen::GeneratorSettings;
    use protojava_ir::{EnumDescriptor, FileOptions};

    use super::*;

    fn config(opensource_runtime: bool) -> Configuration {
        Configuration::from_parameter("", &GeneratorSettings { opensource_runtime }).unwrap()
    }

    #[test]
    fn test_package_defaults_to_proto_package() {
        let file = FileDescriptor::new("Foo.proto", "com.example");
        assert_eq!(java_package(&file, &config(true)), "com.example");
    }

    #[test]
    fn test_internal_runtime_prefixes_package() {
        let file = FileDescriptor::new("Foo.proto", "search");
        assert_eq!(java_package(&file, &config(false)), "com.google.protos.search");

        let bare = FileDescriptor::new("Foo.proto", "");
        assert_eq!(java_package(&bare, &config(false)), "com.google.protos");
    }

    #[test]
    fn test_java_package_option_wins() {
        let file = FileDescriptor::new("Foo.proto", "search").with_options(FileOptions {
            java_package: Some("org.acme".to_string()),
            ..Default::default()
        });
        assert_eq!(java_package(&file, &config(false)), "org.acme");
    }

    #[test]
    fn test_outer_class_from_file_name() {
        let file = FileDescriptor::new("protos/user_profile.proto", "");
        assert_eq!(outer_class_name(&file), "UserProfile");
    }

    #[test]
    fn test_outer_class_conflict_appends_suffix() {
        let file = FileDescriptor::new("Foo.proto", "")
            .with_message(MessageDescriptor::new("Foo"));
        assert_eq!(outer_class_name(&file), "FooOuterClass");
    }

    #[test]
    fn test_nested_conflict_appends_suffix() {
        let file = FileDescriptor::new("status.proto", "").with_message(
            MessageDescriptor::new("Reply").with_nested_enum(EnumDescriptor::new("Status")),
        );
        assert_eq!(outer_class_name(&file), "StatusOuterClass");
    }

    #[test]
    fn test_mutable_prefix() {
        let file = FileDescriptor::new("Foo.proto", "com.example");
        let names = ClassNames::resolve(&file, &config(true), Variant::Mutable);
        assert_eq!(names.outer_class, "MutableFoo");
        assert_eq!(names.package, "com.example");
    }
}
