//! Renderers for Java compilation units and type declarations.
//!
//! Each renderer writes into a [`CodeWriter`](protojava_core::CodeWriter) and
//! annotates declarations with their descriptor path.

mod enum_class;
mod header;
mod message_class;
mod message_interface;
mod outer_class;
mod service_class;

pub use enum_class::EnumClass;
pub use header::{FileHeader, GENERATED_HEADER};
pub use message_class::MessageClass;
pub use message_interface::{MessageInterface, ORBUILDER_SUFFIX};
pub use outer_class::OuterClass;
pub use service_class::ServiceClass;

use protojava_codegen::Configuration;
use protojava_core::underscores_to_camel_case;
use protojava_ir::FileDescriptor;

/// Where a declaration is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Its own compilation unit.
    TopLevel,
    /// Inside an enclosing class.
    Nested,
}

impl Placement {
    fn static_modifier(self) -> &'static str {
        match self {
            Self::TopLevel => "",
            Self::Nested => "static ",
        }
    }
}

/// Abstract service classes are only generated on request, and never for lite.
pub fn generates_services(file: &FileDescriptor, config: &Configuration) -> bool {
    file.options.java_generic_services && !config.enforce_lite
}

/// Descriptor path of a child element: `parent ++ [field, index]`.
fn child_path(parent: &[i32], field: i32, index: usize) -> Vec<i32> {
    let mut path = Vec::with_capacity(parent.len() + 2);
    path.extend_from_slice(parent);
    path.push(field);
    path.push(index as i32);
    path
}

/// `foo_bar` → `getFooBar`.
fn getter_name(field: &str) -> String {
    format!("get{}", underscores_to_camel_case(field, true))
}

/// `foo_bar` → `setFooBar`.
fn setter_name(field: &str) -> String {
    format!("set{}", underscores_to_camel_case(field, true))
}

/// `foo_bar` → `fooBar_`.
fn member_name(field: &str) -> String {
    format!("{}_", underscores_to_camel_case(field, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_names() {
        assert_eq!(getter_name("display_name"), "getDisplayName");
        assert_eq!(setter_name("id"), "setId");
        assert_eq!(member_name("display_name"), "displayName_");
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path(&[4, 1], 3, 2), vec![4, 1, 3, 2]);
    }
}
