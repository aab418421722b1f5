//! Bridges the Java names of primitive types and their internal descriptors.

use super::sort::Sort;

/// An entry in the table of primitive types.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct PrimitiveEntry {
    /// The sort of the type.
    pub sort: Sort,
    /// The one-letter internal descriptor, e.g., `"I"`.
    pub descriptor: &'static str,
    /// The name of the type as written in Java source code, e.g., `"int"`.
    pub class_name: &'static str,
}

/// `void` and the eight primitive value types.
pub const PRIMITIVES: [PrimitiveEntry; 9] = [
    entry(Sort::Void, "V", "void"),
    entry(Sort::Boolean, "Z", "boolean"),
    entry(Sort::Byte, "B", "byte"),
    entry(Sort::Char, "C", "char"),
    entry(Sort::Short, "S", "short"),
    entry(Sort::Int, "I", "int"),
    entry(Sort::Float, "F", "float"),
    entry(Sort::Double, "D", "double"),
    entry(Sort::Long, "J", "long"),
];

const fn entry(sort: Sort, descriptor: &'static str, class_name: &'static str) -> PrimitiveEntry {
    PrimitiveEntry {
        sort,
        descriptor,
        class_name,
    }
}

/// An error indicating that a name is not the class name of a primitive type.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("{0:?} is not the class name of a primitive type")]
pub struct InvalidPrimitiveClassName(pub String);

/// Checks if `name` is the class name of a primitive type or `void`, e.g., `"int"`.
#[must_use]
pub fn is_primitive_class_name(name: &str) -> bool {
    PRIMITIVES.iter().any(|it| it.class_name == name)
}

/// Converts the class name of a primitive type to its internal descriptor, e.g., `"int"` to
/// `"I"`.
/// Callers are expected to check the name with [`is_primitive_class_name`] first.
/// # Errors
/// - [`InvalidPrimitiveClassName`] if `name` is not the class name of a primitive type.
pub fn class_name_to_internal(name: &str) -> Result<&'static str, InvalidPrimitiveClassName> {
    PRIMITIVES
        .iter()
        .find(|it| it.class_name == name)
        .map(|it| it.descriptor)
        .ok_or_else(|| InvalidPrimitiveClassName(name.to_owned()))
}

/// Converts the internal descriptor of a primitive type to its class name, e.g., `"I"` to
/// `"int"`.
#[must_use]
pub fn internal_to_class_name(descriptor: &str) -> Option<&'static str> {
    PRIMITIVES
        .iter()
        .find(|it| it.descriptor == descriptor)
        .map(|it| it.class_name)
}
