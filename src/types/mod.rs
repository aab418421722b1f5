//! Module containing the APIs for the JVM type system.
pub mod descriptor;
pub mod field_type;
pub mod method_descriptor;
pub mod primitive;
pub mod sort;

pub use descriptor::{classify, is_primitive, is_valid_descriptor};
pub use sort::{Sort, normalize, sort_name};

/// Trait for types that have a descriptor.
pub trait Descriptor {
    /// Returns the descriptor of the type.
    fn descriptor(&self) -> String;
}

/// An error indicating that the descriptor string is invalid.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Invalid descriptor: {0:?}")]
pub struct InvalidDescriptor(pub String);
