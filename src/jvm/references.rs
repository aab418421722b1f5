//! References to JVM elements.

/// A reference to a class by its binary name, e.g., `java/lang/String`.
#[derive(Debug, PartialEq, Eq, Clone, Hash, derive_more::Display)]
#[display("{binary_name}")]
pub struct ClassRef {
    /// The binary name of the class.
    pub binary_name: String,
}

impl ClassRef {
    /// The binary name of `java.lang.Object`.
    pub const JAVA_LANG_OBJECT: &'static str = "java/lang/Object";

    /// Creates a new [`ClassRef`] from a binary name.
    pub fn new<S: Into<String>>(binary_name: S) -> Self {
        ClassRef {
            binary_name: binary_name.into(),
        }
    }
}
