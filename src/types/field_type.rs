//! Field types and their descriptors.

use std::{fmt::Display, str::FromStr};

use crate::{intrinsics::see_jvm_spec, jvm::references::ClassRef};

use super::{Descriptor, InvalidDescriptor, sort::Sort};

/// A primitive type in Java.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    Boolean,
    /// The `char` type.
    Char,
    /// The `float` type.
    Float,
    /// The `double` type.
    Double,
    /// The `byte` type.
    Byte,
    /// The `short` type.
    Short,
    /// The `int` type.
    Int,
    /// The `long` type.
    Long,
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            _ => Err(InvalidDescriptor(descriptor.to_string())),
        }
    }
}

impl PrimitiveType {
    /// Returns the one-letter descriptor of the type.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
        }
    }

    /// Returns the name of the type as written in Java source code.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
        }
    }

    /// Returns the sort of the type.
    #[must_use]
    pub const fn sort(self) -> Sort {
        match self {
            Self::Boolean => Sort::Boolean,
            Self::Char => Sort::Char,
            Self::Float => Sort::Float,
            Self::Double => Sort::Double,
            Self::Byte => Sort::Byte,
            Self::Short => Sort::Short,
            Self::Int => Sort::Int,
            Self::Long => Sort::Long,
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The type of a field, a parameter or a local variable.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum FieldType {
    /// A primitive type.
    Base(PrimitiveType),
    /// A class or interface type.
    Object(ClassRef),
    /// An array type whose elements are of the given type.
    Array(Box<FieldType>),
}

impl FieldType {
    /// The maximum number of dimensions of an array type.
    pub const MAX_ARRAY_DIMENSIONS: u8 = u8::MAX;

    /// Creates an array type with the given element type and dimensions.
    #[must_use]
    pub fn array_of(element: FieldType, dimensions: u8) -> Self {
        (0..dimensions).fold(element, |it, _| it.into_array_type())
    }

    /// Creates an array type whose elements are of this type.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Creates an array type whose elements are of this type.
    #[must_use]
    pub fn make_array_type(&self) -> Self {
        self.clone().into_array_type()
    }

    /// Returns the type of `java.lang.Object`.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(ClassRef::new(ClassRef::JAVA_LANG_OBJECT))
    }

    /// Returns the sort of the type.
    #[must_use]
    pub const fn sort(&self) -> Sort {
        match self {
            Self::Base(it) => it.sort(),
            Self::Object(_) => Sort::Object,
            Self::Array(_) => Sort::Array,
        }
    }
}

impl Descriptor for FieldType {
    fn descriptor(&self) -> String {
        match self {
            Self::Base(it) => it.descriptor_char().to_string(),
            Self::Object(ClassRef { binary_name }) => format!("L{binary_name};"),
            Self::Array(inner) => format!("[{}", inner.descriptor()),
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(it) => it.fmt(f),
            Self::Object(it) => it.fmt(f),
            Self::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

impl FromStr for FieldType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        match RawFieldType::split_first(descriptor) {
            Some((raw, "")) => Ok(raw.to_field_type()),
            _ => Err(InvalidDescriptor(descriptor.to_owned())),
        }
    }
}

/// A field type scanned off the front of a descriptor without allocating.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct RawFieldType<'a> {
    pub dimensions: u8,
    pub element: RawElement<'a>,
}

/// The non-array part of a [`RawFieldType`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum RawElement<'a> {
    Base(PrimitiveType),
    Object(&'a str),
}

impl<'a> RawFieldType<'a> {
    /// Splits one field type off the front of `descriptor`.
    /// For an input as follows.
    /// ```text
    ///   [Ljava/lang/String;IJB)V
    ///   ^                  ^
    ///   descriptor         remaining
    /// ```
    /// It returns a one-dimensional array of `java/lang/String` and the `remaining` part.
    /// Returns [`None`] if the front of `descriptor` is not a field type.
    pub(crate) fn split_first(descriptor: &'a str) -> Option<(Self, &'a str)> {
        let element_desc = descriptor.trim_start_matches('[');
        // `[` is a single byte so the length difference is the number of dimensions.
        let dimensions = u8::try_from(descriptor.len() - element_desc.len()).ok()?;
        let mut chars = element_desc.chars();
        let (element, remaining) = match chars.next()? {
            'L' => {
                let (binary_name, remaining) = chars.as_str().split_once(';')?;
                if !is_binary_name(binary_name) {
                    return None;
                }
                (RawElement::Object(binary_name), remaining)
            }
            c => {
                let primitive = PrimitiveType::try_from(c).ok()?;
                (RawElement::Base(primitive), chars.as_str())
            }
        };
        Some((
            Self {
                dimensions,
                element,
            },
            remaining,
        ))
    }

    pub(crate) const fn sort(&self) -> Sort {
        match (self.dimensions, self.element) {
            (0, RawElement::Base(it)) => it.sort(),
            (0, RawElement::Object(_)) => Sort::Object,
            _ => Sort::Array,
        }
    }

    pub(crate) fn to_field_type(self) -> FieldType {
        let element = match self.element {
            RawElement::Base(it) => FieldType::Base(it),
            RawElement::Object(binary_name) => FieldType::Object(ClassRef::new(binary_name)),
        };
        FieldType::array_of(element, self.dimensions)
    }
}

/// Checks if `name` is a binary class name in its internal form, i.e., non-empty
/// `/`-separated identifiers none of which contains `.`, `;` or `[`.
#[doc = see_jvm_spec!(4, 2, 1)]
fn is_binary_name(name: &str) -> bool {
    name.split('/').all(|it| !it.is_empty() && !it.contains(['.', ';', '[']))
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    use crate::tests::arb_field_type;

    proptest! {
        #[test]
        fn descriptor_parses_back(field_type in arb_field_type()) {
            let descriptor = field_type.descriptor();
            assert_eq!(FieldType::from_str(&descriptor), Ok(field_type));
        }

        #[test]
        fn primitive_letters(primitive in any::<PrimitiveType>()) {
            let descriptor = primitive.descriptor_char();
            assert_eq!(PrimitiveType::try_from(descriptor), Ok(primitive));
            assert_eq!(FieldType::Base(primitive).sort(), primitive.sort());
        }
    }

    #[test]
    fn object_type() {
        let parsed = FieldType::from_str("Ljava/lang/String;").expect("Failed to parse");
        assert_eq!(parsed, FieldType::Object(ClassRef::new("java/lang/String")));
        assert_eq!(parsed.sort(), Sort::Object);
        assert_eq!(parsed.to_string(), "java/lang/String");
    }

    #[test]
    fn nested_array_type() {
        let parsed = FieldType::from_str("[[I").expect("Failed to parse");
        assert_eq!(
            parsed,
            FieldType::array_of(FieldType::Base(PrimitiveType::Int), 2)
        );
        assert_eq!(parsed.sort(), Sort::Array);
        assert_eq!(parsed.to_string(), "int[][]");
    }

    #[test]
    fn missing_semicolon() {
        assert!(FieldType::from_str("Ljava/lang/String").is_err());
    }

    #[test]
    fn empty_class_name() {
        assert!(FieldType::from_str("L;").is_err());
    }

    #[test]
    fn malformed_class_names() {
        for descriptor in [
            "Ljava.lang.String;",
            "L[I;",
            "La//b;",
            "L/;",
            "L/java/lang/Object;",
            "Ljava/lang/;",
        ] {
            assert!(FieldType::from_str(descriptor).is_err(), "{descriptor:?}");
        }
        assert!(FieldType::from_str("Lcom/example/Outer$Inner;").is_ok());
    }

    #[test]
    fn array_without_element() {
        assert!(FieldType::from_str("[").is_err());
        assert!(FieldType::from_str("[[").is_err());
    }

    #[test]
    fn void_is_not_a_field_type() {
        assert!(FieldType::from_str("V").is_err());
        assert!(FieldType::from_str("[V").is_err());
    }

    #[test]
    fn trailing_characters() {
        assert!(FieldType::from_str("II").is_err());
        assert!(FieldType::from_str("Ljava/lang/String;I").is_err());
    }

    #[test]
    fn too_many_dimensions() {
        let max = format!("{}I", "[".repeat(255));
        let over = format!("{}I", "[".repeat(256));
        assert_eq!(FieldType::from_str(&max).map(|it| it.sort()), Ok(Sort::Array));
        assert!(FieldType::from_str(&over).is_err());
    }

    #[test]
    fn split_first_leaves_remaining() {
        let (raw, remaining) =
            RawFieldType::split_first("[Ljava/lang/String;IJB)V").expect("Failed to split");
        assert_eq!(raw.dimensions, 1);
        assert_eq!(raw.element, RawElement::Object("java/lang/String"));
        assert_eq!(remaining, "IJB)V");
    }
}
