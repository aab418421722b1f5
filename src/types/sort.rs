//! The semantic category of a JVM type.

use std::fmt::Display;

/// The sort of a type, i.e., which kind of value a descriptor denotes.
///
/// The discriminants are the raw sort codes commonly used by bytecode tools (`void` is `0`,
/// `method` is `11`), with [`Sort::Undefined`] as the `-1` sentinel.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(i8)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Sort {
    /// The `void` type.
    Void = 0,
    /// The `boolean` type.
    Boolean = 1,
    /// The `char` type.
    Char = 2,
    /// The `byte` type.
    Byte = 3,
    /// The `short` type.
    Short = 4,
    /// The `int` type.
    Int = 5,
    /// The `float` type.
    Float = 6,
    /// The `long` type.
    Long = 7,
    /// The `double` type.
    Double = 8,
    /// An array type.
    Array = 9,
    /// A class or interface type.
    Object = 10,
    /// A method type.
    Method = 11,
    /// The sentinel for a missing sort. Never produced by parsing a descriptor.
    Undefined = -1,
}

/// An error indicating that a raw sort code does not name any [`Sort`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("Unknown sort code {0}")]
pub struct UnknownSort(pub i32);

impl Sort {
    /// All the sorts, in the order of their codes.
    pub const ALL: [Sort; 13] = [
        Sort::Undefined,
        Sort::Void,
        Sort::Boolean,
        Sort::Char,
        Sort::Byte,
        Sort::Short,
        Sort::Int,
        Sort::Float,
        Sort::Long,
        Sort::Double,
        Sort::Array,
        Sort::Object,
        Sort::Method,
    ];

    /// Returns the raw code of this sort.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns the lowercase label of this sort.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sort::Void => "void",
            Sort::Boolean => "boolean",
            Sort::Char => "char",
            Sort::Byte => "byte",
            Sort::Short => "short",
            Sort::Int => "int",
            Sort::Float => "float",
            Sort::Long => "long",
            Sort::Double => "double",
            Sort::Array => "array",
            Sort::Object => "object",
            Sort::Method => "method",
            Sort::Undefined => "<undefined>",
        }
    }

    /// Checks if the sort is `void` or one of the eight primitive value types.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Sort::Void
                | Sort::Boolean
                | Sort::Char
                | Sort::Byte
                | Sort::Short
                | Sort::Int
                | Sort::Float
                | Sort::Long
                | Sort::Double
        )
    }

    /// Returns the sort as seen by the runtime.
    /// Arrays are treated as objects, and the types narrower than `int` are treated as `int`
    /// since they occupy an `int` slot on the operand stack and in local variables.
    /// All the other sorts are returned unchanged.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Sort::Array => Sort::Object,
            Sort::Boolean | Sort::Char | Sort::Byte | Sort::Short => Sort::Int,
            other => other,
        }
    }
}

impl TryFrom<i32> for Sort {
    type Error = UnknownSort;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Sort::ALL
            .into_iter()
            .find(|it| it.code() == code)
            .ok_or(UnknownSort(code))
    }
}

impl From<Sort> for i32 {
    fn from(sort: Sort) -> Self {
        sort.code()
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalizes a sort. See [`Sort::normalized`].
#[must_use]
pub const fn normalize(sort: Sort) -> Sort {
    sort.normalized()
}

/// Returns the label of a raw sort code.
/// Unknown codes are labeled `"<UNKNOWN>"` rather than rejected.
#[must_use]
pub fn sort_name(code: i32) -> &'static str {
    Sort::try_from(code).map_or("<UNKNOWN>", Sort::name)
}
