//! Non-generic JVM method descriptors.

use itertools::Itertools;
use std::{fmt::Display, str::FromStr};

use crate::intrinsics::see_jvm_spec;

use super::{
    Descriptor, InvalidDescriptor,
    field_type::{FieldType, RawFieldType},
    sort::Sort,
};

/// The descriptor of a method.
/// Consists of the parameters types and the return type.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct MethodDescriptor {
    /// The type of the parameters.
    pub parameters_types: Vec<FieldType>,
    /// The return type.
    pub return_type: ReturnType,
}

/// Denotes the return type of a method.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum ReturnType {
    /// The method returns a specific type.
    Some(FieldType),
    /// The return type of the method is `void`.
    Void,
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::Some(t) => t.fmt(f),
            ReturnType::Void => write!(f, "void"),
        }
    }
}

impl Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}) -> {}",
            self.parameters_types.iter().join(", "),
            self.return_type
        )
    }
}

impl Descriptor for MethodDescriptor {
    fn descriptor(&self) -> String {
        format!(
            "({}){}",
            self.parameters_types.iter().map(FieldType::descriptor).join(""),
            self.return_type.descriptor()
        )
    }
}

impl FromStr for MethodDescriptor {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDescriptor(descriptor.to_owned());
        let mut remaining = descriptor.strip_prefix('(').ok_or_else(invalid)?;
        let mut parameters_types = Vec::new();
        let return_type = loop {
            if let Some(return_desc) = remaining.strip_prefix(')') {
                break ReturnType::from_str(return_desc).map_err(|_| invalid())?;
            }
            let (param, rest) = RawFieldType::split_first(remaining).ok_or_else(invalid)?;
            parameters_types.push(param.to_field_type());
            remaining = rest;
        };
        Ok(Self {
            parameters_types,
            return_type,
        })
    }
}

impl FromStr for ReturnType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        if descriptor == "V" {
            Ok(ReturnType::Void)
        } else {
            FieldType::from_str(descriptor).map(ReturnType::Some)
        }
    }
}

impl Descriptor for ReturnType {
    fn descriptor(&self) -> String {
        match self {
            ReturnType::Some(it) => it.descriptor(),
            ReturnType::Void => "V".to_owned(),
        }
    }
}

impl ReturnType {
    /// Returns the sort of the return type.
    #[must_use]
    pub const fn sort(&self) -> Sort {
        match self {
            ReturnType::Some(it) => it.sort(),
            ReturnType::Void => Sort::Void,
        }
    }
}

impl MethodDescriptor {
    /// Returns the sort of a method type, which is always [`Sort::Method`].
    #[must_use]
    pub const fn sort(&self) -> Sort {
        Sort::Method
    }
}
