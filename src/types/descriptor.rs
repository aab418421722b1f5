//! Validation and classification of raw descriptor strings.
//!
//! Descriptors come straight from class files that may be malformed or hand-crafted, so
//! nothing here panics. Malformed input is reported as `false` or as an [`InvalidDescriptor`].

use crate::intrinsics::trace_rejected;

use super::{InvalidDescriptor, field_type::RawFieldType, sort::Sort};

/// Checks if `descriptor` is the one-letter descriptor of a primitive type or `void`.
#[must_use]
pub fn is_primitive(descriptor: &str) -> bool {
    matches!(
        descriptor.as_bytes(),
        [b'V' | b'Z' | b'B' | b'C' | b'S' | b'I' | b'F' | b'J' | b'D']
    )
}

/// Checks if `descriptor` is a well-formed field descriptor, `V`, or method descriptor.
/// The whole string must match; trailing characters make it invalid.
#[must_use]
pub fn is_valid_descriptor(descriptor: &str) -> bool {
    let Some(sort) = scan(descriptor) else {
        trace_rejected!("Rejected descriptor {descriptor:?}");
        return false;
    };
    // An object descriptor must be terminated even if the scanner were to stop early.
    if sort == Sort::Object && !descriptor.ends_with(';') {
        trace_rejected!("Rejected unterminated object descriptor {descriptor:?}");
        return false;
    }
    true
}

/// Returns the sort of the type denoted by `descriptor`.
/// # Errors
/// - [`InvalidDescriptor`] if `descriptor` is not valid, see [`is_valid_descriptor`].
pub fn classify(descriptor: &str) -> Result<Sort, InvalidDescriptor> {
    scan(descriptor).ok_or_else(|| {
        trace_rejected!("Cannot classify descriptor {descriptor:?}");
        InvalidDescriptor(descriptor.to_owned())
    })
}

/// Scans a complete descriptor and returns its sort.
fn scan(descriptor: &str) -> Option<Sort> {
    if let Some(params) = descriptor.strip_prefix('(') {
        scan_method(params).then_some(Sort::Method)
    } else {
        match split_return_type(descriptor)? {
            (sort, "") => Some(sort),
            _ => None,
        }
    }
}

/// Scans the part of a method descriptor after the opening parenthesis.
fn scan_method(mut remaining: &str) -> bool {
    loop {
        if let Some(return_desc) = remaining.strip_prefix(')') {
            return matches!(split_return_type(return_desc), Some((_, "")));
        }
        match RawFieldType::split_first(remaining) {
            Some((_, rest)) => remaining = rest,
            None => return false,
        }
    }
}

/// Splits a field type or `V` off the front of `descriptor`.
fn split_return_type(descriptor: &str) -> Option<(Sort, &str)> {
    if let Some(rest) = descriptor.strip_prefix('V') {
        Some((Sort::Void, rest))
    } else {
        RawFieldType::split_first(descriptor).map(|(it, rest)| (it.sort(), rest))
    }
}
