//! Module containing the APIs for the JVM elements.

pub mod opcodes;
pub mod references;

pub use opcodes::{field_type_for_var_opcode, type_for_var_opcode};
