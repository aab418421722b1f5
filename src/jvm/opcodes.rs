//! Opcodes of the local variable access instructions and the types they imply.
//!
//! These instructions encode the type of their operand in the opcode itself, which makes them
//! the only reliable source of local variable types when the `LocalVariableTable` is missing,
//! as is common in obfuscated class files.
#![allow(missing_docs)]

use crate::{
    intrinsics::see_jvm_spec,
    types::{
        field_type::{FieldType, PrimitiveType},
        sort::Sort,
    },
};

pub const ILOAD: u8 = 0x15;
pub const LLOAD: u8 = 0x16;
pub const FLOAD: u8 = 0x17;
pub const DLOAD: u8 = 0x18;
pub const ALOAD: u8 = 0x19;
pub const ILOAD_0: u8 = 0x1A;
pub const ILOAD_1: u8 = 0x1B;
pub const ILOAD_2: u8 = 0x1C;
pub const ILOAD_3: u8 = 0x1D;
pub const LLOAD_0: u8 = 0x1E;
pub const LLOAD_1: u8 = 0x1F;
pub const LLOAD_2: u8 = 0x20;
pub const LLOAD_3: u8 = 0x21;
pub const FLOAD_0: u8 = 0x22;
pub const FLOAD_1: u8 = 0x23;
pub const FLOAD_2: u8 = 0x24;
pub const FLOAD_3: u8 = 0x25;
pub const DLOAD_0: u8 = 0x26;
pub const DLOAD_1: u8 = 0x27;
pub const DLOAD_2: u8 = 0x28;
pub const DLOAD_3: u8 = 0x29;
pub const ALOAD_0: u8 = 0x2A;
pub const ALOAD_1: u8 = 0x2B;
pub const ALOAD_2: u8 = 0x2C;
pub const ALOAD_3: u8 = 0x2D;
pub const ISTORE: u8 = 0x36;
pub const LSTORE: u8 = 0x37;
pub const FSTORE: u8 = 0x38;
pub const DSTORE: u8 = 0x39;
pub const ASTORE: u8 = 0x3A;
pub const ISTORE_0: u8 = 0x3B;
pub const ISTORE_1: u8 = 0x3C;
pub const ISTORE_2: u8 = 0x3D;
pub const ISTORE_3: u8 = 0x3E;
pub const LSTORE_0: u8 = 0x3F;
pub const LSTORE_1: u8 = 0x40;
pub const LSTORE_2: u8 = 0x41;
pub const LSTORE_3: u8 = 0x42;
pub const FSTORE_0: u8 = 0x43;
pub const FSTORE_1: u8 = 0x44;
pub const FSTORE_2: u8 = 0x45;
pub const FSTORE_3: u8 = 0x46;
pub const DSTORE_0: u8 = 0x47;
pub const DSTORE_1: u8 = 0x48;
pub const DSTORE_2: u8 = 0x49;
pub const DSTORE_3: u8 = 0x4A;
pub const ASTORE_0: u8 = 0x4B;
pub const ASTORE_1: u8 = 0x4C;
pub const ASTORE_2: u8 = 0x4D;
pub const ASTORE_3: u8 = 0x4E;
pub const IINC: u8 = 0x84;
pub const WIDE: u8 = 0xC4;

/// Returns the sort of the local variable accessed by the instruction with `opcode`.
/// The `iinc` instruction and all the loads and stores of one type map to the same sort;
/// references map to [`Sort::Object`].
/// Returns [`None`] if `opcode` is not a local variable access instruction.
#[doc = see_jvm_spec!(6, 5)]
#[must_use]
pub fn type_for_var_opcode(opcode: u8) -> Option<Sort> {
    let sort = match opcode {
        IINC | ILOAD | ISTORE | ILOAD_0..=ILOAD_3 | ISTORE_0..=ISTORE_3 => Sort::Int,
        ALOAD | ASTORE | ALOAD_0..=ALOAD_3 | ASTORE_0..=ASTORE_3 => Sort::Object,
        FLOAD | FSTORE | FLOAD_0..=FLOAD_3 | FSTORE_0..=FSTORE_3 => Sort::Float,
        DLOAD | DSTORE | DLOAD_0..=DLOAD_3 | DSTORE_0..=DSTORE_3 => Sort::Double,
        LLOAD | LSTORE | LLOAD_0..=LLOAD_3 | LSTORE_0..=LSTORE_3 => Sort::Long,
        _ => return None,
    };
    Some(sort)
}

/// Returns the type of the local variable accessed by the instruction with `opcode`.
/// References are typed as `java.lang.Object` since the opcode does not carry the class.
#[must_use]
pub fn field_type_for_var_opcode(opcode: u8) -> Option<FieldType> {
    type_for_var_opcode(opcode).and_then(|sort| match sort {
        Sort::Int => Some(FieldType::Base(PrimitiveType::Int)),
        Sort::Long => Some(FieldType::Base(PrimitiveType::Long)),
        Sort::Float => Some(FieldType::Base(PrimitiveType::Float)),
        Sort::Double => Some(FieldType::Base(PrimitiveType::Double)),
        Sort::Object => Some(FieldType::object()),
        _ => None,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    const FAMILIES: [(Sort, &[u8]); 5] = [
        (
            Sort::Int,
            &[IINC, ILOAD, ISTORE, 0x1A, 0x1B, 0x1C, 0x1D, 0x3B, 0x3C, 0x3D, 0x3E],
        ),
        (
            Sort::Object,
            &[ALOAD, ASTORE, 0x2A, 0x2B, 0x2C, 0x2D, 0x4B, 0x4C, 0x4D, 0x4E],
        ),
        (
            Sort::Float,
            &[FLOAD, FSTORE, 0x22, 0x23, 0x24, 0x25, 0x43, 0x44, 0x45, 0x46],
        ),
        (
            Sort::Double,
            &[DLOAD, DSTORE, 0x26, 0x27, 0x28, 0x29, 0x47, 0x48, 0x49, 0x4A],
        ),
        (
            Sort::Long,
            &[LLOAD, LSTORE, 0x1E, 0x1F, 0x20, 0x21, 0x3F, 0x40, 0x41, 0x42],
        ),
    ];

    fn family_of(opcode: u8) -> Option<Sort> {
        FAMILIES
            .iter()
            .find(|(_, opcodes)| opcodes.contains(&opcode))
            .map(|(sort, _)| *sort)
    }

    proptest! {
        #[test]
        fn matches_families(opcode in any::<u8>()) {
            assert_eq!(type_for_var_opcode(opcode), family_of(opcode));
        }

        #[test]
        fn field_type_agrees_with_sort(opcode in any::<u8>()) {
            let field_type = field_type_for_var_opcode(opcode);
            assert_eq!(field_type.as_ref().map(FieldType::sort), type_for_var_opcode(opcode));
        }
    }

    #[test]
    fn families() {
        for (sort, opcodes) in FAMILIES {
            for &opcode in opcodes {
                assert_eq!(type_for_var_opcode(opcode), Some(sort), "{opcode:#04X}");
            }
        }
    }

    #[test]
    fn non_variable_instructions() {
        // nop, iaload, iastore, iadd, wide, ret, impdep2
        for opcode in [0x00, 0x2E, 0x4F, 0x60, WIDE, 0xA9, 0xFF] {
            assert_eq!(type_for_var_opcode(opcode), None, "{opcode:#04X}");
        }
    }

    #[test]
    fn references_are_objects() {
        assert_eq!(field_type_for_var_opcode(ALOAD), Some(FieldType::object()));
        assert_eq!(
            field_type_for_var_opcode(IINC),
            Some(FieldType::Base(PrimitiveType::Int))
        );
    }
}
