//! 16-bit instruction word codec.
//!
//! Packs and unpacks the fixed field layout:
//! `opcode[15:12] | rs[11:9] | rt[8:6] | rd[5:3] | funct[2:0]` for R-type
//! words (opcode `0`) and `opcode[15:12] | rs[11:9] | rt[8:6] | immed[5:0]`
//! for I-type words. Decoding validates the opcode and funct fields against
//! the ISA tables; an unassigned value is a fault, never a silent no-op.

use crate::fault::Fault;
use crate::isa::{Funct, Opcode, Register, IMMED_MASK, RTYPE_OPCODE};

/// Bit offset of the opcode field.
pub const OPCODE_SHIFT: u32 = 12;
/// Bit offset of the `rs` register field.
pub const RS_SHIFT: u32 = 9;
/// Bit offset of the `rt` register field.
pub const RT_SHIFT: u32 = 6;
/// Bit offset of the `rd` register field (R-type only).
pub const RD_SHIFT: u32 = 3;

/// A decoded instruction word with all fields extracted and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Register-format instruction (opcode `0`).
    RType {
        /// First source register.
        rs: Register,
        /// Second source register.
        rt: Register,
        /// Destination register.
        rd: Register,
        /// Sub-operation selector.
        funct: Funct,
    },
    /// Immediate-format instruction (nonzero opcode).
    IType {
        /// The assigned opcode.
        opcode: Opcode,
        /// First register field (unused by the defined operations).
        rs: Register,
        /// Target register.
        rt: Register,
        /// 6-bit immediate field value.
        immed: u8,
    },
}

#[allow(clippy::cast_possible_truncation)]
const fn register_field(word: u16, shift: u32) -> Register {
    Register::from_field(((word >> shift) & 0x7) as u8)
}

/// Packs an R-type instruction word from typed fields.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode_rtype(rd: Register, rs: Register, rt: Register, funct: Funct) -> u16 {
    ((rs.index() as u16) << RS_SHIFT)
        | ((rt.index() as u16) << RT_SHIFT)
        | ((rd.index() as u16) << RD_SHIFT)
        | funct.code() as u16
}

/// Packs an I-type instruction word from typed fields.
///
/// The immediate is masked to its 6-bit field; callers are responsible for
/// range validation before packing.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode_itype(opcode: Opcode, rs: Register, rt: Register, immed: u8) -> u16 {
    ((opcode.code() as u16) << OPCODE_SHIFT)
        | ((rs.index() as u16) << RS_SHIFT)
        | ((rt.index() as u16) << RT_SHIFT)
        | (immed as u16 & IMMED_MASK)
}

impl Instruction {
    /// Decodes a 16-bit instruction word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnknownOpcode`] for an opcode field with no table
    /// entry and [`Fault::UnknownFunct`] for an R-type word whose funct
    /// field is unassigned.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn decode(word: u16) -> Result<Self, Fault> {
        let opcode_bits = (word >> OPCODE_SHIFT) as u8;
        let rs = register_field(word, RS_SHIFT);
        let rt = register_field(word, RT_SHIFT);

        if opcode_bits == RTYPE_OPCODE {
            let funct_bits = (word & 0x7) as u8;
            let Some(funct) = Funct::from_u3(funct_bits) else {
                return Err(Fault::UnknownFunct { code: funct_bits });
            };
            return Ok(Self::RType {
                rs,
                rt,
                rd: register_field(word, RD_SHIFT),
                funct,
            });
        }

        let Some(opcode) = Opcode::from_u4(opcode_bits) else {
            return Err(Fault::UnknownOpcode { code: opcode_bits });
        };
        Ok(Self::IType {
            opcode,
            rs,
            rt,
            immed: (word & IMMED_MASK) as u8,
        })
    }

    /// Re-encodes this instruction back to its 16-bit word.
    #[must_use]
    pub const fn encode(self) -> u16 {
        match self {
            Self::RType { rs, rt, rd, funct } => encode_rtype(rd, rs, rt, funct),
            Self::IType {
                opcode,
                rs,
                rt,
                immed,
            } => encode_itype(opcode, rs, rt, immed),
        }
    }
}
