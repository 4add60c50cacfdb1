//! Instruction encoding and immediate range checks.
//!
//! Converts parsed statements into instruction words. Signed I-type
//! immediates must fit the 6-bit two's-complement range and pack as their
//! unsigned bit pattern; the `li` pseudo-op takes a 12-bit unsigned value
//! and expands to exactly two words.

use emulator_core::{
    encode_itype, encode_rtype, Opcode, Register, IMMED_BITS, IMMED_MASK, LOAD_IMMED_MAX,
    SIGNED_IMMED_MAX, SIGNED_IMMED_MIN,
};

use crate::parser::Statement;

/// Encoding error with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    /// 1-indexed line number.
    pub line: usize,
    /// Kind of encoding error.
    pub kind: EncodeErrorKind,
}

/// Classification of encoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeErrorKind {
    /// Signed immediate outside the 6-bit two's-complement range.
    SignedImmediateOutOfRange {
        /// The value as written.
        value: i64,
    },
    /// `li` immediate outside the unsigned 12-bit range.
    UnsignedImmediateOutOfRange {
        /// The value as written.
        value: i64,
    },
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignedImmediateOutOfRange { value } => write!(
                f,
                "signed value {value} out of range [{SIGNED_IMMED_MIN}, {SIGNED_IMMED_MAX}]"
            ),
            Self::UnsignedImmediateOutOfRange { value } => {
                write!(f, "unsigned value {value} out of range [0, {LOAD_IMMED_MAX}]")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encodes one statement into its instruction words.
///
/// Every statement emits one word except the `li` pseudo-op, which emits
/// its `lui`/`ori` pair.
///
/// # Errors
///
/// Returns [`EncodeError`] tagged with `line` when an immediate violates
/// its range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_statement(statement: Statement, line: usize) -> Result<Vec<u16>, EncodeError> {
    match statement {
        Statement::Register { funct, rd, rs, rt } => Ok(vec![encode_rtype(rd, rs, rt, funct)]),
        Statement::Immediate { opcode, rt, value } => {
            if !(SIGNED_IMMED_MIN..=SIGNED_IMMED_MAX).contains(&value) {
                return Err(EncodeError {
                    line,
                    kind: EncodeErrorKind::SignedImmediateOutOfRange { value },
                });
            }
            // Negative values pack as their two's-complement bit pattern.
            let immed = (value & i64::from(IMMED_MASK)) as u8;
            Ok(vec![encode_itype(opcode, Register::S0, rt, immed)])
        }
        Statement::LoadImmediate { rt, value } => {
            if !(0..=LOAD_IMMED_MAX).contains(&value) {
                return Err(EncodeError {
                    line,
                    kind: EncodeErrorKind::UnsignedImmediateOutOfRange { value },
                });
            }
            let high = ((value >> IMMED_BITS) & i64::from(IMMED_MASK)) as u8;
            let low = (value & i64::from(IMMED_MASK)) as u8;
            // The lui word carries rs clear; the ori word repeats rt in
            // its rs field.
            Ok(vec![
                encode_itype(Opcode::Lui, Register::S0, rt, high),
                encode_itype(Opcode::Ori, rt, rt, low),
            ])
        }
    }
}
