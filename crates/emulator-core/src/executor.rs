//! Linear instruction execution.
//!
//! The executor makes one pass over an assembled word sequence: decode,
//! dispatch to the R-type or I-type handler, mutate the register file.
//! There is no program counter arithmetic and no control flow; the first
//! fault stops the run with the registers left as they were before the
//! faulting word.

use crate::booth::{booth_multiply, OPERAND_MASK};
use crate::fault::Fault;
use crate::isa::{Funct, Opcode, Register};
use crate::state::RegisterFile;
use crate::word::Instruction;

/// Executes an assembled program against a register file.
///
/// # Errors
///
/// Stops at the first faulting word and returns its [`Fault`]; words after
/// the fault are not processed.
pub fn run(registers: &mut RegisterFile, words: &[u16]) -> Result<(), Fault> {
    for &word in words {
        step(registers, word)?;
    }
    Ok(())
}

/// Decodes and executes a single instruction word.
///
/// # Errors
///
/// Returns a [`Fault`] for an unassigned opcode or funct, or for a
/// table-reserved operation with no execution semantics.
pub fn step(registers: &mut RegisterFile, word: u16) -> Result<(), Fault> {
    match Instruction::decode(word)? {
        Instruction::RType { rs, rt, rd, funct } => execute_rtype(registers, rs, rt, rd, funct),
        Instruction::IType {
            opcode, rt, immed, ..
        } => execute_itype(registers, opcode, rt, immed),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn execute_rtype(
    registers: &mut RegisterFile,
    rs: Register,
    rt: Register,
    rd: Register,
    funct: Funct,
) -> Result<(), Fault> {
    match funct {
        Funct::Add => {
            let value = registers.get(rs).wrapping_add(registers.get(rt));
            registers.set(rd, value);
            Ok(())
        }
        Funct::Sub => {
            let value = registers.get(rs).wrapping_sub(registers.get(rt));
            registers.set(rd, value);
            Ok(())
        }
        Funct::Sll => {
            // Shift amount wraps at the register width; results are kept
            // unreduced rather than truncated to the operand field.
            let amount = (registers.get(rt) & 0x3F) as u32;
            registers.set(rd, registers.get(rs).wrapping_shl(amount));
            Ok(())
        }
        Funct::Bth => {
            let product = booth_multiply(
                operand_pattern(registers.get(rs)),
                operand_pattern(registers.get(rt)),
                operand_pattern(registers.get(Register::R3)),
            );
            registers.set(rd, i64::from(product));
            Ok(())
        }
        Funct::Srl | Funct::Mult => Err(Fault::Unimplemented {
            mnemonic: funct.mnemonic(),
        }),
    }
}

fn execute_itype(
    registers: &mut RegisterFile,
    opcode: Opcode,
    rt: Register,
    immed: u8,
) -> Result<(), Fault> {
    match opcode {
        Opcode::Lui => {
            registers.set(rt, i64::from(immed));
            Ok(())
        }
        Opcode::Ori => {
            registers.set(rt, registers.get(rt) | i64::from(immed));
            Ok(())
        }
        Opcode::Lw | Opcode::Sw | Opcode::Andi | Opcode::Addi | Opcode::Li => {
            Err(Fault::Unimplemented {
                mnemonic: opcode.mnemonic(),
            })
        }
    }
}

/// Reduces a register value to the 6-bit operand pattern the multiplier
/// consumes.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn operand_pattern(value: i64) -> u16 {
    (value & OPERAND_MASK as i64) as u16
}
