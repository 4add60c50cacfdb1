//! Booth16 assembler library.

use emulator_core as _;
#[cfg(test)]
use tempfile as _;

/// Top-level assembly pipeline.
pub mod assembler;
/// Instruction encoding and immediate range checks.
pub mod encoder;
/// Structured assembler error types.
pub mod errors;
/// Mnemonic resolution against emulator ISA tables.
pub mod mnemonic;
/// Assembly statement parser.
pub mod parser;
