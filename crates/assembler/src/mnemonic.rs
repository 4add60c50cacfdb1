//! Mnemonic resolution derived from emulator ISA tables.
//!
//! The assembler never carries its own opcode or funct numbers: statement
//! kinds resolve through `emulator-core`'s tables so the two stages cannot
//! diverge. The only mnemonic with assembler-local meaning is `li`, which
//! owns an opcode table slot but always assembles as its two-word
//! expansion.

use emulator_core::{Funct, Opcode};

/// The load-immediate pseudo-op mnemonic.
pub const LOAD_IMMEDIATE_MNEMONIC: &str = "li";

/// Statement kind selected by a resolved mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicKind {
    /// R-type statement: three register operands.
    Register(Funct),
    /// I-type statement: register plus signed immediate.
    Immediate(Opcode),
    /// `li` pseudo-op: register plus unsigned immediate, two words.
    LoadImmediate,
}

/// Resolves a mnemonic string, ASCII case-insensitive.
#[must_use]
pub fn resolve_mnemonic(name: &str) -> Option<MnemonicKind> {
    if name.eq_ignore_ascii_case(LOAD_IMMEDIATE_MNEMONIC) {
        return Some(MnemonicKind::LoadImmediate);
    }
    if let Some(funct) = Funct::from_mnemonic(name) {
        return Some(MnemonicKind::Register(funct));
    }
    Opcode::from_mnemonic(name).map(MnemonicKind::Immediate)
}
