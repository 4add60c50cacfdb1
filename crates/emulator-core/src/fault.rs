use thiserror::Error;

/// Fatal executor faults.
///
/// Every fault halts execution immediately: no later word is processed and
/// no partial register dump is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Fault {
    /// The opcode field holds a value with no ISA table entry.
    #[error("opcode {code:#06b} has no ISA table entry")]
    UnknownOpcode {
        /// The offending 4-bit field value.
        code: u8,
    },
    /// An R-type word's funct field holds a value with no ISA table entry.
    #[error("funct {code:#05b} has no ISA table entry")]
    UnknownFunct {
        /// The offending 3-bit field value.
        code: u8,
    },
    /// The operation owns a table slot but has no execution semantics.
    #[error("'{mnemonic}' is reserved by the ISA table and cannot be executed")]
    Unimplemented {
        /// Mnemonic of the reserved operation.
        mnemonic: &'static str,
    },
}
