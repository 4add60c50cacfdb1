//! Core emulator crate for the Booth16 toy CPU.

/// Static ISA tables and field width constants.
pub mod isa;
pub use isa::{
    Funct, Opcode, Register, FUNCT_TABLE, IMMED_BITS, IMMED_MASK, LOAD_IMMED_MAX, OPCODE_TABLE,
    REGISTER_COUNT, RTYPE_OPCODE, SIGNED_IMMED_MAX, SIGNED_IMMED_MIN, WORD_BITS,
};

/// 16-bit instruction word codec.
pub mod word;
pub use word::{encode_itype, encode_rtype, Instruction};

/// Fatal executor fault taxonomy.
pub mod fault;
pub use fault::Fault;

/// Architectural register state.
pub mod state;
pub use state::{binary_pattern, RegisterFile};

/// Booth radix-4 signed multiplier.
pub mod booth;
pub use booth::{booth_multiply, signed_product, OPERAND_BITS, OPERAND_MASK, PRODUCT_MASK};

/// Object file text format.
pub mod object;
pub use object::{format_word, parse_object, parse_word, ObjectError};

/// Linear instruction execution.
pub mod executor;
pub use executor::{run, step};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
