//! Static ISA tables for the Booth16 toy CPU.
//!
//! The tables here are the single source of truth for the mnemonic ↔ code
//! bijections used by both the assembler (encode direction) and the
//! executor (decode direction). Any code value absent from a table is
//! illegal by definition.

/// Total instruction word width in bits.
pub const WORD_BITS: u32 = 16;
/// Width of the opcode field in bits.
pub const OPCODE_BITS: u32 = 4;
/// Width of one register index field in bits.
pub const REGISTER_BITS: u32 = 3;
/// Width of the funct field in bits.
pub const FUNCT_BITS: u32 = 3;
/// Width of the immediate field in bits.
pub const IMMED_BITS: u32 = 6;
/// Mask covering the immediate field.
pub const IMMED_MASK: u16 = (1 << IMMED_BITS) - 1;

/// Smallest signed value representable in the immediate field.
pub const SIGNED_IMMED_MIN: i64 = -(1 << (IMMED_BITS - 1));
/// Largest signed value representable in the immediate field.
pub const SIGNED_IMMED_MAX: i64 = (1 << (IMMED_BITS - 1)) - 1;
/// Largest value accepted by the `li` pseudo-op (two immediate halves).
pub const LOAD_IMMED_MAX: i64 = (1 << (2 * IMMED_BITS)) - 1;

/// The opcode value that selects the R-type word layout.
pub const RTYPE_OPCODE: u8 = 0;

/// Number of architecturally visible registers (`s0, r1..r7`).
pub const REGISTER_COUNT: usize = 8;

/// Assigned I-type opcodes (`opcode` field, bits 15..12).
///
/// Opcode `0` is not listed: it selects the R-type layout and defers to
/// the funct table. `li` owns a table slot but is only ever assembled as
/// the two-word `lui`/`ori` expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Lw = 0x1,
    Sw = 0x2,
    Li = 0x3,
    Lui = 0x4,
    Ori = 0x5,
    Andi = 0x6,
    Addi = 0x7,
}

/// Single source-of-truth opcode table: `(code, mnemonic, opcode)`.
pub const OPCODE_TABLE: &[(u8, &str, Opcode)] = &[
    (0x1, "lw", Opcode::Lw),
    (0x2, "sw", Opcode::Sw),
    (0x3, "li", Opcode::Li),
    (0x4, "lui", Opcode::Lui),
    (0x5, "ori", Opcode::Ori),
    (0x6, "andi", Opcode::Andi),
    (0x7, "addi", Opcode::Addi),
];

impl Opcode {
    /// Converts a 4-bit opcode field value into an assigned opcode.
    ///
    /// `None` means the value has no table entry (including `0`, which is
    /// the R-type selector rather than an I-type opcode).
    #[must_use]
    pub const fn from_u4(code: u8) -> Option<Self> {
        match code {
            0x1 => Some(Self::Lw),
            0x2 => Some(Self::Sw),
            0x3 => Some(Self::Li),
            0x4 => Some(Self::Lui),
            0x5 => Some(Self::Ori),
            0x6 => Some(Self::Andi),
            0x7 => Some(Self::Addi),
            _ => None,
        }
    }

    /// Returns the 4-bit field value for this opcode.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the assembly mnemonic for this opcode.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Li => "li",
            Self::Lui => "lui",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Addi => "addi",
        }
    }

    /// Resolves a mnemonic string to its opcode, ASCII case-insensitive.
    #[must_use]
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        OPCODE_TABLE
            .iter()
            .find_map(|(_, mnemonic, opcode)| mnemonic.eq_ignore_ascii_case(name).then_some(*opcode))
    }
}

/// Assigned R-type functs (`funct` field, bits 2..0).
///
/// `srl` and `mult` are reserved table slots: they assemble and decode but
/// carry no execution semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Funct {
    Add = 0x0,
    Sub = 0x1,
    Bth = 0x2,
    Sll = 0x3,
    Srl = 0x4,
    Mult = 0x5,
}

/// Single source-of-truth funct table: `(code, mnemonic, funct)`.
pub const FUNCT_TABLE: &[(u8, &str, Funct)] = &[
    (0x0, "add", Funct::Add),
    (0x1, "sub", Funct::Sub),
    (0x2, "bth", Funct::Bth),
    (0x3, "sll", Funct::Sll),
    (0x4, "srl", Funct::Srl),
    (0x5, "mult", Funct::Mult),
];

impl Funct {
    /// Converts a 3-bit funct field value into an assigned funct.
    #[must_use]
    pub const fn from_u3(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(Self::Add),
            0x1 => Some(Self::Sub),
            0x2 => Some(Self::Bth),
            0x3 => Some(Self::Sll),
            0x4 => Some(Self::Srl),
            0x5 => Some(Self::Mult),
            _ => None,
        }
    }

    /// Returns the 3-bit field value for this funct.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the assembly mnemonic for this funct.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Bth => "bth",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Mult => "mult",
        }
    }

    /// Resolves a mnemonic string to its funct, ASCII case-insensitive.
    #[must_use]
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        FUNCT_TABLE
            .iter()
            .find_map(|(_, mnemonic, funct)| mnemonic.eq_ignore_ascii_case(name).then_some(*funct))
    }
}

/// Architecturally visible register identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Register {
    S0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
}

impl Register {
    /// Ordered list of all architectural registers.
    pub const ALL: [Self; REGISTER_COUNT] = [
        Self::S0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
    ];

    /// Returns the array index for this register (`0..=7`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decodes a 3-bit register field value into a register.
    #[must_use]
    pub const fn from_u3(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::S0),
            1 => Some(Self::R1),
            2 => Some(Self::R2),
            3 => Some(Self::R3),
            4 => Some(Self::R4),
            5 => Some(Self::R5),
            6 => Some(Self::R6),
            7 => Some(Self::R7),
            _ => None,
        }
    }

    /// Decodes a register field that has already been masked to 3 bits.
    pub(crate) const fn from_field(bits: u8) -> Self {
        match bits & 0x7 {
            0 => Self::S0,
            1 => Self::R1,
            2 => Self::R2,
            3 => Self::R3,
            4 => Self::R4,
            5 => Self::R5,
            6 => Self::R6,
            _ => Self::R7,
        }
    }

    /// Returns the assembly name for this register.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::S0 => "s0",
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::R3 => "r3",
            Self::R4 => "r4",
            Self::R5 => "r5",
            Self::R6 => "r6",
            Self::R7 => "r7",
        }
    }

    /// Resolves a register name (without the `$` sigil) to a register.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|register| register.name().eq_ignore_ascii_case(name))
            .copied()
    }
}
