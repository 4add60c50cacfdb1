//! Assembly statement parser.
//!
//! One statement per line. Parsing is whitespace- and comma-insensitive:
//! a `#` starts a comment running to the end of the line, commas between
//! operands fold to whitespace, and blank or comment-only lines parse to
//! [`ParsedLine::Blank`]. Anything that matches no recognized statement
//! shape is a structured error carrying the 1-based line number.

use emulator_core::{Funct, Opcode, Register};

use crate::mnemonic::{resolve_mnemonic, MnemonicKind};

/// A parsed statement, ready for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    /// R-type: `<funct> $rd $rs $rt`.
    Register {
        /// Sub-operation selector.
        funct: Funct,
        /// Destination register (first operand).
        rd: Register,
        /// First source register.
        rs: Register,
        /// Second source register.
        rt: Register,
    },
    /// I-type: `<opcode> $rt <signed immediate>`.
    Immediate {
        /// The assigned opcode.
        opcode: Opcode,
        /// Target register.
        rt: Register,
        /// Immediate value as written (range-checked during encoding).
        value: i64,
    },
    /// Pseudo-op: `li $rt <unsigned immediate>`.
    LoadImmediate {
        /// Target register.
        rt: Register,
        /// Immediate value as written (range-checked during encoding).
        value: i64,
    },
}

/// Result of parsing a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or comment-only line.
    Blank,
    /// A recognized statement.
    Instruction(Statement),
}

/// Parse error with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-indexed line number.
    pub line: usize,
    /// Kind of parse error.
    pub kind: ParseErrorKind,
}

/// Classification of parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The mnemonic has no table entry.
    UnknownMnemonic(String),
    /// A register operand is not `$s0`/`$r1`..`$r7`.
    InvalidRegister(String),
    /// An immediate operand is neither signed decimal nor `0x` hex.
    InvalidImmediate(String),
    /// The statement has the wrong number of operands for its shape.
    OperandCount {
        /// Operands the statement shape requires.
        expected: usize,
        /// Operands found on the line.
        found: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMnemonic(m) => write!(f, "can't parse instruction '{m}'"),
            Self::InvalidRegister(r) => write!(f, "invalid register: {r}"),
            Self::InvalidImmediate(v) => write!(f, "invalid immediate value: {v}"),
            Self::OperandCount { expected, found } => {
                write!(f, "expected {expected} operands, found {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Result of parsing a single line.
pub type ParseResult = Result<ParsedLine, ParseError>;

/// Parses one source line.
///
/// # Errors
///
/// Returns a [`ParseError`] tagged with `line_number` if the line matches
/// no recognized statement shape.
pub fn parse_line(line: &str, line_number: usize) -> ParseResult {
    let stripped = strip_comment(line);
    let folded = stripped.replace(',', " ");
    let mut tokens = folded.split_whitespace();

    let Some(mnemonic) = tokens.next() else {
        return Ok(ParsedLine::Blank);
    };
    let operands: Vec<&str> = tokens.collect();

    let kind = resolve_mnemonic(mnemonic).ok_or_else(|| ParseError {
        line: line_number,
        kind: ParseErrorKind::UnknownMnemonic(stripped.trim().to_string()),
    })?;

    let statement = match kind {
        MnemonicKind::Register(funct) => {
            let [rd, rs, rt] = expect_operands(&operands, line_number)?;
            Statement::Register {
                funct,
                rd: parse_register(rd, line_number)?,
                rs: parse_register(rs, line_number)?,
                rt: parse_register(rt, line_number)?,
            }
        }
        MnemonicKind::Immediate(opcode) => {
            let [rt, immed] = expect_operands(&operands, line_number)?;
            Statement::Immediate {
                opcode,
                rt: parse_register(rt, line_number)?,
                value: parse_immediate(immed, line_number)?,
            }
        }
        MnemonicKind::LoadImmediate => {
            let [rt, immed] = expect_operands(&operands, line_number)?;
            Statement::LoadImmediate {
                rt: parse_register(rt, line_number)?,
                value: parse_immediate(immed, line_number)?,
            }
        }
    };

    Ok(ParsedLine::Instruction(statement))
}

pub(crate) fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |pos| &line[..pos])
}

fn expect_operands<'a, const N: usize>(
    operands: &[&'a str],
    line: usize,
) -> Result<[&'a str; N], ParseError> {
    <[&'a str; N]>::try_from(operands).map_err(|_| ParseError {
        line,
        kind: ParseErrorKind::OperandCount {
            expected: N,
            found: operands.len(),
        },
    })
}

fn parse_register(token: &str, line: usize) -> Result<Register, ParseError> {
    token
        .strip_prefix('$')
        .and_then(Register::from_name)
        .ok_or_else(|| ParseError {
            line,
            kind: ParseErrorKind::InvalidRegister(token.to_string()),
        })
}

/// Parses a signed decimal or `0x`-prefixed hex immediate.
fn parse_immediate(token: &str, line: usize) -> Result<i64, ParseError> {
    let error = || ParseError {
        line,
        kind: ParseErrorKind::InvalidImmediate(token.to_string()),
    };

    let (negative, magnitude_text) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let magnitude = if let Some(hex) = magnitude_text.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).map_err(|_| error())?
    } else {
        magnitude_text.parse::<i64>().map_err(|_| error())?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::{parse_line, ParseErrorKind, ParsedLine, Statement};
    use emulator_core::{Funct, Opcode, Register};

    fn statement(line: &str) -> Statement {
        match parse_line(line, 1).expect("line should parse") {
            ParsedLine::Instruction(statement) => statement,
            ParsedLine::Blank => panic!("expected an instruction: {line:?}"),
        }
    }

    fn error_kind(line: &str) -> ParseErrorKind {
        parse_line(line, 7).expect_err("line should fail").kind
    }

    #[test]
    fn rtype_statement_parses_destination_first() {
        assert_eq!(
            statement("bth $r3 $r1 $r2"),
            Statement::Register {
                funct: Funct::Bth,
                rd: Register::R3,
                rs: Register::R1,
                rt: Register::R2,
            }
        );
    }

    #[test]
    fn commas_between_operands_are_optional() {
        assert_eq!(
            statement("add $r1, $r2, $r3"),
            statement("add $r1 $r2 $r3")
        );
    }

    #[test]
    fn itype_statement_parses_signed_and_hex_immediates() {
        assert_eq!(
            statement("addi $r1 -9"),
            Statement::Immediate {
                opcode: Opcode::Addi,
                rt: Register::R1,
                value: -9,
            }
        );
        assert_eq!(
            statement("lw $r2 0x1f"),
            Statement::Immediate {
                opcode: Opcode::Lw,
                rt: Register::R2,
                value: 31,
            }
        );
    }

    #[test]
    fn li_statement_parses_as_the_pseudo_op() {
        assert_eq!(
            statement("li $r1 4095"),
            Statement::LoadImmediate {
                rt: Register::R1,
                value: 4095,
            }
        );
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("", 1), Ok(ParsedLine::Blank));
        assert_eq!(parse_line("   \t ", 1), Ok(ParsedLine::Blank));
        assert_eq!(parse_line("# a full-line comment", 1), Ok(ParsedLine::Blank));
    }

    #[test]
    fn trailing_comments_are_stripped() {
        assert_eq!(
            statement("li $r1 10   # load the multiplier"),
            statement("li $r1 10")
        );
    }

    #[test]
    fn unknown_mnemonic_reports_the_statement_text() {
        assert_eq!(
            error_kind("jmp $r1 $r2 $r3"),
            ParseErrorKind::UnknownMnemonic("jmp $r1 $r2 $r3".to_string())
        );
    }

    #[test]
    fn bad_registers_are_rejected() {
        assert_eq!(
            error_kind("add $r1 $r2 $r9"),
            ParseErrorKind::InvalidRegister("$r9".to_string())
        );
        assert_eq!(
            error_kind("add r1 $r2 $r3"),
            ParseErrorKind::InvalidRegister("r1".to_string())
        );
        assert_eq!(
            error_kind("add $r1 $r2 $r0"),
            ParseErrorKind::InvalidRegister("$r0".to_string())
        );
    }

    #[test]
    fn s0_is_a_valid_register_name() {
        assert_eq!(
            statement("add $s0 $r1 $r2"),
            Statement::Register {
                funct: Funct::Add,
                rd: Register::S0,
                rs: Register::R1,
                rt: Register::R2,
            }
        );
    }

    #[test]
    fn malformed_immediates_are_rejected() {
        assert_eq!(
            error_kind("li $r1 ten"),
            ParseErrorKind::InvalidImmediate("ten".to_string())
        );
        assert_eq!(
            error_kind("li $r1 1f"),
            ParseErrorKind::InvalidImmediate("1f".to_string())
        );
    }

    #[test]
    fn operand_count_mismatches_are_rejected() {
        assert_eq!(
            error_kind("add $r1 $r2"),
            ParseErrorKind::OperandCount {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            error_kind("li $r1 1 2"),
            ParseErrorKind::OperandCount {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn errors_carry_the_source_line_number() {
        let error = parse_line("bogus", 42).expect_err("should fail");
        assert_eq!(error.line, 42);
    }
}
