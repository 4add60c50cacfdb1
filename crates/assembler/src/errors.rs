//! Structured error reporting for assembler phases.
//!
//! All assembler failures funnel into [`AssemblerError`], which pairs a
//! classified kind with the 1-based source line where it occurred. The
//! CLI renders errors to stderr as:
//!
//! ```text
//! line 3: error: signed value 40 out of range [-32, 31]
//! ```
//!
//! Assembly aborts at the first error; no partial object file is written.

use std::fmt;

use crate::encoder::EncodeError;
use crate::parser::ParseError;

/// A unified assembler error with source context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerError {
    /// The kind of error.
    pub kind: AssemblerErrorKind,
    /// 1-indexed source line if the error has one.
    pub line: Option<usize>,
}

/// Classification of assembler errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblerErrorKind {
    /// Statement matched no recognized grammar.
    Parse(ParseError),
    /// Immediate value violated its range.
    Range(EncodeError),
    /// I/O error reading or writing a file.
    Io(String),
}

impl AssemblerError {
    /// Creates an error without source context.
    #[must_use]
    pub const fn new(kind: AssemblerErrorKind) -> Self {
        Self { kind, line: None }
    }

    /// Formats the error for stderr output.
    #[must_use]
    pub fn format_for_stderr(&self) -> String {
        self.line.map_or_else(
            || format!("error: {}", self.kind),
            |line| format!("line {line}: error: {}", self.kind),
        )
    }
}

impl fmt::Display for AssemblerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl fmt::Display for AssemblerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Range(e) => write!(f, "{e}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for AssemblerError {}

impl From<ParseError> for AssemblerError {
    fn from(e: ParseError) -> Self {
        Self {
            line: Some(e.line),
            kind: AssemblerErrorKind::Parse(e),
        }
    }
}

impl From<EncodeError> for AssemblerError {
    fn from(e: EncodeError) -> Self {
        Self {
            line: Some(e.line),
            kind: AssemblerErrorKind::Range(e),
        }
    }
}
