//! Top-level assembly pipeline.
//!
//! Wires the per-line phases together: parse each source line, encode
//! recognized statements, and collect the emitted words in order. The
//! pipeline stops at the first error — there is no skip-and-continue
//! mode and no partial output.

use emulator_core::format_word;

use crate::encoder::encode_statement;
use crate::errors::AssemblerError;
use crate::parser::{parse_line, strip_comment, ParsedLine};

/// Result of assembly: the word sequence plus a source listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleResult {
    /// Assembled instruction words in program order.
    pub words: Vec<u16>,
    /// Line-by-line listing for verbose output.
    pub listing: Vec<ListingEntry>,
}

/// One listing entry: a source statement and the words it emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// 1-indexed source line number.
    pub line: usize,
    /// The statement text as written (trimmed).
    pub source: String,
    /// Words emitted for this statement (one, or two for `li`).
    pub words: Vec<u16>,
}

/// Assembles source text into instruction words.
///
/// # Errors
///
/// Returns the first [`AssemblerError`] encountered, tagged with its
/// source line; nothing is emitted for a failing program.
pub fn assemble_source(source: &str) -> Result<AssembleResult, AssemblerError> {
    let mut words = Vec::new();
    let mut listing = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(raw_line, line_number)? {
            ParsedLine::Blank => {}
            ParsedLine::Instruction(statement) => {
                let emitted = encode_statement(statement, line_number)?;
                listing.push(ListingEntry {
                    line: line_number,
                    source: statement_text(raw_line),
                    words: emitted.clone(),
                });
                words.extend(emitted);
            }
        }
    }

    Ok(AssembleResult { words, listing })
}

/// Renders assembled words as object file text, one word per line.
#[must_use]
pub fn render_object(words: &[u16]) -> String {
    words
        .iter()
        .map(|&word| format_word(word) + "\n")
        .collect()
}

fn statement_text(raw_line: &str) -> String {
    strip_comment(raw_line).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{assemble_source, render_object};
    use crate::errors::AssemblerErrorKind;

    const PROGRAM: &str = "\
# stage the operands
li $r1 10
li $r2 3
li $r3 6       # twice the multiplicand, staged for bth
bth $r3 $r1 $r2
";

    #[test]
    fn assembles_statements_in_order() {
        let result = assemble_source(PROGRAM).expect("program assembles");

        // Three li expansions plus the bth word.
        assert_eq!(result.words.len(), 7);
        assert_eq!(result.listing.len(), 4);
        assert_eq!(result.listing[0].words.len(), 2);
        assert_eq!(result.listing[3].source, "bth $r3 $r1 $r2");
        assert_eq!(result.listing[3].words.len(), 1);
    }

    #[test]
    fn empty_source_assembles_to_nothing() {
        let result = assemble_source("\n# only comments\n\n").expect("assembles");
        assert!(result.words.is_empty());
        assert!(result.listing.is_empty());
    }

    #[test]
    fn first_error_aborts_with_its_line() {
        let source = "li $r1 1\nbogus line\nli $r2 2\n";
        let error = assemble_source(source).expect_err("should fail");
        assert_eq!(error.line, Some(2));
        assert!(matches!(error.kind, AssemblerErrorKind::Parse(_)));
    }

    #[test]
    fn range_violations_abort_with_their_line() {
        let source = "li $r1 1\nli $r2 2\naddi $r1 40\n";
        let error = assemble_source(source).expect_err("should fail");
        assert_eq!(error.line, Some(3));
        assert!(matches!(error.kind, AssemblerErrorKind::Range(_)));
    }

    #[test]
    fn object_text_is_one_sixteen_bit_line_per_word() {
        let result = assemble_source("li $r1 10\n").expect("assembles");
        let object = render_object(&result.words);

        let lines: Vec<&str> = object.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert_eq!(line.len(), 16);
            assert!(line.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn object_text_of_an_empty_program_is_empty() {
        assert_eq!(render_object(&[]), "");
    }
}
