//! CLI entry point for the Booth16 assembler binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use assembler::assembler::{assemble_source, render_object, AssembleResult};
use assembler::errors::{AssemblerError, AssemblerErrorKind};
use emulator_core::format_word;
#[cfg(test)]
use tempfile as _;

const DEFAULT_INPUT_PATH: &str = "booth.asm";

const USAGE_TEXT: &str = "\
Usage: booth16-asm [input] [options]

Assemble source to an object file of binary instruction words.

Arguments:
  input                Source file path (default: booth.asm)

Options:
  -o, --output <file>  Object file path (default: input stem + .obj)
  -v, --verbose        Print listing to stderr
  -h, --help           Show this help message

Examples:
  booth16-asm
  booth16-asm program.asm -o program.obj
";

#[derive(Debug, PartialEq, Eq)]
struct BuildArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
}

#[derive(Debug)]
enum ParseResult {
    Build(BuildArgs),
    Help,
}

#[allow(clippy::while_let_on_iterator)]
fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Ok(ParseResult::Help);
        }

        if arg == "--verbose" || arg == "-v" {
            verbose = true;
            continue;
        }

        if arg == "-o" || arg == "--output" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for -o".to_string())?;
            output = Some(PathBuf::from(value));
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if input.is_some() {
            return Err("multiple input paths provided".to_string());
        }
        input = Some(PathBuf::from(arg));
    }

    Ok(ParseResult::Build(BuildArgs {
        input: input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
        output,
        verbose,
    }))
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{stem}.obj"))
}

fn run_build(args: BuildArgs) -> Result<(), i32> {
    let source = match fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "error: unable to open input file {}: {e}",
                args.input.display()
            );
            return Err(1);
        }
    };

    let result = match assemble_source(&source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e.format_for_stderr());
            return Err(1);
        }
    };

    let output_path = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));

    if let Err(e) = fs::write(&output_path, render_object(&result.words)) {
        let error = AssemblerError::new(AssemblerErrorKind::Io(format!(
            "unable to write output file {}: {e}",
            output_path.display()
        )));
        eprintln!("{}", error.format_for_stderr());
        return Err(1);
    }

    if args.verbose {
        print_listing(&result);
    }

    println!(
        "Assembled {} ({} words) -> {}",
        args.input.display(),
        result.words.len(),
        output_path.display()
    );

    Ok(())
}

fn print_listing(result: &AssembleResult) {
    for entry in &result.listing {
        let words: String = entry
            .words
            .iter()
            .map(|&word| format_word(word))
            .collect::<Vec<_>>()
            .join(" ");

        eprintln!("{:>4}: {:<33} ; {}", entry.line, words, entry.source);
    }
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Build(args)) => match run_build(args) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{USAGE_TEXT}");
            1
        }
    };

    std::process::exit(exit_code);
}
