//! CLI entry point for the Booth16 executor binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;

use emulator_core::{parse_object, run, RegisterFile};

const DEFAULT_OBJECT_PATH: &str = "booth.obj";

const USAGE_TEXT: &str = "\
Usage: booth16-run [object]

Execute an assembled object file and print the final register table.

Arguments:
  object       Object file path (default: booth.obj)

Options:
  -h, --help   Show this help message
";

#[derive(Debug, PartialEq, Eq)]
enum ParseResult {
    Run(PathBuf),
    Help,
}

fn parse_args(args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut object: Option<PathBuf> = None;

    for arg in args {
        if arg == "--help" || arg == "-h" {
            return Ok(ParseResult::Help);
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if object.is_some() {
            return Err("multiple object paths provided".to_string());
        }
        object = Some(PathBuf::from(arg));
    }

    Ok(ParseResult::Run(
        object.unwrap_or_else(|| PathBuf::from(DEFAULT_OBJECT_PATH)),
    ))
}

fn run_execute(path: &Path) -> Result<(), i32> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: unable to open object file {}: {e}", path.display());
            return Err(1);
        }
    };

    let words = match parse_object(&text) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}: error: {e}", path.display());
            return Err(1);
        }
    };

    let mut registers = RegisterFile::new();
    if let Err(fault) = run(&mut registers, &words) {
        // Faults halt immediately; no partial register dump is printed.
        eprintln!("error: {fault}");
        return Err(1);
    }

    for line in registers.dump_lines() {
        println!("{line}");
    }

    Ok(())
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Run(path)) => match run_execute(&path) {
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

#[cfg(test)]
mod tests {
    use super::{parse_args, ParseResult, DEFAULT_OBJECT_PATH};
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_the_fixed_object_path() {
        let result = parse_args(std::iter::empty()).expect("no arguments should parse");
        assert_eq!(result, ParseResult::Run(PathBuf::from(DEFAULT_OBJECT_PATH)));
    }

    #[test]
    fn accepts_an_explicit_object_path() {
        let result = parse_args([OsString::from("program.obj")].into_iter())
            .expect("explicit path should parse");
        assert_eq!(result, ParseResult::Run(PathBuf::from("program.obj")));
    }

    #[test]
    fn parses_help_flag() {
        let result =
            parse_args([OsString::from("--help")].into_iter()).expect("help should parse");
        assert_eq!(result, ParseResult::Help);
    }

    #[test]
    fn rejects_unknown_options() {
        let error = parse_args([OsString::from("--frobnicate")].into_iter())
            .expect_err("unknown option should fail");
        assert!(error.contains("unknown option"));
    }

    #[test]
    fn rejects_multiple_object_paths() {
        let error = parse_args([OsString::from("a.obj"), OsString::from("b.obj")].into_iter())
            .expect_err("two paths should fail");
        assert!(error.contains("multiple object paths"));
    }
}
