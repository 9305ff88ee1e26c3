//! pw_cli — shared argument types and helpers for the three command-line
//! programs (`parse-print`, `solve`, `check`).
//!
//! Grounded in `vm_cli::args`'s `clap::Parser` derive style and
//! `vm_cli::main`'s `ExitCode`-returning `run()` pattern, adapted to the
//! original's **positional**, mandatory arguments
//! (`original_source/code/*Main.cpp` all count `argc` rather than parsing
//! flags) instead of the teacher's flag-based manifest/explicit modes.

use std::process::ExitCode;

use clap::Parser;

/// `parse-print <opts-in> <cons-in> <opts-out> <cons-out>`
#[derive(Parser, Debug)]
#[command(name = "parse-print", about = "Round-trip an options/constraints pair through the parser and printer")]
pub struct ParsePrintArgs {
    pub options_in: String,
    pub constraints_in: String,
    pub options_out: String,
    pub constraints_out: String,
}

/// `solve <opts-in> <cons-in> <suite-out> [--seed N] [-v/--verbose]`
#[derive(Parser, Debug)]
#[command(name = "solve", about = "Generate a pairwise test suite from an options/constraints pair")]
pub struct SolveArgs {
    pub options_in: String,
    pub constraints_in: String,
    pub suite_out: String,

    /// Seed the row generator for reproducible output (decimal or 0x-hex).
    #[arg(long, value_parser = parse_seed_u64)]
    pub seed: Option<u64>,

    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// `check <opts-in> <cons-in> <suite-in> [-v/--verbose]`
#[derive(Parser, Debug)]
#[command(name = "check", about = "Validate a suite against an options/constraints pair")]
pub struct CheckArgs {
    pub options_in: String,
    pub constraints_in: String,
    pub suite_in: String,

    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parse a seed given in decimal or `0x`-prefixed hexadecimal.
pub fn parse_seed_u64(s: &str) -> Result<u64, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() || hex.len() > 16 {
            return Err(format!("seed '{s}' is not valid 0x-hex (1-16 nybbles)"));
        }
        u64::from_str_radix(hex, 16).map_err(|e| format!("seed '{s}' is not valid hex: {e}"))
    } else {
        s.parse::<u64>().map_err(|e| format!("seed '{s}' is not a valid decimal number: {e}"))
    }
}

/// Exit codes shared by all three binaries, per the specification's
/// program table: `0` success, `10` I/O failure, and a per-program
/// validation-failure code handled by each binary's own `main`.
pub const EXIT_OK: u8 = 0;
pub const EXIT_IO: u8 = 10;

pub fn exit_code(code: u8) -> ExitCode {
    ExitCode::from(code)
}

/// Parse `T` from the real process arguments, mapping any clap mis-parse
/// (wrong arg count, bad UTF-8, unknown flag, ...) to exit code `10`
/// instead of clap's own default (print usage, exit `2`) — preserving the
/// original programs' "10 bad arg count or I/O failure" contract.
pub fn parse_or_exit<T: Parser>() -> Result<T, ExitCode> {
    match T::try_parse() {
        Ok(args) => Ok(args),
        Err(e) => {
            let _ = e.print();
            Err(exit_code(EXIT_IO))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_seed() {
        assert_eq!(parse_seed_u64("42").unwrap(), 42);
    }

    #[test]
    fn parses_hex_seed() {
        assert_eq!(parse_seed_u64("0xFF").unwrap(), 255);
    }

    #[test]
    fn rejects_overlong_hex_seed() {
        assert!(parse_seed_u64("0x11111111111111111").is_err());
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(parse_seed_u64("not-a-number").is_err());
    }
}
