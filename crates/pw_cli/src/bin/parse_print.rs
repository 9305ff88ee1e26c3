//! `parse-print`: round-trip an options/constraints pair through the
//! parser and printer. Grounded in `original_source/code/parsePrintMain.cpp`.

use std::process::ExitCode;

use pw_cli::{exit_code, parse_or_exit, ParsePrintArgs, EXIT_IO, EXIT_OK};
use pw_core::problem::Problem;

fn main() -> ExitCode {
    let args = match parse_or_exit::<ParsePrintArgs>() {
        Ok(a) => a,
        Err(code) => return code,
    };

    let options_raw = match pw_io::read_to_string(&args.options_in) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return exit_code(EXIT_IO);
        }
    };
    let constraints_raw = match pw_io::read_to_string(&args.constraints_in) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return exit_code(EXIT_IO);
        }
    };

    let mut problem = Problem::with_files(&args.options_in, &args.constraints_in);
    problem.set_options(pw_io::parse::parse_table(&options_raw));
    problem.set_constraints(pw_io::parse::parse_table(&constraints_raw));

    if let Err(e) = pw_io::write_atomically(&args.options_out, &pw_io::print::print_table(problem.options())) {
        eprintln!("{e}");
        return exit_code(EXIT_IO);
    }
    if let Err(e) = pw_io::write_atomically(&args.constraints_out, &pw_io::print::print_table(problem.constraints())) {
        eprintln!("{e}");
        return exit_code(EXIT_IO);
    }

    println!("COMPLETE");
    exit_code(EXIT_OK)
}
