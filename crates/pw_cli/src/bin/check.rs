//! `check`: validate a suite against an options/constraints pair. Grounded
//! in `original_source/code/checkerMain.cpp`'s status-code translation
//! table (core codes 20/30/40 remapped to program exit codes 10/20/30).

use std::process::ExitCode;

use pw_cli::{exit_code, parse_or_exit, CheckArgs, EXIT_IO, EXIT_OK};
use pw_core::diagnostic::{Diagnostic, NullDiagnostic, StderrDiagnostic};
use pw_core::problem::Problem;
use pw_core::status::StatusCode;

fn main() -> ExitCode {
    let args = match parse_or_exit::<CheckArgs>() {
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
    let suite_raw = match pw_io::read_to_string(&args.suite_in) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return exit_code(EXIT_IO);
        }
    };

    let mut problem = Problem::with_files(&args.options_in, &args.constraints_in);
    problem.set_options(pw_io::parse::parse_table(&options_raw));
    problem.set_constraints(pw_io::parse::parse_table(&constraints_raw));
    let suite_table = pw_io::parse::parse_table(&suite_raw);

    let mut diag: Box<dyn Diagnostic> = if args.verbose {
        Box::new(StderrDiagnostic)
    } else {
        Box::new(NullDiagnostic)
    };

    let input_status = pw_solve::validate::validate_input(&problem, diag.as_mut());
    match input_status {
        StatusCode::OptionsStructure => {
            eprintln!("UNVERIFIED");
            return exit_code(10);
        }
        StatusCode::ConstraintsStructure => {
            eprintln!("UNVERIFIED");
            return exit_code(20);
        }
        StatusCode::Ok | StatusCode::DegenerateWarning => {}
        StatusCode::Io | StatusCode::SuiteStructure => unreachable!("validate_input never returns this code"),
    }

    let categories = pw_solve::validate::categories_from_raw(problem.options());
    let constraints = pw_solve::validate::constraints_from_raw(problem.constraints());

    let suite_status = pw_solve::validate::validate_suite(
        &suite_table,
        &categories,
        &constraints,
        &args.suite_in,
        diag.as_mut(),
    );

    match suite_status {
        StatusCode::SuiteStructure => {
            eprintln!("UNVERIFIED");
            exit_code(30)
        }
        StatusCode::Ok => {
            println!("VERIFIED");
            exit_code(EXIT_OK)
        }
        _ => unreachable!("validate_suite only ever returns Ok or SuiteStructure"),
    }
}
