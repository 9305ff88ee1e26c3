//! `solve`: generate a pairwise test suite. Grounded in
//! `original_source/code/solverMain.cpp`, with the `result = 100` branch
//! bug from `solver.cpp` fixed so options/constraints structure errors are
//! actually surfaced (exit `20`) instead of silently treated as a
//! degenerate-only warning.

use std::process::ExitCode;

use pw_cli::{exit_code, parse_or_exit, SolveArgs, EXIT_IO, EXIT_OK};
use pw_core::diagnostic::{Diagnostic, NullDiagnostic, StderrDiagnostic};
use pw_core::problem::Problem;
use pw_core::rng::RowRng;

const EXIT_INVALID: u8 = 20;

fn main() -> ExitCode {
    let args = match parse_or_exit::<SolveArgs>() {
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

    let mut diag: Box<dyn Diagnostic> = if args.verbose {
        Box::new(StderrDiagnostic)
    } else {
        Box::new(NullDiagnostic)
    };

    let status = pw_solve::validate::validate_input(&problem, diag.as_mut());
    if status.is_fatal() {
        return exit_code(EXIT_INVALID);
    }

    let categories = pw_solve::validate::categories_from_raw(problem.options());
    let constraints = pw_solve::validate::constraints_from_raw(problem.constraints());

    let mut rng = match args.seed {
        Some(seed) => RowRng::from_seed(seed),
        None => RowRng::from_entropy(),
    };

    let suite = pw_solve::solve::solve(&categories, &constraints, &mut rng, diag.as_mut());

    let rows: Vec<Vec<String>> = suite
        .rows()
        .iter()
        .map(|row| row.bindings().iter().flat_map(|(c, v)| [c.to_string(), v.to_string()]).collect())
        .collect();

    if let Err(e) = pw_io::write_atomically(&args.suite_out, &pw_io::print::print_table(&rows)) {
        eprintln!("{e}");
        return exit_code(EXIT_IO);
    }

    println!("COMPLETE");
    exit_code(EXIT_OK)
}
