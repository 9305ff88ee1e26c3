//! Structural validation for inputs and generated/loaded suites.
//!
//! Grounded in `original_source/code/checker.cpp`'s `CHECKER` class. The
//! original splits row-against-categories checking across two near-
//! duplicate functions (`checkOptionsValid`, `checkOptionCoverage`); here
//! both reuse a single [`check_row_against_categories`] sub-check, the way
//! the teacher's `vm_pipeline::validate` composes its ordered sub-checks
//! from one shared issue-reporting path rather than repeating logic.

use std::collections::{HashMap, HashSet};

use pw_core::diagnostic::Diagnostic;
use pw_core::model::{Category, Constraint};
use pw_core::problem::{Problem, RawTable};
use pw_core::status::StatusCode;

/// Build the typed category list from a raw options table. Does not
/// validate; call [`validate_input`] first.
pub fn categories_from_raw(options: &RawTable) -> Vec<Category> {
    options.iter().map(|row| Category::from_raw_row(row)).collect()
}

/// Build the typed constraint list from a raw constraints table. Does not
/// validate; call [`validate_input`] first.
pub fn constraints_from_raw(constraints: &RawTable) -> Vec<Constraint> {
    constraints.iter().map(|row| Constraint::from_raw_row(row)).collect()
}

fn category_value_map(options: &RawTable) -> HashMap<&str, HashSet<&str>> {
    let mut map: HashMap<&str, HashSet<&str>> = HashMap::new();
    for row in options {
        if row.is_empty() {
            continue;
        }
        let entry = map.entry(row[0].as_str()).or_default();
        for v in &row[1..] {
            entry.insert(v.as_str());
        }
    }
    map
}

/// Validate the options and constraints tables of `problem`.
///
/// Mirrors `checkInputFiles`: every options row must name at least one
/// category and one value (`20` otherwise); a row with exactly one value is
/// a non-fatal degenerate-category warning (`100`), latched and returned
/// only if nothing else fails. Every constraints row must have even length
/// and reference only known categories/values (`30` otherwise).
pub fn validate_input(problem: &Problem, diag: &mut dyn Diagnostic) -> StatusCode {
    let options = problem.options();
    let constraints = problem.constraints();
    let options_label = problem.options_file().unwrap_or("options file");
    let constraints_label = problem.constraints_file().unwrap_or("constraints file");

    let mut warning = false;

    for (i, row) in options.iter().enumerate() {
        let row_num = i + 1;
        if row.len() < 3 {
            diag.emit(&format!(
                "warning in row {row_num} of {options_label}: each row should contain at least one category name and two values"
            ));
            warning = true;
        }
        if row.len() < 2 {
            diag.emit(&format!(
                "error in row {row_num} of {options_label}: each row must contain at least one category name and one value"
            ));
            return StatusCode::OptionsStructure;
        }
    }

    let valid = category_value_map(options);

    for (i, row) in constraints.iter().enumerate() {
        let row_num = i + 1;
        if row.len() % 2 != 0 {
            diag.emit(&format!(
                "error in row {row_num} of {constraints_label}: every value must be paired with a category"
            ));
            return StatusCode::ConstraintsStructure;
        }
        for (j, pair) in row.chunks_exact(2).enumerate() {
            let category = pair[0].as_str();
            let value = pair[1].as_str();
            let Some(values) = valid.get(category) else {
                diag.emit(&format!(
                    "error in row {row_num} of {constraints_label}: invalid category name at position {}",
                    2 * j + 1
                ));
                return StatusCode::ConstraintsStructure;
            };
            if !values.contains(value) {
                diag.emit(&format!(
                    "error in row {row_num} of {constraints_label}: invalid value at position {}",
                    2 * j + 2
                ));
                return StatusCode::ConstraintsStructure;
            }
        }
    }

    if warning {
        StatusCode::DegenerateWarning
    } else {
        StatusCode::Ok
    }
}

/// Narrower entry point used before an operation that only reads the
/// problem files (no suite involved yet) — e.g. the parse/print round
/// trip. Identical to [`validate_input`]; kept as its own name so callers
/// document which check they depend on.
pub fn check_files(problem: &Problem, diag: &mut dyn Diagnostic) -> StatusCode {
    validate_input(problem, diag)
}

/// Check a single suite row's structure against the known categories:
/// even length, category count matches `categories.len()`, every category
/// and value is known, and no category repeats within the row. Returns
/// `None` when the row is structurally sound.
pub fn check_row_against_categories(
    row: &[String],
    categories: &[Category],
    row_num: usize,
    file_label: &str,
    diag: &mut dyn Diagnostic,
) -> Option<StatusCode> {
    if row.len() % 2 != 0 {
        diag.emit(&format!(
            "error in row {row_num} of {file_label}: every category must be paired with a value"
        ));
        return Some(StatusCode::SuiteStructure);
    }
    if row.len() / 2 != categories.len() {
        diag.emit(&format!(
            "error in row {row_num} of {file_label}: each row must name exactly as many categories as are defined in the options"
        ));
        return Some(StatusCode::SuiteStructure);
    }

    let by_name: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.name.as_str(), c)).collect();
    let mut seen = HashSet::new();

    for (j, pair) in row.chunks_exact(2).enumerate() {
        let category = pair[0].as_str();
        let value = pair[1].as_str();

        let Some(cat) = by_name.get(category) else {
            diag.emit(&format!(
                "error in row {row_num} of {file_label}: category at position {} is not part of the options",
                2 * j + 1
            ));
            return Some(StatusCode::SuiteStructure);
        };

        if !cat.values.iter().any(|v| v.as_str() == value) {
            diag.emit(&format!(
                "error in row {row_num} of {file_label}: value at position {} is not part of category {category}",
                2 * j + 2
            ));
            return Some(StatusCode::SuiteStructure);
        }

        if !seen.insert(category) {
            diag.emit(&format!(
                "error in row {row_num} of {file_label}: category at position {} is a duplicate of another category in this row",
                2 * j + 1
            ));
            return Some(StatusCode::SuiteStructure);
        }
    }

    None
}

/// Check every row of a raw suite table against a constraint list, once
/// the rows have already passed [`check_row_against_categories`].
pub fn check_constraints_against_suite(
    suite: &RawTable,
    constraints: &[Constraint],
    file_label: &str,
    diag: &mut dyn Diagnostic,
) -> Option<StatusCode> {
    for constraint in constraints {
        for (row_num, row) in suite.iter().enumerate().map(|(i, r)| (i + 1, r)) {
            let bindings: Vec<_> = row
                .chunks_exact(2)
                .map(|p| (pw_core::model::CategoryName::from(p[0].as_str()), pw_core::model::Value::from(p[1].as_str())))
                .collect();
            if constraint.is_subset_of(&bindings) {
                diag.emit(&format!(
                    "error in row {row_num} of {file_label}: row matches a forbidden combination from the constraints"
                ));
                return Some(StatusCode::SuiteStructure);
            }
        }
    }
    None
}

/// Full suite validation: every row's structure, then every constraint.
/// Mirrors `CHECKER::check`'s `checkOptionsValid` + `checkOptionCoverage` +
/// `checkConstraints` sequence, via the shared sub-checks above.
pub fn validate_suite(
    suite: &RawTable,
    categories: &[Category],
    constraints: &[Constraint],
    file_label: &str,
    diag: &mut dyn Diagnostic,
) -> StatusCode {
    for (i, row) in suite.iter().enumerate() {
        if let Some(code) = check_row_against_categories(row, categories, i + 1, file_label, diag) {
            return code;
        }
    }
    if let Some(code) = check_constraints_against_suite(suite, constraints, file_label, diag) {
        return code;
    }
    StatusCode::Ok
}
