//! Problem store: the immutable (once validated) input to the solver.
//!
//! Grounded in `original_source/code/problem.hpp`'s `PROBLEM` class: a
//! plain aggregate holding the parsed options/constraints tables and the
//! file labels used for diagnostics, with wholesale get/set accessors and
//! no validation performed on set — validation is the input validator's
//! responsibility (§4.2 of the specification), not the store's.

/// One row of a raw table, as produced by the parser: an ordered sequence
/// of string tokens. For an options row, `row[0]` is the category name and
/// `row[1..]` are its values. For a constraints row, the tokens alternate
/// category, value, category, value, ...
pub type RawRow = Vec<String>;

/// An ordered sequence of raw rows.
pub type RawTable = Vec<RawRow>;

/// Holds the parsed options and constraints tables, plus optional file
/// labels used only for diagnostic messages (never for behavior).
#[derive(Clone, Debug, Default)]
pub struct Problem {
    options: RawTable,
    constraints: RawTable,
    options_file: Option<String>,
    constraints_file: Option<String>,
}

impl Problem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a problem with file labels attached up front (the
    /// constructor used by the CLI, which always knows its input paths).
    pub fn with_files(options_file: impl Into<String>, constraints_file: impl Into<String>) -> Self {
        Self {
            options: RawTable::new(),
            constraints: RawTable::new(),
            options_file: Some(options_file.into()),
            constraints_file: Some(constraints_file.into()),
        }
    }

    pub fn options(&self) -> &RawTable {
        &self.options
    }

    pub fn constraints(&self) -> &RawTable {
        &self.constraints
    }

    pub fn set_options(&mut self, options: RawTable) {
        self.options = options;
    }

    pub fn set_constraints(&mut self, constraints: RawTable) {
        self.constraints = constraints;
    }

    pub fn options_file(&self) -> Option<&str> {
        self.options_file.as_deref()
    }

    pub fn constraints_file(&self) -> Option<&str> {
        self.constraints_file.as_deref()
    }

    pub fn set_options_file(&mut self, label: impl Into<String>) {
        self.options_file = Some(label.into());
    }

    pub fn set_constraints_file(&mut self, label: impl Into<String>) {
        self.constraints_file = Some(label.into());
    }
}
