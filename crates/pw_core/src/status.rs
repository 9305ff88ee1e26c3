//! Internal status taxonomy.
//!
//! Mirrors the specification's internal status codes (0/10/20/30/40/100)
//! as a typed enum instead of a bare `int`, the way the teacher engine types
//! every internal status as a real value (`IoError`, `ValidationReport`)
//! rather than passing integers across module boundaries.

use core::fmt;

/// One of the six internal status codes of the specification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusCode {
    /// `0` — success.
    Ok,
    /// `10` — a file could not be opened or read.
    Io,
    /// `20` — the options table is structurally invalid (fewer than 2 entries in a row).
    OptionsStructure,
    /// `30` — the constraints table is structurally invalid, or references an unknown
    /// category/value, or has odd arity.
    ConstraintsStructure,
    /// `40` — a suite row has wrong arity, references an unknown category/value,
    /// repeats a category, or violates a constraint.
    SuiteStructure,
    /// `100` — non-fatal: an options row has fewer than three entries (degenerate
    /// category). Latched and surfaced only if every other check succeeds.
    DegenerateWarning,
}

impl StatusCode {
    /// The numeric code used by the specification and by diagnostic messages.
    pub const fn code(self) -> u32 {
        match self {
            StatusCode::Ok => 0,
            StatusCode::Io => 10,
            StatusCode::OptionsStructure => 20,
            StatusCode::ConstraintsStructure => 30,
            StatusCode::SuiteStructure => 40,
            StatusCode::DegenerateWarning => 100,
        }
    }

    /// True for any code other than [`StatusCode::Ok`] or
    /// [`StatusCode::DegenerateWarning`] (the only non-fatal codes).
    pub const fn is_fatal(self) -> bool {
        !matches!(self, StatusCode::Ok | StatusCode::DegenerateWarning)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusCode::Ok => "ok",
            StatusCode::Io => "io error",
            StatusCode::OptionsStructure => "options structure error",
            StatusCode::ConstraintsStructure => "constraints structure error",
            StatusCode::SuiteStructure => "suite structure error",
            StatusCode::DegenerateWarning => "degenerate category warning",
        };
        write!(f, "{label} ({})", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_specification() {
        assert_eq!(StatusCode::Ok.code(), 0);
        assert_eq!(StatusCode::Io.code(), 10);
        assert_eq!(StatusCode::OptionsStructure.code(), 20);
        assert_eq!(StatusCode::ConstraintsStructure.code(), 30);
        assert_eq!(StatusCode::SuiteStructure.code(), 40);
        assert_eq!(StatusCode::DegenerateWarning.code(), 100);
    }

    #[test]
    fn only_warning_and_ok_are_non_fatal() {
        assert!(!StatusCode::Ok.is_fatal());
        assert!(!StatusCode::DegenerateWarning.is_fatal());
        assert!(StatusCode::Io.is_fatal());
        assert!(StatusCode::OptionsStructure.is_fatal());
        assert!(StatusCode::ConstraintsStructure.is_fatal());
        assert!(StatusCode::SuiteStructure.is_fatal());
    }
}
