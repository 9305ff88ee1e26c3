//! pw_core — Problem store, typed model, status taxonomy, diagnostics, and
//! deterministic RNG for the pairwise test-case generator.
//!
//! This crate is I/O-free: it defines the stable types shared by `pw_io`
//! (CSV-dialect parsing/printing) and `pw_solve` (validator + solver).
//!
//! - Problem store: [`problem::Problem`] — the raw, unvalidated options and
//!   constraints tables as parsed.
//! - Typed model: [`model`] — Category/Constraint/Row/Suite/Pair, built from
//!   the raw tables once they have passed validation.
//! - Status taxonomy: [`status::StatusCode`] — the internal status codes of
//!   the specification (0/10/20/30/40/100), typed instead of bare ints.
//! - Diagnostics: [`diagnostic::Diagnostic`] — a verbosity-gated message
//!   sink threaded through validator/solver calls instead of a global flag.
//! - RNG: [`rng::RowRng`] — a seedable generator for row construction.

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod model;
pub mod problem;
pub mod rng;
pub mod status;

pub mod prelude {
    pub use crate::diagnostic::{CollectingDiagnostic, Diagnostic, NullDiagnostic};
    pub use crate::model::{Binding, Category, Constraint, Pair, Row, Suite};
    pub use crate::problem::Problem;
    pub use crate::rng::RowRng;
    pub use crate::status::StatusCode;
}
