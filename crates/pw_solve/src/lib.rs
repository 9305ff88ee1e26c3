//! pw_solve — structural validation and pairwise row generation.
//!
//! - [`validate`]: input and suite validators, grounded in
//!   `original_source/code/checker.cpp`.
//! - [`solve`]: pair enumeration and randomized row construction, grounded
//!   in `original_source/code/solver.cpp`, with its two flagged defects
//!   fixed (see [`solve::solve`]'s doc comment).

#![forbid(unsafe_code)]

pub mod solve;
pub mod validate;

pub mod prelude {
    pub use crate::solve::{generate_pairs, solve};
    pub use crate::validate::{categories_from_raw, check_files, constraints_from_raw, validate_input, validate_suite};
}
