//! Numerical primitives shared by the event searches.

pub mod golden;
pub mod quadratic;

use thiserror::Error;

pub use golden::{Extremum, GOLDEN_RATIO, GoldenSectionSearch};
pub use quadratic::{Point, QuadraticResult, find_quadratic_roots};

/// Errors raised by the search primitives themselves. Failures of the evaluated function are
/// returned unchanged to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    #[error("search interval [{a}, {b}] is not a finite, non-empty range")]
    InvalidInterval { a: f64, b: f64 },
    #[error("search precision {0} must be positive and finite")]
    InvalidPrecision(f64),
}
