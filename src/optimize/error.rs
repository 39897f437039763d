//! Error types for root finding.

use thiserror::Error;

/// Result type for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur while solving for a root.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// The solver did not converge within the maximum iterations.
    #[error("{context}: did not converge after {iterations} iterations (tolerance: {tolerance})")]
    DidNotConverge {
        iterations: usize,
        tolerance: f64,
        context: String,
    },

    /// Invalid interval provided (e.g., for bracketing methods).
    #[error("Invalid interval [{a}, {b}] in {context}: bounds must satisfy a <= x0 <= b")]
    InvalidInterval { a: f64, b: f64, context: String },

    /// Function has the same sign at both bracket endpoints.
    #[error(
        "Function has same sign at bracket endpoints in {context}: f({a})={fa}, f({b})={fb}"
    )]
    SameSignBracket {
        a: f64,
        b: f64,
        fa: f64,
        fb: f64,
        context: String,
    },
}
