//! Scalar (1D) root finding.
//!
//! Root finding methods require a function `f: (f64) -> f64` and an interval
//! `[a, b]` on which `f` changes sign.

mod root_finding;

pub use root_finding::brent_root;

/// Options for scalar root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Relative tolerance on the root location
    pub rtol: f64,
    /// Absolute tolerance on the root location
    pub atol: f64,
    /// A point with `|f(x)| <= ftol` is accepted as the root
    pub ftol: f64,
}

impl RootOptions {
    /// Tolerances used when inverting a cumulative distribution function.
    ///
    /// Roots are located to `1e-14` relative accuracy at any magnitude. The
    /// absolute and function value tolerances are effectively off, so a
    /// target probability of `1e-300` is still searched for and a root of
    /// `1e-200` is not rounded to zero.
    pub const fn inversion() -> Self {
        Self {
            max_iter: 10_000,
            rtol: 1e-14,
            atol: f64::MIN_POSITIVE,
            ftol: 0.0,
        }
    }
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            max_iter: 5000,
            rtol: 1e-14,
            atol: 1e-9,
            ftol: 1e-15,
        }
    }
}

/// Result from a root finding method.
#[derive(Debug, Clone, Copy)]
pub struct RootResult {
    /// The root found
    pub root: f64,
    /// Function value at root
    pub function_value: f64,
    /// Number of iterations used
    pub iterations: usize,
}
