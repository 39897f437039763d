//! Root finding for univariate functions.
//!
//! The distributions in [`crate::stats`] invert their cumulative
//! distribution functions with the bracketing solver in [`scalar`].
//!
//! # Quick Start
//!
//! ```ignore
//! use unidist::optimize::scalar::{brent_root, RootOptions};
//!
//! // Find root of f(x) = x^2 - 4 in [1, 3], starting from 2.5
//! let result = brent_root(|x| x * x - 4.0, 1.0, 2.5, 3.0, &RootOptions::default())?;
//! assert!((result.root - 2.0).abs() < 1e-10);
//! ```

pub mod error;
pub mod scalar;

pub use error::{OptimizeError, OptimizeResult};
pub use scalar::{brent_root, RootOptions, RootResult};
