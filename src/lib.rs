//! unidist - Univariate Probability Distributions
//!
//! unidist provides continuous and discrete probability distributions with
//! densities, cumulative and survival functions, moments, quantiles and
//! random sampling. Every distribution gets a working quantile function for
//! free: a generic inversion engine brackets the root of `cdf(x) - p` and
//! refines it with Brent's method, and discrete distributions use a bounded
//! search that sums the mass function near the answer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        stats                             │
//! │  (distributions, inversion engine, discrete search,     │
//! │   samplers, special functions)                          │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       optimize                           │
//! │           (bracketed scalar root finding)               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`stats`] - Distribution traits, continuous and discrete distributions,
//!   samplers and special functions
//! - [`optimize`] - Brent root finding used by the inversion engine
//!
//! # Logging
//!
//! The library emits `tracing` events (bracket construction and solver
//! progress at `trace`, boundary short-circuits and search fallbacks at
//! `debug`). No subscriber is installed; applications choose one.
//!
//! # Example
//!
//! ```ignore
//! use unidist::stats::{ContinuousDistribution, DiscreteDistribution, Binomial, StudentT};
//!
//! let t = StudentT::new(5.0).unwrap();
//! let critical = t.isf(0.025).unwrap();
//! assert!((t.sf(critical) - 0.025).abs() < 1e-12);
//!
//! let b = Binomial::new(40, 0.3).unwrap();
//! let k = b.ppf(0.95).unwrap();
//! assert!(b.cdf(k) >= 0.95 && b.cdf(k - 1) < 0.95);
//! ```

pub mod optimize;
pub mod stats;

// Re-export main types for convenience
pub use optimize::{OptimizeError, OptimizeResult};
pub use stats::{
    // Distribution traits
    ContinuousDistribution,
    DiscreteDistribution,
    Distribution,
    // Errors
    StatsError,
    StatsResult,
};
