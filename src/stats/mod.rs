//! Univariate probability distributions.
//!
//! Every distribution implements [`Distribution`] (moments) and one of
//! [`ContinuousDistribution`] or [`DiscreteDistribution`]. Parameters are
//! validated once by the constructor; after that every method is a pure
//! function of the immutable parameters.
//!
//! # Quantiles
//!
//! The inverse CDF (`ppf`) and inverse survival function (`isf`) have
//! default implementations that work for any distribution:
//!
//! - continuous distributions bracket the quantile (Chebyshev bounds, then
//!   doubling towards infinite support bounds) and refine it with Brent's
//!   method from [`crate::optimize::scalar`];
//! - discrete distributions bisect the support and then sum the mass
//!   function from the closer end of a short bracket.
//!
//! Distributions with a closed-form quantile override the defaults.
//!
//! ```ignore
//! use unidist::stats::{ContinuousDistribution, Gamma, Normal};
//!
//! let n = Normal::standard();
//! let p = n.pdf(0.0);
//! let z = n.ppf(0.975).unwrap(); // closed form
//!
//! let g = Gamma::new(2.0, 1.5).unwrap();
//! let q = g.isf(1e-10).unwrap(); // generic inversion
//! ```
//!
//! # Sampling
//!
//! `sampler(rng)` returns a boxed sampler bound to the distribution and an
//! injected [`rand::Rng`]:
//!
//! ```ignore
//! use rand::{rngs::StdRng, SeedableRng};
//! use unidist::stats::{ContinuousDistribution, Normal};
//!
//! let n = Normal::new(1.0, 2.0).unwrap();
//! let xs = n.sampler(StdRng::seed_from_u64(42)).samples(1000);
//! ```

// Shared generic implementations
mod impl_generic;

// Core modules
mod continuous;
mod discrete;
mod distribution;
mod error;
pub mod sampler;
pub mod special;

// Public API: Distribution traits and types
pub use distribution::{ContinuousDistribution, DiscreteDistribution, Distribution};
pub use error::{StatsError, StatsResult};
pub use sampler::{
    ContinuousSampler, DiscreteDistrSampler, DiscreteInverseTransformSampler, DiscreteSampler,
    DistrSampler, InverseTransformSampler,
};

// Public API: Continuous distributions
pub use continuous::{
    Beta, Cauchy, ChiSquared, Exponential, FDistribution, Gamma, Gumbel, Laplace, Levy,
    LogNormal, LogUniform, Logistic, Nakagami, Normal, Pareto, StudentT, TrapezoidShape,
    Trapezoidal, Triangular, TruncatedNormal, Uniform, Weibull,
};

// Public API: Discrete distributions
pub use discrete::{
    Bernoulli, Binomial, Geometric, Hypergeometric, Pascal, Poisson, UniformDiscrete,
};
