//! Distribution capability traits.
//!
//! The default methods compose the generic algorithms in
//! [`impl_generic`](super::impl_generic): a concrete distribution supplies its
//! formulas and overrides a default only when it has a closed form.

use super::error::StatsResult;
use super::impl_generic;
use super::sampler::{
    ContinuousSampler, DiscreteInverseTransformSampler, DiscreteSampler, InverseTransformSampler,
};
use rand::Rng;

/// Moments shared by every distribution.
pub trait Distribution {
    /// Mean. `NaN` when undefined, infinite when it diverges.
    fn mean(&self) -> f64;

    /// Variance. `NaN` when undefined, infinite when it diverges.
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// A distribution over the real line.
///
/// `cdf` and `sf` are implemented independently so that each stays accurate
/// in the tail where the other is close to 1.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> f64;

    /// Log of the probability density function.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function: P(X <= x)
    fn cdf(&self, x: f64) -> f64;

    /// Survival function: P(X > x)
    fn sf(&self, x: f64) -> f64;

    /// Lowest value of the support, possibly `-inf`.
    fn support_lower_bound(&self) -> f64;

    /// Highest value of the support, possibly `+inf`.
    fn support_upper_bound(&self) -> f64;

    /// `false` when the CDF is flat over some interval inside the support.
    fn is_support_connected(&self) -> bool {
        true
    }

    /// Percent point function (inverse CDF): the `x` with `cdf(x) = p`.
    ///
    /// # Errors
    ///
    /// `InvalidProbability` if `p` is outside [0, 1] or NaN.
    fn ppf(&self, p: f64) -> StatsResult<f64> {
        impl_generic::inverse_cdf(self, p)
    }

    /// Inverse survival function: the `x` with `sf(x) = q`.
    ///
    /// # Errors
    ///
    /// `InvalidProbability` if `q` is outside [0, 1] or NaN.
    fn isf(&self, q: f64) -> StatsResult<f64> {
        impl_generic::inverse_sf(self, q)
    }

    /// Median, `ppf(0.5)` unless the distribution knows it analytically.
    fn median(&self) -> f64 {
        self.ppf(0.5).unwrap_or(f64::NAN)
    }

    /// P(x0 <= X <= x1), computed from whichever tail keeps precision.
    ///
    /// # Errors
    ///
    /// `InvalidRange` if `x0 > x1`.
    fn probability(&self, x0: f64, x1: f64) -> StatsResult<f64> {
        impl_generic::range_probability(self, x0, x1)
    }

    /// Create a sampler drawing from this distribution with `rng`.
    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a>
    where
        Self: Sized,
    {
        Box::new(InverseTransformSampler::new(self, rng))
    }
}

/// A distribution over the integers.
///
/// An unbounded support uses `i32::MIN` / `i32::MAX` as its bounds.
pub trait DiscreteDistribution: Distribution {
    /// Probability mass function: P(X = k)
    fn pmf(&self, k: i32) -> f64;

    /// Log of the probability mass function.
    fn log_pmf(&self, k: i32) -> f64 {
        self.pmf(k).ln()
    }

    /// Cumulative distribution function: P(X <= k)
    fn cdf(&self, k: i32) -> f64;

    /// Survival function: P(X > k)
    fn sf(&self, k: i32) -> f64;

    /// Lowest value of the support.
    fn support_lower_bound(&self) -> i32;

    /// Highest value of the support.
    fn support_upper_bound(&self) -> i32;

    /// Smallest `k` with `cdf(k) >= p`.
    ///
    /// # Errors
    ///
    /// `InvalidProbability` if `p` is outside [0, 1] or NaN.
    fn ppf(&self, p: f64) -> StatsResult<i32> {
        impl_generic::discrete_inverse_cdf(self, p)
    }

    /// Smallest `k` with `sf(k) <= q`.
    ///
    /// # Errors
    ///
    /// `InvalidProbability` if `q` is outside [0, 1] or NaN.
    fn isf(&self, q: f64) -> StatsResult<i32> {
        impl_generic::discrete_inverse_sf(self, q)
    }

    /// Median, `ppf(0.5)` unless the distribution knows it analytically.
    fn median(&self) -> f64 {
        self.ppf(0.5).map_or(f64::NAN, f64::from)
    }

    /// P(x0 < X <= x1)
    ///
    /// # Errors
    ///
    /// `InvalidRange` if `x0 > x1`.
    fn probability(&self, x0: i32, x1: i32) -> StatsResult<f64> {
        impl_generic::discrete_range_probability(self, x0, x1)
    }

    /// Create a sampler drawing from this distribution with `rng`.
    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn DiscreteSampler + 'a>
    where
        Self: Sized,
    {
        Box::new(DiscreteInverseTransformSampler::new(self, rng))
    }
}
