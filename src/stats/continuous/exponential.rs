//! Exponential distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite_positive, require_probability, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use rand::Rng;
use std::f64::consts::LN_2;

/// Exponential distribution.
///
/// The exponential distribution with rate parameter λ has PDF:
///
/// f(x) = λ exp(-λx)  for x ≥ 0
///
/// Alternatively parameterized by scale β = 1/λ, which is also the mean:
///
/// f(x) = (1/β) exp(-x/β)
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Exponential, ContinuousDistribution, Distribution};
///
/// // Rate = 2 (mean = 0.5)
/// let e = Exponential::new(2.0).unwrap();
/// assert!((e.mean() - 0.5).abs() < 1e-10);
///
/// // From scale parameter
/// let e = Exponential::from_scale(0.5).unwrap();
/// assert!((e.rate() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    /// Rate parameter (λ)
    lambda: f64,
}

impl Exponential {
    /// Create a new exponential distribution with given rate parameter.
    ///
    /// # Arguments
    ///
    /// * `lambda` - Rate parameter (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if lambda is not positive and finite.
    pub fn new(lambda: f64) -> StatsResult<Self> {
        require_finite_positive("lambda", lambda)?;
        Ok(Self { lambda })
    }

    /// Create an exponential distribution from scale parameter β = 1/λ.
    pub fn from_scale(scale: f64) -> StatsResult<Self> {
        require_finite_positive("scale", scale)?;
        Self::new(1.0 / scale)
    }

    /// Create a standard exponential distribution (λ = 1).
    pub fn standard() -> Self {
        Self { lambda: 1.0 }
    }

    /// Get the rate parameter λ.
    pub fn rate(&self) -> f64 {
        self.lambda
    }

    /// Get the scale parameter β = 1/λ.
    pub fn scale(&self) -> f64 {
        1.0 / self.lambda
    }
}

impl Distribution for Exponential {
    fn mean(&self) -> f64 {
        1.0 / self.lambda
    }

    fn var(&self) -> f64 {
        1.0 / (self.lambda * self.lambda)
    }

    fn std(&self) -> f64 {
        1.0 / self.lambda
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            self.lambda.ln() - self.lambda * x
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            // -expm1(-λx) keeps precision when x is small
            -(-self.lambda * x).exp_m1()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            1.0
        } else {
            (-self.lambda * x).exp()
        }
    }

    fn support_lower_bound(&self) -> f64 {
        0.0
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        // x = -ln(1-p) / λ = -ln1p(-p) / λ
        Ok(-(-p).ln_1p() / self.lambda)
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        if q == 0.0 {
            return Ok(f64::INFINITY);
        }
        // x = -ln(q) / λ
        Ok(-q.ln() / self.lambda)
    }

    fn median(&self) -> f64 {
        LN_2 / self.lambda
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Exp::new(self.lambda) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
