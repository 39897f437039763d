//! Log-normal distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{
    require_finite, require_finite_positive, require_probability, StatsError, StatsResult,
};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use crate::stats::special::{self, LN_SQRT_2PI};
use rand::Rng;
use std::f64::consts::SQRT_2;

/// Log-normal distribution.
///
/// If X ~ LogNormal(μ, σ), then ln(X) ~ Normal(μ, σ).
///
/// f(x) = (1 / (xσ√(2π))) exp(-(ln(x)-μ)² / (2σ²))  for x > 0
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{LogNormal, ContinuousDistribution, Distribution};
///
/// let ln = LogNormal::new(0.0, 1.0).unwrap();
/// println!("Median: {}", ln.median()); // e^0 = 1
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogNormal {
    /// Mean of the underlying normal (μ)
    mu: f64,
    /// Standard deviation of the underlying normal (σ)
    sigma: f64,
}

impl LogNormal {
    /// Create a new log-normal distribution.
    ///
    /// # Arguments
    ///
    /// * `mu` - Mean of the underlying normal distribution (scale)
    /// * `sigma` - Standard deviation of the underlying normal (shape, must be positive)
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        require_finite_positive("sigma", sigma)?;
        require_finite("mu", mu)?;
        Ok(Self { mu, sigma })
    }

    /// Get the μ parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the σ parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    fn standardize(&self, x: f64) -> f64 {
        (x.ln() - self.mu) / self.sigma
    }
}

impl Distribution for LogNormal {
    fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }

    fn var(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        s2.exp_m1() * (2.0 * self.mu + s2).exp()
    }
}

impl ContinuousDistribution for LogNormal {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let z = self.standardize(x);
        -LN_SQRT_2PI - self.sigma.ln() - x.ln() - 0.5 * z * z
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        special::norm_cdf(self.standardize(x))
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        special::norm_sf(self.standardize(x))
    }

    fn support_lower_bound(&self) -> f64 {
        0.0
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok((self.mu + self.sigma * special::norm_ppf(p)).exp())
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok((self.mu + self.sigma * special::norm_isf(q)).exp())
    }

    fn median(&self) -> f64 {
        self.mu.exp()
    }

    fn probability(&self, x0: f64, x1: f64) -> StatsResult<f64> {
        if x0 > x1 {
            return Err(StatsError::InvalidRange {
                lower: x0,
                upper: x1,
            });
        }
        if x0 <= 0.0 {
            return Ok(self.cdf(x1));
        }
        let s = self.sigma * SQRT_2;
        let v0 = (x0.ln() - self.mu) / s;
        let v1 = (x1.ln() - self.mu) / s;
        Ok(0.5 * special::erf_difference(v0, v1))
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::LogNormal::new(self.mu, self.sigma) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
