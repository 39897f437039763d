//! Uniform distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_probability, StatsError, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use rand::Rng;

/// Continuous uniform distribution on [a, b].
///
/// The uniform distribution has constant PDF on the interval [a, b]:
///
/// f(x) = 1 / (b - a)  for a ≤ x ≤ b
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Uniform, ContinuousDistribution, Distribution};
///
/// // Standard uniform U(0, 1)
/// let u = Uniform::standard();
/// assert!((u.pdf(0.5) - 1.0).abs() < 1e-10);
/// assert!((u.cdf(0.5) - 0.5).abs() < 1e-10);
///
/// // Custom uniform U(2, 8)
/// let u = Uniform::new(2.0, 8.0).unwrap();
/// assert!((u.mean() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    /// Lower bound
    a: f64,
    /// Upper bound
    b: f64,
    /// Range (b - a)
    range: f64,
}

impl Uniform {
    /// Create a new uniform distribution on [a, b].
    ///
    /// # Errors
    ///
    /// Returns an error if a >= b or if bounds are not finite.
    pub fn new(a: f64, b: f64) -> StatsResult<Self> {
        require_finite("a", a)?;
        require_finite("b", b)?;
        if a >= b {
            return Err(StatsError::InvalidRange { lower: a, upper: b });
        }
        Ok(Self { a, b, range: b - a })
    }

    /// Create a standard uniform distribution U(0, 1).
    pub fn standard() -> Self {
        Self {
            a: 0.0,
            b: 1.0,
            range: 1.0,
        }
    }

    /// Get the lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Get the upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Distribution for Uniform {
    fn mean(&self) -> f64 {
        0.5 * self.a + 0.5 * self.b
    }

    fn var(&self) -> f64 {
        self.range * self.range / 12.0
    }
}

impl ContinuousDistribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            0.0
        } else {
            1.0 / self.range
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            f64::NEG_INFINITY
        } else {
            -self.range.ln()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x - self.a) / self.range
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.a {
            1.0
        } else if x >= self.b {
            0.0
        } else {
            (self.b - x) / self.range
        }
    }

    fn support_lower_bound(&self) -> f64 {
        self.a
    }

    fn support_upper_bound(&self) -> f64 {
        self.b
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok((1.0 - p) * self.a + p * self.b)
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok(q * self.a + (1.0 - q) * self.b)
    }

    fn median(&self) -> f64 {
        self.mean()
    }

    fn probability(&self, x0: f64, x1: f64) -> StatsResult<f64> {
        if x0 > x1 {
            return Err(StatsError::InvalidRange {
                lower: x0,
                upper: x1,
            });
        }
        let lo = x0.max(self.a);
        let hi = x1.min(self.b);
        if hi <= lo {
            return Ok(0.0);
        }
        Ok((hi - lo) / self.range)
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Uniform::new(self.a, self.b) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
