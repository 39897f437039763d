//! Log-uniform (reciprocal) distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite_positive, require_probability, StatsError, StatsResult};

/// Log-uniform distribution on [a, b], also called the reciprocal distribution.
///
/// ln(X) is uniform on [ln a, ln b], giving PDF:
///
/// f(x) = 1 / (x (ln b - ln a))  for a ≤ x ≤ b
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{LogUniform, ContinuousDistribution};
///
/// let d = LogUniform::new(1.0, 1000.0).unwrap();
/// println!("Median: {}", d.median()); // √1000
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogUniform {
    a: f64,
    b: f64,
    ln_a: f64,
    ln_b: f64,
    /// ln b - ln a
    log_range: f64,
}

impl LogUniform {
    /// Create a new log-uniform distribution on [a, b].
    ///
    /// # Errors
    ///
    /// Returns an error unless 0 < a < b < ∞.
    pub fn new(a: f64, b: f64) -> StatsResult<Self> {
        require_finite_positive("a", a)?;
        require_finite_positive("b", b)?;
        if a >= b {
            return Err(StatsError::InvalidRange { lower: a, upper: b });
        }
        let (ln_a, ln_b) = (a.ln(), b.ln());
        Ok(Self {
            a,
            b,
            ln_a,
            ln_b,
            log_range: ln_b - ln_a,
        })
    }

    /// Get the lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Get the upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }

    fn clamp(&self, x: f64) -> f64 {
        x.max(self.a).min(self.b)
    }
}

impl Distribution for LogUniform {
    fn mean(&self) -> f64 {
        (self.b - self.a) / self.log_range
    }

    fn var(&self) -> f64 {
        let m = self.mean();
        (self.b * self.b - self.a * self.a) / (2.0 * self.log_range) - m * m
    }
}

impl ContinuousDistribution for LogUniform {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            0.0
        } else {
            1.0 / (x * self.log_range)
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            f64::NEG_INFINITY
        } else {
            -x.ln() - self.log_range.ln()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x.ln() - self.ln_a) / self.log_range
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.a {
            1.0
        } else if x >= self.b {
            0.0
        } else {
            (self.ln_b - x.ln()) / self.log_range
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
        if p == 0.0 {
            Ok(self.a)
        } else if p == 1.0 {
            Ok(self.b)
        } else {
            Ok(self.clamp((self.ln_a + p * self.log_range).exp()))
        }
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        if q == 0.0 {
            Ok(self.b)
        } else if q == 1.0 {
            Ok(self.a)
        } else {
            Ok(self.clamp((self.ln_b - q * self.log_range).exp()))
        }
    }

    fn median(&self) -> f64 {
        (self.a * self.b).sqrt()
    }
}
