//! Logistic distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_finite_positive, require_probability, StatsResult};
use std::f64::consts::PI;

/// Logistic distribution.
///
/// The logistic distribution with location μ and scale s > 0 has CDF:
///
/// F(x) = 1 / (1 + exp(-(x - μ)/s))
///
/// and quantile function μ + s ln(p / (1 - p)).
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Logistic, ContinuousDistribution};
///
/// let l = Logistic::new(0.0, 1.0).unwrap();
/// println!("PDF at 0: {}", l.pdf(0.0));    // 0.25
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logistic {
    /// Location parameter (μ)
    mu: f64,
    /// Scale parameter (s)
    s: f64,
}

impl Logistic {
    /// Create a new logistic distribution.
    ///
    /// # Arguments
    ///
    /// * `mu` - Location parameter
    /// * `s` - Scale parameter (must be > 0)
    pub fn new(mu: f64, s: f64) -> StatsResult<Self> {
        require_finite("mu", mu)?;
        require_finite_positive("s", s)?;
        Ok(Self { mu, s })
    }

    /// Get the location parameter.
    pub fn loc(&self) -> f64 {
        self.mu
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.s
    }
}

/// Standard logistic CDF without overflow on either side.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Distribution for Logistic {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.s * self.s * PI * PI / 3.0
    }
}

impl ContinuousDistribution for Logistic {
    fn pdf(&self, x: f64) -> f64 {
        let e = (-((x - self.mu) / self.s).abs()).exp();
        e / (self.s * (1.0 + e) * (1.0 + e))
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let a = ((x - self.mu) / self.s).abs();
        -a - 2.0 * (-a).exp().ln_1p() - self.s.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        sigmoid((x - self.mu) / self.s)
    }

    fn sf(&self, x: f64) -> f64 {
        sigmoid((self.mu - x) / self.s)
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok(self.mu + self.s * (p.ln() - (-p).ln_1p()))
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok(self.mu + self.s * ((-q).ln_1p() - q.ln()))
    }

    fn median(&self) -> f64 {
        self.mu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_logistic_creation() {
        let l = Logistic::new(1.0, 2.0).unwrap();
        assert_eq!(l.loc(), 1.0);
        assert_eq!(l.scale(), 2.0);
        assert!(Logistic::new(0.0, 0.0).is_err());
        assert!(Logistic::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_logistic_pdf_cdf() {
        let l = Logistic::new(0.0, 1.0).unwrap();
        assert!((l.pdf(0.0) - 0.25).abs() < 1e-15);
        assert!((l.cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((l.cdf(2.0) - 1.0 / (1.0 + (-2.0f64).exp())).abs() < 1e-15);
        assert!((l.log_pdf(1.5) - l.pdf(1.5).ln()).abs() < 1e-14);
        // Both tails stay finite and exact
        assert!((l.cdf(-800.0)).abs() < 1e-300);
        assert!((l.sf(40.0) - (-40.0f64).exp() / (1.0 + (-40.0f64).exp())).abs() < 1e-30);
        assert_eq!(l.pdf(1e6), 0.0);
    }

    #[test]
    fn test_logistic_ppf() {
        let l = Logistic::new(1.0, 0.5).unwrap();
        assert_eq!(l.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(l.ppf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(l.isf(0.0).unwrap(), f64::INFINITY);
        assert_eq!(l.isf(1.0).unwrap(), f64::NEG_INFINITY);
        assert!((l.ppf(0.5).unwrap() - 1.0).abs() < 1e-15);
        for p in [1e-10_f64, 0.2, 0.7, 0.999] {
            let x = l.ppf(p).unwrap();
            assert!((l.cdf(x) - p).abs() / p < 1e-12);
            let y = l.isf(p).unwrap();
            assert!((l.sf(y) - p).abs() / p < 1e-12);
        }
    }

    #[test]
    fn test_logistic_moments() {
        let l = Logistic::new(2.0, 3.0).unwrap();
        assert_eq!(l.mean(), 2.0);
        assert!((l.var() - 3.0 * PI * PI).abs() < 1e-12);
        assert_eq!(l.median(), 2.0);
    }

    #[test]
    fn test_logistic_sampler() {
        let l = Logistic::new(2.0, 1.0).unwrap();
        let xs = l.sampler(StdRng::seed_from_u64(12)).samples(20_000);
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!((mean - 2.0).abs() < 0.05);
    }
}
