//! Normal (Gaussian) distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{
    require_finite, require_finite_positive, require_probability, StatsError, StatsResult,
};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use crate::stats::special::{self, INV_SQRT_2PI, LN_SQRT_2PI};
use rand::Rng;
use std::f64::consts::SQRT_2;

/// Normal (Gaussian) distribution.
///
/// The normal distribution with mean μ and standard deviation σ has PDF:
///
/// f(x) = (1 / (σ√(2π))) exp(-(x-μ)² / (2σ²))
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Normal, ContinuousDistribution, Distribution};
///
/// // Standard normal N(0, 1)
/// let n = Normal::standard();
/// assert!((n.pdf(0.0) - 0.3989422804).abs() < 1e-6);
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-10);
///
/// // Custom normal N(100, 15)
/// let n = Normal::new(100.0, 15.0).unwrap();
/// println!("Mean: {}", n.mean());
/// println!("P(X < 130) = {}", n.cdf(130.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    /// Mean (μ)
    mu: f64,
    /// Standard deviation (σ)
    sigma: f64,
}

impl Normal {
    /// Create a new normal distribution with given mean and standard deviation.
    ///
    /// # Arguments
    ///
    /// * `mu` - Mean of the distribution
    /// * `sigma` - Standard deviation (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if sigma is not positive or mu is not finite.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        require_finite_positive("sigma", sigma)?;
        require_finite("mu", mu)?;
        Ok(Self { mu, sigma })
    }

    /// Create a standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Get the mean parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the standard deviation parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Standardize a value: z = (x - μ) / σ
    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std(&self) -> f64 {
        self.sigma
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        INV_SQRT_2PI * (-0.5 * z * z).exp() / self.sigma
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        -LN_SQRT_2PI - self.sigma.ln() - 0.5 * z * z
    }

    fn cdf(&self, x: f64) -> f64 {
        special::norm_cdf(self.standardize(x))
    }

    fn sf(&self, x: f64) -> f64 {
        special::norm_sf(self.standardize(x))
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok(self.mu + self.sigma * special::norm_ppf(p))
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok(self.mu + self.sigma * special::norm_isf(q))
    }

    fn median(&self) -> f64 {
        self.mu
    }

    fn probability(&self, x0: f64, x1: f64) -> StatsResult<f64> {
        if x0 > x1 {
            return Err(StatsError::InvalidRange {
                lower: x0,
                upper: x1,
            });
        }
        let s = self.sigma * SQRT_2;
        let v0 = (x0 - self.mu) / s;
        let v1 = (x1 - self.mu) / s;
        Ok(0.5 * special::erf_difference(v0, v1))
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Normal::new(self.mu, self.sigma) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_normal_creation() {
        let n = Normal::new(0.0, 1.0).unwrap();
        assert!((n.mu() - 0.0).abs() < 1e-10);
        assert!((n.sigma() - 1.0).abs() < 1e-10);

        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(matches!(
            Normal::new(0.0, -1.0),
            Err(StatsError::NotStrictlyPositive { .. })
        ));
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_normal_pdf() {
        let n = Normal::standard();

        // PDF at 0 should be 1/sqrt(2π) ≈ 0.3989422804
        assert!((n.pdf(0.0) - 0.3989422804014327).abs() < 1e-10);

        // PDF is symmetric
        assert!((n.pdf(1.0) - n.pdf(-1.0)).abs() < 1e-10);

        // PDF at ±1σ
        let pdf_1sigma = 0.24197072451914337_f64;
        assert!((n.pdf(1.0) - pdf_1sigma).abs() < 1e-10);
        assert!((n.log_pdf(1.0) - pdf_1sigma.ln()).abs() < 1e-10);
    }

    #[test]
    fn test_normal_cdf() {
        let n = Normal::standard();

        assert!((n.cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((n.cdf(1.959964) - 0.975).abs() < 1e-6);
        assert!((n.cdf(-1.959964) - 0.025).abs() < 1e-6);
        assert_eq!(n.cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(n.cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_normal_tails() {
        let n = Normal::standard();

        // Φ(-10) ≈ 7.6198530241605e-24, still resolved by both functions
        let lower = n.cdf(-10.0);
        assert_relative_eq!(lower, 7.619853024160527e-24, max_relative = 1e-10);
        assert_relative_eq!(n.sf(10.0), lower, max_relative = 1e-12);
    }

    #[test]
    fn test_normal_ppf() {
        let n = Normal::standard();

        assert!(n.ppf(0.5).unwrap().abs() < 1e-9);
        assert!((n.ppf(0.975).unwrap() - 1.959963984540054).abs() < 1e-9);
        assert_eq!(n.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(n.ppf(1.0).unwrap(), f64::INFINITY);
        assert!(matches!(
            n.ppf(-0.1),
            Err(StatsError::InvalidProbability { .. })
        ));

        let n = Normal::new(100.0, 15.0).unwrap();
        for p in [0.01_f64, 0.1, 0.5, 0.9, 0.99] {
            let x = n.ppf(p).unwrap();
            assert!((n.cdf(x) - p).abs() < 1e-12, "Failed for p={}", p);
        }
    }

    #[test]
    fn test_normal_isf() {
        let n = Normal::new(2.0, 3.0).unwrap();
        for q in [1e-20_f64, 0.01, 0.5, 0.99] {
            let x = n.isf(q).unwrap();
            assert!((n.sf(x) - q).abs() / q < 1e-9, "Failed for q={}", q);
        }
        assert_eq!(n.isf(0.0).unwrap(), f64::INFINITY);
        assert_eq!(n.isf(1.0).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_normal_probability() {
        let n = Normal::standard();

        let p = n.probability(-1.0, 1.0).unwrap();
        assert!((p - 0.6826894921370859).abs() < 1e-12);

        // Far tail, where cdf(x1) - cdf(x0) would be 0
        let p = n.probability(9.0, 10.0).unwrap();
        let expected = n.sf(9.0) - n.sf(10.0);
        assert!(p > 0.0);
        assert!((p - expected).abs() / expected < 1e-10);

        assert!(matches!(
            n.probability(5.0, 2.0),
            Err(StatsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_normal_moments() {
        let n = Normal::new(5.0, 2.0).unwrap();
        assert!((n.mean() - 5.0).abs() < 1e-10);
        assert!((n.var() - 4.0).abs() < 1e-10);
        assert!((n.std() - 2.0).abs() < 1e-10);
        assert!((n.median() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_normal_sampler() {
        let n = Normal::new(3.0, 0.5).unwrap();
        let xs = n.sampler(StdRng::seed_from_u64(11)).samples(20_000);
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
        assert!((mean - 3.0).abs() < 0.02);
        assert!((var - 0.25).abs() < 0.02);
    }
}
