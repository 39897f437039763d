//! Lévy distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_finite_positive, require_probability, StatsResult};
use crate::stats::special;
use std::f64::consts::PI;

/// Lévy distribution.
///
/// The Lévy distribution with location μ and scale c > 0 has PDF:
///
/// f(x) = √(c/2π) exp(-c / (2(x - μ))) / (x - μ)^(3/2)  for x > μ
///
/// and CDF erfc(√(c / (2(x - μ)))). Its mean and variance are infinite.
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Levy, ContinuousDistribution};
///
/// let l = Levy::new(0.0, 1.0).unwrap();
/// println!("P(X > 10) = {}", l.sf(10.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Levy {
    /// Location parameter (μ)
    mu: f64,
    /// Scale parameter (c)
    c: f64,
    /// ln √(c/2π)
    half_log_c: f64,
}

impl Levy {
    /// Create a new Lévy distribution.
    ///
    /// # Arguments
    ///
    /// * `mu` - Location parameter, the lower end of the support
    /// * `c` - Scale parameter (must be > 0)
    pub fn new(mu: f64, c: f64) -> StatsResult<Self> {
        require_finite("mu", mu)?;
        require_finite_positive("c", c)?;
        Ok(Self {
            mu,
            c,
            half_log_c: 0.5 * (c / (2.0 * PI)).ln(),
        })
    }

    /// Get the location parameter.
    pub fn loc(&self) -> f64 {
        self.mu
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.c
    }

    fn quantile_from_erfc_inv(&self, t: f64) -> f64 {
        self.mu + self.c / (2.0 * t * t)
    }
}

impl Distribution for Levy {
    fn mean(&self) -> f64 {
        f64::INFINITY
    }

    fn var(&self) -> f64 {
        f64::INFINITY
    }
}

impl ContinuousDistribution for Levy {
    fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let y = x - self.mu;
        if y <= 0.0 || y == f64::INFINITY {
            return f64::NEG_INFINITY;
        }
        self.half_log_c - self.c / (2.0 * y) - 1.5 * y.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        let y = x - self.mu;
        if y <= 0.0 {
            return 0.0;
        }
        special::erfc((self.c / (2.0 * y)).sqrt())
    }

    fn sf(&self, x: f64) -> f64 {
        let y = x - self.mu;
        if y <= 0.0 {
            return 1.0;
        }
        special::erf((self.c / (2.0 * y)).sqrt())
    }

    fn support_lower_bound(&self) -> f64 {
        self.mu
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok(self.quantile_from_erfc_inv(special::erfc_inv(p)))
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok(self.quantile_from_erfc_inv(special::erf_inv(q)))
    }

    fn median(&self) -> f64 {
        self.quantile_from_erfc_inv(special::erfc_inv(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_levy_creation() {
        let l = Levy::new(1.0, 2.0).unwrap();
        assert_eq!(l.loc(), 1.0);
        assert_eq!(l.scale(), 2.0);
        assert!(Levy::new(0.0, 0.0).is_err());
        assert!(Levy::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_levy_pdf() {
        let l = Levy::new(0.0, 1.0).unwrap();
        // f(1) = exp(-1/2) / √(2π)
        assert!((l.pdf(1.0) - (-0.5f64).exp() * special::INV_SQRT_2PI).abs() < 1e-15);
        // Density vanishes at and below the location
        assert_eq!(l.pdf(0.0), 0.0);
        assert_eq!(l.pdf(-1.0), 0.0);
        assert_eq!(l.log_pdf(0.0), f64::NEG_INFINITY);
        assert_eq!(l.pdf(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_levy_cdf() {
        let l = Levy::new(0.0, 1.0).unwrap();
        // F(1) = erfc(1/√2) = 2(1 - Φ(1))
        assert!((l.cdf(1.0) - 2.0 * special::norm_sf(1.0)).abs() < 1e-15);
        assert!((l.cdf(1.0) + l.sf(1.0) - 1.0).abs() < 1e-15);
        assert_eq!(l.cdf(0.0), 0.0);
        assert_eq!(l.sf(-3.0), 1.0);
        assert_eq!(l.cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_levy_ppf() {
        let l = Levy::new(2.0, 0.5).unwrap();
        assert_eq!(l.ppf(0.0).unwrap(), 2.0);
        assert_eq!(l.ppf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(l.isf(0.0).unwrap(), f64::INFINITY);
        assert_eq!(l.isf(1.0).unwrap(), 2.0);
        for p in [1e-6_f64, 0.3, 0.5, 0.9] {
            let x = l.ppf(p).unwrap();
            assert!((l.cdf(x) - p).abs() / p < 1e-10, "Failed for p={}", p);
            let y = l.isf(p).unwrap();
            assert!((l.sf(y) - p).abs() / p < 1e-10, "Failed for q={}", p);
        }
    }

    #[test]
    fn test_levy_moments() {
        let l = Levy::new(0.0, 1.0).unwrap();
        assert_eq!(l.mean(), f64::INFINITY);
        assert_eq!(l.var(), f64::INFINITY);
        assert!((l.median() - 2.198109338317732).abs() < 1e-10);
    }

    #[test]
    fn test_levy_sampler() {
        let l = Levy::new(1.0, 1.0).unwrap();
        let mut xs = l.sampler(StdRng::seed_from_u64(6)).samples(10_001);
        assert!(xs.iter().all(|&x| x >= 1.0));
        xs.sort_by(f64::total_cmp);
        assert!((xs[5_000] - l.median()).abs() < 0.2);
    }
}
