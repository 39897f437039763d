//! Pareto distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite_positive, require_probability, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use rand::Rng;

/// Pareto distribution (Type I).
///
/// The Pareto distribution is a power-law probability distribution with PDF:
///
/// f(x; α, xₘ) = α * xₘ^α / x^(α+1)  for x ≥ xₘ
///
/// where:
/// - α > 0 is the shape parameter (tail index)
/// - xₘ > 0 is the scale parameter (minimum value)
///
/// The mean is infinite for α ≤ 1 and the variance is infinite for α ≤ 2.
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Pareto, ContinuousDistribution};
///
/// let p = Pareto::new(2.0, 1.0).unwrap();  // shape=2, scale=1
/// println!("PDF at 1: {}", p.pdf(1.0));
/// println!("Mean: {}", p.mean());  // 2.0
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pareto {
    /// Shape parameter (tail index, α > 0)
    shape: f64,
    /// Scale parameter (minimum value, xₘ > 0)
    scale: f64,
}

impl Pareto {
    /// Create a new Pareto distribution.
    ///
    /// # Arguments
    ///
    /// * `shape` - Shape parameter α (must be > 0)
    /// * `scale` - Scale parameter xₘ (must be > 0)
    pub fn new(shape: f64, scale: f64) -> StatsResult<Self> {
        require_finite_positive("shape", shape)?;
        require_finite_positive("scale", scale)?;
        Ok(Self { shape, scale })
    }

    /// Get the shape parameter.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution for Pareto {
    fn mean(&self) -> f64 {
        if self.shape <= 1.0 {
            f64::INFINITY
        } else {
            self.shape * self.scale / (self.shape - 1.0)
        }
    }

    fn var(&self) -> f64 {
        let a = self.shape;
        if a <= 2.0 {
            f64::INFINITY
        } else {
            self.scale * self.scale * a / ((a - 1.0) * (a - 1.0) * (a - 2.0))
        }
    }
}

impl ContinuousDistribution for Pareto {
    fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.scale || x == f64::INFINITY {
            return f64::NEG_INFINITY;
        }
        self.shape.ln() + self.shape * self.scale.ln() - (self.shape + 1.0) * x.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.scale {
            return 0.0;
        }
        -(self.shape * (self.scale / x).ln()).exp_m1()
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.scale {
            return 1.0;
        }
        (self.shape * (self.scale / x).ln()).exp()
    }

    fn support_lower_bound(&self) -> f64 {
        self.scale
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok(self.scale * (-(-p).ln_1p() / self.shape).exp())
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok(self.scale * q.powf(-1.0 / self.shape))
    }

    fn median(&self) -> f64 {
        self.scale * 2f64.powf(1.0 / self.shape)
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Pareto::new(self.scale, self.shape) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pareto_creation() {
        let p = Pareto::new(3.0, 2.0).unwrap();
        assert_eq!(p.shape(), 3.0);
        assert_eq!(p.scale(), 2.0);
        assert!(Pareto::new(0.0, 1.0).is_err());
        assert!(Pareto::new(1.0, 0.0).is_err());
    }

    #[test]
    fn test_pareto_pdf() {
        let p = Pareto::new(2.0, 1.0).unwrap();
        assert!((p.pdf(1.0) - 2.0).abs() < 1e-14);
        assert!((p.pdf(2.0) - 0.25).abs() < 1e-15);
        assert_eq!(p.pdf(0.5), 0.0);
        assert_eq!(p.log_pdf(0.5), f64::NEG_INFINITY);
    }

    #[test]
    fn test_pareto_cdf() {
        let p = Pareto::new(2.0, 1.0).unwrap();
        assert_eq!(p.cdf(1.0), 0.0);
        assert_eq!(p.sf(1.0), 1.0);
        assert!((p.cdf(2.0) - 0.75).abs() < 1e-15);
        assert!((p.sf(10.0) - 0.01).abs() < 1e-15);
        assert_eq!(p.cdf(f64::INFINITY), 1.0);
        assert_eq!(p.sf(f64::INFINITY), 0.0);
        // Just above the scale the CDF keeps relative precision
        let x = 1.0 + 1e-12;
        assert!((p.cdf(x) / 2e-12 - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_pareto_ppf() {
        let p = Pareto::new(2.5, 3.0).unwrap();
        assert_eq!(p.ppf(0.0).unwrap(), 3.0);
        assert_eq!(p.ppf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(p.isf(0.0).unwrap(), f64::INFINITY);
        assert_eq!(p.isf(1.0).unwrap(), 3.0);
        for prob in [0.01_f64, 0.1, 0.5, 0.9] {
            let x = p.ppf(prob).unwrap();
            assert!((p.cdf(x) - prob).abs() / prob < 1e-10, "Failed for p={}", prob);
        }
        for q in [1e-12_f64, 0.1, 0.5, 0.9] {
            let y = p.isf(q).unwrap();
            assert!((p.sf(y) - q).abs() / q < 1e-12, "Failed for q={}", q);
        }
    }

    #[test]
    fn test_pareto_moments() {
        let p = Pareto::new(3.0, 2.0).unwrap();
        assert!((p.mean() - 3.0).abs() < 1e-15);
        assert!((p.var() - 3.0).abs() < 1e-14);
        assert!((p.median() - 2.0 * 2f64.powf(1.0 / 3.0)).abs() < 1e-15);

        assert_eq!(Pareto::new(1.0, 1.0).unwrap().mean(), f64::INFINITY);
        assert_eq!(Pareto::new(2.0, 1.0).unwrap().var(), f64::INFINITY);
    }

    #[test]
    fn test_pareto_sampler() {
        let p = Pareto::new(4.0, 1.0).unwrap();
        let xs = p.sampler(StdRng::seed_from_u64(15)).samples(20_000);
        assert!(xs.iter().all(|&x| x >= 1.0));
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!((mean - 4.0 / 3.0).abs() < 0.02);
    }
}
