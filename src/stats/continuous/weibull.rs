//! Weibull distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite_positive, require_probability, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use crate::stats::special;
use rand::Rng;
use std::cmp::Ordering;
use std::f64::consts::LN_2;

/// Weibull distribution.
///
/// The Weibull distribution is a continuous probability distribution with PDF:
///
/// f(x; k, λ) = (k/λ) * (x/λ)^(k-1) * exp(-(x/λ)^k)  for x ≥ 0
///
/// where:
/// - k > 0 is the shape parameter
/// - λ > 0 is the scale parameter
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Weibull, ContinuousDistribution};
///
/// let w = Weibull::new(2.0, 1.0).unwrap();  // shape=2, scale=1
/// println!("PDF at 1.0: {}", w.pdf(1.0));
/// println!("CDF at 1.0: {}", w.cdf(1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Weibull {
    /// Shape parameter (k > 0)
    shape: f64,
    /// Scale parameter (λ > 0)
    scale: f64,
}

impl Weibull {
    /// Create a new Weibull distribution.
    ///
    /// # Arguments
    ///
    /// * `shape` - Shape parameter k (must be > 0)
    /// * `scale` - Scale parameter λ (must be > 0)
    pub fn new(shape: f64, scale: f64) -> StatsResult<Self> {
        require_finite_positive("shape", shape)?;
        require_finite_positive("scale", scale)?;
        Ok(Self { shape, scale })
    }

    /// Create a Rayleigh distribution (Weibull with shape=2).
    pub fn rayleigh(scale: f64) -> StatsResult<Self> {
        Self::new(2.0, scale)
    }

    /// Get the shape parameter.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Density at the origin, where the limit depends on the shape.
    fn pdf_at_zero(&self) -> f64 {
        match self.shape.partial_cmp(&1.0) {
            Some(Ordering::Less) => f64::INFINITY,
            Some(Ordering::Equal) => 1.0 / self.scale,
            _ => 0.0,
        }
    }

    /// Raw moment E[Xⁿ] = λⁿ Γ(1 + n/k).
    fn raw_moment(&self, n: f64) -> f64 {
        self.scale.powf(n) * special::ln_gamma(1.0 + n / self.shape).exp()
    }
}

impl Distribution for Weibull {
    fn mean(&self) -> f64 {
        self.raw_moment(1.0)
    }

    fn var(&self) -> f64 {
        let m = self.mean();
        self.raw_moment(2.0) - m * m
    }
}

impl ContinuousDistribution for Weibull {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return self.pdf_at_zero();
        }
        let t = x / self.scale;
        (self.shape / self.scale) * t.powf(self.shape - 1.0) * (-t.powf(self.shape)).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 || x == f64::INFINITY {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            return self.pdf_at_zero().ln();
        }
        let t = x / self.scale;
        (self.shape / self.scale).ln() + (self.shape - 1.0) * t.ln() - t.powf(self.shape)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-(x / self.scale).powf(self.shape)).exp_m1()
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        (-(x / self.scale).powf(self.shape)).exp()
    }

    fn support_lower_bound(&self) -> f64 {
        0.0
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        let t = -(-p).ln_1p();
        if t <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.scale * t.powf(1.0 / self.shape))
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        let t = -q.ln();
        if t <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.scale * t.powf(1.0 / self.shape))
    }

    fn median(&self) -> f64 {
        self.scale * LN_2.powf(1.0 / self.shape)
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Weibull::new(self.scale, self.shape) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
