//! Cauchy (Lorentz) distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_finite_positive, require_probability, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use rand::Rng;
use std::f64::consts::PI;

/// Cauchy (Lorentz) distribution.
///
/// The Cauchy distribution is a continuous probability distribution with PDF:
///
/// f(x; x₀, γ) = 1 / (πγ * [1 + ((x - x₀)/γ)²])
///
/// where:
/// - x₀ is the location parameter (median)
/// - γ > 0 is the scale parameter (half-width at half-maximum)
///
/// The mean and variance are undefined and reported as NaN.
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Cauchy, ContinuousDistribution};
///
/// let c = Cauchy::new(0.0, 1.0).unwrap();  // standard Cauchy
/// println!("PDF at 0: {}", c.pdf(0.0));    // 1/π ≈ 0.318
/// println!("CDF at 0: {}", c.cdf(0.0));    // 0.5
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cauchy {
    /// Location parameter (median)
    loc: f64,
    /// Scale parameter (half-width at half-maximum)
    scale: f64,
}

/// Standard Cauchy CDF, using the reflected arctangent in the far lower tail.
fn standard_cdf(z: f64) -> f64 {
    if z < -1.0 {
        -(1.0 / z).atan() / PI
    } else {
        0.5 + z.atan() / PI
    }
}

/// Standard Cauchy quantile, exact at 0, 1/2 and 1.
fn standard_ppf(p: f64) -> f64 {
    if p < 0.5 {
        -1.0 / (PI * p).tan()
    } else if p > 0.5 {
        1.0 / (PI * (1.0 - p)).tan()
    } else {
        0.0
    }
}

impl Cauchy {
    /// Create a new Cauchy distribution.
    ///
    /// # Arguments
    ///
    /// * `loc` - Location parameter (median)
    /// * `scale` - Scale parameter (must be > 0)
    pub fn new(loc: f64, scale: f64) -> StatsResult<Self> {
        require_finite("loc", loc)?;
        require_finite_positive("scale", scale)?;
        Ok(Self { loc, scale })
    }

    /// Create a standard Cauchy distribution (x₀ = 0, γ = 1).
    pub fn standard() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
        }
    }

    /// Get the location parameter.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution for Cauchy {
    fn mean(&self) -> f64 {
        f64::NAN
    }

    fn var(&self) -> f64 {
        f64::NAN
    }
}

impl ContinuousDistribution for Cauchy {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        1.0 / (PI * self.scale * (1.0 + z * z))
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        -(PI * self.scale).ln() - (z * z).ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        standard_cdf((x - self.loc) / self.scale)
    }

    fn sf(&self, x: f64) -> f64 {
        standard_cdf((self.loc - x) / self.scale)
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok(self.loc + self.scale * standard_ppf(p))
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok(self.loc - self.scale * standard_ppf(q))
    }

    fn median(&self) -> f64 {
        self.loc
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Cauchy::new(self.loc, self.scale) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
