//! Student's t distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_strictly_positive, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use crate::stats::special;
use rand::Rng;
use std::f64::consts::PI;

/// Student's t distribution.
///
/// The Student's t distribution with ν degrees of freedom has PDF:
///
/// f(x) = Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) (1 + x²/ν)^(-(ν+1)/2)
///
/// As ν → ∞, the t distribution approaches the standard normal.
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{StudentT, ContinuousDistribution, Distribution};
///
/// let t = StudentT::new(10.0).unwrap();
/// println!("95th percentile: {}", t.ppf(0.95).unwrap());
///
/// // Two-tailed critical value for α = 0.05
/// let alpha = 0.05;
/// let t_crit = t.isf(alpha / 2.0).unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    /// Degrees of freedom (ν)
    nu: f64,
    /// Log of normalizing constant
    log_norm: f64,
}

impl StudentT {
    /// Create a new Student's t distribution with ν degrees of freedom.
    ///
    /// # Arguments
    ///
    /// * `nu` - Degrees of freedom (must be positive, may be infinite)
    ///
    /// # Errors
    ///
    /// Returns an error if ν is not positive.
    pub fn new(nu: f64) -> StatsResult<Self> {
        require_strictly_positive("nu", nu)?;

        let log_norm = special::ln_gamma((nu + 1.0) / 2.0)
            - special::ln_gamma(nu / 2.0)
            - 0.5 * (nu * PI).ln();

        Ok(Self { nu, log_norm })
    }

    /// Get the degrees of freedom.
    pub fn df(&self) -> f64 {
        self.nu
    }

    /// P(X < -|t|), evaluated in whichever form of the incomplete beta keeps
    /// its argument away from 1.
    fn lower_tail(&self, t: f64) -> f64 {
        if t.is_infinite() {
            return 0.0;
        }
        let t2 = t * t;
        if t2 < self.nu {
            0.5 * special::beta_reg_complement(0.5, self.nu / 2.0, t2 / (self.nu + t2))
        } else {
            0.5 * special::beta_reg(self.nu / 2.0, 0.5, self.nu / (self.nu + t2))
        }
    }

    fn is_normal_limit(&self) -> bool {
        self.nu == f64::INFINITY
    }
}

impl Distribution for StudentT {
    fn mean(&self) -> f64 {
        if self.nu > 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn var(&self) -> f64 {
        if self.is_normal_limit() {
            1.0
        } else if self.nu > 2.0 {
            self.nu / (self.nu - 2.0)
        } else if self.nu > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if self.is_normal_limit() {
            return -0.5 * x * x - special::LN_SQRT_2PI;
        }
        self.log_norm - ((self.nu + 1.0) / 2.0) * (x * x / self.nu).ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        if self.is_normal_limit() {
            return special::norm_cdf(x);
        }
        if x.is_nan() {
            return f64::NAN;
        }
        let tail = self.lower_tail(x);
        if x < 0.0 {
            tail
        } else {
            1.0 - tail
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if self.is_normal_limit() {
            return special::norm_sf(x);
        }
        if x.is_nan() {
            return f64::NAN;
        }
        let tail = self.lower_tail(x);
        if x > 0.0 {
            tail
        } else {
            1.0 - tail
        }
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn median(&self) -> f64 {
        0.0
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::StudentT::new(self.nu) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
