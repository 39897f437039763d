//! Beta distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite_positive, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use crate::stats::special;
use rand::Rng;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Beta distribution.
///
/// The beta distribution with shape parameters α and β has PDF:
///
/// f(x) = x^(α-1) (1-x)^(β-1) / B(α, β)  for 0 ≤ x ≤ 1
///
/// where B(α, β) is the beta function.
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Beta, ContinuousDistribution, Distribution};
///
/// let b = Beta::new(2.0, 5.0).unwrap();
/// println!("Mean: {}", b.mean());
/// println!("P(X < 0.3) = {}", b.cdf(0.3));
/// ```
#[derive(Debug, Clone)]
pub struct Beta {
    /// First shape parameter (α)
    alpha: f64,
    /// Second shape parameter (β)
    beta: f64,
    /// ln B(α, β)
    log_beta: f64,
    median_cache: OnceLock<f64>,
}

impl Beta {
    /// Create a new beta distribution with shape parameters α and β.
    ///
    /// # Arguments
    ///
    /// * `alpha` - First shape parameter (must be positive)
    /// * `beta` - Second shape parameter (must be positive)
    pub fn new(alpha: f64, beta: f64) -> StatsResult<Self> {
        require_finite_positive("alpha", alpha)?;
        require_finite_positive("beta", beta)?;
        Ok(Self {
            alpha,
            beta,
            log_beta: special::ln_beta(alpha, beta),
            median_cache: OnceLock::new(),
        })
    }

    /// Get the first shape parameter α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the second shape parameter β.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

/// Log density at an end of [0, 1] where `shape` is the exponent's parameter.
fn log_pdf_at_edge(shape: f64, log_norm: f64) -> f64 {
    match shape.partial_cmp(&1.0) {
        Some(Ordering::Less) => f64::INFINITY,
        Some(Ordering::Equal) => log_norm,
        _ => f64::NEG_INFINITY,
    }
}

impl Distribution for Beta {
    fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    fn var(&self) -> f64 {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }
}

impl ContinuousDistribution for Beta {
    fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            return log_pdf_at_edge(self.alpha, -self.log_beta);
        }
        if x == 1.0 {
            return log_pdf_at_edge(self.beta, -self.log_beta);
        }
        (self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (-x).ln_1p() - self.log_beta
    }

    fn cdf(&self, x: f64) -> f64 {
        special::beta_reg(self.alpha, self.beta, x)
    }

    fn sf(&self, x: f64) -> f64 {
        special::beta_reg_complement(self.alpha, self.beta, x)
    }

    fn support_lower_bound(&self) -> f64 {
        0.0
    }

    fn support_upper_bound(&self) -> f64 {
        1.0
    }

    fn median(&self) -> f64 {
        *self
            .median_cache
            .get_or_init(|| self.ppf(0.5).unwrap_or(f64::NAN))
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Beta::new(self.alpha, self.beta) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
