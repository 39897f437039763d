//! F distribution (Fisher-Snedecor).

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite_positive, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use crate::stats::special;
use rand::Rng;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// F distribution (Fisher-Snedecor distribution).
///
/// The F distribution with d1 and d2 degrees of freedom has PDF:
///
/// f(x) = √((d1*x)^d1 * d2^d2 / (d1*x + d2)^(d1+d2)) / (x * B(d1/2, d2/2))
///
/// The F distribution arises as the ratio of two chi-squared random variables
/// divided by their degrees of freedom.
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{FDistribution, ContinuousDistribution};
///
/// // ANOVA F-test with 3 and 20 degrees of freedom
/// let f = FDistribution::new(3.0, 20.0).unwrap();
/// let f_stat = 3.5;
/// let p_value = f.sf(f_stat); // Right-tail probability
/// ```
#[derive(Debug, Clone)]
pub struct FDistribution {
    /// Numerator degrees of freedom (d1)
    d1: f64,
    /// Denominator degrees of freedom (d2)
    d2: f64,
    /// Log of normalizing constant
    log_norm: f64,
    median_cache: OnceLock<f64>,
}

impl FDistribution {
    /// Create a new F distribution.
    ///
    /// # Arguments
    ///
    /// * `d1` - Numerator degrees of freedom (must be positive)
    /// * `d2` - Denominator degrees of freedom (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is not positive and finite.
    pub fn new(d1: f64, d2: f64) -> StatsResult<Self> {
        require_finite_positive("d1", d1)?;
        require_finite_positive("d2", d2)?;

        // log_norm = (d1/2)*ln(d1) + (d2/2)*ln(d2) - ln(B(d1/2, d2/2))
        let log_norm =
            (d1 / 2.0) * d1.ln() + (d2 / 2.0) * d2.ln() - special::ln_beta(d1 / 2.0, d2 / 2.0);

        Ok(Self {
            d1,
            d2,
            log_norm,
            median_cache: OnceLock::new(),
        })
    }

    /// Get the numerator degrees of freedom.
    pub fn dfn(&self) -> f64 {
        self.d1
    }

    /// Get the denominator degrees of freedom.
    pub fn dfd(&self) -> f64 {
        self.d2
    }
}

impl Distribution for FDistribution {
    fn mean(&self) -> f64 {
        if self.d2 > 2.0 {
            self.d2 / (self.d2 - 2.0)
        } else {
            f64::NAN
        }
    }

    fn var(&self) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if d2 > 4.0 {
            2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0) * (d2 - 2.0) * (d2 - 4.0))
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for FDistribution {
    fn pdf(&self, x: f64) -> f64 {
        if x == 0.0 {
            return match self.d1.partial_cmp(&2.0) {
                Some(Ordering::Less) => f64::INFINITY,
                Some(Ordering::Equal) => 1.0,
                _ => 0.0,
            };
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 || x == f64::INFINITY {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            return self.pdf(0.0).ln();
        }
        let (d1, d2) = (self.d1, self.d2);
        self.log_norm + (d1 / 2.0 - 1.0) * x.ln() - ((d1 + d2) / 2.0) * (d1 * x + d2).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let (d1, d2) = (self.d1, self.d2);
        let d1x = d1 * x;
        if d1x > d2 {
            special::beta_reg_complement(d2 / 2.0, d1 / 2.0, d2 / (d2 + d1x))
        } else {
            special::beta_reg(d1 / 2.0, d2 / 2.0, d1x / (d1x + d2))
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        let (d1, d2) = (self.d1, self.d2);
        let d1x = d1 * x;
        if d1x > d2 {
            special::beta_reg(d2 / 2.0, d1 / 2.0, d2 / (d2 + d1x))
        } else {
            special::beta_reg_complement(d1 / 2.0, d2 / 2.0, d1x / (d1x + d2))
        }
    }

    fn support_lower_bound(&self) -> f64 {
        0.0
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn median(&self) -> f64 {
        *self
            .median_cache
            .get_or_init(|| self.ppf(0.5).unwrap_or(f64::NAN))
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::FisherF::new(self.d1, self.d2) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
