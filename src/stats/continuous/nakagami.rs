//! Nakagami distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_finite_positive, StatsError, StatsResult};
use crate::stats::special;
use std::f64::consts::{LN_2, PI};
use std::sync::OnceLock;

/// Smallest admissible shape.
const MIN_SHAPE: f64 = 0.5;

/// Nakagami distribution with shape μ ≥ 1/2 and spread Ω > 0.
///
/// f(x) = 2 μ^μ / (Γ(μ) Ω^μ) x^(2μ-1) exp(-μx²/Ω)  for x ≥ 0
///
/// X² is gamma distributed with shape μ and scale Ω/μ, so the CDF is the
/// regularized lower incomplete gamma function P(μ, μx²/Ω).
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Nakagami, ContinuousDistribution};
///
/// let n = Nakagami::new(1.0, 2.0).unwrap();
/// println!("P(X ≤ 1) = {}", n.cdf(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Nakagami {
    /// Shape parameter (μ)
    mu: f64,
    /// Spread parameter (Ω)
    omega: f64,
    /// ln 2 + μ ln μ - ln Γ(μ) - μ ln Ω
    log_norm: f64,
    median_cache: OnceLock<f64>,
}

impl Nakagami {
    /// Create a new Nakagami distribution.
    ///
    /// # Arguments
    ///
    /// * `mu` - Shape parameter (must be ≥ 0.5)
    /// * `omega` - Spread parameter (must be > 0)
    pub fn new(mu: f64, omega: f64) -> StatsResult<Self> {
        require_finite("mu", mu)?;
        if mu < MIN_SHAPE {
            return Err(StatsError::TooSmall {
                name: "mu",
                value: mu,
                min: MIN_SHAPE,
            });
        }
        require_finite_positive("omega", omega)?;

        let log_norm = LN_2 + mu * mu.ln() - special::ln_gamma(mu) - mu * omega.ln();
        Ok(Self {
            mu,
            omega,
            log_norm,
            median_cache: OnceLock::new(),
        })
    }

    /// Get the shape parameter μ.
    pub fn shape(&self) -> f64 {
        self.mu
    }

    /// Get the spread parameter Ω.
    pub fn spread(&self) -> f64 {
        self.omega
    }

    fn gamma_argument(&self, x: f64) -> f64 {
        self.mu * x * x / self.omega
    }
}

impl Distribution for Nakagami {
    fn mean(&self) -> f64 {
        (self.omega / self.mu).sqrt()
            * (special::ln_gamma(self.mu + 0.5) - special::ln_gamma(self.mu)).exp()
    }

    fn var(&self) -> f64 {
        let m = self.mean();
        self.omega - m * m
    }
}

impl ContinuousDistribution for Nakagami {
    fn pdf(&self, x: f64) -> f64 {
        if x == 0.0 {
            // Only the half-normal case has a non-zero density at the origin
            return if self.mu == MIN_SHAPE {
                (2.0 / (PI * self.omega)).sqrt()
            } else {
                0.0
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
        self.log_norm + (2.0 * self.mu - 1.0) * x.ln() - self.gamma_argument(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        special::gamma_p(self.mu, self.gamma_argument(x))
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        special::gamma_q(self.mu, self.gamma_argument(x))
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
}
