//! Pascal (negative binomial) distribution.

use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{require_strictly_positive, require_unit_interval, StatsError, StatsResult};
use crate::stats::special;
use std::sync::OnceLock;

/// Pascal distribution: the number of failures before the r-th success in
/// independent Bernoulli trials with success probability p.
///
/// P(X = k) = C(k + r - 1, k) p^r (1-p)^k  for k = 0, 1, 2, ...
///
/// The CDF is the regularized incomplete beta function I_p(r, k + 1).
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Pascal, DiscreteDistribution, Distribution};
///
/// // Failures before the third success with p = 0.4
/// let nb = Pascal::new(3, 0.4).unwrap();
/// println!("P(X = 2) = {}", nb.pmf(2));
/// println!("Mean failures: {}", nb.mean()); // 4.5
/// ```
#[derive(Debug, Clone)]
pub struct Pascal {
    /// Number of successes
    r: i32,
    /// Success probability
    p: f64,
    /// r ln p
    log_p_term: f64,
    /// ln(1 - p)
    log1m: f64,
    median_cache: OnceLock<f64>,
}

impl Pascal {
    /// Create a new Pascal distribution.
    ///
    /// # Arguments
    ///
    /// * `r` - Number of successes (must be ≥ 1)
    /// * `p` - Probability of success on each trial (must be in (0, 1])
    pub fn new(r: i32, p: f64) -> StatsResult<Self> {
        if r <= 0 {
            return Err(StatsError::NotStrictlyPositive {
                name: "r",
                value: f64::from(r),
            });
        }
        require_unit_interval("p", p)?;
        require_strictly_positive("p", p)?;
        Ok(Self {
            r,
            p,
            log_p_term: f64::from(r) * p.ln(),
            log1m: (-p).ln_1p(),
            median_cache: OnceLock::new(),
        })
    }

    /// Get the number of successes.
    pub fn successes(&self) -> i32 {
        self.r
    }

    /// Get the success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Pascal {
    fn mean(&self) -> f64 {
        f64::from(self.r) * (1.0 - self.p) / self.p
    }

    fn var(&self) -> f64 {
        f64::from(self.r) * (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for Pascal {
    fn pmf(&self, k: i32) -> f64 {
        if k < 0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        self.log_pmf(k).exp()
    }

    fn log_pmf(&self, k: i32) -> f64 {
        if k < 0 {
            return f64::NEG_INFINITY;
        }
        if self.p == 1.0 {
            return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        let k_wide = i64::from(k);
        special::log_binom(k_wide + i64::from(self.r) - 1, k_wide)
            + self.log_p_term
            + f64::from(k) * self.log1m
    }

    fn cdf(&self, k: i32) -> f64 {
        if k < 0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return 1.0;
        }
        special::beta_reg(f64::from(self.r), f64::from(k) + 1.0, self.p)
    }

    fn sf(&self, k: i32) -> f64 {
        if k < 0 {
            return 1.0;
        }
        if self.p == 1.0 {
            return 0.0;
        }
        special::beta_reg_complement(f64::from(self.r), f64::from(k) + 1.0, self.p)
    }

    fn support_lower_bound(&self) -> i32 {
        0
    }

    fn support_upper_bound(&self) -> i32 {
        if self.p == 1.0 {
            0
        } else {
            i32::MAX
        }
    }

    fn median(&self) -> f64 {
        *self
            .median_cache
            .get_or_init(|| self.ppf(0.5).map_or(f64::NAN, f64::from))
    }
}
