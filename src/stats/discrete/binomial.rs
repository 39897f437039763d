//! Binomial distribution.

use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{require_non_negative_count, require_unit_interval, StatsResult};
use crate::stats::sampler::{
    count_to_i32, DiscreteDistrSampler, DiscreteInverseTransformSampler, DiscreteSampler,
};
use crate::stats::special;
use rand::Rng;
use std::sync::OnceLock;

/// Binomial distribution.
///
/// The binomial distribution models the number of successes in n independent
/// Bernoulli trials with success probability p.
///
/// P(X = k) = C(n, k) p^k (1-p)^(n-k)
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Binomial, DiscreteDistribution, Distribution};
///
/// // 10 coin flips with fair coin
/// let b = Binomial::new(10, 0.5).unwrap();
/// println!("P(X = 5) = {}", b.pmf(5)); // Most likely outcome
/// println!("P(X ≤ 3) = {}", b.cdf(3)); // At most 3 heads
/// ```
#[derive(Debug, Clone)]
pub struct Binomial {
    /// Number of trials
    n: i32,
    /// Success probability
    p: f64,
    /// Failure probability (1 - p)
    q: f64,
    median_cache: OnceLock<f64>,
}

impl Binomial {
    /// Create a new binomial distribution.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of trials (must be ≥ 0)
    /// * `p` - Probability of success on each trial (must be in [0, 1])
    pub fn new(n: i32, p: f64) -> StatsResult<Self> {
        require_non_negative_count("n", n)?;
        require_unit_interval("p", p)?;
        Ok(Self {
            n,
            p,
            q: 1.0 - p,
            median_cache: OnceLock::new(),
        })
    }

    /// Get the number of trials.
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Get the success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Binomial {
    fn mean(&self) -> f64 {
        f64::from(self.n) * self.p
    }

    fn var(&self) -> f64 {
        f64::from(self.n) * self.p * self.q
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, k: i32) -> f64 {
        if k < 0 || k > self.n {
            return 0.0;
        }
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }

        self.log_pmf(k).exp()
    }

    fn log_pmf(&self, k: i32) -> f64 {
        if k < 0 || k > self.n {
            return f64::NEG_INFINITY;
        }
        if self.p == 0.0 {
            return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if self.p == 1.0 {
            return if k == self.n { 0.0 } else { f64::NEG_INFINITY };
        }

        let k_f = f64::from(k);
        let n_f = f64::from(self.n);

        special::log_binom(i64::from(self.n), i64::from(k))
            + k_f * self.p.ln()
            + (n_f - k_f) * (-self.p).ln_1p()
    }

    fn cdf(&self, k: i32) -> f64 {
        if k < 0 {
            return 0.0;
        }
        if k >= self.n || self.p == 0.0 {
            return 1.0;
        }
        if self.p == 1.0 {
            return 0.0;
        }

        // CDF = I_{1-p}(n-k, k+1) = 1 - I_p(k+1, n-k)
        special::beta_reg_complement(f64::from(k) + 1.0, f64::from(self.n - k), self.p)
    }

    fn sf(&self, k: i32) -> f64 {
        if k < 0 {
            return 1.0;
        }
        if k >= self.n || self.p == 0.0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return 1.0;
        }

        // SF = P(X > k) = I_p(k+1, n-k)
        special::beta_reg(f64::from(k) + 1.0, f64::from(self.n - k), self.p)
    }

    fn support_lower_bound(&self) -> i32 {
        if self.p == 1.0 {
            self.n
        } else {
            0
        }
    }

    fn support_upper_bound(&self) -> i32 {
        if self.p == 0.0 {
            0
        } else {
            self.n
        }
    }

    fn median(&self) -> f64 {
        *self
            .median_cache
            .get_or_init(|| self.ppf(0.5).map_or(f64::NAN, f64::from))
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn DiscreteSampler + 'a> {
        // n is validated non-negative
        match rand_distr::Binomial::new(self.n.unsigned_abs().into(), self.p) {
            Ok(g) => Box::new(DiscreteDistrSampler::new(g, rng, count_to_i32)),
            Err(_) => Box::new(DiscreteInverseTransformSampler::new(self, rng)),
        }
    }
}
