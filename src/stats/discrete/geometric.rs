//! Geometric distribution.

use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{
    require_probability, require_strictly_positive, require_unit_interval, StatsResult,
};
use crate::stats::sampler::{
    count_to_i32, DiscreteDistrSampler, DiscreteInverseTransformSampler, DiscreteSampler,
};
use rand::Rng;

/// Geometric distribution.
///
/// The geometric distribution models the number of failures before the first
/// success in a sequence of independent Bernoulli trials.
///
/// P(X = k) = (1-p)^k * p  for k = 0, 1, 2, ...
///
/// Note: This uses the "number of failures" parameterization where X ∈ {0, 1, 2, ...}.
/// Some texts use "number of trials" where X ∈ {1, 2, 3, ...}.
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Geometric, DiscreteDistribution, Distribution};
///
/// // Success probability 0.3
/// let g = Geometric::new(0.3).unwrap();
/// println!("P(X = 0) = {}", g.pmf(0)); // First trial succeeds
/// println!("Mean failures: {}", g.mean());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Geometric {
    /// Success probability
    p: f64,
    /// ln(1 - p), `-inf` when p = 1
    log1m: f64,
}

impl Geometric {
    /// Create a new geometric distribution.
    ///
    /// # Arguments
    ///
    /// * `p` - Probability of success on each trial (must be in (0, 1])
    pub fn new(p: f64) -> StatsResult<Self> {
        require_unit_interval("p", p)?;
        require_strictly_positive("p", p)?;
        Ok(Self {
            p,
            log1m: (-p).ln_1p(),
        })
    }

    /// Get the success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

/// Map a real-valued estimate of the quantile onto the support.
fn to_count(x: f64) -> i32 {
    x.ceil().clamp(0.0, f64::from(i32::MAX)) as i32
}

impl Distribution for Geometric {
    fn mean(&self) -> f64 {
        (1.0 - self.p) / self.p
    }

    fn var(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for Geometric {
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
        f64::from(k) * self.log1m + self.p.ln()
    }

    fn cdf(&self, k: i32) -> f64 {
        if k < 0 {
            return 0.0;
        }
        // CDF = 1 - (1-p)^(k+1)
        -((f64::from(k) + 1.0) * self.log1m).exp_m1()
    }

    fn sf(&self, k: i32) -> f64 {
        if k < 0 {
            return 1.0;
        }
        // SF = (1-p)^(k+1)
        ((f64::from(k) + 1.0) * self.log1m).exp()
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

    fn ppf(&self, prob: f64) -> StatsResult<i32> {
        require_probability(prob)?;
        if prob == 0.0 || self.p == 1.0 {
            return Ok(0);
        }
        if prob == 1.0 {
            return Ok(self.support_upper_bound());
        }

        // (k+1) ln(1-p) <= ln(1-prob)  =>  k >= ln(1-prob) / ln(1-p) - 1
        let mut k = to_count((-prob).ln_1p() / self.log1m - 1.0);
        while k < i32::MAX && self.cdf(k) < prob {
            k += 1;
        }
        while k > 0 && self.cdf(k - 1) >= prob {
            k -= 1;
        }
        Ok(k)
    }

    fn isf(&self, prob: f64) -> StatsResult<i32> {
        require_probability(prob)?;
        if prob == 1.0 || self.p == 1.0 {
            return Ok(0);
        }
        if prob == 0.0 {
            return Ok(self.support_upper_bound());
        }

        // (k+1) ln(1-p) <= ln(prob)
        let mut k = to_count(prob.ln() / self.log1m - 1.0);
        while k < i32::MAX && self.sf(k) > prob {
            k += 1;
        }
        while k > 0 && self.sf(k - 1) <= prob {
            k -= 1;
        }
        Ok(k)
    }

    fn median(&self) -> f64 {
        self.ppf(0.5).map_or(f64::NAN, f64::from)
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn DiscreteSampler + 'a> {
        match rand_distr::Geometric::new(self.p) {
            Ok(g) => Box::new(DiscreteDistrSampler::new(g, rng, count_to_i32)),
            Err(_) => Box::new(DiscreteInverseTransformSampler::new(self, rng)),
        }
    }
}
