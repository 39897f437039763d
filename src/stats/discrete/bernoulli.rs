//! Bernoulli distribution.

use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{require_probability, require_unit_interval, StatsResult};
use crate::stats::sampler::{DiscreteDistrSampler, DiscreteInverseTransformSampler, DiscreteSampler};
use rand::Rng;

/// Bernoulli distribution: a single trial that succeeds (1) with
/// probability p and fails (0) otherwise.
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Bernoulli, DiscreteDistribution, Distribution};
///
/// let b = Bernoulli::new(0.3).unwrap();
/// assert!((b.pmf(1) - 0.3).abs() < 1e-15);
/// assert!((b.var() - 0.21).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bernoulli {
    /// Success probability
    p: f64,
}

impl Bernoulli {
    /// Create a new Bernoulli distribution.
    ///
    /// # Arguments
    ///
    /// * `p` - Probability of success (must be in [0, 1])
    pub fn new(p: f64) -> StatsResult<Self> {
        require_unit_interval("p", p)?;
        Ok(Self { p })
    }

    /// Get the success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Bernoulli {
    fn mean(&self) -> f64 {
        self.p
    }

    fn var(&self) -> f64 {
        self.p * (1.0 - self.p)
    }
}

impl DiscreteDistribution for Bernoulli {
    fn pmf(&self, k: i32) -> f64 {
        match k {
            0 => 1.0 - self.p,
            1 => self.p,
            _ => 0.0,
        }
    }

    fn cdf(&self, k: i32) -> f64 {
        match k {
            k if k < 0 => 0.0,
            0 => 1.0 - self.p,
            _ => 1.0,
        }
    }

    fn sf(&self, k: i32) -> f64 {
        match k {
            k if k < 0 => 1.0,
            0 => self.p,
            _ => 0.0,
        }
    }

    fn support_lower_bound(&self) -> i32 {
        0
    }

    fn support_upper_bound(&self) -> i32 {
        1
    }

    fn ppf(&self, p: f64) -> StatsResult<i32> {
        require_probability(p)?;
        if p == 0.0 {
            return Ok(0);
        }
        if p == 1.0 {
            return Ok(1);
        }
        Ok(if p <= 1.0 - self.p { 0 } else { 1 })
    }

    fn isf(&self, q: f64) -> StatsResult<i32> {
        require_probability(q)?;
        if q == 0.0 {
            return Ok(1);
        }
        if q == 1.0 {
            return Ok(0);
        }
        Ok(if self.p <= q { 0 } else { 1 })
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn DiscreteSampler + 'a> {
        match rand_distr::Bernoulli::new(self.p) {
            Ok(g) => Box::new(DiscreteDistrSampler::new(g, rng, |b: bool| i32::from(b))),
            Err(_) => Box::new(DiscreteInverseTransformSampler::new(self, rng)),
        }
    }
}
