//! Discrete uniform distribution.

use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{require_probability, StatsError, StatsResult};
use crate::stats::sampler::{DiscreteDistrSampler, DiscreteInverseTransformSampler, DiscreteSampler};
use rand::Rng;

/// Discrete uniform distribution over the integers lower, ..., upper.
///
/// P(X = k) = 1 / n  with n = upper - lower + 1
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{UniformDiscrete, DiscreteDistribution, Distribution};
///
/// // A fair die
/// let die = UniformDiscrete::new(1, 6).unwrap();
/// println!("P(X ≤ 2) = {}", die.cdf(2)); // 1/3
/// println!("Mean: {}", die.mean()); // 3.5
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UniformDiscrete {
    lower: i32,
    upper: i32,
    /// Number of support points, as a float (may exceed i32::MAX)
    count: f64,
}

impl UniformDiscrete {
    /// Create a new discrete uniform distribution.
    ///
    /// # Arguments
    ///
    /// * `lower` - Smallest value of the support
    /// * `upper` - Largest value of the support (must be ≥ lower)
    pub fn new(lower: i32, upper: i32) -> StatsResult<Self> {
        if lower > upper {
            return Err(StatsError::InvalidRange {
                lower: f64::from(lower),
                upper: f64::from(upper),
            });
        }
        Ok(Self {
            lower,
            upper,
            count: f64::from(upper) - f64::from(lower) + 1.0,
        })
    }

    /// Get the smallest value of the support.
    pub fn lower(&self) -> i32 {
        self.lower
    }

    /// Get the largest value of the support.
    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Clamp an integer estimate onto the support.
    fn onto_support(&self, k: i64) -> i32 {
        let clamped = k.clamp(i64::from(self.lower), i64::from(self.upper));
        // In range after the clamp
        i32::try_from(clamped).unwrap_or(self.upper)
    }
}

impl Distribution for UniformDiscrete {
    fn mean(&self) -> f64 {
        0.5 * (f64::from(self.lower) + f64::from(self.upper))
    }

    fn var(&self) -> f64 {
        (self.count * self.count - 1.0) / 12.0
    }
}

impl DiscreteDistribution for UniformDiscrete {
    fn pmf(&self, k: i32) -> f64 {
        if k < self.lower || k > self.upper {
            0.0
        } else {
            1.0 / self.count
        }
    }

    fn log_pmf(&self, k: i32) -> f64 {
        if k < self.lower || k > self.upper {
            f64::NEG_INFINITY
        } else {
            -self.count.ln()
        }
    }

    fn cdf(&self, k: i32) -> f64 {
        if k < self.lower {
            0.0
        } else if k >= self.upper {
            1.0
        } else {
            (f64::from(k) - f64::from(self.lower) + 1.0) / self.count
        }
    }

    fn sf(&self, k: i32) -> f64 {
        if k < self.lower {
            1.0
        } else if k >= self.upper {
            0.0
        } else {
            (f64::from(self.upper) - f64::from(k)) / self.count
        }
    }

    fn support_lower_bound(&self) -> i32 {
        self.lower
    }

    fn support_upper_bound(&self) -> i32 {
        self.upper
    }

    fn ppf(&self, p: f64) -> StatsResult<i32> {
        require_probability(p)?;
        if p == 1.0 {
            return Ok(self.upper);
        }

        // cdf(k) >= p  <=>  k >= lower + p n - 1
        let estimate = i64::from(self.lower) + (p * self.count).ceil() as i64 - 1;
        let mut k = self.onto_support(estimate);
        if k < self.upper && self.cdf(k) < p {
            k += 1;
        }
        if k > self.lower && self.cdf(k - 1) >= p {
            k -= 1;
        }
        Ok(k)
    }

    fn isf(&self, q: f64) -> StatsResult<i32> {
        require_probability(q)?;
        if q == 0.0 {
            return Ok(self.upper);
        }

        // sf(k) <= q  <=>  k >= upper - q n
        let estimate = i64::from(self.upper) - (q * self.count).floor() as i64;
        let mut k = self.onto_support(estimate);
        if k < self.upper && self.sf(k) > q {
            k += 1;
        }
        if k > self.lower && self.sf(k - 1) <= q {
            k -= 1;
        }
        Ok(k)
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn DiscreteSampler + 'a> {
        match rand_distr::Uniform::new_inclusive(self.lower, self.upper) {
            Ok(g) => Box::new(DiscreteDistrSampler::new(g, rng, |k: i32| k)),
            Err(_) => Box::new(DiscreteInverseTransformSampler::new(self, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_discrete_creation() {
        let d = UniformDiscrete::new(1, 6).unwrap();
        assert_eq!(d.lower(), 1);
        assert_eq!(d.upper(), 6);
        assert!(UniformDiscrete::new(3, 3).is_ok());
        assert!(matches!(
            UniformDiscrete::new(4, 3),
            Err(StatsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_uniform_discrete_pmf_cdf() {
        let d = UniformDiscrete::new(1, 6).unwrap();
        assert!((d.pmf(3) - 1.0 / 6.0).abs() < 1e-15);
        assert_eq!(d.pmf(0), 0.0);
        assert_eq!(d.pmf(7), 0.0);
        assert!((d.log_pmf(2) + 6f64.ln()).abs() < 1e-15);
        assert_eq!(d.cdf(0), 0.0);
        assert!((d.cdf(2) - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(d.cdf(6), 1.0);
        assert!((d.sf(2) - 2.0 / 3.0).abs() < 1e-15);
        assert_eq!(d.sf(6), 0.0);
    }

    #[test]
    fn test_uniform_discrete_moments() {
        let d = UniformDiscrete::new(1, 6).unwrap();
        assert!((d.mean() - 3.5).abs() < 1e-15);
        assert!((d.var() - 35.0 / 12.0).abs() < 1e-14);
        assert_eq!(d.median(), 3.0);
    }

    #[test]
    fn test_uniform_discrete_ppf() {
        let d = UniformDiscrete::new(-2, 7).unwrap();
        assert_eq!(d.ppf(0.0).unwrap(), -2);
        assert_eq!(d.ppf(1.0).unwrap(), 7);
        assert_eq!(d.isf(0.0).unwrap(), 7);
        assert_eq!(d.isf(1.0).unwrap(), -2);
        for i in 1..100 {
            let p = f64::from(i) / 100.0;
            let k = d.ppf(p).unwrap();
            assert!(d.cdf(k) >= p, "p={p}");
            if k > d.lower() {
                assert!(d.cdf(k - 1) < p, "p={p}");
            }
            let k = d.isf(p).unwrap();
            assert!(d.sf(k) <= p, "q={p}");
            if k > d.lower() {
                assert!(d.sf(k - 1) > p, "q={p}");
            }
        }
        // Exact multiples of 1/n land on the support point itself
        assert_eq!(d.ppf(0.3).unwrap(), 0);
        assert_eq!(d.isf(0.3).unwrap(), 4);
    }

    #[test]
    fn test_uniform_discrete_full_range() {
        let d = UniformDiscrete::new(i32::MIN, i32::MAX).unwrap();
        assert!((d.mean() + 0.5).abs() < 1e-15);
        assert_eq!(d.ppf(0.5).unwrap(), -1);
        assert_eq!(d.ppf(0.0).unwrap(), i32::MIN);
        assert_eq!(d.isf(0.0).unwrap(), i32::MAX);
    }

    #[test]
    fn test_uniform_discrete_sampler() {
        let d = UniformDiscrete::new(1, 6).unwrap();
        let xs = d.sampler(StdRng::seed_from_u64(7)).samples(12_000);
        for face in 1..=6 {
            let hits = xs.iter().filter(|&&k| k == face).count();
            assert!((1800..2200).contains(&hits), "face {face}: {hits}");
        }
    }
}
