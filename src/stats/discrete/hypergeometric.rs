//! Hypergeometric distribution.

use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{require_non_negative_count, StatsError, StatsResult};
use crate::stats::sampler::{
    count_to_i32, DiscreteDistrSampler, DiscreteInverseTransformSampler, DiscreteSampler,
};
use crate::stats::special;
use rand::Rng;
use std::sync::OnceLock;

/// Hypergeometric distribution.
///
/// The hypergeometric distribution models the number of successes in n draws
/// without replacement from a population containing N items, of which K are
/// successes. It has PMF:
///
/// P(X = k) = C(K, k) * C(N-K, n-k) / C(N, n)
///
/// where:
/// - N is the population size
/// - K is the number of success states in the population
/// - n is the number of draws
/// - k is the number of observed successes
///
/// The CDF and survival function sum the PMF over whichever tail lies on the
/// near side of the mean, so both stay accurate far from the centre.
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Hypergeometric, DiscreteDistribution};
///
/// // Urn with 20 balls, 7 red, draw 12. What's P(exactly 4 red)?
/// let h = Hypergeometric::new(20, 7, 12).unwrap();
/// println!("P(X = 4): {}", h.pmf(4));
/// ```
#[derive(Debug, Clone)]
pub struct Hypergeometric {
    /// Population size (N)
    pop_size: i32,
    /// Number of success states in population (K)
    num_success: i32,
    /// Number of draws (n)
    num_draws: i32,
    /// ln C(N, n)
    log_total: f64,
    median_cache: OnceLock<f64>,
}

impl Hypergeometric {
    /// Create a new hypergeometric distribution.
    ///
    /// # Arguments
    ///
    /// * `pop_size` - Total population size (N > 0)
    /// * `num_success` - Number of success states (0 ≤ K ≤ N)
    /// * `num_draws` - Number of draws (0 ≤ n ≤ N)
    pub fn new(pop_size: i32, num_success: i32, num_draws: i32) -> StatsResult<Self> {
        if pop_size <= 0 {
            return Err(StatsError::NotStrictlyPositive {
                name: "pop_size",
                value: f64::from(pop_size),
            });
        }
        require_at_most("num_success", num_success, pop_size)?;
        require_at_most("num_draws", num_draws, pop_size)?;
        Ok(Self {
            pop_size,
            num_success,
            num_draws,
            log_total: special::log_binom(i64::from(pop_size), i64::from(num_draws)),
            median_cache: OnceLock::new(),
        })
    }

    /// Get the population size.
    pub fn pop_size(&self) -> i32 {
        self.pop_size
    }

    /// Get the number of success states.
    pub fn num_success(&self) -> i32 {
        self.num_success
    }

    /// Get the number of draws.
    pub fn num_draws(&self) -> i32 {
        self.num_draws
    }

    /// Σ pmf(i) for lower bound ≤ i ≤ k.
    fn lower_sum(&self, k: i32) -> f64 {
        (self.support_lower_bound()..=k).map(|i| self.pmf(i)).sum()
    }

    /// Σ pmf(i) for k < i ≤ upper bound.
    fn upper_sum(&self, k: i32) -> f64 {
        (k + 1..=self.support_upper_bound())
            .map(|i| self.pmf(i))
            .sum()
    }
}

/// Check `0 <= value <= max` for a count parameter.
fn require_at_most(name: &'static str, value: i32, max: i32) -> StatsResult<i32> {
    require_non_negative_count(name, value)?;
    if value > max {
        return Err(StatsError::TooLarge {
            name,
            value: f64::from(value),
            max: f64::from(max),
        });
    }
    Ok(value)
}

impl Distribution for Hypergeometric {
    fn mean(&self) -> f64 {
        let n = f64::from(self.num_draws);
        let k = f64::from(self.num_success);
        let big_n = f64::from(self.pop_size);
        n * k / big_n
    }

    fn var(&self) -> f64 {
        let n = f64::from(self.num_draws);
        let k = f64::from(self.num_success);
        let big_n = f64::from(self.pop_size);

        // Variance = n * K * (N-K) * (N-n) / (N² * (N-1))
        if big_n <= 1.0 {
            return 0.0;
        }
        n * k * (big_n - k) * (big_n - n) / (big_n * big_n * (big_n - 1.0))
    }
}

impl DiscreteDistribution for Hypergeometric {
    fn pmf(&self, k: i32) -> f64 {
        let log_p = self.log_pmf(k);
        if log_p.is_finite() {
            log_p.exp()
        } else {
            0.0
        }
    }

    fn log_pmf(&self, k: i32) -> f64 {
        if k < self.support_lower_bound() || k > self.support_upper_bound() {
            return f64::NEG_INFINITY;
        }

        let big_n = i64::from(self.pop_size);
        let big_k = i64::from(self.num_success);
        let n = i64::from(self.num_draws);
        let k = i64::from(k);

        // log(C(K,k)) + log(C(N-K, n-k)) - log(C(N, n))
        special::log_binom(big_k, k) + special::log_binom(big_n - big_k, n - k) - self.log_total
    }

    fn cdf(&self, k: i32) -> f64 {
        if k < self.support_lower_bound() {
            return 0.0;
        }
        if k >= self.support_upper_bound() {
            return 1.0;
        }
        if f64::from(k) <= self.mean() {
            self.lower_sum(k).min(1.0)
        } else {
            (1.0 - self.upper_sum(k)).max(0.0)
        }
    }

    fn sf(&self, k: i32) -> f64 {
        if k < self.support_lower_bound() {
            return 1.0;
        }
        if k >= self.support_upper_bound() {
            return 0.0;
        }
        if f64::from(k) <= self.mean() {
            (1.0 - self.lower_sum(k)).max(0.0)
        } else {
            self.upper_sum(k).min(1.0)
        }
    }

    fn support_lower_bound(&self) -> i32 {
        // max(0, n - (N - K))
        (self.num_draws - (self.pop_size - self.num_success)).max(0)
    }

    fn support_upper_bound(&self) -> i32 {
        self.num_draws.min(self.num_success)
    }

    fn median(&self) -> f64 {
        *self
            .median_cache
            .get_or_init(|| self.ppf(0.5).map_or(f64::NAN, f64::from))
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn DiscreteSampler + 'a> {
        let generator = rand_distr::Hypergeometric::new(
            self.pop_size.unsigned_abs().into(),
            self.num_success.unsigned_abs().into(),
            self.num_draws.unsigned_abs().into(),
        );
        match generator {
            Ok(g) => Box::new(DiscreteDistrSampler::new(g, rng, count_to_i32)),
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
    fn test_hypergeometric_creation() {
        let h = Hypergeometric::new(20, 7, 12).unwrap();
        assert_eq!(h.pop_size(), 20);
        assert_eq!(h.num_success(), 7);
        assert_eq!(h.num_draws(), 12);

        assert!(matches!(
            Hypergeometric::new(0, 0, 0),
            Err(StatsError::NotStrictlyPositive { name: "pop_size", .. })
        ));
        assert!(matches!(
            Hypergeometric::new(10, 15, 5),
            Err(StatsError::TooLarge { name: "num_success", .. })
        ));
        assert!(matches!(
            Hypergeometric::new(10, 5, 15),
            Err(StatsError::TooLarge { name: "num_draws", .. })
        ));
        assert!(matches!(
            Hypergeometric::new(10, -1, 5),
            Err(StatsError::Negative { name: "num_success", .. })
        ));
    }

    #[test]
    fn test_hypergeometric_bounds() {
        let h = Hypergeometric::new(20, 7, 12).unwrap();

        // min = max(0, n - (N-K)) = max(0, 12 - 13) = 0
        assert_eq!(h.support_lower_bound(), 0);

        // max = min(n, K) = min(12, 7) = 7
        assert_eq!(h.support_upper_bound(), 7);

        // Forced successes: 15 draws from 20 with only 5 failures
        let h = Hypergeometric::new(20, 15, 15).unwrap();
        assert_eq!(h.support_lower_bound(), 10);
        assert_eq!(h.support_upper_bound(), 15);
    }

    #[test]
    fn test_hypergeometric_pmf() {
        // Classic urn problem: 20 balls, 7 red, draw 12
        let h = Hypergeometric::new(20, 7, 12).unwrap();

        // C(7,4) C(13,8) / C(20,12)
        assert!((h.pmf(4) - 0.35758513931888547).abs() < 1e-12);

        // PMF should sum to 1 over valid range
        let sum: f64 = (0..=7).map(|k| h.pmf(k)).sum();
        assert!((sum - 1.0).abs() < 1e-10);

        // PMF outside range is 0
        assert_eq!(h.pmf(8), 0.0);
        assert_eq!(h.pmf(-1), 0.0);
    }

    #[test]
    fn test_hypergeometric_cdf() {
        let h = Hypergeometric::new(20, 7, 12).unwrap();

        assert!((h.cdf(3) - 0.25077399380804954).abs() < 1e-12);
        assert_eq!(h.cdf(-1), 0.0);
        assert_eq!(h.cdf(7), 1.0);
        assert_eq!(h.sf(7), 0.0);

        // CDF should be monotonically increasing
        let mut prev = 0.0;
        for k in 0..=7 {
            let curr = h.cdf(k);
            assert!(curr >= prev);
            assert!((curr + h.sf(k) - 1.0).abs() < 1e-12);
            prev = curr;
        }
    }

    #[test]
    fn test_hypergeometric_tails() {
        let h = Hypergeometric::new(2000, 100, 500).unwrap();
        let lower = 6.725304557780243e-8;
        assert!((h.cdf(5) - lower).abs() / lower < 1e-9);
        let upper = 2.7647091040739544e-8;
        assert!((h.sf(49) - upper).abs() / upper < 1e-9);
    }

    #[test]
    fn test_hypergeometric_mean() {
        let h = Hypergeometric::new(20, 7, 12).unwrap();

        // Mean = n * K / N = 12 * 7 / 20 = 4.2
        assert!((h.mean() - 4.2).abs() < 1e-10);
    }

    #[test]
    fn test_hypergeometric_variance() {
        let h = Hypergeometric::new(20, 7, 12).unwrap();

        // Var = n * K * (N-K) * (N-n) / (N² * (N-1))
        // = 12 * 7 * 13 * 8 / (400 * 19)
        let expected = 12.0 * 7.0 * 13.0 * 8.0 / (400.0 * 19.0);
        assert!((h.var() - expected).abs() < 1e-10);

        assert_eq!(Hypergeometric::new(1, 1, 1).unwrap().var(), 0.0);
    }

    #[test]
    fn test_hypergeometric_ppf() {
        let h = Hypergeometric::new(20, 7, 12).unwrap();

        assert_eq!(h.ppf(0.0).unwrap(), 0);
        assert_eq!(h.ppf(1.0).unwrap(), 7);

        // Round-trip
        for k in 0..=7 {
            let p = h.cdf(k);
            assert_eq!(h.ppf(p).unwrap(), k);
        }
        for k in 0..7 {
            let q = h.sf(k);
            assert_eq!(h.isf(q).unwrap(), k);
        }
        assert_eq!(h.median(), 4.0);
    }

    #[test]
    fn test_hypergeometric_extreme() {
        // All draws are successes
        let h = Hypergeometric::new(10, 10, 5).unwrap();
        assert!((h.pmf(5) - 1.0).abs() < 1e-10);
        assert_eq!(h.ppf(0.5).unwrap(), 5);

        // No successes possible
        let h = Hypergeometric::new(10, 0, 5).unwrap();
        assert!((h.pmf(0) - 1.0).abs() < 1e-10);
        assert_eq!(h.isf(0.5).unwrap(), 0);
    }

    #[test]
    fn test_hypergeometric_sampler() {
        let h = Hypergeometric::new(20, 7, 12).unwrap();
        let xs = h.sampler(StdRng::seed_from_u64(4)).samples(10_000);
        assert!(xs.iter().all(|&k| (0..=7).contains(&k)));
        let mean = xs.iter().map(|&k| f64::from(k)).sum::<f64>() / xs.len() as f64;
        assert!((mean - 4.2).abs() < 0.05);
    }
}
