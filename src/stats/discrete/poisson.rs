//! Poisson distribution.

use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{require_finite_positive, StatsResult};
use crate::stats::sampler::{
    float_to_i32, DiscreteDistrSampler, DiscreteInverseTransformSampler, DiscreteSampler,
};
use crate::stats::special;
use rand::Rng;
use std::sync::OnceLock;

/// Poisson distribution.
///
/// The Poisson distribution models the number of events occurring in a fixed
/// interval when events occur independently at a constant rate λ.
///
/// P(X = k) = λ^k e^(-λ) / k!
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{Poisson, DiscreteDistribution, Distribution};
///
/// // Average 5 events per interval
/// let p = Poisson::new(5.0).unwrap();
/// println!("P(X = 5) = {}", p.pmf(5));
/// println!("P(X ≤ 3) = {}", p.cdf(3));
/// ```
#[derive(Debug, Clone)]
pub struct Poisson {
    /// Rate parameter (λ)
    lambda: f64,
    median_cache: OnceLock<f64>,
}

impl Poisson {
    /// Create a new Poisson distribution with rate λ.
    ///
    /// # Arguments
    ///
    /// * `lambda` - Rate parameter (must be positive and finite)
    pub fn new(lambda: f64) -> StatsResult<Self> {
        require_finite_positive("lambda", lambda)?;
        Ok(Self {
            lambda,
            median_cache: OnceLock::new(),
        })
    }

    /// Get the rate parameter λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution for Poisson {
    fn mean(&self) -> f64 {
        self.lambda
    }

    fn var(&self) -> f64 {
        self.lambda
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, k: i32) -> f64 {
        if k < 0 {
            return 0.0;
        }
        self.log_pmf(k).exp()
    }

    fn log_pmf(&self, k: i32) -> f64 {
        if k < 0 {
            return f64::NEG_INFINITY;
        }
        let k_f = f64::from(k);
        k_f * self.lambda.ln() - self.lambda - special::ln_gamma(k_f + 1.0)
    }

    fn cdf(&self, k: i32) -> f64 {
        if k < 0 {
            return 0.0;
        }
        // P(X ≤ k) = Q(k+1, λ)
        special::gamma_q(f64::from(k) + 1.0, self.lambda)
    }

    fn sf(&self, k: i32) -> f64 {
        if k < 0 {
            return 1.0;
        }
        // P(X > k) = P(k+1, λ)
        special::gamma_p(f64::from(k) + 1.0, self.lambda)
    }

    fn support_lower_bound(&self) -> i32 {
        0
    }

    fn support_upper_bound(&self) -> i32 {
        i32::MAX
    }

    fn median(&self) -> f64 {
        *self
            .median_cache
            .get_or_init(|| self.ppf(0.5).map_or(f64::NAN, f64::from))
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn DiscreteSampler + 'a> {
        match rand_distr::Poisson::new(self.lambda) {
            Ok(g) => Box::new(DiscreteDistrSampler::new(g, rng, float_to_i32)),
            Err(_) => Box::new(DiscreteInverseTransformSampler::new(self, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::error::StatsError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_poisson_creation() {
        let p = Poisson::new(5.0).unwrap();
        assert!((p.lambda() - 5.0).abs() < 1e-10);

        assert!(matches!(
            Poisson::new(0.0),
            Err(StatsError::NotStrictlyPositive { name: "lambda", .. })
        ));
        assert!(Poisson::new(-1.0).is_err());
        assert!(Poisson::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_poisson_moments() {
        let p = Poisson::new(4.0).unwrap();

        assert!((p.mean() - 4.0).abs() < 1e-10);
        assert!((p.var() - 4.0).abs() < 1e-10);
        assert!((p.std() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_poisson_pmf() {
        let p = Poisson::new(3.0).unwrap();

        // P(X = 0) = e^(-3)
        assert!((p.pmf(0) - (-3.0_f64).exp()).abs() < 1e-10);

        // P(X = 3) = 3^3 * e^(-3) / 3! = 27 * e^(-3) / 6
        let expected = 27.0 * (-3.0_f64).exp() / 6.0;
        assert!((p.pmf(3) - expected).abs() < 1e-10);

        // Sum of PMFs should approach 1 (test with large k)
        let total: f64 = (0..50).map(|k| p.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-10);

        assert_eq!(p.pmf(-1), 0.0);
    }

    #[test]
    fn test_poisson_cdf() {
        let p = Poisson::new(3.0).unwrap();

        // CDF(0) = P(X ≤ 0) = P(X = 0) = e^(-3)
        assert!((p.cdf(0) - (-3.0_f64).exp()).abs() < 1e-12);

        // CDF should be cumulative
        let cdf_3: f64 = (0..=3).map(|k| p.pmf(k)).sum();
        assert!((p.cdf(3) - cdf_3).abs() < 1e-12);

        assert_eq!(p.cdf(-1), 0.0);

        // CDF is monotonic
        for k in 0..10 {
            assert!(p.cdf(k) <= p.cdf(k + 1));
        }
    }

    #[test]
    fn test_poisson_ppf() {
        let p = Poisson::new(5.0).unwrap();

        // PPF should give smallest k with CDF(k) >= prob
        for k in 0..15 {
            let prob = p.cdf(k);
            assert_eq!(p.ppf(prob).unwrap(), k);
        }
        assert_eq!(p.ppf(0.0).unwrap(), 0);
        assert_eq!(p.ppf(1.0).unwrap(), i32::MAX);
        assert_eq!(p.median(), 5.0);
    }

    #[test]
    fn test_poisson_ppf_large_rate() {
        let p = Poisson::new(1e6).unwrap();
        for &prob in &[1e-10_f64, 0.5, 0.999_999] {
            let k = p.ppf(prob).unwrap();
            assert!(p.cdf(k) >= prob, "prob={prob}");
            assert!(p.cdf(k - 1) < prob, "prob={prob}");
        }
        for &q in &[1e-15_f64, 0.25] {
            let k = p.isf(q).unwrap();
            assert!(p.sf(k) <= q, "q={q}");
            assert!(p.sf(k - 1) > q, "q={q}");
        }
    }

    #[test]
    fn test_poisson_sf() {
        let p = Poisson::new(3.0).unwrap();

        // SF + CDF = 1
        for k in 0..10 {
            assert!((p.sf(k) + p.cdf(k) - 1.0).abs() < 1e-10);
        }
        assert_eq!(p.sf(-1), 1.0);

        // Far tail keeps relative precision
        let tail: f64 = (40..80).map(|k| p.pmf(k)).sum();
        assert!((p.sf(39) - tail).abs() / tail < 1e-10);
    }

    #[test]
    fn test_poisson_sampler() {
        let p = Poisson::new(6.5).unwrap();
        let xs = p.sampler(StdRng::seed_from_u64(6)).samples(10_000);
        assert!(xs.iter().all(|&k| k >= 0));
        let mean = xs.iter().map(|&k| f64::from(k)).sum::<f64>() / xs.len() as f64;
        assert!((mean - 6.5).abs() < 0.15);
    }
}
