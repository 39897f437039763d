//! Truncated Normal distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_finite_positive, StatsError, StatsResult};
use crate::stats::special::{self, LN_SQRT_2PI};
use std::f64::consts::FRAC_1_SQRT_2;
use std::sync::OnceLock;

/// Truncated Normal distribution.
///
/// The truncated normal distribution is a normal distribution bounded to the interval [a, b].
/// It has parameters μ (mean of parent normal), σ (std dev of parent normal), a (lower bound), b (upper bound).
/// Either bound may be infinite.
///
/// The PDF is:
///
/// f(x) = φ((x-μ)/σ) / (σ * (Φ((b-μ)/σ) - Φ((a-μ)/σ)))  for a ≤ x ≤ b, 0 otherwise
///
/// where φ is the standard normal PDF and Φ is the standard normal CDF.
///
/// # Examples
///
/// ```ignore
/// use unidist::stats::{TruncatedNormal, ContinuousDistribution, Distribution};
///
/// // Truncate standard normal to [-1, 1]
/// let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();
/// assert!(tn.pdf(-0.5) > 0.0);
/// assert!(tn.pdf(2.0) == 0.0);  // Outside support
/// assert!(tn.cdf(1.0) == 1.0);  // At upper bound
/// ```
#[derive(Debug, Clone)]
pub struct TruncatedNormal {
    /// Mean of parent normal distribution (μ)
    mu: f64,
    /// Standard deviation of parent normal (σ)
    sigma: f64,
    /// Lower bound (a)
    a: f64,
    /// Upper bound (b)
    b: f64,
    /// Standardized lower bound: α = (a - μ) / σ
    alpha: f64,
    /// Standardized upper bound: β = (b - μ) / σ
    beta: f64,
    /// Normalization constant: Z = Φ(β) - Φ(α)
    z_norm: f64,
    median_cache: OnceLock<f64>,
}

impl TruncatedNormal {
    /// Create a new truncated normal distribution.
    ///
    /// # Arguments
    ///
    /// * `mu` - Mean of parent normal distribution
    /// * `sigma` - Standard deviation (must be positive)
    /// * `a` - Lower truncation bound
    /// * `b` - Upper truncation bound (must be > a)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `sigma <= 0` or `mu` is not finite
    /// - `a >= b`
    /// - the parent normal has no representable mass in [a, b]
    pub fn new(mu: f64, sigma: f64, a: f64, b: f64) -> StatsResult<Self> {
        require_finite_positive("sigma", sigma)?;
        require_finite("mu", mu)?;
        if !(a < b) {
            return Err(StatsError::InvalidRange {
                lower: a,
                upper: b,
            });
        }

        let alpha = (a - mu) / sigma;
        let beta = (b - mu) / sigma;
        let z_norm = 0.5 * special::erf_difference(alpha * FRAC_1_SQRT_2, beta * FRAC_1_SQRT_2);
        if z_norm <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "a",
                value: a,
                reason: format!("parent normal has no mass in [{a}, {b}]"),
            });
        }

        Ok(Self {
            mu,
            sigma,
            a,
            b,
            alpha,
            beta,
            z_norm,
            median_cache: OnceLock::new(),
        })
    }

    /// Get the mean parameter of parent normal.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the standard deviation parameter of parent normal.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Get the lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Get the upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }

    /// Mass of the parent normal between two standardized points.
    fn parent_mass(z0: f64, z1: f64) -> f64 {
        0.5 * special::erf_difference(z0 * FRAC_1_SQRT_2, z1 * FRAC_1_SQRT_2)
    }
}

/// z φ(z), which vanishes at ±∞.
fn z_phi(z: f64) -> f64 {
    if z.is_infinite() {
        0.0
    } else {
        z * special::norm_pdf(z)
    }
}

impl Distribution for TruncatedNormal {
    fn mean(&self) -> f64 {
        let d = special::norm_pdf(self.alpha) - special::norm_pdf(self.beta);
        self.mu + self.sigma * d / self.z_norm
    }

    fn var(&self) -> f64 {
        let d = (special::norm_pdf(self.alpha) - special::norm_pdf(self.beta)) / self.z_norm;
        let t = (z_phi(self.alpha) - z_phi(self.beta)) / self.z_norm;
        self.sigma * self.sigma * (1.0 + t - d * d)
    }
}

impl ContinuousDistribution for TruncatedNormal {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            return 0.0;
        }
        special::norm_pdf(self.standardize(x)) / (self.sigma * self.z_norm)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            return f64::NEG_INFINITY;
        }
        let z = self.standardize(x);
        -LN_SQRT_2PI - 0.5 * z * z - (self.sigma * self.z_norm).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            return 0.0;
        }
        if x >= self.b {
            return 1.0;
        }
        (Self::parent_mass(self.alpha, self.standardize(x)) / self.z_norm).min(1.0)
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.a {
            return 1.0;
        }
        if x >= self.b {
            return 0.0;
        }
        (Self::parent_mass(self.standardize(x), self.beta) / self.z_norm).min(1.0)
    }

    fn support_lower_bound(&self) -> f64 {
        self.a
    }

    fn support_upper_bound(&self) -> f64 {
        self.b
    }

    fn median(&self) -> f64 {
        *self
            .median_cache
            .get_or_init(|| self.ppf(0.5).unwrap_or(f64::NAN))
    }

    fn probability(&self, x0: f64, x1: f64) -> StatsResult<f64> {
        if x0 > x1 {
            return Err(StatsError::InvalidRange {
                lower: x0,
                upper: x1,
            });
        }
        let z0 = self.standardize(x0.max(self.a));
        let z1 = self.standardize(x1.min(self.b));
        if z0 >= z1 {
            return Ok(0.0);
        }
        Ok((Self::parent_mass(z0, z1) / self.z_norm).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_normal_creation() {
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();
        assert!((tn.mu() - 0.0).abs() < 1e-10);
        assert!((tn.sigma() - 1.0).abs() < 1e-10);
        assert!((tn.a() - (-1.0)).abs() < 1e-10);
        assert!((tn.b() - 1.0).abs() < 1e-10);

        // Invalid sigma
        assert!(TruncatedNormal::new(0.0, 0.0, -1.0, 1.0).is_err());
        assert!(TruncatedNormal::new(0.0, -1.0, -1.0, 1.0).is_err());

        // Invalid bounds
        assert!(matches!(
            TruncatedNormal::new(0.0, 1.0, 1.0, 1.0),
            Err(StatsError::InvalidRange { .. })
        ));
        assert!(TruncatedNormal::new(0.0, 1.0, 1.0, 0.0).is_err());
        assert!(TruncatedNormal::new(0.0, 1.0, f64::NAN, 0.0).is_err());

        // Non-finite parent parameters
        assert!(TruncatedNormal::new(f64::NAN, 1.0, -1.0, 1.0).is_err());
        assert!(TruncatedNormal::new(0.0, f64::INFINITY, -1.0, 1.0).is_err());

        // No mass in the interval
        assert!(TruncatedNormal::new(0.0, 1.0, 50.0, 60.0).is_err());

        // Half-infinite truncation is allowed
        assert!(TruncatedNormal::new(0.0, 1.0, 0.0, f64::INFINITY).is_ok());
    }

    #[test]
    fn test_truncated_normal_pdf_support() {
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();

        // PDF should be 0 outside [a, b]
        assert!(tn.pdf(-1.5) == 0.0);
        assert!(tn.pdf(1.5) == 0.0);

        // PDF should be positive inside [a, b]
        assert!(tn.pdf(-0.5) > 0.0);
        assert!(tn.pdf(0.0) > 0.0);
        assert!(tn.pdf(0.5) > 0.0);

        // At boundaries
        assert!(tn.pdf(-1.0) > 0.0);
        assert!(tn.pdf(1.0) > 0.0);
    }

    #[test]
    fn test_truncated_normal_pdf_normalization() {
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();

        // Simple numerical integration to check normalization
        let mut integral = 0.0;
        let dx = 0.01;
        for i in -100..=100 {
            let x = i as f64 * dx;
            integral += tn.pdf(x) * dx;
        }
        assert!((integral - 1.0).abs() < 0.01, "Integral: {}", integral);
    }

    #[test]
    fn test_truncated_normal_cdf() {
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();

        // CDF should be 0 at lower bound
        assert!(tn.cdf(-1.0) == 0.0);
        assert!(tn.cdf(-1.1) == 0.0);
        // Just above lower bound should be > 0
        assert!(tn.cdf(-0.99) > 0.0);

        // CDF should be 1 at upper bound
        assert!(tn.cdf(1.0) == 1.0);
        assert!(tn.cdf(1.1) == 1.0);

        // Symmetric truncation puts half the mass below μ
        assert!((tn.cdf(0.0) - 0.5).abs() < 1e-14);

        for x in [-0.5_f64, 0.0, 0.5] {
            assert!((tn.sf(x) + tn.cdf(x) - 1.0).abs() < 1e-14);
        }
    }

    #[test]
    fn test_truncated_normal_far_tail() {
        // All of the mass is beyond 8σ; Φ(b) - Φ(a) would cancel to 0
        let tn = TruncatedNormal::new(0.0, 1.0, 8.0, 9.0).unwrap();
        assert!(tn.cdf(8.5) > 0.0 && tn.cdf(8.5) < 1.0);
        assert!((tn.cdf(8.5) + tn.sf(8.5) - 1.0).abs() < 1e-12);
        let x = tn.ppf(0.5).unwrap();
        assert!(x > 8.0 && x < 9.0);
        assert!((tn.cdf(x) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_truncated_normal_ppf() {
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();

        // PPF(0) should be lower bound
        assert_eq!(tn.ppf(0.0).unwrap(), -1.0);

        // PPF(1) should be upper bound
        assert_eq!(tn.ppf(1.0).unwrap(), 1.0);

        // PPF should be inverse of CDF
        for p in [0.1_f64, 0.25, 0.5, 0.75, 0.9] {
            let x = tn.ppf(p).unwrap();
            assert!(
                (tn.cdf(x) - p).abs() < 1e-8,
                "Roundtrip failed for p={}: cdf(ppf(p)) = {}",
                p,
                tn.cdf(x)
            );
        }

        // Invalid probabilities
        assert!(tn.ppf(-0.1).is_err());
        assert!(tn.ppf(1.1).is_err());
    }

    #[test]
    fn test_truncated_normal_half_infinite_ppf() {
        // Half-normal
        let tn = TruncatedNormal::new(0.0, 1.0, 0.0, f64::INFINITY).unwrap();
        assert_eq!(tn.ppf(1.0).unwrap(), f64::INFINITY);
        // P(X <= x) = 2Φ(x) - 1, so the median is Φ⁻¹(0.75)
        assert!((tn.median() - 0.6744897501960817).abs() < 1e-8);
    }

    #[test]
    fn test_truncated_normal_moments() {
        // Standard normal truncated to [-1, 1] should have mean close to 0 by symmetry
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();
        assert!((tn.mean() - 0.0).abs() < 1e-10); // Symmetric

        // Var = 1 - 2φ(1) / (2Φ(1) - 1)
        let expected = 1.0 - 2.0 * 0.24197072451914337 / 0.6826894921370859;
        assert!((tn.var() - expected).abs() < 1e-12);

        // Half-normal: mean √(2/π), variance 1 - 2/π
        let tn = TruncatedNormal::new(0.0, 1.0, 0.0, f64::INFINITY).unwrap();
        let two_over_pi = 2.0 / std::f64::consts::PI;
        assert!((tn.mean() - two_over_pi.sqrt()).abs() < 1e-12);
        assert!((tn.var() - (1.0 - two_over_pi)).abs() < 1e-12);
    }

    #[test]
    fn test_truncated_normal_median() {
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();

        // Median should be close to 0 by symmetry
        assert!(tn.median().abs() < 1e-8);

        // Median should be between a and b
        assert!(tn.a() <= tn.median() && tn.median() <= tn.b());

        // CDF at median should be 0.5
        assert!((tn.cdf(tn.median()) - 0.5).abs() < 1e-8);
    }

    #[test]
    fn test_truncated_normal_probability() {
        let tn = TruncatedNormal::new(0.5, 1.0, -1.0, 2.0).unwrap();
        let p = tn.probability(-0.5, 1.0).unwrap();
        assert!((p - (tn.cdf(1.0) - tn.cdf(-0.5))).abs() < 1e-14);

        // Clamped to the support
        assert!((tn.probability(-10.0, 10.0).unwrap() - 1.0).abs() < 1e-14);
        assert_eq!(tn.probability(3.0, 4.0).unwrap(), 0.0);
        assert!(tn.probability(1.0, 0.0).is_err());
    }

    #[test]
    fn test_truncated_normal_log_pdf() {
        let tn = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();

        // log_pdf should match log(pdf) inside support
        for x in [-0.5_f64, 0.0, 0.5] {
            let log_pdf_direct = tn.log_pdf(x);
            let log_pdf_computed = tn.pdf(x).ln();
            assert!((log_pdf_direct - log_pdf_computed).abs() < 1e-10);
        }

        // log_pdf should be -∞ outside support
        assert!(tn.log_pdf(-1.5) == f64::NEG_INFINITY);
        assert!(tn.log_pdf(1.5) == f64::NEG_INFINITY);
    }
}
