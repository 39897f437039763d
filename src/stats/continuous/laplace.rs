//! Laplace (double exponential) distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_finite_positive, require_probability, StatsResult};

/// Laplace (double exponential) distribution.
///
/// The Laplace distribution is a continuous probability distribution with PDF:
///
/// f(x; μ, b) = 1/(2b) * exp(-|x - μ|/b)
///
/// where:
/// - μ is the location parameter (mean, median, mode)
/// - b > 0 is the scale parameter
///
/// It can be thought of as two exponential distributions spliced at the mean,
/// or as the distribution of the difference of two i.i.d. exponential random variables.
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Laplace, ContinuousDistribution};
///
/// let l = Laplace::new(0.0, 1.0).unwrap();  // standard Laplace
/// println!("PDF at 0: {}", l.pdf(0.0));     // 0.5
/// println!("CDF at 0: {}", l.cdf(0.0));     // 0.5
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Laplace {
    /// Location parameter (mean)
    loc: f64,
    /// Scale parameter
    scale: f64,
}

impl Laplace {
    /// Create a new Laplace distribution.
    ///
    /// # Arguments
    ///
    /// * `loc` - Location parameter (mean, median, mode)
    /// * `scale` - Scale parameter (must be > 0)
    pub fn new(loc: f64, scale: f64) -> StatsResult<Self> {
        require_finite("loc", loc)?;
        require_finite_positive("scale", scale)?;
        Ok(Self { loc, scale })
    }

    /// Create a standard Laplace distribution (μ = 0, b = 1).
    pub fn standard() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
        }
    }

    /// Get the location parameter.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Quantile measured from the lower tail, for 0 <= p <= 1/2.
    fn lower_quantile(&self, p: f64) -> f64 {
        self.loc + self.scale * (2.0 * p).ln()
    }

    /// Quantile measured from the upper tail, for 0 <= q <= 1/2.
    fn upper_quantile(&self, q: f64) -> f64 {
        self.loc - self.scale * (2.0 * q).ln()
    }
}

impl Distribution for Laplace {
    fn mean(&self) -> f64 {
        self.loc
    }

    fn var(&self) -> f64 {
        2.0 * self.scale * self.scale
    }
}

impl ContinuousDistribution for Laplace {
    fn pdf(&self, x: f64) -> f64 {
        (-(x - self.loc).abs() / self.scale).exp() / (2.0 * self.scale)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        -(x - self.loc).abs() / self.scale - (2.0 * self.scale).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z <= 0.0 {
            0.5 * z.exp()
        } else {
            1.0 - 0.5 * (-z).exp()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z >= 0.0 {
            0.5 * (-z).exp()
        } else {
            1.0 - 0.5 * z.exp()
        }
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        if p <= 0.5 {
            Ok(self.lower_quantile(p))
        } else {
            Ok(self.upper_quantile(1.0 - p))
        }
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        if q <= 0.5 {
            Ok(self.upper_quantile(q))
        } else {
            Ok(self.lower_quantile(1.0 - q))
        }
    }

    fn median(&self) -> f64 {
        self.loc
    }
}
