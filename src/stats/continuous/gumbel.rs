//! Gumbel distribution (Extreme Value Type I).

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_finite_positive, require_probability, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use rand::Rng;
use std::f64::consts::{LN_2, PI};

/// Gumbel distribution (Extreme Value Type I).
///
/// The Gumbel distribution models the maximum of a number of samples of
/// various distributions. It has PDF:
///
/// f(x; μ, β) = (1/β) * exp(-(z + exp(-z)))
///
/// where z = (x - μ)/β and:
/// - μ is the location parameter (mode)
/// - β > 0 is the scale parameter
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Gumbel, ContinuousDistribution};
///
/// let g = Gumbel::new(0.0, 1.0).unwrap();  // standard Gumbel
/// println!("PDF at 0: {}", g.pdf(0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Gumbel {
    /// Location parameter (mode)
    loc: f64,
    /// Scale parameter
    scale: f64,
}

/// Euler-Mascheroni constant
const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

impl Gumbel {
    /// Create a new Gumbel distribution.
    ///
    /// # Arguments
    ///
    /// * `loc` - Location parameter (mode)
    /// * `scale` - Scale parameter (must be > 0)
    pub fn new(loc: f64, scale: f64) -> StatsResult<Self> {
        require_finite("loc", loc)?;
        require_finite_positive("scale", scale)?;
        Ok(Self { loc, scale })
    }

    /// Create a standard Gumbel distribution (μ = 0, β = 1).
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
}

impl Distribution for Gumbel {
    fn mean(&self) -> f64 {
        self.loc + self.scale * EULER_MASCHERONI
    }

    fn var(&self) -> f64 {
        PI * PI * self.scale * self.scale / 6.0
    }
}

impl ContinuousDistribution for Gumbel {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        let t = (-z).exp();
        if t.is_infinite() {
            // exp(-t) underflows before t overflows
            return 0.0;
        }
        t * (-t).exp() / self.scale
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z.is_infinite() {
            // z + exp(-z) is inf - inf at the lower end
            return f64::NEG_INFINITY;
        }
        -(z + (-z).exp()) - self.scale.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        (-(-z).exp()).exp()
    }

    fn sf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        -(-(-z).exp()).exp_m1()
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        Ok(self.loc - self.scale * (-p.ln()).ln())
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        Ok(self.loc - self.scale * (-(-q).ln_1p()).ln())
    }

    fn median(&self) -> f64 {
        self.loc - self.scale * LN_2.ln()
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Gumbel::new(self.loc, self.scale) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
