//! Triangular distribution.

use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_probability, StatsError, StatsResult};
use crate::stats::sampler::{ContinuousSampler, DistrSampler, InverseTransformSampler};
use rand::Rng;

/// Triangular distribution with lower limit a, mode c and upper limit b.
///
/// The PDF rises linearly from 0 at a to 2/(b - a) at c and falls linearly
/// back to 0 at b:
///
/// f(x) = 2(x - a) / ((b - a)(c - a))  for a ≤ x < c
/// f(x) = 2(b - x) / ((b - a)(b - c))  for c < x ≤ b
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Triangular, ContinuousDistribution};
///
/// let t = Triangular::new(0.0, 1.0, 4.0).unwrap();
/// println!("P(X ≤ 1) = {}", t.cdf(1.0)); // 0.25
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangular {
    a: f64,
    c: f64,
    b: f64,
}

impl Triangular {
    /// Create a new triangular distribution.
    ///
    /// # Arguments
    ///
    /// * `a` - Lower limit
    /// * `c` - Mode, with a ≤ c ≤ b
    /// * `b` - Upper limit, with a < b
    pub fn new(a: f64, c: f64, b: f64) -> StatsResult<Self> {
        require_finite("a", a)?;
        require_finite("c", c)?;
        require_finite("b", b)?;
        if a >= b {
            return Err(StatsError::InvalidRange { lower: a, upper: b });
        }
        if c < a {
            return Err(StatsError::TooSmall {
                name: "c",
                value: c,
                min: a,
            });
        }
        if c > b {
            return Err(StatsError::TooLarge {
                name: "c",
                value: c,
                max: b,
            });
        }
        Ok(Self { a, c, b })
    }

    /// Get the lower limit.
    pub fn lower(&self) -> f64 {
        self.a
    }

    /// Get the mode.
    pub fn mode(&self) -> f64 {
        self.c
    }

    /// Get the upper limit.
    pub fn upper(&self) -> f64 {
        self.b
    }

    /// Mass to the left of the mode.
    fn left_mass(&self) -> f64 {
        (self.c - self.a) / (self.b - self.a)
    }

    /// P(X ≤ x) for a < x ≤ c.
    fn left_area(&self, x: f64) -> f64 {
        (x - self.a) * (x - self.a) / ((self.b - self.a) * (self.c - self.a))
    }

    /// P(X > x) for c ≤ x < b.
    fn right_area(&self, x: f64) -> f64 {
        (self.b - x) * (self.b - x) / ((self.b - self.a) * (self.b - self.c))
    }

    /// Quantile on the rising side for a lower-tail mass p.
    fn left_quantile(&self, p: f64) -> f64 {
        self.a + (p * (self.b - self.a) * (self.c - self.a)).sqrt()
    }

    /// Quantile on the falling side for an upper-tail mass q.
    fn right_quantile(&self, q: f64) -> f64 {
        self.b - (q * (self.b - self.a) * (self.b - self.c)).sqrt()
    }
}

impl Distribution for Triangular {
    fn mean(&self) -> f64 {
        (self.a + self.b + self.c) / 3.0
    }

    fn var(&self) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0
    }
}

impl ContinuousDistribution for Triangular {
    fn pdf(&self, x: f64) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        if x < a || x > b {
            0.0
        } else if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else if x == c {
            2.0 / (b - a)
        } else {
            2.0 * (b - x) / ((b - a) * (b - c))
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x <= self.c {
            self.left_area(x)
        } else if x < self.b {
            1.0 - self.right_area(x)
        } else {
            1.0
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.a {
            1.0
        } else if x <= self.c {
            1.0 - self.left_area(x)
        } else if x < self.b {
            self.right_area(x)
        } else {
            0.0
        }
    }

    fn support_lower_bound(&self) -> f64 {
        self.a
    }

    fn support_upper_bound(&self) -> f64 {
        self.b
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        if p <= self.left_mass() {
            Ok(self.left_quantile(p))
        } else {
            Ok(self.right_quantile(1.0 - p))
        }
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        if q <= 1.0 - self.left_mass() {
            Ok(self.right_quantile(q))
        } else {
            Ok(self.left_quantile(1.0 - q))
        }
    }

    fn median(&self) -> f64 {
        if self.left_mass() >= 0.5 {
            self.left_quantile(0.5)
        } else {
            self.right_quantile(0.5)
        }
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match rand_distr::Triangular::new(self.a, self.b, self.c) {
            Ok(g) => Box::new(DistrSampler::new(g, rng)),
            Err(_) => Box::new(InverseTransformSampler::new(self, rng)),
        }
    }
}
