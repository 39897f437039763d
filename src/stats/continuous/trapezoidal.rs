//! Trapezoidal distribution.

use super::{Triangular, Uniform};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{require_finite, require_probability, StatsError, StatsResult};
use crate::stats::sampler::{ContinuousSampler, InverseTransformSampler};
use rand::Rng;

/// Shape a [`Trapezoidal`] reduced to at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapezoidShape {
    /// `a == b` and `c == d`: flat on [a, d].
    Uniform,
    /// `b == c`: a single peak.
    Triangular,
    /// Rising edge, plateau and falling edge.
    Trapezoid,
}

/// Trapezoidal distribution on [a, d] with plateau [b, c].
///
/// The PDF rises linearly on [a, b], is constant at
/// h = 2 / (d + c - a - b) on [b, c] and falls linearly on [c, d].
///
/// The constructor picks the cheapest equivalent form: a plateau of zero
/// width gives a triangular distribution and vertical edges give a uniform
/// one. All queries are answered by the selected form.
///
/// # Example
///
/// ```ignore
/// use unidist::stats::{Trapezoidal, TrapezoidShape, ContinuousDistribution};
///
/// let t = Trapezoidal::new(0.0, 1.0, 3.0, 4.0).unwrap();
/// assert_eq!(t.shape(), TrapezoidShape::Trapezoid);
/// assert!((t.cdf(2.0) - 0.5).abs() < 1e-15);
///
/// let t = Trapezoidal::new(0.0, 2.0, 2.0, 4.0).unwrap();
/// assert_eq!(t.shape(), TrapezoidShape::Triangular);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Trapezoidal {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    kind: TrapezoidKind,
}

#[derive(Debug, Clone, Copy)]
enum TrapezoidKind {
    Uniform(Uniform),
    Triangular(Triangular),
    General(GeneralTrapezoid),
}

impl Trapezoidal {
    /// Create a trapezoidal distribution with a ≤ b ≤ c ≤ d and a < d.
    ///
    /// # Errors
    ///
    /// `InvalidRange` if a ≥ d, `TooSmall` / `TooLarge` if b or c lie
    /// outside their order constraints.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> StatsResult<Self> {
        require_finite("a", a)?;
        require_finite("b", b)?;
        require_finite("c", c)?;
        require_finite("d", d)?;
        if a >= d {
            return Err(StatsError::InvalidRange { lower: a, upper: d });
        }
        if b < a {
            return Err(StatsError::TooSmall {
                name: "b",
                value: b,
                min: a,
            });
        }
        if c < b {
            return Err(StatsError::TooSmall {
                name: "c",
                value: c,
                min: b,
            });
        }
        if c > d {
            return Err(StatsError::TooLarge {
                name: "c",
                value: c,
                max: d,
            });
        }

        let kind = if b == c {
            TrapezoidKind::Triangular(Triangular::new(a, b, d)?)
        } else if a == b && c == d {
            TrapezoidKind::Uniform(Uniform::new(a, d)?)
        } else {
            TrapezoidKind::General(GeneralTrapezoid::new(a, b, c, d))
        };
        Ok(Self { a, b, c, d, kind })
    }

    /// Which equivalent form was selected.
    pub fn shape(&self) -> TrapezoidShape {
        match self.kind {
            TrapezoidKind::Uniform(_) => TrapezoidShape::Uniform,
            TrapezoidKind::Triangular(_) => TrapezoidShape::Triangular,
            TrapezoidKind::General(_) => TrapezoidShape::Trapezoid,
        }
    }

    /// Get the parameters (a, b, c, d).
    pub fn params(&self) -> (f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d)
    }

    fn variant(&self) -> &dyn ContinuousDistribution {
        match &self.kind {
            TrapezoidKind::Uniform(u) => u,
            TrapezoidKind::Triangular(t) => t,
            TrapezoidKind::General(g) => g,
        }
    }
}

impl Distribution for Trapezoidal {
    fn mean(&self) -> f64 {
        self.variant().mean()
    }

    fn var(&self) -> f64 {
        self.variant().var()
    }
}

impl ContinuousDistribution for Trapezoidal {
    fn pdf(&self, x: f64) -> f64 {
        self.variant().pdf(x)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        self.variant().log_pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.variant().cdf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        self.variant().sf(x)
    }

    fn support_lower_bound(&self) -> f64 {
        self.a
    }

    fn support_upper_bound(&self) -> f64 {
        self.d
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        self.variant().ppf(p)
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        self.variant().isf(q)
    }

    fn median(&self) -> f64 {
        self.variant().median()
    }

    fn probability(&self, x0: f64, x1: f64) -> StatsResult<f64> {
        self.variant().probability(x0, x1)
    }

    fn sampler<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn ContinuousSampler + 'a> {
        match &self.kind {
            TrapezoidKind::Uniform(u) => u.sampler(rng),
            TrapezoidKind::Triangular(t) => t.sampler(rng),
            TrapezoidKind::General(g) => Box::new(InverseTransformSampler::new(g, rng)),
        }
    }
}

/// Trapezoid with a plateau of positive width.
#[derive(Debug, Clone, Copy)]
struct GeneralTrapezoid {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    /// Plateau height
    h: f64,
}

impl GeneralTrapezoid {
    fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            a,
            b,
            c,
            d,
            h: 2.0 / (d + c - a - b),
        }
    }

    /// P(X ≤ x) on the rising edge a ≤ x < b.
    fn rising_area(&self, x: f64) -> f64 {
        self.h * (x - self.a) * (x - self.a) / (2.0 * (self.b - self.a))
    }

    /// P(X > x) on the falling edge c < x ≤ d.
    fn falling_area(&self, x: f64) -> f64 {
        self.h * (self.d - x) * (self.d - x) / (2.0 * (self.d - self.c))
    }

    /// Mass of the rising edge.
    fn rising_mass(&self) -> f64 {
        self.h * (self.b - self.a) / 2.0
    }

    /// Mass of the falling edge.
    fn falling_mass(&self) -> f64 {
        self.h * (self.d - self.c) / 2.0
    }

    fn rising_quantile(&self, p: f64) -> f64 {
        self.a + (2.0 * p * (self.b - self.a) / self.h).sqrt()
    }

    fn falling_quantile(&self, q: f64) -> f64 {
        self.d - (2.0 * q * (self.d - self.c) / self.h).sqrt()
    }
}

impl Distribution for GeneralTrapezoid {
    fn mean(&self) -> f64 {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        (d * d + d * c + c * c - b * b - b * a - a * a) / (3.0 * (d + c - b - a))
    }

    fn var(&self) -> f64 {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let second = ((d + c) * (d * d + c * c) - (b + a) * (b * b + a * a)) / (6.0 * (d + c - b - a));
        let m = self.mean();
        second - m * m
    }
}

impl ContinuousDistribution for GeneralTrapezoid {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.d {
            0.0
        } else if x < self.b {
            self.h * (x - self.a) / (self.b - self.a)
        } else if x <= self.c {
            self.h
        } else {
            self.h * (self.d - x) / (self.d - self.c)
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x < self.b {
            self.rising_area(x)
        } else if x <= self.c {
            self.h * (2.0 * x - self.a - self.b) / 2.0
        } else if x < self.d {
            1.0 - self.falling_area(x)
        } else {
            1.0
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.a {
            1.0
        } else if x < self.b {
            1.0 - self.rising_area(x)
        } else if x <= self.c {
            self.h * (self.d + self.c - 2.0 * x) / 2.0
        } else if x < self.d {
            self.falling_area(x)
        } else {
            0.0
        }
    }

    fn support_lower_bound(&self) -> f64 {
        self.a
    }

    fn support_upper_bound(&self) -> f64 {
        self.d
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        if p <= self.rising_mass() {
            Ok(self.rising_quantile(p))
        } else if p <= 1.0 - self.falling_mass() {
            Ok(p / self.h + (self.a + self.b) / 2.0)
        } else {
            Ok(self.falling_quantile(1.0 - p))
        }
    }

    fn isf(&self, q: f64) -> StatsResult<f64> {
        require_probability(q)?;
        if q <= self.falling_mass() {
            Ok(self.falling_quantile(q))
        } else if q <= 1.0 - self.rising_mass() {
            Ok((self.c + self.d) / 2.0 - q / self.h)
        } else {
            Ok(self.rising_quantile(1.0 - q))
        }
    }

    fn median(&self) -> f64 {
        self.ppf(0.5).unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_trapezoidal_validation() {
        assert!(matches!(
            Trapezoidal::new(1.0, 1.0, 1.0, 1.0),
            Err(StatsError::InvalidRange { .. })
        ));
        assert!(matches!(
            Trapezoidal::new(0.0, -1.0, 2.0, 3.0),
            Err(StatsError::TooSmall { name: "b", .. })
        ));
        assert!(matches!(
            Trapezoidal::new(0.0, 2.0, 1.0, 3.0),
            Err(StatsError::TooSmall { name: "c", .. })
        ));
        assert!(matches!(
            Trapezoidal::new(0.0, 1.0, 4.0, 3.0),
            Err(StatsError::TooLarge { name: "c", .. })
        ));
        assert!(Trapezoidal::new(0.0, 1.0, 2.0, f64::NAN).is_err());
    }

    #[test]
    fn test_trapezoidal_shape_selection() {
        let t = Trapezoidal::new(0.0, 1.0, 3.0, 4.0).unwrap();
        assert_eq!(t.shape(), TrapezoidShape::Trapezoid);
        assert_eq!(t.params(), (0.0, 1.0, 3.0, 4.0));

        let t = Trapezoidal::new(0.0, 2.0, 2.0, 4.0).unwrap();
        assert_eq!(t.shape(), TrapezoidShape::Triangular);

        let t = Trapezoidal::new(0.0, 0.0, 4.0, 4.0).unwrap();
        assert_eq!(t.shape(), TrapezoidShape::Uniform);

        // One vertical edge is still a general trapezoid
        let t = Trapezoidal::new(0.0, 0.0, 2.0, 4.0).unwrap();
        assert_eq!(t.shape(), TrapezoidShape::Trapezoid);
    }

    #[test]
    fn test_trapezoidal_matches_collapsed_forms() {
        let t = Trapezoidal::new(0.0, 1.0, 1.0, 4.0).unwrap();
        let tri = Triangular::new(0.0, 1.0, 4.0).unwrap();
        for x in [0.5_f64, 1.0, 2.5] {
            assert_eq!(t.pdf(x), tri.pdf(x));
            assert_eq!(t.cdf(x), tri.cdf(x));
        }
        assert_eq!(t.ppf(0.3).unwrap(), tri.ppf(0.3).unwrap());

        let t = Trapezoidal::new(2.0, 2.0, 6.0, 6.0).unwrap();
        assert!((t.pdf(3.0) - 0.25).abs() < 1e-15);
        assert!((t.cdf(3.0) - 0.25).abs() < 1e-15);
        assert!((t.probability(1.0, 3.0).unwrap() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_trapezoidal_pdf_cdf() {
        // h = 2 / (4 + 3 - 0 - 1) = 1/3
        let t = Trapezoidal::new(0.0, 1.0, 3.0, 4.0).unwrap();
        assert!((t.pdf(2.0) - 1.0 / 3.0).abs() < 1e-15);
        assert!((t.pdf(0.5) - 1.0 / 6.0).abs() < 1e-15);
        assert!((t.pdf(3.5) - 1.0 / 6.0).abs() < 1e-15);
        assert_eq!(t.pdf(-0.1), 0.0);
        assert_eq!(t.pdf(4.1), 0.0);

        assert!((t.cdf(1.0) - 1.0 / 6.0).abs() < 1e-15);
        assert!((t.cdf(2.0) - 0.5).abs() < 1e-15);
        assert!((t.sf(3.0) - 1.0 / 6.0).abs() < 1e-15);
        assert!((t.cdf(0.5) - 1.0 / 24.0).abs() < 1e-15);
        assert!((t.sf(3.5) - 1.0 / 24.0).abs() < 1e-15);
        for x in [0.3_f64, 1.7, 3.2] {
            assert!((t.cdf(x) + t.sf(x) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_trapezoidal_ppf() {
        let t = Trapezoidal::new(0.0, 1.0, 3.0, 5.0).unwrap();
        assert_eq!(t.ppf(0.0).unwrap(), 0.0);
        assert_eq!(t.ppf(1.0).unwrap(), 5.0);
        assert_eq!(t.isf(0.0).unwrap(), 5.0);
        assert_eq!(t.isf(1.0).unwrap(), 0.0);
        for p in [0.05_f64, 0.2, 0.5, 0.8, 0.97] {
            let x = t.ppf(p).unwrap();
            assert!((t.cdf(x) - p).abs() < 1e-14, "Failed for p={}", p);
            let y = t.isf(p).unwrap();
            assert!((t.sf(y) - p).abs() < 1e-14, "Failed for q={}", p);
        }
    }

    #[test]
    fn test_trapezoidal_moments() {
        // Symmetric trapezoid centred on 2
        let t = Trapezoidal::new(0.0, 1.0, 3.0, 4.0).unwrap();
        assert!((t.mean() - 2.0).abs() < 1e-14);
        assert!((t.median() - 2.0).abs() < 1e-14);
        // E[X²] = ((7)(25) - (1)(1)) / 36 = 174 / 36
        assert!((t.var() - (174.0 / 36.0 - 4.0)).abs() < 1e-13);

        // Uniform form uses its own moments
        let t = Trapezoidal::new(0.0, 0.0, 6.0, 6.0).unwrap();
        assert!((t.var() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_trapezoidal_sampler() {
        let t = Trapezoidal::new(0.0, 1.0, 3.0, 4.0).unwrap();
        let xs = t.sampler(StdRng::seed_from_u64(19)).samples(20_000);
        assert!(xs.iter().all(|&x| (0.0..=4.0).contains(&x)));
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!((mean - 2.0).abs() < 0.03);
    }
}
