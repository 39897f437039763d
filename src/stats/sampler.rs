//! Random sampling from distributions.
//!
//! Every distribution can be sampled by inverse transform. Distributions with
//! a specialised generator in `rand_distr` hand out a [`DistrSampler`] or
//! [`DiscreteDistrSampler`] instead.

use super::distribution::{ContinuousDistribution, DiscreteDistribution};
use rand::Rng;

/// Draws real values.
pub trait ContinuousSampler {
    /// Draw one value.
    fn sample(&mut self) -> f64;

    /// Draw `n` values.
    fn samples(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample()).collect()
    }
}

/// Draws integer values.
pub trait DiscreteSampler {
    /// Draw one value.
    fn sample(&mut self) -> i32;

    /// Draw `n` values.
    fn samples(&mut self, n: usize) -> Vec<i32> {
        (0..n).map(|_| self.sample()).collect()
    }
}

/// Inverse transform sampling: `ppf(u)` with `u` uniform in [0, 1).
pub struct InverseTransformSampler<'a, D: ?Sized, R> {
    dist: &'a D,
    rng: R,
}

impl<'a, D: ContinuousDistribution + ?Sized, R: Rng> InverseTransformSampler<'a, D, R> {
    /// Create a sampler for `dist` drawing uniforms from `rng`.
    pub fn new(dist: &'a D, rng: R) -> Self {
        Self { dist, rng }
    }
}

impl<D: ContinuousDistribution + ?Sized, R: Rng> ContinuousSampler
    for InverseTransformSampler<'_, D, R>
{
    fn sample(&mut self) -> f64 {
        let u: f64 = self.rng.random();
        // u is in [0, 1), so ppf cannot fail
        self.dist.ppf(u).unwrap_or(f64::NAN)
    }
}

/// Inverse transform sampling over the integers.
pub struct DiscreteInverseTransformSampler<'a, D: ?Sized, R> {
    dist: &'a D,
    rng: R,
}

impl<'a, D: DiscreteDistribution + ?Sized, R: Rng> DiscreteInverseTransformSampler<'a, D, R> {
    /// Create a sampler for `dist` drawing uniforms from `rng`.
    pub fn new(dist: &'a D, rng: R) -> Self {
        Self { dist, rng }
    }
}

impl<D: DiscreteDistribution + ?Sized, R: Rng> DiscreteSampler
    for DiscreteInverseTransformSampler<'_, D, R>
{
    fn sample(&mut self) -> i32 {
        let u: f64 = self.rng.random();
        self.dist
            .ppf(u)
            .unwrap_or_else(|_| self.dist.support_lower_bound())
    }
}

/// Adapts a `rand_distr` generator of `f64`.
pub struct DistrSampler<G, R> {
    generator: G,
    rng: R,
}

impl<G: rand_distr::Distribution<f64>, R: Rng> DistrSampler<G, R> {
    /// Wrap `generator`, drawing randomness from `rng`.
    pub fn new(generator: G, rng: R) -> Self {
        Self { generator, rng }
    }
}

impl<G: rand_distr::Distribution<f64>, R: Rng> ContinuousSampler for DistrSampler<G, R> {
    fn sample(&mut self) -> f64 {
        self.generator.sample(&mut self.rng)
    }
}

/// Adapts a `rand_distr` generator whose output is mapped onto `i32`.
pub struct DiscreteDistrSampler<G, R, T> {
    generator: G,
    rng: R,
    convert: fn(T) -> i32,
}

impl<G: rand_distr::Distribution<T>, R: Rng, T> DiscreteDistrSampler<G, R, T> {
    /// Wrap `generator`; `convert` maps its output onto the support.
    pub fn new(generator: G, rng: R, convert: fn(T) -> i32) -> Self {
        Self {
            generator,
            rng,
            convert,
        }
    }
}

impl<G: rand_distr::Distribution<T>, R: Rng, T> DiscreteSampler for DiscreteDistrSampler<G, R, T> {
    fn sample(&mut self) -> i32 {
        (self.convert)(self.generator.sample(&mut self.rng))
    }
}

/// Saturating `u64 -> i32`.
pub(crate) fn count_to_i32(k: u64) -> i32 {
    i32::try_from(k).unwrap_or(i32::MAX)
}

/// Saturating `f64 -> i32` for generators that return integral floats.
pub(crate) fn float_to_i32(k: f64) -> i32 {
    // `as` saturates and maps NaN to 0
    k as i32
}
