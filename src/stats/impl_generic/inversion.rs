//! Numerical inversion of a continuous CDF or survival function.

use super::chebyshev_moments;
use crate::optimize::scalar::{brent_root, RootOptions};
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{require_probability, StatsResult};

/// Generic inverse CDF: the `x` with `cdf(x) = p`.
pub(crate) fn inverse_cdf<D>(dist: &D, p: f64) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    require_probability(p)?;
    inverse_probability(dist, p, 1.0 - p, false)
}

/// Generic inverse survival function: the `x` with `sf(x) = q`.
pub(crate) fn inverse_sf<D>(dist: &D, q: f64) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    require_probability(q)?;
    inverse_probability(dist, 1.0 - q, q, true)
}

/// Solve `cdf(x) = p`, or `sf(x) = q` when `complement` is set.
///
/// `p` and `q` are both passed so that whichever one is small keeps its full
/// precision.
fn inverse_probability<D>(dist: &D, p: f64, q: f64, complement: bool) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    if p == 0.0 {
        return Ok(dist.support_lower_bound());
    }
    if q == 0.0 {
        return Ok(dist.support_upper_bound());
    }

    // Monotone in x for either direction; the search loops below only
    // compare against it
    let below_target = |x: f64| {
        if complement {
            dist.sf(x) > q
        } else {
            dist.cdf(x) < p
        }
    };

    let moments = chebyshev_moments(dist.mean(), dist.std());

    let mut lower = dist.support_lower_bound();
    if lower == f64::NEG_INFINITY {
        if let Some((mu, sig)) = moments {
            lower = mu - sig * (q / p).sqrt();
            tracing::trace!(lower, "inversion: chebyshev lower bound");
        }
        if lower == f64::NEG_INFINITY {
            lower = dist.support_upper_bound().min(-1.0);
            while !below_target(lower) && lower > f64::NEG_INFINITY {
                lower *= 2.0;
            }
            lower = lower.max(-f64::MAX);
            tracing::trace!(lower, "inversion: expanded lower bound");
        }
    }

    let mut upper = dist.support_upper_bound();
    if upper == f64::INFINITY {
        if let Some((mu, sig)) = moments {
            upper = mu + sig * (p / q).sqrt();
            tracing::trace!(upper, "inversion: chebyshev upper bound");
        }
        if upper == f64::INFINITY {
            upper = lower.max(1.0);
            while below_target(upper) && upper < f64::INFINITY {
                upper *= 2.0;
            }
            upper = upper.min(f64::MAX);
            tracing::trace!(upper, "inversion: expanded upper bound");
        }
    }

    // The target lies beyond the largest finite value
    if upper == f64::MAX && below_target(upper) {
        tracing::debug!(p, q, "inversion: target beyond f64::MAX");
        return Ok(dist.support_upper_bound());
    }
    if lower == -f64::MAX && above_target(dist, lower, p, q, complement) {
        tracing::debug!(p, q, "inversion: target below -f64::MAX");
        return Ok(dist.support_lower_bound());
    }

    let fun = |x: f64| {
        if complement {
            dist.sf(x) - q
        } else {
            dist.cdf(x) - p
        }
    };

    // Midpoint without overflow for bounds near +/- f64::MAX
    let guess = lower + (0.5 * upper - 0.5 * lower);
    let result = brent_root(&fun, lower, guess, upper, &RootOptions::inversion())?;
    tracing::trace!(
        root = result.root,
        iterations = result.iterations,
        "inversion: solved"
    );
    let x = result.root;

    if !dist.is_support_connected() {
        let value = |x: f64| if complement { dist.sf(x) } else { dist.cdf(x) };
        return Ok(leftmost_on_plateau(&value, x, lower));
    }
    Ok(x)
}

/// Strictly past the target on the low side of the support.
fn above_target<D>(dist: &D, x: f64, p: f64, q: f64, complement: bool) -> bool
where
    D: ContinuousDistribution + ?Sized,
{
    if complement {
        dist.sf(x) < q
    } else {
        dist.cdf(x) > p
    }
}

/// The solver may land anywhere inside an interval where the CDF (or SF) is
/// flat. Move `x` to the left end of that interval, searching no lower than
/// `lower`.
///
/// `value` is the CDF or SF itself. Values within one ulp of each other count
/// as flat, since the tail sums behind them are not exact.
fn leftmost_on_plateau<F>(value: &F, x: f64, mut lower: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let dx = ulp(x);
    let step = (1e-10 * x.abs()).max(dx);
    if x - step < lower {
        return x;
    }
    let fx = value(x);
    if !within_one_ulp(value(x - step), fx) {
        return x;
    }

    let mut upper = x;
    while upper - lower > dx {
        let mid = 0.5 * lower + 0.5 * upper;
        if mid <= lower || mid >= upper {
            break;
        }
        if within_one_ulp(value(mid), fx) {
            upper = mid;
        } else {
            lower = mid;
        }
    }
    tracing::debug!(from = x, to = upper, "inversion: moved to start of plateau");
    upper
}

/// Equal, or adjacent doubles of the same sign.
fn within_one_ulp(a: f64, b: f64) -> bool {
    a == b || (a.signum() == b.signum() && a.to_bits().abs_diff(b.to_bits()) <= 1)
}

/// Distance from |x| to the next larger double.
fn ulp(x: f64) -> f64 {
    let x = x.abs();
    if !x.is_finite() {
        return x;
    }
    if x == f64::MAX {
        return x - f64::from_bits(x.to_bits() - 1);
    }
    f64::from_bits(x.to_bits() + 1) - x
}
