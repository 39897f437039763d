//! Inversion of a discrete CDF or survival function by summation.
//!
//! The bracket `(lo, hi]` is narrowed with the Chebyshev bounds and by
//! bisection until it is short, then the probability mass is summed from the
//! end of the bracket closest to the answer. A final pass with the exact
//! predicate makes the result the smallest integer that satisfies it.

use super::chebyshev_moments;
use crate::stats::distribution::DiscreteDistribution;
use crate::stats::error::{require_probability, StatsResult};

/// Widest bracket that is searched by summing the mass function.
const SUMMATION_WINDOW: i64 = 64;

/// Generic inverse CDF: smallest `k` with `cdf(k) >= p`.
pub(crate) fn discrete_inverse_cdf<D>(dist: &D, p: f64) -> StatsResult<i32>
where
    D: DiscreteDistribution + ?Sized,
{
    require_probability(p)?;
    Ok(inverse_probability(dist, p, 1.0 - p, false))
}

/// Generic inverse survival function: smallest `k` with `sf(k) <= q`.
pub(crate) fn discrete_inverse_sf<D>(dist: &D, q: f64) -> StatsResult<i32>
where
    D: DiscreteDistribution + ?Sized,
{
    require_probability(q)?;
    Ok(inverse_probability(dist, 1.0 - q, q, true))
}

fn inverse_probability<D>(dist: &D, p: f64, q: f64, complement: bool) -> i32
where
    D: DiscreteDistribution + ?Sized,
{
    let support_lo = dist.support_lower_bound();
    let support_hi = dist.support_upper_bound();
    if p == 0.0 {
        return support_lo;
    }
    if q == 0.0 {
        return support_hi;
    }

    // Every caller passes a value in [support_lo - 1, support_hi]
    let at = |x: i64| x as i32;
    let hit = |x: i64| {
        if complement {
            dist.sf(at(x)) <= q
        } else {
            dist.cdf(at(x)) >= p
        }
    };

    // Invariant: hit(lo) is false and hit(hi) is true
    let mut lo = i64::from(support_lo) - 1;
    if support_lo == i32::MIN {
        if hit(i64::from(i32::MIN)) {
            return i32::MIN;
        }
        lo = i64::from(i32::MIN);
    }
    let mut hi = i64::from(support_hi);

    if let Some((mu, sig)) = chebyshev_moments(dist.mean(), dist.std()) {
        let below = mu - sig * (q / p).sqrt();
        if below > lo as f64 {
            let candidate = below.ceil() as i64 - 1;
            if candidate > lo && candidate < hi && !hit(candidate) {
                lo = candidate;
            }
        }
        let above = mu + sig * (p / q).sqrt();
        if above < hi as f64 {
            let candidate = above.ceil() as i64;
            if candidate > lo && candidate < hi && hit(candidate) {
                hi = candidate;
            }
        }
        tracing::trace!(lo, hi, "discrete search: chebyshev bracket");
    }

    if hi - lo > SUMMATION_WINDOW {
        while hi - lo > SUMMATION_WINDOW {
            let mid = lo + (hi - lo) / 2;
            if hit(mid) {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        tracing::debug!(lo, hi, "discrete search: bisected before summing");
    }

    let mid = lo + (hi - lo) / 2;
    let mut x = if mid > lo && hit(mid) {
        // Lower sum: cdf(x) = cdf(lo) + pmf(lo + 1) + ... + pmf(x)
        let mut x = lo + 1;
        let mut sum = dist.cdf(at(lo)) + dist.pmf(at(x));
        while sum < p && x < mid {
            x += 1;
            sum += dist.pmf(at(x));
        }
        x
    } else {
        // Upper sum: sf(x - 1) = sf(hi) + pmf(hi) + ... + pmf(x)
        let mut x = hi;
        let mut sum = dist.sf(at(hi)) + dist.pmf(at(hi));
        while x - 1 > mid && sum <= q {
            x -= 1;
            sum += dist.pmf(at(x));
        }
        x
    };

    // Summation error can leave the candidate one or two places off
    while x < hi && !hit(x) {
        x += 1;
    }
    while x - 1 > lo && hit(x - 1) {
        x -= 1;
    }
    at(x)
}
