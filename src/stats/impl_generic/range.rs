//! Probability of an interval.
//!
//! Above the median both CDF values are close to 1 and their difference
//! cancels, so the survival function is used there instead.

use crate::stats::distribution::{ContinuousDistribution, DiscreteDistribution};
use crate::stats::error::{StatsError, StatsResult};

/// P(x0 <= X <= x1) for a continuous distribution.
pub(crate) fn range_probability<D>(dist: &D, x0: f64, x1: f64) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    if x0 > x1 {
        return Err(StatsError::InvalidRange {
            lower: x0,
            upper: x1,
        });
    }
    if x0 >= dist.median() {
        Ok(dist.sf(x0) - dist.sf(x1))
    } else {
        Ok(dist.cdf(x1) - dist.cdf(x0))
    }
}

/// P(x0 < X <= x1) for a discrete distribution.
pub(crate) fn discrete_range_probability<D>(dist: &D, x0: i32, x1: i32) -> StatsResult<f64>
where
    D: DiscreteDistribution + ?Sized,
{
    if x0 > x1 {
        return Err(StatsError::InvalidRange {
            lower: f64::from(x0),
            upper: f64::from(x1),
        });
    }
    if f64::from(x0) >= dist.median() {
        Ok(dist.sf(x0) - dist.sf(x1))
    } else {
        Ok(dist.cdf(x1) - dist.cdf(x0))
    }
}
