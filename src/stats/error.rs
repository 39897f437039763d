//! Error types for statistical operations.

use crate::optimize::OptimizeError;
use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
///
/// Parameter errors are raised by constructors before any distribution
/// exists; probability and range errors are raised by the query methods.
/// Numerical edge cases (infinite arguments, points outside the support) are
/// not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Probability value out of range [0, 1] or NaN.
    #[error("Invalid probability {value}: must be in [0, 1]")]
    InvalidProbability { value: f64 },

    /// Lower end of a range is above its upper end.
    #[error("Invalid range: lower bound {lower} is above upper bound {upper}")]
    InvalidRange { lower: f64, upper: f64 },

    /// Parameter must be > 0.
    #[error("Invalid parameter '{name}' = {value}: must be strictly positive")]
    NotStrictlyPositive { name: &'static str, value: f64 },

    /// Parameter must be >= 0.
    #[error("Invalid parameter '{name}' = {value}: must not be negative")]
    Negative { name: &'static str, value: f64 },

    /// Parameter is below its minimum.
    #[error("Invalid parameter '{name}' = {value}: must be >= {min}")]
    TooSmall {
        name: &'static str,
        value: f64,
        min: f64,
    },

    /// Parameter is above its maximum.
    #[error("Invalid parameter '{name}' = {value}: must be <= {max}")]
    TooLarge {
        name: &'static str,
        value: f64,
        max: f64,
    },

    /// Invalid parameter value for a distribution.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: String,
    },

    /// The root solver failed while inverting a distribution function.
    #[error(transparent)]
    Solver(#[from] OptimizeError),
}

/// Check `value > 0` (and not NaN).
pub(crate) fn require_strictly_positive(name: &'static str, value: f64) -> StatsResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(StatsError::NotStrictlyPositive { name, value })
    }
}

/// Check `0 < value < inf`.
pub(crate) fn require_finite_positive(name: &'static str, value: f64) -> StatsResult<f64> {
    require_strictly_positive(name, value)?;
    require_finite(name, value)
}

/// Check that `value` is neither infinite nor NaN.
pub(crate) fn require_finite(name: &'static str, value: f64) -> StatsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::InvalidParameter {
            name,
            value,
            reason: "must be finite".to_string(),
        })
    }
}

/// Check `0 <= value <= 1` for a probability-valued parameter.
pub(crate) fn require_unit_interval(name: &'static str, value: f64) -> StatsResult<f64> {
    if value < 0.0 {
        Err(StatsError::Negative { name, value })
    } else if value > 1.0 {
        Err(StatsError::TooLarge {
            name,
            value,
            max: 1.0,
        })
    } else if value.is_nan() {
        Err(StatsError::InvalidParameter {
            name,
            value,
            reason: "must be a probability".to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Check `value >= 0` for a count parameter.
pub(crate) fn require_non_negative_count(name: &'static str, value: i32) -> StatsResult<i32> {
    if value < 0 {
        Err(StatsError::Negative {
            name,
            value: f64::from(value),
        })
    } else {
        Ok(value)
    }
}

/// Check that `p` is a probability.
pub(crate) fn require_probability(p: f64) -> StatsResult<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(StatsError::InvalidProbability { value: p })
    }
}
