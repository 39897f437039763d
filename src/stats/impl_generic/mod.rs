//! Generic algorithms shared by every distribution.
//!
//! These are free functions over the capability traits; the traits' default
//! methods call them, and a distribution with a closed form overrides the
//! default instead.

mod discrete_search;
mod inversion;
mod range;

pub(crate) use discrete_search::{discrete_inverse_cdf, discrete_inverse_sf};
pub(crate) use inversion::{inverse_cdf, inverse_sf};
pub(crate) use range::{discrete_range_probability, range_probability};

/// Mean and standard deviation when the one-sided Chebyshev bound can be
/// used to bracket a quantile.
pub(super) fn chebyshev_moments(mean: f64, std: f64) -> Option<(f64, f64)> {
    if mean.is_finite() && std.is_finite() && std > 0.0 {
        Some((mean, std))
    } else {
        None
    }
}
