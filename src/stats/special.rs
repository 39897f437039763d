//! Special functions used by the distributions.
//!
//! The error function and its complement come from `libm`, which is
//! accurate to a few ulps over the whole double range. The inverses start
//! from the `statrs` approximation and take one Newton step on `libm`.
//! Gamma and beta functions are thin wrappers over `statrs::function`.
//!
//! Every function is total: arguments on or past a domain edge return the
//! limiting value instead of panicking.

use statrs::function::{beta as sbeta, erf as serf, gamma as sgamma};
use std::f64::consts::{FRAC_2_SQRT_PI, SQRT_2};

/// Standard normal PDF constant: 1/sqrt(2π)
pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// ln(sqrt(2π))
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// erf(x) = 0.5 at this point; below it erf is the accurate form,
/// above it erfc is.
const ERF_HALF: f64 = 0.476_936_276_204_469_7;

/// Error function.
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// Complementary error function: erfc(x) = 1 - erf(x)
pub fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

/// Inverse error function on [-1, 1].
pub fn erf_inv(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x <= -1.0 {
        f64::NEG_INFINITY
    } else if x >= 1.0 {
        f64::INFINITY
    } else if x.abs() > 0.5 {
        // 1 - |x| is exact here
        erfc_inv(1.0 - x.abs()).copysign(x)
    } else {
        let y = serf::erf_inv(x);
        newton_step(y, erf(y) - x, 1.0)
    }
}

/// Inverse complementary error function on [0, 2].
pub fn erfc_inv(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x <= 0.0 {
        f64::INFINITY
    } else if x >= 2.0 {
        f64::NEG_INFINITY
    } else if x > 1.0 {
        // erfc(-y) = 2 - erfc(y); refining from the side below 1 keeps the
        // residual free of cancellation
        -erfc_inv(2.0 - x)
    } else {
        let y = serf::erfc_inv(x);
        newton_step(y, erfc(y) - x, -1.0)
    }
}

/// One Newton step for erf (`sign = 1`) or erfc (`sign = -1`) given the
/// residual at `y`. Skipped where the derivative underflows.
fn newton_step(y: f64, residual: f64, sign: f64) -> f64 {
    let slope = FRAC_2_SQRT_PI * (-y * y).exp();
    if slope > 0.0 && y.is_finite() {
        y - sign * residual / slope
    } else {
        y
    }
}

/// `erf(b) - erf(a)` without cancellation when both points sit in the same
/// tail.
pub fn erf_difference(a: f64, b: f64) -> f64 {
    if a > b {
        return -erf_difference(b, a);
    }
    if a < -ERF_HALF {
        if b < 0.0 {
            // erf(x) = erfc(-x) - 1
            return erfc(-b) - erfc(-a);
        }
    } else if b > ERF_HALF && a > 0.0 {
        // erf(x) = 1 - erfc(x)
        return erfc(a) - erfc(b);
    }
    erf(b) - erf(a)
}

/// Standard normal CDF: Φ(z)
pub fn norm_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Standard normal survival function: 1 - Φ(z)
pub fn norm_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}

/// Standard normal PDF: φ(z)
pub fn norm_pdf(z: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal quantile function: Φ⁻¹(p)
pub fn norm_ppf(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Standard normal inverse survival function: Φ⁻¹(1 - q)
pub fn norm_isf(q: f64) -> f64 {
    SQRT_2 * erfc_inv(2.0 * q)
}

/// Gamma function.
pub fn gamma(x: f64) -> f64 {
    sgamma::gamma(x)
}

/// Log-gamma function.
pub fn ln_gamma(x: f64) -> f64 {
    sgamma::ln_gamma(x)
}

/// Regularized lower incomplete gamma function P(a, x), for a > 0.
pub fn gamma_p(a: f64, x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x <= 0.0 {
        0.0
    } else if x == f64::INFINITY {
        1.0
    } else if x < SMALL_GAMMA_ARG {
        gamma_p_series(a, x)
    } else {
        sgamma::gamma_lr(a, x)
    }
}

/// Regularized upper incomplete gamma function Q(a, x) = 1 - P(a, x), for a > 0.
pub fn gamma_q(a: f64, x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x <= 0.0 {
        1.0
    } else if x == f64::INFINITY {
        0.0
    } else if x < SMALL_GAMMA_ARG {
        1.0 - gamma_p_series(a, x)
    } else {
        sgamma::gamma_ur(a, x)
    }
}

/// Below this `statrs` rounds P(a, x) to zero.
const SMALL_GAMMA_ARG: f64 = 1e-3;

/// P(a, x) = x^a e^-x / Gamma(a + 1) * sum_k x^k / ((a + 1) ... (a + k)),
/// for 0 < x < 1.
fn gamma_p_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut n = a;
    while term > sum * f64::EPSILON {
        n += 1.0;
        term *= x / n;
        sum += term;
    }
    (a * x.ln() - x - ln_gamma(a + 1.0)).exp() * sum
}

/// Log-beta function, for a, b > 0.
pub fn ln_beta(a: f64, b: f64) -> f64 {
    sbeta::ln_beta(a, b)
}

/// Regularized incomplete beta function I_x(a, b), for a, b > 0.
pub fn beta_reg(a: f64, b: f64, x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        sbeta::beta_reg(a, b, x)
    }
}

/// Complement 1 - I_x(a, b), evaluated as I_{1-x}(b, a).
pub fn beta_reg_complement(a: f64, b: f64, x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x <= 0.0 {
        1.0
    } else if x >= 1.0 {
        0.0
    } else {
        sbeta::beta_reg(b, a, 1.0 - x)
    }
}

/// Log of the binomial coefficient C(n, k); `-inf` when k is outside [0, n].
pub fn log_binom(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    let n_f = n as f64;
    let k_f = k as f64;
    ln_gamma(n_f + 1.0) - ln_gamma(k_f + 1.0) - ln_gamma(n_f - k_f + 1.0)
}
