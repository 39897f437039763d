//! Root finding algorithms for scalar functions.

use super::{RootOptions, RootResult};
use crate::optimize::error::{OptimizeError, OptimizeResult};

/// Brent's method started from an initial guess inside a bracket.
///
/// The guess splits `[a, b]` into two halves. The guess and the endpoints are
/// accepted directly when `|f(x)| <= options.ftol`; otherwise Brent's method
/// runs on whichever half shows a sign change, checking `[a, x0]` first.
///
/// # Arguments
/// * `f` - Function to find root of
/// * `a` - Left bracket endpoint
/// * `x0` - Initial guess, `a <= x0 <= b`
/// * `b` - Right bracket endpoint
/// * `options` - Solver options
///
/// # Errors
/// * `InvalidInterval` if the guess is not inside `[a, b]`
/// * `SameSignBracket` if neither half of the bracket shows a sign change
/// * `DidNotConverge` if iterations exceed max_iter
pub fn brent_root<F>(
    f: F,
    a: f64,
    x0: f64,
    b: f64,
    options: &RootOptions,
) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    if !(a <= x0 && x0 <= b) {
        return Err(OptimizeError::InvalidInterval {
            a,
            b,
            context: "brent_root".to_string(),
        });
    }

    let f0 = f(x0);
    if f0.abs() <= options.ftol {
        return Ok(RootResult {
            root: x0,
            function_value: f0,
            iterations: 0,
        });
    }

    let fa = f(a);
    if fa.abs() <= options.ftol {
        return Ok(RootResult {
            root: a,
            function_value: fa,
            iterations: 0,
        });
    }
    if opposite_signs(fa, f0) {
        tracing::trace!(lo = a, hi = x0, "brent_root: root in lower half");
        return brent(&f, a, x0, fa, f0, options);
    }

    let fb = f(b);
    if fb.abs() <= options.ftol {
        return Ok(RootResult {
            root: b,
            function_value: fb,
            iterations: 0,
        });
    }
    if opposite_signs(f0, fb) {
        tracing::trace!(lo = x0, hi = b, "brent_root: root in upper half");
        return brent(&f, x0, b, f0, fb, options);
    }

    Err(OptimizeError::SameSignBracket {
        a,
        b,
        fa,
        fb,
        context: "brent_root".to_string(),
    })
}

/// `false` when either value is NaN.
fn opposite_signs(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}

/// Brent's method on a bracket with `f(lo)` and `f(hi)` of opposite sign.
///
/// Combines inverse quadratic interpolation, the secant step and bisection.
/// Terminates when half of the bracket is below `2 * rtol * |b| + atol`.
fn brent<F>(
    f: &F,
    lo: f64,
    hi: f64,
    f_lo: f64,
    f_hi: f64,
    options: &RootOptions,
) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = lo;
    let mut fa = f_lo;
    let mut b = hi;
    let mut fb = f_hi;
    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iter in 0..options.max_iter {
        // Keep b as the best estimate
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * options.rtol * b.abs() + options.atol;
        // Split to avoid overflow on a bracket spanning the whole double range
        let m = 0.5 * c - 0.5 * b;
        if m.abs() <= tol || fb == 0.0 {
            return Ok(RootResult {
                root: b,
                function_value: fb,
                iterations: iter,
            });
        }

        if e.abs() < tol || fa.abs() <= fb.abs() {
            d = m;
            e = d;
        } else {
            let mut s = fb / fa;
            let mut p;
            let mut q;
            if a == c {
                // Secant
                p = 2.0 * m * s;
                q = 1.0 - s;
            } else {
                // Inverse quadratic interpolation
                q = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * m * q * (q - r) - (b - a) * (r - 1.0));
                q = (q - 1.0) * (r - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }
            s = e;
            e = d;
            if p >= 1.5 * m * q - (tol * q).abs() || p >= (0.5 * s * q).abs() {
                // Interpolation rejected
                d = m;
                e = d;
            } else {
                d = p / q;
            }
        }

        a = b;
        fa = fb;
        if d.abs() > tol {
            b += d;
        } else if m > 0.0 {
            b += tol;
        } else {
            b -= tol;
        }
        fb = f(b);

        if (fb > 0.0 && fc > 0.0) || (fb <= 0.0 && fc <= 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
    }

    Err(OptimizeError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.atol,
        context: "brent_root".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tight() -> RootOptions {
        RootOptions {
            max_iter: 200,
            rtol: 1e-15,
            atol: 1e-14,
            ftol: 0.0,
        }
    }

    #[test]
    fn test_brent_simple() {
        let result = brent_root(|x| x * x - 4.0, 1.0, 1.5, 3.0, &tight()).expect("brent failed");
        assert!((result.root - 2.0).abs() < 1e-12);
        assert!(result.function_value.abs() < 1e-10);
    }

    #[test]
    fn test_brent_root_in_either_half() {
        // Root below the guess
        let result = brent_root(|x| x - 0.25, 0.0, 0.5, 1.0, &tight()).unwrap();
        assert!((result.root - 0.25).abs() < 1e-12);

        // Root above the guess
        let result = brent_root(|x| x - 0.75, 0.0, 0.5, 1.0, &tight()).unwrap();
        assert!((result.root - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_brent_accepts_guess_within_function_tolerance() {
        let options = RootOptions {
            ftol: 1e-3,
            ..tight()
        };
        let result = brent_root(|x| x - 0.5004, 0.0, 0.5, 1.0, &options).unwrap();
        assert_eq!(result.root, 0.5);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_brent_accepts_exact_endpoints() {
        let result = brent_root(|x| x - 1.0, 1.0, 1.5, 2.0, &tight()).unwrap();
        assert_eq!(result.root, 1.0);

        let result = brent_root(|x| x - 2.0, 1.0, 1.5, 2.0, &tight()).unwrap();
        assert_eq!(result.root, 2.0);
    }

    #[test]
    fn test_brent_same_sign() {
        let result = brent_root(|x| x * x + 1.0, 1.0, 2.0, 3.0, &tight());
        assert!(matches!(
            result,
            Err(OptimizeError::SameSignBracket { .. })
        ));
    }

    #[test]
    fn test_brent_guess_outside_interval() {
        let result = brent_root(|x| x - 2.0, 1.0, 4.0, 3.0, &tight());
        assert!(matches!(result, Err(OptimizeError::InvalidInterval { .. })));

        let result = brent_root(|x| x - 2.0, 1.0, f64::NAN, 3.0, &tight());
        assert!(matches!(result, Err(OptimizeError::InvalidInterval { .. })));
    }

    #[test]
    fn test_brent_tiny_root() {
        // Steep function, tiny root
        let root = 3e-12;
        let result =
            brent_root(|x| (x - root) * 1e12, -1.0, 0.0, 1.0, &RootOptions::inversion()).unwrap();
        assert!((result.root - root).abs() < 1e-24);

        // Flat function, far smaller root
        let root = 2.5e-200;
        let result = brent_root(|x| x - root, 0.0, 0.5, 1.0, &RootOptions::inversion()).unwrap();
        assert!((result.root - root).abs() <= 1e-13 * root);
    }

    #[test]
    fn test_inversion_does_not_accept_small_residuals() {
        // |f| < 1e-15 at every starting point, still iterates
        let target = 1e-20;
        let f = |x: f64| 1e-18 * x - target;
        let result = brent_root(f, 0.0, 0.5, 1.0, &RootOptions::inversion()).unwrap();
        assert!(result.iterations > 0);
        assert!((result.root - 0.01).abs() < 1e-15);

        // The looser default takes the guess as is
        let result = brent_root(f, 0.0, 0.5, 1.0, &RootOptions::default()).unwrap();
        assert_eq!(result.root, 0.5);
    }

    #[test]
    fn test_root_at_zero() {
        let result = brent_root(|x: f64| x.powi(3), -1.0, 0.25, 2.0, &RootOptions::inversion())
            .unwrap();
        assert!(result.root.abs() < 1e-100);
    }

    #[test]
    fn test_brent_wide_bracket() {
        let result = brent_root(
            |x| x - 12345.678,
            -f64::MAX,
            0.0,
            f64::MAX,
            &RootOptions::inversion(),
        )
        .unwrap();
        assert!((result.root - 12345.678).abs() < 1e-6);
    }

    #[test]
    fn test_trigonometric() {
        let result = brent_root(|x: f64| x.sin(), 2.0, 3.0, 4.0, &tight()).unwrap();
        assert!((result.root - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_exponential() {
        let result = brent_root(|x: f64| x.exp() - 3.0, 0.0, 1.0, 2.0, &tight()).unwrap();
        assert!((result.root - 3_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_limit() {
        let options = RootOptions {
            max_iter: 2,
            ..tight()
        };
        let result = brent_root(|x: f64| x.exp() - 3.0, 0.0, 0.1, 2.0, &options);
        assert!(matches!(result, Err(OptimizeError::DidNotConverge { .. })));
    }
}
