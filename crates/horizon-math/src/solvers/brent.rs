//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{BrentResult, SolverConfig};

/// Brent's method: bisection, secant and inverse quadratic interpolation.
///
/// The bracket `[a, b]` must contain a sign change. Each iteration keeps
/// the root bracketed while switching between an interpolated step (when
/// it is making fast enough progress) and a bisection step (when it is
/// not), so convergence is guaranteed at bisection speed and typically
/// superlinear.
///
/// # Errors
///
/// - [`MathError::InvalidBracket`] when `f(a)` and `f(b)` share a sign.
/// - [`MathError::ConvergenceFailed`] when the iteration budget runs out.
///
/// # Example
///
/// ```rust
/// use horizon_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = brent(&f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: &F, lower: f64, upper: f64, config: &SolverConfig) -> MathResult<BrentResult>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let mut a = lower;
    let mut b = upper;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        // Keep b the best estimate and c on the opposite side of the root.
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let m = 0.5 * (c - b);

        if m.abs() <= tol1 || fb == 0.0 {
            return Ok(BrentResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() < tol1 || fa.abs() <= fb.abs() {
            // Interpolation is stalling: bisect.
            d = m;
            e = m;
        } else {
            let (mut p, mut q);
            let s = fb / fa;
            if a == c {
                // Secant step.
                p = 2.0 * m * s;
                q = 1.0 - s;
            } else {
                // Inverse quadratic interpolation.
                let q1 = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * m * q1 * (q1 - r) - (b - a) * (r - 1.0));
                q = (q1 - 1.0) * (r - 1.0) * (s - 1.0);
            }

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            if 2.0 * p < (3.0 * m * q - (tol1 * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            // Force a minimum step towards the far bracket end.
            b += if m > 0.0 { tol1 } else { -tol1 };
        }
        fb = f(b);

        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_two() {
        let f = |x: f64| x * x - 2.0;
        let config = SolverConfig::default().with_tolerance(1e-12);
        let result = brent(&f, 1.0, 2.0, &config).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cubic() {
        let f = |x: f64| x * x * x - x - 2.0;
        let config = SolverConfig::default().with_tolerance(1e-12);
        let result = brent(&f, 1.0, 2.0, &config).unwrap();
        assert_relative_eq!(result.root, 1.521_379_706_804_568, epsilon = 1e-9);
    }

    #[test]
    fn test_root_at_bracket_end() {
        let f = |x: f64| x;
        let result = brent(&f, 0.0, 1.0, &SolverConfig::default()).unwrap();
        assert!(result.root.abs() <= SolverConfig::default().tolerance);
    }

    #[test]
    fn test_linear_surplus_shape() {
        // Affine functions mirror the funding solve: f(s) = k*s - target.
        let f = |s: f64| 250.0 * s - 1000.0;
        let result = brent(&f, 0.0, 100.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x + 1.0;
        let err = brent(&f, -1.0, 1.0, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, MathError::InvalidBracket { .. }));
    }

    #[test]
    fn test_converges_quickly() {
        let f = |x: f64| x * x - 2.0;
        let result = brent(&f, 1.0, 2.0, &SolverConfig::default()).unwrap();
        assert!(result.iterations < 20);
    }

    #[test]
    fn test_iteration_budget_exhaustion() {
        let f = |x: f64| x.powi(3);
        let config = SolverConfig::new(1e-15, 2);
        let err = brent(&f, -1.0, 2.0, &config).unwrap_err();
        assert!(matches!(err, MathError::ConvergenceFailed { .. }));
    }
}
