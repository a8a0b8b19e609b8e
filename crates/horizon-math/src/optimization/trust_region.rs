//! Dogleg trust-region solver.

use std::sync::Arc;

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::constraints::Constraint;
use crate::optimization::{forward_gradient, Optimizer, SolverResults, FD_STEP};

/// Guard added to the predicted-reduction denominator.
const RHO_EPSILON: f64 = 1e-8;

/// Trust-region minimization with a dogleg step.
///
/// Each iteration builds a local quadratic model from forward-difference
/// gradient and Hessian estimates, takes the dogleg step (Newton point
/// when it fits in the radius, otherwise a blend towards the Cauchy
/// point), projects the trial through the constraints, and accepts or
/// rejects it on the ratio of actual to predicted reduction. The radius
/// shrinks by 4x on poor agreement and doubles on strong agreement while
/// below 10.
///
/// Convergence is declared when the gradient norm drops under the
/// tolerance. Hitting the iteration budget reports the last iterate with
/// `converged = false`.
pub struct TrustRegionSolver {
    constraints: Vec<Arc<dyn Constraint>>,
    max_iterations: u32,
    initial_radius: f64,
    eta: f64,
    tolerance: f64,
}

impl Default for TrustRegionSolver {
    fn default() -> Self {
        Self::new(Vec::new(), 100, 1.0, 0.1, 1e-4)
    }
}

impl TrustRegionSolver {
    /// Creates a solver from constraints, an iteration budget, an initial
    /// trust radius, an acceptance threshold and a gradient tolerance.
    #[must_use]
    pub fn new(
        constraints: Vec<Arc<dyn Constraint>>,
        max_iterations: u32,
        initial_radius: f64,
        eta: f64,
        tolerance: f64,
    ) -> Self {
        Self {
            constraints,
            max_iterations,
            initial_radius,
            eta,
            tolerance,
        }
    }

    /// Minimizes `f` starting from `x0`.
    pub fn solve<F>(&self, f: &F, x0: &DVector<f64>) -> SolverResults
    where
        F: Fn(&DVector<f64>) -> f64 + ?Sized,
    {
        let mut x = x0.clone();
        let mut fx = f(&x);
        let mut radius = self.initial_radius;

        for iteration in 0..self.max_iterations {
            let gradient = forward_gradient(f, &x, fx);
            let hessian = forward_hessian(f, &x, fx);

            if gradient.norm() < self.tolerance {
                return SolverResults {
                    x,
                    objective: fx,
                    iterations: iteration + 1,
                    converged: true,
                };
            }

            let step = dogleg_step(&gradient, &hessian, radius);

            let mut x_trial = &x + &step;
            for constraint in &self.constraints {
                constraint.project(&mut x_trial);
            }

            let fx_trial = f(&x_trial);
            let predicted = -gradient.dot(&step) - 0.5 * step.dot(&(&hessian * &step));
            let rho = (fx - fx_trial) / (predicted + RHO_EPSILON);

            if rho > self.eta {
                x = x_trial;
                fx = fx_trial;
            }

            radius *= adjust_radius(rho, radius);
            debug!(iteration, objective = fx, radius, "trust region step");
        }

        SolverResults {
            x,
            objective: fx,
            iterations: self.max_iterations,
            converged: false,
        }
    }
}

impl Optimizer for TrustRegionSolver {
    fn solve(&self, f: &dyn Fn(&DVector<f64>) -> f64, x0: &DVector<f64>) -> SolverResults {
        TrustRegionSolver::solve(self, f, x0)
    }
}

/// Symmetric forward-difference Hessian, reusing a cached `f(x)`.
///
/// `H[i][j] = (f(x + h e_i + h e_j) - f(x + h e_i) - f(x + h e_j) + f(x)) / h^2`
/// over the upper triangle, mirrored into the lower triangle.
fn forward_hessian<F>(f: &F, x: &DVector<f64>, fx: f64) -> DMatrix<f64>
where
    F: Fn(&DVector<f64>) -> f64 + ?Sized,
{
    let n = x.len();
    let mut hessian = DMatrix::zeros(n, n);

    let mut shifted = vec![0.0; n];
    for (i, slot) in shifted.iter_mut().enumerate() {
        let mut xi = x.clone();
        xi[i] += FD_STEP;
        *slot = f(&xi);
    }

    for i in 0..n {
        for j in i..n {
            let mut xij = x.clone();
            xij[i] += FD_STEP;
            xij[j] += FD_STEP;
            let fij = f(&xij);

            let hij = (fij - shifted[i] - shifted[j] + fx) / (FD_STEP * FD_STEP);
            hessian[(i, j)] = hij;
            hessian[(j, i)] = hij;
        }
    }

    hessian
}

/// Dogleg step within the trust radius.
///
/// Takes the Newton point when it fits, the scaled steepest-descent
/// direction when even the Cauchy point leaves the region, and otherwise
/// the blend along the segment from the Cauchy point to the Newton point
/// that lands exactly on the boundary. A Hessian that fails its Cholesky
/// factorization (not positive definite) or has non-positive curvature
/// along the gradient falls back to the clipped steepest-descent step.
fn dogleg_step(gradient: &DVector<f64>, hessian: &DMatrix<f64>, radius: f64) -> DVector<f64> {
    let curvature = gradient.dot(&(hessian * gradient));
    if curvature <= 0.0 {
        // Negative curvature along the gradient: descend to the boundary.
        return -(radius / gradient.norm()) * gradient;
    }
    let cauchy = -(gradient.norm_squared() / curvature) * gradient;

    let newton = hessian
        .clone()
        .cholesky()
        .map(|factor| -factor.solve(gradient));

    let Some(newton) = newton else {
        // Indefinite model: the Cauchy point clipped to the radius.
        let norm = cauchy.norm();
        return if norm > radius {
            (radius / norm) * cauchy
        } else {
            cauchy
        };
    };

    if newton.norm() <= radius {
        return newton;
    }
    if cauchy.norm() >= radius {
        return (radius / cauchy.norm()) * cauchy;
    }

    // Blend: solve |cauchy + tau * (newton - cauchy)| = radius for tau.
    let diff = &newton - &cauchy;
    let a = diff.norm_squared();
    let b = 2.0 * cauchy.dot(&diff);
    let c = cauchy.norm_squared() - radius * radius;
    let tau = (-b + (b * b - 4.0 * a * c).sqrt()) / (2.0 * a);

    cauchy + tau * diff
}

/// Multiplicative radius update.
fn adjust_radius(rho: f64, radius: f64) -> f64 {
    if rho < 0.25 {
        0.25
    } else if rho > 0.75 && radius < 10.0 {
        2.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::BoxConstraint;
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    fn sphere(center: DVector<f64>) -> impl Fn(&DVector<f64>) -> f64 {
        move |x: &DVector<f64>| (x - &center).norm_squared()
    }

    #[test]
    fn test_quadratic_in_box() {
        // Minimum (0.3, 0.7) is interior to the unit box.
        let f = sphere(dvector![0.3, 0.7]);
        let bounds: Arc<dyn Constraint> =
            Arc::new(BoxConstraint::new(dvector![0.0, 0.0], dvector![1.0, 1.0]).unwrap());
        let solver = TrustRegionSolver::new(vec![bounds], 100, 1.0, 0.1, 1e-4);
        let results = solver.solve(&f, &dvector![1.0, 1.0]);

        assert!(results.converged);
        assert!(results.iterations < 100);
        assert_relative_eq!(results.x[0], 0.3, epsilon = 1e-3);
        assert_relative_eq!(results.x[1], 0.7, epsilon = 1e-3);
        assert!(results.objective < 1e-6);
    }

    #[test]
    fn test_newton_step_solves_quadratic_fast() {
        let f = sphere(dvector![0.2, -0.1, 0.4]);
        let solver = TrustRegionSolver::default();
        let results = solver.solve(&f, &dvector![0.0, 0.0, 0.0]);

        assert!(results.converged);
        assert!(results.iterations <= 5);
    }

    #[test]
    fn test_radius_schedule() {
        assert_eq!(adjust_radius(0.1, 1.0), 0.25);
        assert_eq!(adjust_radius(0.9, 1.0), 2.0);
        assert_eq!(adjust_radius(0.9, 10.0), 1.0);
        assert_eq!(adjust_radius(0.5, 1.0), 1.0);
    }

    #[test]
    fn test_dogleg_newton_inside_radius() {
        // H = I, g = (1, 0): Newton point (-1, 0) fits in radius 2.
        let g = dvector![1.0, 0.0];
        let h = DMatrix::identity(2, 2);
        let p = dogleg_step(&g, &h, 2.0);
        assert_relative_eq!(p[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dogleg_clips_to_radius() {
        let g = dvector![1.0, 0.0];
        let h = DMatrix::identity(2, 2);
        let p = dogleg_step(&g, &h, 0.5);
        assert_relative_eq!(p.norm(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_dogleg_blend_lands_on_boundary() {
        // Anisotropic model so the Cauchy and Newton points differ in
        // direction, forcing the blended branch.
        let g = dvector![1.0, 1.0];
        let h = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 10.0]);
        let newton_norm = (1.0_f64 + 0.01).sqrt();
        let cauchy_scale = 2.0 / 11.0; // |g|^2 / gHg
        let cauchy_norm = cauchy_scale * (2.0_f64).sqrt();
        let radius = 0.5 * (newton_norm + cauchy_norm);

        let p = dogleg_step(&g, &h, radius);
        assert_relative_eq!(p.norm(), radius, epsilon = 1e-10);
    }

    #[test]
    fn test_dogleg_indefinite_hessian_falls_back_to_descent() {
        let g = dvector![1.0, 0.0];
        let h = DMatrix::from_row_slice(2, 2, &[-1.0, 0.0, 0.0, -1.0]);
        let p = dogleg_step(&g, &h, 0.7);

        // Steepest-descent direction scaled to the boundary.
        assert_relative_eq!(p[0], -0.7, epsilon = 1e-12);
        assert_relative_eq!(p[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_budget_exhaustion_reports_not_converged() {
        let f = sphere(dvector![50.0]);
        let solver = TrustRegionSolver::new(vec![], 2, 1e-3, 0.1, 1e-10);
        let results = solver.solve(&f, &dvector![0.0]);
        assert!(!results.converged);
        assert_eq!(results.iterations, 2);
    }
}
