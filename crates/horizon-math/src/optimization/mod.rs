//! Constrained multivariate optimization.
//!
//! Two solvers over a black-box objective `f: R^n -> R`:
//!
//! - [`ProjectedGradientSolver`]: fixed-step gradient descent with
//!   constraint projection after every step
//! - [`TrustRegionSolver`]: dogleg trust-region with finite-difference
//!   gradient and Hessian
//!
//! Neither solver assumes anything about the objective beyond point
//! evaluation; derivatives are forward differences. Failure to converge
//! is reported through the `converged` flag, not an error.

mod projected_gradient;
mod trust_region;

pub use projected_gradient::ProjectedGradientSolver;
pub use trust_region::TrustRegionSolver;

use nalgebra::DVector;

/// Step used for forward-difference derivatives.
pub(crate) const FD_STEP: f64 = 1e-6;

/// Outcome of a multivariate solve.
#[derive(Debug, Clone)]
pub struct SolverResults {
    /// Final iterate.
    pub x: DVector<f64>,
    /// Objective value at the final iterate.
    pub objective: f64,
    /// Iterations executed.
    pub iterations: u32,
    /// Whether the convergence criterion was met.
    pub converged: bool,
}

/// Object-safe interface over the multivariate solvers.
///
/// Callers that pick a solver at runtime hold it behind this trait; the
/// objective is passed by dynamic reference to keep the trait object
/// safe. Both built-in solvers also expose an inherent generic `solve`
/// for static dispatch.
pub trait Optimizer: Send + Sync {
    /// Minimizes `f` starting from `x0`.
    fn solve(&self, f: &dyn Fn(&DVector<f64>) -> f64, x0: &DVector<f64>) -> SolverResults;
}

/// Forward-difference gradient of `f` at `x`, reusing a cached `f(x)`.
///
/// Costs one extra objective evaluation per component.
pub(crate) fn forward_gradient<F>(f: &F, x: &DVector<f64>, fx: f64) -> DVector<f64>
where
    F: Fn(&DVector<f64>) -> f64 + ?Sized,
{
    let mut gradient = DVector::zeros(x.len());
    for i in 0..x.len() {
        let mut perturbed = x.clone();
        perturbed[i] += FD_STEP;
        gradient[i] = (f(&perturbed) - fx) / FD_STEP;
    }
    gradient
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    #[test]
    fn test_forward_gradient_on_quadratic() {
        let f = |x: &DVector<f64>| x[0] * x[0] + 3.0 * x[1];
        let x = dvector![2.0, 1.0];
        let g = forward_gradient(&f, &x, f(&x));
        assert_relative_eq!(g[0], 4.0, epsilon = 1e-4);
        assert_relative_eq!(g[1], 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_solvers_behind_one_interface() {
        let f = |x: &DVector<f64>| (x[0] - 0.5_f64).powi(2);
        let solvers: Vec<Box<dyn Optimizer>> = vec![
            Box::new(ProjectedGradientSolver::new(vec![], 10_000, 1e-2, 1e-12)),
            Box::new(TrustRegionSolver::default()),
        ];

        for solver in &solvers {
            let results = solver.solve(&f, &dvector![0.0]);
            assert!(results.converged);
            assert_relative_eq!(results.x[0], 0.5, epsilon = 1e-3);
        }
    }
}
