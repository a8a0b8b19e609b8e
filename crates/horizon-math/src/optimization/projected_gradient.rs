//! Projected gradient descent.

use std::sync::Arc;

use nalgebra::DVector;
use tracing::debug;

use crate::constraints::Constraint;
use crate::optimization::{forward_gradient, Optimizer, SolverResults};

/// Fixed-step gradient descent with constraint projection.
///
/// Each iteration takes a forward-difference gradient step and projects
/// the iterate through every constraint in order. The solve stops when
/// successive objective values differ by less than the tolerance, or
/// when the iteration budget runs out (`converged = false`).
///
/// # Example
///
/// ```rust
/// use horizon_math::optimization::ProjectedGradientSolver;
/// use nalgebra::dvector;
///
/// let f = |x: &nalgebra::DVector<f64>| (x[0] - 0.3_f64).powi(2);
/// let solver = ProjectedGradientSolver::new(vec![], 1000, 1e-2, 1e-10);
/// let results = solver.solve(&f, &dvector![1.0]);
/// assert!(results.converged);
/// ```
pub struct ProjectedGradientSolver {
    constraints: Vec<Arc<dyn Constraint>>,
    max_iterations: u32,
    step_size: f64,
    tolerance: f64,
}

impl Default for ProjectedGradientSolver {
    fn default() -> Self {
        Self::new(Vec::new(), 100, 1e-2, 1e-4)
    }
}

impl ProjectedGradientSolver {
    /// Creates a solver from constraints, an iteration budget, a step
    /// size and an objective-change tolerance.
    #[must_use]
    pub fn new(
        constraints: Vec<Arc<dyn Constraint>>,
        max_iterations: u32,
        step_size: f64,
        tolerance: f64,
    ) -> Self {
        Self {
            constraints,
            max_iterations,
            step_size,
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

        for iteration in 0..self.max_iterations {
            let gradient = forward_gradient(f, &x, fx);

            x -= self.step_size * &gradient;

            for constraint in &self.constraints {
                constraint.project(&mut x);
            }

            let fx_new = f(&x);
            if (fx_new - fx).abs() < self.tolerance {
                return SolverResults {
                    x,
                    objective: fx_new,
                    iterations: iteration + 1,
                    converged: true,
                };
            }

            fx = fx_new;
            debug!(iteration, objective = fx, "projected gradient step");
        }

        SolverResults {
            x,
            objective: fx,
            iterations: self.max_iterations,
            converged: false,
        }
    }
}

impl Optimizer for ProjectedGradientSolver {
    fn solve(&self, f: &dyn Fn(&DVector<f64>) -> f64, x0: &DVector<f64>) -> SolverResults {
        ProjectedGradientSolver::solve(self, f, x0)
    }
}
