//! Starting-asset scalar solver.

use tracing::debug;

use horizon_math::solvers::{brent, SolverConfig};
use horizon_math::MathResult;

use crate::projection::Projection;

/// Solves for the volume scalar that zeroes a projection's ending
/// surplus.
///
/// The surplus is monotone in the scalar for ordinary books (more
/// starting assets, more ending surplus), so a sign change on the
/// bracket pins down the funding level; Brent's method then finds it to
/// the configured tolerance.
#[derive(Debug, Clone, Copy)]
pub struct StartingAssetSolver {
    lower_bound: f64,
    upper_bound: f64,
    config: SolverConfig,
}

impl Default for StartingAssetSolver {
    fn default() -> Self {
        Self {
            lower_bound: 0.0,
            upper_bound: 100.0,
            config: SolverConfig::default(),
        }
    }
}

impl StartingAssetSolver {
    /// Creates a solver with the default bracket `[0, 100]` and a `1e-6`
    /// tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search bracket.
    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    /// Sets the absolute tolerance on the solved scalar.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Finds the scalar whose projection ends with (approximately) zero
    /// surplus.
    ///
    /// # Errors
    ///
    /// - [`horizon_math::MathError::InvalidBracket`] when the ending
    ///   surplus has the same sign at both bracket ends.
    /// - [`horizon_math::MathError::ConvergenceFailed`] when the budget
    ///   runs out.
    pub fn solve(&self, projection: &Projection) -> MathResult<f64> {
        let surplus = |scalar: f64| projection.run(scalar).ending_surplus;
        let result = brent(&surplus, self.lower_bound, self.upper_bound, &self.config)?;
        debug!(
            scalar = result.root,
            iterations = result.iterations,
            residual = result.residual,
            "starting-asset solve"
        );
        Ok(result.root)
    }
}
