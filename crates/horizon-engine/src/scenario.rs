//! Multi-scenario projection driver.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use horizon_core::types::{Date, Period};
use horizon_curves::CurveHandle;
use horizon_math::MathError;

use crate::error::{EngineError, EngineResult};
use crate::executor::{Task, TaskExecutor};
use crate::funding::StartingAssetSolver;
use crate::portfolio::Portfolio;
use crate::projection::{Projection, ProjectionResult};
use crate::strategy::Strategy;

/// Runs one funded projection per yield-curve scenario.
///
/// Scenarios are fully independent: each gets its own copies of the
/// asset and liability portfolios and shares the strategy, executor and
/// solver settings. Per scenario, the starting-asset solver finds the
/// volume scalar that zeroes the ending surplus, then the projection is
/// run at that scalar.
///
/// Scenario runs are dispatched as tasks to the executor and each writes
/// into its own pre-sized slot, so results come back keyed by scenario
/// index no matter which order the tasks finish in.
pub struct MultiScenarioProjection {
    assets: Portfolio,
    liabilities: Portfolio,
    strategy: Option<Arc<dyn Strategy>>,
    executor: Arc<dyn TaskExecutor>,
    curves: Vec<CurveHandle>,
    start: Date,
    end: Date,
    step: Period,
    solver: StartingAssetSolver,
}

impl MultiScenarioProjection {
    /// Creates the driver.
    ///
    /// `curves` carries one entry per scenario; `start`, `end` and `step`
    /// are shared by every scenario's projection.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        assets: Portfolio,
        liabilities: Portfolio,
        strategy: Option<Arc<dyn Strategy>>,
        executor: Arc<dyn TaskExecutor>,
        curves: Vec<CurveHandle>,
        start: Date,
        end: Date,
        step: Period,
    ) -> Self {
        Self {
            assets,
            liabilities,
            strategy,
            executor,
            curves,
            start,
            end,
            step,
            solver: StartingAssetSolver::default(),
        }
    }

    /// Overrides the starting-asset solver settings.
    #[must_use]
    pub fn with_solver(mut self, solver: StartingAssetSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the number of scenarios.
    #[must_use]
    pub fn num_scenarios(&self) -> usize {
        self.curves.len()
    }

    /// Runs every scenario and returns the results in scenario order.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyScenarioSet`] when no curves were supplied.
    /// - [`EngineError::ScenarioFailed`] carrying the index of the first
    ///   scenario whose starting-asset solve failed; the failure of one
    ///   scenario does not disturb its siblings.
    pub fn run(&self) -> EngineResult<Vec<ProjectionResult>> {
        if self.curves.is_empty() {
            return Err(EngineError::EmptyScenarioSet);
        }

        let slots: Vec<Mutex<Option<Result<ProjectionResult, MathError>>>> =
            self.curves.iter().map(|_| Mutex::new(None)).collect();

        let tasks: Vec<Task<'_>> = self
            .curves
            .iter()
            .zip(&slots)
            .map(|(curve, slot)| {
                Box::new(move || {
                    *slot.lock() = Some(self.run_scenario(curve));
                }) as Task<'_>
            })
            .collect();
        self.executor.submit_and_wait(tasks);

        let mut results = Vec::with_capacity(slots.len());
        for (index, slot) in slots.iter().enumerate() {
            match slot.lock().take() {
                Some(Ok(result)) => results.push(result),
                Some(Err(source)) => return Err(EngineError::ScenarioFailed { index, source }),
                None => unreachable!("executor returned before completing scenario {index}"),
            }
        }
        Ok(results)
    }

    /// Solves the funding scalar under one curve and runs the projection.
    fn run_scenario(&self, curve: &CurveHandle) -> Result<ProjectionResult, MathError> {
        let projection = Projection::new(
            self.assets.clone(),
            self.liabilities.clone(),
            self.strategy.clone(),
            Arc::clone(&self.executor),
            Arc::clone(curve),
            self.start,
            self.end,
            self.step,
        );

        let scalar = self.solver.solve(&projection)?;
        debug!(rate = curve.zero_rate(self.start), scalar, "scenario solved");
        Ok(projection.run(scalar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;
    use crate::cashflows::fixed_rate_bond;
    use crate::executor::SerialExecutor;
    use horizon_core::daycounts::Actual365Fixed;
    use horizon_core::types::CashFlow;
    use horizon_curves::FlatForward;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_curves(rates: &[f64]) -> Vec<CurveHandle> {
        rates
            .iter()
            .map(|&r| {
                Arc::new(FlatForward::new(
                    date(2025, 5, 7),
                    r,
                    Arc::new(Actual365Fixed),
                )) as CurveHandle
            })
            .collect()
    }

    fn driver(curves: Vec<CurveHandle>, liability: f64) -> MultiScenarioProjection {
        let today = date(2025, 5, 7);
        let assets = Portfolio::from_assets(vec![Asset::new(fixed_rate_bond(
            today,
            today + Period::years(10),
            0.03,
            1000.0,
        ))]);
        let liabilities = Portfolio::from_assets(vec![Asset::new(vec![CashFlow::new(
            today + Period::years(10),
            liability,
        )])]);

        MultiScenarioProjection::new(
            assets,
            liabilities,
            None,
            Arc::new(SerialExecutor),
            curves,
            today,
            today + Period::years(10),
            Period::years(1),
        )
    }

    #[test]
    fn test_one_result_per_scenario_in_curve_order() {
        let driver = driver(flat_curves(&[0.03, 0.05, 0.07]), 2000.0);
        let results = driver.run().unwrap();

        assert_eq!(results.len(), 3);
        // Higher rates discount the liability harder, so the funded
        // scalar falls with the rate: curve order is preserved.
        assert!(results[0].scalar > results[1].scalar);
        assert!(results[1].scalar > results[2].scalar);
    }

    #[test]
    fn test_each_scenario_is_funded() {
        let driver = driver(flat_curves(&[0.03, 0.05, 0.07]), 2000.0);
        for result in driver.run().unwrap() {
            assert!(result.ending_surplus.abs() < 1e-2);
        }
    }

    #[test]
    fn test_empty_curve_set_is_an_error() {
        let driver = driver(Vec::new(), 2000.0);
        assert_eq!(driver.run().unwrap_err(), EngineError::EmptyScenarioSet);
    }

    #[test]
    fn test_failing_scenario_reports_its_index() {
        // No liabilities: every scenario's surplus is positive over the
        // whole bracket, so scenario 0 fails first.
        let driver = driver(flat_curves(&[0.03, 0.05]), 0.0);
        let err = driver.run().unwrap_err();
        assert!(matches!(err, EngineError::ScenarioFailed { index: 0, .. }));
    }
}
