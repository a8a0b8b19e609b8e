//! Single-scenario time-stepped projection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use horizon_core::types::{Date, Period};
use horizon_curves::CurveHandle;

use crate::executor::TaskExecutor;
use crate::portfolio::Portfolio;
use crate::strategy::Strategy;

/// Time series produced by one projection run.
///
/// All vectors share one length, one entry per projection step; the
/// `_bop` suffix marks beginning-of-period observations taken before the
/// step's flows accrue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Volume multiplier the run was started with.
    pub scalar: f64,
    /// Step start dates.
    pub dates: Vec<Date>,
    /// Asset market value at each step start.
    pub assets_bop: Vec<f64>,
    /// Liability market value at each step start.
    pub liabilities_bop: Vec<f64>,
    /// Cash balance at each step start.
    pub cash_bop: Vec<f64>,
    /// Assets plus cash minus liabilities at each step start.
    pub surplus_bop: Vec<f64>,
    /// Final-step opening assets and liabilities combined with the cash
    /// left after the last strategy application.
    ///
    /// NaN when the projection window was empty (`start >= end`); callers
    /// must not evaluate it in that case.
    pub ending_surplus: f64,
}

impl ProjectionResult {
    /// Returns the number of projection steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true when the projection window produced no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Deterministic forward projection of a portfolio against liabilities.
///
/// Each step prices assets and liabilities, records the opening state,
/// accrues the step's asset and liability flows into the cash account,
/// and hands portfolio and cash to the strategy. Steps are strictly
/// sequential; the pricing and flow sums inside a step may run in
/// parallel on the executor.
pub struct Projection {
    assets: Portfolio,
    liabilities: Portfolio,
    strategy: Option<Arc<dyn Strategy>>,
    executor: Arc<dyn TaskExecutor>,
    curve: CurveHandle,
    start: Date,
    end: Date,
    step: Period,
}

impl Projection {
    /// Creates a projection over `[start, end)` stepped by `step`.
    ///
    /// The portfolios are captured by value; the strategy, executor and
    /// curve are shared. Pass `None` for the strategy to project without
    /// trading.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        assets: Portfolio,
        liabilities: Portfolio,
        strategy: Option<Arc<dyn Strategy>>,
        executor: Arc<dyn TaskExecutor>,
        curve: CurveHandle,
        start: Date,
        end: Date,
        step: Period,
    ) -> Self {
        Self {
            assets,
            liabilities,
            strategy,
            executor,
            curve,
            start,
            end,
            step,
        }
    }

    /// Returns the curve the projection prices under.
    #[must_use]
    pub fn curve(&self) -> &CurveHandle {
        &self.curve
    }

    /// Runs the projection with every starting asset volume scaled by
    /// `scalar`.
    #[must_use]
    pub fn run(&self, scalar: f64) -> ProjectionResult {
        let mut result = ProjectionResult {
            scalar,
            ending_surplus: f64::NAN,
            ..ProjectionResult::default()
        };

        let mut portfolio = self.assets.clone();
        portfolio.scale_volumes(scalar);

        let executor = self.executor.as_ref();
        let mut cash = 0.0;
        let mut current = self.start;
        let mut next = current + self.step;

        while current < self.end {
            let mv = portfolio.market_value(&self.curve, current, executor);
            let liability_mv = self.liabilities.market_value(&self.curve, current, executor);

            result.dates.push(current);
            result.assets_bop.push(mv);
            result.liabilities_bop.push(liability_mv);
            result.cash_bop.push(cash);
            result.surplus_bop.push(mv + cash - liability_mv);

            let asset_cf = portfolio.cash_flow(current, next, executor);
            let liability_cf = self.liabilities.cash_flow(current, next, executor);
            cash += asset_cf - liability_cf;

            if let Some(strategy) = &self.strategy {
                strategy.apply(&mut portfolio, &mut cash, current, next, &self.curve, executor);
            }

            trace!(step = %current, assets = mv, liabilities = liability_mv, cash, "projection step");

            current = next;
            next = current + self.step;
        }

        if let (Some(assets), Some(liabilities)) =
            (result.assets_bop.last(), result.liabilities_bop.last())
        {
            result.ending_surplus = assets + cash - liabilities;
        }

        result
    }
}
