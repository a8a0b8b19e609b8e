//! Cash-sign-dispatching composite strategy.

use std::sync::Arc;

use horizon_core::types::Date;
use horizon_curves::CurveHandle;

use super::Strategy;
use crate::executor::TaskExecutor;
use crate::portfolio::Portfolio;

/// Composite of a disinvestment and a reinvestment strategy.
///
/// Dispatches on the sign of the cash balance: a shortfall goes to the
/// sell strategy, anything else to the buy strategy.
pub struct RebalanceStrategy {
    sell: Arc<dyn Strategy>,
    buy: Arc<dyn Strategy>,
}

impl RebalanceStrategy {
    /// Creates the composite from its sell and buy arms.
    #[must_use]
    pub fn new(sell: Arc<dyn Strategy>, buy: Arc<dyn Strategy>) -> Self {
        Self { sell, buy }
    }
}

impl Strategy for RebalanceStrategy {
    fn apply(
        &self,
        portfolio: &mut Portfolio,
        cash: &mut f64,
        step_start: Date,
        step_end: Date,
        curve: &CurveHandle,
        executor: &dyn TaskExecutor,
    ) {
        let arm = if *cash < 0.0 { &self.sell } else { &self.buy };
        arm.apply(portfolio, cash, step_start, step_end, curve, executor);
    }
}
