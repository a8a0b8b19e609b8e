//! Per-step trading strategies.
//!
//! A strategy is the mutable hook in the projection loop: after each
//! step's flows have accrued into the cash account, the strategy may
//! trade — selling assets to fund a shortfall, reinvesting a surplus, or
//! doing nothing. Strategies mutate the portfolio and cash in place and
//! see the pricing curve and executor of the projection that invokes
//! them.

mod buy_bonds;
mod rebalance;
mod sell_pro_rata;

pub use buy_bonds::{BondTemplate, BuyBonds};
pub use rebalance::RebalanceStrategy;
pub use sell_pro_rata::SellProRata;

use horizon_core::types::Date;
use horizon_curves::CurveHandle;

use crate::executor::TaskExecutor;
use crate::portfolio::Portfolio;

/// A reinvestment/disinvestment rule applied once per projection step.
pub trait Strategy: Send + Sync {
    /// Applies the strategy for the step `[step_start, step_end)`.
    ///
    /// `cash` is the balance after the step's flow accrual and may be
    /// negative (a shortfall).
    fn apply(
        &self,
        portfolio: &mut Portfolio,
        cash: &mut f64,
        step_start: Date,
        step_end: Date,
        curve: &CurveHandle,
        executor: &dyn TaskExecutor,
    );
}
