//! Pro-rata disinvestment.

use horizon_core::types::Date;
use horizon_curves::CurveHandle;

use super::Strategy;
use crate::executor::TaskExecutor;
use crate::portfolio::Portfolio;

/// Sells a uniform slice of every asset to cover a cash shortfall.
///
/// Scaling all volumes by the same factor preserves the portfolio's
/// relative weights. The factor is floored at zero, so volumes never go
/// negative: when even full liquidation cannot cover the shortfall, the
/// whole portfolio is sold and the uncovered remainder stays as negative
/// cash.
#[derive(Debug, Clone, Copy, Default)]
pub struct SellProRata;

impl Strategy for SellProRata {
    fn apply(
        &self,
        portfolio: &mut Portfolio,
        cash: &mut f64,
        step_start: Date,
        _step_end: Date,
        curve: &CurveHandle,
        executor: &dyn TaskExecutor,
    ) {
        if *cash >= 0.0 {
            return;
        }

        let need = -*cash;
        let total_mv = portfolio.market_value(curve, step_start, executor);

        if total_mv <= 0.0 {
            return;
        }

        let factor = (1.0 - need / total_mv).clamp(0.0, 1.0);
        portfolio.scale_volumes(factor);

        *cash = if factor == 0.0 { *cash + total_mv } else { 0.0 };
    }
}
