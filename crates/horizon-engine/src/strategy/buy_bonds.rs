//! Fixed-rate bond reinvestment.

use horizon_core::calendars::{BusinessDayConvention, Calendar};
use horizon_core::types::{Date, Period};
use horizon_curves::CurveHandle;

use super::Strategy;
use crate::asset::Asset;
use crate::cashflows::fixed_rate_bond_with;
use crate::executor::TaskExecutor;
use crate::portfolio::Portfolio;

/// Allocations below this are skipped and residuals snapped to zero.
const CASH_EPSILON: f64 = 1e-6;

/// One reinvestment target: a slice of available cash into a bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondTemplate {
    /// Fraction of available cash to allocate (0.25 = 25%).
    pub proportion: f64,
    /// Per-period coupon as a fraction of notional.
    pub coupon: f64,
    /// Time from issue to maturity.
    pub tenor: Period,
}

/// Reinvests positive cash into fixed-rate bonds from a template list.
///
/// Templates are applied in order, each taking its proportion of the
/// cash remaining at that point; proportions need not sum to one, and
/// whatever they leave unallocated stays in the cash account. Each
/// purchase is issued at the step start and matures one tenor later.
pub struct BuyBonds {
    templates: Vec<BondTemplate>,
    frequency: Period,
    calendar: Calendar,
}

impl BuyBonds {
    /// Creates the strategy with semiannual coupons and no date
    /// adjustment.
    #[must_use]
    pub fn new(templates: Vec<BondTemplate>) -> Self {
        Self::with_schedule(
            templates,
            Period::months(6),
            Calendar::weekends_only(BusinessDayConvention::Unadjusted),
        )
    }

    /// Creates the strategy with an explicit coupon frequency and
    /// calendar for the purchased bonds.
    #[must_use]
    pub fn with_schedule(templates: Vec<BondTemplate>, frequency: Period, calendar: Calendar) -> Self {
        Self {
            templates,
            frequency,
            calendar,
        }
    }
}

impl Strategy for BuyBonds {
    fn apply(
        &self,
        portfolio: &mut Portfolio,
        cash: &mut f64,
        step_start: Date,
        _step_end: Date,
        _curve: &CurveHandle,
        _executor: &dyn TaskExecutor,
    ) {
        if *cash <= 0.0 {
            return;
        }

        for template in &self.templates {
            let amount = *cash * template.proportion;
            if amount < CASH_EPSILON {
                continue;
            }

            let bond = Asset::new(fixed_rate_bond_with(
                step_start,
                step_start + template.tenor,
                template.coupon,
                amount,
                self.frequency,
                &self.calendar,
            ));
            portfolio.add_asset(bond);
            *cash -= amount;
        }

        if cash.abs() < CASH_EPSILON {
            *cash = 0.0;
        }
    }
}
