//! Dated cash-flow value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A single dated cash flow.
///
/// Models both asset inflows and liability outflows in a projection; the
/// amount may be negative. Amounts are in currency units per unit of asset
/// volume — the owning asset scales them by its volume when pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// The date on which the cash flow occurs.
    pub date: Date,
    /// The amount of the cash flow.
    pub amount: f64,
}

impl CashFlow {
    /// Creates a cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Checks whether the flow falls inside the half-open window
    /// `from < date <= to`.
    ///
    /// The lower bound is exclusive so that a flow paid exactly on a step
    /// boundary is accrued by exactly one projection step.
    #[must_use]
    pub fn occurs_between(&self, from: Date, to: Date) -> bool {
        self.date > from && self.date <= to
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.amount)
    }
}
