//! Core yield-curve trait.

use std::sync::Arc;

use horizon_core::types::Date;

/// Abstraction over a yield curve observed by projections and pricers.
///
/// A curve is frozen at construction: every method takes `&self` and
/// implementations are required to be `Send + Sync`, so one curve instance
/// can be shared across concurrently running scenario projections. To
/// reprice under a different curve, build a new projection against a new
/// handle rather than mutating the curve in place.
pub trait YieldCurve: Send + Sync {
    /// Returns the curve's reference (valuation) date.
    fn reference_date(&self) -> Date;

    /// Returns the discount factor for a payment on `date`.
    ///
    /// `discount(reference_date())` is 1; for non-negative rates the
    /// factor is non-increasing in the payment date.
    fn discount(&self, date: Date) -> f64;

    /// Returns the zero rate to `date`, in the curve's own compounding.
    fn zero_rate(&self, date: Date) -> f64;

    /// Returns the forward rate between two dates.
    fn forward_rate(&self, start: Date, end: Date) -> f64;
}

/// Shared, immutable handle to a curve.
///
/// Cloning the handle shares the same frozen curve; projections hold one
/// handle each and never observe a curve change mid-run.
pub type CurveHandle = Arc<dyn YieldCurve>;
