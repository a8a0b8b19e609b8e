//! Flat-forward yield curve.

use std::sync::Arc;

use horizon_core::daycounts::DayCount;
use horizon_core::types::Date;

use crate::term_structure::YieldCurve;

/// A curve with one constant annually-compounded rate at every tenor.
///
/// Discount factors are `(1 + r)^(-t)` where `t` is the year fraction
/// from the reference date under the curve's day count. Zero and forward
/// rates are the flat rate itself.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use horizon_core::daycounts::Actual365Fixed;
/// use horizon_core::types::Date;
/// use horizon_curves::{FlatForward, YieldCurve};
///
/// let today = Date::from_ymd(2025, 5, 7).unwrap();
/// let curve = FlatForward::new(today, 0.03, Arc::new(Actual365Fixed));
/// assert_eq!(curve.discount(today), 1.0);
/// assert!(curve.discount(today.add_days(365)) < 1.0);
/// ```
pub struct FlatForward {
    reference: Date,
    rate: f64,
    day_count: Arc<dyn DayCount>,
}

impl FlatForward {
    /// Creates a flat curve from a reference date, an annual rate and a
    /// day count.
    #[must_use]
    pub fn new(reference: Date, rate: f64, day_count: Arc<dyn DayCount>) -> Self {
        Self {
            reference,
            rate,
            day_count,
        }
    }

    /// Returns the flat annual rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl YieldCurve for FlatForward {
    fn reference_date(&self) -> Date {
        self.reference
    }

    fn discount(&self, date: Date) -> f64 {
        let t = self.day_count.year_fraction(self.reference, date);
        (1.0 + self.rate).powf(-t)
    }

    fn zero_rate(&self, _date: Date) -> f64 {
        self.rate
    }

    fn forward_rate(&self, _start: Date, _end: Date) -> f64 {
        self.rate
    }
}
