//! 30/360 day count.

use super::DayCount;
use crate::types::Date;

/// 30/360: every month counts 30 days, every year 360.
///
/// Day-of-month values above 30 are clamped to 30 on both ends. This is
/// the plain bond-basis arithmetic without the US end-of-February rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let d1 = i64::from(start.day().min(30));
        let d2 = i64::from(end.day().min(30));
        let months = i64::from(end.month()) - i64::from(start.month());
        let years = i64::from(end.year()) - i64::from(start.year());

        360 * years + 30 * months + (d2 - d1)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}
