//! Actual/Actual day count.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual: each day is weighted by the length of the year it
/// falls in.
///
/// Within a single calendar year the fraction is
/// `days / (365 or 366)`. A span across year boundaries splits into a
/// prefix fragment in the first year, a whole-year middle, and a suffix
/// fragment in the last year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActualActual;

impl DayCount for ActualActual {
    fn name(&self) -> &'static str {
        "Actual/Actual"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let (y1, y2) = (start.year(), end.year());

        if y1 == y2 {
            return self.day_count(start, end) as f64 / f64::from(start.days_in_year());
        }

        let end_of_first = Date::from_ymd(y1 + 1, 1, 1).expect("jan 1 is always valid");
        let start_of_last = Date::from_ymd(y2, 1, 1).expect("jan 1 is always valid");

        let prefix = self.day_count(start, end_of_first) as f64 / f64::from(start.days_in_year());
        let suffix = self.day_count(start_of_last, end) as f64 / f64::from(end.days_in_year());

        prefix + f64::from(y2 - y1 - 1) + suffix
    }
}
