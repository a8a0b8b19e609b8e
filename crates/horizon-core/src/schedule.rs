//! Date schedule generation.

use crate::calendars::Calendar;
use crate::types::{Date, Period};

/// An ordered sequence of adjusted dates.
///
/// Generated by stepping from `start` to `end` by a fixed period,
/// adjusting every date through the calendar. Dates are strictly
/// increasing; duplicates produced by adjustment are dropped.
///
/// # Example
///
/// ```rust
/// use horizon_core::calendars::Calendar;
/// use horizon_core::schedule::Schedule;
/// use horizon_core::types::{Date, Period};
///
/// let start = Date::from_ymd(2025, 5, 7).unwrap();
/// let end = Date::from_ymd(2027, 5, 7).unwrap();
/// let schedule = Schedule::new(start, end, Period::months(6), &Calendar::default(), true);
/// assert_eq!(schedule.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<Date>,
}

impl Schedule {
    /// Generates a schedule from `start` to `end` stepping by `step`.
    ///
    /// The first date is `adjust(start)`; each following date advances the
    /// last kept date by `step` until the result passes `end`. When
    /// `include_end` is set, `adjust(end)` is appended unless it is
    /// already the final entry.
    #[must_use]
    pub fn new(
        start: Date,
        end: Date,
        step: Period,
        calendar: &Calendar,
        include_end: bool,
    ) -> Self {
        let mut dates = vec![calendar.adjust(start)];

        let mut current = dates[0];
        loop {
            let next = calendar.advance(current, step);
            if next > end {
                break;
            }
            // Adjustment can stall on the same date; drop duplicates so
            // the sequence stays strictly increasing.
            if next > current {
                dates.push(next);
            }
            current = next;
        }

        if include_end {
            let last = calendar.adjust(end);
            if *dates.last().expect("schedule starts non-empty") < last {
                dates.push(last);
            }
        }

        Self { dates }
    }

    /// Returns the generated dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the schedule holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the date at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Date> {
        self.dates.get(index).copied()
    }

    /// Returns an iterator over the dates.
    pub fn iter(&self) -> impl Iterator<Item = &Date> {
        self.dates.iter()
    }
}

impl std::ops::Index<usize> for Schedule {
    type Output = Date;

    fn index(&self, index: usize) -> &Self::Output {
        &self.dates[index]
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::BusinessDayConvention;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_semiannual_schedule() {
        let cal = Calendar::weekends_only(BusinessDayConvention::Unadjusted);
        let schedule = Schedule::new(
            date(2025, 5, 7),
            date(2027, 5, 7),
            Period::months(6),
            &cal,
            true,
        );

        let expected = [
            date(2025, 5, 7),
            date(2025, 11, 7),
            date(2026, 5, 7),
            date(2026, 11, 7),
            date(2027, 5, 7),
        ];
        assert_eq!(schedule.dates(), &expected);
    }

    #[test]
    fn test_strictly_increasing() {
        let cal = Calendar::default();
        let schedule = Schedule::new(
            date(2025, 1, 15),
            date(2035, 1, 15),
            Period::months(3),
            &cal,
            true,
        );
        for pair in schedule.dates().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_adjusting_conventions_land_on_business_days() {
        let cal = Calendar::weekends_only(BusinessDayConvention::ModifiedFollowing);
        let schedule = Schedule::new(
            date(2025, 1, 31),
            date(2026, 1, 31),
            Period::months(1),
            &cal,
            true,
        );
        for d in &schedule {
            assert!(cal.is_business_day(*d));
        }
    }

    #[test]
    fn test_include_end_appends_adjusted_end() {
        let cal = Calendar::weekends_only(BusinessDayConvention::Unadjusted);
        // 10M span stepped by 3M: end is off-cycle.
        let schedule = Schedule::new(
            date(2025, 1, 1),
            date(2025, 11, 1),
            Period::months(3),
            &cal,
            true,
        );
        assert_eq!(*schedule.dates().last().unwrap(), date(2025, 11, 1));
        assert_eq!(schedule.len(), 5);
    }

    #[test]
    fn test_exclude_end() {
        let cal = Calendar::weekends_only(BusinessDayConvention::Unadjusted);
        let schedule = Schedule::new(
            date(2025, 1, 1),
            date(2025, 11, 1),
            Period::months(3),
            &cal,
            false,
        );
        assert_eq!(*schedule.dates().last().unwrap(), date(2025, 10, 1));
    }

    #[test]
    fn test_end_before_start_yields_single_date() {
        let cal = Calendar::weekends_only(BusinessDayConvention::Unadjusted);
        let schedule = Schedule::new(
            date(2025, 5, 7),
            date(2025, 1, 1),
            Period::months(1),
            &cal,
            true,
        );
        assert_eq!(schedule.dates(), &[date(2025, 5, 7)]);
    }

    #[test]
    fn test_indexing_and_iteration() {
        let cal = Calendar::default();
        let schedule = Schedule::new(
            date(2025, 1, 1),
            date(2026, 1, 1),
            Period::months(6),
            &cal,
            true,
        );
        assert_eq!(schedule[0], schedule.get(0).unwrap());
        assert_eq!(schedule.iter().count(), schedule.len());
        assert!(!schedule.is_empty());
    }
}
