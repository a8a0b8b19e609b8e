//! Business day calendars and date rolling.
//!
//! A [`Calendar`] owns a sorted holiday set and a roll convention.
//! Saturdays and Sundays are always non-business; everything else is a
//! business day unless listed as a holiday.

mod conventions;

pub use conventions::BusinessDayConvention;

use crate::types::{Date, Period};

/// A business day calendar: holiday set plus roll convention.
///
/// # Example
///
/// ```rust
/// use horizon_core::calendars::{BusinessDayConvention, Calendar};
/// use horizon_core::types::Date;
///
/// let cal = Calendar::new(vec![], BusinessDayConvention::Following);
/// let saturday = Date::from_ymd(2025, 5, 10).unwrap();
/// assert_eq!(cal.adjust(saturday), Date::from_ymd(2025, 5, 12).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    holidays: Vec<Date>,
    convention: BusinessDayConvention,
}

impl Calendar {
    /// Creates a calendar from a holiday list and a roll convention.
    ///
    /// The holiday list is sorted on construction so membership tests can
    /// binary-search.
    #[must_use]
    pub fn new(mut holidays: Vec<Date>, convention: BusinessDayConvention) -> Self {
        holidays.sort_unstable();
        Self {
            holidays,
            convention,
        }
    }

    /// A holiday-free calendar with the given convention.
    #[must_use]
    pub fn weekends_only(convention: BusinessDayConvention) -> Self {
        Self::new(Vec::new(), convention)
    }

    /// Returns the roll convention.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Checks whether the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Checks whether the date is a listed holiday.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.binary_search(&date).is_ok()
    }

    /// Checks whether the date is a business day.
    #[must_use]
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Adds a single holiday, keeping the set sorted.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.push(date);
        self.holidays.sort_unstable();
    }

    /// Adds a batch of holidays, keeping the set sorted.
    pub fn add_holidays(&mut self, dates: &[Date]) {
        self.holidays.extend_from_slice(dates);
        self.holidays.sort_unstable();
    }

    /// Rolls a date onto a business day according to the convention.
    ///
    /// Business days are fixed points: `adjust(d) == d` whenever
    /// `is_business_day(d)` under every convention.
    #[must_use]
    pub fn adjust(&self, date: Date) -> Date {
        match self.convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => self.roll(date, 1),
            BusinessDayConvention::Preceding => self.roll(date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let rolled = self.roll(date, 1);
                if rolled.month() == date.month() {
                    rolled
                } else {
                    // Crossed into the next month: restart and roll back.
                    self.roll(date, -1)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let rolled = self.roll(date, -1);
                if rolled.month() == date.month() {
                    rolled
                } else {
                    // Crossed into the previous month: restart and roll on.
                    self.roll(date, 1)
                }
            }
        }
    }

    /// Advances a date by a period and adjusts the result.
    #[must_use]
    pub fn advance(&self, date: Date, period: Period) -> Date {
        self.adjust(date + period)
    }

    /// Steps one day at a time in `direction` until a business day.
    fn roll(&self, date: Date, direction: i64) -> Date {
        let mut current = date;
        while !self.is_business_day(current) {
            current = current.add_days(direction);
        }
        current
    }
}
