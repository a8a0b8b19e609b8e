//! Calendar date type for projection and pricing.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};

/// Days from 1970-01-01 (the serial epoch) to chrono's 0001-01-01 origin.
const EPOCH_FROM_CE: i32 = 719_162;

/// A calendar date.
///
/// Newtype wrapper around `chrono::NaiveDate` exposing the operations the
/// projection engine needs: serial-day arithmetic, clamping month/year
/// addition, and weekday queries. The serial representation counts days
/// from 1970-01-01, so `Date::from_serial(0)` is the epoch (a Thursday).
///
/// # Example
///
/// ```rust
/// use horizon_core::types::Date;
///
/// let issue = Date::from_ymd(2025, 5, 7).unwrap();
/// let maturity = issue.add_years(10).unwrap();
/// assert_eq!(maturity, Date::from_ymd(2035, 5, 7).unwrap());
/// assert_eq!(Date::from_serial(issue.serial()), issue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the combination does not name a
    /// real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string cannot be parsed.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("cannot parse: {s}")))
    }

    /// Creates a date from a serial day number (days since 1970-01-01).
    #[must_use]
    pub fn from_serial(serial: i32) -> Self {
        Date(
            NaiveDate::from_num_days_from_ce_opt(serial + EPOCH_FROM_CE + 1)
                .expect("serial day within supported range"),
        )
    }

    /// Returns the serial day number (days since 1970-01-01).
    #[must_use]
    pub fn serial(&self) -> i32 {
        self.0.num_days_from_ce() - EPOCH_FROM_CE - 1
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks whether the date falls in a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of days (negative values step backwards).
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months, clamping the day to the target month.
    ///
    /// Jan 31 + 1 month is Feb 28 (or 29 in a leap year).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result leaves the supported
    /// year range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total = self.year() * 12 + self.month() as i32 - 1 + months;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        let day = self.day().min(days_in_month(year, month));
        Self::from_ymd(year, month, day)
    }

    /// Adds a number of years, clamping Feb 29 to Feb 28 off leap years.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result leaves the supported
    /// year range.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let year = self.year() + years;
        let day = self.day().min(days_in_month(year, self.month()));
        Self::from_ymd(year, self.month(), day)
    }

    /// Returns the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks whether the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Days in a month of the proleptic Gregorian calendar.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("invalid month: {month}"),
    }
}

/// Gregorian leap-year rule.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
