//! Time periods for schedule steps, tenors and projection intervals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};

use super::Date;

/// Unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar months (day-of-month clamped on addition).
    Months,
    /// Calendar years (Feb 29 clamped on addition).
    Years,
}

/// A signed length of time, e.g. a 6M coupon frequency or a 10Y tenor.
///
/// # Example
///
/// ```rust
/// use horizon_core::types::{Date, Period};
///
/// let issue = Date::from_ymd(2025, 5, 7).unwrap();
/// assert_eq!(issue + Period::years(10), Date::from_ymd(2035, 5, 7).unwrap());
/// assert_eq!(-Period::months(6), Period::months(-6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Signed number of units.
    pub length: i32,
    /// Unit the length is expressed in.
    pub unit: TimeUnit,
}

impl Period {
    /// Creates a period from a length and unit.
    #[must_use]
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// A period of `n` days.
    #[must_use]
    pub fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// A period of `n` months.
    #[must_use]
    pub fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// A period of `n` years.
    #[must_use]
    pub fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }
}

impl Neg for Period {
    type Output = Self;

    /// Reverses the direction of the period.
    fn neg(self) -> Self::Output {
        Self::new(-self.length, self.unit)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{suffix}", self.length)
    }
}

impl Add<Period> for Date {
    type Output = Date;

    /// Advances the date by the period, clamping the day-of-month for
    /// month and year steps.
    fn add(self, period: Period) -> Self::Output {
        match period.unit {
            TimeUnit::Days => self.add_days(i64::from(period.length)),
            TimeUnit::Months => self
                .add_months(period.length)
                .expect("month arithmetic within supported date range"),
            TimeUnit::Years => self
                .add_years(period.length)
                .expect("year arithmetic within supported date range"),
        }
    }
}
