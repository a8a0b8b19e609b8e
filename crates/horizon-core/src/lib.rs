//! # Horizon Core
//!
//! Core types for the Horizon asset-liability management engine.
//!
//! This crate provides the date and cash-flow kernel used throughout
//! Horizon:
//!
//! - **Types**: [`types::Date`], [`types::Period`], [`types::CashFlow`]
//! - **Calendars**: holiday calendars with five business-day roll
//!   conventions
//! - **Day Counts**: Actual/Actual, Actual/365 (Fixed) and 30/360 year
//!   fractions
//! - **Schedules**: adjusted, strictly increasing date sequences
//!
//! ## Design Philosophy
//!
//! - **Value types**: dates, periods and cash flows are small `Copy` types
//! - **Immutable after construction**: calendars and schedules never
//!   change underneath a running projection
//! - **Explicit conventions**: every adjustment and fraction names its
//!   convention

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar};
    pub use crate::daycounts::{Actual365Fixed, ActualActual, DayCount, Thirty360};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::schedule::Schedule;
    pub use crate::types::{CashFlow, Date, Period, TimeUnit};
}

pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, Date, Period, TimeUnit};
