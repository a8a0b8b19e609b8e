//! Business day roll conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a non-business date is rolled onto a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// No adjustment; the date is returned as-is.
    Unadjusted,
    /// Roll forward to the next business day.
    Following,
    /// Roll forward, but fall back to the previous business day if the
    /// roll would leave the calendar month.
    #[default]
    ModifiedFollowing,
    /// Roll backward to the previous business day.
    Preceding,
    /// Roll backward, but move forward to the next business day if the
    /// roll would leave the calendar month.
    ModifiedPreceding,
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_modified_following() {
        assert_eq!(
            BusinessDayConvention::default(),
            BusinessDayConvention::ModifiedFollowing
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            BusinessDayConvention::ModifiedPreceding.to_string(),
            "Modified Preceding"
        );
    }
}
