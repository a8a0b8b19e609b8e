//! Cash-flow builders for standard instruments.
//!
//! The fixed-rate builder pays `notional * coupon` at every schedule date
//! after issue. Note that the coupon is a fraction of notional **per
//! period** and is not divided by the payment frequency, so a 3% coupon
//! paid semiannually pays 3% of notional twice a year. Callers wanting
//! an annualized rate must divide by the number of periods per year
//! themselves.

use horizon_core::calendars::{BusinessDayConvention, Calendar};
use horizon_core::schedule::Schedule;
use horizon_core::types::{CashFlow, Date, Period};

/// Cash flows of a fixed-rate bullet bond with semiannual coupons and no
/// date adjustment.
#[must_use]
pub fn fixed_rate_bond(issue: Date, maturity: Date, coupon: f64, notional: f64) -> Vec<CashFlow> {
    fixed_rate_bond_with(
        issue,
        maturity,
        coupon,
        notional,
        Period::months(6),
        &Calendar::weekends_only(BusinessDayConvention::Unadjusted),
    )
}

/// Cash flows of a fixed-rate bullet bond.
///
/// A schedule runs from `issue` to `maturity` stepping by `frequency`;
/// the issue date itself pays nothing, every later schedule date pays the
/// coupon, and the adjusted maturity additionally repays the notional.
#[must_use]
pub fn fixed_rate_bond_with(
    issue: Date,
    maturity: Date,
    coupon: f64,
    notional: f64,
    frequency: Period,
    calendar: &Calendar,
) -> Vec<CashFlow> {
    let schedule = Schedule::new(issue, maturity, frequency, calendar, true);

    let mut flows: Vec<CashFlow> = schedule
        .iter()
        .skip(1)
        .map(|&date| CashFlow::new(date, notional * coupon))
        .collect();

    flows.push(CashFlow::new(calendar.adjust(maturity), notional));
    flows
}

/// Single redemption flow of a zero-coupon bond.
#[must_use]
pub fn zero_coupon_bond(maturity: Date, face_amount: f64) -> Vec<CashFlow> {
    vec![CashFlow::new(maturity, face_amount)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_semiannual_bond_flow_count() {
        // 10Y semiannual: 20 coupons plus the principal flow.
        let flows = fixed_rate_bond(date(2025, 5, 7), date(2035, 5, 7), 0.03, 1000.0);
        assert_eq!(flows.len(), 21);
    }

    #[test]
    fn test_coupon_amount_is_notional_times_coupon() {
        let flows = fixed_rate_bond(date(2025, 5, 7), date(2035, 5, 7), 0.03, 1000.0);
        assert_relative_eq!(flows[0].amount, 30.0);
        assert_eq!(flows[0].date, date(2025, 11, 7));
    }

    #[test]
    fn test_issue_date_pays_nothing() {
        let flows = fixed_rate_bond(date(2025, 5, 7), date(2035, 5, 7), 0.03, 1000.0);
        assert!(flows.iter().all(|cf| cf.date > date(2025, 5, 7)));
    }

    #[test]
    fn test_principal_at_maturity() {
        let flows = fixed_rate_bond(date(2025, 5, 7), date(2035, 5, 7), 0.03, 1000.0);
        let at_maturity: Vec<_> = flows
            .iter()
            .filter(|cf| cf.date == date(2035, 5, 7))
            .collect();
        // Final coupon and principal are separate flows on the same date.
        assert_eq!(at_maturity.len(), 2);
        let total: f64 = at_maturity.iter().map(|cf| cf.amount).sum();
        assert_relative_eq!(total, 1030.0);
    }

    #[test]
    fn test_annual_frequency() {
        let flows = fixed_rate_bond_with(
            date(2025, 5, 7),
            date(2030, 5, 7),
            0.045,
            500.0,
            Period::years(1),
            &Calendar::weekends_only(BusinessDayConvention::Unadjusted),
        );
        // 5 coupons of 22.5 plus principal.
        assert_eq!(flows.len(), 6);
        assert_relative_eq!(flows[0].amount, 22.5);
    }

    #[test]
    fn test_adjusted_schedule_lands_on_business_days() {
        let calendar = Calendar::weekends_only(BusinessDayConvention::ModifiedFollowing);
        let flows = fixed_rate_bond_with(
            date(2025, 1, 31),
            date(2030, 1, 31),
            0.04,
            100.0,
            Period::months(6),
            &calendar,
        );
        for cf in &flows {
            assert!(calendar.is_business_day(cf.date));
        }
    }

    #[test]
    fn test_zero_coupon() {
        let flows = zero_coupon_bond(date(2030, 5, 7), 1000.0);
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].date, date(2030, 5, 7));
        assert_relative_eq!(flows[0].amount, 1000.0);
    }
}
