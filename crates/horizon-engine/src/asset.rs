//! Cash-flow-bearing asset.

use horizon_core::types::{CashFlow, Date};
use horizon_curves::YieldCurve;
use serde::{Deserialize, Serialize};

/// An asset: an immutable cash-flow profile times a volume scalar.
///
/// The cash flows describe one unit of the asset; `volume` is the number
/// of units held. Only the volume ever mutates — strategies scale it when
/// selling and the optimizer reassigns it when searching over allocations.
/// Market value and flow aggregation are both linear in volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    cash_flows: Vec<CashFlow>,
    volume: f64,
}

impl Asset {
    /// Creates an asset with unit volume.
    #[must_use]
    pub fn new(cash_flows: Vec<CashFlow>) -> Self {
        Self::with_volume(cash_flows, 1.0)
    }

    /// Creates an asset with an explicit volume.
    #[must_use]
    pub fn with_volume(cash_flows: Vec<CashFlow>, volume: f64) -> Self {
        Self { cash_flows, volume }
    }

    /// Returns the per-unit cash flows.
    #[must_use]
    pub fn cash_flows(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the volume multiplier.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Reassigns the volume multiplier.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    /// Present value of the flows on or after `reference`, scaled by
    /// volume.
    #[must_use]
    pub fn market_value(&self, curve: &dyn YieldCurve, reference: Date) -> f64 {
        let mut total = 0.0;
        for cf in &self.cash_flows {
            if cf.date >= reference {
                total += cf.amount * curve.discount(cf.date);
            }
        }
        total * self.volume
    }

    /// Sum of the flows in the window `from < date <= to`, scaled by
    /// volume.
    #[must_use]
    pub fn cash_flow(&self, from: Date, to: Date) -> f64 {
        let mut total = 0.0;
        for cf in &self.cash_flows {
            if cf.occurs_between(from, to) {
                total += cf.amount;
            }
        }
        total * self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use horizon_core::daycounts::Actual365Fixed;
    use horizon_curves::FlatForward;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn two_flow_asset() -> Asset {
        Asset::new(vec![
            CashFlow::new(date(2026, 5, 7), 30.0),
            CashFlow::new(date(2027, 5, 7), 1030.0),
        ])
    }

    fn flat_curve(rate: f64) -> FlatForward {
        FlatForward::new(date(2025, 5, 7), rate, Arc::new(Actual365Fixed))
    }

    #[test]
    fn test_market_value_discounts_future_flows() {
        let asset = two_flow_asset();
        let curve = flat_curve(0.03);
        let expected = 30.0 * curve.discount(date(2026, 5, 7))
            + 1030.0 * curve.discount(date(2027, 5, 7));
        assert_relative_eq!(
            asset.market_value(&curve, date(2025, 5, 7)),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_market_value_drops_past_flows() {
        let asset = two_flow_asset();
        let curve = flat_curve(0.03);
        // Reference past the first flow: only the second one prices.
        let mv = asset.market_value(&curve, date(2026, 6, 1));
        assert_relative_eq!(
            mv,
            1030.0 * curve.discount(date(2027, 5, 7)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_flow_on_reference_date_still_prices() {
        let asset = two_flow_asset();
        let curve = flat_curve(0.03);
        let mv = asset.market_value(&curve, date(2026, 5, 7));
        let expected = 30.0 * curve.discount(date(2026, 5, 7))
            + 1030.0 * curve.discount(date(2027, 5, 7));
        assert_relative_eq!(mv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_market_value_linear_in_volume() {
        let mut asset = two_flow_asset();
        let curve = flat_curve(0.04);
        let unit = asset.market_value(&curve, date(2025, 5, 7));

        asset.set_volume(2.5);
        assert_relative_eq!(
            asset.market_value(&curve, date(2025, 5, 7)),
            2.5 * unit,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cash_flow_window() {
        let asset = two_flow_asset();
        // Half-open: flow on the window start is excluded, on the end
        // included.
        assert_eq!(asset.cash_flow(date(2025, 5, 7), date(2026, 5, 7)), 30.0);
        assert_eq!(asset.cash_flow(date(2026, 5, 7), date(2027, 5, 7)), 1030.0);
        assert_eq!(asset.cash_flow(date(2025, 5, 7), date(2027, 5, 7)), 1060.0);
    }

    #[test]
    fn test_cash_flow_scales_with_volume() {
        let asset = Asset::with_volume(vec![CashFlow::new(date(2026, 1, 1), 100.0)], 3.0);
        assert_eq!(asset.cash_flow(date(2025, 1, 1), date(2027, 1, 1)), 300.0);
    }
}
