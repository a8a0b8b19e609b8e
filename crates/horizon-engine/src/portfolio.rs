//! Ordered asset container with parallelizable aggregation.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use horizon_core::types::Date;
use horizon_curves::CurveHandle;

use crate::asset::Asset;
use crate::executor::{Task, TaskExecutor};

/// An ordered collection of assets.
///
/// Pricing and flow aggregation fan one task per asset out to the
/// executor. Every task writes its partial into a dedicated slot and the
/// slots are summed sequentially in asset order after the join, so the
/// result is bit-identical whatever the executor and whatever order the
/// tasks finish in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    assets: Vec<Asset>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a portfolio from a list of assets, preserving order.
    #[must_use]
    pub fn from_assets(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Appends an asset.
    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Returns the assets in insertion order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Returns mutable access to the assets.
    pub fn assets_mut(&mut self) -> &mut [Asset] {
        &mut self.assets
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the portfolio holds no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Scales every asset's volume by `factor`.
    pub fn scale_volumes(&mut self, factor: f64) {
        for asset in &mut self.assets {
            let volume = asset.volume();
            asset.set_volume(volume * factor);
        }
    }

    /// Sum of per-asset market values at `reference`.
    #[must_use]
    pub fn market_value(
        &self,
        curve: &CurveHandle,
        reference: Date,
        executor: &dyn TaskExecutor,
    ) -> f64 {
        self.fan_out_sum(executor, |asset| asset.market_value(curve.as_ref(), reference))
    }

    /// Sum of per-asset flows in the window `from < date <= to`.
    #[must_use]
    pub fn cash_flow(&self, from: Date, to: Date, executor: &dyn TaskExecutor) -> f64 {
        self.fan_out_sum(executor, |asset| asset.cash_flow(from, to))
    }

    /// Dispatches one task per asset, then reduces the slots in asset
    /// order.
    fn fan_out_sum<F>(&self, executor: &dyn TaskExecutor, per_asset: F) -> f64
    where
        F: Fn(&Asset) -> f64 + Sync,
    {
        let slots: Vec<Mutex<f64>> = self.assets.iter().map(|_| Mutex::new(0.0)).collect();

        let tasks: Vec<Task<'_>> = self
            .assets
            .iter()
            .zip(&slots)
            .map(|(asset, slot)| {
                let per_asset = &per_asset;
                Box::new(move || {
                    *slot.lock() = per_asset(asset);
                }) as Task<'_>
            })
            .collect();
        executor.submit_and_wait(tasks);

        slots.iter().map(|slot| *slot.lock()).sum()
    }
}

impl FromIterator<Asset> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}
