//! Searches for the cheapest starting allocation that funds a liability
//! stream across a grid of rate scenarios.
//!
//! Builds a five-bond portfolio against ten annual payouts, projects it
//! under nine flat curves from 3% to 11% with a sell/reinvest rebalance
//! strategy, and runs a box-constrained projected-gradient search over
//! the per-asset volume scalars. The objective is the worst-case opening
//! asset requirement across scenarios.
//!
//! Run with: `cargo run --example frontier -p horizon-engine`

use std::sync::Arc;

use nalgebra::DVector;

use horizon_core::daycounts::Actual365Fixed;
use horizon_core::types::{CashFlow, Date, Period};
use horizon_curves::{CurveHandle, FlatForward};
use horizon_engine::prelude::*;
use horizon_math::constraints::{BoxConstraint, Constraint};
use horizon_math::optimization::ProjectedGradientSolver;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let today = Date::from_ymd(2025, 5, 7).expect("valid date");
    let horizon = today + Period::years(10);

    // Nine flat scenarios: 3%, 4%, ..., 11%.
    let curves: Vec<CurveHandle> = (0..9)
        .map(|i| {
            Arc::new(FlatForward::new(
                today,
                0.03 + 0.01 * f64::from(i),
                Arc::new(Actual365Fixed),
            )) as CurveHandle
        })
        .collect();

    let executor: Arc<dyn TaskExecutor> = Arc::new(ThreadPoolExecutor::new());

    // Five 10Y bonds with stepped coupons.
    let assets: Portfolio = (0..5)
        .map(|i| {
            Asset::new(fixed_rate_bond(
                today,
                horizon,
                0.03 + 0.001 * f64::from(i),
                1000.0,
            ))
        })
        .collect();

    // Ten annual payouts of 5000.
    let liabilities: Portfolio = (1..=10)
        .map(|i| Asset::new(vec![CashFlow::new(today + Period::years(i), 5000.0)]))
        .collect();

    // Shortfalls sell pro rata; surpluses buy 10Y bonds at 4.5%.
    let strategy: Arc<dyn Strategy> = Arc::new(RebalanceStrategy::new(
        Arc::new(SellProRata),
        Arc::new(BuyBonds::new(vec![BondTemplate {
            proportion: 1.0,
            coupon: 0.045,
            tenor: Period::years(10),
        }])),
    ));

    let objective = |x: &DVector<f64>| {
        let mut candidate = assets.clone();
        for (asset, scale) in candidate.assets_mut().iter_mut().zip(x.iter()) {
            asset.set_volume(*scale);
        }

        let driver = MultiScenarioProjection::new(
            candidate,
            liabilities.clone(),
            Some(strategy.clone()),
            executor.clone(),
            curves.clone(),
            today,
            horizon,
            Period::years(1),
        );

        let results = driver.run().expect("scenario run");
        results
            .iter()
            .map(|r| r.assets_bop[0])
            .fold(0.0, f64::max)
    };

    // First four volumes capped at par, the last one free up to 100x.
    let mut upper = DVector::from_element(5, 1.0);
    upper[4] = 100.0;
    let bounds: Arc<dyn Constraint> = Arc::new(
        BoxConstraint::new(DVector::from_element(5, 0.0), upper).expect("consistent bounds"),
    );

    let solver = ProjectedGradientSolver::new(vec![bounds], 1000, 1e-2, 1e-4);
    let x0 = DVector::from_element(5, 1.0);
    let results = solver.solve(&objective, &x0);

    println!("converged: {}", results.converged);
    println!("iterations: {}", results.iterations);
    println!("worst-case opening requirement: {:.2}", results.objective);
    println!("allocation:");
    for (i, volume) in results.x.iter().enumerate() {
        println!("  asset {i}: {volume:.4}");
    }
}
