//! # Horizon Math
//!
//! Numerical routines for the Horizon asset-liability management engine.
//!
//! This crate provides:
//!
//! - **Solvers**: Brent's one-dimensional root finder
//! - **Constraints**: feasible-set projections (box bounds)
//! - **Optimization**: projected-gradient and dogleg trust-region
//!   minimization of black-box objectives
//!
//! ## Design Philosophy
//!
//! - **Black-box objectives**: the optimizers only ever evaluate `f`;
//!   derivatives are forward differences
//! - **Failure is data**: running out of iterations returns the last
//!   iterate with `converged = false`, while structurally bad input
//!   (missing sign change, mismatched dimensions) is an error

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::similar_names)]

pub mod constraints;
pub mod error;
pub mod optimization;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::constraints::{BoxConstraint, Constraint};
    pub use crate::error::{MathError, MathResult};
    pub use crate::optimization::{
        Optimizer, ProjectedGradientSolver, SolverResults, TrustRegionSolver,
    };
    pub use crate::solvers::{brent, BrentResult, SolverConfig};
}

pub use error::{MathError, MathResult};
