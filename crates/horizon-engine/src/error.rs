//! Error types for projection and scenario runs.

use horizon_math::MathError;
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by projections and the multi-scenario driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A multi-scenario run was requested with no curves.
    #[error("empty scenario set: at least one curve is required")]
    EmptyScenarioSet,

    /// One scenario's starting-asset solve failed; sibling scenarios are
    /// unaffected.
    #[error("scenario {index} failed: {source}")]
    ScenarioFailed {
        /// Index of the failing scenario in the curve set.
        index: usize,
        /// The underlying solver failure.
        #[source]
        source: MathError,
    },

    /// A numerical solve failed outside a scenario context.
    #[error(transparent)]
    Solver(#[from] MathError),
}
