//! Error types for solvers and optimizers.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors raised by root-finding and optimization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The bracket handed to a bracketing root finder does not contain a
    /// sign change.
    #[error("invalid bracket: f({a}) = {fa:.6e} and f({b}) = {fb:.6e} have the same sign")]
    InvalidBracket {
        /// Lower bound of the bracket.
        a: f64,
        /// Upper bound of the bracket.
        b: f64,
        /// Function value at the lower bound.
        fa: f64,
        /// Function value at the upper bound.
        fb: f64,
    },

    /// A root finder exhausted its iteration budget.
    #[error("convergence failed after {iterations} iterations (residual {residual:.6e})")]
    ConvergenceFailed {
        /// Iterations attempted.
        iterations: u32,
        /// Residual at the last iterate.
        residual: f64,
    },

    /// Two vectors that must share a dimension do not.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failure.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MathError::InvalidBracket {
            a: 0.0,
            b: 100.0,
            fa: 1.0,
            fb: 2.0,
        };
        assert!(err.to_string().contains("same sign"));

        let err = MathError::convergence_failed(100, 1e-3);
        assert!(err.to_string().contains("100 iterations"));
    }
}
