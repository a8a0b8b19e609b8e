//! Feasible-set constraints for the multivariate solvers.

use nalgebra::DVector;

use crate::error::{MathError, MathResult};

/// A constraint that can project an iterate back onto its feasible set.
///
/// Solvers apply constraints in the order given; each projection must be
/// idempotent and `is_satisfied(project(x))` must hold. That is
/// sufficient for convex, composable projections — no cyclic projection
/// scheme is attempted.
pub trait Constraint: Send + Sync {
    /// Projects `x` onto the feasible set in place.
    fn project(&self, x: &mut DVector<f64>);

    /// Checks whether `x` lies in the feasible set.
    fn is_satisfied(&self, x: &DVector<f64>) -> bool;
}

/// Componentwise lower/upper bounds.
///
/// # Example
///
/// ```rust
/// use horizon_math::constraints::{BoxConstraint, Constraint};
/// use nalgebra::dvector;
///
/// let bounds = BoxConstraint::new(dvector![0.0, 0.0], dvector![1.0, 1.0]).unwrap();
/// let mut x = dvector![-0.2, 1.5];
/// bounds.project(&mut x);
/// assert_eq!(x, dvector![0.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct BoxConstraint {
    lower: DVector<f64>,
    upper: DVector<f64>,
}

impl BoxConstraint {
    /// Creates a box from componentwise bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DimensionMismatch`] when the bounds differ in
    /// length, and [`MathError::InvalidInput`] when any lower bound
    /// exceeds its upper bound.
    pub fn new(lower: DVector<f64>, upper: DVector<f64>) -> MathResult<Self> {
        if lower.len() != upper.len() {
            return Err(MathError::DimensionMismatch {
                expected: lower.len(),
                actual: upper.len(),
            });
        }
        if lower.iter().zip(upper.iter()).any(|(lo, hi)| lo > hi) {
            return Err(MathError::invalid_input(
                "box constraint has a lower bound above its upper bound",
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Returns the dimension of the box.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.lower.len()
    }
}

impl Constraint for BoxConstraint {
    fn project(&self, x: &mut DVector<f64>) {
        for i in 0..x.len() {
            x[i] = x[i].clamp(self.lower[i], self.upper[i]);
        }
    }

    fn is_satisfied(&self, x: &DVector<f64>) -> bool {
        (0..x.len()).all(|i| self.lower[i] <= x[i] && x[i] <= self.upper[i])
    }
}
