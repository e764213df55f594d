use nalgebra::DVector;
use thiserror::Error;

use crate::WorkerPool;

/// A single scalar equation of the system.
///
/// Each equation receives the full current vector and returns one residual
/// component. Equations must be pure: evaluating twice at the same point
/// yields the same value.
pub type Equation = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Which problem an [`EquationSystem`] encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Residual form `F(x) = 0`, solved by the Newton family.
    Residual,

    /// Equivalent fixed-point form `x = G(x)`, solved by simple iteration.
    FixedPoint,
}

/// Errors that can occur when evaluating an equation system.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    #[error("expected a vector of length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// An ordered collection of `n` scalar equations over `ℝⁿ`.
///
/// Index `i` of every evaluation result corresponds to equation `i`,
/// no matter how the evaluation was scheduled.
pub struct EquationSystem {
    equations: Vec<Equation>,
    form: Form,
}

impl EquationSystem {
    /// Creates a residual-form system `F(x) = 0`.
    #[must_use]
    pub fn new(equations: Vec<Equation>) -> Self {
        Self {
            equations,
            form: Form::Residual,
        }
    }

    /// Creates an equivalent fixed-point system `x = G(x)`.
    #[must_use]
    pub fn fixed_point(equations: Vec<Equation>) -> Self {
        Self {
            equations,
            form: Form::FixedPoint,
        }
    }

    /// Creates a residual-form system of size `n`, building equation `i`
    /// with `factory(i)`.
    #[must_use]
    pub fn from_fn(n: usize, factory: impl FnMut(usize) -> Equation) -> Self {
        Self::new((0..n).map(factory).collect())
    }

    /// Creates a fixed-point system of size `n`, building equation `i`
    /// with `factory(i)`.
    #[must_use]
    pub fn fixed_point_from_fn(n: usize, factory: impl FnMut(usize) -> Equation) -> Self {
        Self::fixed_point((0..n).map(factory).collect())
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns true if the system has no equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Returns the form of the system.
    #[must_use]
    pub fn form(&self) -> Form {
        self.form
    }

    /// Evaluates every equation at `x`, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::DimensionMismatch`] if `x` does not have one
    /// component per equation.
    pub fn compute(&self, x: &DVector<f64>) -> Result<DVector<f64>, SystemError> {
        self.check_len(x)?;
        let values = x.as_slice();

        Ok(DVector::from_iterator(
            self.len(),
            self.equations.iter().map(|equation| equation(values)),
        ))
    }

    /// Evaluates every equation at `x`, spreading the equations over the
    /// workers of `pool`.
    ///
    /// The result is identical to [`compute`](Self::compute).
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::DimensionMismatch`] if `x` does not have one
    /// component per equation.
    pub fn compute_parallel(
        &self,
        x: &DVector<f64>,
        pool: &WorkerPool,
    ) -> Result<DVector<f64>, SystemError> {
        self.check_len(x)?;
        let values = x.as_slice();

        let residuals = pool.map_indexed(self.len(), |i| (self.equations[i])(values));
        Ok(DVector::from_vec(residuals))
    }

    fn check_len(&self, x: &DVector<f64>) -> Result<(), SystemError> {
        if x.len() == self.len() {
            Ok(())
        } else {
            Err(SystemError::DimensionMismatch {
                expected: self.len(),
                actual: x.len(),
            })
        }
    }
}

impl std::fmt::Debug for EquationSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EquationSystem")
            .field("len", &self.len())
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}
