//! Newton's method for systems of nonlinear equations.
//!
//! # Algorithm
//!
//! Each iteration evaluates the residuals `r = F(x_k)`, builds the Jacobian
//! `J` by forward finite differences, and steps to
//!
//! ```text
//! x_{k+1} = x_k − J⁻¹ · r
//! ```
//!
//! Column `j` of `J` is `(F(x_k + h·e_j) − r) / h`, so one Jacobian costs
//! `n + 1` evaluations of `F` followed by a dense inversion.
//!
//! # Variants
//!
//! - [`Newton::full`] rebuilds and inverts `J` every iteration (quadratic
//!   convergence near the root).
//! - [`Newton::modified`] builds and inverts `J` once at the initial point and
//!   reuses the inverse for every iteration. Iterations are cheaper but
//!   convergence is only linear, so more of them are needed.
//!
//! Either variant runs sequentially or, with [`Execution::Parallel`], spreads
//! the Jacobian columns, the residual evaluations, and the rows of `J⁻¹ · r`
//! over a worker pool. Results are identical in both modes.
//!
//! # Convergence
//!
//! The solve converges when `|‖x_{k+1}‖₂ − ‖x_k‖₂| ≤ error_rate`
//! ([`Criterion::Norm`]).

mod jacobian;

#[cfg(test)]
mod tests;

pub use jacobian::{JacobianCache, jacobian, newton_step};

use nalgebra::{DMatrix, DVector};
use nlsolve_core::EquationSystem;

use crate::{
    ConfigError, Error, Execution, Executor,
    engine::{Criterion, Method},
};

/// Default forward-difference step.
pub const DEFAULT_STEP: f64 = 1e-4;

/// When the Jacobian is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JacobianUpdate {
    /// Rebuild and invert the Jacobian every iteration.
    #[default]
    EveryIteration,

    /// Build and invert the Jacobian once, at the initial point.
    Frozen,
}

/// Newton's method, full or modified, sequential or parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Newton {
    step: f64,
    jacobian: JacobianUpdate,
    execution: Execution,
}

/// Per-solve state of [`Newton`].
#[derive(Debug)]
pub struct NewtonCache {
    executor: Executor,
    jacobian: JacobianCache,
}

impl Default for Newton {
    fn default() -> Self {
        Self::full()
    }
}

impl Newton {
    /// Newton's method with a fresh Jacobian every iteration.
    #[must_use]
    pub fn full() -> Self {
        Self {
            step: DEFAULT_STEP,
            jacobian: JacobianUpdate::EveryIteration,
            execution: Execution::Sequential,
        }
    }

    /// Modified Newton's method with the Jacobian frozen at the initial point.
    #[must_use]
    pub fn modified() -> Self {
        Self {
            jacobian: JacobianUpdate::Frozen,
            ..Self::full()
        }
    }

    /// Returns a copy with a different forward-difference step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_step(self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        Ok(Self { step, ..self })
    }

    /// Returns a copy with a different execution mode.
    #[must_use]
    pub fn with_execution(self, execution: Execution) -> Self {
        Self { execution, ..self }
    }

    /// Returns a copy that runs on `degree` workers.
    #[must_use]
    pub fn parallel(self, degree: usize) -> Self {
        self.with_execution(Execution::Parallel { degree })
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn jacobian_update(&self) -> JacobianUpdate {
        self.jacobian
    }

    #[must_use]
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Builds and inverts the Jacobian at `x`.
    fn inverse_jacobian(
        &self,
        system: &EquationSystem,
        x: &DVector<f64>,
        residuals: &DVector<f64>,
        executor: &Executor,
        iter: usize,
    ) -> Result<DMatrix<f64>, Error> {
        jacobian(system, x, residuals, self.step, executor)?
            .try_inverse()
            .ok_or(Error::SingularJacobian { iter })
    }
}

impl Method for Newton {
    type Cache = NewtonCache;

    fn name(&self) -> &'static str {
        match (self.jacobian, self.execution) {
            (JacobianUpdate::EveryIteration, Execution::Sequential) => "newton",
            (JacobianUpdate::EveryIteration, Execution::Parallel { .. }) => "parallel-newton",
            (JacobianUpdate::Frozen, Execution::Sequential) => "modified-newton",
            (JacobianUpdate::Frozen, Execution::Parallel { .. }) => "parallel-modified-newton",
        }
    }

    fn criterion(&self) -> Criterion {
        Criterion::Norm
    }

    fn prepare(
        &self,
        system: &EquationSystem,
        initial: &DVector<f64>,
    ) -> Result<NewtonCache, Error> {
        let executor = Executor::new(self.execution)?;

        let jacobian = match self.jacobian {
            JacobianUpdate::EveryIteration => JacobianCache::Stale,
            JacobianUpdate::Frozen => {
                let residuals = executor.evaluate(system, initial)?;
                let inverse = self.inverse_jacobian(system, initial, &residuals, &executor, 0)?;
                JacobianCache::Inverted(inverse)
            }
        };

        Ok(NewtonCache { executor, jacobian })
    }

    fn advance(
        &self,
        system: &EquationSystem,
        cache: &NewtonCache,
        x: &DVector<f64>,
        iter: usize,
    ) -> Result<DVector<f64>, Error> {
        let executor = &cache.executor;
        let residuals = executor.evaluate(system, x)?;

        let fresh;
        let inverse = match (self.jacobian, &cache.jacobian) {
            (JacobianUpdate::Frozen, JacobianCache::Inverted(inverse)) => inverse,
            (JacobianUpdate::Frozen, JacobianCache::Stale) => return Err(Error::MissingJacobian),
            (JacobianUpdate::EveryIteration, _) => {
                fresh = self.inverse_jacobian(system, x, &residuals, executor, iter)?;
                &fresh
            }
        };

        Ok(x - newton_step(inverse, &residuals, executor))
    }
}
