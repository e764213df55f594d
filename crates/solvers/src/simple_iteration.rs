//! Simple (fixed-point) iteration for equivalent systems `x = G(x)`.
//!
//! # Algorithm
//!
//! Starting from `x_0`, each iteration evaluates the system and takes the
//! result as the next iterate:
//!
//! ```text
//! x_{k+1} = G(x_k)
//! ```
//!
//! The iteration converges when `G` is a contraction near the fixed point.
//! There is no Jacobian and no inversion, so one iteration costs exactly one
//! evaluation of `G`. With [`Execution::Parallel`] the `n` components of that
//! evaluation are computed by a worker pool.
//!
//! # Input
//!
//! The system must be built with [`EquationSystem::fixed_point`] (or
//! [`EquationSystem::fixed_point_from_fn`]). A residual-form system is
//! rejected with [`Error::NotFixedPoint`] before the first iteration.
//!
//! # Convergence
//!
//! The solve converges when `|norma(x_{k+1}) − norma(x_k)| < error_rate`
//! ([`Criterion::Norma`]). Note the strict comparison.

use nalgebra::DVector;
use nlsolve_core::{EquationSystem, Form};

use crate::{
    Error, Execution, Executor,
    engine::{Criterion, Method},
};

/// Simple iteration, sequential or parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimpleIteration {
    execution: Execution,
}

impl SimpleIteration {
    /// Sequential simple iteration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with a different execution mode.
    #[must_use]
    pub fn with_execution(self, execution: Execution) -> Self {
        Self { execution }
    }

    /// Returns a copy that runs on `degree` workers.
    #[must_use]
    pub fn parallel(self, degree: usize) -> Self {
        self.with_execution(Execution::Parallel { degree })
    }

    #[must_use]
    pub fn execution(&self) -> Execution {
        self.execution
    }
}

impl Method for SimpleIteration {
    type Cache = Executor;

    fn name(&self) -> &'static str {
        match self.execution {
            Execution::Sequential => "simple-iteration",
            Execution::Parallel { .. } => "parallel-simple-iteration",
        }
    }

    fn criterion(&self) -> Criterion {
        Criterion::Norma
    }

    fn prepare(&self, system: &EquationSystem, _initial: &DVector<f64>) -> Result<Executor, Error> {
        if system.form() != Form::FixedPoint {
            return Err(Error::NotFixedPoint);
        }
        Executor::new(self.execution)
    }

    fn advance(
        &self,
        system: &EquationSystem,
        executor: &Executor,
        x: &DVector<f64>,
        _iter: usize,
    ) -> Result<DVector<f64>, Error> {
        executor.evaluate(system, x).map_err(Error::from)
    }
}
