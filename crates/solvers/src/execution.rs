use nalgebra::DVector;
use nlsolve_core::{EquationSystem, SystemError, WorkerPool};

use crate::Error;

/// How a method schedules the independent work inside one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Evaluate everything on the calling thread.
    #[default]
    Sequential,

    /// Spread independent work over a pool of `degree` workers.
    ///
    /// A `degree` of zero means the degree of parallelism was never set,
    /// and the solve fails before its first iteration.
    Parallel { degree: usize },
}

/// The per-solve runtime for an [`Execution`] mode.
#[derive(Debug)]
pub enum Executor {
    /// Runs every task on the calling thread.
    Sequential,

    /// Runs tasks on a worker pool built for this solve.
    Parallel(WorkerPool),
}

impl Executor {
    /// Creates the runtime for `execution`, building a worker pool if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pool`] if the degree of parallelism is zero or the
    /// pool cannot be built.
    pub fn new(execution: Execution) -> Result<Self, Error> {
        match execution {
            Execution::Sequential => Ok(Self::Sequential),
            Execution::Parallel { degree } => Ok(Self::Parallel(WorkerPool::new(degree)?)),
        }
    }

    /// Evaluates `system` at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::DimensionMismatch`] if `x` has the wrong length.
    pub fn evaluate(
        &self,
        system: &EquationSystem,
        x: &DVector<f64>,
    ) -> Result<DVector<f64>, SystemError> {
        match self {
            Self::Sequential => system.compute(x),
            Self::Parallel(pool) => system.compute_parallel(x, pool),
        }
    }

    /// Runs `task(0)`, …, `task(n - 1)` and returns the results in index order.
    pub fn map_indexed<T, F>(&self, n: usize, task: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        match self {
            Self::Sequential => (0..n).map(task).collect(),
            Self::Parallel(pool) => pool.map_indexed(n, task),
        }
    }
}
