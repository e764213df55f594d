use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder, prelude::*};
use thiserror::Error;

/// Errors that can occur when building a [`WorkerPool`].
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("degree of parallelism must be set to at least 1")]
    ZeroDegree,

    #[error("failed to build worker pool")]
    Build(#[from] ThreadPoolBuildError),
}

/// A fixed-size pool of workers for index-ordered fan-out.
///
/// Each pool owns its own threads, so two solves can run with different
/// degrees of parallelism at the same time.
pub struct WorkerPool {
    pool: ThreadPool,
    degree: usize,
}

impl WorkerPool {
    /// Builds a pool with exactly `degree` worker threads.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroDegree`] if `degree` is zero, or
    /// [`PoolError::Build`] if the threads cannot be spawned.
    pub fn new(degree: usize) -> Result<Self, PoolError> {
        if degree == 0 {
            return Err(PoolError::ZeroDegree);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(degree)
            .thread_name(|index| format!("nlsolve-worker-{index}"))
            .build()?;

        Ok(Self { pool, degree })
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Runs `task(0)`, …, `task(n - 1)` on the pool's workers.
    ///
    /// Element `i` of the returned vector is always `task(i)`, whatever
    /// order the tasks finish in.
    pub fn map_indexed<T, F>(&self, n: usize, task: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        self.pool.install(|| (0..n).into_par_iter().map(&task).collect())
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("degree", &self.degree)
            .finish_non_exhaustive()
    }
}
