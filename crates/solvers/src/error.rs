use nlsolve_core::{PoolError, SystemError};
use thiserror::Error;

/// Errors that end a solve.
///
/// Every variant is fatal for the current solve: the solver records it,
/// marks itself [`Status::CompletedWithError`], and returns it unchanged.
///
/// [`Status::CompletedWithError`]: crate::engine::Status::CompletedWithError
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid equation system input: {0}")]
    System(#[from] SystemError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("simple iteration requires an equivalent fixed-point system")]
    NotFixedPoint,

    #[error("jacobian matrix is singular at iteration {iter}")]
    SingularJacobian { iter: usize },

    #[error("inverse jacobian matrix must be computed before iterating")]
    MissingJacobian,

    #[error("the maximum number of iterations ({max_iters}) is exceeded")]
    MaxIters { max_iters: usize },
}

/// Errors that can occur when validating solver configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("error_rate must be finite and non-negative")]
    ErrorRate,

    #[error("finite-difference step must be finite and positive")]
    Step,
}
