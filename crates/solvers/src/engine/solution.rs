use nalgebra::DVector;

/// Lifecycle of a [`Solver`](super::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No solve has been attempted yet.
    NotStarted,

    /// A solve is running.
    InProcess,

    /// The last solve satisfied the convergence criterion.
    Completed,

    /// The last solve ended with an error; see [`Solver::error`](super::Solver::error).
    CompletedWithError,
}

impl Status {
    /// Returns true for `Completed` and `CompletedWithError`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::CompletedWithError)
    }
}

/// The result of a converged solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The final iterate.
    pub x: DVector<f64>,

    /// Number of iterations performed.
    pub iters: usize,

    /// Norm of `x` as measured by the method's convergence criterion.
    pub norm: f64,
}
