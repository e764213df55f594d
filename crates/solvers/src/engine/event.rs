use nalgebra::DVector;

/// Event emitted once per completed iteration.
///
/// Events are advisory: observers cannot alter the iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The iterate produced by this iteration.
    pub x: &'a DVector<f64>,

    /// Norm of `x` as measured by the method's convergence criterion.
    pub norm: f64,

    /// Absolute change in norm from the previous iterate.
    pub delta: f64,
}
