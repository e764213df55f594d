use nalgebra::DVector;
use nlsolve_core::Observer;

use crate::traits::HasIterate;

/// An observer that records the iterate of every event.
///
/// Pass `&mut History` as the solver observer to keep the recording after
/// the solve completes.
///
/// # Example
///
/// ```rust
/// use nalgebra::dvector;
/// use nlsolve_core::EquationSystem;
/// use nlsolve_observers::History;
/// use nlsolve_solvers::{
///     engine::{Config, Solver},
///     simple_iteration::SimpleIteration,
/// };
///
/// // x = x / 2 + 1, with fixed point 2.
/// let system = EquationSystem::fixed_point(vec![Box::new(|x: &[f64]| 0.5 * x[0] + 1.0)]);
/// let mut solver = Solver::new(SimpleIteration::new(), Config::simple_iteration());
///
/// let mut history = History::new();
/// let solution = solver.solve(&system, dvector![0.0], &mut history)?;
///
/// assert_eq!(history.len(), solution.iters);
/// assert_eq!(history.snapshots()[0], (1, dvector![1.0]));
/// assert_eq!(history.last(), Some(&solution.x));
/// # Ok::<(), nlsolve_solvers::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    snapshots: Vec<(usize, DVector<f64>)>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(iter, x)` pairs in the order they were observed.
    #[must_use]
    pub fn snapshots(&self) -> &[(usize, DVector<f64>)] {
        &self.snapshots
    }

    /// Returns the most recently recorded iterate.
    #[must_use]
    pub fn last(&self) -> Option<&DVector<f64>> {
        self.snapshots.last().map(|(_, x)| x)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl<E: HasIterate> Observer<E> for History {
    fn observe(&mut self, event: &E) {
        self.snapshots.push((event.iter(), event.x().clone()));
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the recording can be read after the solve completes.
impl<E: HasIterate> Observer<E> for &mut History {
    fn observe(&mut self, event: &E) {
        (*self).observe(event);
    }
}
