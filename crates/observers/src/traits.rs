//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event types, so one observer
//! works with Newton, modified Newton, and simple iteration alike.
//!
//! # Example
//!
//! ```rust
//! use nlsolve_core::Observer;
//! use nlsolve_observers::traits::HasIterate;
//!
//! /// Tracks the largest norm seen during a solve.
//! #[derive(Default)]
//! struct PeakNorm(f64);
//!
//! impl<E: HasIterate> Observer<E> for PeakNorm {
//!     fn observe(&mut self, event: &E) {
//!         self.0 = self.0.max(event.norm());
//!     }
//! }
//! ```

use nalgebra::DVector;
use nlsolve_solvers::engine;

/// An event that carries the iterate produced by one iteration.
pub trait HasIterate {
    /// Returns the 1-based iteration number.
    fn iter(&self) -> usize;

    /// Returns the iterate.
    fn x(&self) -> &DVector<f64>;

    /// Returns the norm the solver's convergence criterion measured for the
    /// iterate.
    fn norm(&self) -> f64;
}

impl HasIterate for engine::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> &DVector<f64> {
        self.x
    }

    fn norm(&self) -> f64 {
        self.norm
    }
}
