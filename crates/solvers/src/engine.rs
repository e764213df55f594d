//! The shared iteration engine.
//!
//! A [`Solver`] owns the iteration loop, the convergence bookkeeping, and the
//! lifecycle [`Status`]. What happens inside one iteration is delegated to a
//! [`Method`], so Newton, modified Newton, and simple iteration all run on the
//! same engine.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted → InProcess → Completed
//!                        ↘ CompletedWithError
//! ```
//!
//! Each call to [`Solver::solve`] starts a fresh lifecycle, so a solver can be
//! reused for several solves.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every completed iteration, carrying
//! the new iterate and its norm. Observers only watch: nothing they do can
//! change the iterate or end the solve.

mod config;
mod criterion;
mod event;
mod solution;


pub use config::Config;
pub use criterion::{Criterion, norma};
pub use event::Event;
pub use solution::{Solution, Status};

use nalgebra::DVector;
use nlsolve_core::{EquationSystem, Observer, SystemError};
use tracing::{debug, trace, warn};

use crate::Error;

/// The update rule of an iterative method.
///
/// `prepare` runs once per solve and builds whatever the method caches for
/// the duration of that solve (worker pools, a frozen Jacobian inverse).
/// `advance` then maps `x_k` to `x_{k+1}` and is called once per iteration.
pub trait Method {
    /// Per-solve state built by [`prepare`](Method::prepare).
    type Cache;

    /// Short method name used in log output.
    fn name(&self) -> &'static str;

    /// Convergence criterion used by the engine for this method.
    fn criterion(&self) -> Criterion;

    /// Validates the inputs and builds the per-solve cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the system or configuration cannot be solved by
    /// this method.
    fn prepare(&self, system: &EquationSystem, initial: &DVector<f64>)
    -> Result<Self::Cache, Error>;

    /// Computes the next iterate from `x`.
    ///
    /// `iter` is the 1-based number of the iteration being computed.
    ///
    /// # Errors
    ///
    /// Returns an error if the iterate cannot be computed.
    fn advance(
        &self,
        system: &EquationSystem,
        cache: &Self::Cache,
        x: &DVector<f64>,
        iter: usize,
    ) -> Result<DVector<f64>, Error>;
}

/// Iterative solver for a system of equations, generic over its [`Method`].
#[derive(Debug)]
pub struct Solver<M> {
    method: M,
    config: Config,
    status: Status,
    iters: usize,
    error: Option<String>,
}

impl<M: Method> Solver<M> {
    /// Creates a solver that has not started yet.
    #[must_use]
    pub fn new(method: M, config: Config) -> Self {
        Self {
            method,
            config,
            status: Status::NotStarted,
            iters: 0,
            error: None,
        }
    }

    /// Solves `system` starting from `initial`.
    ///
    /// The observer sees an [`Event`] after every iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` does not match the system size, if the
    /// method rejects the system or configuration, if an iteration fails, or
    /// if the iteration budget runs out before convergence. In every case the
    /// solver ends in [`Status::CompletedWithError`] with the error message
    /// available through [`Solver::error`].
    pub fn solve<Obs>(
        &mut self,
        system: &EquationSystem,
        initial: DVector<f64>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>>,
    {
        self.status = Status::InProcess;
        self.iters = 0;
        self.error = None;

        debug!(
            method = self.method.name(),
            n = system.len(),
            max_iters = self.config.max_iters(),
            error_rate = self.config.error_rate(),
            "starting solve"
        );

        match self.iterate(system, initial, &mut observer) {
            Ok(solution) => {
                debug!(
                    method = self.method.name(),
                    iters = solution.iters,
                    norm = solution.norm,
                    "converged"
                );
                self.status = Status::Completed;
                Ok(solution)
            }
            Err(error) => {
                warn!(
                    method = self.method.name(),
                    iters = self.iters,
                    %error,
                    "solve failed"
                );
                self.status = Status::CompletedWithError;
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Solves `system` without observation.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve`].
    pub fn solve_unobserved(
        &mut self,
        system: &EquationSystem,
        initial: DVector<f64>,
    ) -> Result<Solution, Error> {
        self.solve(system, initial, ())
    }

    /// Returns the lifecycle status of the most recent solve.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the message of the error that ended the most recent solve.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the number of iterations completed by the most recent solve.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }

    /// Returns the method driving this solver.
    #[must_use]
    pub fn method(&self) -> &M {
        &self.method
    }

    /// Returns the iteration limits.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn iterate<Obs>(
        &mut self,
        system: &EquationSystem,
        initial: DVector<f64>,
        observer: &mut Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>>,
    {
        if initial.len() != system.len() {
            return Err(SystemError::DimensionMismatch {
                expected: system.len(),
                actual: initial.len(),
            }
            .into());
        }

        let cache = self.method.prepare(system, &initial)?;
        let criterion = self.method.criterion();
        let error_rate = self.config.error_rate();

        let mut x = initial;
        let mut norm = criterion.measure(&x);

        for iter in 1..=self.config.max_iters() {
            let next = self.method.advance(system, &cache, &x, iter)?;
            let next_norm = criterion.measure(&next);
            let converged = criterion.is_met(norm, next_norm, error_rate);
            let delta = (next_norm - norm).abs();

            x = next;
            norm = next_norm;
            self.iters = iter;

            trace!(iter, norm, delta, "iteration");

            observer.observe(&Event {
                iter,
                x: &x,
                norm,
                delta,
            });

            if converged {
                return Ok(Solution { x, iters: iter, norm });
            }
        }

        Err(Error::MaxIters {
            max_iters: self.config.max_iters(),
        })
    }
}
