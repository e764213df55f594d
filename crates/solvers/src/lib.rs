//! Iterative solvers for systems of nonlinear equations.
//!
//! Every solver runs on the shared [`engine`]: a [`Solver`](engine::Solver)
//! owns the iteration loop and lifecycle, and a [`Method`](engine::Method)
//! supplies the update rule.
//!
//! # Methods
//!
//! - [`newton`]: Newton's method with a finite-difference Jacobian, either
//!   rebuilt every iteration or frozen at the initial point
//! - [`simple_iteration`]: fixed-point iteration `x = G(x)` for an
//!   equivalent system
//!
//! Each method runs sequentially or on a worker pool, selected with
//! [`Execution`].

mod error;
mod execution;

pub mod engine;
pub mod newton;
pub mod simple_iteration;

pub use error::{ConfigError, Error};
pub use execution::{Execution, Executor};
