//! Core traits and types for nlsolve.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`EquationSystem`]: an ordered set of scalar equations over `ℝⁿ`,
//!   evaluated sequentially or across a [`WorkerPool`]
//! - [`WorkerPool`]: a fixed-size pool that fans out independent tasks and
//!   collects their results in index order
//! - [`Observer`]: watches solver events without influencing the solve

mod observer;
mod pool;
mod system;

pub use observer::Observer;
pub use pool::{PoolError, WorkerPool};
pub use system::{Equation, EquationSystem, Form, SystemError};
