//! Reusable observers for nlsolve solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every method built on the nlsolve engine.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIterate`])
//!
//! # Observers
//!
//! - [`History`] records every iterate of a solve.
//! - [`TraceObserver`] re-emits every event through `tracing`.
//!
//! [`Observer`]: nlsolve_core::Observer
//! [`HasIterate`]: traits::HasIterate

pub mod traits;

mod history;
mod trace;

pub use history::History;
pub use trace::TraceObserver;
