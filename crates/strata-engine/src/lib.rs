//! Lattice stepper and simulation driver for Strata.
//!
//! Provides the [`Simulation`] that turns a [`SimConfig`] into a space-time
//! [`Field`](strata_core::Field): it builds the rule table once, draws or
//! accepts an initial state, applies the [`stepper`] for the configured
//! number of steps, and hands the result to a
//! [`FieldSink`](strata_core::FieldSink).
//!
//! Stepping runs on one thread or across a rayon pool; both produce the
//! same states.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod random;
pub mod simulation;
pub mod stepper;

pub use config::{ConfigError, SimConfig, MAX_FIELD_CELLS};
pub use metrics::RunMetrics;
pub use random::{random_state, ChaChaSource, RandomSource};
pub use simulation::{deliver, simulate, RunError, RunResult, Simulation};
pub use stepper::{step, step_parallel, step_with, StepMode};
