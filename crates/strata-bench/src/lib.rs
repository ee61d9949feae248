//! Benchmark profiles and utilities for the Strata simulator.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: rule 30 on 10K cells for 100 steps
//! - [`stress_profile`]: rule 110 on 100K cells, stepped in parallel
//! - [`ternary_profile`]: a ternary rule on 10K cells
//! - [`bench_state`]: a reproducible random state of any length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{Alphabet, State};
use strata_engine::{random_state, ChaChaSource, SimConfig, StepMode};

/// Build a reference benchmark profile: rule 30, 10K cells, 100 steps.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        length: 10_000,
        steps: 100,
        alphabet_size: 2,
        neighbourhoods: None,
        rule: 30,
        seed: Some(seed),
        step_mode: StepMode::Sequential,
        threads: None,
    }
}

/// Build a stress benchmark profile: rule 110, 100K cells, 100 steps.
///
/// Steps are split across rayon's global pool.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        length: 100_000,
        rule: 110,
        step_mode: StepMode::parallel(),
        ..reference_profile(seed)
    }
}

/// Build a ternary benchmark profile: rule 12345, 10K cells, 100 steps.
pub fn ternary_profile(seed: u64) -> SimConfig {
    SimConfig {
        alphabet_size: 3,
        rule: 12_345,
        ..reference_profile(seed)
    }
}

/// Reproducible random state of `len` cells.
pub fn bench_state(len: usize, alphabet: Alphabet, seed: u64) -> State {
    random_state(len, alphabet, &mut ChaChaSource::from_seed(seed))
}
