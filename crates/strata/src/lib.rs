//! Strata: a one-dimensional cellular automaton simulator.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strata sub-crates. For most users, adding `strata` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // Elementary rule 30 on 32 cells, 16 steps, reproducible seed.
//! let sim = Simulation::new(SimConfig {
//!     length: 32,
//!     steps: 16,
//!     rule: 30,
//!     seed: Some(7),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let mut out = TextSink::new(Vec::new(), Glyphs::BLOCKS);
//! let result = sim.run_into(&mut out).unwrap();
//! assert_eq!(result.field.height(), 17);
//!
//! // A ternary rule from a single seed.
//! let sim = Simulation::new(SimConfig {
//!     length: 9,
//!     steps: 4,
//!     alphabet_size: 3,
//!     rule: 7_000,
//!     ..Default::default()
//! })
//! .unwrap();
//! let result = sim.run_from(State::single_seed(9, 2)).unwrap();
//! assert_eq!(result.field.alphabet(), Alphabet::Ternary);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Alphabets, neighbourhoods, states, fields, errors |
//! | [`rule`] | `strata-rule` | Numeral encoding, rule tables, rule families |
//! | [`engine`] | `strata-engine` | Stepper, configuration, simulation driver |
//! | [`render`] | `strata-render` | Grayscale image and text sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and the sink trait (`strata-core`).
pub use strata_core as types;

/// Rule numbers, tables, and families (`strata-rule`).
///
/// [`rule::decode`] turns a rule number into its digits;
/// [`rule::RuleTable`] maps neighbourhoods to next-state symbols.
pub use strata_rule as rule;

/// The lattice stepper and simulation driver (`strata-engine`).
///
/// [`engine::Simulation`] runs a configured automaton;
/// [`engine::stepper`] exposes single steps.
pub use strata_engine as engine;

/// Renderers (`strata-render`).
///
/// [`render::PngSink`] writes grayscale images, [`render::TextSink`]
/// writes glyph lines.
pub use strata_render as render;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use strata_core::{Alphabet, Field, FieldSink, Neighbourhood, State, Symbol, TickId};

    // Errors
    pub use strata_core::{RuleError, SinkError, StepError};

    // Rules
    pub use strata_rule::{decode, encode, RuleFamily, RuleTable};

    // Engine
    pub use strata_engine::{
        ConfigError, RunError, RunMetrics, RunResult, SimConfig, Simulation, StepMode,
    };

    // Rendering
    pub use strata_render::{Glyphs, GrayscaleRenderer, PngSink, TextSink};
}
