//! Core types for the Strata cellular automaton simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Strata workspace:
//! alphabets, neighbourhoods, lattice states, the space-time field,
//! tick identifiers, error types, and the [`FieldSink`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod error;
pub mod field;
pub mod id;
pub mod neighbourhood;
pub mod state;
pub mod traits;

pub use alphabet::{Alphabet, Symbol};
pub use error::{RuleError, SinkError, StepError};
pub use field::{Field, MAX_RESERVED_ROWS};
pub use id::TickId;
pub use neighbourhood::{Neighbourhood, NeighbourhoodCode};
pub use state::State;
pub use traits::FieldSink;
