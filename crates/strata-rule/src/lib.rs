//! Rule-number decoding and rule tables for Strata.
//!
//! A rule number names one deterministic local update function. This
//! crate turns it into something the stepper can apply:
//!
//! 1. [`numeral::decode`] writes the rule number as a fixed-width digit
//!    sequence, least significant digit first.
//! 2. [`RuleTable::build`] pairs the i-th neighbourhood of an enumeration
//!    with the i-th digit.
//! 3. [`RuleFamily`] bundles an alphabet with a validated enumeration so
//!    tables for many rule numbers can be built from one setup.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod family;
pub mod numeral;
pub mod table;

pub use family::RuleFamily;
pub use numeral::{decode, encode, Digits};
pub use table::{validate_enumeration, RuleTable};
