//! Error types for the Strata simulator.
//!
//! Split by subsystem: [`RuleError`] covers rule decoding and table
//! construction, [`StepError`] covers lattice stepping, [`SinkError`]
//! covers output sinks. Rule and step variants are precondition failures
//! and carry the offending value so the diagnostic can name it.

use std::error::Error;
use std::fmt;

use crate::alphabet::Symbol;
use crate::neighbourhood::Neighbourhood;

/// Errors from rule decoding and rule-table construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The rule number exceeds the largest rule for the alphabet.
    OutOfRange {
        /// The rejected rule number.
        rule: u32,
        /// The largest valid rule number for the alphabet.
        max: u32,
    },
    /// The alphabet size is neither 2 nor 3.
    InvalidAlphabet {
        /// The rejected size.
        size: u32,
    },
    /// The digit sequence and the neighbourhood enumeration differ in
    /// length, so some neighbourhoods would be left unmapped.
    RuleTooLarge {
        /// Number of rule digits supplied.
        digits: usize,
        /// Number of neighbourhoods in the enumeration.
        neighbourhoods: usize,
    },
    /// The neighbourhood enumeration is malformed (wrong arity, symbol
    /// outside the alphabet, duplicate entry, or wrong count).
    InvalidNeighbourhoods {
        /// Description of the problem.
        reason: String,
    },
    /// A digit is not valid in the numeral base.
    InvalidDigit {
        /// The rejected digit.
        digit: Symbol,
        /// The numeral base.
        base: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { rule, max } => {
                write!(f, "rule number {rule} out of range [0, {max}]")
            }
            Self::InvalidAlphabet { size } => {
                write!(f, "alphabet size {size} is not supported (expected 2 or 3)")
            }
            Self::RuleTooLarge {
                digits,
                neighbourhoods,
            } => write!(
                f,
                "rule too large: {digits} digits for {neighbourhoods} neighbourhoods"
            ),
            Self::InvalidNeighbourhoods { reason } => {
                write!(f, "invalid neighbourhood enumeration: {reason}")
            }
            Self::InvalidDigit { digit, base } => {
                write!(f, "digit {digit} is not valid in base {base}")
            }
        }
    }
}

impl Error for RuleError {}

/// Errors from applying a rule table to a lattice state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A neighbourhood formed during stepping has no entry in the table.
    LookupMiss {
        /// The neighbourhood that was looked up.
        neighbourhood: Neighbourhood,
        /// Index of the cell whose neighbourhood it is.
        cell: usize,
    },
    /// A state does not have the lattice length of the run.
    LengthMismatch {
        /// Lattice length of the run.
        expected: usize,
        /// Length of the offending state.
        actual: usize,
    },
    /// A state holds a symbol outside the alphabet.
    InvalidSymbol {
        /// The offending symbol.
        symbol: Symbol,
        /// Index of the cell holding it.
        cell: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookupMiss {
                neighbourhood,
                cell,
            } => write!(
                f,
                "neighbourhood {neighbourhood} at cell {cell} missing from rule table"
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "state length {actual} does not match lattice length {expected}")
            }
            Self::InvalidSymbol { symbol, cell } => {
                write!(f, "symbol {symbol} at cell {cell} is outside the alphabet")
            }
        }
    }
}

impl Error for StepError {}

/// Errors from a [`FieldSink`](crate::FieldSink).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// The rendered output would exceed the sink's size limit.
    TooLarge {
        /// Requested output width.
        width: u64,
        /// Requested output height.
        height: u64,
    },
    /// Encoding the output failed.
    Encode {
        /// Description of the failure.
        reason: String,
    },
    /// Writing the output failed.
    Io {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { width, height } => {
                write!(f, "output of {width}x{height} exceeds the sink size limit")
            }
            Self::Encode { reason } => write!(f, "encode failed: {reason}"),
            Self::Io { reason } => write!(f, "write failed: {reason}"),
        }
    }
}

impl Error for SinkError {}
