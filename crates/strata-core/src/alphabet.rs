//! Cell alphabets and the [`Symbol`] type.

use std::fmt;

use crate::error::RuleError;

/// A single cell value. Always in `[0, alphabet.size())`.
pub type Symbol = u8;

/// The set of symbols a cell may hold, together with the neighbourhood
/// shape that goes with it.
///
/// Each variant fixes three numbers that the rest of the simulator
/// depends on:
///
/// | Variant   | size | arity | width (`size^arity`) | max rule     |
/// |-----------|------|-------|----------------------|--------------|
/// | `Binary`  | 2    | 3     | 8                    | 255          |
/// | `Ternary` | 3    | 2     | 9                    | 19682        |
///
/// `width` is both the number of distinct neighbourhoods and the number
/// of digits a rule number decodes to.
///
/// # Examples
///
/// ```
/// use strata_core::Alphabet;
///
/// let ab = Alphabet::from_size(3).unwrap();
/// assert_eq!(ab, Alphabet::Ternary);
/// assert_eq!(ab.width(), 9);
/// assert_eq!(ab.max_rule(), 19682);
/// assert!(Alphabet::from_size(4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// Symbols `{0, 1}`; neighbourhood `(left, self, right)`.
    Binary,
    /// Symbols `{0, 1, 2}`; neighbourhood `(left, self)`.
    Ternary,
}

impl Alphabet {
    /// Resolve an alphabet from its symbol count.
    ///
    /// Returns [`RuleError::InvalidAlphabet`] for anything other than 2 or 3.
    pub fn from_size(size: u32) -> Result<Self, RuleError> {
        match size {
            2 => Ok(Self::Binary),
            3 => Ok(Self::Ternary),
            _ => Err(RuleError::InvalidAlphabet { size }),
        }
    }

    /// Number of distinct symbols (also the numeral base).
    pub const fn size(self) -> u8 {
        match self {
            Self::Binary => 2,
            Self::Ternary => 3,
        }
    }

    /// Number of cells in a neighbourhood.
    pub const fn arity(self) -> usize {
        match self {
            Self::Binary => 3,
            Self::Ternary => 2,
        }
    }

    /// Number of distinct neighbourhoods, equal to the rule digit count.
    pub const fn width(self) -> usize {
        match self {
            Self::Binary => 8,
            Self::Ternary => 9,
        }
    }

    /// Largest valid rule number: `size^width - 1`.
    pub const fn max_rule(self) -> u32 {
        match self {
            Self::Binary => 255,
            Self::Ternary => 19_682,
        }
    }

    /// Number of distinct rules (`max_rule() + 1`).
    pub const fn rule_count(self) -> u32 {
        self.max_rule() + 1
    }

    /// Whether `symbol` belongs to this alphabet.
    pub const fn contains(self, symbol: Symbol) -> bool {
        symbol < self.size()
    }

    /// The largest symbol, `size - 1`.
    pub const fn max_symbol(self) -> Symbol {
        self.size() - 1
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Ternary => write!(f, "ternary"),
        }
    }
}
