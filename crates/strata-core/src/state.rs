//! One-dimensional lattice states.

use std::fmt;
use std::ops::Index;

use crate::alphabet::{Alphabet, Symbol};
use crate::error::StepError;

/// A lattice configuration: `len()` cells, each holding a [`Symbol`].
///
/// States are immutable snapshots. The stepper never edits a state in
/// place; it builds a new one from the previous.
///
/// # Examples
///
/// ```
/// use strata_core::State;
///
/// let s = State::from(vec![1, 0, 1, 1]);
/// assert_eq!(s.len(), 4);
/// assert_eq!(s[3], 1);
/// assert_eq!(s.to_string(), "1011");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State(Vec<Symbol>);

impl State {
    /// Wrap a cell vector.
    pub fn new(cells: Vec<Symbol>) -> Self {
        Self(cells)
    }

    /// A state with every cell set to `symbol`.
    pub fn uniform(len: usize, symbol: Symbol) -> Self {
        Self(vec![symbol; len])
    }

    /// All-zero state with `symbol` in the centre cell (`len / 2`).
    ///
    /// The usual single-seed starting condition for elementary automata.
    pub fn single_seed(len: usize, symbol: Symbol) -> Self {
        let mut cells = vec![0; len];
        if let Some(mid) = cells.get_mut(len / 2) {
            *mid = symbol;
        }
        Self(cells)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the state has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cells, left to right.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// Iterate over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }

    /// Unwrap into the cell vector.
    pub fn into_inner(self) -> Vec<Symbol> {
        self.0
    }

    /// Check that every cell belongs to `alphabet`.
    ///
    /// Returns [`StepError::InvalidSymbol`] for the first offending cell.
    pub fn validate(&self, alphabet: Alphabet) -> Result<(), StepError> {
        match self.0.iter().position(|&s| !alphabet.contains(s)) {
            Some(cell) => Err(StepError::InvalidSymbol {
                symbol: self.0[cell],
                cell,
            }),
            None => Ok(()),
        }
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }
}

impl From<Vec<Symbol>> for State {
    fn from(cells: Vec<Symbol>) -> Self {
        Self(cells)
    }
}

impl Index<usize> for State {
    type Output = Symbol;

    fn index(&self, i: usize) -> &Symbol {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.0 {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_seed_marks_centre() {
        assert_eq!(State::single_seed(5, 1).as_slice(), &[0, 0, 1, 0, 0]);
        assert_eq!(State::single_seed(4, 2).as_slice(), &[0, 0, 2, 0]);
        assert!(State::single_seed(0, 1).is_empty());
    }

    #[test]
    fn validate_reports_first_bad_cell() {
        let s = State::from(vec![0, 1, 2, 3]);
        assert_eq!(
            s.validate(Alphabet::Binary),
            Err(StepError::InvalidSymbol { symbol: 2, cell: 2 })
        );
        assert_eq!(
            s.validate(Alphabet::Ternary),
            Err(StepError::InvalidSymbol { symbol: 3, cell: 3 })
        );
        assert!(State::from(vec![0, 2, 1]).validate(Alphabet::Ternary).is_ok());
    }

    #[test]
    fn count_symbols() {
        let s = State::from(vec![1, 0, 1, 1]);
        assert_eq!(s.count(1), 3);
        assert_eq!(s.count(0), 1);
        assert_eq!(s.count(2), 0);
    }
}
