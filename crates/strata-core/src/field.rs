//! The space-time [`Field`]: one [`State`] per tick.

use smallvec::SmallVec;

use crate::alphabet::{Alphabet, Symbol};
use crate::error::StepError;
use crate::id::TickId;
use crate::state::State;

/// Most rows [`Field::with_capacity`] reserves up front; further rows
/// grow the buffer on demand.
pub const MAX_RESERVED_ROWS: usize = 4096;

/// The full evolution of a run: row `t` is the state at tick `t`.
///
/// A field is never empty: it is created from the initial state and grows
/// by one row per step. Every row has the same length, fixed by the
/// initial state, and every symbol belongs to [`alphabet()`](Self::alphabet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    alphabet: Alphabet,
    width: usize,
    rows: Vec<State>,
}

impl Field {
    /// Start a field from its initial state.
    ///
    /// Returns [`StepError::InvalidSymbol`] if the state holds a symbol
    /// outside `alphabet`.
    pub fn new(alphabet: Alphabet, initial: State) -> Result<Self, StepError> {
        initial.validate(alphabet)?;
        Ok(Self {
            alphabet,
            width: initial.len(),
            rows: vec![initial],
        })
    }

    /// Start a field with room for `steps` further rows, capped at
    /// [`MAX_RESERVED_ROWS`].
    pub fn with_capacity(
        alphabet: Alphabet,
        initial: State,
        steps: usize,
    ) -> Result<Self, StepError> {
        let mut field = Self::new(alphabet, initial)?;
        field.rows.reserve(steps.min(MAX_RESERVED_ROWS));
        Ok(field)
    }

    /// Append the next state.
    ///
    /// Returns [`StepError::LengthMismatch`] if its length differs from the
    /// field width.
    pub fn push(&mut self, state: State) -> Result<(), StepError> {
        if state.len() != self.width {
            return Err(StepError::LengthMismatch {
                expected: self.width,
                actual: state.len(),
            });
        }
        self.rows.push(state);
        Ok(())
    }

    /// Alphabet of every cell.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Lattice length (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, i.e. steps taken plus one.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Tick of the most recent row.
    pub fn last_tick(&self) -> TickId {
        TickId(self.rows.len() as u64 - 1)
    }

    /// All rows in tick order.
    pub fn rows(&self) -> &[State] {
        &self.rows
    }

    /// Row at `tick`, if recorded.
    pub fn row(&self, tick: TickId) -> Option<&State> {
        self.rows.get(tick.0 as usize)
    }

    /// The initial state.
    pub fn first(&self) -> &State {
        &self.rows[0]
    }

    /// The most recent state.
    pub fn last(&self) -> &State {
        // `rows` is non-empty by construction.
        &self.rows[self.rows.len() - 1]
    }

    /// Cell value at (`tick`, `cell`).
    pub fn get(&self, tick: TickId, cell: usize) -> Option<Symbol> {
        self.row(tick).and_then(|r| r.as_slice().get(cell).copied())
    }

    /// Per-symbol cell counts for the row at `tick`, indexed by symbol.
    pub fn symbol_counts(&self, tick: TickId) -> Option<SmallVec<[usize; 3]>> {
        let row = self.row(tick)?;
        let mut counts: SmallVec<[usize; 3]> =
            SmallVec::from_elem(0, self.alphabet.size() as usize);
        for &s in row {
            counts[s as usize] += 1;
        }
        Some(counts)
    }

    /// Unwrap into the row vector.
    pub fn into_rows(self) -> Vec<State> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Field {
        let mut f = Field::new(Alphabet::Ternary, State::from(vec![0, 1, 2])).unwrap();
        f.push(State::from(vec![2, 2, 1])).unwrap();
        f
    }

    #[test]
    fn dimensions_track_pushes() {
        let f = sample();
        assert_eq!(f.width(), 3);
        assert_eq!(f.height(), 2);
        assert_eq!(f.last_tick(), TickId(1));
        assert_eq!(f.first().as_slice(), &[0, 1, 2]);
        assert_eq!(f.last().as_slice(), &[2, 2, 1]);
    }

    #[test]
    fn huge_step_count_does_not_over_reserve() {
        let f = Field::with_capacity(Alphabet::Binary, State::from(vec![1]), usize::MAX).unwrap();
        assert_eq!(f.height(), 1);
        assert!(f.rows.capacity() < 2 * MAX_RESERVED_ROWS);
    }

    #[test]
    fn push_rejects_wrong_length() {
        let mut f = sample();
        assert_eq!(
            f.push(State::from(vec![0, 0])),
            Err(StepError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(f.height(), 2);
    }

    #[test]
    fn new_rejects_foreign_symbols() {
        let err = Field::new(Alphabet::Binary, State::from(vec![0, 2])).unwrap_err();
        assert_eq!(err, StepError::InvalidSymbol { symbol: 2, cell: 1 });
    }

    #[test]
    fn get_and_counts() {
        let f = sample();
        assert_eq!(f.get(TickId(1), 2), Some(1));
        assert_eq!(f.get(TickId(2), 0), None);
        assert_eq!(f.get(TickId(0), 9), None);
        assert_eq!(f.symbol_counts(TickId(1)).unwrap().as_slice(), &[0, 1, 2]);
        assert!(f.symbol_counts(TickId(5)).is_none());
    }
}
