//! The lattice stepper: one application of a rule table to a state.
//!
//! Cell `i` of the next state is the table's output for the neighbourhood
//! of cell `i` in the previous state, read with periodic boundaries:
//!
//! - binary: `(s[i-1 mod L], s[i], s[i+1 mod L])`
//! - ternary: `(s[i-1 mod L], s[i])`
//!
//! Every output cell depends only on the previous state, so the map over
//! cells can run in parallel. [`step_parallel`] splits the output buffer
//! into disjoint chunks for rayon workers that all read the same previous
//! state; the call returns only once every chunk is written.

use rayon::prelude::*;
use strata_core::{Alphabet, Neighbourhood, NeighbourhoodCode, State, StepError, Symbol};
use strata_rule::RuleTable;

/// How the per-cell map of a step is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepMode {
    /// One thread, cells in order.
    #[default]
    Sequential,
    /// Rayon workers over disjoint chunks of the output.
    ///
    /// Lattices shorter than `min_cells` are stepped sequentially.
    Parallel {
        /// Smallest lattice worth splitting across workers.
        min_cells: usize,
    },
}

impl StepMode {
    /// Parallel with the default threshold of 4096 cells.
    pub const fn parallel() -> Self {
        Self::Parallel { min_cells: 4096 }
    }

    /// Whether a lattice of `len` cells would be split across workers.
    pub fn splits(&self, len: usize) -> bool {
        match *self {
            Self::Sequential => false,
            Self::Parallel { min_cells } => len >= min_cells.max(1),
        }
    }
}

/// Cells per rayon work item.
const CHUNK_CELLS: usize = 1024;

/// Packed neighbourhood of cell `i`. `prev` must be non-empty and
/// hold only symbols of `alphabet`.
#[inline]
fn code_at(prev: &[Symbol], i: usize, alphabet: Alphabet) -> NeighbourhoodCode {
    let len = prev.len();
    let left = u16::from(prev[(i + len - 1) % len]);
    let centre = u16::from(prev[i]);
    match alphabet {
        Alphabet::Binary => {
            let right = u16::from(prev[(i + 1) % len]);
            NeighbourhoodCode(left * 4 + centre * 2 + right)
        }
        Alphabet::Ternary => NeighbourhoodCode(left * 3 + centre),
    }
}

/// The neighbourhood tuple of cell `i`, for diagnostics.
fn neighbourhood_at(prev: &[Symbol], i: usize, alphabet: Alphabet) -> Neighbourhood {
    let len = prev.len();
    let left = prev[(i + len - 1) % len];
    let centre = prev[i];
    match alphabet {
        Alphabet::Binary => Neighbourhood::from([left, centre, prev[(i + 1) % len]]),
        Alphabet::Ternary => Neighbourhood::from([left, centre]),
    }
}

#[inline]
fn apply_cell(prev: &[Symbol], i: usize, table: &RuleTable) -> Result<Symbol, StepError> {
    let alphabet = table.alphabet();
    table
        .lookup(code_at(prev, i, alphabet))
        .ok_or_else(|| StepError::LookupMiss {
            neighbourhood: neighbourhood_at(prev, i, alphabet),
            cell: i,
        })
}

/// Produce the next state from `prev` on one thread.
///
/// # Errors
///
/// - [`StepError::InvalidSymbol`] if `prev` holds a symbol outside the
///   table's alphabet.
/// - [`StepError::LookupMiss`] if a neighbourhood has no table entry.
///
/// # Examples
///
/// ```
/// use strata_core::{Alphabet, State};
/// use strata_engine::stepper::step;
/// use strata_rule::RuleFamily;
///
/// let rule90 = RuleFamily::lexicographic(Alphabet::Binary).table(90).unwrap();
/// let next = step(&State::from(vec![0, 0, 1, 0, 0]), &rule90).unwrap();
/// assert_eq!(next.as_slice(), &[0, 1, 0, 1, 0]);
/// ```
pub fn step(prev: &State, table: &RuleTable) -> Result<State, StepError> {
    prev.validate(table.alphabet())?;
    let cells = prev.as_slice();
    let next = (0..cells.len())
        .map(|i| apply_cell(cells, i, table))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(State::new(next))
}

/// Produce the next state from `prev` using the current rayon pool.
///
/// Output is identical to [`step`].
///
/// # Errors
///
/// Same as [`step`]. If several cells miss, which one is reported is
/// unspecified.
pub fn step_parallel(prev: &State, table: &RuleTable) -> Result<State, StepError> {
    prev.validate(table.alphabet())?;
    let cells = prev.as_slice();
    let mut next = vec![0; cells.len()];
    next.par_chunks_mut(CHUNK_CELLS)
        .enumerate()
        .try_for_each(|(chunk, out)| {
            let base = chunk * CHUNK_CELLS;
            for (j, slot) in out.iter_mut().enumerate() {
                *slot = apply_cell(cells, base + j, table)?;
            }
            Ok::<(), StepError>(())
        })?;
    Ok(State::new(next))
}

/// Step with the strategy chosen by `mode`.
pub fn step_with(prev: &State, table: &RuleTable, mode: StepMode) -> Result<State, StepError> {
    if mode.splits(prev.len()) {
        step_parallel(prev, table)
    } else {
        step(prev, table)
    }
}
