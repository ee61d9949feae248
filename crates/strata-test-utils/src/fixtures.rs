//! Known rules and states for scenario tests.
//!
//! - [`elementary`] / [`ternary`]: rule tables over the lexicographic
//!   enumeration.
//! - [`left_copy_ternary_rule`]: the ternary rule whose output is the left
//!   neighbour, so each step rotates the lattice one cell to the right.
//! - [`rule_30_seed_rows`]: the first rows of rule 30 from a single seed.

use strata_core::{Alphabet, State};
use strata_rule::{encode, RuleFamily, RuleTable};

/// Rule 90: next cell is `left XOR right`.
pub const RULE_90: u32 = 90;

/// Rule 184: traffic flow, conserves the number of 1s.
pub const RULE_184: u32 = 184;

/// Rule 204: identity.
pub const RULE_IDENTITY: u32 = 204;

/// Lexicographic binary table for `rule`. Panics if out of range.
pub fn elementary(rule: u32) -> RuleTable {
    RuleFamily::lexicographic(Alphabet::Binary)
        .table(rule)
        .unwrap_or_else(|e| panic!("elementary rule {rule}: {e}"))
}

/// Lexicographic ternary table for `rule`. Panics if out of range.
pub fn ternary(rule: u32) -> RuleTable {
    RuleFamily::lexicographic(Alphabet::Ternary)
        .table(rule)
        .unwrap_or_else(|e| panic!("ternary rule {rule}: {e}"))
}

/// Ternary rule number whose output is the left cell of `(left, self)`.
pub fn left_copy_ternary_rule() -> u32 {
    let digits = [0, 0, 0, 1, 1, 1, 2, 2, 2];
    encode(&digits, Alphabet::Ternary).unwrap_or_else(|e| panic!("left-copy rule: {e}"))
}

/// Rows 0..=3 of rule 30 on 9 cells starting from a single 1 at cell 4.
pub fn rule_30_seed_rows() -> [State; 4] {
    [
        State::from(vec![0, 0, 0, 0, 1, 0, 0, 0, 0]),
        State::from(vec![0, 0, 0, 1, 1, 1, 0, 0, 0]),
        State::from(vec![0, 0, 1, 1, 0, 0, 1, 0, 0]),
        State::from(vec![0, 1, 1, 0, 1, 1, 1, 1, 0]),
    ]
}
