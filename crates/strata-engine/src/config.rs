//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks every precondition up front
//! so that failures surface before any state is generated.

use std::error::Error;
use std::fmt;

use strata_core::{Neighbourhood, RuleError};
use strata_rule::{RuleFamily, RuleTable};

use crate::stepper::StepMode;

/// Largest field a run may produce, in cells (`length * (steps + 1)`).
///
/// One byte per cell, so this bounds the field at 4 GiB.
pub const MAX_FIELD_CELLS: u64 = 1 << 32;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SimConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Alphabet, enumeration, or rule number is invalid.
    Rule(RuleError),
    /// Lattice length is zero.
    EmptyLattice,
    /// `length * (steps + 1)` overflows or exceeds [`MAX_FIELD_CELLS`].
    FieldTooLarge {
        /// Requested lattice length.
        length: usize,
        /// Requested step count.
        steps: usize,
    },
    /// A dedicated worker pool could not be built.
    ThreadPool {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(e) => write!(f, "rule: {e}"),
            Self::EmptyLattice => write!(f, "lattice length must be at least 1"),
            Self::FieldTooLarge { length, steps } => write!(
                f,
                "{length} cells over {steps} steps exceeds the field limit of {MAX_FIELD_CELLS} cells"
            ),
            Self::ThreadPool { reason } => write!(f, "thread pool: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of cells in the lattice. Minimum: 1.
    pub length: usize,
    /// Number of steps after the initial state. The field has `steps + 1` rows.
    pub steps: usize,
    /// Symbols per cell: 2 or 3.
    pub alphabet_size: u32,
    /// Neighbourhood enumeration in digit order. `None` = lexicographic.
    pub neighbourhoods: Option<Vec<Neighbourhood>>,
    /// Rule number, within `[0, size^width - 1]`.
    pub rule: u32,
    /// Seed for the initial state. `None` = draw one from entropy.
    pub seed: Option<u64>,
    /// Sequential or parallel stepping.
    pub step_mode: StepMode,
    /// Worker threads for parallel stepping. `None` = rayon's global pool.
    /// Must be `None` with [`StepMode::Sequential`].
    pub threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            length: 100,
            steps: 100,
            alphabet_size: 2,
            neighbourhoods: None,
            rule: 30,
            seed: None,
            step_mode: StepMode::Sequential,
            threads: None,
        }
    }
}

impl SimConfig {
    /// Validate all preconditions.
    ///
    /// This is a pure validation pass; [`Simulation::new`](crate::Simulation::new)
    /// calls [`resolve()`](Self::resolve) to obtain the rule table as well.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validate and build the rule family and rule table.
    pub fn resolve(&self) -> Result<(RuleFamily, RuleTable), ConfigError> {
        // 1. Alphabet and enumeration.
        let family = RuleFamily::from_size(self.alphabet_size, self.neighbourhoods.clone())?;
        // 2. Rule number (decode + table).
        let table = family.table(self.rule)?;
        // 3. Lattice must have at least one cell.
        if self.length == 0 {
            return Err(ConfigError::EmptyLattice);
        }
        // 4. The whole field must fit the cell budget.
        let cells = (self.steps as u64)
            .checked_add(1)
            .and_then(|rows| rows.checked_mul(self.length as u64));
        if !matches!(cells, Some(n) if n <= MAX_FIELD_CELLS) {
            return Err(ConfigError::FieldTooLarge {
                length: self.length,
                steps: self.steps,
            });
        }
        // 5. Thread count needs parallel stepping and must be positive.
        match (self.threads, self.step_mode) {
            (Some(_), StepMode::Sequential) => {
                return Err(ConfigError::ThreadPool {
                    reason: "thread count requires parallel stepping".into(),
                });
            }
            (Some(0), _) => {
                return Err(ConfigError::ThreadPool {
                    reason: "thread count must be at least 1".into(),
                });
            }
            _ => {}
        }
        Ok((family, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Alphabet;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_alphabet() {
        let c = SimConfig {
            alphabet_size: 5,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::Rule(RuleError::InvalidAlphabet { size: 5 }))
        );
    }

    #[test]
    fn rejects_out_of_range_rule() {
        let c = SimConfig {
            rule: 256,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::Rule(RuleError::OutOfRange { rule: 256, max: 255 }))
        );

        let c = SimConfig {
            alphabet_size: 3,
            rule: 19_683,
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Rule(RuleError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn ternary_accepts_large_rule() {
        let c = SimConfig {
            alphabet_size: 3,
            rule: 19_682,
            ..Default::default()
        };
        let (family, table) = c.resolve().unwrap();
        assert_eq!(family.alphabet(), Alphabet::Ternary);
        assert_eq!(table.rule(), 19_682);
    }

    #[test]
    fn rejects_mismatched_enumeration() {
        let c = SimConfig {
            alphabet_size: 3,
            neighbourhoods: Some(Neighbourhood::lexicographic(Alphabet::Binary)),
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Rule(RuleError::InvalidNeighbourhoods { .. }))
        ));
    }

    #[test]
    fn rejects_empty_lattice() {
        let c = SimConfig {
            length: 0,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::EmptyLattice));
    }

    #[test]
    fn rejects_zero_threads() {
        let c = SimConfig {
            threads: Some(0),
            step_mode: StepMode::parallel(),
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ThreadPool {
                reason: "thread count must be at least 1".into()
            })
        );
    }

    #[test]
    fn rejects_threads_without_parallel_stepping() {
        let c = SimConfig {
            threads: Some(4),
            step_mode: StepMode::Sequential,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ThreadPool {
                reason: "thread count requires parallel stepping".into()
            })
        );
        let c = SimConfig {
            step_mode: StepMode::parallel(),
            ..c
        };
        assert!(c.validate().is_ok());
    }

    // ── Field budget ────────────────────────────────────────────

    #[test]
    fn rejects_overflowing_step_count() {
        let c = SimConfig {
            length: 1,
            steps: usize::MAX,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::FieldTooLarge {
                length: 1,
                steps: usize::MAX
            })
        );
    }

    #[test]
    fn rejects_field_over_budget() {
        let c = SimConfig {
            length: 100_000,
            steps: 50_000,
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::FieldTooLarge { .. })
        ));
    }

    #[test]
    fn field_at_budget_is_accepted() {
        let c = SimConfig {
            length: 1 << 16,
            steps: (1 << 16) - 1,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
        let c = SimConfig {
            steps: 1 << 16,
            ..c
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::FieldTooLarge { .. })
        ));
    }

    #[test]
    fn zero_steps_is_valid() {
        let c = SimConfig {
            steps: 0,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn error_source_chains_to_rule_error() {
        let e = ConfigError::from(RuleError::InvalidAlphabet { size: 9 });
        assert!(e.source().is_some());
        assert_eq!(
            e.to_string(),
            "rule: alphabet size 9 is not supported (expected 2 or 3)"
        );
    }
}
