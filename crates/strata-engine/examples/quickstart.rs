//! Strata quickstart: a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Decoding a rule number into its table
//!   2. Stepping a state by hand
//!   3. Building a SimConfig and Simulation
//!   4. Running from a seed and from an explicit state
//!
//! Run with:
//!   cargo run --example quickstart

use strata_core::{Alphabet, Field, FieldSink, SinkError, State, TickId};
use strata_engine::stepper::step;
use strata_engine::{SimConfig, Simulation};
use strata_rule::{decode, RuleFamily};

// ─── Lattice parameters ─────────────────────────────────────────

const LENGTH: usize = 31;
const STEPS: usize = 15;

// ─── Sink: print each row as blocks ─────────────────────────────

struct Printer;

impl FieldSink for Printer {
    fn consume(&mut self, field: &Field) -> Result<(), SinkError> {
        for (t, row) in field.rows().iter().enumerate() {
            let line: String = row
                .iter()
                .map(|&s| match s {
                    0 => ' ',
                    1 => '▒',
                    _ => '█',
                })
                .collect();
            println!("  {t:>3} |{line}|");
        }
        Ok(())
    }
}

fn main() {
    println!("=== Strata Quickstart ===\n");

    // 1. Rule 90 as digits and as a table.
    let digits = decode(90, Alphabet::Binary).unwrap();
    println!("Rule 90 digits (LSD first): {:?}", digits.as_slice());
    let family = RuleFamily::lexicographic(Alphabet::Binary);
    let table = family.table(90).unwrap();
    for (nbhd, out) in table.iter() {
        println!("  {nbhd} -> {out}");
    }

    // 2. One step by hand.
    let s0 = State::single_seed(9, 1);
    let s1 = step(&s0, &table).unwrap();
    println!("\nOne step of rule 90: {s0} -> {s1}\n");

    // 3. A full simulation from a single seed.
    let sim = Simulation::new(SimConfig {
        length: LENGTH,
        steps: STEPS,
        rule: 90,
        ..Default::default()
    })
    .unwrap();
    println!("Rule 90 from a single seed:");
    let result = sim.run_from(State::single_seed(LENGTH, 1)).unwrap();
    Printer.consume(&result.field).unwrap();

    // 4. A ternary rule from a seeded random state.
    let sim = Simulation::new(SimConfig {
        length: LENGTH,
        steps: STEPS,
        alphabet_size: 3,
        rule: 7_000,
        seed: Some(42),
        ..Default::default()
    })
    .unwrap();
    println!("\nTernary rule 7000, seed 42:");
    let result = sim.run_into(&mut Printer).unwrap();
    let counts = result.field.symbol_counts(TickId(STEPS as u64)).unwrap();
    println!("\nFinal symbol counts: {:?}", counts.as_slice());
    println!("Run took {} us", result.metrics.total_us);
}
