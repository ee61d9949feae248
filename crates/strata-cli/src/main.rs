//! `strata`: run a one-dimensional cellular automaton and render it.
//!
//! **Usage:**
//! ```text
//! strata [--length N] [--steps T] [--alphabet 2|3] [--rule R] [--seed S]
//!        [--single-seed SYMBOL] [--parallel] [--threads N]
//!        [--output out.png] [--scale K] [--text] [--blocks]
//! ```
//!
//! Logging is controlled by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use strata::prelude::*;

/// Simulate a binary or ternary 1D cellular automaton.
#[derive(Parser, Debug)]
#[command(name = "strata", version, about = "Simulate a 1D cellular automaton")]
struct Args {
    /// Number of cells in the lattice.
    #[arg(long, default_value_t = 100)]
    length: usize,

    /// Steps after the initial state.
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Symbols per cell (2 or 3).
    #[arg(long, default_value_t = 2)]
    alphabet: u32,

    /// Rule number: 0..=255 for 2 symbols, 0..=19682 for 3.
    #[arg(long, default_value_t = 30)]
    rule: u32,

    /// Seed for the random initial state.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a single cell holding SYMBOL in the centre instead of a
    /// random state.
    #[arg(long, value_name = "SYMBOL")]
    single_seed: Option<u8>,

    /// Split each step across worker threads.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (default: one per core).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Write a grayscale PNG to this path.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Pixels per cell edge in the PNG.
    #[arg(long, default_value_t = 4)]
    scale: u32,

    /// Print the field to stdout, one line per step.
    #[arg(long)]
    text: bool,

    /// Use shaded blocks instead of digits for --text.
    #[arg(long, requires = "text")]
    blocks: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            length: self.length,
            steps: self.steps,
            alphabet_size: self.alphabet,
            neighbourhoods: None,
            rule: self.rule,
            seed: self.seed,
            step_mode: if self.parallel {
                StepMode::parallel()
            } else {
                StepMode::Sequential
            },
            threads: self.threads,
        }
    }

    fn renderer(&self) -> GrayscaleRenderer {
        GrayscaleRenderer::new(self.scale)
    }

    /// PNG destination. Defaults to `strata.png` when no other output is asked for.
    fn png_path(&self) -> Option<PathBuf> {
        match (&self.output, self.text) {
            (Some(path), _) => Some(path.clone()),
            (None, false) => Some(PathBuf::from("strata.png")),
            (None, true) => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sim = Simulation::new(args.config()).context("invalid configuration")?;
    let png = args.png_path().map(|path| (path, args.renderer()));
    if let Some((path, renderer)) = &png {
        renderer
            .check_size(args.length, args.steps.saturating_add(1))
            .with_context(|| format!("cannot render {}", path.display()))?;
    }

    let mut result = match args.single_seed {
        Some(symbol) => sim.run_from(State::single_seed(args.length, symbol)),
        None => sim.run(),
    }
    .context("simulation failed")?;

    if let Some(seed) = result.seed {
        log::info!("initial state seed: {seed}");
    }

    let mut sinks: Vec<Box<dyn FieldSink>> = Vec::new();
    if let Some((path, renderer)) = png {
        sinks.push(Box::new(PngSink::new(path, renderer)));
    }
    if args.text {
        let glyphs = if args.blocks { Glyphs::BLOCKS } else { Glyphs::DIGITS };
        sinks.push(Box::new(TextSink::new(std::io::stdout().lock(), glyphs)));
    }

    for sink in &mut sinks {
        result = strata::engine::deliver(result, sink).context("rendering failed")?;
    }

    let m = &result.metrics;
    log::info!(
        "{} steps of {} cells in {} us (stepping {} us, render {} us)",
        m.steps,
        sim.length(),
        m.total_us,
        m.stepping_us,
        m.sink_us
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let args = Args::parse_from(["strata"]);
        let cfg = args.config();
        let def = SimConfig::default();
        assert_eq!(cfg.length, def.length);
        assert_eq!(cfg.steps, def.steps);
        assert_eq!(cfg.alphabet_size, def.alphabet_size);
        assert_eq!(cfg.rule, def.rule);
        assert_eq!(args.png_path(), Some(PathBuf::from("strata.png")));
    }

    #[test]
    fn text_only_skips_png() {
        let args = Args::parse_from(["strata", "--text", "--blocks"]);
        assert_eq!(args.png_path(), None);
    }

    #[test]
    fn parallel_with_threads() {
        let args = Args::parse_from(["strata", "--parallel", "--threads", "3"]);
        let cfg = args.config();
        assert_eq!(cfg.step_mode, StepMode::parallel());
        assert_eq!(cfg.threads, Some(3));
    }

    #[test]
    fn oversize_image_is_caught_before_running() {
        let args = Args::parse_from(["strata", "--length", "20000", "--steps", "20000"]);
        assert!(Simulation::new(args.config()).is_ok());
        assert!(matches!(
            args.renderer().check_size(args.length, args.steps + 1),
            Err(SinkError::TooLarge { .. })
        ));

        let args = Args::parse_from(["strata", "--length", "100", "--steps", "100"]);
        assert_eq!(args.renderer().check_size(100, 101), Ok((400, 404)));
    }

    #[test]
    fn threads_require_parallel() {
        assert!(Args::try_parse_from(["strata", "--threads", "3"]).is_err());
    }

    #[test]
    fn ternary_options() {
        let args = Args::parse_from([
            "strata", "--alphabet", "3", "--rule", "19682", "--seed", "5", "--text",
        ]);
        let sim = Simulation::new(args.config()).unwrap();
        assert_eq!(sim.family().alphabet(), Alphabet::Ternary);
    }
}
