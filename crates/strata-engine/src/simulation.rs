//! The simulation driver.
//!
//! [`Simulation`] owns a validated configuration and its rule table. Each
//! run is a straight line: build the initial state, apply the stepper
//! `steps` times appending each state to the [`Field`], then hand the field
//! to a [`FieldSink`]. The first stepper failure aborts the run.
//!
//! # Ownership model
//!
//! A `Simulation` is immutable once built and every run method takes
//! `&self`, so one simulation can serve many runs (different seeds or
//! initial states) and can be shared across threads.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use strata_core::{Field, FieldSink, SinkError, State, StepError, TickId};
use strata_rule::{RuleFamily, RuleTable};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::RunMetrics;
use crate::random::{random_state, ChaChaSource, RandomSource};
use crate::stepper::{step_with, StepMode};

// Compile-time assertion: Simulation is Send + Sync.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Simulation>();
    }
};

// ── RunResult ───────────────────────────────────────────────────

/// Result of a successful run.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// The space-time field, `steps + 1` rows of `length` cells.
    pub field: Field,
    /// Performance metrics for the run.
    pub metrics: RunMetrics,
    /// Seed of the initial state, when it was drawn from a [`ChaChaSource`].
    pub seed: Option<u64>,
}

// ── RunError ────────────────────────────────────────────────────

/// Errors that abort a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The configuration was rejected before anything ran.
    Config(ConfigError),
    /// A caller-supplied initial state does not fit the lattice.
    InitialState(StepError),
    /// The stepper failed while producing the state at `tick`.
    Step {
        /// Tick of the state that could not be produced.
        tick: TickId,
        /// The underlying stepper error.
        source: StepError,
    },
    /// The sink rejected the completed field.
    Sink(SinkError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::InitialState(e) => write!(f, "initial state: {e}"),
            Self::Step { tick, source } => write!(f, "step to tick {tick} failed: {source}"),
            Self::Sink(e) => write!(f, "sink: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::InitialState(e) => Some(e),
            Self::Step { source, .. } => Some(source),
            Self::Sink(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SinkError> for RunError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// A validated, ready-to-run cellular automaton.
///
/// # Examples
///
/// ```
/// use strata_engine::{SimConfig, Simulation};
///
/// let sim = Simulation::new(SimConfig {
///     length: 16,
///     steps: 8,
///     rule: 110,
///     seed: Some(42),
///     ..Default::default()
/// })
/// .unwrap();
///
/// let result = sim.run().unwrap();
/// assert_eq!(result.field.height(), 9);
/// assert_eq!(result.field.width(), 16);
/// assert_eq!(result.seed, Some(42));
/// ```
#[derive(Debug)]
pub struct Simulation {
    length: usize,
    steps: usize,
    family: RuleFamily,
    table: RuleTable,
    mode: StepMode,
    seed: Option<u64>,
    pool: Option<rayon::ThreadPool>,
}

impl Simulation {
    /// Validate `config` and build the rule table.
    ///
    /// All configuration errors surface here, before any state exists.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let (family, table) = config.resolve()?;

        let pool = match (config.step_mode, config.threads) {
            (StepMode::Parallel { .. }, Some(n)) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ConfigError::ThreadPool {
                        reason: e.to_string(),
                    })?,
            ),
            _ => None,
        };

        if config.steps == 0 {
            log::warn!("simulation configured with zero steps; field will hold only the initial state");
        }

        Ok(Self {
            length: config.length,
            steps: config.steps,
            family,
            table,
            mode: config.step_mode,
            seed: config.seed,
            pool,
        })
    }

    /// Lattice length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Steps per run.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The rule table applied at every step.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// The alphabet and enumeration the table was built from.
    pub fn family(&self) -> &RuleFamily {
        &self.family
    }

    /// How steps are executed.
    pub fn step_mode(&self) -> StepMode {
        self.mode
    }

    /// Run from a random initial state.
    ///
    /// Uses the configured seed, or a fresh entropy seed reported in
    /// [`RunResult::seed`].
    pub fn run(&self) -> Result<RunResult, RunError> {
        let mut source = match self.seed {
            Some(seed) => ChaChaSource::from_seed(seed),
            None => ChaChaSource::from_entropy(),
        };
        let seed = source.seed();
        let mut result = self.run_with(&mut source)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Run from an initial state drawn from `source`.
    pub fn run_with<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
    ) -> Result<RunResult, RunError> {
        let init_start = Instant::now();
        let initial = random_state(self.length, self.family.alphabet(), source);
        let init_us = init_start.elapsed().as_micros() as u64;
        self.evolve(initial, init_us)
    }

    /// Run from a caller-supplied initial state.
    ///
    /// # Errors
    ///
    /// [`RunError::InitialState`] if `initial` has the wrong length or
    /// holds a symbol outside the alphabet.
    pub fn run_from(&self, initial: State) -> Result<RunResult, RunError> {
        if initial.len() != self.length {
            return Err(RunError::InitialState(StepError::LengthMismatch {
                expected: self.length,
                actual: initial.len(),
            }));
        }
        self.evolve(initial, 0)
    }

    /// Run from a random initial state and hand the field to `sink`.
    pub fn run_into<S: FieldSink + ?Sized>(&self, sink: &mut S) -> Result<RunResult, RunError> {
        let result = self.run()?;
        deliver(result, sink)
    }

    fn evolve(&self, initial: State, init_us: u64) -> Result<RunResult, RunError> {
        let run_start = Instant::now();
        let alphabet = self.family.alphabet();
        let parallel = self.mode.splits(self.length);
        log::info!(
            "running {alphabet} rule {} on {} cells for {} steps{}",
            self.table.rule(),
            self.length,
            self.steps,
            if parallel { " (parallel)" } else { "" }
        );

        let mut field = Field::with_capacity(alphabet, initial, self.steps)
            .map_err(RunError::InitialState)?;

        let step_start = Instant::now();
        for _ in 0..self.steps {
            let tick = field.last_tick().next();
            let next = self
                .step_once(field.last())
                .map_err(|source| RunError::Step { tick, source })?;
            log::trace!("tick {tick}: {next}");
            field
                .push(next)
                .map_err(|source| RunError::Step { tick, source })?;
        }
        let stepping_us = step_start.elapsed().as_micros() as u64;

        let metrics = RunMetrics {
            total_us: init_us + run_start.elapsed().as_micros() as u64,
            init_us,
            stepping_us,
            sink_us: 0,
            steps: self.steps as u64,
            cell_updates: (self.steps as u64) * (self.length as u64),
            parallel,
        };
        log::info!(
            "finished rule {} in {} us ({} cell updates)",
            self.table.rule(),
            metrics.total_us,
            metrics.cell_updates
        );
        Ok(RunResult {
            field,
            metrics,
            seed: None,
        })
    }

    fn step_once(&self, prev: &State) -> Result<State, StepError> {
        match &self.pool {
            Some(pool) => pool.install(|| step_with(prev, &self.table, self.mode)),
            None => step_with(prev, &self.table, self.mode),
        }
    }
}

/// Hand a completed run to `sink`, adding the time it took to the run's
/// sink and total times.
pub fn deliver<S: FieldSink + ?Sized>(
    mut result: RunResult,
    sink: &mut S,
) -> Result<RunResult, RunError> {
    let sink_start = Instant::now();
    sink.consume(&result.field)?;
    let sink_us = sink_start.elapsed().as_micros() as u64;
    result.metrics.sink_us += sink_us;
    result.metrics.total_us += sink_us;
    Ok(result)
}

/// Build a simulation from `config`, run it from a random state, and hand
/// the field to `sink`.
pub fn simulate<S: FieldSink + ?Sized>(
    config: SimConfig,
    sink: &mut S,
) -> Result<RunResult, RunError> {
    Simulation::new(config)?.run_into(sink)
}
