//! Per-run performance metrics.
//!
//! [`RunMetrics`] captures timing and volume data for one simulation run,
//! for logging and benchmarking.

/// Timing and volume metrics collected during a single run.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Time spent producing the initial state, in microseconds.
    pub init_us: u64,
    /// Time spent in the stepper across all steps, in microseconds.
    pub stepping_us: u64,
    /// Time the sink spent consuming the field, in microseconds.
    pub sink_us: u64,
    /// Steps executed.
    pub steps: u64,
    /// Cell updates executed (`steps * length`).
    pub cell_updates: u64,
    /// Whether steps were split across worker threads.
    pub parallel: bool,
}

impl RunMetrics {
    /// Cell updates per second of stepping time, if any time elapsed.
    pub fn updates_per_sec(&self) -> Option<f64> {
        if self.stepping_us == 0 {
            None
        } else {
            Some(self.cell_updates as f64 * 1e6 / self.stepping_us as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.init_us, 0);
        assert_eq!(m.stepping_us, 0);
        assert_eq!(m.sink_us, 0);
        assert_eq!(m.steps, 0);
        assert_eq!(m.cell_updates, 0);
        assert!(!m.parallel);
        assert_eq!(m.updates_per_sec(), None);
    }

    #[test]
    fn throughput() {
        let m = RunMetrics {
            stepping_us: 500_000,
            cell_updates: 1_000,
            ..Default::default()
        };
        assert_eq!(m.updates_per_sec(), Some(2_000.0));
    }
}
