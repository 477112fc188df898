//! Live run state for a batch distribution

use crate::domain::DistributionResult;

/// Terminal value of `BatchState::current` after a run finishes normally
pub const RUN_COMPLETE_MARKER: &str = "complete";

/// Run mode of a batch
///
/// ```text
/// Idle --run()--> Running --pause()--> Paused --resume()--> Running
/// Running --all rows done--> Completed
/// Running/Paused --stop()--> Stopped
/// ```
///
/// `Completed` and `Stopped` are terminal; no further signal affects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// No run in progress
    Idle,
    /// Executing items
    Running,
    /// Suspended at an item boundary; resumable
    Paused,
    /// Stopped by the operator; final, not resumable
    Stopped,
    /// All rows processed
    Completed,
}

impl RunMode {
    /// Whether the mode is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunMode::Stopped | RunMode::Completed)
    }
}

/// Live state of one batch run
///
/// Created when a run starts and mutated exclusively by the orchestrator's
/// execution loop. External readers (UI, logging) take snapshots via
/// `Clone`. Invariants at every observation point:
/// `completed + failed + remaining() == total` and
/// `results.len() == completed + failed`.
#[derive(Debug, Clone)]
pub struct BatchState {
    /// Number of valid rows scheduled for execution
    pub total: usize,

    /// Number of successful transfers so far
    pub completed: usize,

    /// Number of failed transfers so far
    pub failed: usize,

    /// Human-readable descriptor of the row being processed
    pub current: String,

    /// Ordered, append-only log of every attempted item
    pub results: Vec<DistributionResult>,

    /// Current run mode
    pub mode: RunMode,
}

impl BatchState {
    /// Create the state for a starting run
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            failed: 0,
            current: String::new(),
            results: Vec::with_capacity(total),
            mode: RunMode::Running,
        }
    }

    /// Rows not yet attempted
    pub fn remaining(&self) -> usize {
        self.total - self.completed - self.failed
    }

    /// Rows attempted so far
    pub fn processed(&self) -> usize {
        self.completed + self.failed
    }

    /// Append one item outcome and advance the tallies
    pub fn record(&mut self, result: DistributionResult) {
        if result.success {
            self.completed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    /// Transition to `Completed` after the loop exits normally
    pub fn mark_completed(&mut self) {
        self.mode = RunMode::Completed;
        self.current = RUN_COMPLETE_MARKER.to_string();
    }

    /// Transition to `Stopped`; the partial state accumulated so far is final
    pub fn mark_stopped(&mut self) {
        self.mode = RunMode::Stopped;
    }

    /// Log the end-of-run summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total,
            completed = self.completed,
            failed = self.failed,
            remaining = self.remaining(),
            mode = ?self.mode,
            "Batch run finished"
        );

        for result in self.results.iter().filter(|r| !r.success) {
            tracing::warn!(
                address = %result.address,
                tokens = result.tokens,
                error = result.error.as_deref().unwrap_or("unknown"),
                "Distribution item failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = BatchState::new(4);
        assert_eq!(state.total, 4);
        assert_eq!(state.completed, 0);
        assert_eq!(state.failed, 0);
        assert_eq!(state.remaining(), 4);
        assert_eq!(state.mode, RunMode::Running);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_record_keeps_invariants() {
        let mut state = BatchState::new(3);
        state.record(DistributionResult::succeeded("0xa", 20.0, None, None));
        state.record(DistributionResult::failed("0xb", 40.0, "boom", None));

        assert_eq!(state.completed, 1);
        assert_eq!(state.failed, 1);
        assert_eq!(state.remaining(), 1);
        assert_eq!(state.results.len(), state.processed());
        assert_eq!(state.completed + state.failed + state.remaining(), state.total);
    }

    #[test]
    fn test_mark_completed_sets_terminal_marker() {
        let mut state = BatchState::new(1);
        state.mark_completed();
        assert_eq!(state.mode, RunMode::Completed);
        assert_eq!(state.current, RUN_COMPLETE_MARKER);
        assert!(state.mode.is_terminal());
    }

    #[test]
    fn test_mark_stopped_is_terminal() {
        let mut state = BatchState::new(5);
        state.record(DistributionResult::succeeded("0xa", 20.0, None, None));
        state.mark_stopped();
        assert_eq!(state.mode, RunMode::Stopped);
        assert!(state.mode.is_terminal());
        // Partial tallies survive the stop
        assert_eq!(state.completed, 1);
        assert_eq!(state.remaining(), 4);
    }

    #[test]
    fn test_run_mode_terminality() {
        assert!(!RunMode::Idle.is_terminal());
        assert!(!RunMode::Running.is_terminal());
        assert!(!RunMode::Paused.is_terminal());
        assert!(RunMode::Stopped.is_terminal());
        assert!(RunMode::Completed.is_terminal());
    }
}
