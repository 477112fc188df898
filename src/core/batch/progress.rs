//! Progress reporting for batch runs
//!
//! The orchestrator reports through this trait after validation, after
//! each item, and on completion. The rendering layer (here, the CLI) is a
//! concrete implementation; tests use recording observers.

use crate::core::batch::state::BatchState;
use crate::domain::DistributionResult;

/// Callback interface the orchestrator reports run progress to
///
/// All methods receive immutable snapshots; observers must never mutate
/// run state through side channels.
pub trait ProgressObserver: Send + Sync {
    /// Called once after preconditions pass, before the first item
    fn on_start(&self, _state: &BatchState) {}

    /// Called after each attempted item, with the item's outcome appended
    fn on_item(&self, _state: &BatchState, _result: &DistributionResult) {}

    /// Called once after the run reaches a terminal mode
    fn on_complete(&self, _state: &BatchState) {}
}

/// Observer that does nothing
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Observer that reports progress through `tracing`
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_start(&self, state: &BatchState) {
        tracing::info!(total = state.total, "Batch run started");
    }

    fn on_item(&self, state: &BatchState, result: &DistributionResult) {
        if result.success {
            tracing::info!(
                address = %result.address,
                tokens = result.tokens,
                transaction_hash = result.transaction_hash.as_deref().unwrap_or(""),
                progress = format!("{}/{}", state.processed(), state.total),
                "Distribution succeeded"
            );
        } else {
            tracing::warn!(
                address = %result.address,
                tokens = result.tokens,
                error = result.error.as_deref().unwrap_or("unknown"),
                progress = format!("{}/{}", state.processed(), state.total),
                "Distribution failed"
            );
        }
    }

    fn on_complete(&self, state: &BatchState) {
        tracing::info!(
            completed = state.completed,
            failed = state.failed,
            remaining = state.remaining(),
            mode = ?state.mode,
            "Batch run complete"
        );
    }
}
