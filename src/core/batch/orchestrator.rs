//! Sequential batch execution engine
//!
//! Drives validated rows one at a time through the transfer gateway,
//! honoring pause/resume/stop signals at item boundaries. Transfers are
//! deliberately never issued in parallel: concurrent submissions against
//! the same account could race on transaction ordering or trip the
//! service's rate limiting, so the engine trades throughput for
//! determinism.

use crate::adapters::gateway::{TransferGateway, TransferRequest};
use crate::core::batch::control::{BatchControl, ControlSignal};
use crate::core::batch::progress::{NoopObserver, ProgressObserver};
use crate::core::batch::state::{BatchState, RunMode};
use crate::core::validate::validate_reason;
use crate::domain::{DisburseError, DistributionResult, Result, ValidatedRow};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Configuration for batch execution
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Delay between items, to respect external rate limits and avoid
    /// nonce races on the transfer service
    pub inter_item_delay: Duration,
}

impl BatchConfig {
    /// Create a configuration with the given inter-item delay in milliseconds
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            inter_item_delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::with_delay_ms(2000)
    }
}

/// Batch distribution orchestrator
///
/// Owns the run state machine. The state is mutated exclusively by the
/// execution loop; external actors may only signal pause/resume/stop
/// through the [`BatchControl`] handle returned by [`Self::control`].
pub struct BatchOrchestrator {
    gateway: Arc<dyn TransferGateway>,
    config: BatchConfig,
    control: BatchControl,
    signal: watch::Receiver<ControlSignal>,
    observer: Arc<dyn ProgressObserver>,
}

impl BatchOrchestrator {
    /// Create a new orchestrator over the given gateway
    pub fn new(gateway: Arc<dyn TransferGateway>, config: BatchConfig) -> Self {
        let (control, signal) = BatchControl::new();
        Self {
            gateway,
            config,
            control,
            signal,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Attach a progress observer
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Handle for signalling pause/resume/stop to a running batch
    pub fn control(&self) -> BatchControl {
        self.control.clone()
    }

    /// Execute a batch run
    ///
    /// Only rows with `is_valid = true` are executed; invalid rows are
    /// excluded from `total` but remain visible to the caller via the
    /// original validated list. Per-item failures are isolated: they are
    /// recorded and the loop continues. Only precondition failures (bad
    /// reason, zero valid rows) are returned as errors, before any
    /// `BatchState` is created.
    pub async fn run(
        &self,
        rows: &[ValidatedRow],
        reason: &str,
        admin_id: &str,
    ) -> Result<BatchState> {
        validate_reason(reason)?;

        let valid_rows: Vec<&ValidatedRow> = rows.iter().filter(|r| r.is_valid).collect();
        if valid_rows.is_empty() {
            return Err(DisburseError::Validation(
                "No valid rows to distribute".to_string(),
            ));
        }

        let mut state = BatchState::new(valid_rows.len());
        let mut signal = self.signal.clone();

        tracing::info!(
            total = state.total,
            skipped_invalid = rows.len() - state.total,
            reason = %reason,
            admin_id = %admin_id,
            "Starting batch distribution"
        );
        self.observer.on_start(&state);

        for (index, row) in valid_rows.iter().enumerate() {
            // Item boundary: the only place pause or stop takes effect
            if self.wait_for_clearance(&mut signal, &mut state).await == ControlSignal::Stop {
                state.mark_stopped();
                tracing::info!(
                    processed = state.processed(),
                    remaining = state.remaining(),
                    "Batch stopped by operator"
                );
                break;
            }

            state.current = row.request.to_string();

            let request = TransferRequest {
                recipient_address: row.address().to_string(),
                usd_value: row.usd_value,
                reason: reason.to_string(),
                admin_id: admin_id.to_string(),
            };

            let result = match self.gateway.submit(&request).await {
                Ok(response) if response.success => DistributionResult::succeeded(
                    row.address(),
                    row.tokens(),
                    response.transaction_hash,
                    response.distribution_id,
                ),
                Ok(response) => DistributionResult::failed(
                    row.address(),
                    row.tokens(),
                    response
                        .error
                        .or(response.message)
                        .unwrap_or_else(|| "Transfer rejected".to_string()),
                    response.details,
                ),
                Err(e) => {
                    DistributionResult::failed(row.address(), row.tokens(), e.to_string(), None)
                }
            };

            state.record(result.clone());
            self.observer.on_item(&state, &result);

            if index + 1 < state.total {
                tokio::time::sleep(self.config.inter_item_delay).await;
            }
        }

        if state.mode != RunMode::Stopped {
            state.mark_completed();
        }

        state.log_summary();
        self.observer.on_complete(&state);

        Ok(state)
    }

    /// Wait until the run is clear to start the next item
    ///
    /// Returns `Run` when the next item may start and `Stop` when the run
    /// must terminate. While paused, suspends on the signal channel so a
    /// stop issued during the pause is observed promptly.
    async fn wait_for_clearance(
        &self,
        signal: &mut watch::Receiver<ControlSignal>,
        state: &mut BatchState,
    ) -> ControlSignal {
        loop {
            let current = *signal.borrow_and_update();
            match current {
                ControlSignal::Stop => return ControlSignal::Stop,
                ControlSignal::Run => {
                    if state.mode == RunMode::Paused {
                        state.mode = RunMode::Running;
                        tracing::info!(processed = state.processed(), "Batch resumed");
                    }
                    return ControlSignal::Run;
                }
                ControlSignal::Pause => {
                    if state.mode != RunMode::Paused {
                        state.mode = RunMode::Paused;
                        tracing::info!(processed = state.processed(), "Batch paused");
                    }
                    // The orchestrator holds a sender clone, so the channel
                    // can only close if the orchestrator itself is gone.
                    if signal.changed().await.is_err() {
                        return ControlSignal::Stop;
                    }
                }
            }
        }
    }
}
