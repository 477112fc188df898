//! Ad-hoc single-item distribution
//!
//! The degenerate one-item case of the batch engine. Unlike batch mode it
//! may block until the transfer service confirms on-chain, at the cost of
//! latency.

use crate::adapters::gateway::{TransferGateway, TransferRequest};
use crate::core::validate::{validate_reason, validate_row};
use crate::domain::{DisburseError, DistributionRequest, DistributionResult, Result};
use std::sync::Arc;

/// Submitter for individual distributions
pub struct SingleItemSubmitter {
    gateway: Arc<dyn TransferGateway>,
}

impl SingleItemSubmitter {
    /// Create a new submitter over the given gateway
    pub fn new(gateway: Arc<dyn TransferGateway>) -> Self {
        Self { gateway }
    }

    /// Submit one distribution, returning as soon as the service accepts it
    pub async fn submit(
        &self,
        request: DistributionRequest,
        reason: &str,
        admin_id: &str,
    ) -> Result<DistributionResult> {
        self.execute(request, reason, admin_id, false).await
    }

    /// Submit one distribution and block until on-chain confirmation
    pub async fn submit_and_confirm(
        &self,
        request: DistributionRequest,
        reason: &str,
        admin_id: &str,
    ) -> Result<DistributionResult> {
        self.execute(request, reason, admin_id, true).await
    }

    async fn execute(
        &self,
        request: DistributionRequest,
        reason: &str,
        admin_id: &str,
        confirm: bool,
    ) -> Result<DistributionResult> {
        validate_reason(reason)?;

        let row = validate_row(request);
        if !row.is_valid {
            // No batch to continue here; a bad row is fatal to the call
            return Err(DisburseError::Validation(
                row.error.unwrap_or_else(|| "Invalid row".to_string()),
            ));
        }

        let transfer = TransferRequest {
            recipient_address: row.address().to_string(),
            usd_value: row.usd_value,
            reason: reason.to_string(),
            admin_id: admin_id.to_string(),
        };

        tracing::info!(
            address = %transfer.recipient_address,
            tokens = row.tokens(),
            usd_value = transfer.usd_value,
            confirm = confirm,
            "Submitting single distribution"
        );

        let response = if confirm {
            self.gateway.submit_and_confirm(&transfer).await
        } else {
            self.gateway.submit(&transfer).await
        };

        // A gateway failure is an item outcome, not an error of the call
        let result = match response {
            Ok(resp) if resp.success => DistributionResult::succeeded(
                row.address(),
                row.tokens(),
                resp.transaction_hash,
                resp.distribution_id,
            ),
            Ok(resp) => DistributionResult::failed(
                row.address(),
                row.tokens(),
                resp.error
                    .or(resp.message)
                    .unwrap_or_else(|| "Transfer rejected".to_string()),
                resp.details,
            ),
            Err(e) => DistributionResult::failed(row.address(), row.tokens(), e.to_string(), None),
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::TransferResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const ADDR: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[derive(Default)]
    struct ModeGateway {
        confirmed: Mutex<Vec<bool>>,
        succeed: bool,
    }

    #[async_trait]
    impl TransferGateway for ModeGateway {
        async fn submit(&self, _request: &TransferRequest) -> Result<TransferResponse> {
            self.confirmed.lock().unwrap().push(false);
            Ok(TransferResponse {
                success: self.succeed,
                transaction_hash: self.succeed.then(|| "0xhash".to_string()),
                error: (!self.succeed).then(|| "rejected".to_string()),
                ..Default::default()
            })
        }

        async fn submit_and_confirm(&self, _request: &TransferRequest) -> Result<TransferResponse> {
            self.confirmed.lock().unwrap().push(true);
            Ok(TransferResponse {
                success: self.succeed,
                transaction_hash: self.succeed.then(|| "0xhash".to_string()),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_submit_uses_fire_and_forget() {
        let gateway = Arc::new(ModeGateway {
            succeed: true,
            ..Default::default()
        });
        let submitter = SingleItemSubmitter::new(gateway.clone());

        let result = submitter
            .submit(DistributionRequest::new(ADDR, 40.0), "bonus payout", "admin-1")
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(*gateway.confirmed.lock().unwrap(), vec![false]);
    }

    #[tokio::test]
    async fn test_submit_and_confirm_waits() {
        let gateway = Arc::new(ModeGateway {
            succeed: true,
            ..Default::default()
        });
        let submitter = SingleItemSubmitter::new(gateway.clone());

        let result = submitter
            .submit_and_confirm(DistributionRequest::new(ADDR, 40.0), "bonus payout", "admin-1")
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(*gateway.confirmed.lock().unwrap(), vec![true]);
    }

    #[tokio::test]
    async fn test_invalid_row_is_an_error() {
        let gateway = Arc::new(ModeGateway::default());
        let submitter = SingleItemSubmitter::new(gateway.clone());

        let result = submitter
            .submit(DistributionRequest::new("bad", 40.0), "bonus payout", "admin-1")
            .await;

        assert!(matches!(result, Err(DisburseError::Validation(_))));
        assert!(gateway.confirmed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_short_reason_is_an_error() {
        let gateway = Arc::new(ModeGateway::default());
        let submitter = SingleItemSubmitter::new(gateway.clone());

        let result = submitter
            .submit(DistributionRequest::new(ADDR, 40.0), "ok", "admin-1")
            .await;

        assert!(matches!(result, Err(DisburseError::Validation(_))));
        assert!(gateway.confirmed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_transfer_is_a_failed_result() {
        let gateway = Arc::new(ModeGateway {
            succeed: false,
            ..Default::default()
        });
        let submitter = SingleItemSubmitter::new(gateway);

        let result = submitter
            .submit(DistributionRequest::new(ADDR, 40.0), "bonus payout", "admin-1")
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("rejected"));
    }
}
