//! Send command implementation
//!
//! Performs a single ad-hoc distribution.

use crate::adapters::gateway::HttpTransferGateway;
use crate::config::load_config;
use crate::core::single::SingleItemSubmitter;
use crate::domain::{DisburseError, DistributionRequest};
use clap::Args;
use std::sync::Arc;

/// Arguments for the send command
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Recipient address (0x + 40 hex characters)
    #[arg(long)]
    pub to: String,

    /// Amount in tokens (minimum 20)
    #[arg(long)]
    pub amount: f64,

    /// Justification recorded with the transfer (min 5 characters)
    #[arg(short, long)]
    pub reason: String,

    /// Operator identifier (overrides application.admin_id)
    #[arg(long)]
    pub admin: Option<String>,

    /// Block until the transfer is confirmed on-chain
    #[arg(long)]
    pub wait: bool,
}

impl SendArgs {
    /// Execute the send command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let admin_id = self
            .admin
            .clone()
            .unwrap_or_else(|| config.application.admin_id.clone());
        if admin_id.is_empty() {
            eprintln!("No operator id: set application.admin_id or pass --admin");
            return Ok(2);
        }

        let gateway = Arc::new(HttpTransferGateway::new(config.gateway.clone()));
        let submitter = SingleItemSubmitter::new(gateway);
        let request = DistributionRequest::new(self.to.clone(), self.amount);

        let result = if self.wait {
            submitter
                .submit_and_confirm(request, &self.reason, &admin_id)
                .await
        } else {
            submitter.submit(request, &self.reason, &admin_id).await
        };

        let result = match result {
            Ok(result) => result,
            Err(DisburseError::Validation(msg)) => {
                eprintln!("{msg}");
                return Ok(2);
            }
            Err(e) => return Err(e.into()),
        };

        if result.success {
            match result.transaction_hash.as_deref() {
                Some(hash) => println!("Sent {} tokens to {} ({})", self.amount, self.to, hash),
                None => println!("Sent {} tokens to {}", self.amount, self.to),
            }
            Ok(0)
        } else {
            eprintln!(
                "Distribution failed: {}",
                result.error.as_deref().unwrap_or("unknown")
            );
            Ok(1)
        }
    }
}
