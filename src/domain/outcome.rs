//! Per-item distribution outcome

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one attempted transfer
///
/// One of these is appended to the run's result log per attempted item.
/// Append-only: never mutated after creation. After a run ends, the
/// ordered list of these is the audit trail used to reconcile which
/// recipients were paid.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionResult {
    /// Whether the transfer succeeded
    pub success: bool,

    /// Recipient address
    pub address: String,

    /// Amount in tokens
    pub tokens: f64,

    /// Transaction hash reported by the transfer service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,

    /// Distribution record identifier reported by the transfer service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_id: Option<String>,

    /// Error message for failed transfers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Additional error detail, if the service provided any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// When the item was submitted
    pub submitted_at: DateTime<Utc>,
}

impl DistributionResult {
    /// Record a successful transfer
    pub fn succeeded(
        address: impl Into<String>,
        tokens: f64,
        transaction_hash: Option<String>,
        distribution_id: Option<String>,
    ) -> Self {
        Self {
            success: true,
            address: address.into(),
            tokens,
            transaction_hash,
            distribution_id,
            error: None,
            details: None,
            submitted_at: Utc::now(),
        }
    }

    /// Record a failed transfer
    pub fn failed(
        address: impl Into<String>,
        tokens: f64,
        error: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            success: false,
            address: address.into(),
            tokens,
            transaction_hash: None,
            distribution_id: None,
            error: Some(error.into()),
            details,
            submitted_at: Utc::now(),
        }
    }
}
