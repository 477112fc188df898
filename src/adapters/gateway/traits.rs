//! Transfer gateway contract
//!
//! The orchestrator depends on the external transfer service only through
//! this request/response contract. Fire-and-forget submission and
//! confirmed submission are separate named operations so the distinction
//! is visible in the type signature rather than a boolean threaded
//! through the call stack.

use crate::domain::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One validated transfer, priced in the service's unit (USD)
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    /// Recipient wallet address
    pub recipient_address: String,

    /// Transfer value in USD (token amount / 20)
    pub usd_value: f64,

    /// Operator-supplied justification; audit metadata only
    pub reason: String,

    /// Identifier of the operator initiating the transfer
    pub admin_id: String,
}

/// Response from the transfer service
///
/// Deserialization is lenient: any missing field defaults, so a partially
/// malformed body still yields a response the caller can record. A body
/// that is not JSON at all surfaces as a gateway error instead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferResponse {
    /// Whether the transfer was accepted/performed
    pub success: bool,

    /// On-chain transaction hash, when available
    pub transaction_hash: Option<String>,

    /// Identifier of the distribution record created by the service
    pub distribution_id: Option<String>,

    /// Error message for rejected transfers
    pub error: Option<String>,

    /// Additional error detail
    pub details: Option<String>,

    /// Informational message
    pub message: Option<String>,
}

/// Trait for transfer service implementations
///
/// Implementations must treat both operations as single-transfer calls;
/// rate limiting and sequencing are the orchestrator's responsibility.
#[async_trait]
pub trait TransferGateway: Send + Sync {
    /// Submit a transfer, returning as soon as the service accepts it
    async fn submit(&self, request: &TransferRequest) -> Result<TransferResponse>;

    /// Submit a transfer and block until the service reports on-chain
    /// confirmation (higher latency, stronger guarantee)
    async fn submit_and_confirm(&self, request: &TransferRequest) -> Result<TransferResponse>;
}
