//! Distribution request and validated row types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed conversion rate: 20 tokens = 1 USD
///
/// The external transfer service prices transfers in USD; the operator
/// enters token amounts. This rate is fixed and not runtime-configurable.
pub const TOKENS_PER_USD: f64 = 20.0;

/// Minimum transfer size in tokens (= 1 USD), individual or per-row
pub const MIN_TOKEN_AMOUNT: f64 = 20.0;

/// One (recipient address, token amount) pair to be distributed
///
/// This is the raw, unvalidated input unit: one spreadsheet row, or the
/// single-item form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRequest {
    /// Recipient wallet address (`0x` + 40 hex characters once validated)
    pub recipient_address: String,

    /// Amount in tokens
    pub token_amount: f64,
}

impl DistributionRequest {
    /// Create a new distribution request
    pub fn new(recipient_address: impl Into<String>, token_amount: f64) -> Self {
        Self {
            recipient_address: recipient_address.into(),
            token_amount,
        }
    }
}

impl fmt::Display for DistributionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} tokens)", self.recipient_address, self.token_amount)
    }
}

/// A distribution request after validation
///
/// Produced by the row validator; immutable once created. Invalid rows are
/// kept so the caller can display them, but they must never reach the
/// transfer gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRow {
    /// The original request
    pub request: DistributionRequest,

    /// Whether the row passed all validation rules
    pub is_valid: bool,

    /// Derived USD value (`token_amount / 20`); 0 for invalid rows
    pub usd_value: f64,

    /// First failing rule's message, if any
    pub error: Option<String>,
}

impl ValidatedRow {
    /// Create a row that passed validation
    pub fn valid(request: DistributionRequest) -> Self {
        let usd_value = request.token_amount / TOKENS_PER_USD;
        Self {
            request,
            is_valid: true,
            usd_value,
            error: None,
        }
    }

    /// Create a row that failed validation
    pub fn invalid(request: DistributionRequest, error: impl Into<String>) -> Self {
        Self {
            request,
            is_valid: false,
            usd_value: 0.0,
            error: Some(error.into()),
        }
    }

    /// Recipient address of the underlying request
    pub fn address(&self) -> &str {
        &self.request.recipient_address
    }

    /// Token amount of the underlying request
    pub fn tokens(&self) -> f64 {
        self.request.token_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_display() {
        let request = DistributionRequest::new("0xabc", 40.0);
        assert_eq!(format!("{request}"), "0xabc (40 tokens)");
    }

    #[test]
    fn test_valid_row_derives_usd_value() {
        let row = ValidatedRow::valid(DistributionRequest::new("0xabc", 100.0));
        assert!(row.is_valid);
        assert_eq!(row.usd_value, 5.0);
        assert!(row.error.is_none());
    }

    #[test]
    fn test_invalid_row_keeps_request() {
        let row = ValidatedRow::invalid(DistributionRequest::new("bad", 40.0), "Invalid address");
        assert!(!row.is_valid);
        assert_eq!(row.address(), "bad");
        assert_eq!(row.tokens(), 40.0);
        assert_eq!(row.error.as_deref(), Some("Invalid address"));
    }

    #[test]
    fn test_request_serialization() {
        let request = DistributionRequest::new("0xabc", 20.0);
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: DistributionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}
