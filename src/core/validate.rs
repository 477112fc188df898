//! Row and run-precondition validation
//!
//! Pure functions: no I/O, no state. Row rules are applied in order and the
//! first failing rule wins. Address validation is deliberately lenient:
//! only the hex shape is checked, not EIP-55 checksum casing, so inputs
//! accepted historically stay accepted.

use crate::domain::{
    DisburseError, DistributionRequest, Result, ValidatedRow, MIN_TOKEN_AMOUNT,
};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum trimmed length of the free-text justification
pub const MIN_REASON_LEN: usize = 5;

fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid address pattern"))
}

/// Validate a single distribution request
///
/// Rules, in order:
/// 1. address must be `0x` followed by exactly 40 hex characters
/// 2. token amount must be a finite number >= 20
///
/// Both passing yields a valid row with `usd_value = token_amount / 20`.
pub fn validate_row(request: DistributionRequest) -> ValidatedRow {
    if !address_pattern().is_match(&request.recipient_address) {
        return ValidatedRow::invalid(request, "Invalid address");
    }

    if !request.token_amount.is_finite() || request.token_amount < MIN_TOKEN_AMOUNT {
        return ValidatedRow::invalid(request, "Invalid token amount (minimum 20)");
    }

    ValidatedRow::valid(request)
}

/// Validate an ordered list of raw rows
///
/// The header row, if present, must already be stripped by the caller.
/// Input order is preserved and no row is dropped: invalid rows remain in
/// the output for display, they are just excluded from execution.
pub fn validate_batch(rows: Vec<DistributionRequest>) -> Vec<ValidatedRow> {
    rows.into_iter().map(validate_row).collect()
}

/// Validate the run-level justification string
///
/// A reason with trimmed length below [`MIN_REASON_LEN`] is a fatal
/// precondition failure: no run, individual or batch, may start.
pub fn validate_reason(reason: &str) -> Result<()> {
    if reason.trim().len() < MIN_REASON_LEN {
        return Err(DisburseError::Validation(format!(
            "Reason must be at least {MIN_REASON_LEN} characters"
        )));
    }
    Ok(())
}
