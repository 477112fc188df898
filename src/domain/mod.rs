//! Core domain types for Disburse
//!
//! Requests, validated rows, per-item results, and the error hierarchy.

pub mod errors;
pub mod outcome;
pub mod request;
pub mod result;

pub use errors::{DisburseError, GatewayError};
pub use outcome::DistributionResult;
pub use request::{DistributionRequest, ValidatedRow, MIN_TOKEN_AMOUNT, TOKENS_PER_USD};
pub use result::Result;
