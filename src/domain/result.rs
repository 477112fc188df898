//! Result type alias for Disburse

use super::errors::DisburseError;

/// Result type alias for Disburse operations
///
/// This is a convenience type alias that uses `DisburseError` as the error
/// type. Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, DisburseError>;
