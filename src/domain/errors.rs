//! Domain error types
//!
//! This module defines the error hierarchy for Disburse. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Disburse error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DisburseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transfer gateway errors
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Validation errors (row rules, run preconditions)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bulk input file errors
    #[error("Input error: {0}")]
    Input(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Transfer gateway-specific errors
///
/// Errors that occur when talking to the external transfer service.
/// These errors don't expose HTTP client types.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Failed to connect to the transfer service
    #[error("Failed to connect to transfer service: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Invalid response from the service
    #[error("Invalid response from transfer service: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for DisburseError {
    fn from(err: std::io::Error) -> Self {
        DisburseError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DisburseError {
    fn from(err: serde_json::Error) -> Self {
        DisburseError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DisburseError {
    fn from(err: toml::de::Error) -> Self {
        DisburseError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disburse_error_display() {
        let err = DisburseError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_gateway_error_conversion() {
        let gw_err = GatewayError::ConnectionFailed("Network error".to_string());
        let err: DisburseError = gw_err.into();
        assert!(matches!(err, DisburseError::Gateway(_)));
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::ServerError {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 502 - Bad Gateway");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: DisburseError = io_err.into();
        assert!(matches!(err, DisburseError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DisburseError = json_err.into();
        assert!(matches!(err, DisburseError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: DisburseError = toml_err.into();
        assert!(matches!(err, DisburseError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_disburse_error_implements_std_error() {
        let err = DisburseError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
