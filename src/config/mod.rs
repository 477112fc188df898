//! Configuration management
//!
//! TOML-based configuration with `${VAR}` environment substitution and
//! `DISBURSE_*` environment overrides.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BatchSection, DisburseConfig, GatewayConfig, LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
