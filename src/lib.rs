// Disburse - Batch Token Distribution Tool
// Copyright (c) 2026 Disburse Contributors
// Licensed under the MIT License

//! # Disburse - Batch Token Distribution
//!
//! Disburse is a CLI tool built in Rust that drives token distributions
//! through an external HTTP transfer service, one recipient at a time, with
//! pause/resume/stop control and a complete per-item audit trail.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** recipient rows (address format, minimum token amount)
//! - **Orchestrating** sequential batch runs with inter-item rate limiting
//! - **Controlling** in-flight runs (pause at item boundaries, graceful stop)
//! - **Recording** one result per attempted item for audit
//!
//! ## Architecture
//!
//! Disburse follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (validation, batch orchestration, single sends)
//! - [`adapters`] - External integrations (HTTP transfer gateway)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use disburse::adapters::gateway::HttpTransferGateway;
//! use disburse::config::load_config;
//! use disburse::core::batch::{BatchConfig, BatchOrchestrator};
//! use disburse::core::validate::validate_batch;
//! use disburse::domain::DistributionRequest;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("disburse.toml")?;
//!
//!     // Validate the batch
//!     let rows = validate_batch(vec![DistributionRequest::new(
//!         "0x1111111111111111111111111111111111111111".to_string(),
//!         40.0,
//!     )]);
//!
//!     // Run it
//!     let gateway = Arc::new(HttpTransferGateway::new(config.gateway.clone()));
//!     let orchestrator = BatchOrchestrator::new(
//!         gateway,
//!         BatchConfig::with_delay_ms(config.batch.inter_item_delay_ms),
//!     );
//!     let state = orchestrator.run(&rows, "community rewards", "ops-1").await?;
//!
//!     println!("Completed: {}, failed: {}", state.completed, state.failed);
//!     Ok(())
//! }
//! ```
//!
//! ## Run Control
//!
//! A running batch can be paused, resumed, or stopped from another task via
//! [`core::batch::BatchControl`]. Pause takes effect at the next item
//! boundary; an item in flight is never interrupted. Stop is one-way: once
//! requested, the run finishes the current item and reports everything else
//! as remaining.
//!
//! ```rust,no_run
//! # use disburse::core::batch::{BatchConfig, BatchOrchestrator};
//! # fn example(orchestrator: &BatchOrchestrator) {
//! let control = orchestrator.control();
//! control.pause();
//! control.resume();
//! control.stop();
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Disburse uses the [`domain::DisburseError`] type for all errors:
//!
//! ```rust,no_run
//! use disburse::domain::DisburseError;
//!
//! fn example() -> Result<(), DisburseError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = disburse::config::load_config("disburse.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! A failed transfer is not an error: the orchestrator records it in the run
//! results and moves on to the next item.
//!
//! ## Logging
//!
//! Disburse uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting batch run");
//! warn!(address = "0xabc...", "Transfer rejected");
//! error!(error = ?std::io::Error::other("boom"), "Run aborted");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
