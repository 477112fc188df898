//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Disburse using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Disburse - batch token distribution tool
#[derive(Parser, Debug)]
#[command(name = "disburse")]
#[command(version, about, long_about = None)]
#[command(author = "Disburse Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "disburse.toml", env = "DISBURSE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DISBURSE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a batch distribution from an input file
    Run(commands::run::RunArgs),

    /// Send a single ad-hoc distribution
    Send(commands::send::SendArgs),

    /// Validate configuration and, optionally, an input file
    Validate(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
