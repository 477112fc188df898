//! Validate command implementation
//!
//! Checks the configuration file and, optionally, an input file without
//! performing any transfers.

use crate::config::load_config;
use crate::core::input::load_rows;
use crate::core::validate::validate_batch;
use clap::Args;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input file to validate alongside the configuration
    #[arg(short, long)]
    pub file: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match load_config(config_path) {
            Ok(_) => println!("Configuration OK: {config_path}"),
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        }

        if let Some(ref file) = self.file {
            let rows = match load_rows(file) {
                Ok(rows) => rows,
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(2);
                }
            };

            let validated = validate_batch(rows);
            let valid = validated.iter().filter(|r| r.is_valid).count();

            println!(
                "Input OK: {} rows, {} valid, {} invalid",
                validated.len(),
                valid,
                validated.len() - valid
            );
            for row in validated.iter().filter(|r| !r.is_valid) {
                println!(
                    "  invalid {} ({} tokens): {}",
                    row.address(),
                    row.tokens(),
                    row.error.as_deref().unwrap_or("invalid")
                );
            }
        }

        Ok(0)
    }
}
