//! Run command implementation
//!
//! Executes a batch distribution from an input file. While a run is in
//! progress, Ctrl+C / SIGTERM request a graceful stop (the item in flight
//! finishes, the remainder is reported as remaining); on Unix, SIGUSR1
//! pauses at the next item boundary and SIGUSR2 resumes.

use crate::adapters::gateway::HttpTransferGateway;
use crate::config::load_config;
use crate::core::batch::{BatchConfig, BatchControl, BatchOrchestrator, LogObserver, RunMode};
use crate::core::input::load_rows;
use crate::core::validate::{validate_batch, validate_reason};
use crate::domain::ValidatedRow;
use clap::Args;
use std::io::Write;
use std::sync::Arc;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input file: column A = address, column B = token amount, row 1 a header
    #[arg(short, long)]
    pub file: String,

    /// Justification recorded with every transfer (min 5 characters)
    #[arg(short, long)]
    pub reason: String,

    /// Operator identifier (overrides application.admin_id)
    #[arg(long)]
    pub admin: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Validate rows without performing transfers
    #[arg(long)]
    pub dry_run: bool,

    /// Override the inter-item delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        if let Some(delay) = self.delay_ms {
            config.batch.inter_item_delay_ms = delay;
        }

        let admin_id = self
            .admin
            .clone()
            .unwrap_or_else(|| config.application.admin_id.clone());
        if admin_id.is_empty() {
            eprintln!("No operator id: set application.admin_id or pass --admin");
            return Ok(2);
        }

        if let Err(e) = validate_reason(&self.reason) {
            eprintln!("{e}");
            return Ok(2);
        }

        let raw_rows = match load_rows(&self.file) {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let validated = validate_batch(raw_rows);
        let valid_count = validated.iter().filter(|r| r.is_valid).count();

        print_validation_report(&validated);

        if valid_count == 0 {
            eprintln!("No valid rows to distribute");
            return Ok(2);
        }

        if self.dry_run || config.application.dry_run {
            println!("Dry run - no transfers performed");
            return Ok(0);
        }

        if !self.yes && !confirm(valid_count, &self.reason)? {
            println!("Aborted");
            return Ok(0);
        }

        let gateway = Arc::new(HttpTransferGateway::new(config.gateway.clone()));
        let orchestrator = BatchOrchestrator::new(
            gateway,
            BatchConfig::with_delay_ms(config.batch.inter_item_delay_ms),
        )
        .with_observer(Arc::new(LogObserver));

        spawn_signal_handler(orchestrator.control());

        let state = orchestrator.run(&validated, &self.reason, &admin_id).await?;

        println!(
            "{}: {} completed, {} failed, {} remaining",
            if state.mode == RunMode::Stopped {
                "Stopped"
            } else {
                "Completed"
            },
            state.completed,
            state.failed,
            state.remaining()
        );
        for result in &state.results {
            match (result.success, result.transaction_hash.as_deref()) {
                (true, Some(hash)) => println!("  ok   {} {} -> {}", result.address, result.tokens, hash),
                (true, None) => println!("  ok   {} {}", result.address, result.tokens),
                (false, _) => println!(
                    "  FAIL {} {} ({})",
                    result.address,
                    result.tokens,
                    result.error.as_deref().unwrap_or("unknown")
                ),
            }
        }

        Ok(if state.failed == 0 { 0 } else { 1 })
    }
}

fn print_validation_report(validated: &[ValidatedRow]) {
    let invalid: Vec<&ValidatedRow> = validated.iter().filter(|r| !r.is_valid).collect();

    println!(
        "Validated {} rows: {} valid, {} invalid",
        validated.len(),
        validated.len() - invalid.len(),
        invalid.len()
    );
    for row in invalid {
        println!(
            "  skipped {} ({} tokens): {}",
            row.address(),
            row.tokens(),
            row.error.as_deref().unwrap_or("invalid")
        );
    }
}

fn confirm(valid_count: usize, reason: &str) -> anyhow::Result<bool> {
    println!("About to distribute to {valid_count} recipients");
    println!("  Reason: {reason}");
    print!("Proceed? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Map process signals onto batch control signals
fn spawn_signal_handler(control: BatchControl) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm =
                signal(SignalKind::terminate()).expect("Failed to create SIGTERM handler");
            let mut sigusr1 =
                signal(SignalKind::user_defined1()).expect("Failed to create SIGUSR1 handler");
            let mut sigusr2 =
                signal(SignalKind::user_defined2()).expect("Failed to create SIGUSR2 handler");

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Received SIGINT, stopping after the current item");
                        println!("\nStop requested, finishing the current item...");
                        control.stop();
                    }
                    _ = sigterm.recv() => {
                        tracing::info!("Received SIGTERM, stopping after the current item");
                        control.stop();
                    }
                    _ = sigusr1.recv() => {
                        tracing::info!("Received SIGUSR1, pausing at the next item boundary");
                        control.pause();
                    }
                    _ = sigusr2.recv() => {
                        tracing::info!("Received SIGUSR2, resuming");
                        control.resume();
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received Ctrl+C, stopping after the current item");
                control.stop();
            }
        }
    });
}
