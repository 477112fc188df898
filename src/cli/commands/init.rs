//! Init command implementation
//!
//! Writes a starter configuration file.

use clap::Args;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Disburse configuration

[application]
log_level = "info"
# Operator identifier recorded with every transfer
admin_id = ""
dry_run = false

[gateway]
base_url = "https://api.example.com"
distribute_path = "/distribute"
# api_token = "${DISBURSE_GATEWAY_API_TOKEN}"
timeout_seconds = 30
tls_verify = true

[batch]
# Delay between items; respects the transfer service's rate limits
inter_item_delay_ms = 2000

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "disburse.toml")]
    pub output: String,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let path = Path::new(&self.output);

        if path.exists() && !self.force {
            eprintln!("{} already exists (use --force to overwrite)", self.output);
            return Ok(2);
        }

        std::fs::write(path, CONFIG_TEMPLATE)?;
        println!("Wrote {}", self.output);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_as_valid_config() {
        use crate::config::DisburseConfig;

        let config: DisburseConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.batch.inter_item_delay_ms, 2000);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disburse.toml");
        std::fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disburse.toml");

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("[gateway]"));
    }
}
