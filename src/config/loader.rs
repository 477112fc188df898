//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DisburseConfig;
use super::secret::secret_string;
use crate::domain::errors::DisburseError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DisburseConfig
/// 4. Applies environment variable overrides (DISBURSE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails,
/// a referenced environment variable is missing, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<DisburseConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DisburseError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DisburseError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DisburseConfig = toml::from_str(&contents)
        .map_err(|e| DisburseError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        DisburseError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Returns an error if a referenced
/// variable is not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid substitution pattern");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DisburseError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the DISBURSE_* prefix
///
/// Environment variables follow the pattern: DISBURSE_<SECTION>_<KEY>
/// For example: DISBURSE_GATEWAY_BASE_URL, DISBURSE_BATCH_INTER_ITEM_DELAY_MS
fn apply_env_overrides(config: &mut DisburseConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("DISBURSE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("DISBURSE_APPLICATION_ADMIN_ID") {
        config.application.admin_id = val;
    }
    if let Ok(val) = std::env::var("DISBURSE_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Gateway overrides
    if let Ok(val) = std::env::var("DISBURSE_GATEWAY_BASE_URL") {
        config.gateway.base_url = val;
    }
    if let Ok(val) = std::env::var("DISBURSE_GATEWAY_DISTRIBUTE_PATH") {
        config.gateway.distribute_path = val;
    }
    if let Ok(val) = std::env::var("DISBURSE_GATEWAY_API_TOKEN") {
        config.gateway.api_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("DISBURSE_GATEWAY_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.gateway.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("DISBURSE_GATEWAY_TLS_VERIFY") {
        config.gateway.tls_verify = val.parse().unwrap_or(true);
    }

    // Batch overrides
    if let Ok(val) = std::env::var("DISBURSE_BATCH_INTER_ITEM_DELAY_MS") {
        if let Ok(delay) = val.parse() {
            config.batch.inter_item_delay_ms = delay;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("DISBURSE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("DISBURSE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
