//! Configuration file support for neo-watch.
//!
//! Provides YAML-based configuration through `neo-watch.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use neo_watch::application::dto::OutputFormat;
use neo_watch::neo_tracking::domain::{SortKey, SortOrder, MAX_HORIZON_DAYS};
use neo_watch::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "neo-watch.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    pub hazardous_only: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_span_days: Option<u32>,
    pub past_limit_days: Option<u32>,
    pub future_limit_days: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref api_key) = config.api_key {
        if api_key.trim().is_empty() {
            bail!(
                "Invalid config: api_key must not be empty.\n\n\
                 💡 Hint: Remove the field to fall back to NASA_API_KEY or DEMO_KEY."
            );
        }
    }

    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be greater than 0.");
    }

    for (field, days) in [
        ("past_limit_days", config.past_limit_days),
        ("future_limit_days", config.future_limit_days),
    ] {
        if days.is_some_and(|days| days > MAX_HORIZON_DAYS) {
            bail!(
                "Invalid config: {} must be at most {}.\n\n\
                 💡 Hint: The horizon is counted in days on either side of today.",
                field,
                MAX_HORIZON_DAYS
            );
        }
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    if let Some(ref sort_by) = config.sort_by {
        SortKey::from_str(sort_by).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    if let Some(ref sort_order) = config.sort_order {
        SortOrder::from_str(sort_order).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
