//! Configuration file support for mvn-debt.
//!
//! Provides YAML-based configuration through `mvn-debt.config.yml` files,
//! including data structures, file loading, and validation. CLI flags
//! always take precedence over config file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "mvn-debt.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_artifacts: Option<Vec<String>>,
    pub label_threshold: Option<i64>,
    pub fail_threshold: Option<i64>,
    pub registry_url: Option<String>,
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
    if let Some(threshold) = config.label_threshold {
        if threshold < 0 {
            bail!(
                "Invalid config: label_threshold must not be negative.\n\n\
                 💡 Hint: Thresholds are whole days, e.g. 180."
            );
        }
    }

    if let Some(threshold) = config.fail_threshold {
        if threshold < 0 {
            bail!(
                "Invalid config: fail_threshold must not be negative.\n\n\
                 💡 Hint: Thresholds are whole days, e.g. 365."
            );
        }
    }

    if let Some(ref url) = config.registry_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(
                "Invalid config: registry_url must start with http:// or https://.\n\n\
                 💡 Hint: e.g. https://search.maven.org/solrsearch/select"
            );
        }
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
