//! Configuration file support for reactor-view.
//!
//! Provides YAML-based defaults through `reactor-view.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! options always take precedence over values loaded here.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::ViewError;
use crate::shared::security::check_single_path_segment;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "reactor-view.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<String>,
    pub exclude_packaging: Option<Vec<String>>,
    pub only_leaf_projects: Option<bool>,
    pub view_name: Option<String>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured format, already checked by [`load_config_from_path`].
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|format| OutputFormat::from_str(format).ok())
    }
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

    validate_config(path, &config)?;
    warn_unknown_fields(path, &config);

    tracing::debug!("Loaded config file {}", path.display());
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
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    let invalid = |reason: String, hint: &str| ViewError::ConfigError {
        path: path.to_path_buf(),
        reason,
        hint: hint.to_string(),
    };

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format)
            .map_err(|e| invalid(e, "Set 'format' to either pom or json."))?;
    }

    if let Some(ref output_dir) = config.output_dir {
        if output_dir.trim().is_empty() {
            return Err(invalid(
                "output_dir must not be empty".to_string(),
                "Remove the key to use the default 'project-views' directory.",
            )
            .into());
        }
    }

    if let Some(ref view_name) = config.view_name {
        check_single_path_segment(view_name).map_err(|reason| {
            invalid(
                format!("view_name {}", reason),
                "Use a plain directory name; set output_dir to move views elsewhere.",
            )
        })?;
    }

    if let Some(ref packaging_types) = config.exclude_packaging {
        for (i, packaging) in packaging_types.iter().enumerate() {
            if packaging.trim().is_empty() {
                return Err(invalid(
                    format!("exclude_packaging[{}] must not be empty", i),
                    "Each entry must name a packaging type (e.g., \"pom\").",
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(path: &Path, config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::debug!("Ignoring unknown field '{}' in {}", key, path.display());
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
