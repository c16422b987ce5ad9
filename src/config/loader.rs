//! Configuration loading with defaults

use std::path::{Path, PathBuf};

use crate::errors::{DancefigError, Result};
use crate::fs::{self, validate_dance_key};
use crate::schemas::Config;

/// Load configuration from the project, falling back to defaults.
///
/// If config.json exists, unspecified fields take their defaults.
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    if config.schema_version != 1 {
        return Err(DancefigError::ConfigError(format!(
            "unsupported schema_version {}",
            config.schema_version
        )));
    }
    Ok(config)
}

/// Absolute catalog directory for a project
pub fn resolve_catalog_dir(root: &Path, config: &Config) -> PathBuf {
    if config.catalog_dir.is_absolute() {
        config.catalog_dir.clone()
    } else {
        root.join(&config.catalog_dir)
    }
}

/// Pick the dance to work on: the explicit one, else the configured default.
///
/// # Errors
/// * `NoDanceSelected` - If neither is set
/// * `InvalidDance` - If the key is not a valid dance key
pub fn resolve_dance(explicit: Option<&str>, config: &Config) -> Result<String> {
    let dance = explicit
        .or(config.default_dance.as_deref())
        .ok_or(DancefigError::NoDanceSelected)?;
    validate_dance_key(dance)?;
    Ok(dance.to_string())
}
