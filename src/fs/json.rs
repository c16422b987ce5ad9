//! JSON file operations
//!
//! Provides functions to read and write JSON files through serde.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{DancefigError, Result};
use crate::schemas::Config;

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contents do not match the expected type
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DancefigError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            DancefigError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        DancefigError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Writes to a temp file and renames it into place so readers never see a
/// partial document.
///
/// # Arguments
/// * `path` - Path to the JSON file
/// * `data` - The value to serialize and write
///
/// # Errors
/// * `Io` - If the file cannot be written or renamed into place
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| DancefigError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file for a project.
///
/// # Arguments
/// * `root` - Path to the project root
///
/// # Returns
/// The parsed Config, or the default if the file doesn't exist
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Write the config.json file for a project.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}
