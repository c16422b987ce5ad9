//! Path resolution utilities for dancefig
//!
//! Provides functions to locate the project root and construct paths
//! to catalog documents and persisted records.

use std::path::{Path, PathBuf};

use crate::errors::{DancefigError, Result};

/// Namespace version for persisted records
pub const STORE_NAMESPACE: &str = "v1";

/// Find the project root containing a .dancefig directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Arguments
/// * `start_cwd` - The directory to start searching from
///
/// # Returns
/// The canonical path of the project root
///
/// # Errors
/// * `ProjectNotFound` - If no ancestor contains .dancefig
pub fn find_project_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| DancefigError::ProjectNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if get_dancefig_dir(&current).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(DancefigError::ProjectNotFound(
                    "Could not find a .dancefig directory (run `dancefig init`)".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Check that a dance key is usable as a directory name and storage namespace.
///
/// # Arguments
/// * `dance` - Dance key such as `salsa_la`
///
/// # Errors
/// * `InvalidDance` - If the key is empty or contains anything but `[a-z0-9_-]`
pub fn validate_dance_key(dance: &str) -> Result<()> {
    let valid = !dance.is_empty()
        && dance
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !valid {
        return Err(DancefigError::InvalidDance(format!(
            "\"{}\" (expected lowercase letters, digits, '_' or '-')",
            dance
        )));
    }
    Ok(())
}

/// Logical key of a persisted record, e.g. `dancefig:v1:salsa_la:scratch`
pub fn storage_key(dance: &str, kind: &str) -> String {
    format!("dancefig:{}:{}:{}", STORE_NAMESPACE, dance, kind)
}

/// Get the path to the .dancefig directory.
pub fn get_dancefig_dir(root: &Path) -> PathBuf {
    root.join(".dancefig")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_dancefig_dir(root).join("config.json")
}

/// Get the path to the persisted records of one dance.
pub fn get_store_dir(root: &Path, dance: &str) -> PathBuf {
    get_dancefig_dir(root)
        .join("store")
        .join(STORE_NAMESPACE)
        .join(dance)
}

/// Get the path to a dance's autosaved scratch.
pub fn get_scratch_path(root: &Path, dance: &str) -> PathBuf {
    get_store_dir(root, dance).join("scratch.json")
}

/// Get the path to a dance's saved figures.
pub fn get_figures_path(root: &Path, dance: &str) -> PathBuf {
    get_store_dir(root, dance).join("figures.json")
}

/// Get the path to a dance's positions.json.
pub fn get_positions_path(catalog_dir: &Path, dance: &str) -> PathBuf {
    catalog_dir.join(dance).join("positions.json")
}

/// Get the path to a dance's steps.json.
pub fn get_steps_path(catalog_dir: &Path, dance: &str) -> PathBuf {
    catalog_dir.join(dance).join("steps.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".dancefig")).unwrap();
        temp
    }

    #[test]
    fn test_find_project_root_from_root() {
        let temp = setup_project();
        let root = find_project_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_project_root_from_subdir() {
        let temp = setup_project();
        let subdir = temp.path().join("data").join("salsa_la");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_project_root(&subdir).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_project_root_not_found() {
        let temp = TempDir::new().unwrap();

        let result = find_project_root(temp.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("dancefig init"));
    }

    #[test]
    fn test_validate_dance_key() {
        assert!(validate_dance_key("salsa_la").is_ok());
        assert!(validate_dance_key("west-coast-2").is_ok());
        assert!(validate_dance_key("").is_err());
        assert!(validate_dance_key("../etc").is_err());
        assert!(validate_dance_key("Salsa").is_err());
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key("salsa_la", "scratch"), "dancefig:v1:salsa_la:scratch");
        assert_eq!(storage_key("bachata", "figs"), "dancefig:v1:bachata:figs");
    }

    #[test]
    fn test_store_paths() {
        let root = PathBuf::from("/proj");
        assert_eq!(get_config_path(&root), PathBuf::from("/proj/.dancefig/config.json"));
        assert_eq!(
            get_scratch_path(&root, "bachata"),
            PathBuf::from("/proj/.dancefig/store/v1/bachata/scratch.json")
        );
        assert_eq!(
            get_figures_path(&root, "bachata"),
            PathBuf::from("/proj/.dancefig/store/v1/bachata/figures.json")
        );
    }

    #[test]
    fn test_catalog_paths() {
        let dir = PathBuf::from("/proj/data");
        assert_eq!(
            get_positions_path(&dir, "salsa_la"),
            PathBuf::from("/proj/data/salsa_la/positions.json")
        );
        assert_eq!(
            get_steps_path(&dir, "salsa_la"),
            PathBuf::from("/proj/data/salsa_la/steps.json")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }
}
