//! File system utilities for dancefig
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, write_config, write_json};
pub use paths::{
    find_project_root, get_config_path, get_dancefig_dir, get_figures_path, get_positions_path,
    get_scratch_path, get_steps_path, get_store_dir, resolve_cwd, storage_key, validate_dance_key,
    STORE_NAMESPACE,
};
