//! Config schema - Configuration for dancefig

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for dancefig
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Directory holding `<dance>/positions.json` and `<dance>/steps.json`,
    /// relative to the project root unless absolute
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,

    /// Dance used when --dance is not given
    #[serde(default)]
    pub default_dance: Option<String>,

    /// Maximum integrity issues listed before the rest are summarised
    #[serde(default = "default_issue_preview_limit")]
    pub issue_preview_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_issue_preview_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            catalog_dir: default_catalog_dir(),
            default_dance: None,
            issue_preview_limit: 10,
        }
    }
}
