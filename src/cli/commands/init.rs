//! Init command - Create .dancefig with a default config.json

use std::path::Path;

use crate::errors::Result;
use crate::fs::{get_config_path, resolve_cwd, validate_dance_key, write_config};
use crate::schemas::Config;

/// Create the project directory and its config
pub fn run(cwd: Option<&Path>, dance: Option<&str>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config_path = get_config_path(&root);

    if config_path.exists() && !force {
        println!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(dance) = dance {
        validate_dance_key(dance)?;
    }

    let config = Config {
        default_dance: dance.map(str::to_string),
        ..Config::default()
    };
    write_config(&root, &config)?;

    println!("Initialized {}", config_path.display());
    Ok(())
}
