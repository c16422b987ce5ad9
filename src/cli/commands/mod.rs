//! CLI command implementations

pub mod figures;
pub mod init;
pub mod sequence;
pub mod share;
pub mod show;
pub mod steps;
pub mod validate;

use std::path::{Path, PathBuf};

use crate::catalog::load_catalog_or_empty;
use crate::config::{load_config, resolve_catalog_dir, resolve_dance};
use crate::errors::Result;
use crate::fs::{find_project_root, resolve_cwd};
use crate::schemas::Config;
use crate::session::Session;
use crate::store::{FigureLibrary, ScratchStore};

/// Resolved project, configuration and dance for one command
#[derive(Debug)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub dance: String,
}

impl Workspace {
    /// Locate the project from `cwd` and pick the dance
    pub fn open(cwd: Option<&Path>, dance: Option<&str>) -> Result<Self> {
        let root = find_project_root(&resolve_cwd(cwd))?;
        let config = load_config(&root)?;
        let dance = resolve_dance(dance, &config)?;
        tracing::debug!(root = %root.display(), dance = %dance, "workspace opened");
        Ok(Workspace { root, config, dance })
    }

    /// Enter the dance: load its catalog and restore its scratch
    pub fn session(&self) -> Session {
        let catalog_dir = resolve_catalog_dir(&self.root, &self.config);
        let catalog = load_catalog_or_empty(&catalog_dir, &self.dance);
        Session::enter(self.dance.clone(), catalog, ScratchStore::new(&self.root))
    }

    pub fn figures(&self) -> FigureLibrary {
        FigureLibrary::new(&self.root)
    }
}

/// Print a value as pretty JSON
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| crate::errors::DancefigError::InvalidJson(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
