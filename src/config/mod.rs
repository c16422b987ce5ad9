//! Project configuration

mod loader;

pub use loader::{load_config, resolve_catalog_dir, resolve_dance};
