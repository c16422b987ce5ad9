//! Catalog input for one dance

mod loader;

pub use loader::{load_catalog, load_catalog_or_empty};
