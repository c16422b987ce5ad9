//! Schema types for dancefig
//!
//! Field names follow the JSON documents the catalog and the store exchange.

mod catalog;
mod config;
mod figure;
mod scratch;

pub use catalog::{Half, Position, Step};
pub use config::Config;
pub use figure::{Figure, FIGURE_VERSION};
pub use scratch::{ScratchPayload, SCRATCH_VERSION};
