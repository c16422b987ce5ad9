//! Dancefig - Build dance figures by chaining steps through shared positions
//!
//! This library provides the core functionality for the dancefig CLI, including:
//! - Schema definitions for positions, steps, figures and persisted scratch
//! - Domain logic for the catalog, the sequence state machine and the candidate rule
//! - File system utilities for reading/writing JSON
//! - Local persistence of the scratch and the figure library
//! - Plain-text export of a sequence

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod session;
pub mod share;
pub mod store;

// Re-export commonly used types
pub use domain::{Catalog, IntegrityIssue, SequenceState};
pub use errors::{DancefigError, Result};
pub use schemas::{Config, Figure, Half, Position, Step};
pub use session::Session;
pub use store::{FigureLibrary, ScratchStore};
