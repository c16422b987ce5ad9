//! Autosave of the in-progress sequence, one record per dance

use std::path::PathBuf;

use chrono::Utc;

use crate::domain::{Catalog, SequenceState};
use crate::errors::Result;
use crate::fs::{get_scratch_path, read_json, storage_key, write_json};
use crate::schemas::{ScratchPayload, SCRATCH_VERSION};

/// Persists the scratch of each dance under the project's store directory
#[derive(Debug, Clone)]
pub struct ScratchStore {
    root: PathBuf,
}

impl ScratchStore {
    /// Store rooted at a project directory (the one holding .dancefig)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScratchStore { root: root.into() }
    }

    /// Write the state for a dance.
    ///
    /// Callers decide what a failure means; the in-memory state stays valid.
    ///
    /// # Arguments
    /// * `dance` - Dance key the record is stored under
    /// * `state` - State to persist
    ///
    /// # Errors
    /// * `Io` - If the record cannot be written
    pub fn save(&self, dance: &str, state: &SequenceState) -> Result<()> {
        let payload = ScratchPayload {
            version: SCRATCH_VERSION,
            dance: dance.to_string(),
            start_position: state.start_position().map(str::to_string),
            current_position: state.current_position().map(str::to_string),
            expected_half: state.expected_half(),
            step_ids: state.step_ids(),
            saved_at: Utc::now().timestamp_millis(),
        };
        write_json(&get_scratch_path(&self.root, dance), &payload)?;
        tracing::debug!(key = %storage_key(dance, "scratch"), steps = payload.step_ids.len(), "scratch saved");
        Ok(())
    }

    /// Restore the saved state for a dance against the current catalog.
    ///
    /// Step ids no longer in the catalog are dropped. Position and half are
    /// recomputed from what survives.
    ///
    /// # Arguments
    /// * `dance` - Dance key the record is stored under
    /// * `catalog` - Current catalog of that dance
    ///
    /// # Returns
    /// The restored state, or None when nothing usable is stored
    pub fn load(&self, dance: &str, catalog: &Catalog) -> Option<SequenceState> {
        let path = get_scratch_path(&self.root, dance);
        if !path.exists() {
            return None;
        }

        let payload: ScratchPayload = match read_json(&path) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(key = %storage_key(dance, "scratch"), error = %e, "could not read saved scratch");
                return None;
            }
        };

        if payload.version != SCRATCH_VERSION {
            tracing::warn!(
                key = %storage_key(dance, "scratch"),
                version = payload.version,
                "ignoring saved scratch with unsupported version"
            );
            return None;
        }

        let steps = catalog.resolve_steps(&payload.step_ids);
        if steps.len() < payload.step_ids.len() {
            tracing::warn!(
                dropped = payload.step_ids.len() - steps.len(),
                "saved scratch references steps no longer in the catalog"
            );
        }

        let start = payload.start_position.or(payload.current_position);
        Some(SequenceState::restore(start, steps))
    }
}
