//! Catalog loading from `<catalog_dir>/<dance>/{positions,steps}.json`

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Catalog;
use crate::errors::Result;
use crate::fs::{get_positions_path, get_steps_path, read_json};
use crate::schemas::{Position, Step};

/// Read and sort the catalog of one dance.
///
/// Each document must be a JSON array. Entries are decoded one by one; an
/// entry that does not decode (no id, a half other than "up"/"down") is
/// skipped with a warning and the rest of the catalog is kept. Dangling
/// position references are not an error here, see `validate_catalog`.
///
/// # Arguments
/// * `catalog_dir` - Directory holding one subdirectory per dance
/// * `dance` - Dance key
///
/// # Returns
/// The catalog, sorted by name
///
/// # Errors
/// * `FileNotFound` - If either document is missing
/// * `InvalidJson` - If either document is not a JSON array
pub fn load_catalog(catalog_dir: &Path, dance: &str) -> Result<Catalog> {
    let positions: Vec<Position> = decode_entries(
        dance,
        "position",
        read_json(&get_positions_path(catalog_dir, dance))?,
    );
    let steps: Vec<Step> = decode_entries(
        dance,
        "step",
        read_json(&get_steps_path(catalog_dir, dance))?,
    );

    tracing::debug!(
        dance,
        positions = positions.len(),
        steps = steps.len(),
        "catalog loaded"
    );
    Ok(Catalog::load(positions, steps))
}

fn decode_entries<T: DeserializeOwned>(dance: &str, kind: &str, raw: Vec<Value>) -> Vec<T> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let id = value.get("id").and_then(Value::as_str).unwrap_or("?").to_string();
            match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(dance, kind, index, id = %id, error = %e, "skipping catalog entry");
                    None
                }
            }
        })
        .collect()
}

/// Like [`load_catalog`], but a missing or broken catalog becomes an empty one.
///
/// The failure is logged and the session carries on with nothing to offer.
pub fn load_catalog_or_empty(catalog_dir: &Path, dance: &str) -> Catalog {
    match load_catalog(catalog_dir, dance) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(dance, error = %e, "no catalog available for this dance yet");
            Catalog::empty()
        }
    }
}
