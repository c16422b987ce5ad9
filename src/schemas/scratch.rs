//! Scratch schema - Autosaved in-progress sequence for one dance

use serde::{Deserialize, Serialize};

use super::Half;

/// Current payload version
pub const SCRATCH_VERSION: u32 = 1;

/// Persisted form of a sequence state.
///
/// `current_position` and `expected_half` are written for readers that want
/// them, but restoring recomputes both from the resolved step list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScratchPayload {
    /// Payload version; anything other than SCRATCH_VERSION is ignored on load
    #[serde(alias = "v")]
    pub version: u32,

    pub dance: String,

    #[serde(default)]
    pub start_position: Option<String>,

    #[serde(default)]
    pub current_position: Option<String>,

    #[serde(default)]
    pub expected_half: Half,

    /// Step ids in scratch order
    #[serde(default, alias = "scratchIds")]
    pub step_ids: Vec<String>,

    /// Epoch milliseconds
    #[serde(default)]
    pub saved_at: i64,
}
