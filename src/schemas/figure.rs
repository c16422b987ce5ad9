//! Figure schema - A named snapshot of a scratch sequence

use serde::{Deserialize, Serialize};

use crate::domain::BEATS_PER_STEP;

/// Current figure record version
pub const FIGURE_VERSION: u32 = 1;

fn default_figure_version() -> u32 {
    FIGURE_VERSION
}

/// A saved sequence of step ids for one dance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    /// Record version for forward compatibility
    #[serde(default = "default_figure_version", alias = "v")]
    pub version: u32,

    /// Unique identifier (UUID v7)
    pub id: String,

    /// Display name, not necessarily unique
    pub name: String,

    /// Epoch milliseconds
    #[serde(default)]
    pub created_at: i64,

    pub dance: String,

    #[serde(default)]
    pub start_position: Option<String>,

    /// Step ids in sequence order
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Figure {
    /// Duration in beats of the sequence as saved
    pub fn total_beats(&self) -> usize {
        self.steps.len() * BEATS_PER_STEP
    }
}
