//! Catalog schema - Positions and steps as they appear in positions.json / steps.json

use serde::{Deserialize, Serialize};

/// Which half of an eight-count phrase a step occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// Counts 1–4
    #[default]
    Up,
    /// Counts 5–8
    Down,
}

impl Half {
    /// Resolve an optional half. Steps without one are treated as "up".
    ///
    /// Every call site that reads a step's half goes through here.
    pub fn normalize(half: Option<Half>) -> Half {
        half.unwrap_or_default()
    }

    /// The half that must come next
    pub fn alternate(self) -> Half {
        match self {
            Half::Up => Half::Down,
            Half::Down => Half::Up,
        }
    }

    /// Nominal count this half starts on
    pub fn beat(self) -> u32 {
        match self {
            Half::Up => 1,
            Half::Down => 5,
        }
    }

    /// Count range label
    pub fn range(self) -> &'static str {
        match self {
            Half::Up => "1–4",
            Half::Down => "5–8",
        }
    }
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Half::Up => write!(f, "up"),
            Half::Down => write!(f, "down"),
        }
    }
}

/// A named body configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Unique within a dance
    pub id: String,

    #[serde(default)]
    pub name: String,
}

impl Position {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Position {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Name, or the id when the name is blank
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// A named move from one position to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Unique within a dance
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Position required before the step (empty when absent, reported by validation)
    #[serde(default)]
    pub entrada: String,

    /// Position reached after the step
    #[serde(default)]
    pub salida: String,

    /// Half of the phrase the step occupies (absent means "up")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half: Option<Half>,

    /// Free-text timing hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,

    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

impl Step {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entrada: impl Into<String>,
        salida: impl Into<String>,
    ) -> Self {
        Step {
            id: id.into(),
            name: name.into(),
            entrada: entrada.into(),
            salida: salida.into(),
            half: None,
            timing: None,
            notas: None,
        }
    }

    /// Return a new Step with the given half
    pub fn with_half(mut self, half: Half) -> Self {
        self.half = Some(half);
        self
    }

    /// Return a new Step with a timing hint
    pub fn with_timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = Some(timing.into());
        self
    }

    /// Return a new Step with notes
    pub fn with_notas(mut self, notas: impl Into<String>) -> Self {
        self.notas = Some(notas.into());
        self
    }

    /// The step's half with the "absent means up" rule applied
    pub fn effective_half(&self) -> Half {
        Half::normalize(self.half)
    }

    /// Name, or the id when the name is blank
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
