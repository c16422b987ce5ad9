//! Plain-text rendering of a sequence for copying or sharing

use crate::domain::{format_dance_name, Catalog, SequenceState};

/// Placeholder line for an empty scratch
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Render the sequence as text.
///
/// ```text
/// Salsa LA – 8 tiempos
/// Inicio: Abierta
///
/// 1–4  Básico  (Abierta → Cerrada)
/// 5–8  Vuelta  (Cerrada → Abierta)
/// ```
///
/// Identical inputs always give identical output. No trailing newline.
pub fn format_share_text(dance: &str, state: &SequenceState, catalog: &Catalog) -> String {
    let mut lines = vec![format!(
        "{} – {} tiempos",
        format_dance_name(dance),
        state.total_beats()
    )];

    if let Some(start) = state.start_position().filter(|s| !s.is_empty()) {
        lines.push(format!("Inicio: {}", catalog.position_name(start)));
    }
    lines.push(String::new());

    if state.is_empty() {
        lines.push(EMPTY_PLACEHOLDER.to_string());
    }
    for step in state.scratch() {
        lines.push(format!(
            "{}  {}  ({} → {})",
            step.effective_half().range(),
            step.display_name(),
            catalog.position_name(&step.entrada),
            catalog.position_name(&step.salida)
        ));
    }

    lines.join("\n")
}
