//! Human-readable labels derived from dance keys and sequences

use chrono::NaiveDateTime;

/// Pretty label for a dance key: `salsa_la` becomes `Salsa LA`.
pub fn format_dance_name(dance: &str) -> String {
    if dance.is_empty() {
        return String::new();
    }

    dance
        .split('_')
        .map(|word| {
            if dance == "salsa_la" && word == "la" {
                return "LA".to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Default figure name, e.g. `Salsa LA – 24 tiempos – 01/01 18:32`.
pub fn auto_figure_name(dance_label: &str, total_beats: usize, now: &NaiveDateTime) -> String {
    format!(
        "{} – {} tiempos – {}",
        dance_label,
        total_beats,
        now.format("%d/%m %H:%M")
    )
}
