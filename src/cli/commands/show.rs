//! Show command - The current sequence and what can come next

use std::path::Path;

use serde::Serialize;

use crate::domain::format_dance_name;
use crate::errors::Result;
use crate::schemas::Step;
use crate::session::{Session, SessionStatus};

use super::{print_json, Workspace};

#[derive(Serialize)]
struct ShowOutput<'a> {
    status: SessionStatus,
    candidates: Vec<&'a Step>,
}

/// Text view of a session
pub fn render(session: &Session) -> String {
    let state = session.state();
    let catalog = session.catalog();
    let status = session.status();
    let mut lines = Vec::new();

    lines.push(format!(
        "{} · {} tiempos · current count: {}",
        format_dance_name(session.dance()),
        status.total_beats,
        status.current_beat
    ));
    if let Some(start) = state.start_position() {
        lines.push(format!("Start: {}", catalog.position_name(start)));
    }

    lines.push(String::new());
    lines.push(format!("Scratch ({}):", status.scratch_summary()));
    if state.is_empty() {
        lines.push("  Empty. Add steps to build a sequence.".to_string());
    }
    for (i, step) in state.scratch().iter().enumerate() {
        let half = step
            .half
            .map(|h| format!(" [{}]", h.range()))
            .unwrap_or_default();
        lines.push(format!(
            "  {}. {}{}  ({} → {})",
            i + 1,
            step.display_name(),
            half,
            catalog.position_name(&step.entrada),
            catalog.position_name(&step.salida)
        ));
    }

    lines.push(String::new());
    lines.push("Next:".to_string());
    let candidates = session.candidates();
    if candidates.is_empty() {
        lines.push("  No compatible steps.".to_string());
    }
    for step in candidates {
        lines.push(format!(
            "  {} [{}] → {}",
            step.display_name(),
            step.id,
            catalog.position_name(&step.salida)
        ));
    }

    lines.join("\n")
}

/// Print the session
pub fn run(cwd: Option<&Path>, dance: Option<&str>, json: bool) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let session = workspace.session();

    if json {
        return print_json(&ShowOutput {
            status: session.status(),
            candidates: session.candidates(),
        });
    }

    println!("{}", render(&session));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::schemas::{Half, Position};
    use crate::store::ScratchStore;
    use tempfile::TempDir;

    fn session(temp: &TempDir) -> Session {
        let catalog = Catalog::load(
            vec![Position::new("A", "Alfa"), Position::new("B", "Beta")],
            vec![
                Step::new("s1", "One", "A", "B").with_half(Half::Up),
                Step::new("s2", "Two", "B", "A").with_half(Half::Down),
            ],
        );
        Session::enter("bachata", catalog, ScratchStore::new(temp.path()))
    }

    #[test]
    fn test_render_empty() {
        let temp = TempDir::new().unwrap();
        let text = render(&session(&temp));

        assert!(text.starts_with("Bachata · 0 tiempos · current count: 1"));
        assert!(text.contains("Start: Alfa"));
        assert!(text.contains("Scratch (empty):"));
        assert!(text.contains("  One [s1] → Beta"));
    }

    #[test]
    fn test_render_after_step() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        session.add_step("s1").unwrap();

        let text = render(&session);
        assert!(text.contains("current count: 5"));
        assert!(text.contains("  1. One [1–4]  (Alfa → Beta)"));
        assert!(text.contains("  Two [s2] → Alfa"));
    }
}
