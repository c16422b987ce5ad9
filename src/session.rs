//! Dance session: the catalog and sequence of the dance being worked on
//!
//! Mutations return data and autosave the scratch; printing is left to the
//! caller.

use serde::Serialize;

use crate::domain::{
    find_candidates, validate_catalog, Catalog, IntegrityIssue, SequenceState,
};
use crate::errors::{DancefigError, Result};
use crate::schemas::{Figure, Half, Step};
use crate::share::format_share_text;
use crate::store::{FigureLibrary, ScratchStore};

/// Summary of the sequence for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub dance: String,
    pub start_position: Option<String>,
    pub current_position: Option<String>,
    pub expected_half: Half,
    pub current_beat: u32,
    pub total_beats: usize,
    pub step_ids: Vec<String>,
}

impl SessionStatus {
    /// `empty`, or `<n> blocks · <beats> tiempos`
    pub fn scratch_summary(&self) -> String {
        if self.step_ids.is_empty() {
            return "empty".to_string();
        }
        format!("{} blocks · {} tiempos", self.step_ids.len(), self.total_beats)
    }
}

/// The active dance with its catalog and in-progress sequence
#[derive(Debug)]
pub struct Session {
    dance: String,
    catalog: Catalog,
    issues: Vec<IntegrityIssue>,
    state: SequenceState,
    scratch_store: ScratchStore,
}

impl Session {
    /// Enter a dance.
    ///
    /// The start position defaults to the first catalog position; a saved
    /// scratch, when one can be read, replaces that default.
    pub fn enter(dance: impl Into<String>, catalog: Catalog, scratch_store: ScratchStore) -> Self {
        let dance = dance.into();
        let issues = validate_catalog(&catalog);
        if !issues.is_empty() {
            tracing::warn!(dance = %dance, count = issues.len(), "steps reference missing positions");
        }

        let default_start = catalog.first_position().map(|p| p.id.clone());
        let state = scratch_store
            .load(&dance, &catalog)
            .unwrap_or_else(|| SequenceState::new(default_start));

        Session {
            dance,
            catalog,
            issues,
            state,
            scratch_store,
        }
    }

    pub fn dance(&self) -> &str {
        &self.dance
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Integrity problems found when the dance was entered
    pub fn issues(&self) -> &[IntegrityIssue] {
        &self.issues
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            dance: self.dance.clone(),
            start_position: self.state.start_position().map(str::to_string),
            current_position: self.state.current_position().map(str::to_string),
            expected_half: self.state.expected_half(),
            current_beat: self.state.current_beat(),
            total_beats: self.state.total_beats(),
            step_ids: self.state.step_ids(),
        }
    }

    /// Steps that may be added next
    pub fn candidates(&self) -> Vec<&Step> {
        find_candidates(&self.catalog, &self.state)
    }

    /// Choose a new start position. The scratch is emptied.
    ///
    /// # Errors
    /// * `UnknownPosition` - If the catalog has no such position
    pub fn set_start_position(&mut self, position_id: &str) -> Result<()> {
        if !self.catalog.has_position(position_id) {
            return Err(DancefigError::UnknownPosition(position_id.to_string()));
        }
        self.state.reset(Some(position_id.to_string()));
        tracing::debug!(start = position_id, "start position changed");
        self.autosave();
        Ok(())
    }

    /// Add a step, provided it is currently a candidate.
    ///
    /// # Errors
    /// * `NotACandidate` - If the step is unknown or cannot follow the current state
    pub fn add_step(&mut self, step_id: &str) -> Result<&Step> {
        let step = self
            .candidates()
            .into_iter()
            .find(|s| s.id == step_id)
            .cloned()
            .ok_or_else(|| DancefigError::NotACandidate(step_id.to_string()))?;

        tracing::debug!(step = %step.id, "step appended");
        self.state.append(step);
        self.autosave();
        Ok(&self.state.scratch()[self.state.len() - 1])
    }

    /// Remove the last step, if any
    pub fn undo(&mut self) -> Option<Step> {
        let removed = self.state.undo();
        if removed.is_some() {
            self.autosave();
        }
        removed
    }

    /// Empty the scratch, keeping the start position
    pub fn clear(&mut self) {
        self.state.clear();
        self.autosave();
    }

    /// Save the current scratch as a figure
    pub fn save_figure(&self, library: &FigureLibrary, name: Option<&str>) -> Result<Figure> {
        library.save(&self.dance, name, &self.state)
    }

    /// Replace the scratch with a saved figure
    pub fn load_figure(&mut self, library: &FigureLibrary, figure_id: &str) -> Result<()> {
        self.state = library.load(&self.dance, figure_id, &self.catalog)?;
        self.autosave();
        Ok(())
    }

    /// Delete a saved figure of this dance
    pub fn delete_figure(&self, library: &FigureLibrary, figure_id: &str) -> Result<Figure> {
        library.delete(&self.dance, figure_id)
    }

    /// Text export of the current sequence
    pub fn share_text(&self) -> String {
        format_share_text(&self.dance, &self.state, &self.catalog)
    }

    fn autosave(&self) {
        if let Err(e) = self.scratch_store.save(&self.dance, &self.state) {
            tracing::error!(dance = %self.dance, error = %e, "could not save scratch");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Position;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        Catalog::load(
            vec![Position::new("A", "Alfa"), Position::new("B", "Beta")],
            vec![
                Step::new("s1", "One", "A", "B").with_half(Half::Up),
                Step::new("s2", "Two", "B", "A").with_half(Half::Down),
                Step::new("bad", "Bad", "X", "A"),
            ],
        )
    }

    fn enter(temp: &TempDir) -> Session {
        Session::enter("salsa_la", catalog(), ScratchStore::new(temp.path()))
    }

    #[test]
    fn test_enter_defaults_to_first_position() {
        let temp = TempDir::new().unwrap();
        let session = enter(&temp);

        assert_eq!(session.state().start_position(), Some("A"));
        assert_eq!(session.issues().len(), 1);
        assert_eq!(session.candidates().len(), 1);
    }

    #[test]
    fn test_enter_with_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let session = Session::enter("tango", Catalog::empty(), ScratchStore::new(temp.path()));

        assert_eq!(session.state().current_position(), None);
        assert!(session.candidates().is_empty());
        assert!(session.issues().is_empty());
    }

    #[test]
    fn test_add_step_rejects_non_candidates() {
        let temp = TempDir::new().unwrap();
        let mut session = enter(&temp);

        let result = session.add_step("s2");
        assert!(matches!(result.unwrap_err(), DancefigError::NotACandidate(_)));
        assert!(session.state().is_empty());

        assert!(session.add_step("missing").is_err());
    }

    #[test]
    fn test_mutations_autosave() {
        let temp = TempDir::new().unwrap();
        let mut session = enter(&temp);
        session.add_step("s1").unwrap();
        session.add_step("s2").unwrap();
        session.undo();

        let reopened = enter(&temp);
        assert_eq!(reopened.state().step_ids(), vec!["s1"]);
        assert_eq!(reopened.state().current_position(), Some("B"));
        assert_eq!(reopened.state().expected_half(), Half::Down);
    }

    #[test]
    fn test_set_start_position_resets() {
        let temp = TempDir::new().unwrap();
        let mut session = enter(&temp);
        session.add_step("s1").unwrap();

        session.set_start_position("B").unwrap();
        assert!(session.state().is_empty());
        assert_eq!(session.state().current_position(), Some("B"));

        assert!(matches!(
            session.set_start_position("Z").unwrap_err(),
            DancefigError::UnknownPosition(_)
        ));
        assert_eq!(session.state().start_position(), Some("B"));

        let reopened = enter(&temp);
        assert_eq!(reopened.state().start_position(), Some("B"));
    }

    #[test]
    fn test_clear_and_status() {
        let temp = TempDir::new().unwrap();
        let mut session = enter(&temp);
        session.add_step("s1").unwrap();

        let status = session.status();
        assert_eq!(status.total_beats, 4);
        assert_eq!(status.current_beat, 5);
        assert_eq!(status.scratch_summary(), "1 blocks · 4 tiempos");

        session.clear();
        assert_eq!(session.status().scratch_summary(), "empty");
        assert_eq!(session.status().current_position.as_deref(), Some("A"));
    }

    #[test]
    fn test_figure_round_trip_through_session() {
        let temp = TempDir::new().unwrap();
        let library = FigureLibrary::new(temp.path());
        let mut session = enter(&temp);

        assert!(matches!(
            session.save_figure(&library, None).unwrap_err(),
            DancefigError::NothingToSave
        ));

        session.add_step("s1").unwrap();
        session.add_step("s2").unwrap();
        let figure = session.save_figure(&library, Some("Loop")).unwrap();

        session.clear();
        session.load_figure(&library, &figure.id).unwrap();
        assert_eq!(session.state().step_ids(), vec!["s1", "s2"]);

        let reopened = enter(&temp);
        assert_eq!(reopened.state().step_ids(), vec!["s1", "s2"]);

        session.delete_figure(&library, &figure.id).unwrap();
        assert!(library.list("salsa_la").is_empty());
    }

    #[test]
    fn test_share_text() {
        let temp = TempDir::new().unwrap();
        let mut session = enter(&temp);
        session.add_step("s1").unwrap();

        assert_eq!(
            session.share_text(),
            "Salsa LA – 4 tiempos\nInicio: Alfa\n\n1–4  One  (Alfa → Beta)"
        );
    }
}
