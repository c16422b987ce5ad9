//! Library of saved figures, one collection per dance

use std::path::PathBuf;

use chrono::{Local, Utc};
use uuid::Uuid;

use crate::domain::{auto_figure_name, format_dance_name, Catalog, SequenceState};
use crate::errors::{DancefigError, Result};
use crate::fs::{get_figures_path, read_json, storage_key, write_json};
use crate::schemas::{Figure, FIGURE_VERSION};

/// Persisted figures of every dance in a project
#[derive(Debug, Clone)]
pub struct FigureLibrary {
    root: PathBuf,
}

impl FigureLibrary {
    /// Library rooted at a project directory (the one holding .dancefig)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FigureLibrary { root: root.into() }
    }

    /// Raw stored collection. Unreadable data counts as empty.
    fn read_all(&self, dance: &str) -> Vec<Figure> {
        let path = get_figures_path(&self.root, dance);
        if !path.exists() {
            return Vec::new();
        }
        match read_json(&path) {
            Ok(figures) => figures,
            Err(e) => {
                tracing::error!(key = %storage_key(dance, "figs"), error = %e, "could not read saved figures");
                Vec::new()
            }
        }
    }

    fn write_all(&self, dance: &str, figures: &[Figure]) -> Result<()> {
        write_json(&get_figures_path(&self.root, dance), &figures)
    }

    /// Figures for a dance, newest first
    pub fn list(&self, dance: &str) -> Vec<Figure> {
        let mut figures: Vec<Figure> = self
            .read_all(dance)
            .into_iter()
            .filter(|f| {
                if f.version != FIGURE_VERSION {
                    tracing::warn!(id = %f.id, version = f.version, "skipping figure with unsupported version");
                    return false;
                }
                true
            })
            .collect();
        figures.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        figures
    }

    /// Look up one figure by id
    pub fn get(&self, dance: &str, figure_id: &str) -> Option<Figure> {
        self.list(dance).into_iter().find(|f| f.id == figure_id)
    }

    /// Snapshot the state as a new figure.
    ///
    /// A blank or missing name is replaced by the automatic one.
    ///
    /// # Arguments
    /// * `dance` - Dance key the figure belongs to
    /// * `name` - Optional display name
    /// * `state` - State to snapshot
    ///
    /// # Returns
    /// The stored figure, with its new id
    ///
    /// # Errors
    /// * `NothingToSave` - If the scratch is empty; nothing is written
    pub fn save(&self, dance: &str, name: Option<&str>, state: &SequenceState) -> Result<Figure> {
        if state.is_empty() {
            return Err(DancefigError::NothingToSave);
        }

        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => auto_figure_name(
                &format_dance_name(dance),
                state.total_beats(),
                &Local::now().naive_local(),
            ),
        };

        let figure = Figure {
            version: FIGURE_VERSION,
            id: Uuid::now_v7().to_string(),
            name,
            created_at: Utc::now().timestamp_millis(),
            dance: dance.to_string(),
            start_position: state.start_position().map(str::to_string),
            steps: state.step_ids(),
        };

        let mut figures = self.read_all(dance);
        figures.insert(0, figure.clone());
        self.write_all(dance, &figures)?;

        tracing::info!(id = %figure.id, name = %figure.name, "figure saved");
        Ok(figure)
    }

    /// Rebuild a sequence state from a saved figure.
    ///
    /// Steps no longer in the catalog are dropped.
    ///
    /// # Arguments
    /// * `dance` - Dance key the figure belongs to
    /// * `figure_id` - Id of the saved figure
    /// * `catalog` - Current catalog of that dance
    ///
    /// # Errors
    /// * `FigureNotFound` - If no figure has that id
    pub fn load(&self, dance: &str, figure_id: &str, catalog: &Catalog) -> Result<SequenceState> {
        let figure = self
            .get(dance, figure_id)
            .ok_or_else(|| DancefigError::FigureNotFound(figure_id.to_string()))?;

        let steps = catalog.resolve_steps(&figure.steps);
        if steps.len() < figure.steps.len() {
            tracing::warn!(
                id = %figure.id,
                dropped = figure.steps.len() - steps.len(),
                "figure references steps no longer in the catalog"
            );
        }
        Ok(SequenceState::restore(figure.start_position, steps))
    }

    /// Remove a figure, returning it.
    ///
    /// # Errors
    /// * `FigureNotFound` - If no figure has that id
    pub fn delete(&self, dance: &str, figure_id: &str) -> Result<Figure> {
        let mut figures = self.read_all(dance);
        let index = figures
            .iter()
            .position(|f| f.id == figure_id)
            .ok_or_else(|| DancefigError::FigureNotFound(figure_id.to_string()))?;

        let removed = figures.remove(index);
        self.write_all(dance, &figures)?;

        tracing::info!(id = %removed.id, "figure deleted");
        Ok(removed)
    }
}
