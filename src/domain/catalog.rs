//! Catalog of positions and steps for one dance

use serde::Serialize;

use crate::schemas::{Position, Step};

use super::collation::compare_names;

/// Positions and steps of one dance, both sorted by name.
///
/// References between steps and positions are not checked here; see
/// [`validate_catalog`](super::validate_catalog).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    positions: Vec<Position>,
    steps: Vec<Step>,
}

impl Catalog {
    /// Build a catalog from raw documents.
    ///
    /// Sorting is stable so equal names keep their document order.
    pub fn load(mut positions: Vec<Position>, mut steps: Vec<Step>) -> Self {
        positions.sort_by(|a, b| compare_names(&a.name, &b.name));
        steps.sort_by(|a, b| compare_names(&a.name, &b.name));
        Catalog { positions, steps }
    }

    /// A catalog with nothing in it
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.steps.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    pub fn has_position(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Display name for a position id; unknown ids are shown as-is
    pub fn position_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.position(id).map(Position::display_name).unwrap_or(id)
    }

    /// First position in sorted order, used as the default start
    pub fn first_position(&self) -> Option<&Position> {
        self.positions.first()
    }

    /// Steps that start from the given position, in catalog order
    pub fn steps_from<'a>(&'a self, position_id: &'a str) -> impl Iterator<Item = &'a Step> + 'a {
        self.steps.iter().filter(move |s| s.entrada == position_id)
    }

    /// Resolve step ids against the catalog.
    ///
    /// Ids that are no longer present are dropped; order is preserved.
    pub fn resolve_steps(&self, ids: &[String]) -> Vec<Step> {
        ids.iter().filter_map(|id| self.step(id).cloned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::load(
            vec![
                Position::new("open", "Abierta"),
                Position::new("closed", "Cerrada"),
                Position::new("shadow", ""),
            ],
            vec![
                Step::new("s2", "Vuelta", "open", "open"),
                Step::new("s1", "Básico", "closed", "closed"),
                Step::new("s3", "Cross body lead", "closed", "open"),
                Step::new("s4", "básico", "open", "closed"),
            ],
        )
    }

    #[test]
    fn test_load_sorts_by_name() {
        let catalog = sample();
        let position_ids: Vec<_> = catalog.positions().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(position_ids, vec!["shadow", "open", "closed"]);

        let step_ids: Vec<_> = catalog.steps().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(step_ids, vec!["s4", "s1", "s3", "s2"]);
    }

    #[test]
    fn test_load_is_stable_for_equal_names() {
        let catalog = Catalog::load(
            vec![],
            vec![
                Step::new("first", "Giro", "a", "b"),
                Step::new("second", "Giro", "b", "a"),
                Step::new("third", "Giro", "a", "a"),
            ],
        );
        let ids: Vec<_> = catalog.steps().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_lookups() {
        let catalog = sample();
        assert_eq!(catalog.step("s3").unwrap().name, "Cross body lead");
        assert!(catalog.step("missing").is_none());
        assert!(catalog.has_position("open"));
        assert!(!catalog.has_position("nowhere"));
    }

    #[test]
    fn test_position_name_fallbacks() {
        let catalog = sample();
        assert_eq!(catalog.position_name("open"), "Abierta");
        assert_eq!(catalog.position_name("shadow"), "shadow");
        assert_eq!(catalog.position_name("nowhere"), "nowhere");
    }

    #[test]
    fn test_steps_from_keeps_catalog_order() {
        let catalog = sample();
        let ids: Vec<_> = catalog.steps_from("closed").map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }

    #[test]
    fn test_resolve_steps_drops_missing_ids() {
        let catalog = sample();
        let ids = vec!["s3".to_string(), "gone".to_string(), "s2".to_string()];
        let resolved: Vec<_> = catalog.resolve_steps(&ids).into_iter().map(|s| s.id).collect();
        assert_eq!(resolved, vec!["s3", "s2"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.first_position().is_none());
    }
}
