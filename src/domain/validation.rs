//! Referential integrity checks for a catalog

use std::collections::HashSet;

use serde::Serialize;

use super::Catalog;

/// A step that points at a position the catalog does not define
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityIssue {
    pub step_id: String,
    pub step_name: String,
    pub entrada: String,
    pub salida: String,
    pub missing_entrada: bool,
    pub missing_salida: bool,
}

impl IntegrityIssue {
    /// One-line description, e.g. `• Vuelta (s2) → missing entrada "x"`
    pub fn describe(&self) -> String {
        let mut problems = Vec::new();
        if self.missing_entrada {
            problems.push(format!("entrada \"{}\"", self.entrada));
        }
        if self.missing_salida {
            problems.push(format!("salida \"{}\"", self.salida));
        }
        format!(
            "• {} ({}) → missing {}",
            self.step_name,
            self.step_id,
            problems.join(" and ")
        )
    }
}

/// Report every step whose entrada or salida is not a known position.
///
/// Issues come out in catalog order. The catalog stays usable either way.
pub fn validate_catalog(catalog: &Catalog) -> Vec<IntegrityIssue> {
    let known: HashSet<&str> = catalog.positions().iter().map(|p| p.id.as_str()).collect();

    catalog
        .steps()
        .iter()
        .filter_map(|step| {
            let missing_entrada = !known.contains(step.entrada.as_str());
            let missing_salida = !known.contains(step.salida.as_str());
            if !missing_entrada && !missing_salida {
                return None;
            }
            Some(IntegrityIssue {
                step_id: step.id.clone(),
                step_name: step.display_name().to_string(),
                entrada: step.entrada.clone(),
                salida: step.salida.clone(),
                missing_entrada,
                missing_salida,
            })
        })
        .collect()
}

/// Warning text for a set of issues, listing at most `limit` of them.
///
/// Returns None when there is nothing to report.
pub fn format_issue_report(issues: &[IntegrityIssue], limit: usize) -> Option<String> {
    if issues.is_empty() {
        return None;
    }

    let mut text = format!("{} steps reference missing positions:", issues.len());
    for issue in issues.iter().take(limit) {
        text.push('\n');
        text.push_str(&issue.describe());
    }
    if issues.len() > limit {
        text.push_str(&format!("\n…and {} more.", issues.len() - limit));
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Position, Step};

    fn catalog_with(steps: Vec<Step>) -> Catalog {
        Catalog::load(
            vec![Position::new("A", "A"), Position::new("B", "B")],
            steps,
        )
    }

    #[test]
    fn test_valid_catalog_has_no_issues() {
        let catalog = catalog_with(vec![Step::new("s1", "One", "A", "B")]);
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_missing_entrada() {
        let catalog = catalog_with(vec![Step::new("s1", "One", "X", "B")]);
        let issues = validate_catalog(&catalog);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].step_id, "s1");
        assert!(issues[0].missing_entrada);
        assert!(!issues[0].missing_salida);
    }

    #[test]
    fn test_missing_both() {
        let catalog = catalog_with(vec![Step::new("s1", "One", "X", "Y")]);
        let issues = validate_catalog(&catalog);

        assert!(issues[0].missing_entrada);
        assert!(issues[0].missing_salida);
        assert_eq!(
            issues[0].describe(),
            "• One (s1) → missing entrada \"X\" and salida \"Y\""
        );
    }

    #[test]
    fn test_issue_uses_id_when_name_blank() {
        let catalog = catalog_with(vec![Step::new("s9", "", "A", "Z")]);
        let issues = validate_catalog(&catalog);
        assert_eq!(issues[0].describe(), "• s9 (s9) → missing salida \"Z\"");
    }

    #[test]
    fn test_report_none_when_clean() {
        assert_eq!(format_issue_report(&[], 10), None);
    }

    #[test]
    fn test_report_truncates() {
        let steps = (0..4)
            .map(|i| Step::new(format!("s{}", i), format!("Step {}", i), "X", "A"))
            .collect();
        let issues = validate_catalog(&catalog_with(steps));

        let report = format_issue_report(&issues, 2).unwrap();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "4 steps reference missing positions:");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "…and 2 more.");
    }
}
