//! Steps command - Browse the step catalog

use std::path::Path;

use crate::domain::Catalog;
use crate::errors::{DancefigError, Result};
use crate::schemas::Step;

use super::{print_json, Workspace};

/// Catalog listing of one step: name on the first line, details indented below
pub fn describe_step(step: &Step, catalog: &Catalog) -> String {
    let mut details = vec![
        format!("entrada: {}", catalog.position_name(&step.entrada)),
        format!("salida: {}", catalog.position_name(&step.salida)),
    ];
    if let Some(half) = step.half {
        details.push(format!("tiempos: {}", half.range()));
    }
    if let Some(timing) = &step.timing {
        details.push(format!("timing: {}", timing));
    }

    let mut text = format!("{} [{}]\n    {}", step.display_name(), step.id, details.join(" · "));
    if let Some(notas) = &step.notas {
        text.push_str(&format!("\n    {}", notas));
    }
    text
}

/// List the catalog's steps, optionally only those leaving one position
pub fn run(cwd: Option<&Path>, dance: Option<&str>, from: Option<&str>, json: bool) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let session = workspace.session();
    let catalog = session.catalog();

    if let Some(position) = from {
        if !catalog.has_position(position) {
            return Err(DancefigError::UnknownPosition(position.to_string()));
        }
    }

    let steps: Vec<&Step> = match from {
        Some(position) => catalog.steps_from(position).collect(),
        None => catalog.steps().iter().collect(),
    };

    if json {
        return print_json(&steps);
    }

    if steps.is_empty() {
        println!("No matching steps.");
        return Ok(());
    }
    for step in steps {
        println!("{}", describe_step(step, catalog));
    }
    Ok(())
}
