//! Figures commands - list, save, load, delete

use std::path::Path;

use chrono::{Local, TimeZone};

use crate::errors::Result;
use crate::schemas::Figure;

use super::{print_json, Workspace};

/// One listing line: id, name, length and creation time
fn describe_figure(figure: &Figure) -> String {
    let created = Local
        .timestamp_millis_opt(figure.created_at)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {}  ({} steps · {} tiempos, {})",
        figure.id,
        figure.name,
        figure.steps.len(),
        figure.total_beats(),
        created
    )
}

/// List saved figures
pub fn list(cwd: Option<&Path>, dance: Option<&str>, json: bool) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let figures = workspace.figures().list(&workspace.dance);

    if json {
        return print_json(&figures);
    }

    if figures.is_empty() {
        println!("No saved figures.");
        return Ok(());
    }
    for figure in &figures {
        println!("{}", describe_figure(figure));
    }
    Ok(())
}

/// Save the current sequence
pub fn save(cwd: Option<&Path>, dance: Option<&str>, name: Option<&str>) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let session = workspace.session();
    let figure = session.save_figure(&workspace.figures(), name)?;

    println!("Figure saved: {} ({})", figure.name, figure.id);
    Ok(())
}

/// Load a saved figure into the current sequence
pub fn load(cwd: Option<&Path>, dance: Option<&str>, id: &str) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let mut session = workspace.session();
    session.load_figure(&workspace.figures(), id)?;

    println!("Figure loaded · {}", session.status().scratch_summary());
    Ok(())
}

/// Delete a saved figure
pub fn delete(cwd: Option<&Path>, dance: Option<&str>, id: &str) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let removed = workspace.figures().delete(&workspace.dance, id)?;

    println!("Figure deleted: {}", removed.name);
    Ok(())
}
