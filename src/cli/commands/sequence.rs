//! Sequence commands - start, add, undo, clear

use std::path::Path;

use crate::errors::Result;

use super::Workspace;

/// Choose the start position
pub fn start(cwd: Option<&Path>, dance: Option<&str>, position: &str) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let mut session = workspace.session();
    session.set_start_position(position)?;

    println!(
        "Start position: {}",
        session.catalog().position_name(position)
    );
    Ok(())
}

/// Append a step
pub fn add(cwd: Option<&Path>, dance: Option<&str>, step_id: &str) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let mut session = workspace.session();
    let name = session.add_step(step_id)?.display_name().to_string();

    let status = session.status();
    println!(
        "Added {} · {} · current count: {}",
        name,
        status.scratch_summary(),
        status.current_beat
    );
    Ok(())
}

/// Remove the last step
pub fn undo(cwd: Option<&Path>, dance: Option<&str>) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let mut session = workspace.session();

    match session.undo() {
        Some(step) => println!(
            "Removed {} · {}",
            step.display_name(),
            session.status().scratch_summary()
        ),
        None => println!("Nothing to undo."),
    }
    Ok(())
}

/// Empty the sequence
pub fn clear(cwd: Option<&Path>, dance: Option<&str>) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let mut session = workspace.session();
    session.clear();

    println!("Scratch cleared.");
    Ok(())
}
