//! Validate command - Report steps that reference missing positions

use std::path::Path;

use crate::domain::format_issue_report;
use crate::errors::Result;

use super::{print_json, Workspace};

/// Print the catalog's integrity issues
pub fn run(cwd: Option<&Path>, dance: Option<&str>, json: bool) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    let session = workspace.session();
    let issues = session.issues();

    if json {
        return print_json(&issues);
    }

    match format_issue_report(issues, workspace.config.issue_preview_limit) {
        Some(report) => println!("{}", report),
        None => println!(
            "All {} steps reference known positions.",
            session.catalog().steps().len()
        ),
    }
    Ok(())
}
