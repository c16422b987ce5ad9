//! Share command - Print the sequence as shareable text

use std::path::Path;

use crate::errors::Result;

use super::Workspace;

pub fn run(cwd: Option<&Path>, dance: Option<&str>) -> Result<()> {
    let workspace = Workspace::open(cwd, dance)?;
    println!("{}", workspace.session().share_text());
    Ok(())
}
