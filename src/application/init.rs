//! Initialize collection use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new photo notes collection at the specified path.
pub fn init(path: &Path) -> Result<Workspace> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize(&Config::new())?;

    tracing::info!(root = %path.display(), "Initialized collection");
    Ok(workspace)
}
