//! Collection directory discovery and layout

use crate::error::{PhotoNotesError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, FileKeyValueStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding collection discovery
pub const ROOT_ENV_VAR: &str = "PHOTONOTES_ROOT";

/// A photonotes collection on disk.
///
/// Layout under `root`:
/// - `.photonotes/config.toml`
/// - `.photonotes/store/` (key-value files)
/// - the configured image directory (`images/` by default)
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace with the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the collection root by walking up from current directory
    /// First checks PHOTONOTES_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check PHOTONOTES_ROOT environment variable first
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(PhotoNotesError::Config(format!(
                    "PHOTONOTES_ROOT is set to '{}' but no .photonotes directory found. \
                    Run 'photonotes init' in that directory or unset PHOTONOTES_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the collection root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_workspace_dir(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .ok_or_else(|| PhotoNotesError::NotPhotoNotesDirectory(start.to_path_buf()))
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    /// Create the .photonotes directory, the store and the image directory
    pub fn initialize(&self, config: &Config) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(PhotoNotesError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&workspace_dir)?;
        fs::create_dir_all(self.store_dir())?;
        fs::create_dir_all(config.image_path(&self.root))?;
        config.save_to_dir(&self.root)
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join("store")
    }

    /// Key-value store holding this collection's notes
    pub fn store(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.store_dir())
    }
}
