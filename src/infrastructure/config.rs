//! Configuration management

use crate::error::{PhotoNotesError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the hidden directory marking a photonotes collection
pub const WORKSPACE_DIR: &str = ".photonotes";

pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where imported images are copied, relative to the collection root
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    /// strftime pattern used when showing note dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
    pub created: DateTime<Utc>,
}

fn default_image_dir() -> String {
    DEFAULT_IMAGE_DIR.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            image_dir: default_image_dir(),
            date_format: default_date_format(),
            created: Utc::now(),
        }
    }

    /// Load config from .photonotes/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PhotoNotesError::NotPhotoNotesDirectory(path.to_path_buf())
            } else {
                PhotoNotesError::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&contents)?;

        if let Err(e) = validate_date_format(&config.date_format) {
            tracing::warn!(error = %e, "Falling back to the default date format");
            config.date_format = default_date_format();
        }

        Ok(config)
    }

    /// Save config to .photonotes/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        // Ensure .photonotes directory exists
        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute image directory for a collection rooted at `root`
    pub fn image_path(&self, root: &Path) -> PathBuf {
        root.join(&self.image_dir)
    }

    /// Render a note timestamp in local time. A pattern chrono cannot
    /// render falls back to the default one.
    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        let local = date.with_timezone(&Local);
        let mut rendered = String::new();
        if write!(rendered, "{}", local.format(&self.date_format)).is_err() {
            tracing::warn!(format = %self.date_format, "Cannot render date format, using the default");
            return local.format(DEFAULT_DATE_FORMAT).to_string();
        }
        rendered
    }
}

/// Reject strftime patterns chrono cannot render.
///
/// Some items (`%#z`) parse fine but are only usable for parsing, so a
/// sample date is rendered as well.
pub fn validate_date_format(format: &str) -> Result<()> {
    let invalid = || PhotoNotesError::Config(format!("Invalid date format: '{}'", format));

    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let mut sample = String::new();
    write!(sample, "{}", Utc::now().format(format)).map_err(|_| invalid())?;
    Ok(())
}
