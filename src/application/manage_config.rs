//! Config management use case

use crate::error::{PhotoNotesError, Result};
use crate::infrastructure::config::validate_date_format;
use crate::infrastructure::{Config, Workspace};

/// Service for managing collection configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "image_dir" => Ok(config.image_dir),
            "date_format" => Ok(config.date_format),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(PhotoNotesError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: image_dir, date_format, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "image_dir" => {
                if value.trim().is_empty() {
                    return Err(PhotoNotesError::Config(
                        "image_dir cannot be empty".to_string(),
                    ));
                }
                config.image_dir = value.to_string();
            }
            "date_format" => {
                validate_date_format(value)?;
                config.date_format = value.to_string();
            }
            "created" => {
                return Err(PhotoNotesError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(PhotoNotesError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: image_dir, date_format",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let workspace = Workspace::new(temp.path().to_path_buf());
        workspace.initialize(&Config::new()).unwrap();
        ConfigService::new(workspace)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("image_dir").unwrap(), "images");
        assert_eq!(service.get("date_format").unwrap(), "%d-%m-%Y %H:%M");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("date_format", "%Y-%m-%d").unwrap();
        service.set("image_dir", "photos").unwrap();

        assert_eq!(service.get("date_format").unwrap(), "%Y-%m-%d");
        assert_eq!(service.list().unwrap().image_dir, "photos");
    }

    #[test]
    fn test_set_invalid_date_format() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.set("date_format", "%Q").unwrap_err();
        assert!(err.to_string().contains("Invalid date format"));
        assert_eq!(service.get("date_format").unwrap(), "%d-%m-%Y %H:%M");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "daily").is_err());
    }
}
