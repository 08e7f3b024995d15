//! Error types for photonotes

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for photonotes
#[derive(Debug, Error)]
pub enum PhotoNotesError {
    #[error("Not a photonotes directory: {0}")]
    NotPhotoNotesDirectory(PathBuf),

    #[error("Note not found: #{0}")]
    NoteNotFound(u64),

    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Image capture error: {0}")]
    Capture(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PhotoNotesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PhotoNotesError::NotPhotoNotesDirectory(_) => 2,
            PhotoNotesError::NoteNotFound(_) | PhotoNotesError::InvalidNoteId(_) => 3,
            PhotoNotesError::Validation(_) => 4,
            PhotoNotesError::PermissionDenied(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PhotoNotesError::NotPhotoNotesDirectory(path) => {
                format!(
                    "Not a photonotes directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'photonotes init' in this directory to start a collection\n\
                    • Navigate to an existing photonotes directory\n\
                    • Set PHOTONOTES_ROOT environment variable to your collection path",
                    path.display()
                )
            }
            PhotoNotesError::NoteNotFound(id) => {
                format!(
                    "Note not found: #{}\n\n\
                    Suggestions:\n\
                    • Use 'photonotes list' to see the ids of existing notes\n\
                    • The note may have been deleted",
                    id
                )
            }
            PhotoNotesError::InvalidNoteId(raw) => {
                format!(
                    "Invalid note id: '{}'\n\n\
                    Note ids are positive whole numbers, as shown by 'photonotes list'.\n\
                    Example: photonotes show 3",
                    raw
                )
            }
            PhotoNotesError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Example:\n\
                    photonotes create --title \"Beach\" --description \"Sunset walk\" --image ./beach.jpg",
                    msg
                )
            }
            PhotoNotesError::PermissionDenied(msg) => {
                format!(
                    "Permission denied: {}\n\n\
                    Suggestions:\n\
                    • Check that the image file is readable by your user\n\
                    • Pass a remote reference instead with --image-uri",
                    msg
                )
            }
            PhotoNotesError::Config(msg) => {
                if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Date formats use strftime syntax.\n\
                        Example: photonotes config date_format \"%Y-%m-%d %H:%M\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PhotoNotesError
pub type Result<T> = std::result::Result<T, PhotoNotesError>;
