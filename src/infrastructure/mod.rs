//! Infrastructure layer - Storage, configuration and image acquisition

pub mod config;
pub mod image;
pub mod repository;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use image::{remove_imported_image, FileImageImporter, ImageSource, UriImageSource};
pub use repository::{NoteRepository, STORAGE_KEY};
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use workspace::Workspace;
