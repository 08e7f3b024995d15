//! Application layer - Use cases and orchestration

pub mod create_note;
pub mod delete_note;
pub mod edit_note;
pub mod init;
pub mod list_notes;
pub mod manage_config;
pub mod prune_image;
pub mod show_note;

pub use create_note::create_note;
pub use delete_note::delete_note;
pub use edit_note::edit_note;
pub use list_notes::list_notes;
pub use manage_config::ConfigService;
pub use prune_image::prune_image;
pub use show_note::show_note;
