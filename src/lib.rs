//! photonotes - Photo notes kept on local storage
//!
//! Notes pair an image with a title and a description. The collection lives
//! in memory and is mirrored, as one JSON document, to a key-value store.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::PhotoNotesError;
