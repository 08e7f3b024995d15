//! Domain layer - Note records and validation rules

pub mod note;
pub mod validation;

pub use note::{decode_collection, encode_collection, timestamp, NewPhotoNote, NoteUpdate, PhotoNote};
pub use validation::{parse_note_id, validate_new_note, validate_text_fields, validate_update};
