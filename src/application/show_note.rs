//! Show note use case

use crate::domain::PhotoNote;
use crate::error::{PhotoNotesError, Result};
use crate::infrastructure::NoteRepository;

/// Look up a single note for the detail view
pub fn show_note(repository: &NoteRepository, id: u64) -> Result<&PhotoNote> {
    repository
        .get_note_by_id(id)
        .ok_or(PhotoNotesError::NoteNotFound(id))
}
