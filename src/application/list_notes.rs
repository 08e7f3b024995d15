//! List notes use case

use crate::domain::PhotoNote;
use crate::infrastructure::NoteRepository;

/// Notes newest first, optionally capped at `limit`.
pub fn list_notes(repository: &NoteRepository, limit: Option<usize>) -> &[PhotoNote] {
    let notes = repository.notes();
    match limit {
        Some(n) if n < notes.len() => &notes[..n],
        _ => notes,
    }
}
