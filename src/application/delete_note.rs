//! Delete note use case

use crate::domain::PhotoNote;
use crate::error::{PhotoNotesError, Result};
use crate::infrastructure::NoteRepository;

/// Delete a note once `confirm` agrees.
///
/// Returns the removed note, or `None` when the deletion was not confirmed.
pub fn delete_note<F>(repository: &mut NoteRepository, id: u64, confirm: F) -> Result<Option<PhotoNote>>
where
    F: FnOnce(&PhotoNote) -> Result<bool>,
{
    let note = repository
        .get_note_by_id(id)
        .ok_or(PhotoNotesError::NoteNotFound(id))?;

    if !confirm(note)? {
        tracing::debug!(id, "Deletion not confirmed");
        return Ok(None);
    }

    repository.delete_note(id).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPhotoNote;
    use crate::infrastructure::MemoryKeyValueStore;
    use std::sync::Arc;

    async fn repository_with_note() -> (NoteRepository, u64) {
        let mut repo = NoteRepository::open(Arc::new(MemoryKeyValueStore::new())).await;
        let id = repo.create_note(NewPhotoNote::new("T1", "D1", "u1")).unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn test_confirmed_delete() {
        let (mut repo, id) = repository_with_note().await;

        let removed = delete_note(&mut repo, id, |note| {
            assert_eq!(note.title, "T1");
            Ok(true)
        })
        .unwrap();

        assert_eq!(removed.unwrap().id, id);
        assert!(repo.notes().is_empty());
    }

    #[tokio::test]
    async fn test_declined_delete_keeps_note() {
        let (mut repo, id) = repository_with_note().await;

        let removed = delete_note(&mut repo, id, |_| Ok(false)).unwrap();

        assert!(removed.is_none());
        assert_eq!(repo.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_does_not_ask() {
        let (mut repo, _) = repository_with_note().await;

        let result = delete_note(&mut repo, 5, |_| panic!("should not ask"));
        assert!(matches!(result, Err(PhotoNotesError::NoteNotFound(5))));
    }
}
