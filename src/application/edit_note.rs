//! Edit note use case

use crate::domain::{validate_text_fields, validate_update, NoteUpdate, PhotoNote};
use crate::error::{PhotoNotesError, Result};
use crate::infrastructure::{ImageSource, NoteRepository};

/// Change any of title, description and image of an existing note.
///
/// A cancelled image choice keeps the current image.
pub async fn edit_note(
    repository: &mut NoteRepository,
    id: u64,
    title: Option<&str>,
    description: Option<&str>,
    image: Option<&dyn ImageSource>,
) -> Result<PhotoNote> {
    if repository.get_note_by_id(id).is_none() {
        return Err(PhotoNotesError::NoteNotFound(id));
    }
    validate_text_fields(title, description)?;

    let mut update = NoteUpdate {
        title: title.map(str::to_string),
        description: description.map(str::to_string),
        image_uri: None,
    };
    if let Some(source) = image {
        update.image_uri = source.acquire().await?;
    }
    validate_update(&update)?;

    repository.update_note(id, update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPhotoNote;
    use crate::infrastructure::{MemoryKeyValueStore, UriImageSource};
    use std::sync::Arc;

    async fn repository_with_note() -> (NoteRepository, u64) {
        let mut repo = NoteRepository::open(Arc::new(MemoryKeyValueStore::new())).await;
        let id = repo.create_note(NewPhotoNote::new("T1", "D1", "u1")).unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn test_edit_title_only() {
        let (mut repo, id) = repository_with_note().await;

        let note = edit_note(&mut repo, id, Some("T1-edited"), None, None)
            .await
            .unwrap();

        assert_eq!(note.title, "T1-edited");
        assert_eq!(note.description, "D1");
        assert_eq!(note.image_uri, "u1");
    }

    #[tokio::test]
    async fn test_edit_image() {
        let (mut repo, id) = repository_with_note().await;
        let source = UriImageSource::new("u2");

        let note = edit_note(&mut repo, id, None, None, Some(&source))
            .await
            .unwrap();
        assert_eq!(note.image_uri, "u2");
    }

    #[tokio::test]
    async fn test_edit_missing_note() {
        let (mut repo, _) = repository_with_note().await;

        let result = edit_note(&mut repo, 99, Some("x"), None, None).await;
        assert!(matches!(result, Err(PhotoNotesError::NoteNotFound(99))));
    }

    #[tokio::test]
    async fn test_edit_blank_description_rejected() {
        let (mut repo, id) = repository_with_note().await;

        let result = edit_note(&mut repo, id, None, Some("  "), None).await;

        assert!(matches!(result, Err(PhotoNotesError::Validation(_))));
        assert_eq!(repo.get_note_by_id(id).unwrap().description, "D1");
    }

    #[tokio::test]
    async fn test_edit_nothing_rejected() {
        let (mut repo, id) = repository_with_note().await;

        let result = edit_note(&mut repo, id, None, None, None).await;
        assert!(matches!(result, Err(PhotoNotesError::Validation(_))));
    }
}
