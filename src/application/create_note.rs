//! Create note use case

use crate::domain::{validate_new_note, NewPhotoNote};
use crate::error::{PhotoNotesError, Result};
use crate::infrastructure::{ImageSource, NoteRepository};

/// Validate the text fields, acquire the image, then store the note.
///
/// Text is checked before the image is acquired so a rejected note never
/// leaves an imported image behind. A permission error from the image
/// source aborts without touching the repository.
pub async fn create_note(
    repository: &mut NoteRepository,
    title: &str,
    description: &str,
    image: Option<&dyn ImageSource>,
) -> Result<u64> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err(required_fields_error());
    }

    let image_uri = match image {
        Some(source) => source.acquire().await?,
        None => None,
    }
    .ok_or_else(required_fields_error)?;

    let data = NewPhotoNote::new(title, description, image_uri);
    validate_new_note(&data)?;

    repository.create_note(data)
}

fn required_fields_error() -> PhotoNotesError {
    PhotoNotesError::Validation(
        "Title, description and image are all required".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemoryKeyValueStore, UriImageSource};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct DeniedSource;

    #[async_trait]
    impl ImageSource for DeniedSource {
        async fn acquire(&self) -> Result<Option<String>> {
            Err(PhotoNotesError::PermissionDenied("camera".to_string()))
        }
    }

    struct CancelledSource;

    #[async_trait]
    impl ImageSource for CancelledSource {
        async fn acquire(&self) -> Result<Option<String>> {
            Ok(None)
        }
    }

    async fn repository() -> NoteRepository {
        NoteRepository::open(Arc::new(MemoryKeyValueStore::new())).await
    }

    #[tokio::test]
    async fn test_create_with_uri() {
        let mut repo = repository().await;
        let source = UriImageSource::new("https://example.com/a.jpg");

        let id = create_note(&mut repo, "Beach", "Sunset", Some(&source))
            .await
            .unwrap();

        let note = repo.get_note_by_id(id).unwrap();
        assert_eq!(note.title, "Beach");
        assert_eq!(note.image_uri, "https://example.com/a.jpg");
    }

    #[tokio::test]
    async fn test_blank_title_rejected_before_image() {
        let mut repo = repository().await;

        // The denied source would fail first if it were consulted
        let result = create_note(&mut repo, " ", "Sunset", Some(&DeniedSource)).await;

        assert!(matches!(result, Err(PhotoNotesError::Validation(_))));
        assert!(repo.notes().is_empty());
    }

    #[tokio::test]
    async fn test_missing_image_rejected() {
        let mut repo = repository().await;

        let result = create_note(&mut repo, "Beach", "Sunset", None).await;
        assert!(matches!(result, Err(PhotoNotesError::Validation(_))));

        let result = create_note(&mut repo, "Beach", "Sunset", Some(&CancelledSource)).await;
        assert!(matches!(result, Err(PhotoNotesError::Validation(_))));
        assert!(repo.notes().is_empty());
    }

    #[tokio::test]
    async fn test_permission_denied_aborts() {
        let mut repo = repository().await;

        let result = create_note(&mut repo, "Beach", "Sunset", Some(&DeniedSource)).await;

        assert!(matches!(result, Err(PhotoNotesError::PermissionDenied(_))));
        assert!(repo.notes().is_empty());
    }
}
