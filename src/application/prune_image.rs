//! Clean up images no note refers to any more

use crate::infrastructure::{remove_imported_image, NoteRepository};
use std::path::Path;

/// Remove an imported image once no note in `repository` uses it.
///
/// Runs after the note change has been made, so failures are only logged.
/// Returns whether a file was removed.
pub async fn prune_image(
    repository: &NoteRepository,
    image_dir: &Path,
    image_uri: &str,
) -> bool {
    if repository
        .notes()
        .iter()
        .any(|note| note.image_uri == image_uri)
    {
        tracing::debug!(image = image_uri, "Image still in use, keeping it");
        return false;
    }

    match remove_imported_image(image_dir, image_uri).await {
        Ok(removed) => removed,
        Err(e) => {
            tracing::warn!(image = image_uri, error = %e, "Failed to remove unused image");
            false
        }
    }
}
