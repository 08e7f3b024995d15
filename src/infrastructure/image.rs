//! Image acquisition for new and edited notes

use crate::error::{PhotoNotesError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic", "bmp"];

/// File name prefix of every imported image
const IMPORT_PREFIX: &str = "photo-";

/// Something that can hand back a reference to an image.
///
/// `Ok(None)` means the user backed out without choosing an image.
/// `PhotoNotesError::PermissionDenied` means access was refused; callers
/// report it and abort without touching any note.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn acquire(&self) -> Result<Option<String>>;
}

/// Copies a local image file into the collection's image directory
#[derive(Debug, Clone)]
pub struct FileImageImporter {
    source: PathBuf,
    image_dir: PathBuf,
}

impl FileImageImporter {
    pub fn new(source: PathBuf, image_dir: PathBuf) -> Self {
        FileImageImporter { source, image_dir }
    }

    fn extension(&self) -> Result<String> {
        let ext = self
            .source
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ext)
        } else {
            Err(PhotoNotesError::Capture(format!(
                "Not a supported image file: {} (expected one of: {})",
                self.source.display(),
                IMAGE_EXTENSIONS.join(", ")
            )))
        }
    }

    /// Pick a file name under the image directory that is not taken yet
    async fn destination(&self, ext: &str) -> Result<PathBuf> {
        let stamp = Utc::now().format("%Y%m%d-%H%M%S%3f");
        let mut candidate = self
            .image_dir
            .join(format!("{}{}.{}", IMPORT_PREFIX, stamp, ext));
        let mut counter = 1;
        while fs::try_exists(&candidate).await? {
            candidate = self
                .image_dir
                .join(format!("{}{}-{}.{}", IMPORT_PREFIX, stamp, counter, ext));
            counter += 1;
        }
        Ok(candidate)
    }
}

fn map_read_error(path: &Path, e: std::io::Error) -> PhotoNotesError {
    match e.kind() {
        ErrorKind::PermissionDenied => PhotoNotesError::PermissionDenied(format!(
            "cannot read image {}",
            path.display()
        )),
        ErrorKind::NotFound => {
            PhotoNotesError::Capture(format!("Image file not found: {}", path.display()))
        }
        _ => PhotoNotesError::Io(e),
    }
}

#[async_trait]
impl ImageSource for FileImageImporter {
    async fn acquire(&self) -> Result<Option<String>> {
        let ext = self.extension()?;

        let metadata = fs::metadata(&self.source)
            .await
            .map_err(|e| map_read_error(&self.source, e))?;
        if !metadata.is_file() {
            return Err(PhotoNotesError::Capture(format!(
                "Not a file: {}",
                self.source.display()
            )));
        }

        fs::create_dir_all(&self.image_dir).await?;
        let destination = self.destination(&ext).await?;
        fs::copy(&self.source, &destination)
            .await
            .map_err(|e| map_read_error(&self.source, e))?;

        tracing::debug!(
            source = %self.source.display(),
            destination = %destination.display(),
            "Imported image"
        );
        Ok(Some(destination.to_string_lossy().into_owned()))
    }
}

/// Delete `image_uri` if it names a file imported into `image_dir`.
///
/// Anything else (remote references, files elsewhere on disk) is left
/// alone. Returns whether a file was removed.
pub async fn remove_imported_image(image_dir: &Path, image_uri: &str) -> Result<bool> {
    let path = Path::new(image_uri);
    let imported = path.parent() == Some(image_dir)
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(IMPORT_PREFIX));
    if !imported {
        return Ok(false);
    }

    match fs::remove_file(path).await {
        Ok(()) => {
            tracing::debug!(image = %path.display(), "Removed imported image");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Uses a caller-supplied reference (URL or path) as-is
#[derive(Debug, Clone)]
pub struct UriImageSource {
    uri: String,
}

impl UriImageSource {
    pub fn new(uri: impl Into<String>) -> Self {
        UriImageSource { uri: uri.into() }
    }
}

#[async_trait]
impl ImageSource for UriImageSource {
    async fn acquire(&self) -> Result<Option<String>> {
        let uri = self.uri.trim();
        if uri.is_empty() {
            Ok(None)
        } else {
            Ok(Some(uri.to_string()))
        }
    }
}
