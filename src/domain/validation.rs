//! Checks callers run before handing data to the note repository

use crate::domain::{NewPhotoNote, NoteUpdate};
use crate::error::{PhotoNotesError, Result};

/// Ensure a new note has a title, a description and an image
pub fn validate_new_note(data: &NewPhotoNote) -> Result<()> {
    if data.title.trim().is_empty()
        || data.description.trim().is_empty()
        || data.image_uri.trim().is_empty()
    {
        return Err(PhotoNotesError::Validation(
            "Title, description and image are all required".to_string(),
        ));
    }
    Ok(())
}

/// Ensure an edit changes something and blanks no text field
pub fn validate_update(update: &NoteUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(PhotoNotesError::Validation(
            "Nothing to update: pass --title, --description or an image".to_string(),
        ));
    }

    validate_text_fields(update.title.as_deref(), update.description.as_deref())?;
    if update
        .image_uri
        .as_deref()
        .is_some_and(|uri| uri.trim().is_empty())
    {
        return Err(PhotoNotesError::Validation(
            "Image reference cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reject a title or description that is given but blank
pub fn validate_text_fields(title: Option<&str>, description: Option<&str>) -> Result<()> {
    let blank = |field: Option<&str>| field.is_some_and(|s| s.trim().is_empty());
    if blank(title) || blank(description) {
        return Err(PhotoNotesError::Validation(
            "Title and description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Parse a note id given on the command line
pub fn parse_note_id(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(PhotoNotesError::InvalidNoteId(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_new_note() {
        let data = NewPhotoNote::new("Beach", "Sunset", "images/beach.jpg");
        assert!(validate_new_note(&data).is_ok());
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let data = NewPhotoNote::new("   ", "Sunset", "images/beach.jpg");
        assert!(matches!(
            validate_new_note(&data),
            Err(PhotoNotesError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_image_rejected() {
        let data = NewPhotoNote::new("Beach", "Sunset", "");
        assert!(validate_new_note(&data).is_err());
    }

    #[test]
    fn test_update_requires_a_field() {
        assert!(validate_update(&NoteUpdate::new()).is_err());
        assert!(validate_update(&NoteUpdate::new().title("ok")).is_ok());
    }

    #[test]
    fn test_update_rejects_blank_description() {
        let err = validate_update(&NoteUpdate::new().title("ok").description(" \n")).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_text_fields_absent_is_fine() {
        assert!(validate_text_fields(None, None).is_ok());
        assert!(validate_text_fields(Some("a"), None).is_ok());
        assert!(validate_text_fields(None, Some("")).is_err());
    }

    #[test]
    fn test_parse_note_id() {
        assert_eq!(parse_note_id("12").unwrap(), 12);
        assert_eq!(parse_note_id(" 3 ").unwrap(), 3);
        assert!(matches!(
            parse_note_id("0"),
            Err(PhotoNotesError::InvalidNoteId(_))
        ));
        assert!(parse_note_id("-1").is_err());
        assert!(parse_note_id("abc").is_err());
    }
}
