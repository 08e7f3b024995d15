//! Photo note records and their JSON form

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use crate::error::Result;
use serde::{Deserialize, Serialize, Serializer};

/// A persisted note pairing a title, a description and an image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoNote {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Local path or URL of the image; never interpreted by the store
    pub image_uri: String,
    /// Creation time, or time of the last update
    #[serde(serialize_with = "serialize_timestamp")]
    pub date: DateTime<Utc>,
}

/// Caller-supplied data for a new note. The store assigns `id` and `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhotoNote {
    pub title: String,
    pub description: String,
    pub image_uri: String,
}

impl NewPhotoNote {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_uri: impl Into<String>,
    ) -> Self {
        NewPhotoNote {
            title: title.into(),
            description: description.into(),
            image_uri: image_uri.into(),
        }
    }
}

/// Partial edit of a note; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_uri: Option<String>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        NoteUpdate::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image_uri(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = Some(image_uri.into());
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image_uri.is_none()
    }
}

impl PhotoNote {
    /// Build a stored note from caller data
    pub fn from_new(id: u64, data: NewPhotoNote, date: DateTime<Utc>) -> Self {
        PhotoNote {
            id,
            title: data.title,
            description: data.description,
            image_uri: data.image_uri,
            date,
        }
    }

    /// Merge the fields present in `update` and restamp the note
    pub fn apply(&mut self, update: NoteUpdate, date: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(image_uri) = update.image_uri {
            self.image_uri = image_uri;
        }
        self.date = date;
    }
}

/// Current time at millisecond precision, the resolution of the stored form
pub fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn serialize_timestamp<S>(date: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Encode a whole collection as a single JSON array
pub fn encode_collection(notes: &[PhotoNote]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Decode a JSON array produced by [`encode_collection`]
pub fn decode_collection(raw: &str) -> Result<Vec<PhotoNote>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhotoNotesError;
    use chrono::TimeZone;

    fn sample(id: u64) -> PhotoNote {
        PhotoNote {
            id,
            title: format!("T{}", id),
            description: format!("D{}", id),
            image_uri: format!("file:///photos/{}.jpg", id),
            date: Utc.with_ymd_and_hms(2025, 1, 17, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = encode_collection(&[sample(1)]).unwrap();
        assert_eq!(
            json,
            r#"[{"id":1,"title":"T1","description":"D1","imageUri":"file:///photos/1.jpg","date":"2025-01-17T10:30:00.000Z"}]"#
        );
    }

    #[test]
    fn test_collection_round_trip_keeps_order() {
        let mut newest = sample(2);
        newest.date = timestamp();
        let notes = vec![newest, sample(1)];

        let decoded = decode_collection(&encode_collection(&notes).unwrap()).unwrap();
        assert_eq!(decoded, notes);
    }

    #[test]
    fn test_decode_accepts_offset_timestamps() {
        let raw = r#"[{"id":7,"title":"a","description":"b","imageUri":"c","date":"2025-01-17T12:30:00+02:00"}]"#;
        let notes = decode_collection(raw).unwrap();
        assert_eq!(notes[0].date, Utc.with_ymd_and_hms(2025, 1, 17, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(
            decode_collection("not json"),
            Err(PhotoNotesError::Json(_))
        ));
        assert!(decode_collection(r#"{"id":1}"#).is_err());
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut note = sample(1);
        let later = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        note.apply(NoteUpdate::new().title("X"), later);

        assert_eq!(note.title, "X");
        assert_eq!(note.description, "D1");
        assert_eq!(note.image_uri, "file:///photos/1.jpg");
        assert_eq!(note.date, later);
    }

    #[test]
    fn test_empty_update() {
        assert!(NoteUpdate::new().is_empty());
        assert!(!NoteUpdate::new().image_uri("x").is_empty());
    }
}
