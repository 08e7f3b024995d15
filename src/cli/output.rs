//! Output formatting utilities

use crate::domain::PhotoNote;
use crate::infrastructure::Config;

/// Format the note list, one line per note
pub fn format_note_list(notes: &[PhotoNote], config: &Config) -> String {
    if notes.is_empty() {
        return "No notes yet".to_string();
    }

    let width = notes
        .iter()
        .map(|note| note.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "#{:<width$}  {}  {}\n",
            note.id,
            config.format_date(&note.date),
            note.title,
            width = width
        ));
    }
    output
}

/// Format a single note for the detail view
pub fn format_note_detail(note: &PhotoNote, config: &Config) -> String {
    format!(
        "#{} {}\n\
        Date:  {}\n\
        Image: {}\n\
        \n\
        {}\n",
        note.id,
        note.title,
        config.format_date(&note.date),
        note.image_uri,
        note.description
    )
}
