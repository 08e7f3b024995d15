//! Note repository: the in-memory collection and its durable mirror

use crate::domain::{decode_collection, encode_collection, timestamp, NewPhotoNote, NoteUpdate, PhotoNote};
use crate::error::{PhotoNotesError, Result};
use crate::infrastructure::KeyValueStore;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Key under which the whole collection is stored
pub const STORAGE_KEY: &str = "@PhotoNotes";

enum WriterCommand {
    Write { generation: u64, payload: String },
    Flush(oneshot::Sender<()>),
}

/// Owns the notes collection, newest first, and mirrors every change to a
/// [`KeyValueStore`].
///
/// Mutations apply to memory immediately and return synchronously. The full
/// collection is then queued for a single background writer, which applies
/// writes strictly in the order they were issued. Storage failures are
/// logged and never reach the caller.
///
/// Must be created inside a tokio runtime.
pub struct NoteRepository {
    notes: Vec<PhotoNote>,
    is_loading: bool,
    store: Arc<dyn KeyValueStore>,
    writer: mpsc::UnboundedSender<WriterCommand>,
    writer_task: JoinHandle<()>,
    generation: u64,
}

impl NoteRepository {
    /// Create an empty repository that is still loading
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (writer, commands) = mpsc::unbounded_channel();
        let writer_task = tokio::spawn(run_writer(Arc::clone(&store), commands));

        NoteRepository {
            notes: Vec::new(),
            is_loading: true,
            store,
            writer,
            writer_task,
            generation: 0,
        }
    }

    /// Create a repository and load the stored collection
    pub async fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut repository = Self::new(store);
        repository.load().await;
        repository
    }

    /// Read the stored collection. Missing, unreadable or malformed data
    /// leaves the collection as it is. Loading is finished afterwards in
    /// every case.
    pub async fn load(&mut self) {
        match self.store.get(STORAGE_KEY).await {
            Ok(Some(raw)) => match decode_collection(&raw) {
                Ok(notes) => {
                    tracing::debug!(count = notes.len(), "Loaded notes");
                    self.notes = notes;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Stored notes are malformed, ignoring them");
                }
            },
            Ok(None) => tracing::debug!("No stored notes yet"),
            Err(e) => tracing::error!(error = %e, "Failed to load notes"),
        }
        self.is_loading = false;
    }

    /// Queue the whole collection for writing. Does nothing while loading,
    /// so an empty startup collection never overwrites stored data.
    pub fn persist(&mut self) {
        if self.is_loading {
            tracing::debug!("Notes still loading, not persisting");
            return;
        }

        let payload = match encode_collection(&self.notes) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize notes");
                return;
            }
        };

        self.generation += 1;
        let generation = self.generation;
        if self
            .writer
            .send(WriterCommand::Write { generation, payload })
            .is_err()
        {
            tracing::error!(generation, "Note writer has stopped, change kept in memory only");
        }
    }

    /// Add a note at the front of the collection and return its id
    pub fn create_note(&mut self, data: NewPhotoNote) -> Result<u64> {
        let id = self.next_id()?;
        self.notes.insert(0, PhotoNote::from_new(id, data, timestamp()));
        tracing::debug!(id, "Created note");
        self.persist();
        Ok(id)
    }

    /// Merge `update` into the note with `id` and restamp it
    pub fn update_note(&mut self, id: u64, update: NoteUpdate) -> Result<PhotoNote> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(PhotoNotesError::NoteNotFound(id))?;

        note.apply(update, timestamp());
        let updated = note.clone();

        tracing::debug!(id, "Updated note");
        self.persist();
        Ok(updated)
    }

    /// Remove the note with `id` and return it
    pub fn delete_note(&mut self, id: u64) -> Result<PhotoNote> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(PhotoNotesError::NoteNotFound(id))?;

        let removed = self.notes.remove(index);
        tracing::debug!(id, "Deleted note");
        self.persist();
        Ok(removed)
    }

    pub fn get_note_by_id(&self, id: u64) -> Option<&PhotoNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Current collection, newest first
    pub fn notes(&self) -> &[PhotoNote] {
        &self.notes
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Wait until every write queued so far has reached the store
    pub async fn flush(&self) {
        let (done, finished) = oneshot::channel();
        if self.writer.send(WriterCommand::Flush(done)).is_err() {
            return;
        }
        // The writer drops the sender only if it stops, which also means nothing is pending.
        let _ = finished.await;
    }

    /// Finish all queued writes and stop the writer
    pub async fn close(self) {
        let NoteRepository {
            writer,
            writer_task,
            ..
        } = self;

        drop(writer);
        if let Err(e) = writer_task.await {
            tracing::error!(error = %e, "Note writer task failed");
        }
    }

    // Ids are never reused while a higher id exists
    fn next_id(&self) -> Result<u64> {
        let max = self.notes.iter().map(|note| note.id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| {
            tracing::error!(max, "Note ids exhausted, refusing to create a note");
            PhotoNotesError::Storage(format!("No note id left after #{}", max))
        })
    }
}

async fn run_writer(
    store: Arc<dyn KeyValueStore>,
    mut commands: mpsc::UnboundedReceiver<WriterCommand>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            WriterCommand::Write {
                generation,
                payload,
            } => match store.set(STORAGE_KEY, &payload).await {
                Ok(()) => tracing::debug!(generation, "Persisted notes"),
                Err(e) => tracing::error!(generation, error = %e, "Failed to persist notes"),
            },
            WriterCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}
