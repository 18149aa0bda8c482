//! Note store over single-key blob persistence.
//!
//! # Responsibility
//! - Own the in-memory note collection, newest-first.
//! - Persist the serialized collection after every mutation.
//!
//! # Invariants
//! - `create` prepends; the collection order is insertion order, newest-first.
//! - `delete` is idempotent; deleting an unknown ID is a no-op success.
//! - A malformed persisted blob is a hard error, never an empty fallback.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::storage::{read_value, write_value, StorageError, NOTES_KEY};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for note collection mutations and persistence.
#[derive(Debug)]
pub enum StoreError {
    Validation(NoteValidationError),
    Storage(StorageError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(StorageError::Sqlite(value))
    }
}

/// Single source of truth for the note collection.
///
/// The collection lives in memory and is mirrored to one fixed storage key
/// as a JSON array blob after every mutation.
pub struct NoteStore<'conn> {
    conn: &'conn Connection,
    notes: Vec<Note>,
}

impl<'conn> NoteStore<'conn> {
    /// Loads the collection from storage, or starts empty when absent.
    ///
    /// # Errors
    /// - `InvalidData` when the persisted blob cannot be decoded.
    /// - `Storage` on key-value read failures.
    pub fn load(conn: &'conn Connection) -> StoreResult<Self> {
        let notes = match read_value(conn, NOTES_KEY)? {
            Some(blob) => serde_json::from_str::<Vec<Note>>(&blob).map_err(|err| {
                StoreError::InvalidData(format!("cannot decode `{NOTES_KEY}` blob: {err}"))
            })?,
            None => Vec::new(),
        };

        info!(
            "event=notes_load module=store status=ok count={}",
            notes.len()
        );

        Ok(Self { conn, notes })
    }

    /// Creates one note from non-empty content and persists the collection.
    ///
    /// The new note carries a fresh ID and the current timestamp and is
    /// prepended so the collection stays newest-first.
    ///
    /// # Errors
    /// - `Validation` when `content` is empty; the collection is unchanged.
    pub fn create(&mut self, content: impl Into<String>) -> StoreResult<Note> {
        let note = Note::new(content);
        note.validate()?;

        self.notes.insert(0, note.clone());
        self.persist()?;

        info!(
            "event=note_create module=store status=ok note_id={} content_len={}",
            note.id,
            note.content.len()
        );

        Ok(note)
    }

    /// Deletes the note with the matching ID, if any, and persists.
    ///
    /// Returns whether a note was removed. Unknown IDs are a no-op success;
    /// nothing is written when the collection did not change.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);

        if self.notes.len() == before {
            info!("event=note_delete module=store status=ok note_id={id} removed=false");
            return Ok(false);
        }

        self.persist()?;
        info!("event=note_delete module=store status=ok note_id={id} removed=true");
        Ok(true)
    }

    /// Borrowed read view of the collection, newest-first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.notes).map_err(|err| {
            StoreError::InvalidData(format!("cannot encode `{NOTES_KEY}` blob: {err}"))
        })?;
        write_value(self.conn, NOTES_KEY, &blob)?;
        Ok(())
    }
}
