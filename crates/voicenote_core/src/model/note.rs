//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record for one captured note.
//! - Provide creation-time identity and timestamp assignment.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` is assigned once at creation and never updated.
//! - `content` is immutable after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical record for one captured note.
///
/// The serde shape of this struct is also the persisted blob encoding: the
/// collection is stored as a JSON array of these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for deletion and rendering identity.
    pub id: NoteId,
    /// Unix epoch milliseconds captured at creation. Display-only.
    pub created_at: i64,
    /// Free-form note text, immutable once created.
    pub content: String,
}

impl Note {
    /// Creates a new note with a generated stable ID and the current time.
    ///
    /// # Invariants
    /// - Identity, timestamp and content are assigned together.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), now_epoch_millis(), content)
    }

    /// Creates a note with caller-provided identity and timestamp.
    ///
    /// Used by load paths and tests where identity already exists.
    pub fn with_id(id: NoteId, created_at: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            created_at,
            content: content.into(),
        }
    }

    /// Validates creation-time constraints.
    ///
    /// # Errors
    /// - `EmptyContent` when `content` is empty.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Returns the current time as Unix epoch milliseconds.
pub fn now_epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Validation error for note creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Submitted content is empty.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}
