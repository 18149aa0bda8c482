//! Note board: the top-level composition behind any rendering surface.
//!
//! # Responsibility
//! - Own the store, the search query and both capture paths.
//! - Map user intents (create, delete, search, draft, record) onto them.
//!
//! # Invariants
//! - The note collection has exactly one owner: the board's store.
//! - `visible_notes` is pull-based; there is no cached filtered view.

use crate::capture::draft::DraftEditor;
use crate::capture::recorder::SpeechRecorder;
use crate::capture::speech::{SpeechCapability, SpeechEvent};
use crate::capture::CaptureError;
use crate::model::note::{Note, NoteId};
use crate::search::filter_notes;
use crate::store::note_store::{NoteStore, StoreError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Board-level error envelope for intent handlers.
#[derive(Debug)]
pub enum BoardError {
    Capture(CaptureError),
    Store(StoreError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capture(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Capture(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<CaptureError> for BoardError {
    fn from(value: CaptureError) -> Self {
        Self::Capture(value)
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Top-level composition owning the collection and the capture state.
pub struct NoteBoard<'conn> {
    store: NoteStore<'conn>,
    editor: DraftEditor,
    recorder: SpeechRecorder,
    query: String,
}

impl<'conn> NoteBoard<'conn> {
    /// Loads the board over an opened store connection.
    ///
    /// The speech capability is probed by the caller once at startup and
    /// injected here; it is never re-checked per call.
    pub fn open(conn: &'conn Connection, capability: SpeechCapability) -> Result<Self, StoreError> {
        Ok(Self {
            store: NoteStore::load(conn)?,
            editor: DraftEditor::new(),
            recorder: SpeechRecorder::new(capability),
            query: String::new(),
        })
    }

    /// Creates a note directly from finalized content.
    pub fn create_note(&mut self, content: impl Into<String>) -> Result<Note, BoardError> {
        Ok(self.store.create(content)?)
    }

    /// Deletes a note by ID. Returns whether anything was removed.
    pub fn delete_note(&mut self, id: NoteId) -> Result<bool, BoardError> {
        Ok(self.store.delete(id)?)
    }

    /// Replaces the current search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Derives the visible subset for the current query.
    ///
    /// Recomputed from live state on every call; mutations to the store or
    /// the query are reflected immediately.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(self.store.notes(), &self.query)
    }

    /// All notes, newest-first, ignoring the query.
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    // --- capture: text path ---

    /// Replaces the draft with typed text.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.editor.replace(text);
    }

    pub fn draft(&self) -> &str {
        self.editor.content()
    }

    pub fn is_onboarding(&self) -> bool {
        self.editor.is_onboarding()
    }

    /// Finalizes the draft into a stored note and resets to onboarding.
    ///
    /// # Errors
    /// - `Capture(EmptyDraft)` when nothing has been captured; no state change.
    pub fn save_draft(&mut self) -> Result<Note, BoardError> {
        let content = self.editor.finalize()?;
        Ok(self.store.create(content)?)
    }

    /// Discards the draft and returns to the onboarding prompt state.
    pub fn discard_draft(&mut self) {
        self.editor.replace("");
    }

    // --- capture: speech path ---

    /// Starts a dictation session feeding the draft.
    pub fn start_recording(&mut self) -> Result<(), BoardError> {
        Ok(self.recorder.start()?)
    }

    /// Stops the active dictation session, if any.
    ///
    /// The dictated draft stays in the editor, ready for `save_draft`.
    pub fn stop_recording(&mut self) {
        self.recorder.stop();
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    /// Routes one host speech event into the draft.
    pub fn speech_event(&mut self, event: &SpeechEvent) {
        if let Some(transcript) = self.recorder.apply_event(event) {
            self.editor.replace(transcript);
        }
    }
}
