//! Typed draft state for the text capture path.
//!
//! # Responsibility
//! - Hold the in-progress note text and the onboarding prompt state.
//!
//! # Invariants
//! - The onboarding prompt is shown exactly when the draft is empty.
//! - `finalize` on an empty draft fails and changes nothing.

use super::CaptureError;

/// In-progress note content being typed or dictated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftEditor {
    content: String,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft with the given text.
    ///
    /// Clearing the draft to empty returns to the onboarding prompt state;
    /// any non-empty edit leaves it.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    /// Current draft text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the onboarding prompt (dictate or type) should be shown.
    pub fn is_onboarding(&self) -> bool {
        self.content.is_empty()
    }

    /// Takes the finalized draft and resets to the onboarding prompt state.
    ///
    /// # Errors
    /// - `EmptyDraft` when nothing has been captured; the draft is unchanged.
    pub fn finalize(&mut self) -> Result<String, CaptureError> {
        if self.content.is_empty() {
            return Err(CaptureError::EmptyDraft);
        }
        Ok(std::mem::take(&mut self.content))
    }
}
