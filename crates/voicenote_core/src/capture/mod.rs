//! Note content capture: typed drafts and dictated speech.
//!
//! # Responsibility
//! - Collect note content from direct text entry (`DraftEditor`).
//! - Collect note content from a host speech-to-text session
//!   (`SpeechRecorder` over an injected `SpeechCapability`).
//!
//! # Invariants
//! - Capture never touches the store; it only produces finalized strings.
//! - At most one recognition session exists at a time.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod draft;
pub mod recorder;
pub mod speech;

/// Capture error taxonomy. All variants are user-visible transient notices;
/// none of them leaves capture state corrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Save was requested with an empty draft.
    EmptyDraft,
    /// The host exposes no speech-recognition capability.
    CapabilityUnavailable,
    /// A recording session is already active.
    AlreadyRecording,
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDraft => write!(f, "cannot save an empty note"),
            Self::CapabilityUnavailable => {
                write!(f, "speech recognition is not supported on this host")
            }
            Self::AlreadyRecording => write!(f, "a recording session is already active"),
        }
    }
}

impl Error for CaptureError {}
