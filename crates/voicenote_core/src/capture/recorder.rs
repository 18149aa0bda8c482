//! Dictation state machine over a host speech session.
//!
//! # Responsibility
//! - Drive the `Idle ⇄ Recording` lifecycle of one recognition session.
//! - Rebuild the dictated draft from cumulative transcript events.
//!
//! # Invariants
//! - The session handle is owned here; it exists exactly while `Recording`.
//! - Starting while `Recording` is an illegal transition, not a second session.
//! - Transcript events replace the draft wholesale; nothing is appended.

use super::speech::{SpeechCapability, SpeechConfig, SpeechEvent, SpeechSession};
use super::CaptureError;
use log::{info, warn};

/// Recorder lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording,
}

/// Long-lived dictation component owning the active session, if any.
pub struct SpeechRecorder {
    capability: SpeechCapability,
    config: SpeechConfig,
    session: Option<Box<dyn SpeechSession>>,
}

impl SpeechRecorder {
    /// Creates a recorder over the capability selected at startup.
    pub fn new(capability: SpeechCapability) -> Self {
        Self::with_config(capability, SpeechConfig::default())
    }

    pub fn with_config(capability: SpeechCapability, config: SpeechConfig) -> Self {
        Self {
            capability,
            config,
            session: None,
        }
    }

    pub fn state(&self) -> RecorderState {
        if self.session.is_some() {
            RecorderState::Recording
        } else {
            RecorderState::Idle
        }
    }

    pub fn is_recording(&self) -> bool {
        self.state() == RecorderState::Recording
    }

    /// Opens and starts a recognition session, entering `Recording`.
    ///
    /// # Errors
    /// - `AlreadyRecording` when a session is active; the session is kept.
    /// - `CapabilityUnavailable` on hosts without an engine; stays `Idle`.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.session.is_some() {
            return Err(CaptureError::AlreadyRecording);
        }

        let mut session = self.capability.open_session(&self.config)?;
        session.start();
        self.session = Some(session);

        info!(
            "event=recording_start module=capture status=ok locale={}",
            self.config.locale
        );
        Ok(())
    }

    /// Applies one host event, returning the rebuilt draft text if any.
    ///
    /// Transcript events recompute the whole draft as the concatenation of
    /// all segment texts in emission order, so interim text is superseded as
    /// more audio is processed. Recognition errors are logged and recording
    /// continues. Events arriving while `Idle` (late, after stop) are ignored.
    pub fn apply_event(&mut self, event: &SpeechEvent) -> Option<String> {
        if self.session.is_none() {
            return None;
        }

        match event {
            SpeechEvent::Transcript(segments) => {
                let transcript: String = segments
                    .iter()
                    .map(|segment| segment.text.as_str())
                    .collect();
                Some(transcript)
            }
            SpeechEvent::Error(message) => {
                warn!(
                    "event=recognition_error module=capture status=error error={}",
                    message
                );
                None
            }
        }
    }

    /// Stops and drops the active session, returning to `Idle`.
    ///
    /// No-op when already `Idle`. The accumulated draft stays with the
    /// editor and is finalized identically to the text path.
    pub fn stop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
            info!("event=recording_stop module=capture status=ok");
        }
    }
}
