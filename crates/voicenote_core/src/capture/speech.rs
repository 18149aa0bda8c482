//! Host speech-recognition capability abstraction.
//!
//! # Responsibility
//! - Define the session contract consumed by the recorder.
//! - Gate session creation behind an availability check made once at startup.
//!
//! # Invariants
//! - The capability variant is selected once; it is never re-probed per call.
//! - Sessions deliver cumulative transcript segments in emission order.

use super::CaptureError;

/// Fixed recognition locale, matching the product's single supported language.
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Recognition session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechConfig {
    /// BCP 47 locale tag for the recognition language.
    pub locale: String,
    /// Keep listening across pauses until explicitly stopped.
    pub continuous: bool,
    /// Number of alternative hypotheses requested per result.
    pub max_alternatives: u32,
    /// Deliver partial, updated-in-place results while audio is processed.
    pub interim_results: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            continuous: true,
            max_alternatives: 1,
            interim_results: true,
        }
    }
}

/// One transcript segment as recognized so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    /// Best-alternative text for this segment.
    pub text: String,
    /// Whether the engine has finalized this segment.
    pub is_final: bool,
}

/// Event pushed by the host session into the recorder.
///
/// Transcript events carry the cumulative segment list; each event
/// supersedes the previous one rather than extending it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Transcript(Vec<TranscriptSegment>),
    Error(String),
}

/// Active host recognition session.
///
/// The host delivers `SpeechEvent`s out of band (the recorder is handed
/// them by the surface's event loop); the session object only controls
/// the audio capture lifecycle.
pub trait SpeechSession {
    /// Begins audio capture and recognition.
    fn start(&mut self);
    /// Stops audio capture; late events may still arrive and are ignored.
    fn stop(&mut self);
}

/// Factory for host recognition sessions.
pub trait SessionFactory {
    fn open_session(&self, config: &SpeechConfig) -> Box<dyn SpeechSession>;
}

/// Speech capability as detected once at startup.
pub enum SpeechCapability {
    /// The host exposes a working recognition engine.
    Available(Box<dyn SessionFactory>),
    /// No recognition engine on this host; the text path remains usable.
    Unavailable,
}

impl SpeechCapability {
    /// Opens a configured session, or reports the capability gap.
    ///
    /// # Errors
    /// - `CapabilityUnavailable` on hosts without a recognition engine.
    pub fn open_session(&self, config: &SpeechConfig) -> Result<Box<dyn SpeechSession>, CaptureError> {
        match self {
            Self::Available(factory) => Ok(factory.open_session(config)),
            Self::Unavailable => Err(CaptureError::CapabilityUnavailable),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}
