use std::cell::RefCell;
use std::rc::Rc;
use voicenote_core::{
    CaptureError, RecorderState, SessionFactory, SpeechCapability, SpeechConfig, SpeechEvent,
    SpeechRecorder, SpeechSession, TranscriptSegment,
};

#[derive(Default)]
struct EngineLog {
    sessions_opened: u32,
    starts: u32,
    stops: u32,
    last_locale: Option<String>,
}

struct FakeSession {
    log: Rc<RefCell<EngineLog>>,
}

impl SpeechSession for FakeSession {
    fn start(&mut self) {
        self.log.borrow_mut().starts += 1;
    }

    fn stop(&mut self) {
        self.log.borrow_mut().stops += 1;
    }
}

struct FakeEngine {
    log: Rc<RefCell<EngineLog>>,
}

impl SessionFactory for FakeEngine {
    fn open_session(&self, config: &SpeechConfig) -> Box<dyn SpeechSession> {
        let mut log = self.log.borrow_mut();
        log.sessions_opened += 1;
        log.last_locale = Some(config.locale.clone());
        Box::new(FakeSession {
            log: Rc::clone(&self.log),
        })
    }
}

fn available_engine() -> (SpeechCapability, Rc<RefCell<EngineLog>>) {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let capability = SpeechCapability::Available(Box::new(FakeEngine {
        log: Rc::clone(&log),
    }));
    (capability, log)
}

fn transcript(segments: &[(&str, bool)]) -> SpeechEvent {
    SpeechEvent::Transcript(
        segments
            .iter()
            .map(|(text, is_final)| TranscriptSegment {
                text: (*text).to_string(),
                is_final: *is_final,
            })
            .collect(),
    )
}

#[test]
fn start_without_capability_reports_unavailable_and_stays_idle() {
    let mut recorder = SpeechRecorder::new(SpeechCapability::Unavailable);

    let err = recorder.start().unwrap_err();
    assert_eq!(err, CaptureError::CapabilityUnavailable);
    assert_eq!(recorder.state(), RecorderState::Idle);
}

#[test]
fn start_opens_and_starts_one_configured_session() {
    let (capability, log) = available_engine();
    let mut recorder = SpeechRecorder::new(capability);

    recorder.start().unwrap();

    assert_eq!(recorder.state(), RecorderState::Recording);
    let log = log.borrow();
    assert_eq!(log.sessions_opened, 1);
    assert_eq!(log.starts, 1);
    assert_eq!(log.last_locale.as_deref(), Some("pt-BR"));
}

#[test]
fn second_start_while_recording_is_an_illegal_transition() {
    let (capability, log) = available_engine();
    let mut recorder = SpeechRecorder::new(capability);

    recorder.start().unwrap();
    let err = recorder.start().unwrap_err();

    assert_eq!(err, CaptureError::AlreadyRecording);
    assert_eq!(recorder.state(), RecorderState::Recording);
    // The active session is untouched; no second one was opened.
    assert_eq!(log.borrow().sessions_opened, 1);
}

#[test]
fn transcript_events_rebuild_the_draft_from_scratch() {
    let (capability, _log) = available_engine();
    let mut recorder = SpeechRecorder::new(capability);
    recorder.start().unwrap();

    let first = recorder.apply_event(&transcript(&[("buy mi", false)]));
    assert_eq!(first.as_deref(), Some("buy mi"));

    // Later events supersede interim text instead of appending to it.
    let second = recorder.apply_event(&transcript(&[("buy milk", true), (" tomorrow", false)]));
    assert_eq!(second.as_deref(), Some("buy milk tomorrow"));
}

#[test]
fn recognition_errors_are_swallowed_and_recording_continues() {
    let (capability, _log) = available_engine();
    let mut recorder = SpeechRecorder::new(capability);
    recorder.start().unwrap();

    let outcome = recorder.apply_event(&SpeechEvent::Error("audio-capture".to_string()));
    assert_eq!(outcome, None);
    assert_eq!(recorder.state(), RecorderState::Recording);

    let after = recorder.apply_event(&transcript(&[("still here", true)]));
    assert_eq!(after.as_deref(), Some("still here"));
}

#[test]
fn events_while_idle_are_ignored() {
    let (capability, _log) = available_engine();
    let mut recorder = SpeechRecorder::new(capability);

    assert_eq!(recorder.apply_event(&transcript(&[("late", true)])), None);

    recorder.start().unwrap();
    recorder.stop();
    assert_eq!(recorder.apply_event(&transcript(&[("late", true)])), None);
}

#[test]
fn stop_stops_and_drops_the_session() {
    let (capability, log) = available_engine();
    let mut recorder = SpeechRecorder::new(capability);

    recorder.start().unwrap();
    recorder.stop();

    assert_eq!(recorder.state(), RecorderState::Idle);
    assert_eq!(log.borrow().stops, 1);

    // Stopping again is a no-op.
    recorder.stop();
    assert_eq!(log.borrow().stops, 1);

    // The recorder is long-lived: a fresh session can be started afterwards.
    recorder.start().unwrap();
    assert_eq!(log.borrow().sessions_opened, 2);
}

#[test]
fn default_config_matches_the_recognition_contract() {
    let config = SpeechConfig::default();
    assert_eq!(config.locale, "pt-BR");
    assert!(config.continuous);
    assert_eq!(config.max_alternatives, 1);
    assert!(config.interim_results);
}
