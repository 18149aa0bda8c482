use std::cell::RefCell;
use std::rc::Rc;
use voicenote_core::storage::open_store_in_memory;
use voicenote_core::{
    BoardError, CaptureError, NoteBoard, SessionFactory, SpeechCapability, SpeechConfig,
    SpeechEvent, SpeechSession, TranscriptSegment,
};

struct NullSession;

impl SpeechSession for NullSession {
    fn start(&mut self) {}
    fn stop(&mut self) {}
}

struct NullEngine;

impl SessionFactory for NullEngine {
    fn open_session(&self, _config: &SpeechConfig) -> Box<dyn SpeechSession> {
        Box::new(NullSession)
    }
}

fn text_only_board(conn: &rusqlite::Connection) -> NoteBoard<'_> {
    NoteBoard::open(conn, SpeechCapability::Unavailable).unwrap()
}

fn transcript(text: &str) -> SpeechEvent {
    SpeechEvent::Transcript(vec![TranscriptSegment {
        text: text.to_string(),
        is_final: true,
    }])
}

#[test]
fn create_delete_search_end_to_end() {
    let conn = open_store_in_memory().unwrap();
    let mut board = text_only_board(&conn);

    let hello = board.create_note("hello").unwrap();
    assert_eq!(board.notes().len(), 1);

    board.create_note("world").unwrap();
    let contents: Vec<&str> = board
        .notes()
        .iter()
        .map(|note| note.content.as_str())
        .collect();
    assert_eq!(contents, vec!["world", "hello"]);

    assert!(board.delete_note(hello.id).unwrap());
    assert_eq!(board.notes().len(), 1);
    assert_eq!(board.notes()[0].content, "world");

    board.set_query("wor");
    let visible = board.visible_notes();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].content, "world");

    board.set_query("xyz");
    assert!(board.visible_notes().is_empty());
}

#[test]
fn visible_notes_recompute_on_every_read() {
    let conn = open_store_in_memory().unwrap();
    let mut board = text_only_board(&conn);

    board.set_query("plan");
    assert!(board.visible_notes().is_empty());

    // A mutation after the query was set is reflected immediately.
    board.create_note("plan the trip").unwrap();
    assert_eq!(board.visible_notes().len(), 1);
}

#[test]
fn typed_draft_saves_into_the_store_and_resets() {
    let conn = open_store_in_memory().unwrap();
    let mut board = text_only_board(&conn);

    assert!(board.is_onboarding());
    board.edit_draft("dictated or typed");
    assert!(!board.is_onboarding());

    let note = board.save_draft().unwrap();
    assert_eq!(note.content, "dictated or typed");
    assert!(board.is_onboarding());
    assert_eq!(board.notes().len(), 1);
}

#[test]
fn saving_an_empty_draft_is_a_transient_notice() {
    let conn = open_store_in_memory().unwrap();
    let mut board = text_only_board(&conn);

    let err = board.save_draft().unwrap_err();
    assert!(matches!(
        err,
        BoardError::Capture(CaptureError::EmptyDraft)
    ));
    assert!(board.notes().is_empty());
}

#[test]
fn discarding_returns_to_onboarding_without_storing() {
    let conn = open_store_in_memory().unwrap();
    let mut board = text_only_board(&conn);

    board.edit_draft("never mind");
    board.discard_draft();

    assert!(board.is_onboarding());
    assert!(board.notes().is_empty());
}

#[test]
fn dictation_feeds_the_draft_and_saves_like_the_text_path() {
    let conn = open_store_in_memory().unwrap();
    let mut board =
        NoteBoard::open(&conn, SpeechCapability::Available(Box::new(NullEngine))).unwrap();

    board.start_recording().unwrap();
    assert!(board.is_recording());

    board.speech_event(&transcript("lembrar de"));
    board.speech_event(&transcript("lembrar de comprar leite"));
    assert_eq!(board.draft(), "lembrar de comprar leite");

    board.stop_recording();
    assert!(!board.is_recording());
    // The accumulated draft survives the stop and saves like typed text.
    assert_eq!(board.draft(), "lembrar de comprar leite");

    let note = board.save_draft().unwrap();
    assert_eq!(note.content, "lembrar de comprar leite");
    assert!(board.is_onboarding());
}

#[test]
fn recording_on_a_host_without_the_capability_fails_cleanly() {
    let conn = open_store_in_memory().unwrap();
    let mut board = text_only_board(&conn);

    let err = board.start_recording().unwrap_err();
    assert!(matches!(
        err,
        BoardError::Capture(CaptureError::CapabilityUnavailable)
    ));
    assert!(!board.is_recording());

    // The text path keeps working.
    board.edit_draft("typed instead");
    assert!(board.save_draft().is_ok());
}

#[test]
fn late_speech_events_after_stop_do_not_touch_the_draft() {
    let conn = open_store_in_memory().unwrap();
    let mut board =
        NoteBoard::open(&conn, SpeechCapability::Available(Box::new(NullEngine))).unwrap();

    board.start_recording().unwrap();
    board.speech_event(&transcript("final text"));
    board.stop_recording();

    board.speech_event(&transcript("stale engine flush"));
    assert_eq!(board.draft(), "final text");
}
