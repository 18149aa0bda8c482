//! Thin command-line surface over `voicenote_core`.
//!
//! # Responsibility
//! - Map subcommands one-to-one onto note board intents.
//! - Render the visible note subset and transient notices.
//!
//! The CLI host exposes no speech engine, so the speech capability is
//! `Unavailable`; dictation attempts report a notice and the text path
//! stays usable.

mod cli;
mod relative;

use clap::Parser;
use cli::{Cli, Commands};
use relative::format_relative;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use uuid::Uuid;
use voicenote_core::model::note::now_epoch_millis;
use voicenote_core::storage::open_store;
use voicenote_core::{
    default_log_level, init_logging, BoardError, CaptureError, Note, NoteBoard, SpeechCapability,
};

const PREVIEW_MAX_CHARS: usize = 72;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if let Some(log_dir) = &cli.log_dir {
        let default_level = default_log_level();
        let level = cli.log_level.as_deref().unwrap_or(default_level);
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let conn = open_store(&cli.db).map_err(|err| err.to_string())?;
    let mut board =
        NoteBoard::open(&conn, SpeechCapability::Unavailable).map_err(|err| err.to_string())?;

    match &cli.command {
        Commands::Add { content } => {
            let note = board
                .create_note(content.as_str())
                .map_err(|err| err.to_string())?;
            println!("note created: {}", note.id);
        }
        Commands::List { search } => {
            if let Some(query) = search {
                board.set_query(query.as_str());
            }
            render_notes(&board.visible_notes());
        }
        Commands::Search { query } => {
            board.set_query(query.as_str());
            render_notes(&board.visible_notes());
        }
        Commands::Delete { id } => {
            let id = Uuid::parse_str(id).map_err(|_| format!("invalid note id `{id}`"))?;
            if board.delete_note(id).map_err(|err| err.to_string())? {
                println!("note deleted: {id}");
            } else {
                println!("no note with id {id}");
            }
        }
        Commands::Compose => compose(&mut board)?,
    }

    Ok(())
}

fn render_notes(notes: &[&Note]) {
    if notes.is_empty() {
        println!("no notes");
        return;
    }

    let now = now_epoch_millis();
    for note in notes {
        println!(
            "{}  {:>14}  {}",
            note.id,
            format_relative(note.created_at, now),
            preview(&note.content)
        );
    }
}

fn preview(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_MAX_CHARS {
        return flat;
    }
    let mut truncated: String = flat.chars().take(PREVIEW_MAX_CHARS).collect();
    truncated.push_str("...");
    truncated
}

/// Interactive capture session on stdin.
///
/// Plain lines extend the draft; `:record`, `:stop`, `:save`, `:discard`
/// and `:quit` drive the capture flow.
fn compose(board: &mut NoteBoard<'_>) -> Result<(), String> {
    println!("start dictating with :record, or just start typing");
    println!("(:save stores the note, :discard clears it, :quit leaves)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("cannot read input: {err}"))?;
        let input = line.trim_end();

        match input {
            ":quit" => break,
            ":save" => match board.save_draft() {
                Ok(note) => println!("note created: {}", note.id),
                Err(BoardError::Capture(CaptureError::EmptyDraft)) => {
                    println!("{}", CaptureError::EmptyDraft);
                }
                Err(err) => return Err(err.to_string()),
            },
            ":discard" => {
                board.discard_draft();
                println!("draft discarded");
            }
            ":record" => match board.start_recording() {
                Ok(()) => println!("recording... (:stop to finish)"),
                Err(err) => println!("{err}"),
            },
            ":stop" => {
                board.stop_recording();
                println!("recording stopped");
            }
            _ => {
                let draft = if board.draft().is_empty() {
                    input.to_string()
                } else {
                    format!("{}\n{input}", board.draft())
                };
                board.edit_draft(draft);
            }
        }

        if board.is_onboarding() {
            println!("start dictating with :record, or just start typing");
        }
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|err| format!("cannot flush output: {err}"))?;
    }

    Ok(())
}
