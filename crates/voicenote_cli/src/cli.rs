//! Command-line surface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "voicenote")]
#[command(version)]
#[command(about = "Capture, search and manage quick voice/text notes")]
pub struct Cli {
    /// Path of the note store database.
    #[arg(long, default_value = "voicenote.sqlite3", global = true)]
    pub db: PathBuf,

    /// Directory for rolling log files; logging stays off when omitted.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a note from the given content.
    Add {
        /// Note text; must not be empty.
        content: String,
    },
    /// List notes, newest first, optionally filtered by a search query.
    List {
        /// Case-insensitive substring to filter note content.
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete a note by ID. Deleting an unknown ID is not an error.
    Delete {
        /// Note ID as printed by `list`.
        id: String,
    },
    /// Shorthand for `list --search <query>`.
    Search {
        /// Case-insensitive substring to filter note content.
        query: String,
    },
    /// Interactively compose a note (type, or dictate where supported).
    Compose,
}
