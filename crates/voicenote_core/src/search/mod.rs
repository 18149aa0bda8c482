//! Substring search over the note collection.
//!
//! # Responsibility
//! - Derive the visible subset of notes for a free-text query.
//!
//! # Invariants
//! - An empty query returns every note, same order, same elements.
//! - Matching is case-insensitive substring containment, no tokenization.
//! - Result order preserves the collection order (newest-first).

use crate::model::note::Note;

/// Filters notes whose content contains `query`, case-insensitively.
///
/// Pure function over a borrowed view; no side effects, no persistence.
/// Linear scan; the collection is small enough that rescanning on every
/// keystroke is acceptable.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.content.to_lowercase().contains(&needle))
        .collect()
}
