//! Note collection ownership and persistence.
//!
//! # Responsibility
//! - Define the single source of truth for the note collection.
//! - Isolate blob serialization details from service orchestration.
//!
//! # Invariants
//! - Write paths must pass `Note::validate()` before persistence.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Every mutation persists the full collection synchronously.

pub mod note_store;
