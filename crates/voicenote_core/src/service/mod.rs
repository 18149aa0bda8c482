//! Use-case facade composing store, search and capture.
//!
//! # Responsibility
//! - Provide the intent-level API consumed by rendering surfaces.
//!
//! # Invariants
//! - Facade APIs never bypass store validation/persistence contracts.
//! - The visible subset is recomputed from live state on every read.

pub mod board;
