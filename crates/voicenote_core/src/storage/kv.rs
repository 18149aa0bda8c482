//! Single-key blob read/write contract over the `kv_store` table.
//!
//! # Responsibility
//! - Keep SQL details of the key-value contract inside the storage boundary.
//!
//! # Invariants
//! - Writes replace the whole value under the key (no incremental updates).
//! - A missing key reads back as `None`, never as an error.

use super::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Fixed key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Reads the text blob stored under `key`, or `None` when absent.
pub fn read_value(conn: &Connection, key: &str) -> StorageResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1;",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Replaces the text blob stored under `key`.
pub fn write_value(conn: &Connection, key: &str, value: &str) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, strftime('%s', 'now') * 1000)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at;",
        params![key, value],
    )?;
    Ok(())
}
