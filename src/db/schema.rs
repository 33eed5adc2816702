//! DDL for the tables the service reads and updates.
//!
//! The server never runs this; the database is expected to be provisioned
//! beforehand. Statements stay within the subset MySQL and SQLite share.

/// - `messages.text`: the greeting returned to callers (first row wins)
/// - `visits.count`: the counter in the row with `id = 1`
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    text VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY,
    count INTEGER NOT NULL DEFAULT 0
);
"#;
