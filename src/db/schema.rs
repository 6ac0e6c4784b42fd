//! SQL DDL for the journal store.

/// Single-table schema:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids never get reused
/// - `date` and `entry` NOT NULL, `mood` nullable
/// - `created_at` filled by SQLite as `YYYY-MM-DD HH:MM:SS` (UTC)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS journal_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    mood TEXT,
    entry TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;
