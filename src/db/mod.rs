//! Database module: the journal entry model, its schema and the storage accessor.
//!
//! Layout:
//! - `models.rs`: row struct and the insert payload
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: connection factory and the per-request queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{JournalEntry, NewJournalEntry};
pub use sqlite::JournalStorage;
