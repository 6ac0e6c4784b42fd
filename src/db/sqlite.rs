use crate::db::models::{JournalEntry, NewJournalEntry, TIMESTAMP_FORMAT};
use crate::db::schema::SQLITE_INIT;
use crate::error::JournalError;
use chrono::NaiveDateTime;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Connection factory for the journal table. Every query acquires its own
/// connection and hands it back when the call returns, success or not.
#[derive(Clone)]
pub struct JournalStorage {
    pool: SqlitePool,
}

impl JournalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if needed) the database at a `sqlite:` URL.
    pub async fn open(database_url: &str) -> Result<Self, JournalError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        info!(database_url = %database_url, "journal database opened");
        Ok(Self::new(pool))
    }

    /// Acquire a connection scoped to the caller. Rows fetched through it are
    /// read by column name.
    pub async fn connect(&self) -> Result<PoolConnection<Sqlite>, JournalError> {
        Ok(self.pool.acquire().await?)
    }

    /// Create the entries table if it is missing. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<(), JournalError> {
        let mut conn = self.connect().await?;
        sqlx::query(SQLITE_INIT).execute(&mut *conn).await?;
        Ok(())
    }

    /// All entries, newest first.
    pub async fn list_all(&self) -> Result<Vec<JournalEntry>, JournalError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(
            r#"SELECT id, date, mood, entry, created_at
               FROM journal_entries ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&mut *conn)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    /// Entries whose `date` column equals `date` exactly.
    pub async fn list_by_date(&self, date: &str) -> Result<Vec<JournalEntry>, JournalError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(
            r#"SELECT id, date, mood, entry, created_at
               FROM journal_entries WHERE date = ?
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(date)
        .fetch_all(&mut *conn)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    /// Insert a row and return its id.
    pub async fn insert(&self, new: NewJournalEntry) -> Result<i64, JournalError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("INSERT INTO journal_entries (date, mood, entry) VALUES (?, ?, ?)")
            .bind(new.date)
            .bind(new.mood)
            .bind(new.entry)
            .execute(&mut *conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete by primary key. Returns the number of rows removed (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, JournalError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, JournalError> {
        let mut conn = self.connect().await?;
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM journal_entries")
            .fetch_one(&mut *conn)
            .await?;
        Ok(rec.0)
    }

    fn row_to_model(row: SqliteRow) -> Result<JournalEntry, JournalError> {
        let id: i64 = row.try_get("id")?;
        let date: String = row.try_get("date")?;
        let mood: Option<String> = row.try_get("mood")?;
        let entry: String = row.try_get("entry")?;
        let created_at_str: String = row.try_get("created_at")?;

        let created_at = NaiveDateTime::parse_from_str(&created_at_str, TIMESTAMP_FORMAT)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(JournalEntry {
            id,
            date,
            mood,
            entry,
            created_at,
        })
    }
}
