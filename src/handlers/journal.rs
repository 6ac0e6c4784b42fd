use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::db::{JournalEntry, NewJournalEntry};
use crate::middleware::journal_body::NewEntryBody;
use crate::types::journal::{CreatedEntryResponse, MessageResponse};
use crate::{JournalError, router::JournalState};

/// GET /api/journal -> every entry, newest first.
pub async fn list_entries(
    State(state): State<JournalState>,
) -> Result<Json<Vec<JournalEntry>>, JournalError> {
    let entries = state.storage.list_all().await?;
    if entries.is_empty() {
        info!("No entries found.");
    } else {
        info!(count = entries.len(), "Fetched entries");
    }
    Ok(Json(entries))
}

/// POST /api/journal -> insert and echo the submitted fields.
pub async fn create_entry(
    State(state): State<JournalState>,
    NewEntryBody(payload): NewEntryBody,
) -> Result<(StatusCode, Json<CreatedEntryResponse>), JournalError> {
    let new = NewJournalEntry::from_values(&payload.date, &payload.mood, &payload.entry);
    let id = state.storage.insert(new).await?;
    info!(id, "Entry created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedEntryResponse {
            message: "Entry created successfully",
            date: payload.date,
            mood: payload.mood,
            entry: payload.entry,
        }),
    ))
}

/// GET /api/journal/{date} -> entries stored under exactly that date.
pub async fn entries_by_date(
    State(state): State<JournalState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<JournalEntry>>, JournalError> {
    let entries = state.storage.list_by_date(&date).await?;
    if entries.is_empty() {
        return Err(JournalError::NoEntriesForDate);
    }
    Ok(Json(entries))
}

/// DELETE /api/journal/{id}. A non-integer id cannot match any row.
pub async fn delete_entry(
    State(state): State<JournalState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, JournalError> {
    let id: i64 = raw_id.parse().map_err(|_| JournalError::EntryNotFound)?;
    if state.storage.delete_by_id(id).await? == 0 {
        return Err(JournalError::EntryNotFound);
    }
    info!(id, "Entry deleted");
    Ok(Json(MessageResponse::new("Entry deleted successfully")))
}
