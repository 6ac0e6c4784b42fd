use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum JournalError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("No entries found for that date")]
    NoEntriesForDate,

    #[error("Entry not found")]
    EntryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unexpected quote API response format")]
    UnexpectedQuoteFormat,
}

impl IntoResponse for JournalError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            JournalError::InvalidInput => StatusCode::BAD_REQUEST,
            JournalError::NoEntriesForDate | JournalError::EntryNotFound => StatusCode::NOT_FOUND,
            // Upstream variants are normally absorbed by the quote route.
            JournalError::DatabaseError(_)
            | JournalError::Reqwest(_)
            | JournalError::UnexpectedQuoteFormat => {
                error!(error = %self, "internal failure while handling request");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorResponse {
                        error: "An internal server error occurred.".to_string(),
                    }),
                )
                    .into_response();
            }
        };
        (
            status,
            Json(ApiErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Error body shared by every failing route: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn render(err: JournalError) -> (StatusCode, Value) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        (status, serde_json::from_slice(&body).expect("error body was not JSON"))
    }

    #[tokio::test]
    async fn client_errors_carry_their_message() {
        assert_eq!(
            render(JournalError::InvalidInput).await,
            (StatusCode::BAD_REQUEST, json!({"error": "Invalid input"}))
        );
        assert_eq!(
            render(JournalError::EntryNotFound).await,
            (StatusCode::NOT_FOUND, json!({"error": "Entry not found"}))
        );
    }

    #[tokio::test]
    async fn internal_failures_hide_their_cause() {
        let generic = json!({"error": "An internal server error occurred."});
        assert_eq!(
            render(JournalError::UnexpectedQuoteFormat).await,
            (StatusCode::INTERNAL_SERVER_ERROR, generic.clone())
        );
        assert_eq!(
            render(JournalError::DatabaseError(SqlxError::RowNotFound)).await,
            (StatusCode::INTERNAL_SERVER_ERROR, generic)
        );
    }
}
