use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::JournalError;
use crate::types::journal::NewEntryPayload;

/// Extracts a create-entry body. Only key presence is checked: `date`,
/// `mood` and `entry` must all exist in a JSON object, whatever their values.
pub struct NewEntryBody(pub NewEntryPayload);

impl<S> FromRequest<S> for NewEntryBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = match Json::<Value>::from_request(req, state).await {
            Ok(v) => v,
            Err(JsonRejection::MissingJsonContentType(rejection)) => {
                return Err(rejection.into_response());
            }
            // Oversized or unreadable bodies keep their own status (413, 400, ...).
            Err(JsonRejection::BytesRejection(rejection)) => {
                return Err(rejection.into_response());
            }
            Err(_) => return Err(JournalError::InvalidInput.into_response()),
        };

        extract_payload(body)
            .map(NewEntryBody)
            .ok_or_else(|| JournalError::InvalidInput.into_response())
    }
}

fn extract_payload(body: Value) -> Option<NewEntryPayload> {
    let Value::Object(mut fields) = body else {
        return None;
    };
    Some(NewEntryPayload {
        date: fields.remove("date")?,
        mood: fields.remove("mood")?,
        entry: fields.remove("entry")?,
    })
}
