pub mod journal;
pub mod quote;

use axum::Json;

use crate::types::journal::MessageResponse;

/// GET / -> static welcome payload.
pub async fn home_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Daily Journal API!"))
}
