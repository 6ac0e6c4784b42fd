use axum::{Json, extract::State};
use tracing::warn;

use crate::api::quote_api::QuoteApi;
use crate::router::JournalState;
use crate::types::quote::Quote;

/// GET /api/quote -> upstream quote of the day, or the fallback on any failure.
pub async fn quote_handler(State(state): State<JournalState>) -> Json<Quote> {
    match QuoteApi::fetch_today(&state.client, &state.quote_url, state.quote_timeout).await {
        Ok(quote) => Json(quote),
        Err(e) => {
            warn!(error = %e, "Failed to fetch quote from API, using fallback quote");
            Json(Quote::fallback())
        }
    }
}
