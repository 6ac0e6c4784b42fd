use axum::{Router, extract::DefaultBodyLimit, routing::get};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::Config;
use crate::db::JournalStorage;
use crate::error::JournalError;
use crate::handlers::{home_handler, journal, quote};

/// Request bodies above this size are rejected with `413 Payload Too Large`.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Clone)]
pub struct JournalState {
    pub storage: JournalStorage,
    pub client: reqwest::Client,
    pub quote_url: Url,
    pub quote_timeout: Duration,
}

impl JournalState {
    pub fn new(storage: JournalStorage, cfg: &Config) -> Result<Self, JournalError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("daily-journal/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(cfg.quote_timeout())
            .build()?;
        Ok(Self {
            storage,
            client,
            quote_url: cfg.quote_url.clone(),
            quote_timeout: cfg.quote_timeout(),
        })
    }
}

pub fn journal_router(state: JournalState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/api/journal",
            get(journal::list_entries).post(journal::create_entry),
        )
        .route(
            "/api/journal/{key}",
            get(journal::entries_by_date).delete(journal::delete_entry),
        )
        .route("/api/quote", get(quote::quote_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
