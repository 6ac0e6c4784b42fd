use crate::error::JournalError;
use crate::types::quote::{Quote, ZenQuote};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Stateless client for the quote-of-the-day endpoint.
pub struct QuoteApi;

impl QuoteApi {
    /// Single attempt, no retries. Any transport error, non-2xx status,
    /// undecodable body, empty list or incomplete first element is an error.
    pub async fn fetch_today(
        client: &reqwest::Client,
        url: &Url,
        timeout: Duration,
    ) -> Result<Quote, JournalError> {
        let resp = client
            .get(url.clone())
            .timeout(timeout)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let quotes: Vec<ZenQuote> = resp.json().await?;
        debug!(count = quotes.len(), "quote API responded");

        quotes
            .into_iter()
            .next()
            .and_then(ZenQuote::into_quote)
            .ok_or(JournalError::UnexpectedQuoteFormat)
    }
}
