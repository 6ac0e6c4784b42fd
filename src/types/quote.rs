use serde::{Deserialize, Serialize};

pub const FALLBACK_QUOTE: &str =
    "Keep your face always toward the sunshine—and shadows will fall behind you.";
pub const FALLBACK_AUTHOR: &str = "Walt Whitman";

/// Quote payload returned by `/api/quote`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub fn fallback() -> Self {
        Self {
            quote: FALLBACK_QUOTE.to_string(),
            author: FALLBACK_AUTHOR.to_string(),
        }
    }
}

/// One element of the upstream response list: `q` is the text, `a` the author.
#[derive(Debug, Clone, Deserialize)]
pub struct ZenQuote {
    pub q: Option<String>,
    pub a: Option<String>,
}

impl ZenQuote {
    /// Usable only when both fields are present and not blank.
    pub fn into_quote(self) -> Option<Quote> {
        let quote = self.q.filter(|q| !q.trim().is_empty())?;
        let author = self.a.filter(|a| !a.trim().is_empty())?;
        Some(Quote { quote, author })
    }
}
