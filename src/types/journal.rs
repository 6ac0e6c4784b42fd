use serde::Serialize;
use serde_json::Value;

/// The three fields a create request must carry, exactly as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntryPayload {
    pub date: Value,
    pub mood: Value,
    pub entry: Value,
}

/// `201` body for a created entry: a confirmation plus the submitted fields.
#[derive(Debug, Serialize)]
pub struct CreatedEntryResponse {
    pub message: &'static str,
    pub date: Value,
    pub mood: Value,
    pub entry: Value,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
