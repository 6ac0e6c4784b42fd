use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Textual form SQLite uses for `CURRENT_TIMESTAMP`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub id: i64,
    pub date: String,
    pub mood: Option<String>,
    pub entry: String,
    #[serde(with = "sqlite_timestamp")]
    pub created_at: NaiveDateTime,
}

/// Column values for an insert. `None` binds SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub date: Option<String>,
    pub mood: Option<String>,
    pub entry: Option<String>,
}

impl NewJournalEntry {
    pub fn from_values(date: &Value, mood: &Value, entry: &Value) -> Self {
        Self {
            date: value_as_text(date),
            mood: value_as_text(mood),
            entry: value_as_text(entry),
        }
    }
}

/// Strings are stored verbatim, `null` as NULL, anything else as compact JSON text.
fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

mod sqlite_timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(D::Error::custom)
    }
}
