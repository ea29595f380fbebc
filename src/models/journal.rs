use serde::Serialize;
use serde_json::Value;

/// One message pulled out of a conversation's node mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedMessage {
    pub role: String,
    pub text: String,
    pub create_time: Option<f64>,
    pub create_time_iso: Option<String>,
}

/// Full per-conversation document written to `conversations/<stem>.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationRecord {
    /// Raw value from the export, passed through unchanged
    pub id: Value,
    pub title: String,
    pub create_time: Value,
    pub create_time_iso: Option<String>,
    pub update_time: Value,
    pub update_time_iso: Option<String>,
    pub tags: Vec<String>,
    pub messages: Vec<ExtractedMessage>,
}

/// Row of the journal's `index.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexEntry {
    pub id: Value,
    pub title: String,
    pub create_time: Value,
    pub create_time_iso: Option<String>,
    pub update_time: Value,
    pub update_time_iso: Option<String>,
    pub tags: Vec<String>,
    pub message_count: usize,
    /// Site-relative location of the full record
    pub path: String,
    pub search: String,
}
