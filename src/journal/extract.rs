//! Message extraction from a conversation's node mapping

use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::Value;

use crate::models::ExtractedMessage;
use crate::parsers::json_access::{
    coerce_epoch, first_present, get, get_array, get_object, is_empty_slot,
};
use crate::utils::epoch_to_iso;

/// Message timestamp fields, in priority order
pub const TIMESTAMP_KEYS: [&str; 3] = ["create_time", "created_at", "timestamp"];

const PART_SEPARATOR: &str = "\n";

/// Extract every readable message of a conversation, in reading order
///
/// Nodes are visited in mapping order. Nodes without a message, and messages
/// without a string `author.role`, are skipped; this is how messages redacted
/// by the sanitizer disappear.
///
/// If at least one message carries a timestamp the result is sorted by it,
/// with undated messages after all dated ones in their original order.
/// Otherwise mapping order is kept as-is.
pub fn extract_messages(conversation: &Value) -> Vec<ExtractedMessage> {
    let Some(mapping) = get_object(conversation, "mapping") else {
        return Vec::new();
    };

    let mut messages: Vec<ExtractedMessage> =
        mapping.values().filter_map(extract_node_message).collect();
    sort_by_timestamp(&mut messages);
    messages
}

fn extract_node_message(node: &Value) -> Option<ExtractedMessage> {
    let message = get(node, "message").filter(|m| !is_empty_slot(m))?;
    let role = get_object(message, "author")?.get("role")?.as_str()?;
    let create_time = message_timestamp(message);

    Some(ExtractedMessage {
        role: role.to_string(),
        text: message_text(message),
        create_time,
        create_time_iso: create_time.and_then(epoch_to_iso),
    })
}

/// Plain text of a message
///
/// Handles both content shapes seen in exports: `{"parts": [...]}`, whose
/// non-null parts are joined with newlines, and a bare string. Anything else
/// yields an empty string.
pub fn message_text(message: &Value) -> String {
    match get(message, "content") {
        Some(Value::String(text)) => text.clone(),
        Some(content) => get_array(content, "parts")
            .map(|parts| {
                parts.iter().filter_map(part_text).collect::<Vec<_>>().join(PART_SEPARATOR)
            })
            .unwrap_or_default(),
        None => String::new(),
    }
}

/// String parts verbatim, structured parts (asset pointers etc.) as compact JSON
fn part_text(part: &Value) -> Option<Cow<'_, str>> {
    match part {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        other => Some(Cow::Owned(other.to_string())),
    }
}

/// First usable timestamp among [`TIMESTAMP_KEYS`], as epoch seconds
pub fn message_timestamp(message: &Value) -> Option<f64> {
    first_present(message, &TIMESTAMP_KEYS).and_then(coerce_epoch)
}

/// Sort by timestamp, but only when any message has one
pub fn sort_by_timestamp(messages: &mut [ExtractedMessage]) {
    if messages.iter().any(|m| m.create_time.is_some()) {
        messages.sort_by(|a, b| timestamp_order(a.create_time, b.create_time));
    }
}

/// Ascending order on `(is_none, value_or_zero)`: dated first, undated last
pub fn timestamp_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.is_none().cmp(&b.is_none()).then_with(|| {
        a.unwrap_or(0.0).partial_cmp(&b.unwrap_or(0.0)).unwrap_or(Ordering::Equal)
    })
}
