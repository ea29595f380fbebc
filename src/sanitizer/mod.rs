//! Redaction of unwanted roles from a conversation export
//!
//! The sanitizer keeps the export's shape intact: conversations keep every
//! node of their mapping, and a redacted node only loses its message payload
//! (`"message": null`). Downstream extraction skips such nodes, so sanitizing
//! and then building the journal acts as a role filter.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};

use crate::parsers::json_access::{get_object, get_str, is_empty_slot};
use crate::parsers::load_export;
use crate::utils::write_json;

/// Roles dropped when none are configured: non-user, non-assistant actors
pub const DEFAULT_DROP_ROLES: [&str; 2] = ["system", "tool"];

const MESSAGE_KEY: &str = "message";

/// What to keep and what to redact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Keep only conversations whose `gizmo_id` equals this value
    pub gizmo_id: Option<String>,
    /// Author roles whose messages are replaced with `null`
    pub drop_roles: BTreeSet<String>,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            gizmo_id: None,
            drop_roles: DEFAULT_DROP_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl SanitizeOptions {
    /// The gizmo filter, ignoring an empty string
    fn gizmo_filter(&self) -> Option<&str> {
        self.gizmo_id.as_deref().filter(|g| !g.is_empty())
    }
}

/// Counts gathered while sanitizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeSummary {
    pub kept: usize,
    pub filtered_out: usize,
    pub skipped_non_objects: usize,
    pub redacted_messages: usize,
}

/// Parse a comma-separated role list such as `"system, tool"`
///
/// Entries are trimmed and empty entries are dropped.
pub fn parse_role_list(list: &str) -> BTreeSet<String> {
    list.split(',').map(str::trim).filter(|r| !r.is_empty()).map(str::to_string).collect()
}

/// Filter and redact a parsed export
///
/// Non-object entries are dropped silently. When a gizmo filter is set,
/// conversations with a different (or missing) `gizmo_id` are dropped whole.
/// Every remaining node whose message author role is in the drop set gets its
/// message replaced with `null`; nothing else is modified.
pub fn sanitize_conversations(
    conversations: Vec<Value>,
    options: &SanitizeOptions,
) -> (Vec<Value>, SanitizeSummary) {
    let mut summary = SanitizeSummary::default();
    let mut kept = Vec::with_capacity(conversations.len());

    for mut conversation in conversations {
        if !conversation.is_object() {
            summary.skipped_non_objects += 1;
            continue;
        }

        if let Some(gizmo_id) = options.gizmo_filter()
            && get_str(&conversation, "gizmo_id") != Some(gizmo_id)
        {
            summary.filtered_out += 1;
            continue;
        }

        summary.redacted_messages += redact_mapping(&mut conversation, &options.drop_roles);
        summary.kept += 1;
        kept.push(conversation);
    }

    (kept, summary)
}

/// Null out messages authored by a dropped role, returning how many were hit
fn redact_mapping(conversation: &mut Value, drop_roles: &BTreeSet<String>) -> usize {
    let Some(mapping) = conversation.get_mut("mapping").and_then(Value::as_object_mut) else {
        return 0;
    };

    let mut redacted = 0;
    for node in mapping.values_mut() {
        let Some(node) = node.as_object_mut() else {
            continue;
        };

        let should_drop = node
            .get(MESSAGE_KEY)
            .filter(|message| !is_empty_slot(message))
            .and_then(|message| get_object(message, "author"))
            .and_then(|author| author.get("role"))
            .and_then(Value::as_str)
            .is_some_and(|role| drop_roles.contains(role));

        if should_drop {
            node.insert(MESSAGE_KEY.to_string(), Value::Null);
            redacted += 1;
        }
    }

    redacted
}

/// Sanitize the export at `input` and write the result to `output`
///
/// # Errors
///
/// Returns an error if the export cannot be read or parsed, or if the output
/// cannot be written. No output is produced in that case.
pub fn run_sanitize(
    input: &Path,
    output: &Path,
    options: &SanitizeOptions,
) -> Result<SanitizeSummary> {
    let conversations = load_export(input)?;
    debug!(
        count = conversations.len(),
        drop_roles = ?options.drop_roles,
        gizmo_id = ?options.gizmo_filter(),
        "loaded export"
    );

    let (sanitized, summary) = sanitize_conversations(conversations, options);
    write_json(output, &sanitized)?;

    info!(
        "Sanitized {} conversations ({} filtered out, {} skipped, {} messages redacted) -> {}",
        summary.kept,
        summary.filtered_out,
        summary.skipped_non_objects,
        summary.redacted_messages,
        output.display()
    );

    Ok(summary)
}
