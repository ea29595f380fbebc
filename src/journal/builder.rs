//! Journal building: per-conversation records plus a sorted search index.
//!
//! # Error Handling Strategy
//!
//! - **Export-level errors**: An unreadable or unparsable export aborts the
//!   run before any file is written.
//! - **Conversation-level gaps**: Missing ids, titles and timestamps fall back
//!   to defaults (`unknown` file stem, `"Untitled"`, `null`). Entries that are
//!   not JSON objects are skipped and only counted.
//! - **Summary**: One `info` line reports what was written.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};

use super::extract::{extract_messages, timestamp_order};
use super::search::build_search_blob;
use crate::models::{ConversationRecord, IndexEntry};
use crate::parsers::json_access::{coerce_epoch, get, get_non_empty_str};
use crate::parsers::load_export;
use crate::utils::{ensure_dir, epoch_to_iso, safe_file_stem, write_json};

/// Title used when a conversation has none
pub const UNTITLED: &str = "Untitled";
/// File stem for conversations without a usable id
pub const UNKNOWN_STEM: &str = "unknown";
/// Directory (under the output root) holding per-conversation records
pub const RECORDS_DIR: &str = "conversations";
/// Index file name (under the output root)
pub const INDEX_FILE: &str = "index.json";
/// Prefix of `IndexEntry::path`, relative to the site root
pub const SITE_RECORDS_PREFIX: &str = "data/conversations";

/// A record together with the file stem it is written under
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFile {
    pub stem: String,
    pub record: ConversationRecord,
}

/// Counts gathered while building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JournalSummary {
    pub conversations: usize,
    pub messages: usize,
    pub fallback_stems: usize,
    pub skipped_non_objects: usize,
}

/// Everything a journal run writes, held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    pub records: Vec<RecordFile>,
    /// Sorted by creation time, undated conversations last
    pub index: Vec<IndexEntry>,
    pub summary: JournalSummary,
}

/// Build records and index from a parsed export
///
/// Records keep export order. Conversations without an id are written as
/// `unknown`. Any file stem already taken, whether by an id-less conversation,
/// a repeated id, or two ids that clean up to the same name, gets a `-2`,
/// `-3`, ... suffix, so no record overwrites another.
pub fn build_journal(conversations: &[Value]) -> Journal {
    let mut journal = Journal::default();
    let mut used_stems = HashSet::new();

    for conversation in conversations {
        if !conversation.is_object() {
            journal.summary.skipped_non_objects += 1;
            continue;
        }

        let id = get(conversation, "id").cloned().unwrap_or(Value::Null);
        let base_stem = match id_stem(&id) {
            Some(stem) => stem,
            None => {
                journal.summary.fallback_stems += 1;
                UNKNOWN_STEM.to_string()
            }
        };
        let stem = unique_stem(base_stem, &mut used_stems);

        let title = get_non_empty_str(conversation, "title").unwrap_or(UNTITLED);
        let create_time = get(conversation, "create_time").cloned().unwrap_or(Value::Null);
        let update_time = get(conversation, "update_time").cloned().unwrap_or(Value::Null);
        let create_time_iso = value_to_iso(&create_time);
        let update_time_iso = value_to_iso(&update_time);

        let messages = extract_messages(conversation);
        let search = build_search_blob(Some(title), &messages);
        debug!(stem = %stem, messages = messages.len(), "built conversation record");

        journal.summary.conversations += 1;
        journal.summary.messages += messages.len();

        journal.index.push(IndexEntry {
            id: id.clone(),
            title: title.to_string(),
            create_time: create_time.clone(),
            create_time_iso: create_time_iso.clone(),
            update_time: update_time.clone(),
            update_time_iso: update_time_iso.clone(),
            tags: Vec::new(),
            message_count: messages.len(),
            path: format!("{}/{}.json", SITE_RECORDS_PREFIX, stem),
            search,
        });

        journal.records.push(RecordFile {
            stem,
            record: ConversationRecord {
                id,
                title: title.to_string(),
                create_time,
                create_time_iso,
                update_time,
                update_time_iso,
                tags: Vec::new(),
                messages,
            },
        });
    }

    journal.index.sort_by(|a, b| {
        timestamp_order(coerce_epoch(&a.create_time), coerce_epoch(&b.create_time))
    });

    journal
}

/// File stem for an id; numeric ids use their decimal form
fn id_stem(id: &Value) -> Option<String> {
    match id {
        Value::String(s) => safe_file_stem(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Claim `base`, or the first free `base-2`, `base-3`, ...
fn unique_stem(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn value_to_iso(value: &Value) -> Option<String> {
    coerce_epoch(value).and_then(epoch_to_iso)
}

/// Build the journal for the export at `input` and write it under `output`
///
/// Produces `output/conversations/<stem>.json` for every conversation and
/// `output/index.json`.
///
/// # Errors
///
/// Returns an error if the export cannot be read or parsed, or if any output
/// file cannot be written.
pub fn run_journal(input: &Path, output: &Path) -> Result<JournalSummary> {
    let conversations = load_export(input)?;
    let journal = build_journal(&conversations);

    let records_dir = output.join(RECORDS_DIR);
    ensure_dir(&records_dir)?;

    for file in &journal.records {
        write_json(&records_dir.join(format!("{}.json", file.stem)), &file.record)?;
    }
    write_json(&output.join(INDEX_FILE), &journal.index)?;

    let summary = journal.summary;
    info!(
        "Wrote {} conversations ({} messages, {} with fallback names, {} skipped) -> {}",
        summary.conversations,
        summary.messages,
        summary.fallback_stems,
        summary.skipped_non_objects,
        output.display()
    );

    Ok(summary)
}
