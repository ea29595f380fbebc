//! Journal building for conversation exports
//!
//! Turns each conversation's node mapping into an ordered message list, writes
//! one record per conversation, and writes an index whose entries carry a
//! search blob for client-side substring search.

pub mod builder;
pub mod extract;
pub mod search;

pub use builder::{Journal, JournalSummary, RecordFile, build_journal, run_journal};
pub use extract::{extract_messages, message_text, message_timestamp};
pub use search::build_search_blob;
