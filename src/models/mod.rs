//! Data models for the pipeline's JSON artifacts.
//!
//! - [`ExtractedMessage`] - One message in reading order
//! - [`ConversationRecord`] - Per-conversation document
//! - [`IndexEntry`] - Journal index row with its search blob
//! - [`ArchiveEntry`] - Markdown archive index row
//!
//! Input exports are not modelled here. They are read through the lenient
//! accessors in [`crate::parsers::json_access`] because their shape varies
//! between export versions.

pub mod archive;
pub mod journal;

pub use archive::ArchiveEntry;
pub use journal::{ConversationRecord, ExtractedMessage, IndexEntry};
