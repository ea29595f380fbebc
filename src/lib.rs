//! Chat Journal - static-site data from chat exports and markdown archives
//!
//! This library turns raw inputs into JSON artifacts a static front end can
//! load directly. It provides three independent batch transforms:
//!
//! - Sanitizing a conversation export by redacting messages from unwanted roles
//! - Building a journal: ordered per-conversation records plus a search index
//! - Building an archive index from markdown front matter, copying the files
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chat_journal::sanitizer::{SanitizeOptions, run_sanitize};
//! use chat_journal::run_journal;
//!
//! run_sanitize(
//!     Path::new("conversations.json"),
//!     Path::new("sanitized.json"),
//!     &SanitizeOptions::default(),
//! )?;
//! let summary = run_journal(Path::new("sanitized.json"), Path::new("site/data"))?;
//! println!("Wrote {} conversations", summary.conversations);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod archive;
pub mod cli;
pub mod journal;
pub mod models;
pub mod parsers;
pub mod sanitizer;
pub mod utils;

// Re-export commonly used types
pub use archive::run_archive;
pub use journal::{build_journal, build_search_blob, extract_messages, run_journal};
pub use models::{ArchiveEntry, ConversationRecord, ExtractedMessage, IndexEntry};
pub use sanitizer::{SanitizeOptions, run_sanitize, sanitize_conversations};
