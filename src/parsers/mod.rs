//! Input parsers for conversation exports and markdown front matter
//!
//! # Error Handling Strategy
//!
//! This module follows a **best-effort** approach suited to exports whose
//! shape drifts between producers and versions:
//!
//! - **Document-level failures**: An unreadable file, invalid JSON, or an
//!   export that is not a JSON array is an error. Nothing is written in that
//!   case.
//!
//! - **Field-level gaps**: Missing or oddly typed fields inside a
//!   conversation or message are read through [`json_access`], which answers
//!   `None` instead of failing. Callers substitute documented defaults.
//!
//! - **Front matter**: Never fails. A document without a recognisable block
//!   simply has no metadata.

pub mod export;
pub mod front_matter;
pub mod json_access;

pub use export::load_export;
pub use front_matter::{FrontMatter, parse_front_matter};
