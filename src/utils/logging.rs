//! Tracing setup for the `chat-journal` binary
//!
//! Events go to stderr so they never mix with anything a transform writes.
//!
//! Usage:
//!   chat-journal journal ...                    # info and above
//!   RUST_LOG=chat_journal=debug chat-journal    # per-conversation detail

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global fmt subscriber, honouring `RUST_LOG`
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
