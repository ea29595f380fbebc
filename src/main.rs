use anyhow::Result;
use chat_journal::cli;
use chat_journal::utils::init_logging;

fn main() -> Result<()> {
    init_logging()?;
    cli::run()
}
