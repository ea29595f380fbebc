use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::archive::run_archive;
use crate::journal::run_journal;
use crate::sanitizer::{DEFAULT_DROP_ROLES, SanitizeOptions, parse_role_list, run_sanitize};

#[derive(Parser)]
#[command(name = "chat-journal")]
#[command(version = "0.1.0")]
#[command(about = "Build static-site JSON from chat exports and markdown archives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drop unwanted roles (and optionally other gizmos) from a conversation export
    Sanitize(SanitizeArgs),
    /// Build the journal index and per-conversation JSON files
    Journal(IoArgs),
    /// Build the archive index and copy markdown files
    Archive(IoArgs),
}

#[derive(Args)]
pub struct IoArgs {
    /// Input file or directory
    #[arg(long)]
    pub input: PathBuf,
    /// Output file or directory
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct SanitizeArgs {
    /// Path to conversations.json
    #[arg(long)]
    pub input: PathBuf,
    /// Output JSON file
    #[arg(long)]
    pub output: PathBuf,
    /// Only keep conversations with this gizmo_id (e.g. g-p-...)
    #[arg(long)]
    pub gizmo_id: Option<String>,
    /// Comma-separated roles whose messages are removed
    #[arg(long, default_value_t = DEFAULT_DROP_ROLES.join(","))]
    pub drop_roles: String,
}

impl SanitizeArgs {
    pub fn options(&self) -> SanitizeOptions {
        SanitizeOptions {
            gizmo_id: self.gizmo_id.clone(),
            drop_roles: parse_role_list(&self.drop_roles),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Sanitize(args) => {
            run_sanitize(&args.input, &args.output, &args.options())?;
        }
        Commands::Journal(args) => {
            run_journal(&args.input, &args.output)?;
        }
        Commands::Archive(args) => {
            run_archive(&args.input, &args.output)?;
        }
    }

    Ok(())
}
