//! # Codeplug Merge CLI
//!
//! This is the binary entry point for the `codeplug-merge` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Loading the codeplug, directory, and hardware profile.
//! - Running the merge and writing the result, or reporting why it failed.
//!
//! The merge itself lives in the `codeplug_merge` library crate, so the
//! binary stays a thin wrapper around it.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
