//! CLI argument parsing and execution

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;
use std::path::{Path, PathBuf};

use codeplug_merge::config::{self, Limits};
use codeplug_merge::output::{emoji, render_summary, OutputConfig};
use codeplug_merge::{codeplug, defaults, directory, merge};

/// Codeplug Merge - Regenerate a radio codeplug from a repeater directory
#[derive(Parser, Debug)]
#[command(name = "codeplug-merge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Baseline codeplug (JSON)
    #[arg(value_name = "CODEPLUG")]
    codeplug: Option<PathBuf>,

    /// Repeater directory (YAML)
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Where to write the merged codeplug [default: output.json]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Hardware profile with the radio's name and zone limits
    #[arg(long, value_name = "PATH", env = "CODEPLUG_MERGE_PROFILE")]
    profile: Option<PathBuf>,

    /// Override the profile's maximum name length
    #[arg(long, value_name = "N")]
    max_name_len: Option<usize>,

    /// Override the profile's maximum number of channels per zone
    #[arg(long, value_name = "N")]
    max_zone_channels: Option<usize>,

    /// Run the merge and report, but write nothing
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    // A logger may already be installed when running under tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

impl Cli {
    /// Execute the merge described by the arguments
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let (Some(codeplug_path), Some(directory_path)) = (&self.codeplug, &self.directory) else {
            Cli::command().print_help()?;
            return Ok(());
        };

        let limits = self.resolve_limits()?;
        let output_path = self
            .output
            .clone()
            .unwrap_or_else(defaults::default_output_path);
        let output = OutputConfig::from_env_and_flag(&self.color);

        let mut plug = codeplug::load(codeplug_path)
            .with_context(|| format!("Failed to load codeplug: {}", codeplug_path.display()))?;
        let dir = directory::load(directory_path)
            .with_context(|| format!("Failed to load directory: {}", directory_path.display()))?;

        let summary = merge::merge_codeplug(&mut plug, &dir, &limits)
            .with_context(|| format!("Failed to merge {}", directory_path.display()))?;

        if !self.dry_run {
            codeplug::save(&plug, &output_path, self.pretty)
                .with_context(|| format!("Failed to write codeplug: {}", output_path.display()))?;
            info!("Wrote {}", output_path.display());
        }

        if !self.quiet {
            if self.dry_run {
                println!("{} Dry run, nothing written", emoji(&output, "🔎", "[DRY RUN]"));
            } else {
                println!(
                    "{} Merged codeplug written to {}",
                    emoji(&output, "📻", "[OK]"),
                    output_path.display()
                );
            }
            println!("{}", render_summary(&summary, &output));
        }

        Ok(())
    }

    /// Limits from `--profile`, else the default profile if present, else
    /// the built-in defaults, with flag overrides applied last.
    fn resolve_limits(&self) -> Result<Limits> {
        let profile = self.profile.clone().or_else(|| {
            defaults::default_profile_path().filter(|path| path.is_file())
        });

        let base = match profile {
            Some(path) => load_profile(&path)?,
            None => Limits::default(),
        };

        Ok(base.with_overrides(self.max_name_len, self.max_zone_channels)?)
    }
}

fn load_profile(path: &Path) -> Result<Limits> {
    info!("Using hardware profile {}", path.display());
    config::from_file(path)
        .with_context(|| format!("Failed to load hardware profile: {}", path.display()))
}
