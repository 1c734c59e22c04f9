//! # Terminal Output
//!
//! Rendering of the merge report printed by the command-line tool, with
//! color and emoji only when the terminal and the user want them.
//!
//! Color is decided from the `--color=always|never|auto` flag. In `auto`
//! mode the usual conventions apply: `NO_COLOR` (any value) and `CLICOLOR=0`
//! disable color, `CLICOLOR_FORCE=1` forces it, `TERM=dumb` disables it, and
//! otherwise stdout must be a color-capable terminal.
//!
//! ```
//! use codeplug_merge::merge::MergeSummary;
//! use codeplug_merge::output::{render_summary, OutputConfig};
//!
//! let summary = MergeSummary { contacts_added: 2, ..Default::default() };
//! let report = render_summary(&summary, &OutputConfig::from_env_and_flag("never"));
//! assert!(report.contains("2 added"));
//! ```

use console::style;
use std::env;

use crate::merge::MergeSummary;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment and the value of
    /// the `--color` flag.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => env_color_preference(|key| env::var(key).ok())
                .unwrap_or_else(|| console::Term::stdout().features().colors_supported()),
        };

        Self { use_color }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Environment side of color detection. `None` means the environment has no
/// opinion and the terminal decides.
fn env_color_preference(var: impl Fn(&str) -> Option<String>) -> Option<bool> {
    if var("NO_COLOR").is_some() {
        return Some(false);
    }
    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return Some(false);
    }
    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0" && !v.is_empty()) {
        return Some(true);
    }
    if var("TERM").is_some_and(|v| v == "dumb") {
        return Some(false);
    }
    None
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

fn count(config: &OutputConfig, n: usize) -> String {
    if config.use_color {
        style(n).bold().to_string()
    } else {
        n.to_string()
    }
}

/// Render the merge report, one line per collection.
pub fn render_summary(summary: &MergeSummary, config: &OutputConfig) -> String {
    format!(
        "   Contacts: {} matched ({} renamed), {} added\n   Zones: {} carried over, {} from the directory\n   Channels: {} carried over, {} synthesized",
        count(config, summary.contacts_matched),
        count(config, summary.contacts_renamed),
        count(config, summary.contacts_added),
        count(config, summary.zones_carried),
        count(config, summary.zones_synthesized),
        count(config, summary.channels_carried),
        count(config, summary.channels_synthesized),
    )
}
