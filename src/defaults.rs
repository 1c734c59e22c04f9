//! Default values for codeplug-merge.
//!
//! This module provides centralized default values used by the command-line
//! tool, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// File the merged codeplug is written to when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

/// Returns the default output path.
pub fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

/// Returns the default hardware profile path.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/codeplug-merge/profile.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/codeplug-merge/profile.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\codeplug-merge\profile.yaml`
///
/// Returns `None` if the platform configuration directory cannot be
/// determined. The profile is optional; a missing file means the built-in
/// limits apply.
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codeplug-merge").join("profile.yaml"))
}
