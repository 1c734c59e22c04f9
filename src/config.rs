//! # Hardware Profile Configuration
//!
//! Radios impose two hard limits on a codeplug: how long a label may be and
//! how many channels fit in one zone. This module models those limits as a
//! [`Limits`] value so the merge engine never embeds them as literals.
//!
//! The defaults match the common 16-character / 16-channel handhelds. Other
//! radios are described with a small YAML profile:
//!
//! ```yaml
//! max-name-len: 16
//! max-zone-channels: 16
//! ```
//!
//! Both keys are optional; a missing key keeps its default.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default maximum label length, in characters.
pub const DEFAULT_MAX_NAME_LEN: usize = 16;

/// Default maximum number of channels in one zone.
pub const DEFAULT_MAX_ZONE_CHANNELS: usize = 16;

/// Name and zone-size budgets of the target radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum length of any contact, zone, or channel name, in characters.
    #[serde(rename = "max-name-len")]
    pub max_name_len: usize,

    /// Maximum number of channels a zone may reference.
    #[serde(rename = "max-zone-channels")]
    pub max_zone_channels: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_zone_channels: DEFAULT_MAX_ZONE_CHANNELS,
        }
    }
}

impl Limits {
    /// Return a copy with the given overrides applied.
    pub fn with_overrides(
        mut self,
        max_name_len: Option<usize>,
        max_zone_channels: Option<usize>,
    ) -> Result<Self> {
        if let Some(len) = max_name_len {
            self.max_name_len = len;
        }
        if let Some(count) = max_zone_channels {
            self.max_zone_channels = count;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that both budgets are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_name_len == 0 {
            return Err(Error::InvalidProfile {
                message: "max-name-len must be at least 1".to_string(),
            });
        }
        if self.max_zone_channels == 0 {
            return Err(Error::InvalidProfile {
                message: "max-zone-channels must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Whether `name` fits the label budget.
    pub fn name_fits(&self, name: &str) -> bool {
        name.chars().count() <= self.max_name_len
    }

    /// Fail with [`Error::NameTooLong`] unless `name` fits the label budget.
    pub fn check_name(&self, kind: &'static str, name: &str) -> Result<()> {
        if self.name_fits(name) {
            Ok(())
        } else {
            Err(Error::NameTooLong {
                kind,
                name: name.to_string(),
                limit: self.max_name_len,
            })
        }
    }
}

/// Parse a hardware profile from YAML.
///
/// An empty document yields the default limits.
pub fn parse(yaml_content: &str) -> Result<Limits> {
    if yaml_content.trim().is_empty() {
        return Ok(Limits::default());
    }
    let limits: Limits = serde_yaml::from_str(yaml_content)?;
    limits.validate()?;
    Ok(limits)
}

/// Load a hardware profile from a YAML file.
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Limits> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
