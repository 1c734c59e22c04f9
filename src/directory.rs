//! # Repeater Directory
//!
//! The directory is a hand-maintained YAML file describing the talkgroups,
//! groupsets, and repeaters a codeplug should contain:
//!
//! ```yaml
//! groups:
//!   Statewide: 31001
//!   PNW Regional: 31771
//! groupsets:
//!   pnw:
//!     - PNW Regional
//!     - Statewide
//! repeaters:
//!   Mt Hood:
//!     frequency: "440.55000"
//!     offset: "5.00000"
//!     color: 1
//!     groupset: pnw
//! Digital Base Channel:
//!   ChannelMode: Digital
//!   Power: High
//! ```
//!
//! Every top-level key is optional. Mapping order is significant: it decides
//! the order of appended contacts and synthesized zones, and which of several
//! groups sharing an ID wins, so all mappings are loaded into ordered vectors.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use serde_yaml::{Mapping, Value as YamlValue};
use std::path::Path;

use crate::error::{Error, Result};

/// A talkgroup and its numeric ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub id: i64,
}

/// A named, ordered list of group names assigned to repeaters together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groupset {
    pub name: String,
    pub groups: Vec<String>,
}

/// A repeater entry. Numeric fields keep the text they were written with so
/// frequencies can be parsed as exact decimals later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repeater {
    pub name: String,
    pub frequency: Option<String>,
    pub offset: Option<String>,
    pub color: Option<String>,
    pub groupset: Option<String>,
}

impl Repeater {
    /// The groupset to synthesize channels from. A blank name counts as none.
    pub fn groupset_name(&self) -> Option<&str> {
        self.groupset.as_deref().filter(|name| !name.is_empty())
    }
}

/// The parsed directory document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub groups: Vec<Group>,
    pub groupsets: Vec<Groupset>,
    pub repeaters: Vec<Repeater>,
    /// Template copied into every synthesized channel.
    pub digital_base_channel: Map<String, JsonValue>,
    /// Reserved for analog channel synthesis; loaded but not used yet.
    pub analog_base_channel: Map<String, JsonValue>,
}

impl Directory {
    /// Look up a groupset's group names.
    pub fn groupset(&self, name: &str) -> Option<&[String]> {
        self.groupsets
            .iter()
            .find(|set| set.name == name)
            .map(|set| set.groups.as_slice())
    }

    /// Whether the directory manages a zone of this name.
    pub fn has_repeater(&self, name: &str) -> bool {
        self.repeaters.iter().any(|repeater| repeater.name == name)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDirectory {
    groups: Option<Mapping>,
    groupsets: Option<Mapping>,
    repeaters: Option<Mapping>,
    #[serde(rename = "Digital Base Channel")]
    digital_base_channel: Option<Map<String, JsonValue>>,
    #[serde(rename = "Analog Base Channel")]
    analog_base_channel: Option<Map<String, JsonValue>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRepeater {
    frequency: Option<YamlValue>,
    offset: Option<YamlValue>,
    color: Option<YamlValue>,
    groupset: Option<YamlValue>,
}

/// Text of a scalar YAML value. Non-scalars have no text.
fn scalar_text(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn yaml_error(message: String) -> Error {
    Error::Yaml(serde::de::Error::custom(message))
}

fn key_text(key: &YamlValue, section: &str) -> Result<String> {
    scalar_text(key)
        .ok_or_else(|| yaml_error(format!("{section} keys must be scalars, found {key:?}")))
}

/// Text of an optional repeater field. Absent and null are `None`; a list or
/// mapping is an authoring error.
fn field_text(value: Option<YamlValue>, repeater: &str, field: &str) -> Result<Option<String>> {
    match value {
        None | Some(YamlValue::Null) => Ok(None),
        Some(value) => scalar_text(&value).map(Some).ok_or_else(|| {
            yaml_error(format!(
                "repeater '{repeater}' {field} must be a scalar, found {value:?}"
            ))
        }),
    }
}

fn parse_groups(mapping: Mapping) -> Result<Vec<Group>> {
    mapping
        .into_iter()
        .map(|(key, value)| -> Result<Group> {
            let name = key_text(&key, "groups")?;
            let text = scalar_text(&value).unwrap_or_else(|| format!("{value:?}"));
            let id = text.trim().parse::<i64>().map_err(|_| Error::InvalidGroupId {
                group: name.clone(),
                id: text.clone(),
            })?;
            Ok(Group { name, id })
        })
        .collect()
}

fn parse_groupsets(mapping: Mapping) -> Result<Vec<Groupset>> {
    mapping
        .into_iter()
        .map(|(key, value)| -> Result<Groupset> {
            let name = key_text(&key, "groupsets")?;
            let groups = match value {
                YamlValue::Null => Vec::new(),
                YamlValue::Sequence(items) => items
                    .iter()
                    .map(|item| {
                        scalar_text(item).ok_or_else(|| {
                            yaml_error(format!(
                                "groupset '{name}' members must be scalars, found {item:?}"
                            ))
                        })
                    })
                    .collect::<Result<Vec<String>>>()?,
                other => {
                    return Err(yaml_error(format!(
                        "groupset '{name}' must be a list, found {other:?}"
                    )))
                }
            };
            Ok(Groupset { name, groups })
        })
        .collect()
}

fn parse_repeaters(mapping: Mapping) -> Result<Vec<Repeater>> {
    mapping
        .into_iter()
        .map(|(key, value)| -> Result<Repeater> {
            let name = key_text(&key, "repeaters")?;
            let raw: RawRepeater = if value.is_null() {
                RawRepeater::default()
            } else {
                serde_yaml::from_value(value)?
            };
            Ok(Repeater {
                frequency: field_text(raw.frequency, &name, "frequency")?,
                offset: field_text(raw.offset, &name, "offset")?,
                color: field_text(raw.color, &name, "color")?,
                groupset: field_text(raw.groupset, &name, "groupset")?,
                name,
            })
        })
        .collect()
}

/// Parse a directory from YAML text.
pub fn parse(yaml_content: &str) -> Result<Directory> {
    if yaml_content.trim().is_empty() {
        return Ok(Directory::default());
    }

    let raw: Option<RawDirectory> = serde_yaml::from_str(yaml_content)?;
    let raw = raw.unwrap_or_default();

    Ok(Directory {
        groups: parse_groups(raw.groups.unwrap_or_default())?,
        groupsets: parse_groupsets(raw.groupsets.unwrap_or_default())?,
        repeaters: parse_repeaters(raw.repeaters.unwrap_or_default())?,
        digital_base_channel: raw.digital_base_channel.unwrap_or_default(),
        analog_base_channel: raw.analog_base_channel.unwrap_or_default(),
    })
}

/// Load a directory from a YAML file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Directory> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
