//! # Codeplug Document Model
//!
//! A codeplug is the JSON document a radio programming tool imports: the
//! complete set of contacts, channels, and zones for one radio. Only the
//! fields the merge engine reads or writes are typed here. Every other field,
//! at the top level and inside each record, is kept in an ordered `extra` map
//! so a codeplug round-trips through the merge without losing data the radio
//! vendor's tool put there.
//!
//! Records also remember the order their keys were read in. Writing a record
//! back follows that order, typed fields included, so carried-over contacts,
//! zones, and channels come out laid out the way they went in.
//!
//! ```
//! use codeplug_merge::codeplug;
//!
//! let plug = codeplug::parse(r#"{
//!     "Contacts": [{"CallID": "91", "CallReceiveTone": "No", "CallType": "Group", "Name": "WW"}],
//!     "Zones": [],
//!     "Channels": []
//! }"#).unwrap();
//! assert_eq!(plug.contacts[0].name, "WW");
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Call type given to contacts created from directory groups.
pub const GROUP_CALL_TYPE: &str = "Group";

/// Receive tone setting given to contacts created from directory groups.
pub const GROUP_CALL_RECEIVE_TONE: &str = "No";

type Record = Map<String, Value>;

/// Key order of a record as it was read. Records built here have none and
/// serialize typed fields first.
///
/// Layout is not content: any two orders compare equal.
#[derive(Debug, Clone, Default)]
struct KeyOrder(Vec<String>);

impl PartialEq for KeyOrder {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl KeyOrder {
    fn of(record: &Record) -> Self {
        Self(record.keys().cloned().collect())
    }

    /// Lay out `typed` and `extra` in the recorded order. Keys the order does
    /// not mention follow, typed fields first. `None` typed values are left
    /// out.
    fn arrange(&self, typed: Vec<(&str, Option<Value>)>, extra: Record) -> Record {
        let mut slots: Vec<(String, Option<Value>)> = typed
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .chain(extra.into_iter().map(|(key, value)| (key, Some(value))))
            .collect();

        let mut record = Map::new();
        for key in &self.0 {
            let value = slots
                .iter_mut()
                .find(|(slot, _)| slot == key)
                .and_then(|(_, value)| value.take());
            if let Some(value) = value {
                record.insert(key.clone(), value);
            }
        }
        for (key, value) in slots {
            if let Some(value) = value {
                record.insert(key, value);
            }
        }
        record
    }
}

fn field_error(key: &str, err: impl std::fmt::Display) -> String {
    format!("invalid `{key}`: {err}")
}

fn required<T: DeserializeOwned>(record: &mut Record, key: &str) -> std::result::Result<T, String> {
    let value = record
        .remove(key)
        .ok_or_else(|| format!("missing field `{key}`"))?;
    serde_json::from_value(value).map_err(|err| field_error(key, err))
}

fn optional<T: DeserializeOwned>(
    record: &mut Record,
    key: &str,
) -> std::result::Result<Option<T>, String> {
    match record.remove(key) {
        Some(value) => serde_json::from_value(value).map_err(|err| field_error(key, err)),
        None => Ok(None),
    }
}

fn records<T: Into<Record>>(items: Vec<T>) -> Value {
    Value::Array(items.into_iter().map(|item| Value::Object(item.into())).collect())
}

/// The root codeplug document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Codeplug {
    pub contacts: Vec<Contact>,
    pub zones: Vec<Zone>,
    /// Missing from some exports; read as empty.
    pub channels: Vec<Channel>,
    /// Top-level sections the merge does not touch.
    pub extra: Map<String, Value>,
    order: KeyOrder,
}

impl TryFrom<Record> for Codeplug {
    type Error = String;

    fn try_from(mut record: Record) -> std::result::Result<Self, String> {
        let order = KeyOrder::of(&record);
        Ok(Self {
            contacts: required(&mut record, "Contacts")?,
            zones: required(&mut record, "Zones")?,
            channels: optional(&mut record, "Channels")?.unwrap_or_default(),
            extra: record,
            order,
        })
    }
}

impl From<Codeplug> for Record {
    fn from(plug: Codeplug) -> Self {
        let typed = vec![
            ("Contacts", Some(records(plug.contacts))),
            ("Zones", Some(records(plug.zones))),
            ("Channels", Some(records(plug.channels))),
        ];
        plug.order.arrange(typed, plug.extra)
    }
}

/// An addressable call target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Contact {
    /// Numeric call ID. Some tools export it as a string, others as a number;
    /// it is always written back as a string.
    pub call_id: String,
    pub call_receive_tone: Option<String>,
    pub call_type: Option<String>,
    pub name: String,
    pub extra: Map<String, Value>,
    order: KeyOrder,
}

impl Contact {
    /// A talkgroup contact for a directory group.
    pub fn group(name: &str, id: i64) -> Self {
        Self {
            call_id: id.to_string(),
            call_receive_tone: Some(GROUP_CALL_RECEIVE_TONE.to_string()),
            call_type: Some(GROUP_CALL_TYPE.to_string()),
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl TryFrom<Record> for Contact {
    type Error = String;

    fn try_from(mut record: Record) -> std::result::Result<Self, String> {
        let order = KeyOrder::of(&record);
        let call_id = match record.remove("CallID") {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(field_error("CallID", other)),
            None => return Err("missing field `CallID`".to_string()),
        };
        Ok(Self {
            call_id,
            call_receive_tone: optional(&mut record, "CallReceiveTone")?,
            call_type: optional(&mut record, "CallType")?,
            name: required(&mut record, "Name")?,
            extra: record,
            order,
        })
    }
}

impl From<Contact> for Record {
    fn from(contact: Contact) -> Self {
        let typed = vec![
            ("CallID", Some(Value::String(contact.call_id))),
            ("CallReceiveTone", contact.call_receive_tone.map(Value::String)),
            ("CallType", contact.call_type.map(Value::String)),
            ("Name", Some(Value::String(contact.name))),
        ];
        contact.order.arrange(typed, contact.extra)
    }
}

/// A named, ordered list of channel references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Zone {
    pub name: String,
    /// Channel names, in display order. `None` when the source zone had no
    /// `Channel` key at all.
    pub channel: Option<Vec<String>>,
    pub extra: Map<String, Value>,
    order: KeyOrder,
}

impl Zone {
    /// An empty zone that serializes with an explicit empty `Channel` list.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            channel: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Names of the channels this zone references.
    pub fn channel_names(&self) -> &[String] {
        self.channel.as_deref().unwrap_or_default()
    }
}

impl TryFrom<Record> for Zone {
    type Error = String;

    fn try_from(mut record: Record) -> std::result::Result<Self, String> {
        let order = KeyOrder::of(&record);
        Ok(Self {
            name: required(&mut record, "Name")?,
            channel: optional(&mut record, "Channel")?,
            extra: record,
            order,
        })
    }
}

impl From<Zone> for Record {
    fn from(zone: Zone) -> Self {
        let channel = zone
            .channel
            .map(|names| Value::Array(names.into_iter().map(Value::String).collect()));
        let typed = vec![("Name", Some(Value::String(zone.name))), ("Channel", channel)];
        zone.order.arrange(typed, zone.extra)
    }
}

/// One tunable channel. Everything but the name is kept as raw fields, since
/// channel layouts differ between radio models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Channel {
    pub name: String,
    pub fields: Map<String, Value>,
    order: KeyOrder,
}

impl Channel {
    /// Start a channel from a base template. A `Name` in the template is
    /// replaced by `name`.
    pub fn from_template(template: &Map<String, Value>, name: &str) -> Self {
        let fields = template
            .iter()
            .filter(|(key, _)| key.as_str() != "Name")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self {
            name: name.to_string(),
            fields,
            ..Default::default()
        }
    }

    /// Set a string field, keeping its position if the template already had it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.fields
            .insert(key.to_string(), Value::String(value.into()));
    }

    /// Read a string field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl TryFrom<Record> for Channel {
    type Error = String;

    fn try_from(mut record: Record) -> std::result::Result<Self, String> {
        let order = KeyOrder::of(&record);
        Ok(Self {
            name: required(&mut record, "Name")?,
            fields: record,
            order,
        })
    }
}

impl From<Channel> for Record {
    fn from(channel: Channel) -> Self {
        let typed = vec![("Name", Some(Value::String(channel.name)))];
        channel.order.arrange(typed, channel.fields)
    }
}

/// Parse a codeplug from JSON text.
pub fn parse(json: &str) -> Result<Codeplug> {
    Ok(serde_json::from_str(json)?)
}

/// Load a codeplug from a JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Codeplug> {
    let content = fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Serialize a codeplug to JSON text.
pub fn to_json(codeplug: &Codeplug, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(codeplug)?
    } else {
        serde_json::to_string(codeplug)?
    };
    Ok(text)
}

/// Write a codeplug to `path`.
///
/// The document is fully serialized before the file is opened, so a
/// serialization failure never leaves a truncated file behind.
pub fn save<P: AsRef<Path>>(codeplug: &Codeplug, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let text = to_json(codeplug, pretty)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}
