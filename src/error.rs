//! # Error Handling
//!
//! This module defines the centralized error type for the `codeplug-merge`
//! library. It uses `thiserror` to derive a single `Error` enum covering every
//! way a merge can fail, together with a `Result<T>` alias used throughout the
//! crate.
//!
//! Every variant is fatal. A merge either completes entirely in memory or
//! aborts before any output is written, so callers never observe a partially
//! merged codeplug. The variants fall into three groups:
//!
//! - Directory authoring errors: names over the label budget, zones with too
//!   many channels, groupsets that do not exist, malformed IDs or frequencies.
//! - Codeplug input errors: contacts whose `CallID` is not a number.
//! - Wrapped I/O and (de)serialization errors from the loaders and emitter.

use thiserror::Error;

/// Main error type for codeplug-merge operations
#[derive(Error, Debug)]
pub enum Error {
    /// A name exceeds the label budget of the hardware profile.
    ///
    /// `kind` names what was being labelled ("contact", "zone", "channel").
    #[error("{kind} name '{name}' is longer than {limit} characters")]
    NameTooLong {
        kind: &'static str,
        name: String,
        limit: usize,
    },

    /// A synthesized zone received more channels than the profile allows.
    #[error("zone '{zone}' has more than {limit} channels")]
    ZoneOverflow { zone: String, limit: usize },

    /// A repeater references a groupset that the directory does not define.
    #[error("repeater '{repeater}' references unknown groupset '{groupset}'")]
    UnknownGroupset { repeater: String, groupset: String },

    /// A contact in the codeplug has a `CallID` that is not an integer.
    #[error("contact '{contact}' has non-numeric CallID '{call_id}'")]
    InvalidCallId { contact: String, call_id: String },

    /// A directory group has an ID that is not an integer.
    #[error("group '{group}' has non-numeric ID '{id}'")]
    InvalidGroupId { group: String, id: String },

    /// A repeater frequency or offset could not be read as a decimal number.
    #[error("repeater '{repeater}' has invalid {field} '{value}'")]
    InvalidFrequency {
        repeater: String,
        field: &'static str,
        value: String,
    },

    /// A repeater used for channel synthesis lacks a required field.
    #[error("repeater '{repeater}' is missing '{field}'")]
    MissingField {
        repeater: String,
        field: &'static str,
    },

    /// A hardware profile is unusable.
    #[error("Invalid hardware profile: {message}")]
    InvalidProfile { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
