//! # Codeplug Merge Library
//!
//! This library regenerates a radio codeplug from a baseline codeplug and a
//! repeater directory. It is used by the `codeplug-merge` command-line tool
//! but works just as well embedded in other programming tools.
//!
//! ## Quick Example
//!
//! ```
//! use codeplug_merge::{codeplug, config::Limits, directory, merge};
//!
//! let mut plug = codeplug::parse(r#"{
//!     "Contacts": [{"CallID": "91", "CallReceiveTone": "No", "CallType": "Group", "Name": "TG91"}],
//!     "Zones": [],
//!     "Channels": []
//! }"#).unwrap();
//!
//! let dir = directory::parse("groups:\n  Worldwide: 91\n").unwrap();
//! merge::merge_codeplug(&mut plug, &dir, &Limits::default()).unwrap();
//!
//! assert_eq!(plug.contacts[0].name, "Worldwide");
//! ```
//!
//! ## Core Concepts
//!
//! - **Codeplug (`codeplug`)**: the JSON document a radio programming tool
//!   imports, with contacts, zones, and channels.
//! - **Directory (`directory`)**: the hand-maintained YAML list of talkgroups,
//!   groupsets, and repeaters.
//! - **Hardware profile (`config`)**: the label and zone-size budgets of the
//!   target radio.
//! - **Merge (`merge`)**: contact reconciliation, zone and channel synthesis,
//!   and channel name allocation.
//!
//! ## Execution Flow
//!
//! 1.  **Load**: parse the codeplug and the directory.
//! 2.  **Reconcile contacts**: rename contacts that match a directory group by
//!     call ID and append contacts for the groups left over.
//! 3.  **Synthesize zones**: keep zones the directory does not manage, rebuild
//!     one zone per repeater with a channel per group of its groupset.
//! 4.  **Emit**: serialize the merged codeplug in a single write.
//!
//! Every failure is fatal and happens before anything is written.

pub mod codeplug;
pub mod config;
pub mod defaults;
pub mod directory;
pub mod error;
pub mod frequency;
pub mod merge;
pub mod output;

#[cfg(test)]
mod names_proptest;
