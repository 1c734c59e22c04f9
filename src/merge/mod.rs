//! Codeplug merge engine
//!
//! This module combines a baseline codeplug with a repeater directory. The
//! work happens in two stages, each in its own submodule:
//!
//! - `contacts` - match existing contacts to directory groups by call ID,
//!   rename the matches, and append contacts for the rest
//! - `zones` - keep zones the directory does not manage, and rebuild one zone
//!   per repeater with channels named by `names`
//!
//! [`merge_codeplug`] runs both stages in order. Any error aborts the merge;
//! the caller is expected to discard the codeplug and write nothing.
//!
//! ## Example
//!
//! ```
//! use codeplug_merge::{codeplug, config::Limits, directory, merge};
//!
//! let mut plug = codeplug::parse(r#"{"Contacts": [], "Zones": [], "Channels": []}"#).unwrap();
//! let dir = directory::parse(r#"
//! groups:
//!   Statewide: 31001
//! groupsets:
//!   state: [Statewide]
//! repeaters:
//!   Portland:
//!     frequency: "146.52000"
//!     offset: "-0.60000"
//!     color: 1
//!     groupset: state
//! "#).unwrap();
//!
//! let summary = merge::merge_codeplug(&mut plug, &dir, &Limits::default()).unwrap();
//! assert_eq!(summary.contacts_added, 1);
//! assert_eq!(plug.zones[0].channel_names(), ["Portland Statewi"]);
//! assert_eq!(plug.channels[0].get_str("RxFrequency"), Some("145.92000"));
//! ```

pub mod contacts;
pub mod names;
pub mod zones;

use log::info;

use crate::codeplug::Codeplug;
use crate::config::Limits;
use crate::directory::Directory;
use crate::error::Result;

pub use contacts::reconcile_contacts;
pub use names::allocate_name;
pub use zones::synthesize_zones;

/// Counts describing what a merge changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub contacts_matched: usize,
    pub contacts_renamed: usize,
    pub contacts_added: usize,
    pub zones_carried: usize,
    pub channels_carried: usize,
    pub zones_synthesized: usize,
    pub channels_synthesized: usize,
}

/// Merge `directory` into `codeplug`.
///
/// Contacts are reconciled first, then zones and channels are rebuilt.
pub fn merge_codeplug(
    codeplug: &mut Codeplug,
    directory: &Directory,
    limits: &Limits,
) -> Result<MergeSummary> {
    let contact_stats = reconcile_contacts(&mut codeplug.contacts, &directory.groups, limits)?;
    info!(
        "Contacts: {} matched ({} renamed), {} added",
        contact_stats.matched, contact_stats.renamed, contact_stats.added
    );

    let zone_stats = synthesize_zones(codeplug, directory, limits)?;
    info!(
        "Zones: {} carried over with {} channels, {} synthesized with {} channels",
        zone_stats.zones_carried,
        zone_stats.channels_carried,
        zone_stats.zones_synthesized,
        zone_stats.channels_synthesized
    );

    Ok(MergeSummary {
        contacts_matched: contact_stats.matched,
        contacts_renamed: contact_stats.renamed,
        contacts_added: contact_stats.added,
        zones_carried: zone_stats.zones_carried,
        channels_carried: zone_stats.channels_carried,
        zones_synthesized: zone_stats.zones_synthesized,
        channels_synthesized: zone_stats.channels_synthesized,
    })
}
