//! Zone and channel synthesis
//!
//! Every repeater in the directory owns a zone of the same name. Those zones
//! are rebuilt from scratch on every run: one channel per group of the
//! repeater's groupset, each a copy of the digital base channel with the
//! repeater's frequencies, color code, and the group as its contact.
//!
//! Zones the directory does not know about ("extra" zones) are carried over
//! unchanged, along with the channels they reference. Channels referenced only
//! by directory-managed zones are discarded with those zones.

use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::HashSet;

use super::names::allocate_name;
use crate::codeplug::{Channel, Codeplug, Zone};
use crate::config::Limits;
use crate::directory::{Directory, Repeater};
use crate::error::{Error, Result};
use crate::frequency;

/// What synthesis did to the zone and channel lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneStats {
    pub zones_carried: usize,
    pub channels_carried: usize,
    pub zones_synthesized: usize,
    pub channels_synthesized: usize,
}

/// The per-repeater values written into each of its channels.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepeaterPlan {
    tx_frequency: String,
    rx_frequency: String,
    color_code: String,
}

impl RepeaterPlan {
    fn for_repeater(repeater: &Repeater) -> Result<Self> {
        let transmit = required_decimal(repeater, "frequency", repeater.frequency.as_deref())?;
        let offset = required_decimal(repeater, "offset", repeater.offset.as_deref())?;
        let color_code = repeater.color.clone().ok_or_else(|| Error::MissingField {
            repeater: repeater.name.clone(),
            field: "color",
        })?;

        Ok(Self {
            tx_frequency: frequency::format(transmit),
            rx_frequency: frequency::format(frequency::receive_frequency(transmit, offset)),
            color_code,
        })
    }
}

fn required_decimal(
    repeater: &Repeater,
    field: &'static str,
    text: Option<&str>,
) -> Result<Decimal> {
    let text = text.ok_or_else(|| Error::MissingField {
        repeater: repeater.name.clone(),
        field,
    })?;
    frequency::parse(text).ok_or_else(|| Error::InvalidFrequency {
        repeater: repeater.name.clone(),
        field,
        value: text.to_string(),
    })
}

/// Collect the zones the directory does not manage and the channels they
/// reference, in reference order. Each channel is taken at most once.
fn carry_over(codeplug: &Codeplug, directory: &Directory) -> (Vec<Zone>, Vec<Channel>) {
    let extra_zones: Vec<Zone> = codeplug
        .zones
        .iter()
        .filter(|zone| !directory.has_repeater(&zone.name))
        .cloned()
        .collect();

    let mut taken = vec![false; codeplug.channels.len()];
    let mut pool = Vec::new();

    for zone in &extra_zones {
        for name in zone.channel_names() {
            let mut found = false;
            for (index, channel) in codeplug.channels.iter().enumerate() {
                if channel.name != *name {
                    continue;
                }
                found = true;
                if !taken[index] {
                    taken[index] = true;
                    pool.push(channel.clone());
                }
            }
            if !found {
                debug!(
                    "Zone '{}' references missing channel '{}'; skipping",
                    zone.name, name
                );
            }
        }
    }

    (extra_zones, pool)
}

/// Build one directory-managed zone, appending its channels to `pool` and
/// registering their names in `used`.
fn build_zone(
    repeater: &Repeater,
    directory: &Directory,
    limits: &Limits,
    used: &mut HashSet<String>,
    pool: &mut Vec<Channel>,
) -> Result<Zone> {
    limits.check_name("zone", &repeater.name)?;
    let mut zone = Zone::new(&repeater.name);

    let Some(groupset) = repeater.groupset_name() else {
        info!("Repeater '{}' has no groupset; zone left empty", repeater.name);
        return Ok(zone);
    };

    let groups = directory
        .groupset(groupset)
        .ok_or_else(|| Error::UnknownGroupset {
            repeater: repeater.name.clone(),
            groupset: groupset.to_string(),
        })?;
    if groups.is_empty() {
        return Ok(zone);
    }

    let plan = RepeaterPlan::for_repeater(repeater)?;
    let mut channel_names = Vec::with_capacity(groups.len());

    for group in groups {
        let name = allocate_name(&zone.name, group, &*used, limits);
        limits.check_name("channel", &name)?;
        used.insert(name.clone());

        channel_names.push(name.clone());
        if channel_names.len() > limits.max_zone_channels {
            return Err(Error::ZoneOverflow {
                zone: zone.name.clone(),
                limit: limits.max_zone_channels,
            });
        }

        let mut channel = Channel::from_template(&directory.digital_base_channel, &name);
        channel.set("ContactName", group.as_str());
        channel.set("TxFrequency", plan.tx_frequency.as_str());
        channel.set("RxFrequency", plan.rx_frequency.as_str());
        channel.set("ColorCode", plan.color_code.as_str());
        debug!("Channel '{}' in zone '{}' -> {}", name, zone.name, group);
        pool.push(channel);
    }

    zone.channel = Some(channel_names);
    Ok(zone)
}

/// Rebuild the codeplug's zones and channels from the directory.
///
/// The result is computed in full before the codeplug is touched, so on error
/// its zones and channels are unchanged.
pub fn synthesize_zones(
    codeplug: &mut Codeplug,
    directory: &Directory,
    limits: &Limits,
) -> Result<ZoneStats> {
    let (mut zones, mut pool) = carry_over(codeplug, directory);
    let mut stats = ZoneStats {
        zones_carried: zones.len(),
        channels_carried: pool.len(),
        ..Default::default()
    };

    let mut used: HashSet<String> = pool.iter().map(|channel| channel.name.clone()).collect();

    for repeater in &directory.repeaters {
        let zone = build_zone(repeater, directory, limits, &mut used, &mut pool)?;
        stats.zones_synthesized += 1;
        stats.channels_synthesized += zone.channel_names().len();
        zones.push(zone);
    }

    codeplug.zones = zones;
    codeplug.channels = pool;
    Ok(stats)
}
