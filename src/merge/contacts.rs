//! Contact reconciliation
//!
//! Directory groups are matched to existing codeplug contacts by numeric call
//! ID. A matched contact takes the group's name; a contact with no matching
//! group is left alone, since it is most likely a hand-entered private
//! contact. Groups that matched nothing are appended as new talkgroup
//! contacts.
//!
//! When several groups share one ID, the first in directory order names the
//! contact and the others are consumed without being assigned anywhere.

use log::debug;

use crate::codeplug::Contact;
use crate::config::Limits;
use crate::directory::Group;
use crate::error::{Error, Result};

/// What reconciliation did to the contact list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactStats {
    /// Existing contacts that matched a directory group.
    pub matched: usize,
    /// Matched contacts whose name actually changed.
    pub renamed: usize,
    /// Contacts appended for groups nothing matched.
    pub added: usize,
}

fn parse_call_id(contact: &Contact) -> Result<i64> {
    contact
        .call_id
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidCallId {
            contact: contact.name.clone(),
            call_id: contact.call_id.clone(),
        })
}

/// Rename contacts that match a directory group and append the rest.
pub fn reconcile_contacts(
    contacts: &mut Vec<Contact>,
    groups: &[Group],
    limits: &Limits,
) -> Result<ContactStats> {
    let mut stats = ContactStats::default();
    let mut pending: Vec<&Group> = groups.iter().collect();

    for contact in contacts.iter_mut() {
        let call_id = parse_call_id(contact)?;
        let (matched, rest): (Vec<&Group>, Vec<&Group>) =
            pending.into_iter().partition(|group| group.id == call_id);
        pending = rest;

        let Some((first, dropped)) = matched.split_first() else {
            continue;
        };

        limits.check_name("contact", &first.name)?;
        stats.matched += 1;
        if contact.name != first.name {
            debug!("Renaming contact '{}' to '{}'", contact.name, first.name);
            contact.name = first.name.clone();
            stats.renamed += 1;
        }

        for group in dropped {
            debug!(
                "Group '{}' shares ID {} with '{}' and is dropped",
                group.name, call_id, first.name
            );
        }
    }

    for group in pending {
        limits.check_name("contact", &group.name)?;
        debug!("Adding contact '{}' ({})", group.name, group.id);
        contacts.push(Contact::group(&group.name, group.id));
        stats.added += 1;
    }

    Ok(stats)
}
