//! Family sub-headers
//!
//! Warfare and simulation management PDUs open their body with a pair of
//! entity identifiers. Bodies embed these records by value as their first
//! field.

use crate::dis_record;
use crate::protocol::{Marshal, PduHeader, ProtocolFamily};
use crate::records::EntityId;

dis_record! {
    /// Firing and target entities of a warfare PDU
    pub struct WarfareHeader {
        /// Entity that fired
        firing_entity_id: EntityId,
        /// Intended target
        target_entity_id: EntityId,
    }
}

dis_record! {
    /// Originating and receiving entities of a simulation management PDU
    pub struct SimulationManagementHeader {
        /// Sender
        originating_entity_id: EntityId,
        /// Addressee
        receiving_entity_id: EntityId,
    }
}

impl SimulationManagementHeader {
    /// Create a sub-header
    #[must_use]
    pub const fn new(originating_entity_id: EntityId, receiving_entity_id: EntityId) -> Self {
        Self {
            originating_entity_id,
            receiving_entity_id,
        }
    }

    /// Swap sender and addressee, as in a reply
    #[must_use]
    pub fn reply(&self) -> Self {
        Self::new(
            self.receiving_entity_id.clone(),
            self.originating_entity_id.clone(),
        )
    }
}

/// Entity IDs that open the body of `header`'s PDU, if its family has them
///
/// `body` must start right after the 12-byte header.
pub fn family_entity_ids(header: &PduHeader, body: &[u8]) -> Option<(EntityId, EntityId)> {
    let family = header.protocol_family()?;
    if !family.has_warfare_header() && !family.has_simulation_management_header() {
        return None;
    }
    let mut buf = body;
    let first = EntityId::unmarshal(&mut buf).ok()?;
    let second = EntityId::unmarshal(&mut buf).ok()?;
    Some((first, second))
}

impl ProtocolFamily {
    /// Size of the family sub-header at the start of the body
    #[must_use]
    pub const fn sub_header_size(self) -> usize {
        if self.has_warfare_header() || self.has_simulation_management_header() {
            12
        } else {
            0
        }
    }
}
