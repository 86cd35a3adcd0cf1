//! Minefield family: minefield state

use crate::dis_record;
use crate::enums::{MinefieldAppearance, MinefieldProtocolMode};
use crate::records::{EntityId, EntityType, Orientation, Point, Vector3Double};

dis_record! {
    /// Extent, mine mix and status of a minefield
    pub struct MinefieldState: MinefieldState {
        /// Minefield identifier
        minefield_id: EntityId,
        /// Incremented on every change to the minefield
        minefield_sequence: u16,
        /// Force the minefield belongs to
        force_id: u8,
        count u8 => perimeter_points,
        /// Minefield type
        minefield_type: EntityType,
        count u16 => mine_types,
        /// Origin in world coordinates
        minefield_location: Vector3Double,
        /// Orientation
        minefield_orientation: Orientation,
        /// Appearance word
        appearance: MinefieldAppearance,
        /// Protocol mode word
        protocol_mode: MinefieldProtocolMode,
        /// Perimeter vertices relative to the origin
        list perimeter_points: Point,
        /// Types of mine in the field
        list mine_types: EntityType,
    }
}
