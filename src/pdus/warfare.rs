//! Warfare family: fire and detonation

use crate::dis_record;
use crate::records::{
    ArticulationParameter, BurstDescriptor, EntityId, EventId, Vector3Double, Vector3Float,
};

use super::WarfareHeader;

dis_record! {
    /// Weapon fired
    pub struct Fire: Fire {
        /// Firing and target entities
        warfare: WarfareHeader,
        /// Munition entity, if tracked
        munition_id: EntityId,
        /// Fire event
        event_id: EventId,
        /// Fire mission index
        fire_mission_index: u32,
        /// Firing location in world coordinates
        location_in_world_coordinates: Vector3Double,
        /// Munition, warhead, fuse and rate
        burst_descriptor: BurstDescriptor,
        /// Launch velocity in world coordinates
        velocity: Vector3Float,
        /// Range in meters
        range: f32,
    }
}

dis_record! {
    /// Munition detonation or impact
    pub struct Detonation: Detonation {
        /// Firing and target entities
        warfare: WarfareHeader,
        /// Munition entity, if tracked
        munition_id: EntityId,
        /// Event matching the fire PDU
        event_id: EventId,
        /// Munition velocity at detonation
        velocity: Vector3Float,
        /// Detonation location in world coordinates
        location_in_world_coordinates: Vector3Double,
        /// Munition, warhead, fuse and rate
        burst_descriptor: BurstDescriptor,
        /// Detonation location relative to the target
        location_in_entity_coordinates: Vector3Float,
        /// Detonation result code
        detonation_result: u8,
        count u8 => articulation_parameters,
        pad 2,
        /// Munition articulated parts
        list articulation_parameters: ArticulationParameter,
    }
}
