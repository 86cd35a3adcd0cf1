//! Entity information family: entity state and collision

use crate::dis_record;
use crate::records::{
    ArticulationParameter, DeadReckoningParameter, EntityId, EntityType, EventId, Marking,
    Orientation, Vector3Double, Vector3Float,
};

dis_record! {
    /// Position, motion and appearance of one entity
    pub struct EntityState: EntityState {
        /// Entity described by this PDU
        entity_id: EntityId,
        /// Force the entity belongs to
        force_id: u8,
        count u8 => articulation_parameters,
        /// Entity type
        entity_type: EntityType,
        /// Type to present to simulations that do not know `entity_type`
        alternative_entity_type: EntityType,
        /// Linear velocity in world coordinates
        entity_linear_velocity: Vector3Float,
        /// Location in world coordinates
        entity_location: Vector3Double,
        /// Orientation
        entity_orientation: Orientation,
        /// Appearance word; see [`LandPlatformAppearance`](crate::enums::LandPlatformAppearance)
        entity_appearance: u32,
        /// Dead reckoning parameters
        dead_reckoning_parameters: DeadReckoningParameter,
        /// Marking text
        marking: Marking,
        /// Capabilities word
        capabilities: u32,
        /// Articulated and attached parts
        list articulation_parameters: ArticulationParameter,
    }
}

dis_record! {
    /// Collision between two entities
    pub struct Collision: Collision {
        /// Entity reporting the collision
        issuing_entity_id: EntityId,
        /// Entity collided with
        colliding_entity_id: EntityId,
        /// Collision event
        event_id: EventId,
        /// Inelastic (0) or elastic (1)
        collision_type: u8,
        pad 1,
        /// Velocity of the issuing entity at impact
        velocity: Vector3Float,
        /// Mass of the issuing entity in kilograms
        mass: f32,
        /// Impact point in entity coordinates
        location: Vector3Float,
    }
}
