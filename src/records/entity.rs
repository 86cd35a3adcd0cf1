//! Entity identification and state records

use crate::dis_record;

use super::Vector3Float;

dis_record! {
    /// Site and application that own an entity or event
    pub struct SimulationAddress {
        /// Site number
        site: u16,
        /// Application number within the site
        application: u16,
    }
}

dis_record! {
    /// Unique entity identifier within an exercise
    pub struct EntityId {
        /// Site number
        site: u16,
        /// Application number within the site
        application: u16,
        /// Entity number within the application
        entity: u16,
    }
}

impl EntityId {
    /// Create an identifier
    #[must_use]
    pub const fn new(site: u16, application: u16, entity: u16) -> Self {
        Self {
            site,
            application,
            entity,
        }
    }
}

dis_record! {
    /// Identifier of a fire, detonation or collision event
    pub struct EventId {
        /// Site number
        site: u16,
        /// Application number within the site
        application: u16,
        /// Event number within the application
        event_number: u16,
    }
}

dis_record! {
    /// Kind, domain, country and category of an entity
    pub struct EntityType {
        /// Entity kind (platform, munition, life form, ...)
        entity_kind: u8,
        /// Domain (land, air, surface, ...)
        domain: u8,
        /// Country code
        country: u16,
        /// Main category
        category: u8,
        /// Subcategory
        subcategory: u8,
        /// Specific
        specific: u8,
        /// Extra
        extra: u8,
    }
}

dis_record! {
    /// Dead reckoning algorithm and its parameters
    pub struct DeadReckoningParameter {
        /// Algorithm in use
        dead_reckoning_algorithm: u8,
        /// Algorithm-specific parameters
        other_parameters: [u8; 15],
        /// Linear acceleration in entity coordinates
        entity_linear_acceleration: Vector3Float,
        /// Angular velocity in entity coordinates
        entity_angular_velocity: Vector3Float,
    }
}

dis_record! {
    /// Articulated or attached part state
    pub struct ArticulationParameter {
        /// Articulated (0) or attached (1) part
        parameter_type_designator: u8,
        /// Incremented on every change
        change_indicator: u8,
        /// Part this one is attached to
        part_attached_to: u16,
        /// Part type and metric
        parameter_type: i32,
        /// Parameter value
        parameter_value: f64,
    }
}
