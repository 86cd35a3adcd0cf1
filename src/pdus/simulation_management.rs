//! Simulation management family: exercise control and datum exchange
//!
//! Every body opens with a [`SimulationManagementHeader`].

use crate::dis_record;
use crate::records::{ClockTime, FixedDatum, VariableDatum};

use super::SimulationManagementHeader;

dis_record! {
    /// Ask a simulation to create an entity
    pub struct CreateEntity: CreateEntity {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Request identifier echoed in the acknowledgement
        request_id: u32,
    }
}

dis_record! {
    /// Ask a simulation to remove an entity
    pub struct RemoveEntity: RemoveEntity {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Request identifier echoed in the acknowledgement
        request_id: u32,
    }
}

dis_record! {
    /// Start or resume the exercise
    pub struct StartResume: StartResume {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Real-world time to start at
        real_world_time: ClockTime,
        /// Simulation time to start at
        simulation_time: ClockTime,
        /// Request identifier
        request_id: u32,
    }
}

dis_record! {
    /// Stop or freeze the exercise
    pub struct StopFreeze: StopFreeze {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Real-world time to stop at
        real_world_time: ClockTime,
        /// Reason code
        reason: u8,
        /// Behaviour while frozen
        frozen_behavior: u8,
        pad 2,
        /// Request identifier
        request_id: u32,
    }
}

dis_record! {
    /// Acknowledge a create, remove, start or stop request
    pub struct Acknowledge: Acknowledge {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Request type acknowledged
        acknowledge_flag: u16,
        /// Compliance code
        response_flag: u16,
        /// Request identifier being acknowledged
        request_id: u32,
    }
}

dis_record! {
    /// Ask for an action, with supporting datums
    pub struct ActionRequest: ActionRequest {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Request identifier
        request_id: u32,
        /// Requested action code
        action_id: u32,
        count u32 => fixed_datums,
        count u32 => variable_datums,
        /// Fixed datums
        list fixed_datums: FixedDatum,
        /// Variable datums
        list variable_datums: VariableDatum,
    }
}

dis_record! {
    /// Set datum values on an entity
    pub struct SetData: SetData {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Request identifier
        request_id: u32,
        pad 4,
        count u32 => fixed_datums,
        count u32 => variable_datums,
        /// Fixed datums
        list fixed_datums: FixedDatum,
        /// Variable datums
        list variable_datums: VariableDatum,
    }
}

dis_record! {
    /// Datum values sent in answer to a query or periodically
    pub struct Data: Data {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Request identifier, zero when unsolicited
        request_id: u32,
        pad 4,
        count u32 => fixed_datums,
        count u32 => variable_datums,
        /// Fixed datums
        list fixed_datums: FixedDatum,
        /// Variable datums
        list variable_datums: VariableDatum,
    }
}

dis_record! {
    /// Report a significant event
    pub struct EventReport: EventReport {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        /// Event type code
        event_type: u32,
        pad 4,
        count u32 => fixed_datums,
        count u32 => variable_datums,
        /// Fixed datums
        list fixed_datums: FixedDatum,
        /// Variable datums
        list variable_datums: VariableDatum,
    }
}

dis_record! {
    /// Free-form datums, usually text
    pub struct Comment: Comment {
        /// Originating and receiving entities
        management: SimulationManagementHeader,
        count u32 => fixed_datums,
        count u32 => variable_datums,
        /// Fixed datums
        list fixed_datums: FixedDatum,
        /// Variable datums
        list variable_datums: VariableDatum,
    }
}
