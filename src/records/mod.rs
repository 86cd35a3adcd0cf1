//! Value and variable records shared by PDU bodies

mod acoustic;
mod datum;
mod emissions;
mod entity;
mod geometry;
mod marking;
mod simulation;
mod warfare;

pub use acoustic::{
    AcousticBeamData, AcousticBeamFundamentalParameter, AcousticEmitter,
    AcousticEmitterSystemData, ApaData, ShaftRpms,
};
pub use datum::{FixedDatum, VariableDatum};
pub use emissions::{
    ElectronicEmissionBeamData, ElectronicEmissionSystemData, EmitterSystem,
    FundamentalParameterData, TrackJamTarget,
};
pub use entity::{
    ArticulationParameter, DeadReckoningParameter, EntityId, EntityType, EventId,
    SimulationAddress,
};
pub use geometry::{Orientation, Point, Vector3Double, Vector3Float};
pub use marking::{CHARACTER_SET_ASCII, MARKING_LEN, Marking};
pub use simulation::{ClockTime, NamedLocation, Relationship};
pub use warfare::{BurstDescriptor, SupplyQuantity};
