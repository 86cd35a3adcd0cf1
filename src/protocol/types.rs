//! DIS PDU types, protocol families and protocol versions

use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code,)*
        }

        impl $name {
            /// Convert from byte
            #[must_use]
            pub const fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Convert to byte
            #[must_use]
            pub const fn as_u8(self) -> u8 {
                self as u8
            }

            /// Variant name
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(value: u8) -> Result<Self, u8> {
                Self::from_u8(value).ok_or(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.as_u8()
            }
        }
    };
}

wire_enum! {
    /// DIS protocol version carried in byte 0 of every header
    pub enum ProtocolVersion {
        /// Other
        Other = 0,
        /// DIS PDU version 1.0 (May 92)
        Dis1_0 = 1,
        /// IEEE 1278-1993
        Ieee1278_1993 = 2,
        /// DIS PDU version 2.0, third draft (May 93)
        Dis2_0ThirdDraft = 3,
        /// DIS PDU version 2.0, fourth draft, revised (March 16, 1994)
        Dis2_0FourthDraft = 4,
        /// IEEE 1278.1-1995
        Ieee1278_1_1995 = 5,
        /// IEEE 1278.1A-1998
        Ieee1278_1a_1998 = 6,
        /// IEEE 1278.1-2012
        Ieee1278_1_2012 = 7,
    }
}

wire_enum! {
    /// Group of related PDU types
    pub enum ProtocolFamily {
        /// Other
        Other = 0,
        /// Entity state, collision and related entity information
        EntityInformation = 1,
        /// Fire and detonation
        Warfare = 2,
        /// Service, resupply and repair
        Logistics = 3,
        /// Transmitter, signal and receiver
        RadioCommunications = 4,
        /// Exercise control
        SimulationManagement = 5,
        /// Emissions, designator, IFF and acoustics
        DistributedEmissionRegeneration = 6,
        /// Aggregates and entity composition
        EntityManagement = 7,
        /// Minefield state and data
        Minefield = 8,
        /// Environmental processes and object state
        SyntheticEnvironment = 9,
        /// Simulation management over an unreliable transport
        SimulationManagementWithReliability = 10,
        /// Live entity time-space-position
        LiveEntity = 11,
        /// Non-real-time exercise control
        NonRealTime = 12,
    }
}

wire_enum! {
    /// PDU type carried in byte 2 of every header
    pub enum PduType {
        /// Other
        Other = 0,
        /// Entity State
        EntityState = 1,
        /// Fire
        Fire = 2,
        /// Detonation
        Detonation = 3,
        /// Collision
        Collision = 4,
        /// Service Request
        ServiceRequest = 5,
        /// Resupply Offer
        ResupplyOffer = 6,
        /// Resupply Received
        ResupplyReceived = 7,
        /// Resupply Cancel
        ResupplyCancel = 8,
        /// Repair Complete
        RepairComplete = 9,
        /// Repair Response
        RepairResponse = 10,
        /// Create Entity
        CreateEntity = 11,
        /// Remove Entity
        RemoveEntity = 12,
        /// Start/Resume
        StartResume = 13,
        /// Stop/Freeze
        StopFreeze = 14,
        /// Acknowledge
        Acknowledge = 15,
        /// Action Request
        ActionRequest = 16,
        /// Action Response
        ActionResponse = 17,
        /// Data Query
        DataQuery = 18,
        /// Set Data
        SetData = 19,
        /// Data
        Data = 20,
        /// Event Report
        EventReport = 21,
        /// Comment
        Comment = 22,
        /// Electromagnetic Emission
        ElectromagneticEmission = 23,
        /// Designator
        Designator = 24,
        /// Transmitter
        Transmitter = 25,
        /// Signal
        Signal = 26,
        /// Receiver
        Receiver = 27,
        /// IFF/ATC/NAVAIDS
        IffAtcNavAids = 28,
        /// Underwater Acoustic
        UnderwaterAcoustic = 29,
        /// Supplemental Emission / Entity State
        SupplementalEmissionEntityState = 30,
        /// Intercom Signal
        IntercomSignal = 31,
        /// Intercom Control
        IntercomControl = 32,
        /// Aggregate State
        AggregateState = 33,
        /// IsGroupOf
        IsGroupOf = 34,
        /// Transfer Control
        TransferControl = 35,
        /// IsPartOf
        IsPartOf = 36,
        /// Minefield State
        MinefieldState = 37,
        /// Minefield Query
        MinefieldQuery = 38,
        /// Minefield Data
        MinefieldData = 39,
        /// Minefield Response NAK
        MinefieldResponseNak = 40,
        /// Environmental Process
        EnvironmentalProcess = 41,
        /// Gridded Data
        GriddedData = 42,
        /// Point Object State
        PointObjectState = 43,
        /// Linear Object State
        LinearObjectState = 44,
        /// Areal Object State
        ArealObjectState = 45,
        /// Time Space Position Information
        Tspi = 46,
        /// Appearance
        Appearance = 47,
        /// Articulated Parts
        ArticulatedParts = 48,
        /// Live Entity Fire
        LeFire = 49,
        /// Live Entity Detonation
        LeDetonation = 50,
        /// Create Entity-R
        CreateEntityR = 51,
        /// Remove Entity-R
        RemoveEntityR = 52,
        /// Start/Resume-R
        StartResumeR = 53,
        /// Stop/Freeze-R
        StopFreezeR = 54,
        /// Acknowledge-R
        AcknowledgeR = 55,
        /// Action Request-R
        ActionRequestR = 56,
        /// Action Response-R
        ActionResponseR = 57,
        /// Data Query-R
        DataQueryR = 58,
        /// Set Data-R
        SetDataR = 59,
        /// Data-R
        DataR = 60,
        /// Event Report-R
        EventReportR = 61,
        /// Comment-R
        CommentR = 62,
        /// Record-R
        RecordR = 63,
        /// Set Record-R
        SetRecordR = 64,
        /// Record Query-R
        RecordQueryR = 65,
        /// Collision-Elastic
        CollisionElastic = 66,
        /// Entity State Update
        EntityStateUpdate = 67,
    }
}

impl PduType {
    /// Protocol family this PDU type belongs to
    #[must_use]
    pub const fn family(self) -> ProtocolFamily {
        match self.as_u8() {
            1 | 4 | 46..=48 | 66 | 67 => ProtocolFamily::EntityInformation,
            2 | 3 => ProtocolFamily::Warfare,
            5..=10 => ProtocolFamily::Logistics,
            25..=27 | 31 | 32 => ProtocolFamily::RadioCommunications,
            11..=22 => ProtocolFamily::SimulationManagement,
            23 | 24 | 28..=30 => ProtocolFamily::DistributedEmissionRegeneration,
            33..=36 => ProtocolFamily::EntityManagement,
            37..=40 => ProtocolFamily::Minefield,
            41..=45 => ProtocolFamily::SyntheticEnvironment,
            49 | 50 => ProtocolFamily::LiveEntity,
            51..=65 => ProtocolFamily::SimulationManagementWithReliability,
            _ => ProtocolFamily::Other,
        }
    }
}

impl ProtocolFamily {
    /// Whether PDUs of this family start with originating and receiving entity IDs
    #[must_use]
    pub const fn has_simulation_management_header(self) -> bool {
        matches!(
            self,
            Self::SimulationManagement | Self::SimulationManagementWithReliability
        )
    }

    /// Whether PDUs of this family start with firing and target entity IDs
    #[must_use]
    pub const fn has_warfare_header(self) -> bool {
        matches!(self, Self::Warfare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdu_type_conversion() {
        assert_eq!(PduType::from_u8(1), Some(PduType::EntityState));
        assert_eq!(PduType::from_u8(26), Some(PduType::Signal));
        assert_eq!(PduType::from_u8(68), None);
        assert_eq!(PduType::try_from(200), Err(200));
        assert_eq!(u8::from(PduType::MinefieldState), 37);
    }

    #[test]
    fn test_family_of_every_type() {
        for code in 0..=67u8 {
            let pdu_type = PduType::from_u8(code).unwrap();
            assert_eq!(pdu_type.as_u8(), code);
            let family = pdu_type.family();
            assert_eq!(family == ProtocolFamily::Other, code == 0, "{pdu_type}");
        }
        assert_eq!(PduType::Fire.family(), ProtocolFamily::Warfare);
        assert_eq!(PduType::Comment.family(), ProtocolFamily::SimulationManagement);
        assert_eq!(
            PduType::UnderwaterAcoustic.family(),
            ProtocolFamily::DistributedEmissionRegeneration
        );
        assert_eq!(PduType::Collision.family(), ProtocolFamily::EntityInformation);
    }

    #[test]
    fn test_display() {
        assert_eq!(PduType::IsPartOf.to_string(), "IsPartOf");
        assert_eq!(ProtocolVersion::Ieee1278_1a_1998.as_u8(), 6);
        assert!(ProtocolFamily::SimulationManagementWithReliability.has_simulation_management_header());
    }
}
