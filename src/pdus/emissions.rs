//! Distributed emission regeneration family: electromagnetic and underwater
//! acoustic emissions

use crate::dis_record;
use crate::enums::PropulsionPlantConfiguration;
use crate::records::{
    AcousticEmitterSystemData, ApaData, ElectronicEmissionSystemData, EntityId, EventId, ShaftRpms,
};

dis_record! {
    /// Active electromagnetic emitters of one entity
    pub struct ElectronicEmissions: ElectromagneticEmission {
        /// Emitting entity
        emitting_entity_id: EntityId,
        /// Emission event
        event_id: EventId,
        /// Whether this is a heartbeat or a state change
        state_update_indicator: u8,
        count u8 => systems,
        pad 2,
        /// Emitter systems
        list systems: ElectronicEmissionSystemData,
    }
}

dis_record! {
    /// Shaft, additional passive activity and active acoustic emitters of one
    /// entity
    pub struct UnderwaterAcoustic: UnderwaterAcoustic {
        /// Emitting entity
        emitting_entity_id: EntityId,
        /// Emission event
        event_id: EventId,
        /// Whether this is a heartbeat or a state change
        state_change_indicator: u8,
        pad 1,
        /// Passive signature index
        passive_parameter_index: u16,
        /// Plant type and masker state
        propulsion_plant_configuration: PropulsionPlantConfiguration,
        count u8 => shaft_rpms,
        count u8 => apa_data,
        count u8 => emitter_systems,
        /// Shaft speeds
        list shaft_rpms: ShaftRpms,
        /// Additional passive activity parameters
        list apa_data: ApaData,
        /// Active emitter systems
        list emitter_systems: AcousticEmitterSystemData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ConfigurationValue, HullMountedMaskerValue};
    use crate::protocol::{HEADER_SIZE, Marshal, Pdu, decode};
    use crate::records::{ElectronicEmissionBeamData, TrackJamTarget};

    #[test]
    fn test_empty_sizes() {
        assert_eq!(Pdu::new(ElectronicEmissions::default()).marshalled_size(), 28);
        assert_eq!(Pdu::new(UnderwaterAcoustic::default()).marshalled_size(), 32);
    }

    #[test]
    fn test_electronic_emissions_lengths() {
        let beam = ElectronicEmissionBeamData {
            track_jam_targets: vec![TrackJamTarget::default()],
            ..ElectronicEmissionBeamData::default()
        };
        let mut pdu = Pdu::new(ElectronicEmissions {
            emitting_entity_id: EntityId::new(1, 2, 3),
            systems: vec![ElectronicEmissionSystemData {
                beam_data_records: vec![beam],
                ..ElectronicEmissionSystemData::default()
            }],
            ..ElectronicEmissions::default()
        });
        let bytes = pdu.encode().unwrap();

        // system 20 + beam 52 + one target 8
        assert_eq!(bytes.len(), 28 + 80);
        assert_eq!(bytes[HEADER_SIZE + 13], 1);
        assert_eq!(bytes[28], 20);
        assert_eq!(bytes[48], 15);
        assert_eq!(decode::<Pdu<ElectronicEmissions>>(&bytes).unwrap(), pdu);
    }

    #[test]
    fn test_underwater_acoustic_counts() {
        let mut pdu = Pdu::new(UnderwaterAcoustic {
            propulsion_plant_configuration: PropulsionPlantConfiguration::new(
                ConfigurationValue::Diesel,
                HullMountedMaskerValue::On,
            ),
            shaft_rpms: vec![ShaftRpms::default(); 2],
            apa_data: vec![ApaData::default(); 3],
            ..UnderwaterAcoustic::default()
        });
        let bytes = pdu.encode().unwrap();

        assert_eq!(bytes.len(), 32 + 2 * 8 + 3 * 4);
        assert_eq!(&bytes[HEADER_SIZE + 16..HEADER_SIZE + 20], &[0x82, 2, 3, 0]);

        let decoded: Pdu<UnderwaterAcoustic> = decode(&bytes).unwrap();
        assert_eq!(
            decoded.body.propulsion_plant_configuration.configuration_value(),
            Some(ConfigurationValue::Diesel)
        );
        assert_eq!(decoded, pdu);
    }
}
