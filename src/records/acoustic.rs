//! Underwater acoustic records
//!
//! Beam and emitter system records carry their own length in 32-bit words,
//! derived from their contents like the electromagnetic emission records.

use crate::dis_record;

use super::Vector3Float;

dis_record! {
    /// Shaft speed of one propulsion shaft
    pub struct ShaftRpms {
        /// Current RPM
        current_shaft_rpms: i16,
        /// Ordered RPM
        ordered_shaft_rpms: i16,
        /// RPM change rate per second
        shaft_rpm_rate_of_change: f32,
    }
}

dis_record! {
    /// Additional passive activity parameter
    pub struct ApaData {
        /// Parameter index
        parameter_index: u16,
        /// Parameter value
        parameter_value: i16,
    }
}

dis_record! {
    /// Acoustic emitter name, function and number
    pub struct AcousticEmitter {
        /// Emitter name code
        acoustic_name: u16,
        /// Emitter function code
        function: u8,
        /// Emitter number on the entity
        acoustic_id_number: u8,
    }
}

dis_record! {
    /// Active emission and scan parameters of an acoustic beam
    pub struct AcousticBeamFundamentalParameter {
        /// Index into the active emission database
        active_emission_parameter_index: u16,
        /// Scan pattern code
        scan_pattern: u16,
        /// Beam center azimuth in radians
        beam_center_azimuth: f32,
        /// Azimuthal beamwidth in radians
        azimuthal_beamwidth: f32,
        /// Beam center depression/elevation in radians
        beam_center_de: f32,
        /// Depression/elevation beamwidth in radians
        de_beamwidth: f32,
    }
}

dis_record! {
    /// One beam of an acoustic emitter
    pub struct AcousticBeamData {
        words u16,
        /// Beam number
        beam_id_number: u8,
        pad 1,
        /// Beam parameters
        fundamental_data_parameters: AcousticBeamFundamentalParameter,
    }
}

dis_record! {
    /// One acoustic emitter with its beams
    pub struct AcousticEmitterSystemData {
        words u8,
        count u8 => beam_records,
        pad 2,
        /// Emitter
        acoustic_emitter_system: AcousticEmitter,
        /// Emitter location in entity coordinates
        emitter_location: Vector3Float,
        /// Beams
        list beam_records: AcousticBeamData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Marshal, decode, encode};

    #[test]
    fn test_sizes() {
        assert_eq!(ShaftRpms::default().marshalled_size(), 8);
        assert_eq!(ApaData::default().marshalled_size(), 4);
        assert_eq!(AcousticBeamData::default().marshalled_size(), 24);
        assert_eq!(AcousticEmitterSystemData::default().marshalled_size(), 20);
    }

    #[test]
    fn test_default_lengths_match_payload() {
        assert_eq!(encode(&AcousticBeamData::default()).unwrap()[..2], [0, 6]);
        assert_eq!(encode(&AcousticEmitterSystemData::default()).unwrap()[0], 5);
    }

    #[test]
    fn test_system_roundtrip() {
        let system = AcousticEmitterSystemData {
            acoustic_emitter_system: AcousticEmitter {
                acoustic_name: 7,
                function: 1,
                acoustic_id_number: 2,
            },
            emitter_location: Vector3Float::new(1.0, 0.0, -3.0),
            beam_records: vec![AcousticBeamData {
                beam_id_number: 1,
                fundamental_data_parameters: AcousticBeamFundamentalParameter {
                    beam_center_azimuth: 0.25,
                    ..Default::default()
                },
            }],
        };

        let bytes = encode(&system).unwrap();
        assert_eq!(bytes.len(), 44);
        assert_eq!(bytes[0], 11);
        assert_eq!(bytes[1], 1);
        assert_eq!(&bytes[20..22], &[0, 6]);
        assert_eq!(decode::<AcousticEmitterSystemData>(&bytes).unwrap(), system);
    }
}
