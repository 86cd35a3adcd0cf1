//! Electromagnetic emission records
//!
//! System and beam records carry their own length in 32-bit words, which is
//! derived from the current contents when marshalling.

use crate::dis_record;

use super::{EntityId, Vector3Float};

dis_record! {
    /// Emitter name, function and number
    pub struct EmitterSystem {
        /// Emitter name code
        emitter_name: u16,
        /// Emitter function code
        function: u8,
        /// Emitter number on the entity
        emitter_id_number: u8,
    }
}

dis_record! {
    /// Beam frequency, power and scan parameters
    pub struct FundamentalParameterData {
        /// Center frequency in Hz
        frequency: f32,
        /// Frequency range in Hz
        frequency_range: f32,
        /// Effective radiated power in dBm
        effective_radiated_power: f32,
        /// Pulse repetition frequency in Hz
        pulse_repetition_frequency: f32,
        /// Pulse width in microseconds
        pulse_width: f32,
        /// Azimuth center in radians
        beam_azimuth_center: f32,
        /// Azimuth half-angle in radians
        beam_azimuth_sweep: f32,
        /// Elevation center in radians
        beam_elevation_center: f32,
        /// Elevation half-angle in radians
        beam_elevation_sweep: f32,
        /// Sweep synchronisation in percent
        beam_sweep_sync: f32,
    }
}

dis_record! {
    /// Entity tracked or jammed by a beam
    pub struct TrackJamTarget {
        /// Target entity
        track_jam: EntityId,
        /// Emitter on the target
        emitter_id: u8,
        /// Beam on the target
        beam_id: u8,
    }
}

dis_record! {
    /// One beam of an emitter system
    pub struct ElectronicEmissionBeamData {
        words u8,
        /// Beam number within the system
        beam_id_number: u8,
        /// Index into the beam parameter database
        beam_parameter_index: u16,
        /// Beam parameters
        fundamental_parameter_data: FundamentalParameterData,
        /// Beam function code
        beam_function: u8,
        count u8 => track_jam_targets,
        /// Set when targets are too many to list
        high_density_track_jam: u8,
        pad 1,
        /// Jamming mode sequence
        jamming_mode_sequence: u32,
        /// Tracked or jammed entities
        list track_jam_targets: TrackJamTarget,
    }
}

dis_record! {
    /// One emitter system with its beams
    pub struct ElectronicEmissionSystemData {
        words u8,
        count u8 => beam_data_records,
        pad 2,
        /// Emitter
        emitter_system: EmitterSystem,
        /// Emitter location in entity coordinates
        location: Vector3Float,
        /// Beams
        list beam_data_records: ElectronicEmissionBeamData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Marshal, decode, encode};

    fn system() -> ElectronicEmissionSystemData {
        ElectronicEmissionSystemData {
            emitter_system: EmitterSystem {
                emitter_name: 900,
                function: 2,
                emitter_id_number: 1,
            },
            location: Vector3Float::new(0.0, 0.0, 4.5),
            beam_data_records: vec![
                ElectronicEmissionBeamData {
                    beam_id_number: 1,
                    track_jam_targets: vec![TrackJamTarget::default(); 2],
                    ..ElectronicEmissionBeamData::default()
                },
                ElectronicEmissionBeamData::default(),
            ],
        }
    }

    #[test]
    fn test_lengths_in_words() {
        let system = system();
        let bytes = encode(&system).unwrap();

        // 20 fixed + (52 + 2 * 8) + 52
        assert_eq!(bytes.len(), 140);
        assert_eq!(bytes[0], 35);
        assert_eq!(bytes[1], 2);
        assert_eq!(bytes[20], 17);
        assert_eq!(bytes[88], 13);
        assert_eq!(system.marshalled_size(), bytes.len());
    }

    #[test]
    fn test_roundtrip() {
        let system = system();
        assert_eq!(decode::<ElectronicEmissionSystemData>(&encode(&system).unwrap()).unwrap(), system);
    }
}
