//! Underwater acoustic propulsion plant configuration

use crate::dis_bitfield;

dis_bitfield! {
    /// Propulsion plant type and hull-mounted masker state (8 bits)
    pub struct PropulsionPlantConfiguration(u8) {
        /// Plant type, see [`ConfigurationValue`]
        configuration / set_configuration: 0x7F >> 0,
        /// Masker state, see [`HullMountedMaskerValue`]
        hull_mounted_masker / set_hull_mounted_masker: 0x80 >> 7,
    }
}

field_values! {
    /// Propulsion plant type
    pub enum ConfigurationValue {
        /// Other
        Other = 0,
        /// Diesel/electric
        DieselElectric = 1,
        /// Diesel
        Diesel = 2,
        /// Battery
        Battery = 3,
        /// Turbine reduction
        TurbineReduction = 4,
        /// Unknown
        Unknown = 5,
        /// Steam
        Steam = 6,
        /// Gas turbine
        GasTurbine = 7,
        /// Unknown (second code)
        Unknown2 = 8,
    }
}

field_values! {
    /// Hull-mounted masker state
    pub enum HullMountedMaskerValue {
        /// Off
        Off = 0,
        /// On
        On = 1,
    }
}

impl PropulsionPlantConfiguration {
    /// Build from typed values
    #[must_use]
    pub fn new(configuration: ConfigurationValue, masker: HullMountedMaskerValue) -> Self {
        let mut word = Self::default();
        word.set_configuration(configuration.into());
        word.set_hull_mounted_masker(masker.into());
        word
    }

    /// Plant type, if named
    #[must_use]
    pub fn configuration_value(self) -> Option<ConfigurationValue> {
        ConfigurationValue::try_from(self.configuration()).ok()
    }

    /// Masker state
    #[must_use]
    pub fn hull_mounted_masker_value(self) -> Option<HullMountedMaskerValue> {
        HullMountedMaskerValue::try_from(self.hull_mounted_masker()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_and_unpack() {
        let word = PropulsionPlantConfiguration::new(ConfigurationValue::GasTurbine, HullMountedMaskerValue::On);
        assert_eq!(word.bits(), 0x87);
        assert_eq!(word.configuration_value(), Some(ConfigurationValue::GasTurbine));
        assert_eq!(word.hull_mounted_masker_value(), Some(HullMountedMaskerValue::On));
    }

    #[test]
    fn test_unnamed_configuration_is_kept() {
        let word = PropulsionPlantConfiguration::from_u32(0x7F);
        assert_eq!(word.configuration(), 0x7F);
        assert_eq!(word.configuration_value(), None);
        assert_eq!(word.to_u32(), 0x7F);
    }

    #[test]
    fn test_masked_bits_not_shifted_mask() {
        // (value & mask) >> shift, not value & (mask >> shift)
        let word = PropulsionPlantConfiguration::from_bits(0x80);
        assert_eq!(word.hull_mounted_masker(), 1);
    }
}
