//! Land platform entity appearance

use crate::dis_bitfield;

dis_bitfield! {
    /// Appearance word of a land platform (32 bits)
    pub struct LandPlatformAppearance(u32) {
        /// Uniform color (0) or camouflage (1)
        paint_scheme / set_paint_scheme: 0x0000_0001 >> 0,
        /// Mobility kill
        mobility / set_mobility: 0x0000_0002 >> 1,
        /// Fire-power kill
        fire_power / set_fire_power: 0x0000_0004 >> 2,
        /// Damage, see [`DamageValue`]
        damage / set_damage: 0x0000_0018 >> 3,
        /// Smoke
        smoke / set_smoke: 0x0000_0060 >> 5,
        /// Dust cloud size
        trailing_effects / set_trailing_effects: 0x0000_0180 >> 7,
        /// Hatch state
        hatch / set_hatch: 0x0000_0E00 >> 9,
        /// Head lights on
        head_lights / set_head_lights: 0x0000_1000 >> 12,
        /// Tail lights on
        tail_lights / set_tail_lights: 0x0000_2000 >> 13,
        /// Brake lights on
        brake_lights / set_brake_lights: 0x0000_4000 >> 14,
        /// Flames rising from the entity
        flaming / set_flaming: 0x0000_8000 >> 15,
        /// Launcher raised
        launcher / set_launcher: 0x0001_0000 >> 16,
        /// Camouflage pattern
        camouflage_type / set_camouflage_type: 0x0006_0000 >> 17,
        /// Concealed from view
        concealed / set_concealed: 0x0008_0000 >> 19,
        /// Frozen by the simulation
        frozen_status / set_frozen_status: 0x0020_0000 >> 21,
        /// Power plant on
        power_plant_status / set_power_plant_status: 0x0040_0000 >> 22,
        /// Active (0) or deactivated (1)
        state / set_state: 0x0080_0000 >> 23,
        /// Tent extended
        tent / set_tent: 0x0100_0000 >> 24,
        /// Ramp down
        ramp / set_ramp: 0x0200_0000 >> 25,
        /// Blackout lights on
        blackout_lights / set_blackout_lights: 0x0400_0000 >> 26,
        /// Blackout brake lights on
        blackout_brake_lights / set_blackout_brake_lights: 0x0800_0000 >> 27,
        /// Spot lights on
        spot_lights / set_spot_lights: 0x1000_0000 >> 28,
        /// Interior lights on
        interior_lights / set_interior_lights: 0x2000_0000 >> 29,
        /// Surrendered
        surrender_state / set_surrender_state: 0x4000_0000 >> 30,
        /// Masked or cloaked
        masked_cloaked / set_masked_cloaked: 0x8000_0000 >> 31,
    }
}

field_values! {
    /// Damage level
    pub enum DamageValue {
        /// No damage
        NoDamage = 0,
        /// Slight damage
        SlightDamage = 1,
        /// Moderate damage
        ModerateDamage = 2,
        /// Destroyed
        Destroyed = 3,
    }
}

impl LandPlatformAppearance {
    /// Damage level
    #[must_use]
    pub fn damage_value(self) -> Option<DamageValue> {
        DamageValue::try_from(self.damage()).ok()
    }
}
