//! Minefield appearance and protocol mode

use crate::dis_bitfield;

dis_bitfield! {
    /// Minefield type and status flags (16 bits)
    pub struct MinefieldAppearance(u16) {
        /// Minefield type, see [`MinefieldTypeValue`]
        minefield_type / set_minefield_type: 0x0003 >> 0,
        /// Active status, see [`ActiveStatusValue`]
        active_status / set_active_status: 0x0004 >> 2,
        /// Lane status, see [`LaneValue`]
        lane / set_lane: 0x0008 >> 3,
        /// Minefield state, see [`MinefieldStateValue`]
        state / set_state: 0x2000 >> 13,
    }
}

dis_bitfield! {
    /// Heartbeat or query-response protocol mode (16 bits)
    pub struct MinefieldProtocolMode(u16) {
        /// Mode, see [`ProtocolModeValue`]
        protocol_mode / set_protocol_mode: 0x0003 >> 0,
    }
}

field_values! {
    /// Mine mix of a minefield
    pub enum MinefieldTypeValue {
        /// Mixed anti-personnel and anti-tank
        MixedAntiPersonnelAndAntiTank = 0,
        /// Pure anti-personnel
        PureAntiPersonnel = 1,
        /// Pure anti-tank
        PureAntiTank = 2,
        /// Unknown
        Unknown = 3,
    }
}

field_values! {
    /// Whether the minefield is active
    pub enum ActiveStatusValue {
        /// Active
        Active = 0,
        /// Inactive
        Inactive = 1,
    }
}

field_values! {
    /// Lane status
    pub enum LaneValue {
        /// Minefield has an active lane
        ActiveLane = 0,
        /// Minefield has an inactive lane
        InactiveLane = 1,
    }
}

field_values! {
    /// Minefield state
    pub enum MinefieldStateValue {
        /// Active
        Active = 0,
        /// Deactivated
        Deactivated = 1,
    }
}

field_values! {
    /// Minefield protocol mode
    pub enum ProtocolModeValue {
        /// Heartbeat mode
        Heartbeat = 0,
        /// Query response protocol mode
        Qrp = 1,
        /// Unknown
        Unknown = 2,
    }
}

impl MinefieldAppearance {
    /// Minefield type, if named
    #[must_use]
    pub fn minefield_type_value(self) -> Option<MinefieldTypeValue> {
        MinefieldTypeValue::try_from(self.minefield_type()).ok()
    }

    /// Active status
    #[must_use]
    pub fn active_status_value(self) -> Option<ActiveStatusValue> {
        ActiveStatusValue::try_from(self.active_status()).ok()
    }

    /// Lane status
    #[must_use]
    pub fn lane_value(self) -> Option<LaneValue> {
        LaneValue::try_from(self.lane()).ok()
    }

    /// Minefield state
    #[must_use]
    pub fn state_value(self) -> Option<MinefieldStateValue> {
        MinefieldStateValue::try_from(self.state()).ok()
    }
}

impl MinefieldProtocolMode {
    /// Protocol mode, if named
    #[must_use]
    pub fn protocol_mode_value(self) -> Option<ProtocolModeValue> {
        ProtocolModeValue::try_from(self.protocol_mode()).ok()
    }
}
