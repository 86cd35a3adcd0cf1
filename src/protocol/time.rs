//! DIS timestamps
//!
//! The header timestamp counts time since the top of the current hour in
//! units of 3600 s / (2^31 - 1), shifted left by one. The low bit marks the
//! stamp as absolute (synchronised clocks) rather than relative.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

const UNITS_PER_HOUR: u128 = i32::MAX as u128;
const NANOS_PER_HOUR: u128 = 3_600 * 1_000_000_000;

/// Clock reference of a timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimestampKind {
    /// Host clock, not synchronised with the exercise
    #[default]
    Relative,
    /// Clock synchronised to UTC
    Absolute,
}

/// Header timestamp value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisTimestamp(u32);

impl DisTimestamp {
    /// Wrap a raw header value
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw header value
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Build a timestamp from the time elapsed since the top of the hour
    ///
    /// Whole hours in `since_hour` are discarded.
    #[must_use]
    pub fn from_offset(since_hour: Duration, kind: TimestampKind) -> Self {
        let nanos = since_hour.as_nanos() % NANOS_PER_HOUR;
        // < 2^31, so the shift below cannot overflow
        let units = u32::try_from(nanos * UNITS_PER_HOUR / NANOS_PER_HOUR).unwrap_or(i32::MAX as u32);
        let flag = u32::from(kind == TimestampKind::Absolute);
        Self((units << 1) | flag)
    }

    /// Timestamp for `time`
    #[must_use]
    pub fn at(time: SystemTime, kind: TimestampKind) -> Self {
        let since_epoch = time.duration_since(UNIX_EPOCH).unwrap_or_default();
        Self::from_offset(since_epoch, kind)
    }

    /// Timestamp for the current system time
    #[must_use]
    pub fn now(kind: TimestampKind) -> Self {
        Self::at(SystemTime::now(), kind)
    }

    /// Clock reference
    #[must_use]
    pub const fn kind(self) -> TimestampKind {
        if self.0 & 1 == 1 {
            TimestampKind::Absolute
        } else {
            TimestampKind::Relative
        }
    }

    /// Time units since the top of the hour
    #[must_use]
    pub const fn units(self) -> u32 {
        self.0 >> 1
    }

    /// Time since the top of the hour, rounded down to the nanosecond
    #[must_use]
    pub fn offset(self) -> Duration {
        let nanos = u128::from(self.units()) * NANOS_PER_HOUR / UNITS_PER_HOUR;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl From<DisTimestamp> for u32 {
    fn from(timestamp: DisTimestamp) -> Self {
        timestamp.raw()
    }
}
