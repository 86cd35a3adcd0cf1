//! Clock and entity-relationship records

use std::time::{SystemTime, UNIX_EPOCH};

use crate::dis_record;
use crate::protocol::{DisTimestamp, TimestampKind};

dis_record! {
    /// Hours since 1 January 1970 plus a DIS timestamp within the hour
    pub struct ClockTime {
        /// Hours since 0000 1 January 1970 UTC
        hour: i32,
        /// Time past the hour (see [`DisTimestamp`](crate::protocol::DisTimestamp))
        time_past_hour: u32,
    }
}

impl ClockTime {
    /// Clock time for `time`, with an absolute or relative stamp within the hour
    #[must_use]
    pub fn at(time: SystemTime, kind: TimestampKind) -> Self {
        let secs = time.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
        Self {
            hour: i32::try_from(secs / 3_600).unwrap_or(i32::MAX),
            time_past_hour: DisTimestamp::at(time, kind).raw(),
        }
    }
}

dis_record! {
    /// Nature of a part/host relationship
    pub struct Relationship {
        /// Nature code
        nature: u16,
        /// Position code
        position: u16,
    }
}

dis_record! {
    /// Named station on a host entity
    pub struct NamedLocation {
        /// Station name code
        station_name: u16,
        /// Station number
        station_number: u16,
    }
}
