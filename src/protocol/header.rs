//! DIS PDU header
//!
//! Every PDU starts with the same 12-byte header.

use std::hash::{Hash, Hasher};

use bytes::{Buf, BufMut};

use super::codec::{Marshal, ensure_remaining};
use super::structural::{Reflection, Structural};
use super::{DisTimestamp, Error, PduType, ProtocolFamily, Result};

/// Header size in bytes
pub const HEADER_SIZE: usize = 12;

/// Protocol version written by default (IEEE 1278.1A-1998)
pub const PROTOCOL_VERSION: u8 = 6;

/// Offset of the protocol version byte
pub const VERSION_OFFSET: usize = 0;

/// Offset of the PDU type byte
pub const PDU_TYPE_OFFSET: usize = 2;

/// Offset of the 16-bit length field
pub const LENGTH_OFFSET: usize = 8;

/// DIS PDU header (12 bytes, network byte order)
///
/// # Wire Format
///
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Version     |  Exercise ID  |   PDU Type    |    Family     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Timestamp                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |            Length             |            Padding            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The PDU type is fixed when the header is created for a concrete PDU and
/// has no setter; reading a header overwrites it with the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PduHeader {
    protocol_version: u8,
    exercise_id: u8,
    pdu_type: u8,
    protocol_family: u8,
    timestamp: u32,
    length: u16,
}

impl PduHeader {
    /// Create a header for `pdu_type`, with the family derived from it
    #[must_use]
    pub const fn new(pdu_type: PduType) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            exercise_id: 0,
            pdu_type: pdu_type.as_u8(),
            protocol_family: pdu_type.family().as_u8(),
            timestamp: 0,
            length: 0,
        }
    }

    /// Read the header at the front of `bytes` without consuming anything
    pub fn peek(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut buf = bytes;
        Self::unmarshal(&mut buf)
    }

    /// Get protocol version byte
    #[must_use]
    pub const fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    /// Set protocol version byte
    pub fn set_protocol_version(&mut self, version: u8) {
        self.protocol_version = version;
    }

    /// Get exercise ID
    #[must_use]
    pub const fn exercise_id(&self) -> u8 {
        self.exercise_id
    }

    /// Set exercise ID
    pub fn set_exercise_id(&mut self, exercise_id: u8) {
        self.exercise_id = exercise_id;
    }

    /// Get PDU type byte
    #[must_use]
    pub const fn pdu_type_byte(&self) -> u8 {
        self.pdu_type
    }

    /// Get PDU type
    #[must_use]
    pub const fn pdu_type(&self) -> Option<PduType> {
        PduType::from_u8(self.pdu_type)
    }

    /// Get protocol family byte
    #[must_use]
    pub const fn protocol_family_byte(&self) -> u8 {
        self.protocol_family
    }

    /// Get protocol family
    #[must_use]
    pub const fn protocol_family(&self) -> Option<ProtocolFamily> {
        ProtocolFamily::from_u8(self.protocol_family)
    }

    /// Get timestamp (see [`DisTimestamp`](super::DisTimestamp))
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Set timestamp
    pub fn set_timestamp(&mut self, timestamp: u32) {
        self.timestamp = timestamp;
    }

    /// Get timestamp as a [`DisTimestamp`]
    #[must_use]
    pub const fn dis_timestamp(&self) -> DisTimestamp {
        DisTimestamp::from_raw(self.timestamp)
    }

    /// Set timestamp from a [`DisTimestamp`]
    pub fn set_dis_timestamp(&mut self, timestamp: DisTimestamp) {
        self.timestamp = timestamp.raw();
    }

    /// Get total PDU length in bytes, header included
    #[must_use]
    pub const fn length(&self) -> u16 {
        self.length
    }

    /// Set total PDU length
    ///
    /// [`Pdu::marshal_with_auto_length`](super::Pdu::marshal_with_auto_length)
    /// overwrites this with the computed size.
    pub fn set_length(&mut self, length: u16) {
        self.length = length;
    }

    /// Reset type and family to `pdu_type`
    #[cfg(feature = "serde")]
    pub(crate) fn retype(&mut self, pdu_type: PduType) {
        self.pdu_type = pdu_type.as_u8();
        self.protocol_family = pdu_type.family().as_u8();
    }
}

impl Default for PduHeader {
    fn default() -> Self {
        Self::new(PduType::Other)
    }
}

impl Marshal for PduHeader {
    fn marshalled_size(&self) -> usize {
        HEADER_SIZE
    }

    fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        self.protocol_version.marshal(buf)?;
        self.exercise_id.marshal(buf)?;
        self.pdu_type.marshal(buf)?;
        self.protocol_family.marshal(buf)?;
        self.timestamp.marshal(buf)?;
        self.length.marshal(buf)?;
        0u16.marshal(buf)
    }

    fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
        self.protocol_version.unmarshal_from(buf)?;
        self.exercise_id.unmarshal_from(buf)?;
        self.pdu_type.unmarshal_from(buf)?;
        self.protocol_family.unmarshal_from(buf)?;
        self.timestamp.unmarshal_from(buf)?;
        self.length.unmarshal_from(buf)?;
        // Padding is not interpreted
        ensure_remaining(buf, 2)?;
        buf.advance(2);
        Ok(())
    }
}

impl Structural for PduHeader {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }

    fn reflect(&self, out: &mut Reflection) {
        out.nested(|out| {
            out.field("protocol_version", "u8", &self.protocol_version);
            out.field("exercise_id", "u8", &self.exercise_id);
            out.field("pdu_type", "u8", &self.pdu_type);
            out.field("protocol_family", "u8", &self.protocol_family);
            out.field("timestamp", "u32", &self.timestamp);
            out.field("length", "u16", &self.length);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::protocol::{TimestampKind, encode};

    #[test]
    fn test_header_layout() {
        let mut header = PduHeader::new(PduType::Fire);
        header.set_exercise_id(9);
        header.set_timestamp(0x0102_0304);
        header.set_length(96);

        let bytes = encode(&header).unwrap();
        assert_eq!(
            bytes,
            [6, 9, 2, 2, 0x01, 0x02, 0x03, 0x04, 0x00, 0x60, 0x00, 0x00]
        );
        assert_eq!(bytes[PDU_TYPE_OFFSET], PduType::Fire.as_u8());
        assert_eq!(bytes[VERSION_OFFSET], PROTOCOL_VERSION);
    }

    #[test]
    fn test_header_roundtrip() {
        let mut header = PduHeader::new(PduType::Comment);
        header.set_timestamp(42);
        let decoded = PduHeader::peek(&encode(&header).unwrap()).unwrap();

        assert_eq!(decoded, header);
        assert_eq!(decoded.pdu_type(), Some(PduType::Comment));
        assert_eq!(
            decoded.protocol_family(),
            Some(ProtocolFamily::SimulationManagement)
        );
    }

    #[test]
    fn test_nonzero_padding_is_ignored() {
        let bytes = [6, 1, 1, 1, 0, 0, 0, 0, 0, 12, 0xAB, 0xCD];
        let header = PduHeader::peek(&bytes).unwrap();
        assert_eq!(header.length(), 12);
        assert_eq!(header, {
            let mut expected = PduHeader::new(PduType::EntityState);
            expected.set_exercise_id(1);
            expected.set_length(12);
            expected
        });
    }

    #[test]
    fn test_dis_timestamp_accessors() {
        let stamp = DisTimestamp::from_offset(Duration::from_secs(1800), TimestampKind::Absolute);
        let mut header = PduHeader::new(PduType::EntityState);
        header.set_dis_timestamp(stamp);

        assert_eq!(header.timestamp(), stamp.raw());
        assert_eq!(header.dis_timestamp(), stamp);
        assert_eq!(header.dis_timestamp().kind(), TimestampKind::Absolute);

        let bytes = encode(&header).unwrap();
        assert_eq!(&bytes[4..8], &stamp.raw().to_be_bytes());
        assert_eq!(PduHeader::peek(&bytes).unwrap().dis_timestamp(), stamp);
    }

    #[test]
    fn test_truncated_header() {
        let result = PduHeader::peek(&[6, 1, 1]);
        assert!(matches!(result, Err(Error::UnexpectedEof { needed: 1, .. })));
        assert_eq!(PduHeader::peek(&[]), Err(Error::EmptyInput));
    }
}
