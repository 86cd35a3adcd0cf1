//! DIS marshalling error types

use thiserror::Error;

/// DIS marshalling errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input ended before a field could be read
    #[error("unexpected end of input: need {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes required by the read
        needed: usize,
        /// Bytes left in the input
        remaining: usize,
    },

    /// Fixed-capacity output cannot hold the next field
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Sequence is longer than its count field can express
    #[error("count overflow in `{field}`: {len} elements (max {max})")]
    CountOverflow {
        /// Name of the sequence
        field: &'static str,
        /// Actual sequence length
        len: usize,
        /// Largest value the count field can carry
        max: u64,
    },

    /// Marshalled PDU does not fit the 16-bit header length
    #[error("PDU too large: {size} bytes (max {max})")]
    PduTooLarge {
        /// Marshalled size
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Header carries a different PDU type than the record being read
    #[error("PDU type mismatch: expected {expected}, found {found}")]
    PduTypeMismatch {
        /// Type of the concrete PDU
        expected: u8,
        /// Type byte found on the wire
        found: u8,
    },

    /// No concrete PDU is registered for this type byte
    #[error("unsupported PDU type: {type_byte}")]
    UnsupportedPduType {
        /// Type byte found on the wire
        type_byte: u8,
    },

    /// Protocol version outside the accepted range
    #[error("unsupported protocol version: {version}")]
    UnsupportedVersion {
        /// Version byte found on the wire
        version: u8,
    },

    /// Header length field is inconsistent with the input
    #[error("invalid PDU length {length}: {available} bytes available")]
    InvalidLength {
        /// Length carried by the header
        length: u16,
        /// Bytes available from the PDU start
        available: usize,
    },

    /// Unused trailing bits that a payload of this size cannot have
    #[error("invalid bit length in `{field}`: {unused_bits} unused bits in {bytes} bytes")]
    InvalidBitLength {
        /// Name of the payload
        field: &'static str,
        /// Unused bits claimed for the last byte
        unused_bits: u8,
        /// Payload size in bytes
        bytes: usize,
    },

    /// Empty input handed to a decoder
    #[error("empty input")]
    EmptyInput,
}

impl Error {
    /// Whether the error was caused by missing input bytes.
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. } | Self::EmptyInput)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
