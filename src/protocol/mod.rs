//! DIS marshalling engine
//!
//! This module provides the marshal contract, the primitive and sequence
//! codecs, the declarative record and bit-field schemas, the PDU header and
//! the policy-aware [`Codec`].

pub mod bitfield;
mod codec;
mod error;
mod header;
mod pdu;
mod policy;
pub mod record;
pub mod sequence;
mod structural;
mod time;
mod types;

pub use bitfield::BitField;
pub use bytes::{Buf, BufMut, Bytes};
pub use codec::{Marshal, decode, encode, encode_into};
pub use error::{Error, Result};
pub use header::{
    HEADER_SIZE, LENGTH_OFFSET, PDU_TYPE_OFFSET, PROTOCOL_VERSION, PduHeader, VERSION_OFFSET,
};
pub use pdu::{Pdu, PduBody};
pub use policy::{Codec, CodecConfig, Diagnostic, DiagnosticSink, ErrorPolicy, Operation, Outcome};
pub use structural::{Reflection, Structural, reflect};
pub use time::{DisTimestamp, TimestampKind};
pub use types::{PduType, ProtocolFamily, ProtocolVersion};

/// Largest PDU the 16-bit header length can describe
pub const MAX_PDU_SIZE: usize = u16::MAX as usize;
