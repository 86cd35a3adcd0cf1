//! Radio communications family: signal

use std::hash::{Hash, Hasher};

use bytes::{Buf, BufMut};

use crate::protocol::sequence::{
    bit_length, padding_for, read_bytes, read_count, skip_padding, unused_bits, write_bytes,
    write_count, write_padding,
};
use crate::protocol::{Marshal, PduBody, PduType, Reflection, Result, Structural};
use crate::records::EntityId;

/// Signal payload alignment
const SIGNAL_ALIGN: usize = 4;

/// Size of the fixed part of a signal body
const SIGNAL_FIXED_SIZE: usize = 20;

/// Digitised voice or data carried by a radio
///
/// # Wire Format
///
/// ```text
/// | entity id (6) | radio id (u16) | encoding scheme (u16) | TDL type (u16) |
/// | sample rate (u32) | data length in bits (u16) | samples (u16) |
/// | data ... | zero pad to 4 bytes |
/// ```
///
/// The bit length is `data.len() * 8 - unused_bits`. A received bit count that
/// is not a multiple of eight is read as whole bytes and written back as is.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    /// Entity carrying the radio
    pub entity_id: EntityId,
    /// Radio on that entity
    pub radio_id: u16,
    /// Encoding class and type
    pub encoding_scheme: u16,
    /// Tactical data link type
    pub tdl_type: u16,
    /// Samples per second, or bits per second for data
    pub sample_rate: u32,
    /// Number of samples in `data`
    pub samples: u16,
    /// Payload
    pub data: Vec<u8>,
    /// Low bits of the last byte not covered by the bit length (0..=7)
    pub unused_bits: u8,
}

impl Signal {
    /// Payload length in bits, as written to the wire
    #[must_use]
    pub fn data_length(&self) -> usize {
        self.data
            .len()
            .saturating_mul(8)
            .saturating_sub(usize::from(self.unused_bits))
    }
}

impl Marshal for Signal {
    fn marshalled_size(&self) -> usize {
        SIGNAL_FIXED_SIZE + self.data.len() + padding_for(self.data.len(), SIGNAL_ALIGN)
    }

    fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        let bits = bit_length(self.data.len(), self.unused_bits, "signal_data")?;
        self.entity_id.marshal(buf)?;
        self.radio_id.marshal(buf)?;
        self.encoding_scheme.marshal(buf)?;
        self.tdl_type.marshal(buf)?;
        self.sample_rate.marshal(buf)?;
        write_count::<u16, _>(buf, bits, "signal_data_length")?;
        self.samples.marshal(buf)?;
        write_bytes(buf, &self.data)?;
        write_padding(buf, padding_for(self.data.len(), SIGNAL_ALIGN))
    }

    fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
        self.entity_id.unmarshal_from(buf)?;
        self.radio_id.unmarshal_from(buf)?;
        self.encoding_scheme.unmarshal_from(buf)?;
        self.tdl_type.unmarshal_from(buf)?;
        self.sample_rate.unmarshal_from(buf)?;
        let bits = read_count::<u16, _>(buf)?;
        let len = bits.div_ceil(8);
        self.unused_bits = unused_bits(bits);
        self.samples.unmarshal_from(buf)?;
        self.data = read_bytes(buf, len)?;
        skip_padding(buf, padding_for(len, SIGNAL_ALIGN))
    }
}

impl Structural for Signal {
    fn structural_eq(&self, other: &Self) -> bool {
        self.entity_id.structural_eq(&other.entity_id)
            && self.radio_id == other.radio_id
            && self.encoding_scheme == other.encoding_scheme
            && self.tdl_type == other.tdl_type
            && self.sample_rate == other.sample_rate
            && self.samples == other.samples
            && self.unused_bits == other.unused_bits
            && self.data == other.data
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        self.entity_id.structural_hash(state);
        self.radio_id.structural_hash(state);
        self.encoding_scheme.structural_hash(state);
        self.tdl_type.structural_hash(state);
        self.sample_rate.structural_hash(state);
        self.samples.structural_hash(state);
        self.unused_bits.structural_hash(state);
        self.data.structural_hash(state);
    }

    fn reflect(&self, out: &mut Reflection) {
        out.nested(|out| {
            out.field("entity_id", "EntityId", &self.entity_id);
            out.field("radio_id", "u16", &self.radio_id);
            out.field("encoding_scheme", "u16", &self.encoding_scheme);
            out.field("tdl_type", "u16", &self.tdl_type);
            out.field("sample_rate", "u32", &self.sample_rate);
            out.derived("data_length", "u16", self.data_length());
            out.field("samples", "u16", &self.samples);
            out.field("data", "Vec<u8>", &self.data);
        });
    }
}

impl PduBody for Signal {
    const PDU_TYPE: PduType = PduType::Signal;
}

impl PartialEq for Signal {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl Eq for Signal {}

impl Hash for Signal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural_hash(state);
    }
}
