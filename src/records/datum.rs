//! Fixed and variable datum records
//!
//! A variable datum carries its payload length in bits and pads the payload
//! to a 64-bit boundary, so it is written by hand rather than through
//! [`dis_record!`](crate::dis_record).

use std::hash::Hasher;

use bytes::{Buf, BufMut};

use crate::dis_record;
use crate::protocol::sequence::{
    bit_length, padding_for, read_bytes, read_count, skip_padding, unused_bits, write_bytes,
    write_count, write_padding,
};
use crate::protocol::{Marshal, Reflection, Result, Structural};

dis_record! {
    /// Datum identifier with a 32-bit value
    pub struct FixedDatum {
        /// Datum identifier
        fixed_datum_id: u32,
        /// Datum value
        fixed_datum_value: u32,
    }
}

/// Payload alignment of a variable datum
const DATUM_ALIGN: usize = 8;

/// Datum identifier with a byte payload
///
/// # Wire Format
///
/// ```text
/// | datum id (u32) | length in bits (u32) | data ... | zero pad to 8 bytes |
/// ```
///
/// The bit length is `data.len() * 8 - unused_bits`. A payload that ends
/// mid-byte keeps its exact bit count through a decode/encode cycle.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableDatum {
    /// Datum identifier
    pub variable_datum_id: u32,
    /// Payload bytes
    pub data: Vec<u8>,
    /// Low bits of the last byte not covered by the bit length (0..=7)
    pub unused_bits: u8,
}

impl VariableDatum {
    /// Create a datum whose every payload bit is used
    #[must_use]
    pub fn new(variable_datum_id: u32, data: impl Into<Vec<u8>>) -> Self {
        Self {
            variable_datum_id,
            data: data.into(),
            unused_bits: 0,
        }
    }

    /// Payload length in bits, as written to the wire
    pub fn bit_length(&self) -> Result<usize> {
        bit_length(self.data.len(), self.unused_bits, "variable_datum_data")
    }
}

impl Marshal for VariableDatum {
    fn marshalled_size(&self) -> usize {
        8 + self.data.len() + padding_for(self.data.len(), DATUM_ALIGN)
    }

    fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        let bits = self.bit_length()?;
        self.variable_datum_id.marshal(buf)?;
        write_count::<u32, _>(buf, bits, "variable_datum_bits")?;
        write_bytes(buf, &self.data)?;
        write_padding(buf, padding_for(self.data.len(), DATUM_ALIGN))
    }

    fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
        self.variable_datum_id.unmarshal_from(buf)?;
        let bits = read_count::<u32, _>(buf)?;
        let len = bits.div_ceil(8);
        self.unused_bits = unused_bits(bits);
        self.data = read_bytes(buf, len)?;
        skip_padding(buf, padding_for(len, DATUM_ALIGN))
    }
}

impl Structural for VariableDatum {
    fn structural_eq(&self, other: &Self) -> bool {
        self.variable_datum_id == other.variable_datum_id
            && self.unused_bits == other.unused_bits
            && self.data == other.data
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        self.variable_datum_id.structural_hash(state);
        self.unused_bits.structural_hash(state);
        self.data.structural_hash(state);
    }

    fn reflect(&self, out: &mut Reflection) {
        out.nested(|out| {
            out.field("variable_datum_id", "u32", &self.variable_datum_id);
            let bits = (self.data.len() * 8).saturating_sub(usize::from(self.unused_bits));
            out.derived("variable_datum_length", "u32", bits);
            out.field("data", "Vec<u8>", &self.data);
        });
    }
}

impl PartialEq for VariableDatum {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl Eq for VariableDatum {}

impl std::hash::Hash for VariableDatum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural_hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Error, decode, encode};

    #[test]
    fn test_variable_datum_padding() {
        let datum = VariableDatum::new(0xAABB, b"abc".to_vec());
        let bytes = encode(&datum).unwrap();

        assert_eq!(bytes.len(), 16);
        assert_eq!(datum.marshalled_size(), 16);
        assert_eq!(&bytes[4..8], &24u32.to_be_bytes());
        assert_eq!(&bytes[8..11], b"abc");
        assert_eq!(&bytes[11..], &[0; 5]);
        assert_eq!(decode::<VariableDatum>(&bytes).unwrap(), datum);
    }

    #[test]
    fn test_aligned_payload_has_no_padding() {
        let datum = VariableDatum::new(1, vec![7; 8]);
        assert_eq!(encode(&datum).unwrap().len(), 16);
        assert_eq!(VariableDatum::default().marshalled_size(), 8);
    }

    #[test]
    fn test_partial_bit_length_rounds_up() {
        let bytes = [0, 0, 0, 1, 0, 0, 0, 9, 0xFF, 0x80, 0, 0, 0, 0, 0, 0];
        let datum: VariableDatum = decode(&bytes).unwrap();
        assert_eq!(datum.data, [0xFF, 0x80]);
        assert_eq!(datum.unused_bits, 7);
        assert_eq!(datum.bit_length().unwrap(), 9);
    }

    #[test]
    fn test_partial_bit_length_reencodes_unchanged() {
        let wire = [0, 0, 0, 2, 0, 0, 0, 12, 0xAB, 0xC0, 0, 0, 0, 0, 0, 0];
        let datum: VariableDatum = decode(&wire).unwrap();
        assert_eq!(encode(&datum).unwrap(), wire);
    }

    #[test]
    fn test_unused_bits_without_payload() {
        let datum = VariableDatum {
            unused_bits: 4,
            ..VariableDatum::default()
        };
        let result = encode(&datum);
        assert!(matches!(result, Err(Error::InvalidBitLength { unused_bits: 4, bytes: 0, .. })));
    }

    #[test]
    fn test_missing_padding_is_truncation() {
        let bytes = encode(&VariableDatum::new(1, b"abc".to_vec())).unwrap();
        let result = decode::<VariableDatum>(&bytes[..12]);
        assert!(matches!(result, Err(Error::UnexpectedEof { needed: 5, remaining: 1 })));
    }
}
