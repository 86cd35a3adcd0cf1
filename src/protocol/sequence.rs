//! Count-governed sequences and explicit padding.
//!
//! A count field is never stored next to its sequence: the wire value is taken
//! from the sequence length at marshal time, and on unmarshal the count read
//! from the stream decides how many elements follow.

use bytes::{Buf, BufMut};

use super::codec::{Marshal, ensure_capacity, ensure_remaining};
use super::{Error, Result};

/// Unsigned integer that can carry a sequence length on the wire.
pub trait CountField: Marshal + Default + Copy {
    /// Largest length the field can express.
    const MAX: u64;

    /// Convert a length, failing if it does not fit.
    fn from_len(len: usize) -> Option<Self>;

    /// Widen back to a length.
    fn to_len(self) -> usize;
}

macro_rules! impl_count_field {
    ($($ty:ty),*) => {$(
        impl CountField for $ty {
            const MAX: u64 = <$ty>::MAX as u64;

            #[inline]
            fn from_len(len: usize) -> Option<Self> {
                <$ty>::try_from(len).ok()
            }

            #[inline]
            fn to_len(self) -> usize {
                usize::try_from(self).unwrap_or(usize::MAX)
            }
        }
    )*};
}

impl_count_field!(u8, u16, u32);

/// Write `len` as a `C`-wide count field.
pub fn write_count<C: CountField, B: BufMut>(
    buf: &mut B,
    len: usize,
    field: &'static str,
) -> Result<()> {
    let count = C::from_len(len).ok_or(Error::CountOverflow {
        field,
        len,
        max: C::MAX,
    })?;
    count.marshal(buf)
}

/// Read a `C`-wide count field.
pub fn read_count<C: CountField, B: Buf>(buf: &mut B) -> Result<usize> {
    let mut count = C::default();
    count.unmarshal_from(buf)?;
    Ok(count.to_len())
}

/// Combined wire size of every element.
pub fn list_size<T: Marshal>(items: &[T]) -> usize {
    items.iter().map(Marshal::marshalled_size).sum()
}

/// Marshal every element in order.
pub fn marshal_list<T: Marshal, B: BufMut>(items: &[T], buf: &mut B) -> Result<()> {
    for item in items {
        item.marshal(buf)?;
    }
    Ok(())
}

/// Replace `items` with exactly `count` elements read from `buf`.
///
/// Elements decoded before a failure stay in `items`; the element that failed
/// is dropped.
pub fn unmarshal_list_into<T: Marshal + Default, B: Buf>(
    items: &mut Vec<T>,
    buf: &mut B,
    count: usize,
) -> Result<()> {
    items.clear();
    // A corrupt count must not drive a huge allocation.
    items.reserve(count.min(buf.remaining()));
    for _ in 0..count {
        let mut item = T::default();
        item.unmarshal_from(buf)?;
        items.push(item);
    }
    Ok(())
}

/// Bytes of padding needed to bring `len` up to a multiple of `align`.
#[must_use]
pub const fn padding_for(len: usize, align: usize) -> usize {
    (align - len % align) % align
}

/// Write `len` zero bytes.
pub fn write_padding<B: BufMut>(buf: &mut B, len: usize) -> Result<()> {
    ensure_capacity(buf, len)?;
    buf.put_bytes(0, len);
    Ok(())
}

/// Consume `len` bytes without interpreting them.
pub fn skip_padding<B: Buf>(buf: &mut B, len: usize) -> Result<()> {
    ensure_remaining(buf, len)?;
    buf.advance(len);
    Ok(())
}

/// Write raw bytes.
pub fn write_bytes<B: BufMut>(buf: &mut B, bytes: &[u8]) -> Result<()> {
    ensure_capacity(buf, bytes.len())?;
    buf.put_slice(bytes);
    Ok(())
}

/// Read exactly `len` raw bytes.
pub fn read_bytes<B: Buf>(buf: &mut B, len: usize) -> Result<Vec<u8>> {
    ensure_remaining(buf, len)?;
    let mut bytes = vec![0u8; len];
    buf.copy_to_slice(&mut bytes);
    Ok(bytes)
}

/// Length in bits of a `len`-byte payload whose last byte leaves
/// `unused_bits` low bits unused.
pub fn bit_length(len: usize, unused_bits: u8, field: &'static str) -> Result<usize> {
    if unused_bits > 7 || (len == 0 && unused_bits != 0) {
        return Err(Error::InvalidBitLength {
            field,
            unused_bits,
            bytes: len,
        });
    }
    Ok(len.saturating_mul(8) - usize::from(unused_bits))
}

/// Unused bits in the last byte of a payload `bits` long.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn unused_bits(bits: usize) -> u8 {
    ((8 - bits % 8) % 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_overflow() {
        let mut bytes = Vec::new();
        let result = write_count::<u8, _>(&mut bytes, 256, "articulation_parameters");
        assert_eq!(
            result,
            Err(Error::CountOverflow {
                field: "articulation_parameters",
                len: 256,
                max: 255
            })
        );
        assert!(bytes.is_empty());

        write_count::<u16, _>(&mut bytes, 256, "mine_types").unwrap();
        assert_eq!(bytes, [0x01, 0x00]);
    }

    #[test]
    fn test_empty_list_reads_nothing() {
        let mut items = vec![7u16, 8, 9];
        let mut input: &[u8] = &[0xFF, 0xFF];
        unmarshal_list_into(&mut items, &mut input, 0).unwrap();

        assert!(items.is_empty());
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_list_keeps_complete_elements_on_truncation() {
        let mut items: Vec<u16> = Vec::new();
        let mut input: &[u8] = &[0x00, 0x01, 0x00, 0x02, 0x00];
        let result = unmarshal_list_into(&mut items, &mut input, 3);

        assert!(matches!(result, Err(Error::UnexpectedEof { needed: 2, remaining: 1 })));
        assert_eq!(items, [1, 2]);
    }

    #[test]
    fn test_hostile_count_fails_cleanly() {
        let mut items: Vec<u64> = Vec::new();
        let mut input: &[u8] = &[0u8; 9];
        let result = unmarshal_list_into(&mut items, &mut input, u32::MAX as usize);
        assert!(result.unwrap_err().is_truncation());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_padding() {
        assert_eq!(padding_for(0, 8), 0);
        assert_eq!(padding_for(3, 8), 5);
        assert_eq!(padding_for(8, 8), 0);
        assert_eq!(padding_for(5, 4), 3);

        let mut bytes = vec![0xAA];
        write_padding(&mut bytes, 3).unwrap();
        assert_eq!(bytes, [0xAA, 0, 0, 0]);

        let mut input: &[u8] = &bytes;
        skip_padding(&mut input, 1).unwrap();
        assert_eq!(input, [0, 0, 0]);
        assert!(skip_padding(&mut input, 4).is_err());
    }

    #[test]
    fn test_bit_lengths() {
        assert_eq!(unused_bits(12), 4);
        assert_eq!(unused_bits(16), 0);
        assert_eq!(unused_bits(1), 7);
        assert_eq!(bit_length(2, 4, "data").unwrap(), 12);
        assert_eq!(bit_length(0, 0, "data").unwrap(), 0);
        assert_eq!(
            bit_length(0, 3, "data"),
            Err(Error::InvalidBitLength {
                field: "data",
                unused_bits: 3,
                bytes: 0
            })
        );
        assert!(bit_length(4, 8, "data").is_err());
    }
}
