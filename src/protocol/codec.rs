//! Marshal contract and the network-order primitive codec
//!
//! Every record walks its fields in declaration order. Scalars go through
//! [`bytes::Buf`] / [`bytes::BufMut`], which read and write big-endian, with an
//! explicit bounds check in front so truncated input surfaces as
//! [`Error::UnexpectedEof`] rather than a panic.

use bytes::{Buf, BufMut};

use super::{Error, Result};

/// Binary wire representation of a DIS record.
///
/// `marshal` and `unmarshal_from` must visit exactly the same fields in the
/// same order, and `marshalled_size` must equal the number of bytes `marshal`
/// writes for the current field values.
pub trait Marshal {
    /// Size in bytes of the current wire representation.
    fn marshalled_size(&self) -> usize;

    /// Write every field in declaration order.
    fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()>;

    /// Read every field in declaration order, overwriting `self` in place.
    ///
    /// On failure the fields read before the error keep their new values.
    fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()>;

    /// Read a fresh value from `buf`.
    fn unmarshal<B: Buf>(buf: &mut B) -> Result<Self>
    where
        Self: Sized + Default,
    {
        let mut value = Self::default();
        value.unmarshal_from(buf)?;
        Ok(value)
    }
}

/// Fail with [`Error::UnexpectedEof`] unless `needed` bytes can be read.
#[inline]
pub(crate) fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> Result<()> {
    let remaining = buf.remaining();
    if remaining < needed {
        return Err(Error::UnexpectedEof { needed, remaining });
    }
    Ok(())
}

/// Fail with [`Error::BufferTooSmall`] unless `needed` bytes can be written.
#[inline]
pub(crate) fn ensure_capacity<B: BufMut>(buf: &B, needed: usize) -> Result<()> {
    let got = buf.remaining_mut();
    if got < needed {
        return Err(Error::BufferTooSmall { needed, got });
    }
    Ok(())
}

macro_rules! impl_primitive {
    ($($ty:ty => $get:ident, $put:ident;)*) => {$(
        impl Marshal for $ty {
            #[inline]
            fn marshalled_size(&self) -> usize {
                size_of::<$ty>()
            }

            #[inline]
            fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()> {
                ensure_capacity(buf, size_of::<$ty>())?;
                buf.$put(*self);
                Ok(())
            }

            #[inline]
            fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
                ensure_remaining(buf, size_of::<$ty>())?;
                *self = buf.$get();
                Ok(())
            }
        }
    )*};
}

impl_primitive! {
    u8 => get_u8, put_u8;
    i8 => get_i8, put_i8;
    u16 => get_u16, put_u16;
    i16 => get_i16, put_i16;
    u32 => get_u32, put_u32;
    i32 => get_i32, put_i32;
    u64 => get_u64, put_u64;
    i64 => get_i64, put_i64;
    f32 => get_f32, put_f32;
    f64 => get_f64, put_f64;
}

impl<T: Marshal, const N: usize> Marshal for [T; N] {
    fn marshalled_size(&self) -> usize {
        self.iter().map(Marshal::marshalled_size).sum()
    }

    fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        for item in self {
            item.marshal(buf)?;
        }
        Ok(())
    }

    fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
        for item in self.iter_mut() {
            item.unmarshal_from(buf)?;
        }
        Ok(())
    }
}

/// Encode a record to a freshly allocated buffer.
///
/// The buffer is sized from `marshalled_size` up front, so a correct record
/// never reallocates.
pub fn encode<T: Marshal>(value: &T) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(value.marshalled_size());
    value.marshal(&mut bytes)?;
    Ok(bytes)
}

/// Encode a record into a caller-provided buffer, returning the bytes written.
pub fn encode_into<T: Marshal>(value: &T, out: &mut [u8]) -> Result<usize> {
    let needed = value.marshalled_size();
    if out.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            got: out.len(),
        });
    }

    let mut cursor: &mut [u8] = out;
    value.marshal(&mut cursor)?;
    Ok(needed)
}

/// Decode a record from the front of `bytes`.
///
/// Trailing bytes are left unread; use [`crate::pdus::split_pdus`] to walk a
/// buffer holding several PDUs.
pub fn decode<T: Marshal + Default>(bytes: &[u8]) -> Result<T> {
    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut buf = bytes;
    T::unmarshal(&mut buf)
}
