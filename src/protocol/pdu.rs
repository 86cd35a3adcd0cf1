//! Header plus body composition

use std::hash::{Hash, Hasher};

use bytes::{Buf, BufMut};
use tracing::trace;

use super::codec::Marshal;
use super::structural::{Reflection, Structural};
use super::{Error, HEADER_SIZE, MAX_PDU_SIZE, PduHeader, PduType, Result};

/// Body of a concrete PDU type.
///
/// The body holds everything after the 12-byte header, including any
/// family sub-header such as
/// [`WarfareHeader`](crate::pdus::WarfareHeader).
pub trait PduBody: Marshal + Structural + Default {
    /// Type byte written into the header
    const PDU_TYPE: PduType;
}

/// A complete PDU: header followed by a typed body.
///
/// The header's type and family are set from `T::PDU_TYPE` at construction
/// and cannot be changed afterwards.
///
/// Deserialized headers get their type and family reset from the body type.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "SerializedPdu<T>",
        bound(deserialize = "T: PduBody + serde::Deserialize<'de>")
    )
)]
pub struct Pdu<T> {
    header: PduHeader,
    /// PDU body
    pub body: T,
}

/// Field layout of a deserialized [`Pdu`] before its header is retyped
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SerializedPdu<T> {
    header: PduHeader,
    body: T,
}

#[cfg(feature = "serde")]
impl<T: PduBody> From<SerializedPdu<T>> for Pdu<T> {
    fn from(SerializedPdu { mut header, body }: SerializedPdu<T>) -> Self {
        header.retype(T::PDU_TYPE);
        Self { header, body }
    }
}

impl<T: PduBody> Pdu<T> {
    /// Wrap `body` in a fresh header
    #[must_use]
    pub fn new(body: T) -> Self {
        Self {
            header: PduHeader::new(T::PDU_TYPE),
            body,
        }
    }

    /// Get header
    #[must_use]
    pub const fn header(&self) -> &PduHeader {
        &self.header
    }

    /// Get mutable header (type and family stay read-only)
    pub fn header_mut(&mut self) -> &mut PduHeader {
        &mut self.header
    }

    /// Consume the PDU, returning the body
    #[must_use]
    pub fn into_body(self) -> T {
        self.body
    }

    /// Compute the marshalled size and store it in the header length field
    pub fn update_length(&mut self) -> Result<u16> {
        let size = self.marshalled_size();
        let length = u16::try_from(size).map_err(|_| Error::PduTooLarge {
            size,
            max: MAX_PDU_SIZE,
        })?;
        self.header.set_length(length);
        Ok(length)
    }

    /// Set the header length from the current contents, then marshal
    ///
    /// Fails with [`Error::PduTooLarge`] before writing anything if the PDU
    /// does not fit the 16-bit length field.
    pub fn marshal_with_auto_length<B: BufMut>(&mut self, buf: &mut B) -> Result<()> {
        let length = self.update_length()?;
        trace!(pdu_type = %T::PDU_TYPE, length, "Marshalling PDU");
        self.marshal(buf)
    }

    /// Encode with an up-to-date length field
    pub fn encode(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.marshalled_size());
        self.marshal_with_auto_length(&mut bytes)?;
        Ok(bytes)
    }
}

impl<T: PduBody> Default for Pdu<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PduBody> From<T> for Pdu<T> {
    fn from(body: T) -> Self {
        Self::new(body)
    }
}

impl<T: PduBody> Marshal for Pdu<T> {
    fn marshalled_size(&self) -> usize {
        HEADER_SIZE + self.body.marshalled_size()
    }

    fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        self.header.marshal(buf)?;
        self.body.marshal(buf)
    }

    fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
        let header = PduHeader::unmarshal(buf)?;
        if header.pdu_type_byte() != T::PDU_TYPE.as_u8() {
            return Err(Error::PduTypeMismatch {
                expected: T::PDU_TYPE.as_u8(),
                found: header.pdu_type_byte(),
            });
        }
        self.header = header;
        self.body.unmarshal_from(buf)
    }
}

impl<T: PduBody> Structural for Pdu<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.header == other.header && self.body.structural_eq(&other.body)
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        self.header.structural_hash(state);
        self.body.structural_hash(state);
    }

    fn reflect(&self, out: &mut Reflection) {
        out.nested(|out| {
            out.field("header", "PduHeader", &self.header);
            out.field("body", T::PDU_TYPE.name(), &self.body);
        });
    }
}

impl<T: PduBody> PartialEq for Pdu<T> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<T: PduBody> Eq for Pdu<T> {}

impl<T: PduBody> Hash for Pdu<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural_hash(state);
    }
}
