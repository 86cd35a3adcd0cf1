//! Concrete PDU catalog
//!
//! One body type per PDU, grouped by protocol family, plus [`AnyPdu`] for
//! decoding a PDU whose type is only known from its header and
//! [`split_pdus`] for walking a datagram that carries several PDUs.
//!
//! # Example
//!
//! ```
//! use dis::pdus::{AnyPdu, EntityState, split_pdus};
//! use dis::protocol::{Bytes, Pdu, PduType};
//!
//! let mut first = Pdu::new(EntityState::default());
//! let mut second = Pdu::new(EntityState::default());
//! let mut datagram = first.encode().unwrap();
//! datagram.extend(second.encode().unwrap());
//!
//! for pdu in split_pdus(Bytes::from(datagram)) {
//!     let any = AnyPdu::decode(&pdu.unwrap()).unwrap();
//!     assert_eq!(any.pdu_type(), PduType::EntityState);
//! }
//! ```

mod emissions;
mod entity_information;
mod entity_management;
mod family;
mod logistics;
mod minefield;
mod radio;
mod simulation_management;
mod warfare;

use std::hash::Hasher;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use bytes::{Buf, BufMut, Bytes};
use tracing::trace;

use crate::protocol::{
    Error, HEADER_SIZE, LENGTH_OFFSET, Marshal, Pdu, PduBody, PduHeader, PduType, Reflection,
    Result, Structural,
};

pub use emissions::{ElectronicEmissions, UnderwaterAcoustic};
pub use entity_information::{Collision, EntityState};
pub use entity_management::IsPartOf;
pub use family::{SimulationManagementHeader, WarfareHeader, family_entity_ids};
pub use logistics::{RepairComplete, ResupplyOffer, ServiceRequest};
pub use minefield::MinefieldState;
pub use radio::Signal;
pub use simulation_management::{
    Acknowledge, ActionRequest, Comment, CreateEntity, Data, EventReport, RemoveEntity, SetData,
    StartResume, StopFreeze,
};
pub use warfare::{Detonation, Fire};

/// Protocol versions [`AnyPdu::decode`] accepts (IEEE 1278.1-1995 and 1278.1A-1998)
pub const ACCEPTED_VERSIONS: RangeInclusive<u8> = RangeInclusive::new(5, 6);

macro_rules! any_pdu {
    ($($(#[$meta:meta])* $variant:ident => $alias:ident,)*) => {
        $(
            $(#[$meta])*
            pub type $alias = Pdu<$variant>;
        )*

        /// A PDU of any type in the catalog
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum AnyPdu {
            $(
                $(#[$meta])*
                $variant($alias),
            )*
        }

        impl AnyPdu {
            /// Default PDU of `pdu_type`, if the catalog has one
            #[must_use]
            pub fn for_type(pdu_type: PduType) -> Option<Self> {
                $(
                    if pdu_type == <$variant as PduBody>::PDU_TYPE {
                        return Some(Self::$variant(Pdu::default()));
                    }
                )*
                None
            }

            /// PDU type of the wrapped PDU
            #[must_use]
            pub const fn pdu_type(&self) -> PduType {
                match self {
                    $(Self::$variant(_) => <$variant as PduBody>::PDU_TYPE,)*
                }
            }

            /// Get header
            #[must_use]
            pub const fn header(&self) -> &PduHeader {
                match self {
                    $(Self::$variant(pdu) => pdu.header(),)*
                }
            }

            /// Get mutable header
            pub fn header_mut(&mut self) -> &mut PduHeader {
                match self {
                    $(Self::$variant(pdu) => pdu.header_mut(),)*
                }
            }

            /// Encode with an up-to-date length field
            pub fn encode(&mut self) -> Result<Vec<u8>> {
                match self {
                    $(Self::$variant(pdu) => pdu.encode(),)*
                }
            }
        }

        impl Marshal for AnyPdu {
            fn marshalled_size(&self) -> usize {
                match self {
                    $(Self::$variant(pdu) => pdu.marshalled_size(),)*
                }
            }

            fn marshal<B: BufMut>(&self, buf: &mut B) -> Result<()> {
                match self {
                    $(Self::$variant(pdu) => pdu.marshal(buf),)*
                }
            }

            fn unmarshal_from<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
                match self {
                    $(Self::$variant(pdu) => pdu.unmarshal_from(buf),)*
                }
            }
        }

        impl Structural for AnyPdu {
            fn structural_eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Self::$variant(a), Self::$variant(b)) => a.structural_eq(b),)*
                    _ => false,
                }
            }

            fn structural_hash<H: Hasher>(&self, state: &mut H) {
                self.pdu_type().as_u8().structural_hash(state);
                match self {
                    $(Self::$variant(pdu) => pdu.structural_hash(state),)*
                }
            }

            fn reflect(&self, out: &mut Reflection) {
                match self {
                    $(Self::$variant(pdu) => pdu.reflect(out),)*
                }
            }
        }

        $(
            impl From<$alias> for AnyPdu {
                fn from(pdu: $alias) -> Self {
                    Self::$variant(pdu)
                }
            }
        )*
    };
}

any_pdu! {
    /// Entity State
    EntityState => EntityStatePdu,
    /// Fire
    Fire => FirePdu,
    /// Detonation
    Detonation => DetonationPdu,
    /// Collision
    Collision => CollisionPdu,
    /// Service Request
    ServiceRequest => ServiceRequestPdu,
    /// Resupply Offer
    ResupplyOffer => ResupplyOfferPdu,
    /// Repair Complete
    RepairComplete => RepairCompletePdu,
    /// Create Entity
    CreateEntity => CreateEntityPdu,
    /// Remove Entity
    RemoveEntity => RemoveEntityPdu,
    /// Start/Resume
    StartResume => StartResumePdu,
    /// Stop/Freeze
    StopFreeze => StopFreezePdu,
    /// Acknowledge
    Acknowledge => AcknowledgePdu,
    /// Action Request
    ActionRequest => ActionRequestPdu,
    /// Set Data
    SetData => SetDataPdu,
    /// Data
    Data => DataPdu,
    /// Event Report
    EventReport => EventReportPdu,
    /// Comment
    Comment => CommentPdu,
    /// Electromagnetic Emission
    ElectronicEmissions => ElectronicEmissionsPdu,
    /// Signal
    Signal => SignalPdu,
    /// Underwater Acoustic
    UnderwaterAcoustic => UnderwaterAcousticPdu,
    /// IsPartOf
    IsPartOf => IsPartOfPdu,
    /// Minefield State
    MinefieldState => MinefieldStatePdu,
}

impl AnyPdu {
    /// Decode the PDU at the front of `bytes`, dispatching on its type byte
    ///
    /// Accepts protocol versions in [`ACCEPTED_VERSIONS`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with(bytes, &ACCEPTED_VERSIONS)
    }

    /// Decode, accepting only protocol versions in `versions`
    pub fn decode_with(bytes: &[u8], versions: &RangeInclusive<u8>) -> Result<Self> {
        let mut pdu = Self::dispatch(bytes, versions)?;
        let mut buf = bytes;
        pdu.unmarshal_from(&mut buf)?;
        Ok(pdu)
    }

    /// Decode, keeping the partially read PDU when the body fails
    ///
    /// The PDU is `None` when the header could not be read or names a type or
    /// version that is not accepted.
    pub fn decode_partial(bytes: &[u8], versions: &RangeInclusive<u8>) -> (Option<Self>, Result<()>) {
        match Self::dispatch(bytes, versions) {
            Ok(mut pdu) => {
                let mut buf = bytes;
                let result = pdu.unmarshal_from(&mut buf);
                (Some(pdu), result)
            }
            Err(error) => (None, Err(error)),
        }
    }

    fn dispatch(bytes: &[u8], versions: &RangeInclusive<u8>) -> Result<Self> {
        let header = PduHeader::peek(bytes)?;
        let version = header.protocol_version();
        if !versions.contains(&version) {
            return Err(Error::UnsupportedVersion { version });
        }
        let type_byte = header.pdu_type_byte();
        header
            .pdu_type()
            .and_then(Self::for_type)
            .ok_or(Error::UnsupportedPduType { type_byte })
    }
}

/// Split a buffer of back-to-back PDUs using each header's length field
pub fn split_pdus(bytes: impl Into<Bytes>) -> PduStream {
    PduStream {
        bytes: bytes.into(),
        failed: false,
    }
}

/// Iterator over the PDUs in a buffer, see [`split_pdus`]
///
/// Yields each PDU's bytes, header included. A length field that is shorter
/// than a header or runs past the end of the buffer yields one
/// [`Error::InvalidLength`] and ends the iteration.
#[derive(Debug, Clone)]
pub struct PduStream {
    bytes: Bytes,
    failed: bool,
}

impl PduStream {
    /// Bytes not yet consumed
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        &self.bytes
    }

    fn fail(&mut self, error: Error) -> Option<Result<Bytes>> {
        self.failed = true;
        self.bytes.clear();
        Some(Err(error))
    }
}

impl Iterator for PduStream {
    type Item = Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.bytes.is_empty() {
            return None;
        }

        let available = self.bytes.len();
        if available < HEADER_SIZE {
            return self.fail(Error::UnexpectedEof {
                needed: HEADER_SIZE,
                remaining: available,
            });
        }

        let length = u16::from_be_bytes([self.bytes[LENGTH_OFFSET], self.bytes[LENGTH_OFFSET + 1]]);
        if usize::from(length) < HEADER_SIZE || usize::from(length) > available {
            return self.fail(Error::InvalidLength { length, available });
        }

        let pdu = self.bytes.split_to(usize::from(length));
        trace!(pdu_type = pdu[2], length, "Split PDU");
        Some(Ok(pdu))
    }
}

impl FusedIterator for PduStream {}
