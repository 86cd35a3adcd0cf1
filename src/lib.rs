//! DIS (Distributed Interactive Simulation, IEEE 1278.1) PDU marshalling
//!
//! This library provides typed records for DIS Protocol Data Units and a
//! big-endian marshalling engine for them. Records are declared once with
//! [`dis_record!`] and get their wire codec, structural equality, hashing and
//! a reflective dump from that single field list.
//!
//! # Quick Start
//!
//! ```rust
//! use dis::pdus::EntityState;
//! use dis::records::{EntityId, Marking};
//! use dis::{Pdu, decode};
//!
//! // Build an Entity State PDU
//! let mut pdu = Pdu::new(EntityState {
//!     entity_id: EntityId::new(1, 3, 101),
//!     marking: Marking::new("TANK01"),
//!     ..EntityState::default()
//! });
//!
//! // Encode with the header length filled in
//! let bytes = pdu.encode()?;
//! assert_eq!(bytes.len(), 144);
//!
//! // Decode it back
//! let decoded: Pdu<EntityState> = decode(&bytes)?;
//! assert_eq!(decoded, pdu);
//! # Ok::<(), dis::Error>(())
//! ```
//!
//! # Features
//!
//! - **Declarative records** - field order is wire order, counts are derived
//!   from their sequences
//! - **Partial decode** - a failed read keeps every field read before the error
//! - **Type dispatch** - [`pdus::AnyPdu`] decodes by the header's type byte
//! - **Bit-packed words** - unknown bits survive a decode/encode cycle
//! - **`serde` feature** - optional `Serialize`/`Deserialize` on every record

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod enums;
pub mod pdus;
pub mod protocol;
pub mod records;

pub use pdus::{AnyPdu, split_pdus};
pub use protocol::{
    Codec, CodecConfig, Error, ErrorPolicy, HEADER_SIZE, MAX_PDU_SIZE, Marshal, Pdu, PduBody,
    PduHeader, PduType, ProtocolFamily, Result, Structural, decode, encode,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
