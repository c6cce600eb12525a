//! # whad-proto
//!
//! Host side of the WHAD wire protocol spoken by wireless hacking adapters.
//!
//! Every frame is a protocol buffer `Message` whose top-level oneof selects a
//! radio domain, and whose domain message holds a second oneof selecting the
//! message kind. This crate reads both levels without converting anything,
//! then copies the selected branch into a plain fields struct, checking byte
//! bounds and enum values on the way.
//!
//! ## Wire Layout
//!
//! ```text
//! Message { oneof msg }
//!   generic(1) | discovery(2) | ble(3) | zigbee(4) | esb(5) | unifying(6) | phy(7)
//!     <domain>::Message { oneof msg }
//!       <kind>(tag) -> fields
//! ```
//!
//! ## Example
//!
//! ```rust
//! use whad_proto::ble::{BleAddrType, BleKind, ConnectTo};
//! use whad_proto::{Envelope, MessageType, TypedMessage};
//!
//! let connect = ConnectTo::new("11:22:33:44:55:66".parse().unwrap(), BleAddrType::Public)
//!     .with_access_address(0x8e89_bed6);
//!
//! let mut envelope = Envelope::new();
//! connect.pack(&mut envelope);
//! let bytes = envelope.encode();
//!
//! let received = Envelope::decode(&bytes).unwrap();
//! assert_eq!(received.message_type().unwrap(), MessageType::Ble(BleKind::ConnectTo));
//!
//! let decoded = ConnectTo::unpack(&received).unwrap();
//! assert_eq!(decoded.access_address(), 0x8e89_bed6);
//! assert!(!decoded.has_crc_init());
//! ```

#[macro_use]
mod macros;

pub mod envelope;
pub mod error;
mod field;
pub mod message;
pub mod payload;
pub mod wire;

pub mod ble;
pub mod discovery;
pub mod esb;
pub mod generic;
pub mod phy;
pub mod unifying;
pub mod zigbee;

pub use envelope::{Domain, Envelope, MessageType};
pub use error::{BoundError, DecodeError, ParsingError, Result, WhadError};
pub use message::{decode, decode_as, encode, TypedMessage, WhadMessage};
pub use payload::{BoundedPayload, Pdu, MAX_PDU_LEN};

/// Protocol version implemented by this crate, as announced in
/// [`discovery::InfoQuery`].
pub const PROTOCOL_VERSION: u32 = 1;
