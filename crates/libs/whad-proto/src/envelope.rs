//! The envelope owns one decoded frame and answers "what is this?" without
//! converting anything.

use core::fmt;

use prost::Message as _;
use serde::{Deserialize, Serialize};

use crate::ble::BleKind;
use crate::discovery::DiscoveryKind;
use crate::error::{DecodeError, WhadError};
use crate::esb::EsbKind;
use crate::generic::GenericKind;
use crate::message::WhadMessage;
use crate::phy::PhyKind;
use crate::unifying::UnifyingKind;
use crate::wire::{self, message::Msg, Branch};
use crate::zigbee::ZigbeeKind;

/// Top-level protocol area a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Generic,
    Discovery,
    Ble,
    Zigbee,
    Esb,
    Unifying,
    Phy,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::Generic,
        Domain::Discovery,
        Domain::Ble,
        Domain::Zigbee,
        Domain::Esb,
        Domain::Unifying,
        Domain::Phy,
    ];

    /// Field number of this domain in the top-level oneof.
    pub const fn tag(self) -> u32 {
        match self {
            Domain::Generic => 1,
            Domain::Discovery => 2,
            Domain::Ble => 3,
            Domain::Zigbee => 4,
            Domain::Esb => 5,
            Domain::Unifying => 6,
            Domain::Phy => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Domain::Generic => "generic",
            Domain::Discovery => "discovery",
            Domain::Ble => "ble",
            Domain::Zigbee => "zigbee",
            Domain::Esb => "esb",
            Domain::Unifying => "unifying",
            Domain::Phy => "phy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully qualified `(domain, kind)` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Generic(GenericKind),
    Discovery(DiscoveryKind),
    Ble(BleKind),
    Zigbee(ZigbeeKind),
    Esb(EsbKind),
    Unifying(UnifyingKind),
    Phy(PhyKind),
}

impl MessageType {
    pub const fn domain(self) -> Domain {
        match self {
            MessageType::Generic(_) => Domain::Generic,
            MessageType::Discovery(_) => Domain::Discovery,
            MessageType::Ble(_) => Domain::Ble,
            MessageType::Zigbee(_) => Domain::Zigbee,
            MessageType::Esb(_) => Domain::Esb,
            MessageType::Unifying(_) => Domain::Unifying,
            MessageType::Phy(_) => Domain::Phy,
        }
    }

    pub const fn kind_name(self) -> &'static str {
        match self {
            MessageType::Generic(kind) => kind.name(),
            MessageType::Discovery(kind) => kind.name(),
            MessageType::Ble(kind) => kind.name(),
            MessageType::Zigbee(kind) => kind.name(),
            MessageType::Esb(kind) => kind.name(),
            MessageType::Unifying(kind) => kind.name(),
            MessageType::Phy(kind) => kind.name(),
        }
    }

    /// Field number of the kind inside its domain oneof.
    pub const fn kind_tag(self) -> u32 {
        match self {
            MessageType::Generic(kind) => kind.tag(),
            MessageType::Discovery(kind) => kind.tag(),
            MessageType::Ble(kind) => kind.tag(),
            MessageType::Zigbee(kind) => kind.tag(),
            MessageType::Esb(kind) => kind.tag(),
            MessageType::Unifying(kind) => kind.tag(),
            MessageType::Phy(kind) => kind.tag(),
        }
    }

    /// Every message type the dispatcher knows, grouped by domain.
    pub fn all() -> impl Iterator<Item = MessageType> {
        GenericKind::ALL
            .iter()
            .copied()
            .map(MessageType::Generic)
            .chain(DiscoveryKind::ALL.iter().copied().map(MessageType::Discovery))
            .chain(BleKind::ALL.iter().copied().map(MessageType::Ble))
            .chain(ZigbeeKind::ALL.iter().copied().map(MessageType::Zigbee))
            .chain(EsbKind::ALL.iter().copied().map(MessageType::Esb))
            .chain(UnifyingKind::ALL.iter().copied().map(MessageType::Unifying))
            .chain(PhyKind::ALL.iter().copied().map(MessageType::Phy))
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.domain(), self.kind_name())
    }
}

/// One protocol frame, either received or about to be sent.
///
/// An envelope is created empty for outbound traffic and filled by
/// [`TypedMessage::pack`](crate::TypedMessage::pack), or created from
/// received bytes with [`Envelope::decode`]. Reading its discriminant never
/// modifies it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    frame: wire::Message,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses received bytes.
    ///
    /// Fails if the bytes are not a valid encoding, or if either level of
    /// the discriminant names nothing this crate knows about.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let frame = wire::Message::decode(bytes).map_err(|err| {
            log::debug!("rejecting {} byte frame: {}", bytes.len(), err);
            DecodeError::Wire(err)
        })?;
        let envelope = Self { frame };

        match envelope.message_type() {
            Ok(message_type) => {
                log::trace!("decoded {} ({} bytes)", message_type, bytes.len());
                Ok(envelope)
            }
            Err(err) => {
                log::debug!("rejecting {} byte frame: {}", bytes.len(), err);
                Err(err)
            }
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let bytes = self.frame.encode_to_vec();
        log::trace!("encoded {} bytes", bytes.len());
        bytes
    }

    pub fn is_empty(&self) -> bool {
        self.frame.msg.is_none()
    }

    pub fn clear(&mut self) {
        self.frame.msg = None;
    }

    /// First-level discriminant.
    pub fn domain(&self) -> Result<Domain, DecodeError> {
        match &self.frame.msg {
            None => Err(DecodeError::EmptyEnvelope),
            Some(Msg::Generic(_)) => Ok(Domain::Generic),
            Some(Msg::Discovery(_)) => Ok(Domain::Discovery),
            Some(Msg::Ble(_)) => Ok(Domain::Ble),
            Some(Msg::Zigbee(_)) => Ok(Domain::Zigbee),
            Some(Msg::Esb(_)) => Ok(Domain::Esb),
            Some(Msg::Unifying(_)) => Ok(Domain::Unifying),
            Some(Msg::Phy(_)) => Ok(Domain::Phy),
        }
    }

    /// Both discriminant levels: the domain, then the kind inside it.
    pub fn message_type(&self) -> Result<MessageType, DecodeError> {
        let domain = self.domain()?;
        let message_type = match domain {
            Domain::Generic => self.branch().map(|raw| MessageType::Generic(GenericKind::of(raw))),
            Domain::Discovery => {
                self.branch().map(|raw| MessageType::Discovery(DiscoveryKind::of(raw)))
            }
            Domain::Ble => self.branch().map(|raw| MessageType::Ble(BleKind::of(raw))),
            Domain::Zigbee => self.branch().map(|raw| MessageType::Zigbee(ZigbeeKind::of(raw))),
            Domain::Esb => self.branch().map(|raw| MessageType::Esb(EsbKind::of(raw))),
            Domain::Unifying => {
                self.branch().map(|raw| MessageType::Unifying(UnifyingKind::of(raw)))
            }
            Domain::Phy => self.branch().map(|raw| MessageType::Phy(PhyKind::of(raw))),
        };
        message_type.ok_or(DecodeError::UnknownKind(domain))
    }

    /// Converts the active branch into its typed message.
    pub fn message(&self) -> Result<WhadMessage, WhadError> {
        WhadMessage::unpack(self)
    }

    /// Replaces the whole content of the envelope.
    pub(crate) fn store(&mut self, msg: Msg) {
        self.frame.msg = Some(msg);
    }

    pub(crate) fn branch<B: Branch>(&self) -> Option<&B> {
        B::branch(&self.frame)
    }

    pub(crate) fn frame(&self) -> &wire::Message {
        &self.frame
    }
}

impl TryFrom<&[u8]> for Envelope {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(bytes)
    }
}

impl From<&WhadMessage> for Envelope {
    fn from(message: &WhadMessage) -> Self {
        let mut envelope = Envelope::new();
        message.pack(&mut envelope);
        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_envelope_has_no_domain() {
        let envelope = Envelope::new();
        assert!(envelope.is_empty());
        assert_eq!(envelope.domain(), Err(DecodeError::EmptyEnvelope));
        assert_eq!(envelope.message_type(), Err(DecodeError::EmptyEnvelope));
    }

    #[test]
    fn decode_rejects_empty_buffer() {
        assert_eq!(Envelope::decode(&[]), Err(DecodeError::EmptyEnvelope));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(Envelope::decode(&[0x1a, 0x05, 0x00]), Err(DecodeError::Wire(_))));
    }

    #[test]
    fn decode_rejects_unknown_domain_tag() {
        // field 15, length 0: no domain uses that number
        assert_eq!(Envelope::decode(&[0x7a, 0x00]), Err(DecodeError::EmptyEnvelope));
    }

    #[test]
    fn decode_rejects_unknown_kind_tag() {
        // esb domain holding field 99, length 0
        let bytes = [0x2a, 0x03, 0x9a, 0x06, 0x00];
        assert_eq!(Envelope::decode(&bytes), Err(DecodeError::UnknownKind(Domain::Esb)));
    }

    #[test]
    fn reading_discriminant_is_repeatable() {
        let envelope = Envelope::decode(&[0x3a, 0x03, 0x92, 0x01, 0x00]).expect("phy::Start");
        let first = envelope.message_type().expect("known type");
        let second = envelope.message_type().expect("known type");
        assert_eq!(first, MessageType::Phy(PhyKind::Start));
        assert_eq!(first, second);
        assert_eq!(envelope.domain(), Ok(Domain::Phy));
    }

    #[test]
    fn message_type_display_is_qualified() {
        assert_eq!(
            MessageType::Zigbee(ZigbeeKind::RawPduReceived).to_string(),
            "zigbee::RawPduReceived"
        );
        assert_eq!(Domain::from_name("BLE"), Some(Domain::Ble));
    }

    #[test]
    fn all_lists_every_kind_once() {
        let all: Vec<MessageType> = MessageType::all().collect();
        let expected = GenericKind::ALL.len()
            + DiscoveryKind::ALL.len()
            + BleKind::ALL.len()
            + ZigbeeKind::ALL.len()
            + EsbKind::ALL.len()
            + UnifyingKind::ALL.len()
            + PhyKind::ALL.len();
        assert_eq!(all.len(), expected);
        assert_eq!(all.len(), 4 + 7 + 38 + 16 + 12 + 14 + 23);
    }
}
