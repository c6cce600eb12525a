//! Typed access to envelope content.
//!
//! Every message kind has a fields struct implementing [`TypedMessage`].
//! [`WhadMessage`] is the closed sum over all of them, for callers that
//! dispatch on whatever arrived rather than expecting one kind.

use serde::{Deserialize, Serialize};

use crate::ble::BleMessage;
use crate::discovery::DiscoveryMessage;
use crate::envelope::{Domain, Envelope, MessageType};
use crate::error::{DecodeError, ParsingError, WhadError};
use crate::esb::EsbMessage;
use crate::generic::GenericMessage;
use crate::phy::PhyMessage;
use crate::unifying::UnifyingMessage;
use crate::wire::message::Msg;
use crate::zigbee::ZigbeeMessage;

/// One concrete message kind.
///
/// `pack` overwrites whatever the envelope held; `unpack` refuses envelopes
/// holding any other kind.
pub trait TypedMessage: Sized {
    /// The `(domain, kind)` pair this type is bound to.
    const MESSAGE_TYPE: MessageType;

    /// Writes this message into `envelope`, replacing its previous content.
    fn pack(&self, envelope: &mut Envelope);

    /// Reads this message out of `envelope`.
    fn unpack(envelope: &Envelope) -> Result<Self, ParsingError>;

    /// Packs into a fresh envelope and serializes it.
    fn encode(&self) -> Vec<u8> {
        let mut envelope = Envelope::new();
        self.pack(&mut envelope);
        envelope.encode()
    }

    /// Decodes bytes that are expected to hold exactly this kind.
    fn decode(bytes: &[u8]) -> Result<Self, WhadError> {
        let envelope = Envelope::decode(bytes)?;
        Ok(Self::unpack(&envelope)?)
    }
}

/// Any message of any domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhadMessage {
    Generic(GenericMessage),
    Discovery(DiscoveryMessage),
    Ble(BleMessage),
    Zigbee(ZigbeeMessage),
    Esb(EsbMessage),
    Unifying(UnifyingMessage),
    Phy(PhyMessage),
}

impl WhadMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            WhadMessage::Generic(msg) => MessageType::Generic(msg.kind()),
            WhadMessage::Discovery(msg) => MessageType::Discovery(msg.kind()),
            WhadMessage::Ble(msg) => MessageType::Ble(msg.kind()),
            WhadMessage::Zigbee(msg) => MessageType::Zigbee(msg.kind()),
            WhadMessage::Esb(msg) => MessageType::Esb(msg.kind()),
            WhadMessage::Unifying(msg) => MessageType::Unifying(msg.kind()),
            WhadMessage::Phy(msg) => MessageType::Phy(msg.kind()),
        }
    }

    pub fn domain(&self) -> Domain {
        self.message_type().domain()
    }

    /// Writes this message into `envelope`, replacing its previous content.
    pub fn pack(&self, envelope: &mut Envelope) {
        use crate::wire::Branch;

        let msg = match self {
            WhadMessage::Generic(msg) => msg.to_wire().wrap(),
            WhadMessage::Discovery(msg) => msg.to_wire().wrap(),
            WhadMessage::Ble(msg) => msg.to_wire().wrap(),
            WhadMessage::Zigbee(msg) => msg.to_wire().wrap(),
            WhadMessage::Esb(msg) => msg.to_wire().wrap(),
            WhadMessage::Unifying(msg) => msg.to_wire().wrap(),
            WhadMessage::Phy(msg) => msg.to_wire().wrap(),
        };
        envelope.store(msg);
    }

    /// Converts whatever `envelope` holds into its typed message.
    pub fn unpack(envelope: &Envelope) -> Result<Self, WhadError> {
        let domain = envelope.domain()?;
        let message = match envelope.frame().msg.as_ref().and_then(domain_branch) {
            Some(Inner::Generic(raw)) => WhadMessage::Generic(GenericMessage::from_wire(raw)?),
            Some(Inner::Discovery(raw)) => {
                WhadMessage::Discovery(DiscoveryMessage::from_wire(raw)?)
            }
            Some(Inner::Ble(raw)) => WhadMessage::Ble(BleMessage::from_wire(raw)?),
            Some(Inner::Zigbee(raw)) => WhadMessage::Zigbee(ZigbeeMessage::from_wire(raw)?),
            Some(Inner::Esb(raw)) => WhadMessage::Esb(EsbMessage::from_wire(raw)?),
            Some(Inner::Unifying(raw)) => WhadMessage::Unifying(UnifyingMessage::from_wire(raw)?),
            Some(Inner::Phy(raw)) => WhadMessage::Phy(PhyMessage::from_wire(raw)?),
            None => return Err(DecodeError::UnknownKind(domain).into()),
        };
        Ok(message)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut envelope = Envelope::new();
        self.pack(&mut envelope);
        envelope.encode()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, WhadError> {
        let envelope = Envelope::decode(bytes)?;
        Self::unpack(&envelope)
    }
}

macro_rules! domain_from {
    ($($variant:ident($message:ty)),+ $(,)?) => {
        $(
            impl From<$message> for WhadMessage {
                fn from(message: $message) -> Self {
                    WhadMessage::$variant(message)
                }
            }
        )+
    };
}

domain_from! {
    Generic(GenericMessage),
    Discovery(DiscoveryMessage),
    Ble(BleMessage),
    Zigbee(ZigbeeMessage),
    Esb(EsbMessage),
    Unifying(UnifyingMessage),
    Phy(PhyMessage),
}

enum Inner<'a> {
    Generic(&'a crate::wire::generic::message::Msg),
    Discovery(&'a crate::wire::discovery::message::Msg),
    Ble(&'a crate::wire::ble::message::Msg),
    Zigbee(&'a crate::wire::zigbee::message::Msg),
    Esb(&'a crate::wire::esb::message::Msg),
    Unifying(&'a crate::wire::unifying::message::Msg),
    Phy(&'a crate::wire::phy::message::Msg),
}

fn domain_branch(msg: &Msg) -> Option<Inner<'_>> {
    match msg {
        Msg::Generic(inner) => inner.msg.as_ref().map(Inner::Generic),
        Msg::Discovery(inner) => inner.msg.as_ref().map(Inner::Discovery),
        Msg::Ble(inner) => inner.msg.as_ref().map(Inner::Ble),
        Msg::Zigbee(inner) => inner.msg.as_ref().map(Inner::Zigbee),
        Msg::Esb(inner) => inner.msg.as_ref().map(Inner::Esb),
        Msg::Unifying(inner) => inner.msg.as_ref().map(Inner::Unifying),
        Msg::Phy(inner) => inner.msg.as_ref().map(Inner::Phy),
    }
}

/// Serializes any message into a complete frame.
pub fn encode<M: Into<WhadMessage>>(message: M) -> Vec<u8> {
    message.into().encode()
}

/// Decodes a frame holding any known message.
pub fn decode(bytes: &[u8]) -> Result<WhadMessage, WhadError> {
    WhadMessage::decode(bytes)
}

/// Decodes a frame that must hold message kind `M`.
pub fn decode_as<M: TypedMessage>(bytes: &[u8]) -> Result<M, WhadError> {
    M::decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esb::{EsbKind, Jammed, Stop};
    use crate::generic::{GenericKind, Progress};

    #[test]
    fn typed_and_dynamic_paths_agree() {
        let typed = Progress { value: 42 }.encode();
        let dynamic = encode(Progress { value: 42 });
        assert_eq!(typed, dynamic);

        let message = decode(&typed).expect("valid frame");
        assert_eq!(message.message_type(), MessageType::Generic(GenericKind::Progress));
        assert_eq!(message, WhadMessage::from(Progress { value: 42 }));
    }

    #[test]
    fn pack_overwrites_previous_content() {
        let mut envelope = Envelope::new();
        Progress { value: 3 }.pack(&mut envelope);
        Jammed { timestamp: 9 }.pack(&mut envelope);

        assert_eq!(envelope.message_type(), Ok(MessageType::Esb(EsbKind::Jammed)));
        assert!(Progress::unpack(&envelope).is_err());
        assert_eq!(Jammed::unpack(&envelope), Ok(Jammed { timestamp: 9 }));
    }

    #[test]
    fn decode_as_rejects_other_kind() {
        let bytes = encode(Stop::default());
        let err = decode_as::<Jammed>(&bytes).unwrap_err();
        assert_eq!(
            err,
            WhadError::Parsing(ParsingError::KindMismatch {
                expected: MessageType::Esb(EsbKind::Jammed),
                found: Some(MessageType::Esb(EsbKind::Stop)),
            })
        );
    }

    #[test]
    fn unpack_empty_envelope_fails() {
        assert_eq!(
            WhadMessage::unpack(&Envelope::new()),
            Err(WhadError::Decode(DecodeError::EmptyEnvelope))
        );
    }
}
