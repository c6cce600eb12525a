//! Logitech Unifying, layered on ESB framing.

use crate::wire::unifying::{self as raw, message::Msg as UnifyingWire};

pub use crate::esb::{EsbAddress, AUTO_CHANNEL, PROMISCUOUS_ADDRESS};

domain_messages! {
    domain: Unifying,
    message: UnifyingMessage,
    kind: UnifyingKind,
    wire: UnifyingWire,
    kinds: {
        SetNodeAddress = 1,
        SniffMode = 2,
        JamMode = 3,
        SendPdu = 4,
        SendRawPdu = 5,
        DongleMode = 6,
        KeyboardMode = 7,
        MouseMode = 8,
        Start = 9,
        Stop = 10,
        SniffPairing = 11,
        RawPduReceived = 12,
        PduReceived = 13,
        Jammed = 14,
    }
}

esb_family_kinds!(raw);

plain_kinds! {
    /// Acts as the receiving dongle.
    DongleMode => raw::DongleModeCmd { channel: u32 }
    KeyboardMode => raw::KeyboardModeCmd { channel: u32 }
    MouseMode => raw::MouseModeCmd { channel: u32 }
    /// Follows the pairing channel to capture a device pairing.
    SniffPairing => raw::SniffPairingCmd {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{Envelope, MessageType};
    use crate::message::{TypedMessage, WhadMessage};
    use crate::payload::Pdu;

    #[test]
    fn shared_shapes_use_their_own_tags() {
        assert_eq!(UnifyingKind::Start.tag(), 9);
        assert_eq!(crate::esb::EsbKind::Start.tag(), 8);

        let mut envelope = Envelope::new();
        Start::default().pack(&mut envelope);
        assert_eq!(envelope.message_type(), Ok(MessageType::Unifying(UnifyingKind::Start)));
    }

    #[test]
    fn raw_pdu_survives_dynamic_dispatch() {
        let msg = RawPduReceived {
            channel: 5,
            pdu: Pdu::new(&[0x00, 0xc2, 0x00, 0x00]).expect("fits"),
            ..Default::default()
        }
        .with_rssi(-51)
        .with_crc_validity(true);

        let decoded = crate::decode(&crate::encode(msg.clone())).expect("valid frame");
        assert_eq!(decoded, WhadMessage::Unifying(UnifyingMessage::RawPduReceived(msg)));
    }

    #[test]
    fn mode_commands_keep_channel() {
        let msg = KeyboardMode { channel: AUTO_CHANNEL };
        assert_eq!(KeyboardMode::decode(&msg.encode()), Ok(msg));
    }
}
