//! Nordic Enhanced ShockBurst.

use crate::payload::BoundedPayload;
use crate::wire::esb::{self as raw, message::Msg as EsbWire};

/// Maximum length of an ESB node address.
pub const MAX_ADDRESS_LEN: usize = 5;

pub type EsbAddress = BoundedPayload<MAX_ADDRESS_LEN>;

/// Address that makes sniffing accept every node.
pub const PROMISCUOUS_ADDRESS: [u8; MAX_ADDRESS_LEN] = [0xff; MAX_ADDRESS_LEN];

/// Channel value asking the adapter to pick the channel itself.
pub const AUTO_CHANNEL: u32 = 0xff;

domain_messages! {
    domain: Esb,
    message: EsbMessage,
    kind: EsbKind,
    wire: EsbWire,
    kinds: {
        SetNodeAddress = 1,
        SniffMode = 2,
        JamMode = 3,
        SendPdu = 4,
        SendRawPdu = 5,
        PrxMode = 6,
        PtxMode = 7,
        Start = 8,
        Stop = 9,
        RawPduReceived = 10,
        PduReceived = 11,
        Jammed = 12,
    }
}

esb_family_kinds!(raw);

plain_kinds! {
    /// Primary receiver role.
    PrxMode => raw::PrxCmd { channel: u32 }
    /// Primary transmitter role.
    PtxMode => raw::PtxCmd { channel: u32 }
}

impl SniffMode {
    /// Sniffs every node on `channel`.
    pub fn promiscuous(channel: u32) -> Self {
        Self {
            channel,
            address: EsbAddress::full(PROMISCUOUS_ADDRESS),
            show_acknowledgements: false,
        }
    }

    pub fn is_promiscuous(&self) -> bool {
        self.address.as_slice() == PROMISCUOUS_ADDRESS
    }
}
