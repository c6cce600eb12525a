//! IEEE 802.15.4 / ZigBee.

use serde::{Deserialize, Serialize};

use crate::error::{BoundError, ParsingError};
use crate::field::enumeration;
use crate::payload::Pdu;
use crate::wire::zigbee::{self as raw, message::Msg as ZigbeeWire};

pub use crate::wire::zigbee::{AddressType, MitmRole};

domain_messages! {
    domain: Zigbee,
    message: ZigbeeMessage,
    kind: ZigbeeKind,
    wire: ZigbeeWire,
    kinds: {
        SetNodeAddress = 1,
        SniffMode = 2,
        JamMode = 3,
        EnergyDetectionMode = 4,
        EndDeviceMode = 5,
        RouterMode = 6,
        CoordinatorMode = 7,
        Start = 8,
        Stop = 9,
        SendPdu = 10,
        SendRawPdu = 11,
        ManInTheMiddleMode = 12,
        RawPduReceived = 13,
        PduReceived = 14,
        EnergyDetectionSample = 15,
        Jammed = 16,
    }
}

plain_kinds! {
    SniffMode => raw::SniffCmd { channel: u32 }
    JamMode => raw::JamCmd { channel: u32 }
    EnergyDetectionMode => raw::EnergyDetectionCmd { channel: u32 }
    EndDeviceMode => raw::EndDeviceCmd { channel: u32 }
    RouterMode => raw::RouterCmd { channel: u32 }
    CoordinatorMode => raw::CoordinatorCmd { channel: u32 }
    Start => raw::StartCmd {}
    Stop => raw::StopCmd {}
    /// One energy detection reading.
    EnergyDetectionSample => raw::EnergyDetectionSample { timestamp: u32, sample: u32 }
    Jammed => raw::Jammed { timestamp: u32 }
}

/// Sets the adapter's own 802.15.4 address.
///
/// Short addresses are 16 bits; extended addresses use the full 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NodeAddressFields")]
pub struct SetNodeAddress {
    address: u64,
    address_type: AddressType,
}

#[derive(Deserialize)]
struct NodeAddressFields {
    address: u64,
    address_type: AddressType,
}

impl TryFrom<NodeAddressFields> for SetNodeAddress {
    type Error = BoundError;

    fn try_from(fields: NodeAddressFields) -> Result<Self, Self::Error> {
        Self::new(fields.address, fields.address_type)
    }
}

impl SetNodeAddress {
    /// Builds an address, rejecting a short address wider than 16 bits.
    pub fn new(address: u64, address_type: AddressType) -> Result<Self, BoundError> {
        if address_type == AddressType::Short && address > u64::from(u16::MAX) {
            let len = (u64::BITS - address.leading_zeros()).div_ceil(8) as usize;
            return Err(BoundError { len, max: 2 });
        }
        Ok(Self { address, address_type })
    }

    pub const fn short(address: u16) -> Self {
        Self { address: address as u64, address_type: AddressType::Short }
    }

    pub const fn extended(address: u64) -> Self {
        Self { address, address_type: AddressType::Extended }
    }

    pub const fn address(&self) -> u64 {
        self.address
    }

    pub const fn address_type(&self) -> AddressType {
        self.address_type
    }
}

impl From<&SetNodeAddress> for raw::SetNodeAddressCmd {
    fn from(msg: &SetNodeAddress) -> Self {
        Self { address: msg.address, address_type: msg.address_type.into() }
    }
}

impl TryFrom<&raw::SetNodeAddressCmd> for SetNodeAddress {
    type Error = ParsingError;

    fn try_from(raw: &raw::SetNodeAddressCmd) -> Result<Self, Self::Error> {
        let address_type = enumeration("address_type", raw.address_type)?;
        Self::new(raw.address, address_type).map_err(|err| {
            log::debug!("rejecting field 'address': {}", err);
            ParsingError::bound("address", err)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendPdu {
    pub channel: u32,
    pub pdu: Pdu,
}

impl From<&SendPdu> for raw::SendCmd {
    fn from(msg: &SendPdu) -> Self {
        Self { channel: msg.channel, pdu: msg.pdu.to_vec() }
    }
}

impl TryFrom<&raw::SendCmd> for SendPdu {
    type Error = ParsingError;

    fn try_from(raw: &raw::SendCmd) -> Result<Self, Self::Error> {
        Ok(Self { channel: raw.channel, pdu: Pdu::from_field("pdu", &raw.pdu)? })
    }
}

/// Sends a frame with a caller-supplied FCS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendRawPdu {
    pub channel: u32,
    pub pdu: Pdu,
    pub fcs: u32,
}

impl From<&SendRawPdu> for raw::SendRawCmd {
    fn from(msg: &SendRawPdu) -> Self {
        Self { channel: msg.channel, pdu: msg.pdu.to_vec(), fcs: msg.fcs }
    }
}

impl TryFrom<&raw::SendRawCmd> for SendRawPdu {
    type Error = ParsingError;

    fn try_from(raw: &raw::SendRawCmd) -> Result<Self, Self::Error> {
        Ok(Self { channel: raw.channel, pdu: Pdu::from_field("pdu", &raw.pdu)?, fcs: raw.fcs })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManInTheMiddleMode {
    pub role: MitmRole,
}

impl From<&ManInTheMiddleMode> for raw::ManInTheMiddleCmd {
    fn from(msg: &ManInTheMiddleMode) -> Self {
        Self { role: msg.role.into() }
    }
}

impl TryFrom<&raw::ManInTheMiddleCmd> for ManInTheMiddleMode {
    type Error = ParsingError;

    fn try_from(raw: &raw::ManInTheMiddleCmd) -> Result<Self, Self::Error> {
        Ok(Self { role: enumeration("role", raw.role)? })
    }
}

/// A captured frame including its FCS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawPduReceived {
    pub channel: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcs_validity: Option<bool>,
    pub pdu: Pdu,
    pub fcs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lqi: Option<u32>,
}

optional_fields!(RawPduReceived {
    rssi: i32 => has_rssi, with_rssi;
    timestamp: u32 => has_timestamp, with_timestamp;
    fcs_validity: bool => has_fcs_validity, with_fcs_validity;
    lqi: u32 => has_lqi, with_lqi;
});

impl From<&RawPduReceived> for raw::RawPduReceived {
    fn from(msg: &RawPduReceived) -> Self {
        Self {
            channel: msg.channel,
            rssi: msg.rssi,
            timestamp: msg.timestamp,
            fcs_validity: msg.fcs_validity,
            pdu: msg.pdu.to_vec(),
            fcs: msg.fcs,
            lqi: msg.lqi,
        }
    }
}

impl TryFrom<&raw::RawPduReceived> for RawPduReceived {
    type Error = ParsingError;

    fn try_from(raw: &raw::RawPduReceived) -> Result<Self, Self::Error> {
        Ok(Self {
            channel: raw.channel,
            rssi: raw.rssi,
            timestamp: raw.timestamp,
            fcs_validity: raw.fcs_validity,
            pdu: Pdu::from_field("pdu", &raw.pdu)?,
            fcs: raw.fcs,
            lqi: raw.lqi,
        })
    }
}

/// A captured frame with the FCS already checked and stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PduReceived {
    pub channel: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcs_validity: Option<bool>,
    pub pdu: Pdu,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lqi: Option<u32>,
}

optional_fields!(PduReceived {
    rssi: i32 => has_rssi, with_rssi;
    timestamp: u32 => has_timestamp, with_timestamp;
    fcs_validity: bool => has_fcs_validity, with_fcs_validity;
    lqi: u32 => has_lqi, with_lqi;
});

impl From<&PduReceived> for raw::PduReceived {
    fn from(msg: &PduReceived) -> Self {
        Self {
            channel: msg.channel,
            rssi: msg.rssi,
            timestamp: msg.timestamp,
            fcs_validity: msg.fcs_validity,
            pdu: msg.pdu.to_vec(),
            lqi: msg.lqi,
        }
    }
}

impl TryFrom<&raw::PduReceived> for PduReceived {
    type Error = ParsingError;

    fn try_from(raw: &raw::PduReceived) -> Result<Self, Self::Error> {
        Ok(Self {
            channel: raw.channel,
            rssi: raw.rssi,
            timestamp: raw.timestamp,
            fcs_validity: raw.fcs_validity,
            pdu: Pdu::from_field("pdu", &raw.pdu)?,
            lqi: raw.lqi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::TypedMessage;

    #[test]
    fn short_address_must_fit_sixteen_bits() {
        let raw = raw::SetNodeAddressCmd {
            address: 0x1_0000,
            address_type: AddressType::Short.into(),
        };
        assert_eq!(
            SetNodeAddress::try_from(&raw),
            Err(ParsingError::bound("address", BoundError { len: 3, max: 2 }))
        );

        let raw = raw::SetNodeAddressCmd {
            address: 0x1_0000,
            address_type: AddressType::Extended.into(),
        };
        assert_eq!(SetNodeAddress::try_from(&raw), Ok(SetNodeAddress::extended(0x1_0000)));
    }

    #[test]
    fn wide_short_address_cannot_be_built() {
        assert_eq!(
            SetNodeAddress::new(0x1_0000, AddressType::Short),
            Err(BoundError { len: 3, max: 2 })
        );
        let msg = SetNodeAddress::new(0xbeef, AddressType::Short).expect("fits sixteen bits");
        assert_eq!(msg, SetNodeAddress::short(0xbeef));
        assert_eq!(msg.address(), 0xbeef);
        assert_eq!(msg.address_type(), AddressType::Short);
    }

    #[test]
    fn json_node_address_is_checked() {
        let json = r#"{"address":65536,"address_type":"short"}"#;
        assert!(serde_json::from_str::<SetNodeAddress>(json).is_err());

        let msg = SetNodeAddress::extended(0x0011_2233_4455_6677);
        let json = serde_json::to_string(&msg).expect("serialize");
        let back: SetNodeAddress = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(SetNodeAddress::decode(&back.encode()), Ok(msg));
    }

    #[test]
    fn node_address_survives_envelope() {
        let msg = SetNodeAddress::short(0x1234);
        assert_eq!(SetNodeAddress::decode(&msg.encode()), Ok(msg));
    }

    #[test]
    fn zero_lqi_on_the_wire_is_present() {
        let msg = PduReceived { channel: 15, ..Default::default() }.with_lqi(0);
        let decoded = PduReceived::decode(&msg.encode()).expect("pdu received");
        assert!(decoded.has_lqi());
        assert_eq!(decoded.lqi(), 0);
        assert!(!decoded.has_rssi());
    }

    #[test]
    fn unknown_mitm_role_is_rejected() {
        let raw = raw::ManInTheMiddleCmd { role: 5 };
        assert_eq!(
            ManInTheMiddleMode::try_from(&raw),
            Err(ParsingError::InvalidEnum { field: "role", value: 5 })
        );
    }
}
