//! Bluetooth Low Energy: sniffing, jamming, hijacking, and connection roles.
//!
//! Device addresses are kept in display order (`11:22:33:44:55:66`) and
//! written least significant byte first on the wire, as the link layer does.

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ParsingError;
use crate::field::{enumeration, required};
use crate::payload::{fixed, BoundedPayload, Pdu};
use crate::wire::ble::{self as raw, message::Msg as BleWire, prepare_sequence_cmd};

pub use crate::wire::ble::{BleAddrType, BleAdvType, BleDirection};

/// Maximum advertising or scan response data length.
pub const MAX_ADV_DATA_LEN: usize = 31;
/// Maximum length of a pattern matched against received packets.
pub const MAX_PATTERN_LEN: usize = 20;

pub type AdvData = BoundedPayload<MAX_ADV_DATA_LEN>;
pub type Pattern = BoundedPayload<MAX_PATTERN_LEN>;

domain_messages! {
    domain: Ble,
    message: BleMessage,
    kind: BleKind,
    wire: BleWire,
    kinds: {
        SetBdAddress = 1,
        SniffAdv = 2,
        JamAdv = 3,
        JamAdvOnChannel = 4,
        ReactiveJam = 5,
        SniffConnReq = 6,
        SniffAccessAddress = 7,
        SniffActiveConn = 8,
        JamConn = 9,
        ScanMode = 10,
        AdvMode = 11,
        SetAdvData = 12,
        CentralMode = 13,
        ConnectTo = 14,
        SendRawPdu = 15,
        SendPdu = 16,
        Disconnect = 17,
        PeripheralMode = 18,
        Start = 19,
        Stop = 20,
        HijackMaster = 21,
        HijackSlave = 22,
        HijackBoth = 23,
        SetEncryption = 24,
        PrepareSequence = 25,
        Trigger = 26,
        DeleteSequence = 27,
        AccessAddressDiscovered = 28,
        AdvPduReceived = 29,
        Connected = 30,
        Disconnected = 31,
        Synchronized = 32,
        Desynchronized = 33,
        Hijacked = 34,
        Injected = 35,
        RawPduReceived = 36,
        PduReceived = 37,
        Triggered = 38,
    }
}

/// A 48-bit Bluetooth device address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BdAddress([u8; 6]);

impl BdAddress {
    pub const LEN: usize = 6;
    /// Matches any device when used as a sniffing filter.
    pub const ANY: Self = Self([0xff; 6]);

    /// Builds an address from bytes in display order.
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    fn to_wire(self) -> Vec<u8> {
        self.0.iter().rev().copied().collect()
    }

    fn from_wire(field: &'static str, data: &[u8]) -> Result<Self, ParsingError> {
        let mut bytes = fixed::<6>(field, data)?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid device address '{0}'")]
pub struct AddressParseError(String);

impl FromStr for BdAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split(':');
        for byte in bytes.iter_mut() {
            let part = parts.next().ok_or_else(|| AddressParseError(s.to_string()))?;
            if part.len() != 2 {
                return Err(AddressParseError(s.to_string()));
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| AddressParseError(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(AddressParseError(s.to_string()));
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for BdAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl fmt::Debug for BdAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BdAddress({})", self)
    }
}

impl Serialize for BdAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BdAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Bitmap of the 37 BLE data channels, channel 0 in the lowest bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelMap([u8; 5]);

impl ChannelMap {
    pub const LEN: usize = 5;
    pub const DATA_CHANNELS: u8 = 37;
    pub const ALL_DATA_CHANNELS: Self = Self([0xff, 0xff, 0xff, 0xff, 0x1f]);

    pub const fn new(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    pub fn from_channels<I: IntoIterator<Item = u8>>(channels: I) -> Self {
        let mut map = Self::default();
        for channel in channels.into_iter().filter(|ch| *ch < Self::DATA_CHANNELS) {
            map.0[usize::from(channel / 8)] |= 1 << (channel % 8);
        }
        map
    }

    pub const fn bytes(&self) -> [u8; 5] {
        self.0
    }

    pub fn contains(&self, channel: u8) -> bool {
        channel < Self::DATA_CHANNELS
            && self.0[usize::from(channel / 8)] & (1 << (channel % 8)) != 0
    }

    pub fn channels(&self) -> impl Iterator<Item = u8> + '_ {
        (0..Self::DATA_CHANNELS).filter(|ch| self.contains(*ch))
    }

    pub fn count(&self) -> usize {
        self.channels().count()
    }

    fn from_wire(field: &'static str, data: &[u8]) -> Result<Self, ParsingError> {
        fixed::<5>(field, data).map(Self)
    }
}

fn optional_map(
    field: &'static str,
    data: &Option<Vec<u8>>,
) -> Result<Option<ChannelMap>, ParsingError> {
    data.as_deref().map(|bytes| ChannelMap::from_wire(field, bytes)).transpose()
}

plain_kinds! {
    JamAdv => raw::JamAdvCmd {}
    JamAdvOnChannel => raw::JamAdvOnChannelCmd { channel: u32 }
    JamConn => raw::JamConnCmd { access_address: u32 }
    /// Passive or active scanning of advertisements.
    ScanMode => raw::ScanModeCmd { active_scan: bool }
    CentralMode => raw::CentralModeCmd {}
    Disconnect => raw::DisconnectCmd { conn_handle: u32 }
    Start => raw::StartCmd {}
    Stop => raw::StopCmd {}
    HijackMaster => raw::HijackMasterCmd { access_address: u32 }
    HijackSlave => raw::HijackSlaveCmd { access_address: u32 }
    HijackBoth => raw::HijackBothCmd { access_address: u32 }
    /// Fires a prepared sequence by id.
    Trigger => raw::TriggerCmd { id: u32 }
    DeleteSequence => raw::DeleteSequenceCmd { id: u32 }
    Disconnected => raw::Disconnected { reason: u32, conn_handle: u32 }
    Desynchronized => raw::Desynchronized { access_address: u32 }
    Hijacked => raw::Hijacked { success: bool, access_address: u32 }
    Injected => raw::Injected { success: bool, access_address: u32, injection_attempts: u32 }
    /// A prepared sequence was sent.
    Triggered => raw::Triggered { id: u32 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetBdAddress {
    pub bd_address: BdAddress,
    pub addr_type: BleAddrType,
}

impl From<&SetBdAddress> for raw::SetBdAddressCmd {
    fn from(msg: &SetBdAddress) -> Self {
        Self { bd_address: msg.bd_address.to_wire(), addr_type: msg.addr_type.into() }
    }
}

impl TryFrom<&raw::SetBdAddressCmd> for SetBdAddress {
    type Error = ParsingError;

    fn try_from(raw: &raw::SetBdAddressCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            bd_address: BdAddress::from_wire("bd_address", &raw.bd_address)?,
            addr_type: enumeration("addr_type", raw.addr_type)?,
        })
    }
}

/// Sniffs advertisements, optionally filtered on one advertiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SniffAdv {
    pub use_extended_adv: bool,
    pub channel: u32,
    pub bd_address: BdAddress,
}

impl From<&SniffAdv> for raw::SniffAdvCmd {
    fn from(msg: &SniffAdv) -> Self {
        Self {
            use_extended_adv: msg.use_extended_adv,
            channel: msg.channel,
            bd_address: msg.bd_address.to_wire(),
        }
    }
}

impl TryFrom<&raw::SniffAdvCmd> for SniffAdv {
    type Error = ParsingError;

    fn try_from(raw: &raw::SniffAdvCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            use_extended_adv: raw.use_extended_adv,
            channel: raw.channel,
            bd_address: BdAddress::from_wire("bd_address", &raw.bd_address)?,
        })
    }
}

/// Jams packets starting with `pattern` at `position`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactiveJam {
    pub channel: u32,
    pub pattern: Pattern,
    pub position: u32,
}

impl From<&ReactiveJam> for raw::ReactiveJamCmd {
    fn from(msg: &ReactiveJam) -> Self {
        Self { channel: msg.channel, pattern: msg.pattern.to_vec(), position: msg.position }
    }
}

impl TryFrom<&raw::ReactiveJamCmd> for ReactiveJam {
    type Error = ParsingError;

    fn try_from(raw: &raw::ReactiveJamCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            channel: raw.channel,
            pattern: Pattern::from_field("pattern", &raw.pattern)?,
            position: raw.position,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SniffConnReq {
    pub show_empty_packets: bool,
    pub show_advertisements: bool,
    pub channel: u32,
    pub bd_address: BdAddress,
}

impl From<&SniffConnReq> for raw::SniffConnReqCmd {
    fn from(msg: &SniffConnReq) -> Self {
        Self {
            show_empty_packets: msg.show_empty_packets,
            show_advertisements: msg.show_advertisements,
            channel: msg.channel,
            bd_address: msg.bd_address.to_wire(),
        }
    }
}

impl TryFrom<&raw::SniffConnReqCmd> for SniffConnReq {
    type Error = ParsingError;

    fn try_from(raw: &raw::SniffConnReqCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            show_empty_packets: raw.show_empty_packets,
            show_advertisements: raw.show_advertisements,
            channel: raw.channel,
            bd_address: BdAddress::from_wire("bd_address", &raw.bd_address)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SniffAccessAddress {
    pub monitored_channels: ChannelMap,
}

impl From<&SniffAccessAddress> for raw::SniffAccessAddressCmd {
    fn from(msg: &SniffAccessAddress) -> Self {
        Self { monitored_channels: msg.monitored_channels.bytes().to_vec() }
    }
}

impl TryFrom<&raw::SniffAccessAddressCmd> for SniffAccessAddress {
    type Error = ParsingError;

    fn try_from(raw: &raw::SniffAccessAddressCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            monitored_channels: ChannelMap::from_wire(
                "monitored_channels",
                &raw.monitored_channels,
            )?,
        })
    }
}

/// Follows an established connection. Unknown parameters are left absent
/// and recovered by the adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SniffActiveConn {
    pub access_address: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crc_init: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_map: Option<ChannelMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hop_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hop_increment: Option<u32>,
    pub monitored_channels: ChannelMap,
}

optional_fields!(SniffActiveConn {
    crc_init: u32 => has_crc_init, with_crc_init;
    channel_map: ChannelMap => has_channel_map, with_channel_map;
    hop_interval: u32 => has_hop_interval, with_hop_interval;
    hop_increment: u32 => has_hop_increment, with_hop_increment;
});

impl From<&SniffActiveConn> for raw::SniffActiveConnCmd {
    fn from(msg: &SniffActiveConn) -> Self {
        Self {
            access_address: msg.access_address,
            crc_init: msg.crc_init,
            channel_map: msg.channel_map.map(|map| map.bytes().to_vec()),
            hop_interval: msg.hop_interval,
            hop_increment: msg.hop_increment,
            monitored_channels: msg.monitored_channels.bytes().to_vec(),
        }
    }
}

impl TryFrom<&raw::SniffActiveConnCmd> for SniffActiveConn {
    type Error = ParsingError;

    fn try_from(raw: &raw::SniffActiveConnCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            access_address: raw.access_address,
            crc_init: raw.crc_init,
            channel_map: optional_map("channel_map", &raw.channel_map)?,
            hop_interval: raw.hop_interval,
            hop_increment: raw.hop_increment,
            monitored_channels: ChannelMap::from_wire(
                "monitored_channels",
                &raw.monitored_channels,
            )?,
        })
    }
}

macro_rules! adv_data_kinds {
    ($($name:ident => $wire:ty),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub scan_data: AdvData,
                pub scanrsp_data: AdvData,
            }

            impl From<&$name> for $wire {
                fn from(msg: &$name) -> Self {
                    Self {
                        scan_data: msg.scan_data.to_vec(),
                        scanrsp_data: msg.scanrsp_data.to_vec(),
                    }
                }
            }

            impl TryFrom<&$wire> for $name {
                type Error = ParsingError;

                fn try_from(raw: &$wire) -> Result<Self, Self::Error> {
                    Ok(Self {
                        scan_data: AdvData::from_field("scan_data", &raw.scan_data)?,
                        scanrsp_data: AdvData::from_field("scanrsp_data", &raw.scanrsp_data)?,
                    })
                }
            }
        )+
    };
}

adv_data_kinds! {
    AdvMode => raw::AdvModeCmd,
    SetAdvData => raw::SetAdvDataCmd,
    PeripheralMode => raw::PeripheralModeCmd,
}

/// Initiates a connection. Connection parameters left absent are chosen by
/// the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectTo {
    pub bd_address: BdAddress,
    pub addr_type: BleAddrType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_address: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_map: Option<ChannelMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hop_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hop_increment: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crc_init: Option<u32>,
}

impl ConnectTo {
    pub const fn new(bd_address: BdAddress, addr_type: BleAddrType) -> Self {
        Self {
            bd_address,
            addr_type,
            access_address: None,
            channel_map: None,
            hop_interval: None,
            hop_increment: None,
            crc_init: None,
        }
    }
}

optional_fields!(ConnectTo {
    access_address: u32 => has_access_address, with_access_address;
    channel_map: ChannelMap => has_channel_map, with_channel_map;
    hop_interval: u32 => has_hop_interval, with_hop_interval;
    hop_increment: u32 => has_hop_increment, with_hop_increment;
    crc_init: u32 => has_crc_init, with_crc_init;
});

impl From<&ConnectTo> for raw::ConnectToCmd {
    fn from(msg: &ConnectTo) -> Self {
        Self {
            bd_address: msg.bd_address.to_wire(),
            addr_type: msg.addr_type.into(),
            access_address: msg.access_address,
            channel_map: msg.channel_map.map(|map| map.bytes().to_vec()),
            hop_interval: msg.hop_interval,
            hop_increment: msg.hop_increment,
            crc_init: msg.crc_init,
        }
    }
}

impl TryFrom<&raw::ConnectToCmd> for ConnectTo {
    type Error = ParsingError;

    fn try_from(raw: &raw::ConnectToCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            bd_address: BdAddress::from_wire("bd_address", &raw.bd_address)?,
            addr_type: enumeration("addr_type", raw.addr_type)?,
            access_address: raw.access_address,
            channel_map: optional_map("channel_map", &raw.channel_map)?,
            hop_interval: raw.hop_interval,
            hop_increment: raw.hop_increment,
            crc_init: raw.crc_init,
        })
    }
}

/// Sends a link-layer PDU with an explicit access address and CRC.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendRawPdu {
    pub direction: BleDirection,
    pub conn_handle: u32,
    pub access_address: u32,
    pub pdu: Pdu,
    pub crc: u32,
    pub encrypt: bool,
}

impl From<&SendRawPdu> for raw::SendRawPduCmd {
    fn from(msg: &SendRawPdu) -> Self {
        Self {
            direction: msg.direction.into(),
            conn_handle: msg.conn_handle,
            access_address: msg.access_address,
            pdu: msg.pdu.to_vec(),
            crc: msg.crc,
            encrypt: msg.encrypt,
        }
    }
}

impl TryFrom<&raw::SendRawPduCmd> for SendRawPdu {
    type Error = ParsingError;

    fn try_from(raw: &raw::SendRawPduCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            direction: enumeration("direction", raw.direction)?,
            conn_handle: raw.conn_handle,
            access_address: raw.access_address,
            pdu: Pdu::from_field("pdu", &raw.pdu)?,
            crc: raw.crc,
            encrypt: raw.encrypt,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendPdu {
    pub direction: BleDirection,
    pub conn_handle: u32,
    pub pdu: Pdu,
    pub encrypt: bool,
}

impl From<&SendPdu> for raw::SendPduCmd {
    fn from(msg: &SendPdu) -> Self {
        Self {
            direction: msg.direction.into(),
            conn_handle: msg.conn_handle,
            pdu: msg.pdu.to_vec(),
            encrypt: msg.encrypt,
        }
    }
}

impl TryFrom<&raw::SendPduCmd> for SendPdu {
    type Error = ParsingError;

    fn try_from(raw: &raw::SendPduCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            direction: enumeration("direction", raw.direction)?,
            conn_handle: raw.conn_handle,
            pdu: Pdu::from_field("pdu", &raw.pdu)?,
            encrypt: raw.encrypt,
        })
    }
}

/// Link-layer encryption material for one connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetEncryption {
    pub conn_handle: u32,
    pub enabled: bool,
    pub ll_key: [u8; 16],
    pub ll_iv: [u8; 8],
    pub key: [u8; 16],
    pub rand: [u8; 8],
    pub ediv: [u8; 2],
}

impl From<&SetEncryption> for raw::SetEncryptionCmd {
    fn from(msg: &SetEncryption) -> Self {
        Self {
            conn_handle: msg.conn_handle,
            enabled: msg.enabled,
            ll_key: msg.ll_key.to_vec(),
            ll_iv: msg.ll_iv.to_vec(),
            key: msg.key.to_vec(),
            rand: msg.rand.to_vec(),
            ediv: msg.ediv.to_vec(),
        }
    }
}

impl TryFrom<&raw::SetEncryptionCmd> for SetEncryption {
    type Error = ParsingError;

    fn try_from(raw: &raw::SetEncryptionCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            conn_handle: raw.conn_handle,
            enabled: raw.enabled,
            ll_key: fixed("ll_key", &raw.ll_key)?,
            ll_iv: fixed("ll_iv", &raw.ll_iv)?,
            key: fixed("key", &raw.key)?,
            rand: fixed("rand", &raw.rand)?,
            ediv: fixed("ediv", &raw.ediv)?,
        })
    }
}

/// What fires a prepared sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceTrigger {
    /// A received packet matches `pattern` under `mask` at `offset`.
    Reception { pattern: Pattern, mask: Pattern, offset: u32 },
    ConnectionEvent { connection_event: u32 },
    Manual,
}

impl From<&SequenceTrigger> for prepare_sequence_cmd::Trigger {
    fn from(trigger: &SequenceTrigger) -> Self {
        match trigger {
            SequenceTrigger::Reception { pattern, mask, offset } => {
                Self::Reception(raw::ReceptionTrigger {
                    pattern: pattern.to_vec(),
                    mask: mask.to_vec(),
                    offset: *offset,
                })
            }
            SequenceTrigger::ConnectionEvent { connection_event } => {
                Self::ConnectionEvent(raw::ConnectionEventTrigger {
                    connection_event: *connection_event,
                })
            }
            SequenceTrigger::Manual => Self::Manual(raw::ManualTrigger {}),
        }
    }
}

impl TryFrom<&prepare_sequence_cmd::Trigger> for SequenceTrigger {
    type Error = ParsingError;

    fn try_from(raw: &prepare_sequence_cmd::Trigger) -> Result<Self, Self::Error> {
        Ok(match raw {
            prepare_sequence_cmd::Trigger::Reception(reception) => SequenceTrigger::Reception {
                pattern: Pattern::from_field("pattern", &reception.pattern)?,
                mask: Pattern::from_field("mask", &reception.mask)?,
                offset: reception.offset,
            },
            prepare_sequence_cmd::Trigger::ConnectionEvent(event) => {
                SequenceTrigger::ConnectionEvent { connection_event: event.connection_event }
            }
            prepare_sequence_cmd::Trigger::Manual(_) => SequenceTrigger::Manual,
        })
    }
}

/// Stores a sequence of PDUs to send when `trigger` fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrepareSequence {
    pub id: u32,
    pub direction: BleDirection,
    pub trigger: SequenceTrigger,
    pub sequence: Vec<Pdu>,
}

impl From<&PrepareSequence> for raw::PrepareSequenceCmd {
    fn from(msg: &PrepareSequence) -> Self {
        Self {
            trigger: Some((&msg.trigger).into()),
            id: msg.id,
            direction: msg.direction.into(),
            sequence: msg.sequence.iter().map(Pdu::to_vec).collect(),
        }
    }
}

impl TryFrom<&raw::PrepareSequenceCmd> for PrepareSequence {
    type Error = ParsingError;

    fn try_from(raw: &raw::PrepareSequenceCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            direction: enumeration("direction", raw.direction)?,
            trigger: SequenceTrigger::try_from(required("trigger", &raw.trigger)?)?,
            sequence: raw
                .sequence
                .iter()
                .map(|pdu| Pdu::from_field("sequence", pdu))
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessAddressDiscovered {
    pub access_address: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u32>,
}

optional_fields!(AccessAddressDiscovered {
    rssi: i32 => has_rssi, with_rssi;
    timestamp: u32 => has_timestamp, with_timestamp;
});

impl From<&AccessAddressDiscovered> for raw::AccessAddressDiscovered {
    fn from(msg: &AccessAddressDiscovered) -> Self {
        Self { access_address: msg.access_address, rssi: msg.rssi, timestamp: msg.timestamp }
    }
}

impl TryFrom<&raw::AccessAddressDiscovered> for AccessAddressDiscovered {
    type Error = ParsingError;

    fn try_from(raw: &raw::AccessAddressDiscovered) -> Result<Self, Self::Error> {
        Ok(Self { access_address: raw.access_address, rssi: raw.rssi, timestamp: raw.timestamp })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvPduReceived {
    pub adv_type: BleAdvType,
    pub rssi: i32,
    pub bd_address: BdAddress,
    pub adv_data: AdvData,
    pub addr_type: BleAddrType,
}

impl From<&AdvPduReceived> for raw::AdvPduReceived {
    fn from(msg: &AdvPduReceived) -> Self {
        Self {
            adv_type: msg.adv_type.into(),
            rssi: msg.rssi,
            bd_address: msg.bd_address.to_wire(),
            adv_data: msg.adv_data.to_vec(),
            addr_type: msg.addr_type.into(),
        }
    }
}

impl TryFrom<&raw::AdvPduReceived> for AdvPduReceived {
    type Error = ParsingError;

    fn try_from(raw: &raw::AdvPduReceived) -> Result<Self, Self::Error> {
        Ok(Self {
            adv_type: enumeration("adv_type", raw.adv_type)?,
            rssi: raw.rssi,
            bd_address: BdAddress::from_wire("bd_address", &raw.bd_address)?,
            adv_data: AdvData::from_field("adv_data", &raw.adv_data)?,
            addr_type: enumeration("addr_type", raw.addr_type)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connected {
    pub initiator: BdAddress,
    pub advertiser: BdAddress,
    pub access_address: u32,
    pub conn_handle: u32,
    pub adv_addr_type: BleAddrType,
    pub init_addr_type: BleAddrType,
}

impl From<&Connected> for raw::Connected {
    fn from(msg: &Connected) -> Self {
        Self {
            initiator: msg.initiator.to_wire(),
            advertiser: msg.advertiser.to_wire(),
            access_address: msg.access_address,
            conn_handle: msg.conn_handle,
            adv_addr_type: msg.adv_addr_type.into(),
            init_addr_type: msg.init_addr_type.into(),
        }
    }
}

impl TryFrom<&raw::Connected> for Connected {
    type Error = ParsingError;

    fn try_from(raw: &raw::Connected) -> Result<Self, Self::Error> {
        Ok(Self {
            initiator: BdAddress::from_wire("initiator", &raw.initiator)?,
            advertiser: BdAddress::from_wire("advertiser", &raw.advertiser)?,
            access_address: raw.access_address,
            conn_handle: raw.conn_handle,
            adv_addr_type: enumeration("adv_addr_type", raw.adv_addr_type)?,
            init_addr_type: enumeration("init_addr_type", raw.init_addr_type)?,
        })
    }
}

/// The adapter locked onto an existing connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Synchronized {
    pub access_address: u32,
    pub crc_init: u32,
    pub hop_interval: u32,
    pub hop_increment: u32,
    pub channel_map: ChannelMap,
}

impl From<&Synchronized> for raw::Synchronized {
    fn from(msg: &Synchronized) -> Self {
        Self {
            access_address: msg.access_address,
            crc_init: msg.crc_init,
            hop_interval: msg.hop_interval,
            hop_increment: msg.hop_increment,
            channel_map: msg.channel_map.bytes().to_vec(),
        }
    }
}

impl TryFrom<&raw::Synchronized> for Synchronized {
    type Error = ParsingError;

    fn try_from(raw: &raw::Synchronized) -> Result<Self, Self::Error> {
        Ok(Self {
            access_address: raw.access_address,
            crc_init: raw.crc_init,
            hop_interval: raw.hop_interval,
            hop_increment: raw.hop_increment,
            channel_map: ChannelMap::from_wire("channel_map", &raw.channel_map)?,
        })
    }
}

/// A link-layer packet as captured, with its CRC and capture metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawPduReceived {
    pub direction: BleDirection,
    pub channel: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_timestamp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crc_validity: Option<bool>,
    pub access_address: u32,
    pub pdu: Pdu,
    pub crc: u32,
    pub conn_handle: u32,
    pub processed: bool,
    pub decrypted: bool,
}

optional_fields!(RawPduReceived {
    rssi: i32 => has_rssi, with_rssi;
    timestamp: u32 => has_timestamp, with_timestamp;
    relative_timestamp: u32 => has_relative_timestamp, with_relative_timestamp;
    crc_validity: bool => has_crc_validity, with_crc_validity;
});

impl From<&RawPduReceived> for raw::RawPduReceived {
    fn from(msg: &RawPduReceived) -> Self {
        Self {
            direction: msg.direction.into(),
            channel: msg.channel,
            rssi: msg.rssi,
            timestamp: msg.timestamp,
            relative_timestamp: msg.relative_timestamp,
            crc_validity: msg.crc_validity,
            access_address: msg.access_address,
            pdu: msg.pdu.to_vec(),
            crc: msg.crc,
            conn_handle: msg.conn_handle,
            processed: msg.processed,
            decrypted: msg.decrypted,
        }
    }
}

impl TryFrom<&raw::RawPduReceived> for RawPduReceived {
    type Error = ParsingError;

    fn try_from(raw: &raw::RawPduReceived) -> Result<Self, Self::Error> {
        Ok(Self {
            direction: enumeration("direction", raw.direction)?,
            channel: raw.channel,
            rssi: raw.rssi,
            timestamp: raw.timestamp,
            relative_timestamp: raw.relative_timestamp,
            crc_validity: raw.crc_validity,
            access_address: raw.access_address,
            pdu: Pdu::from_field("pdu", &raw.pdu)?,
            crc: raw.crc,
            conn_handle: raw.conn_handle,
            processed: raw.processed,
            decrypted: raw.decrypted,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PduReceived {
    pub direction: BleDirection,
    pub pdu: Pdu,
    pub conn_handle: u32,
    pub processed: bool,
    pub decrypted: bool,
}

impl From<&PduReceived> for raw::PduReceived {
    fn from(msg: &PduReceived) -> Self {
        Self {
            direction: msg.direction.into(),
            pdu: msg.pdu.to_vec(),
            conn_handle: msg.conn_handle,
            processed: msg.processed,
            decrypted: msg.decrypted,
        }
    }
}

impl TryFrom<&raw::PduReceived> for PduReceived {
    type Error = ParsingError;

    fn try_from(raw: &raw::PduReceived) -> Result<Self, Self::Error> {
        Ok(Self {
            direction: enumeration("direction", raw.direction)?,
            pdu: Pdu::from_field("pdu", &raw.pdu)?,
            conn_handle: raw.conn_handle,
            processed: raw.processed,
            decrypted: raw.decrypted,
        })
    }
}
