//! Raw physical layer: modulation setup, packet I/O and spectrum monitoring.

use serde::{Deserialize, Serialize};

use crate::error::ParsingError;
use crate::field::{enumeration, required};
use crate::payload::{BoundedPayload, Pdu};
use crate::wire::phy::{self as raw, message::Msg as PhyWire};

pub use crate::wire::phy::{Endianness, JammingMode, LoRaCodingRate, LoRaSpreadingFactor, TxPower};

/// Maximum sync word length.
pub const MAX_SYNC_WORD_LEN: usize = 10;

pub type SyncWord = BoundedPayload<MAX_SYNC_WORD_LEN>;

domain_messages! {
    domain: Phy,
    message: PhyMessage,
    kind: PhyKind,
    wire: PhyWire,
    kinds: {
        SetAskModulation = 1,
        SetFskModulation = 2,
        SetGfskModulation = 3,
        SetBpskModulation = 4,
        SetQpskModulation = 5,
        SetLoRaModulation = 6,
        GetSupportedFrequencies = 7,
        SetFrequency = 8,
        SetDataRate = 9,
        SetEndianness = 10,
        SetTxPower = 11,
        SetPacketSize = 12,
        SetSyncWord = 13,
        SniffMode = 14,
        SendPacket = 15,
        JamMode = 16,
        MonitorMode = 17,
        Start = 18,
        Stop = 19,
        SupportedFrequencyRanges = 20,
        PacketReceived = 21,
        Jammed = 22,
        MonitoringReport = 23,
    }
}

plain_kinds! {
    SetAskModulation => raw::SetAskModulationCmd { on_off_keying: bool }
    /// Frequency deviation in Hz.
    SetFskModulation => raw::SetFskModulationCmd { deviation: u32 }
    SetGfskModulation => raw::SetGfskModulationCmd { deviation: u32 }
    SetBpskModulation => raw::SetBpskModulationCmd {}
    SetQpskModulation => raw::SetQpskModulationCmd { offset_qpsk: bool }
    GetSupportedFrequencies => raw::GetSupportedFrequenciesCmd {}
    /// Center frequency in Hz.
    SetFrequency => raw::SetFrequencyCmd { frequency: u64 }
    /// Symbol rate in bauds.
    SetDataRate => raw::SetDataRateCmd { rate: u32 }
    SetPacketSize => raw::SetPacketSizeCmd { packet_size: u32 }
    SniffMode => raw::SniffCmd { iq_stream: bool }
    MonitorMode => raw::MonitorCmd {}
    Start => raw::StartCmd {}
    Stop => raw::StopCmd {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetLoRaModulation {
    pub bandwidth: u32,
    pub spreading_factor: LoRaSpreadingFactor,
    pub coding_rate: LoRaCodingRate,
    pub preamble_length: u32,
    pub enable_crc: bool,
    pub explicit_mode: bool,
    pub invert_iq: bool,
}

impl From<&SetLoRaModulation> for raw::SetLoRaModulationCmd {
    fn from(msg: &SetLoRaModulation) -> Self {
        Self {
            bandwidth: msg.bandwidth,
            spreading_factor: msg.spreading_factor.into(),
            coding_rate: msg.coding_rate.into(),
            preamble_length: msg.preamble_length,
            enable_crc: msg.enable_crc,
            explicit_mode: msg.explicit_mode,
            invert_iq: msg.invert_iq,
        }
    }
}

impl TryFrom<&raw::SetLoRaModulationCmd> for SetLoRaModulation {
    type Error = ParsingError;

    fn try_from(raw: &raw::SetLoRaModulationCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            bandwidth: raw.bandwidth,
            spreading_factor: enumeration("spreading_factor", raw.spreading_factor)?,
            coding_rate: enumeration("coding_rate", raw.coding_rate)?,
            preamble_length: raw.preamble_length,
            enable_crc: raw.enable_crc,
            explicit_mode: raw.explicit_mode,
            invert_iq: raw.invert_iq,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetEndianness {
    pub endianness: Endianness,
}

impl From<&SetEndianness> for raw::SetEndiannessCmd {
    fn from(msg: &SetEndianness) -> Self {
        Self { endianness: msg.endianness.into() }
    }
}

impl TryFrom<&raw::SetEndiannessCmd> for SetEndianness {
    type Error = ParsingError;

    fn try_from(raw: &raw::SetEndiannessCmd) -> Result<Self, Self::Error> {
        Ok(Self { endianness: enumeration("endianness", raw.endianness)? })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetTxPower {
    pub tx_power: TxPower,
}

impl From<&SetTxPower> for raw::SetTxPowerCmd {
    fn from(msg: &SetTxPower) -> Self {
        Self { tx_power: msg.tx_power.into() }
    }
}

impl TryFrom<&raw::SetTxPowerCmd> for SetTxPower {
    type Error = ParsingError;

    fn try_from(raw: &raw::SetTxPowerCmd) -> Result<Self, Self::Error> {
        Ok(Self { tx_power: enumeration("tx_power", raw.tx_power)? })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetSyncWord {
    pub sync_word: SyncWord,
}

impl From<&SetSyncWord> for raw::SetSyncWordCmd {
    fn from(msg: &SetSyncWord) -> Self {
        Self { sync_word: msg.sync_word.to_vec() }
    }
}

impl TryFrom<&raw::SetSyncWordCmd> for SetSyncWord {
    type Error = ParsingError;

    fn try_from(raw: &raw::SetSyncWordCmd) -> Result<Self, Self::Error> {
        Ok(Self { sync_word: SyncWord::from_field("sync_word", &raw.sync_word)? })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendPacket {
    pub packet: Pdu,
}

impl From<&SendPacket> for raw::SendCmd {
    fn from(msg: &SendPacket) -> Self {
        Self { packet: msg.packet.to_vec() }
    }
}

impl TryFrom<&raw::SendCmd> for SendPacket {
    type Error = ParsingError;

    fn try_from(raw: &raw::SendCmd) -> Result<Self, Self::Error> {
        Ok(Self { packet: Pdu::from_field("packet", &raw.packet)? })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JamMode {
    pub mode: JammingMode,
}

impl From<&JamMode> for raw::JamCmd {
    fn from(msg: &JamMode) -> Self {
        Self { mode: msg.mode.into() }
    }
}

impl TryFrom<&raw::JamCmd> for JamMode {
    type Error = ParsingError;

    fn try_from(raw: &raw::JamCmd) -> Result<Self, Self::Error> {
        Ok(Self { mode: enumeration("mode", raw.mode)? })
    }
}

/// Inclusive frequency range in Hz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyRange {
    pub start: u64,
    pub end: u64,
}

impl FrequencyRange {
    pub fn contains(&self, frequency: u64) -> bool {
        (self.start..=self.end).contains(&frequency)
    }
}

impl From<&raw::FrequencyRange> for FrequencyRange {
    fn from(raw: &raw::FrequencyRange) -> Self {
        Self { start: raw.start, end: raw.end }
    }
}

impl From<&FrequencyRange> for raw::FrequencyRange {
    fn from(range: &FrequencyRange) -> Self {
        Self { start: range.start, end: range.end }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportedFrequencyRanges {
    pub frequency_ranges: Vec<FrequencyRange>,
}

impl SupportedFrequencyRanges {
    pub fn supports(&self, frequency: u64) -> bool {
        self.frequency_ranges.iter().any(|range| range.contains(frequency))
    }
}

impl From<&SupportedFrequencyRanges> for raw::SupportedFrequencyRanges {
    fn from(msg: &SupportedFrequencyRanges) -> Self {
        Self { frequency_ranges: msg.frequency_ranges.iter().map(Into::into).collect() }
    }
}

impl TryFrom<&raw::SupportedFrequencyRanges> for SupportedFrequencyRanges {
    type Error = ParsingError;

    fn try_from(raw: &raw::SupportedFrequencyRanges) -> Result<Self, Self::Error> {
        Ok(Self { frequency_ranges: raw.frequency_ranges.iter().map(Into::into).collect() })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    pub sec: u32,
    pub usec: u32,
}

impl From<&raw::Timestamp> for Timestamp {
    fn from(raw: &raw::Timestamp) -> Self {
        Self { sec: raw.sec, usec: raw.usec }
    }
}

impl From<Timestamp> for raw::Timestamp {
    fn from(ts: Timestamp) -> Self {
        Self { sec: ts.sec, usec: ts.usec }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PacketReceived {
    pub frequency: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    pub packet: Pdu,
}

optional_fields!(PacketReceived {
    rssi: i32 => has_rssi, with_rssi;
    timestamp: Timestamp => has_timestamp, with_timestamp;
});

impl From<&PacketReceived> for raw::PacketReceived {
    fn from(msg: &PacketReceived) -> Self {
        Self {
            frequency: msg.frequency,
            rssi: msg.rssi,
            timestamp: msg.timestamp.map(Into::into),
            packet: msg.packet.to_vec(),
        }
    }
}

impl TryFrom<&raw::PacketReceived> for PacketReceived {
    type Error = ParsingError;

    fn try_from(raw: &raw::PacketReceived) -> Result<Self, Self::Error> {
        Ok(Self {
            frequency: raw.frequency,
            rssi: raw.rssi,
            timestamp: raw.timestamp.as_ref().map(Into::into),
            packet: Pdu::from_field("packet", &raw.packet)?,
        })
    }
}

/// Reported once the jammer fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jammed {
    pub timestamp: Timestamp,
}

impl From<&Jammed> for raw::Jammed {
    fn from(msg: &Jammed) -> Self {
        Self { timestamp: Some(msg.timestamp.into()) }
    }
}

impl TryFrom<&raw::Jammed> for Jammed {
    type Error = ParsingError;

    fn try_from(raw: &raw::Jammed) -> Result<Self, Self::Error> {
        Ok(Self { timestamp: required("timestamp", &raw.timestamp)?.into() })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonitoringReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    pub report: Vec<u32>,
}

optional_fields!(MonitoringReport {
    timestamp: Timestamp => has_timestamp, with_timestamp;
});

impl From<&MonitoringReport> for raw::MonitoringReport {
    fn from(msg: &MonitoringReport) -> Self {
        Self { timestamp: msg.timestamp.map(Into::into), report: msg.report.clone() }
    }
}

impl TryFrom<&raw::MonitoringReport> for MonitoringReport {
    type Error = ParsingError;

    fn try_from(raw: &raw::MonitoringReport) -> Result<Self, Self::Error> {
        Ok(Self { timestamp: raw.timestamp.as_ref().map(Into::into), report: raw.report.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::TypedMessage;

    #[test]
    fn lora_settings_survive_envelope() {
        let msg = SetLoRaModulation {
            bandwidth: 125_000,
            spreading_factor: LoRaSpreadingFactor::Sf9,
            coding_rate: LoRaCodingRate::Cr45,
            preamble_length: 8,
            enable_crc: true,
            explicit_mode: true,
            invert_iq: false,
        };
        assert_eq!(SetLoRaModulation::decode(&msg.encode()), Ok(msg));
    }

    #[test]
    fn sync_word_bound() {
        let raw = raw::SetSyncWordCmd { sync_word: vec![0xaa; 11] };
        assert!(matches!(
            SetSyncWord::try_from(&raw),
            Err(ParsingError::Bound { field: "sync_word", .. })
        ));
    }

    #[test]
    fn jammed_requires_timestamp() {
        assert_eq!(
            Jammed::try_from(&raw::Jammed { timestamp: None }),
            Err(ParsingError::MissingField("timestamp"))
        );
    }

    #[test]
    fn packet_timestamp_presence() {
        let msg = PacketReceived { frequency: 868_100_000, ..Default::default() }
            .with_timestamp(Timestamp { sec: 0, usec: 0 });
        let decoded = PacketReceived::decode(&msg.encode()).expect("packet received");
        assert!(decoded.has_timestamp());
        assert!(!decoded.has_rssi());
        assert_eq!(decoded, msg);
    }

    #[test]
    fn frequency_ranges() {
        let msg = SupportedFrequencyRanges {
            frequency_ranges: vec![
                FrequencyRange { start: 433_050_000, end: 434_790_000 },
                FrequencyRange { start: 863_000_000, end: 870_000_000 },
            ],
        };
        let decoded = SupportedFrequencyRanges::decode(&msg.encode()).expect("ranges");
        assert!(decoded.supports(868_000_000));
        assert!(!decoded.supports(915_000_000));
        assert_eq!(decoded, msg);
    }
}
