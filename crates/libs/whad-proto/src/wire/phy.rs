use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Endianness {
    Big = 0,
    Little = 1,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum TxPower {
    Low = 0,
    Medium = 1,
    High = 2,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum JammingMode {
    Continuous = 0,
    Reactive = 1,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum LoRaSpreadingFactor {
    Sf7 = 0,
    Sf8 = 1,
    Sf9 = 2,
    Sf10 = 3,
    Sf11 = 4,
    Sf12 = 5,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum LoRaCodingRate {
    Cr45 = 0,
    Cr46 = 1,
    Cr47 = 2,
    Cr48 = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetAskModulationCmd {
    #[prost(bool, tag = "1")]
    pub on_off_keying: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetFskModulationCmd {
    #[prost(uint32, tag = "1")]
    pub deviation: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetGfskModulationCmd {
    #[prost(uint32, tag = "1")]
    pub deviation: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetBpskModulationCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetQpskModulationCmd {
    #[prost(bool, tag = "1")]
    pub offset_qpsk: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetLoRaModulationCmd {
    #[prost(uint32, tag = "1")]
    pub bandwidth: u32,
    #[prost(enumeration = "LoRaSpreadingFactor", tag = "2")]
    pub spreading_factor: i32,
    #[prost(enumeration = "LoRaCodingRate", tag = "3")]
    pub coding_rate: i32,
    #[prost(uint32, tag = "4")]
    pub preamble_length: u32,
    #[prost(bool, tag = "5")]
    pub enable_crc: bool,
    #[prost(bool, tag = "6")]
    pub explicit_mode: bool,
    #[prost(bool, tag = "7")]
    pub invert_iq: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSupportedFrequenciesCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetFrequencyCmd {
    #[prost(uint64, tag = "1")]
    pub frequency: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetDataRateCmd {
    #[prost(uint32, tag = "1")]
    pub rate: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetEndiannessCmd {
    #[prost(enumeration = "Endianness", tag = "1")]
    pub endianness: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetTxPowerCmd {
    #[prost(enumeration = "TxPower", tag = "1")]
    pub tx_power: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetPacketSizeCmd {
    #[prost(uint32, tag = "1")]
    pub packet_size: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetSyncWordCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub sync_word: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffCmd {
    #[prost(bool, tag = "1")]
    pub iq_stream: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub packet: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JamCmd {
    #[prost(enumeration = "JammingMode", tag = "1")]
    pub mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MonitorCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrequencyRange {
    #[prost(uint64, tag = "1")]
    pub start: u64,
    #[prost(uint64, tag = "2")]
    pub end: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SupportedFrequencyRanges {
    #[prost(message, repeated, tag = "1")]
    pub frequency_ranges: Vec<FrequencyRange>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Timestamp {
    #[prost(uint32, tag = "1")]
    pub sec: u32,
    #[prost(uint32, tag = "2")]
    pub usec: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PacketReceived {
    #[prost(uint64, tag = "1")]
    pub frequency: u64,
    #[prost(int32, optional, tag = "2")]
    pub rssi: Option<i32>,
    #[prost(message, optional, tag = "3")]
    pub timestamp: Option<Timestamp>,
    #[prost(bytes = "vec", tag = "4")]
    pub packet: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Jammed {
    #[prost(message, optional, tag = "1")]
    pub timestamp: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MonitoringReport {
    #[prost(message, optional, tag = "1")]
    pub timestamp: Option<Timestamp>,
    #[prost(uint32, repeated, tag = "2")]
    pub report: Vec<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(
        oneof = "message::Msg",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23"
    )]
    pub msg: Option<message::Msg>,
}

pub mod message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        SetAskModulation(super::SetAskModulationCmd),
        #[prost(message, tag = "2")]
        SetFskModulation(super::SetFskModulationCmd),
        #[prost(message, tag = "3")]
        SetGfskModulation(super::SetGfskModulationCmd),
        #[prost(message, tag = "4")]
        SetBpskModulation(super::SetBpskModulationCmd),
        #[prost(message, tag = "5")]
        SetQpskModulation(super::SetQpskModulationCmd),
        #[prost(message, tag = "6")]
        SetLoRaModulation(super::SetLoRaModulationCmd),
        #[prost(message, tag = "7")]
        GetSupportedFrequencies(super::GetSupportedFrequenciesCmd),
        #[prost(message, tag = "8")]
        SetFrequency(super::SetFrequencyCmd),
        #[prost(message, tag = "9")]
        SetDataRate(super::SetDataRateCmd),
        #[prost(message, tag = "10")]
        SetEndianness(super::SetEndiannessCmd),
        #[prost(message, tag = "11")]
        SetTxPower(super::SetTxPowerCmd),
        #[prost(message, tag = "12")]
        SetPacketSize(super::SetPacketSizeCmd),
        #[prost(message, tag = "13")]
        SetSyncWord(super::SetSyncWordCmd),
        #[prost(message, tag = "14")]
        SniffMode(super::SniffCmd),
        #[prost(message, tag = "15")]
        SendPacket(super::SendCmd),
        #[prost(message, tag = "16")]
        JamMode(super::JamCmd),
        #[prost(message, tag = "17")]
        MonitorMode(super::MonitorCmd),
        #[prost(message, tag = "18")]
        Start(super::StartCmd),
        #[prost(message, tag = "19")]
        Stop(super::StopCmd),
        #[prost(message, tag = "20")]
        SupportedFrequencyRanges(super::SupportedFrequencyRanges),
        #[prost(message, tag = "21")]
        PacketReceived(super::PacketReceived),
        #[prost(message, tag = "22")]
        Jammed(super::Jammed),
        #[prost(message, tag = "23")]
        MonitoringReport(super::MonitoringReport),
    }
}
