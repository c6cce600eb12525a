use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum AddressType {
    Short = 0,
    Extended = 1,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum MitmRole {
    ReactiveJammer = 0,
    Correlator = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNodeAddressCmd {
    #[prost(uint64, tag = "1")]
    pub address: u64,
    #[prost(enumeration = "AddressType", tag = "2")]
    pub address_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JamCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnergyDetectionCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EndDeviceCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouterCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoordinatorCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub pdu: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendRawCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub pdu: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub fcs: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManInTheMiddleCmd {
    #[prost(enumeration = "MitmRole", tag = "1")]
    pub role: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawPduReceived {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(int32, optional, tag = "2")]
    pub rssi: Option<i32>,
    #[prost(uint32, optional, tag = "3")]
    pub timestamp: Option<u32>,
    #[prost(bool, optional, tag = "4")]
    pub fcs_validity: Option<bool>,
    #[prost(bytes = "vec", tag = "5")]
    pub pdu: Vec<u8>,
    #[prost(uint32, tag = "6")]
    pub fcs: u32,
    #[prost(uint32, optional, tag = "7")]
    pub lqi: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PduReceived {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(int32, optional, tag = "2")]
    pub rssi: Option<i32>,
    #[prost(uint32, optional, tag = "3")]
    pub timestamp: Option<u32>,
    #[prost(bool, optional, tag = "4")]
    pub fcs_validity: Option<bool>,
    #[prost(bytes = "vec", tag = "5")]
    pub pdu: Vec<u8>,
    #[prost(uint32, optional, tag = "6")]
    pub lqi: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnergyDetectionSample {
    #[prost(uint32, tag = "1")]
    pub timestamp: u32,
    #[prost(uint32, tag = "2")]
    pub sample: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Jammed {
    #[prost(uint32, tag = "1")]
    pub timestamp: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(oneof = "message::Msg", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16")]
    pub msg: Option<message::Msg>,
}

pub mod message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        SetNodeAddress(super::SetNodeAddressCmd),
        #[prost(message, tag = "2")]
        SniffMode(super::SniffCmd),
        #[prost(message, tag = "3")]
        JamMode(super::JamCmd),
        #[prost(message, tag = "4")]
        EnergyDetectionMode(super::EnergyDetectionCmd),
        #[prost(message, tag = "5")]
        EndDeviceMode(super::EndDeviceCmd),
        #[prost(message, tag = "6")]
        RouterMode(super::RouterCmd),
        #[prost(message, tag = "7")]
        CoordinatorMode(super::CoordinatorCmd),
        #[prost(message, tag = "8")]
        Start(super::StartCmd),
        #[prost(message, tag = "9")]
        Stop(super::StopCmd),
        #[prost(message, tag = "10")]
        SendPdu(super::SendCmd),
        #[prost(message, tag = "11")]
        SendRawPdu(super::SendRawCmd),
        #[prost(message, tag = "12")]
        ManInTheMiddleMode(super::ManInTheMiddleCmd),
        #[prost(message, tag = "13")]
        RawPduReceived(super::RawPduReceived),
        #[prost(message, tag = "14")]
        PduReceived(super::PduReceived),
        #[prost(message, tag = "15")]
        EnergyDetectionSample(super::EnergyDetectionSample),
        #[prost(message, tag = "16")]
        Jammed(super::Jammed),
    }
}
