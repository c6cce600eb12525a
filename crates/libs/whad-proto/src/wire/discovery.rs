use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum DeviceType {
    Butterfly = 0,
    BtleJack = 1,
    Ubertooth = 2,
    Yardstick = 3,
    HciDevice = 4,
    ApiMote = 5,
    RfStorm = 6,
    Virtual = 7,
}

/// Radio domains a device can advertise. Values occupy the top byte of a
/// capability word.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum RadioDomain {
    Unspecified = 0,
    Phy = 0x0100_0000,
    BtClassic = 0x0200_0000,
    BtLe = 0x0300_0000,
    Zigbee = 0x0400_0000,
    SixLowPan = 0x0500_0000,
    Esb = 0x0600_0000,
    LogitechUnifying = 0x0700_0000,
    Mosart = 0x0800_0000,
    Ant = 0x0900_0000,
    AntPlus = 0x0a00_0000,
    AntFs = 0x0b00_0000,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceInfoQuery {
    #[prost(uint32, tag = "1")]
    pub proto_ver: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceInfoResp {
    #[prost(enumeration = "DeviceType", tag = "1")]
    pub device_type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub devid: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub proto_min_ver: u32,
    #[prost(uint32, tag = "4")]
    pub max_speed: u32,
    #[prost(bytes = "vec", tag = "5")]
    pub fw_author: Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub fw_url: Vec<u8>,
    #[prost(uint32, tag = "7")]
    pub fw_version_major: u32,
    #[prost(uint32, tag = "8")]
    pub fw_version_minor: u32,
    #[prost(uint32, tag = "9")]
    pub fw_version_rev: u32,
    #[prost(uint32, repeated, tag = "10")]
    pub capabilities: Vec<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceResetQuery {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceReadyResp {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceDomainInfoQuery {
    #[prost(enumeration = "RadioDomain", tag = "1")]
    pub domain: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceDomainInfoResp {
    #[prost(enumeration = "RadioDomain", tag = "1")]
    pub domain: i32,
    #[prost(uint64, tag = "2")]
    pub supported_commands: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetTransportSpeed {
    #[prost(uint32, tag = "1")]
    pub speed: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(oneof = "message::Msg", tags = "1, 2, 3, 4, 5, 6, 7")]
    pub msg: Option<message::Msg>,
}

pub mod message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        InfoQuery(super::DeviceInfoQuery),
        #[prost(message, tag = "2")]
        InfoResp(super::DeviceInfoResp),
        #[prost(message, tag = "3")]
        ResetQuery(super::DeviceResetQuery),
        #[prost(message, tag = "4")]
        ReadyResp(super::DeviceReadyResp),
        #[prost(message, tag = "5")]
        DomainQuery(super::DeviceDomainInfoQuery),
        #[prost(message, tag = "6")]
        DomainResp(super::DeviceDomainInfoResp),
        #[prost(message, tag = "7")]
        SetSpeed(super::SetTransportSpeed),
    }
}
