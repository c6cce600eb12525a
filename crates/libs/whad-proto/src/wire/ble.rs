use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum BleAddrType {
    Public = 0,
    Random = 1,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum BleDirection {
    Unknown = 0,
    MasterToSlave = 1,
    SlaveToMaster = 2,
    InjectionToSlave = 3,
    InjectionToMaster = 4,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum BleAdvType {
    Unknown = 0,
    AdvInd = 1,
    AdvDirectInd = 2,
    AdvNonconnInd = 3,
    AdvScanInd = 4,
    AdvScanRsp = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetBdAddressCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub bd_address: Vec<u8>,
    #[prost(enumeration = "BleAddrType", tag = "2")]
    pub addr_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffAdvCmd {
    #[prost(bool, tag = "1")]
    pub use_extended_adv: bool,
    #[prost(uint32, tag = "2")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub bd_address: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JamAdvCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JamAdvOnChannelCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReactiveJamCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub pattern: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub position: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffConnReqCmd {
    #[prost(bool, tag = "1")]
    pub show_empty_packets: bool,
    #[prost(bool, tag = "2")]
    pub show_advertisements: bool,
    #[prost(uint32, tag = "3")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "4")]
    pub bd_address: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffAccessAddressCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub monitored_channels: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffActiveConnCmd {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
    #[prost(uint32, optional, tag = "2")]
    pub crc_init: Option<u32>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub channel_map: Option<Vec<u8>>,
    #[prost(uint32, optional, tag = "4")]
    pub hop_interval: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub hop_increment: Option<u32>,
    #[prost(bytes = "vec", tag = "6")]
    pub monitored_channels: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JamConnCmd {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScanModeCmd {
    #[prost(bool, tag = "1")]
    pub active_scan: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AdvModeCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub scan_data: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub scanrsp_data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetAdvDataCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub scan_data: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub scanrsp_data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CentralModeCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectToCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub bd_address: Vec<u8>,
    #[prost(enumeration = "BleAddrType", tag = "2")]
    pub addr_type: i32,
    #[prost(uint32, optional, tag = "3")]
    pub access_address: Option<u32>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub channel_map: Option<Vec<u8>>,
    #[prost(uint32, optional, tag = "5")]
    pub hop_interval: Option<u32>,
    #[prost(uint32, optional, tag = "6")]
    pub hop_increment: Option<u32>,
    #[prost(uint32, optional, tag = "7")]
    pub crc_init: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendRawPduCmd {
    #[prost(enumeration = "BleDirection", tag = "1")]
    pub direction: i32,
    #[prost(uint32, tag = "2")]
    pub conn_handle: u32,
    #[prost(uint32, tag = "3")]
    pub access_address: u32,
    #[prost(bytes = "vec", tag = "4")]
    pub pdu: Vec<u8>,
    #[prost(uint32, tag = "5")]
    pub crc: u32,
    #[prost(bool, tag = "6")]
    pub encrypt: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendPduCmd {
    #[prost(enumeration = "BleDirection", tag = "1")]
    pub direction: i32,
    #[prost(uint32, tag = "2")]
    pub conn_handle: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub pdu: Vec<u8>,
    #[prost(bool, tag = "4")]
    pub encrypt: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DisconnectCmd {
    #[prost(uint32, tag = "1")]
    pub conn_handle: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeripheralModeCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub scan_data: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub scanrsp_data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HijackMasterCmd {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HijackSlaveCmd {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HijackBothCmd {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetEncryptionCmd {
    #[prost(uint32, tag = "1")]
    pub conn_handle: u32,
    #[prost(bool, tag = "2")]
    pub enabled: bool,
    #[prost(bytes = "vec", tag = "3")]
    pub ll_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub ll_iv: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub rand: Vec<u8>,
    #[prost(bytes = "vec", tag = "7")]
    pub ediv: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReceptionTrigger {
    #[prost(bytes = "vec", tag = "1")]
    pub pattern: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub mask: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub offset: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectionEventTrigger {
    #[prost(uint32, tag = "1")]
    pub connection_event: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManualTrigger {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PrepareSequenceCmd {
    #[prost(oneof = "prepare_sequence_cmd::Trigger", tags = "1, 2, 3")]
    pub trigger: Option<prepare_sequence_cmd::Trigger>,
    #[prost(uint32, tag = "4")]
    pub id: u32,
    #[prost(enumeration = "BleDirection", tag = "5")]
    pub direction: i32,
    #[prost(bytes = "vec", repeated, tag = "6")]
    pub sequence: Vec<Vec<u8>>,
}

pub mod prepare_sequence_cmd {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Trigger {
        #[prost(message, tag = "1")]
        Reception(super::ReceptionTrigger),
        #[prost(message, tag = "2")]
        ConnectionEvent(super::ConnectionEventTrigger),
        #[prost(message, tag = "3")]
        Manual(super::ManualTrigger),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TriggerCmd {
    #[prost(uint32, tag = "1")]
    pub id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSequenceCmd {
    #[prost(uint32, tag = "1")]
    pub id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessAddressDiscovered {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
    #[prost(int32, optional, tag = "2")]
    pub rssi: Option<i32>,
    #[prost(uint32, optional, tag = "3")]
    pub timestamp: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AdvPduReceived {
    #[prost(enumeration = "BleAdvType", tag = "1")]
    pub adv_type: i32,
    #[prost(int32, tag = "2")]
    pub rssi: i32,
    #[prost(bytes = "vec", tag = "3")]
    pub bd_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub adv_data: Vec<u8>,
    #[prost(enumeration = "BleAddrType", tag = "5")]
    pub addr_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Connected {
    #[prost(bytes = "vec", tag = "1")]
    pub initiator: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub advertiser: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub access_address: u32,
    #[prost(uint32, tag = "4")]
    pub conn_handle: u32,
    #[prost(enumeration = "BleAddrType", tag = "5")]
    pub adv_addr_type: i32,
    #[prost(enumeration = "BleAddrType", tag = "6")]
    pub init_addr_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Disconnected {
    #[prost(uint32, tag = "1")]
    pub reason: u32,
    #[prost(uint32, tag = "2")]
    pub conn_handle: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Synchronized {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
    #[prost(uint32, tag = "2")]
    pub crc_init: u32,
    #[prost(uint32, tag = "3")]
    pub hop_interval: u32,
    #[prost(uint32, tag = "4")]
    pub hop_increment: u32,
    #[prost(bytes = "vec", tag = "5")]
    pub channel_map: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Desynchronized {
    #[prost(uint32, tag = "1")]
    pub access_address: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Hijacked {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(uint32, tag = "2")]
    pub access_address: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Injected {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(uint32, tag = "2")]
    pub access_address: u32,
    #[prost(uint32, tag = "3")]
    pub injection_attempts: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawPduReceived {
    #[prost(enumeration = "BleDirection", tag = "1")]
    pub direction: i32,
    #[prost(uint32, tag = "2")]
    pub channel: u32,
    #[prost(int32, optional, tag = "3")]
    pub rssi: Option<i32>,
    #[prost(uint32, optional, tag = "4")]
    pub timestamp: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub relative_timestamp: Option<u32>,
    #[prost(bool, optional, tag = "6")]
    pub crc_validity: Option<bool>,
    #[prost(uint32, tag = "7")]
    pub access_address: u32,
    #[prost(bytes = "vec", tag = "8")]
    pub pdu: Vec<u8>,
    #[prost(uint32, tag = "9")]
    pub crc: u32,
    #[prost(uint32, tag = "10")]
    pub conn_handle: u32,
    #[prost(bool, tag = "11")]
    pub processed: bool,
    #[prost(bool, tag = "12")]
    pub decrypted: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PduReceived {
    #[prost(enumeration = "BleDirection", tag = "1")]
    pub direction: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub pdu: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub conn_handle: u32,
    #[prost(bool, tag = "4")]
    pub processed: bool,
    #[prost(bool, tag = "5")]
    pub decrypted: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Triggered {
    #[prost(uint32, tag = "1")]
    pub id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(
        oneof = "message::Msg",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38"
    )]
    pub msg: Option<message::Msg>,
}

pub mod message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        SetBdAddress(super::SetBdAddressCmd),
        #[prost(message, tag = "2")]
        SniffAdv(super::SniffAdvCmd),
        #[prost(message, tag = "3")]
        JamAdv(super::JamAdvCmd),
        #[prost(message, tag = "4")]
        JamAdvOnChannel(super::JamAdvOnChannelCmd),
        #[prost(message, tag = "5")]
        ReactiveJam(super::ReactiveJamCmd),
        #[prost(message, tag = "6")]
        SniffConnReq(super::SniffConnReqCmd),
        #[prost(message, tag = "7")]
        SniffAccessAddress(super::SniffAccessAddressCmd),
        #[prost(message, tag = "8")]
        SniffActiveConn(super::SniffActiveConnCmd),
        #[prost(message, tag = "9")]
        JamConn(super::JamConnCmd),
        #[prost(message, tag = "10")]
        ScanMode(super::ScanModeCmd),
        #[prost(message, tag = "11")]
        AdvMode(super::AdvModeCmd),
        #[prost(message, tag = "12")]
        SetAdvData(super::SetAdvDataCmd),
        #[prost(message, tag = "13")]
        CentralMode(super::CentralModeCmd),
        #[prost(message, tag = "14")]
        ConnectTo(super::ConnectToCmd),
        #[prost(message, tag = "15")]
        SendRawPdu(super::SendRawPduCmd),
        #[prost(message, tag = "16")]
        SendPdu(super::SendPduCmd),
        #[prost(message, tag = "17")]
        Disconnect(super::DisconnectCmd),
        #[prost(message, tag = "18")]
        PeripheralMode(super::PeripheralModeCmd),
        #[prost(message, tag = "19")]
        Start(super::StartCmd),
        #[prost(message, tag = "20")]
        Stop(super::StopCmd),
        #[prost(message, tag = "21")]
        HijackMaster(super::HijackMasterCmd),
        #[prost(message, tag = "22")]
        HijackSlave(super::HijackSlaveCmd),
        #[prost(message, tag = "23")]
        HijackBoth(super::HijackBothCmd),
        #[prost(message, tag = "24")]
        SetEncryption(super::SetEncryptionCmd),
        #[prost(message, tag = "25")]
        PrepareSequence(super::PrepareSequenceCmd),
        #[prost(message, tag = "26")]
        Trigger(super::TriggerCmd),
        #[prost(message, tag = "27")]
        DeleteSequence(super::DeleteSequenceCmd),
        #[prost(message, tag = "28")]
        AccessAddressDiscovered(super::AccessAddressDiscovered),
        #[prost(message, tag = "29")]
        AdvPduReceived(super::AdvPduReceived),
        #[prost(message, tag = "30")]
        Connected(super::Connected),
        #[prost(message, tag = "31")]
        Disconnected(super::Disconnected),
        #[prost(message, tag = "32")]
        Synchronized(super::Synchronized),
        #[prost(message, tag = "33")]
        Desynchronized(super::Desynchronized),
        #[prost(message, tag = "34")]
        Hijacked(super::Hijacked),
        #[prost(message, tag = "35")]
        Injected(super::Injected),
        #[prost(message, tag = "36")]
        RawPduReceived(super::RawPduReceived),
        #[prost(message, tag = "37")]
        PduReceived(super::PduReceived),
        #[prost(message, tag = "38")]
        Triggered(super::Triggered),
    }
}
