#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetNodeAddressCmd {
    #[prost(bytes = "vec", tag = "1")]
    pub address: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub address: Vec<u8>,
    #[prost(bool, tag = "3")]
    pub show_acknowledgements: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JamCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub pdu: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub retransmission_count: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendRawCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub pdu: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub retransmission_count: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PrxCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PtxCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StartCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawPduReceived {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
    #[prost(int32, optional, tag = "2")]
    pub rssi: Option<i32>,
    #[prost(uint32, optional, tag = "3")]
    pub timestamp: Option<u32>,
    #[prost(bool, optional, tag = "4")]
    pub crc_validity: Option<bool>,
    #[prost(bytes = "vec", optional, tag = "5")]
    pub address: Option<Vec<u8>>,
    #[prost(bytes = "vec", tag = "6")]
    pub pdu: Vec<u8>,
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
    pub crc_validity: Option<bool>,
    #[prost(bytes = "vec", optional, tag = "5")]
    pub address: Option<Vec<u8>>,
    #[prost(bytes = "vec", tag = "6")]
    pub pdu: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Jammed {
    #[prost(uint32, tag = "1")]
    pub timestamp: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(oneof = "message::Msg", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12")]
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
        SendPdu(super::SendCmd),
        #[prost(message, tag = "5")]
        SendRawPdu(super::SendRawCmd),
        #[prost(message, tag = "6")]
        PrxMode(super::PrxCmd),
        #[prost(message, tag = "7")]
        PtxMode(super::PtxCmd),
        #[prost(message, tag = "8")]
        Start(super::StartCmd),
        #[prost(message, tag = "9")]
        Stop(super::StopCmd),
        #[prost(message, tag = "10")]
        RawPduReceived(super::RawPduReceived),
        #[prost(message, tag = "11")]
        PduReceived(super::PduReceived),
        #[prost(message, tag = "12")]
        Jammed(super::Jammed),
    }
}
