//! Logitech Unifying rides on ESB framing; shared shapes are reused as-is.

pub use super::esb::{
    JamCmd, Jammed, PduReceived, RawPduReceived, SendCmd, SendRawCmd, SetNodeAddressCmd, SniffCmd,
    StartCmd, StopCmd,
};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DongleModeCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyboardModeCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MouseModeCmd {
    #[prost(uint32, tag = "1")]
    pub channel: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SniffPairingCmd {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(oneof = "message::Msg", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14")]
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
        DongleMode(super::DongleModeCmd),
        #[prost(message, tag = "7")]
        KeyboardMode(super::KeyboardModeCmd),
        #[prost(message, tag = "8")]
        MouseMode(super::MouseModeCmd),
        #[prost(message, tag = "9")]
        Start(super::StartCmd),
        #[prost(message, tag = "10")]
        Stop(super::StopCmd),
        #[prost(message, tag = "11")]
        SniffPairing(super::SniffPairingCmd),
        #[prost(message, tag = "12")]
        RawPduReceived(super::RawPduReceived),
        #[prost(message, tag = "13")]
        PduReceived(super::PduReceived),
        #[prost(message, tag = "14")]
        Jammed(super::Jammed),
    }
}
