use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    ::prost::Enumeration, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    Error = 1,
    ParameterError = 2,
    Disconnected = 3,
    WrongMode = 4,
    UnsupportedDomain = 5,
    Busy = 6,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmdResult {
    #[prost(enumeration = "ResultCode", tag = "1")]
    pub result: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Verbose {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DebugMsg {
    #[prost(int32, tag = "1")]
    pub level: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Progress {
    #[prost(int32, tag = "1")]
    pub value: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(oneof = "message::Msg", tags = "1, 2, 3, 4")]
    pub msg: Option<message::Msg>,
}

pub mod message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        CmdResult(super::CmdResult),
        #[prost(message, tag = "2")]
        Verbose(super::Verbose),
        #[prost(message, tag = "3")]
        DebugMessage(super::DebugMsg),
        #[prost(message, tag = "4")]
        Progress(super::Progress),
    }
}
