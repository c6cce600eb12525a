//! Messages any adapter may emit regardless of the active domain.

use serde::{Deserialize, Serialize};

use crate::error::ParsingError;
use crate::field::enumeration;
use crate::payload::Pdu;
use crate::wire::generic::{self as raw, message::Msg as GenericWire};

pub use crate::wire::generic::ResultCode;

domain_messages! {
    domain: Generic,
    message: GenericMessage,
    kind: GenericKind,
    wire: GenericWire,
    kinds: {
        CmdResult = 1,
        Verbose = 2,
        DebugMessage = 3,
        Progress = 4,
    }
}

/// Outcome of the last command sent to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CmdResult {
    pub result: ResultCode,
}

impl CmdResult {
    pub const fn new(result: ResultCode) -> Self {
        Self { result }
    }

    pub fn is_success(&self) -> bool {
        self.result == ResultCode::Success
    }
}

impl Default for CmdResult {
    fn default() -> Self {
        Self::new(ResultCode::Success)
    }
}

impl From<&CmdResult> for raw::CmdResult {
    fn from(msg: &CmdResult) -> Self {
        Self { result: msg.result.into() }
    }
}

impl TryFrom<&raw::CmdResult> for CmdResult {
    type Error = ParsingError;

    fn try_from(raw: &raw::CmdResult) -> Result<Self, Self::Error> {
        Ok(Self { result: enumeration("result", raw.result)? })
    }
}

/// Free-form text emitted by firmware.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verbose {
    pub data: Pdu,
}

impl From<&Verbose> for raw::Verbose {
    fn from(msg: &Verbose) -> Self {
        Self { data: msg.data.to_vec() }
    }
}

impl TryFrom<&raw::Verbose> for Verbose {
    type Error = ParsingError;

    fn try_from(raw: &raw::Verbose) -> Result<Self, Self::Error> {
        Ok(Self { data: Pdu::from_field("data", &raw.data)? })
    }
}

/// Leveled firmware trace output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebugMessage {
    pub level: i32,
    pub data: Pdu,
}

impl From<&DebugMessage> for raw::DebugMsg {
    fn from(msg: &DebugMessage) -> Self {
        Self { level: msg.level, data: msg.data.to_vec() }
    }
}

impl TryFrom<&raw::DebugMsg> for DebugMessage {
    type Error = ParsingError;

    fn try_from(raw: &raw::DebugMsg) -> Result<Self, Self::Error> {
        Ok(Self { level: raw.level, data: Pdu::from_field("data", &raw.data)? })
    }
}

plain_kinds! {
    /// Progress of a long-running operation, in firmware-defined units.
    Progress => raw::Progress { value: i32 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{Envelope, MessageType};
    use crate::message::TypedMessage;

    #[test]
    fn cmd_result_survives_envelope() {
        let mut envelope = Envelope::new();
        CmdResult::new(ResultCode::WrongMode).pack(&mut envelope);

        let bytes = envelope.encode();
        let decoded = Envelope::decode(&bytes).expect("valid frame");
        assert_eq!(decoded.message_type(), Ok(MessageType::Generic(GenericKind::CmdResult)));

        let result = CmdResult::unpack(&decoded).expect("cmd result");
        assert_eq!(result.result, ResultCode::WrongMode);
        assert!(!result.is_success());
    }

    #[test]
    fn unknown_result_code_is_rejected() {
        let raw = raw::CmdResult { result: 99 };
        assert_eq!(
            CmdResult::try_from(&raw),
            Err(ParsingError::InvalidEnum { field: "result", value: 99 })
        );
    }

    #[test]
    fn oversized_verbose_text_is_rejected() {
        let raw = raw::Verbose { data: vec![b'a'; 300] };
        assert!(matches!(
            Verbose::try_from(&raw),
            Err(ParsingError::Bound { field: "data", .. })
        ));
    }

    #[test]
    fn debug_message_keeps_level() {
        let msg = DebugMessage { level: -2, data: Pdu::new(b"boot").expect("fits") };
        let decoded = DebugMessage::decode(&msg.encode()).expect("debug message");
        assert_eq!(decoded, msg);
        assert_eq!(GenericKind::DebugMessage.tag(), 3);
    }
}
