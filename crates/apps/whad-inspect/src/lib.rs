pub mod config;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use whad_proto::{Domain, MessageType, WhadMessage};

pub use config::InspectConfig;

/// One decoded frame as printed by `whad-inspect decode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedFrame {
    #[serde(rename = "type")]
    pub message_type: String,
    pub message: WhadMessage,
}

/// One row of `whad-inspect kinds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindEntry {
    #[serde(rename = "type")]
    pub message_type: String,
    pub domain_tag: u32,
    pub kind_tag: u32,
}

impl From<MessageType> for KindEntry {
    fn from(message_type: MessageType) -> Self {
        Self {
            message_type: message_type.to_string(),
            domain_tag: message_type.domain().tag(),
            kind_tag: message_type.kind_tag(),
        }
    }
}

/// Parses a hex frame, tolerating a `0x` prefix and embedded whitespace.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.split_whitespace().collect();
    let digits = digits.strip_prefix("0x").unwrap_or(digits.as_str());
    hex::decode(digits).with_context(|| format!("invalid hex frame '{input}'"))
}

pub fn decode_frame(input: &str, config: &InspectConfig) -> Result<DecodedFrame> {
    let bytes = parse_hex(input)?;
    if bytes.len() > config.max_frame_len {
        bail!("frame of {} bytes exceeds max_frame_len {}", bytes.len(), config.max_frame_len);
    }
    let message =
        whad_proto::decode(&bytes).with_context(|| format!("cannot decode frame {input}"))?;
    log::debug!("decoded {} from {} bytes", message.message_type(), bytes.len());
    Ok(DecodedFrame { message_type: message.message_type().to_string(), message })
}

/// Builds a frame from the JSON form of a message and returns it as hex.
pub fn encode_json(input: &str) -> Result<String> {
    let message: WhadMessage = serde_json::from_str(input).context("invalid message JSON")?;
    Ok(hex::encode(whad_proto::encode(message)))
}

pub fn list_kinds(domain: Option<Domain>) -> Vec<KindEntry> {
    MessageType::all()
        .filter(|message_type| domain.map_or(true, |domain| message_type.domain() == domain))
        .map(KindEntry::from)
        .collect()
}

pub fn render<T: Serialize>(value: &T, config: &InspectConfig) -> Result<String> {
    let text = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_input_is_normalised() {
        assert_eq!(parse_hex("0x1a03 9a0100").expect("hex"), vec![0x1a, 0x03, 0x9a, 0x01, 0x00]);
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn decode_then_encode() {
        let config = InspectConfig::default();
        let frame = decode_frame("1a039a0100", &config).expect("ble start");
        assert_eq!(frame.message_type, "ble::Start");

        let json = serde_json::to_string(&frame.message).expect("json");
        assert_eq!(encode_json(&json).expect("encode"), "1a039a0100");
    }

    #[test]
    fn long_frames_are_refused() {
        let config = InspectConfig { max_frame_len: 4, pretty: false };
        let err = decode_frame("1a039a0100", &config).unwrap_err();
        assert!(err.to_string().contains("exceeds max_frame_len 4"));
    }

    #[test]
    fn kinds_filter_by_domain() {
        let esb = list_kinds(Some(Domain::Esb));
        assert_eq!(esb.len(), 12);
        assert_eq!(esb[0].message_type, "esb::SetNodeAddress");
        assert!(esb.iter().all(|entry| entry.domain_tag == 5));
        assert_eq!(list_kinds(None).len(), 114);
    }
}
