use crate::envelope::{Domain, MessageType};

/// Convenience alias for fallible protocol operations.
pub type Result<T> = core::result::Result<T, WhadError>;

/// A byte buffer exceeded the capacity of the field it was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("payload of {len} bytes exceeds bound of {max} bytes")]
pub struct BoundError {
    pub len: usize,
    pub max: usize,
}

/// Errors raised while turning raw bytes into an [`Envelope`](crate::Envelope).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed wire encoding: {0}")]
    Wire(#[from] prost::DecodeError),

    #[error("envelope carries no known domain")]
    EmptyEnvelope,

    #[error("unknown message kind in domain {0}")]
    UnknownKind(Domain),
}

/// Errors raised while extracting one message kind out of an envelope.
///
/// A parsing failure is fatal to the message being built; nothing of it
/// should be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    #[error("expected {expected}, envelope holds {}", describe(.found))]
    KindMismatch { expected: MessageType, found: Option<MessageType> },

    #[error("field '{field}': {source}")]
    Bound {
        field: &'static str,
        #[source]
        source: BoundError,
    },

    #[error("field '{field}': expected {expected} bytes, got {found}")]
    InvalidLength { field: &'static str, expected: usize, found: usize },

    #[error("field '{field}': unknown enum value {value}")]
    InvalidEnum { field: &'static str, value: i32 },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

fn describe(found: &Option<MessageType>) -> String {
    match found {
        Some(message_type) => message_type.to_string(),
        None => "nothing".to_string(),
    }
}

impl ParsingError {
    pub(crate) fn bound(field: &'static str, source: BoundError) -> Self {
        Self::Bound { field, source }
    }
}

/// Top-level error for everything the codec can reject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WhadError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error(transparent)]
    Bound(#[from] BoundError),
}

impl From<prost::DecodeError> for WhadError {
    fn from(err: prost::DecodeError) -> Self {
        Self::Decode(DecodeError::Wire(err))
    }
}
