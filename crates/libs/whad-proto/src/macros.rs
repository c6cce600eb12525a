/// Declares the kind enum, the domain message enum and the
/// [`TypedMessage`](crate::TypedMessage) impls for one protocol domain.
///
/// Each listed kind `K = tag` requires, in the invoking module:
/// - a fields struct `K`,
/// - a variant `K` in the domain's wire oneof (`wire`),
/// - `From<&K>` for the wire branch and `TryFrom<&branch, Error = ParsingError>` for `K`.
macro_rules! domain_messages {
    (
        $(#[$meta:meta])*
        domain: $domain:ident,
        message: $message:ident,
        kind: $kind:ident,
        wire: $wire:ident,
        kinds: { $($variant:ident = $tag:literal),+ $(,)? }
    ) => {
        /// Message kinds of this domain, in wire tag order.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $kind {
            $($variant),+
        }

        impl $kind {
            pub const ALL: &'static [$kind] = &[$($kind::$variant),+];

            /// Field number of this kind inside the domain oneof.
            pub const fn tag(self) -> u32 {
                match self {
                    $($kind::$variant => $tag),+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($kind::$variant => stringify!($variant)),+
                }
            }

            pub fn from_tag(tag: u32) -> Option<Self> {
                Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
            }

            pub(crate) fn of(raw: &$wire) -> Self {
                match raw {
                    $($wire::$variant(_) => $kind::$variant),+
                }
            }
        }

        impl core::fmt::Display for $kind {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $message {
            $($variant($variant)),+
        }

        impl $message {
            pub fn kind(&self) -> $kind {
                match self {
                    $($message::$variant(_) => $kind::$variant),+
                }
            }

            pub(crate) fn from_wire(raw: &$wire) -> Result<Self, $crate::error::ParsingError> {
                match raw {
                    $($wire::$variant(inner) => {
                        Ok($message::$variant($variant::try_from(inner)?))
                    }),+
                }
            }

            pub(crate) fn to_wire(&self) -> $wire {
                match self {
                    $($message::$variant(inner) => $wire::$variant(inner.into())),+
                }
            }
        }

        $(
            impl From<$variant> for $message {
                fn from(inner: $variant) -> Self {
                    $message::$variant(inner)
                }
            }

            impl From<$variant> for $crate::message::WhadMessage {
                fn from(inner: $variant) -> Self {
                    $crate::message::WhadMessage::$domain($message::$variant(inner))
                }
            }

            impl $crate::message::TypedMessage for $variant {
                const MESSAGE_TYPE: $crate::envelope::MessageType =
                    $crate::envelope::MessageType::$domain($kind::$variant);

                fn pack(&self, envelope: &mut $crate::envelope::Envelope) {
                    envelope.store($crate::wire::Branch::wrap($wire::$variant(self.into())));
                }

                fn unpack(
                    envelope: &$crate::envelope::Envelope,
                ) -> Result<Self, $crate::error::ParsingError> {
                    match envelope.branch::<$wire>() {
                        Some($wire::$variant(inner)) => $variant::try_from(inner),
                        _ => {
                            let found = envelope.message_type().ok();
                            log::debug!(
                                "kind mismatch: expected {}, envelope holds {:?}",
                                Self::MESSAGE_TYPE,
                                found
                            );
                            Err($crate::error::ParsingError::KindMismatch {
                                expected: Self::MESSAGE_TYPE,
                                found,
                            })
                        }
                    }
                }
            }
        )+
    };
}

/// Declares fields structs whose wire form carries the same scalar fields
/// under the same names, with no bound or enum checks needed.
macro_rules! plain_kinds {
    ($(
        $(#[$meta:meta])*
        $name:ident => $wire:ty { $($field:ident: $t:ty),* $(,)? }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
                serde::Serialize, serde::Deserialize,
            )]
            pub struct $name {
                $(pub $field: $t),*
            }

            impl From<&$name> for $wire {
                #[allow(unused_variables)]
                fn from(msg: &$name) -> Self {
                    Self { $($field: msg.$field),* }
                }
            }

            impl TryFrom<&$wire> for $name {
                type Error = $crate::error::ParsingError;

                #[allow(unused_variables)]
                fn try_from(raw: &$wire) -> Result<Self, Self::Error> {
                    Ok(Self { $($field: raw.$field),* })
                }
            }
        )+
    };
}

/// Generates `has_x()`, `x()` and `with_x()` for `Option` fields.
///
/// `x()` returns the default value when the field is absent; presence is
/// only ever reported by `has_x()`.
macro_rules! optional_fields {
    ($ty:ident { $($field:ident: $t:ty => $has:ident, $with:ident;)+ }) => {
        impl $ty {
            $(
                #[doc = concat!("Returns `true` if `", stringify!($field), "` is present.")]
                pub fn $has(&self) -> bool {
                    self.$field.is_some()
                }

                #[doc = concat!(
                    "Returns `", stringify!($field), "`, or its zero value when absent."
                )]
                pub fn $field(&self) -> $t {
                    self.$field.as_ref().cloned().unwrap_or_default()
                }

                #[doc = concat!("Sets `", stringify!($field), "` and marks it present.")]
                pub fn $with(mut self, value: $t) -> Self {
                    self.$field = Some(value);
                    self
                }
            )+
        }
    };
}

/// Declares the fields structs ESB and Logitech Unifying share.
///
/// Both domains carry identical shapes on the wire; each still needs its own
/// types so that every struct is bound to exactly one message type.
macro_rules! esb_family_kinds {
    ($raw:ident) => {
        plain_kinds! {
            JamMode => $raw::JamCmd { channel: u32 }
            Start => $raw::StartCmd {}
            Stop => $raw::StopCmd {}
            Jammed => $raw::Jammed { timestamp: u32 }
        }

        /// Sets the node address used for transmission and filtering.
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct SetNodeAddress {
            pub address: $crate::esb::EsbAddress,
        }

        impl From<&SetNodeAddress> for $raw::SetNodeAddressCmd {
            fn from(msg: &SetNodeAddress) -> Self {
                Self { address: msg.address.to_vec() }
            }
        }

        impl TryFrom<&$raw::SetNodeAddressCmd> for SetNodeAddress {
            type Error = $crate::error::ParsingError;

            fn try_from(raw: &$raw::SetNodeAddressCmd) -> Result<Self, Self::Error> {
                Ok(Self { address: $crate::esb::EsbAddress::from_field("address", &raw.address)? })
            }
        }

        /// Sniffs one address, or every address with
        /// [`PROMISCUOUS_ADDRESS`](crate::esb::PROMISCUOUS_ADDRESS).
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct SniffMode {
            pub channel: u32,
            pub address: $crate::esb::EsbAddress,
            pub show_acknowledgements: bool,
        }

        impl From<&SniffMode> for $raw::SniffCmd {
            fn from(msg: &SniffMode) -> Self {
                Self {
                    channel: msg.channel,
                    address: msg.address.to_vec(),
                    show_acknowledgements: msg.show_acknowledgements,
                }
            }
        }

        impl TryFrom<&$raw::SniffCmd> for SniffMode {
            type Error = $crate::error::ParsingError;

            fn try_from(raw: &$raw::SniffCmd) -> Result<Self, Self::Error> {
                Ok(Self {
                    channel: raw.channel,
                    address: $crate::esb::EsbAddress::from_field("address", &raw.address)?,
                    show_acknowledgements: raw.show_acknowledgements,
                })
            }
        }

        esb_family_kinds!(@send $raw, SendPdu => SendCmd);
        esb_family_kinds!(@send $raw, SendRawPdu => SendRawCmd);
        esb_family_kinds!(@received $raw, RawPduReceived);
        esb_family_kinds!(@received $raw, PduReceived);
    };

    (@send $raw:ident, $name:ident => $wire:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            pub channel: u32,
            pub pdu: $crate::payload::Pdu,
            pub retransmission_count: u32,
        }

        impl From<&$name> for $raw::$wire {
            fn from(msg: &$name) -> Self {
                Self {
                    channel: msg.channel,
                    pdu: msg.pdu.to_vec(),
                    retransmission_count: msg.retransmission_count,
                }
            }
        }

        impl TryFrom<&$raw::$wire> for $name {
            type Error = $crate::error::ParsingError;

            fn try_from(raw: &$raw::$wire) -> Result<Self, Self::Error> {
                Ok(Self {
                    channel: raw.channel,
                    pdu: $crate::payload::Pdu::from_field("pdu", &raw.pdu)?,
                    retransmission_count: raw.retransmission_count,
                })
            }
        }
    };

    (@received $raw:ident, $name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            pub channel: u32,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub rssi: Option<i32>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub timestamp: Option<u32>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub crc_validity: Option<bool>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub address: Option<$crate::esb::EsbAddress>,
            pub pdu: $crate::payload::Pdu,
        }

        optional_fields!($name {
            rssi: i32 => has_rssi, with_rssi;
            timestamp: u32 => has_timestamp, with_timestamp;
            crc_validity: bool => has_crc_validity, with_crc_validity;
            address: $crate::esb::EsbAddress => has_address, with_address;
        });

        impl From<&$name> for $raw::$name {
            fn from(msg: &$name) -> Self {
                Self {
                    channel: msg.channel,
                    rssi: msg.rssi,
                    timestamp: msg.timestamp,
                    crc_validity: msg.crc_validity,
                    address: msg.address.as_ref().map(|address| address.to_vec()),
                    pdu: msg.pdu.to_vec(),
                }
            }
        }

        impl TryFrom<&$raw::$name> for $name {
            type Error = $crate::error::ParsingError;

            fn try_from(raw: &$raw::$name) -> Result<Self, Self::Error> {
                Ok(Self {
                    channel: raw.channel,
                    rssi: raw.rssi,
                    timestamp: raw.timestamp,
                    crc_validity: raw.crc_validity,
                    address: raw
                        .address
                        .as_deref()
                        .map(|address| $crate::esb::EsbAddress::from_field("address", address))
                        .transpose()?,
                    pdu: $crate::payload::Pdu::from_field("pdu", &raw.pdu)?,
                })
            }
        }
    };
}
