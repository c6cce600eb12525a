//! Protocol buffer schema shared with adapter firmware.
//!
//! These types mirror the published `.proto` files field for field; their
//! tag numbers are the interoperability contract. Nothing here validates
//! bounds or enum values: that happens when a branch is converted into its
//! typed fields struct.
//!
//! ```text
//! Message
//!   oneof msg
//!     1 generic   -> generic::Message   { oneof msg { cmd_result, verbose, ... } }
//!     2 discovery -> discovery::Message { oneof msg { info_query, ... } }
//!     3 ble       -> ble::Message       { oneof msg { set_bd_address, ... } }
//!     4 zigbee    -> zigbee::Message
//!     5 esb       -> esb::Message
//!     6 unifying  -> unifying::Message
//!     7 phy       -> phy::Message
//! ```

pub mod ble;
pub mod discovery;
pub mod esb;
pub mod generic;
pub mod phy;
pub mod unifying;
pub mod zigbee;

/// Top-level frame exchanged with an adapter.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(oneof = "message::Msg", tags = "1, 2, 3, 4, 5, 6, 7")]
    pub msg: Option<message::Msg>,
}

pub mod message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Msg {
        #[prost(message, tag = "1")]
        Generic(super::generic::Message),
        #[prost(message, tag = "2")]
        Discovery(super::discovery::Message),
        #[prost(message, tag = "3")]
        Ble(super::ble::Message),
        #[prost(message, tag = "4")]
        Zigbee(super::zigbee::Message),
        #[prost(message, tag = "5")]
        Esb(super::esb::Message),
        #[prost(message, tag = "6")]
        Unifying(super::unifying::Message),
        #[prost(message, tag = "7")]
        Phy(super::phy::Message),
    }
}

/// A domain's inner oneof, addressable from the top-level frame.
pub(crate) trait Branch: Sized {
    /// Returns the inner branch if `message` belongs to this domain.
    fn branch(message: &Message) -> Option<&Self>;

    /// Wraps the inner branch into a top-level oneof value.
    fn wrap(self) -> message::Msg;
}

macro_rules! domain_branch {
    ($($module:ident => $variant:ident),+ $(,)?) => {
        $(
            impl Branch for $module::message::Msg {
                fn branch(message: &Message) -> Option<&Self> {
                    match &message.msg {
                        Some(message::Msg::$variant(inner)) => inner.msg.as_ref(),
                        _ => None,
                    }
                }

                fn wrap(self) -> message::Msg {
                    message::Msg::$variant($module::Message { msg: Some(self) })
                }
            }
        )+
    };
}

domain_branch! {
    generic => Generic,
    discovery => Discovery,
    ble => Ble,
    zigbee => Zigbee,
    esb => Esb,
    unifying => Unifying,
    phy => Phy,
}
