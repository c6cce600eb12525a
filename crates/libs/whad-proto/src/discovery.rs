//! Device discovery: identifying an adapter and what it can do.

use core::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::error::{BoundError, ParsingError};
use crate::field::enumeration;
use crate::payload::BoundedPayload;
use crate::wire::discovery::{self as raw, message::Msg as DiscoveryWire};

pub use crate::wire::discovery::{DeviceType, RadioDomain};

/// Maximum size of the device identifier.
pub const MAX_DEVICE_ID_LEN: usize = 16;
/// Maximum size of the firmware author and URL strings.
pub const MAX_FIRMWARE_STRING_LEN: usize = 64;

pub type DeviceId = BoundedPayload<MAX_DEVICE_ID_LEN>;
pub type FirmwareString = BoundedPayload<MAX_FIRMWARE_STRING_LEN>;

domain_messages! {
    domain: Discovery,
    message: DiscoveryMessage,
    kind: DiscoveryKind,
    wire: DiscoveryWire,
    kinds: {
        InfoQuery = 1,
        InfoResp = 2,
        ResetQuery = 3,
        ReadyResp = 4,
        DomainQuery = 5,
        DomainResp = 6,
        SetSpeed = 7,
    }
}

const DOMAIN_MASK: u32 = 0xff00_0000;
const CAPABILITY_MASK: u32 = 0x00ff_ffff;

/// Capability flags a device reports for one radio domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capabilities(u32);

impl Capabilities {
    pub const NONE: Self = Self(0);
    pub const SCAN: Self = Self(0x01);
    pub const SNIFF: Self = Self(0x02);
    pub const INJECT: Self = Self(0x04);
    pub const JAM: Self = Self(0x08);
    pub const HIJACK: Self = Self(0x10);
    pub const HOOK: Self = Self(0x20);
    pub const SIMULATE_ROLE: Self = Self(0x40);
    pub const NO_RAW_DATA: Self = Self(0x80);

    /// Keeps only the bits that fit below the domain byte.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & CAPABILITY_MASK)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Rejects flags that would spill into the domain byte.
impl TryFrom<u32> for Capabilities {
    type Error = BoundError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        if bits & !CAPABILITY_MASK != 0 {
            let len = (u32::BITS - bits.leading_zeros()).div_ceil(8) as usize;
            return Err(BoundError { len, max: 3 });
        }
        Ok(Self(bits))
    }
}

impl From<Capabilities> for u32 {
    fn from(capabilities: Capabilities) -> Self {
        capabilities.0
    }
}

impl BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// One entry of a device's capability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainCapabilities {
    pub domain: RadioDomain,
    pub capabilities: Capabilities,
}

impl DomainCapabilities {
    pub const fn new(domain: RadioDomain, capabilities: Capabilities) -> Self {
        Self { domain, capabilities }
    }

    /// Packs into a capability word: domain in the top byte.
    pub fn to_word(self) -> u32 {
        (i32::from(self.domain) as u32 & DOMAIN_MASK) | (self.capabilities.bits() & CAPABILITY_MASK)
    }

    pub fn from_word(word: u32) -> Result<Self, ParsingError> {
        let domain = enumeration("capabilities", (word & DOMAIN_MASK) as i32)?;
        Ok(Self { domain, capabilities: Capabilities::from_bits(word) })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FirmwareVersion {
    pub major: u32,
    pub minor: u32,
    pub rev: u32,
}

impl core::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.rev)
    }
}

plain_kinds! {
    /// Host asks the adapter to describe itself.
    InfoQuery => raw::DeviceInfoQuery { proto_ver: u32 }
    ResetQuery => raw::DeviceResetQuery {}
    ReadyResp => raw::DeviceReadyResp {}
    /// Requests a new transport speed, in bauds.
    SetSpeed => raw::SetTransportSpeed { speed: u32 }
}

/// Adapter self-description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResp {
    pub device_type: DeviceType,
    pub device_id: DeviceId,
    pub proto_min_ver: u32,
    pub max_speed: u32,
    pub fw_author: FirmwareString,
    pub fw_url: FirmwareString,
    pub fw_version: FirmwareVersion,
    pub capabilities: Vec<DomainCapabilities>,
}

impl InfoResp {
    /// Capabilities announced for `domain`, if the device supports it.
    pub fn capabilities_for(&self, domain: RadioDomain) -> Option<Capabilities> {
        self.capabilities
            .iter()
            .find(|entry| entry.domain == domain)
            .map(|entry| entry.capabilities)
    }
}

impl From<&InfoResp> for raw::DeviceInfoResp {
    fn from(msg: &InfoResp) -> Self {
        Self {
            device_type: msg.device_type.into(),
            devid: msg.device_id.to_vec(),
            proto_min_ver: msg.proto_min_ver,
            max_speed: msg.max_speed,
            fw_author: msg.fw_author.to_vec(),
            fw_url: msg.fw_url.to_vec(),
            fw_version_major: msg.fw_version.major,
            fw_version_minor: msg.fw_version.minor,
            fw_version_rev: msg.fw_version.rev,
            capabilities: msg.capabilities.iter().map(|entry| entry.to_word()).collect(),
        }
    }
}

impl TryFrom<&raw::DeviceInfoResp> for InfoResp {
    type Error = ParsingError;

    fn try_from(raw: &raw::DeviceInfoResp) -> Result<Self, Self::Error> {
        Ok(Self {
            device_type: enumeration("device_type", raw.device_type)?,
            device_id: DeviceId::from_field("devid", &raw.devid)?,
            proto_min_ver: raw.proto_min_ver,
            max_speed: raw.max_speed,
            fw_author: FirmwareString::from_field("fw_author", &raw.fw_author)?,
            fw_url: FirmwareString::from_field("fw_url", &raw.fw_url)?,
            fw_version: FirmwareVersion {
                major: raw.fw_version_major,
                minor: raw.fw_version_minor,
                rev: raw.fw_version_rev,
            },
            capabilities: raw
                .capabilities
                .iter()
                .map(|word| DomainCapabilities::from_word(*word))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Asks which commands the adapter supports in one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainQuery {
    pub domain: RadioDomain,
}

impl From<&DomainQuery> for raw::DeviceDomainInfoQuery {
    fn from(msg: &DomainQuery) -> Self {
        Self { domain: msg.domain.into() }
    }
}

impl TryFrom<&raw::DeviceDomainInfoQuery> for DomainQuery {
    type Error = ParsingError;

    fn try_from(raw: &raw::DeviceDomainInfoQuery) -> Result<Self, Self::Error> {
        Ok(Self { domain: enumeration("domain", raw.domain)? })
    }
}

/// Supported commands of one domain; bit `n` stands for kind tag `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainResp {
    pub domain: RadioDomain,
    pub supported_commands: u64,
}

impl DomainResp {
    pub fn supports(&self, kind_tag: u32) -> bool {
        kind_tag < u64::BITS && self.supported_commands & (1u64 << kind_tag) != 0
    }

    /// Tags of every supported command, lowest first.
    pub fn supported_tags(&self) -> impl Iterator<Item = u32> + '_ {
        (0..u64::BITS).filter(|tag| self.supports(*tag))
    }
}

impl From<&DomainResp> for raw::DeviceDomainInfoResp {
    fn from(msg: &DomainResp) -> Self {
        Self { domain: msg.domain.into(), supported_commands: msg.supported_commands }
    }
}

impl TryFrom<&raw::DeviceDomainInfoResp> for DomainResp {
    type Error = ParsingError;

    fn try_from(raw: &raw::DeviceDomainInfoResp) -> Result<Self, Self::Error> {
        Ok(Self {
            domain: enumeration("domain", raw.domain)?,
            supported_commands: raw.supported_commands,
        })
    }
}
