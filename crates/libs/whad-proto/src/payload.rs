//! Length-capped byte buffers carried inside message kinds.
//!
//! Every byte field of the protocol has a declared maximum. A
//! [`BoundedPayload`] can never hold more than its capacity: oversized input
//! is rejected, never truncated or zeroed.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BoundError, ParsingError};

/// Maximum size of a PDU or raw packet in any domain.
pub const MAX_PDU_LEN: usize = 255;

/// A PDU or packet, up to [`MAX_PDU_LEN`] bytes.
pub type Pdu = BoundedPayload<MAX_PDU_LEN>;

#[derive(Clone, Copy)]
pub struct BoundedPayload<const N: usize> {
    buffer: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedPayload<N> {
    pub const fn empty() -> Self {
        Self { buffer: [0u8; N], len: 0 }
    }

    /// A payload filled to capacity.
    pub const fn full(buffer: [u8; N]) -> Self {
        Self { buffer, len: N }
    }

    /// Copies `data` into a new payload, failing if it does not fit.
    pub fn new(data: &[u8]) -> Result<Self, BoundError> {
        let mut payload = Self::empty();
        payload.write(data)?;
        Ok(payload)
    }

    /// Copies a received wire field, reporting violations against `field`.
    pub(crate) fn from_field(field: &'static str, data: &[u8]) -> Result<Self, ParsingError> {
        Self::new(data).map_err(|err| {
            log::debug!("rejecting field '{}': {}", field, err);
            ParsingError::bound(field, err)
        })
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn reset(&mut self) {
        self.buffer = [0u8; N];
        self.len = 0;
    }

    /// Appends `data`. Nothing is written when the result would exceed `N`.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, BoundError> {
        let data_size = data.len();

        if data_size == 0 {
            return Ok(0);
        }

        if self.len + data_size > N {
            return Err(BoundError { len: self.len + data_size, max: N });
        }

        self.buffer[self.len..self.len + data_size].copy_from_slice(data);
        self.len += data_size;

        Ok(data_size)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }
}

impl<const N: usize> Default for BoundedPayload<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> PartialEq for BoundedPayload<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for BoundedPayload<N> {}

impl<const N: usize> Hash for BoundedPayload<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<const N: usize> AsRef<[u8]> for BoundedPayload<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> TryFrom<&[u8]> for BoundedPayload<N> {
    type Error = BoundError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl<const N: usize, const M: usize> TryFrom<&[u8; M]> for BoundedPayload<N> {
    type Error = BoundError;

    fn try_from(data: &[u8; M]) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl<const N: usize> TryFrom<Vec<u8>> for BoundedPayload<N> {
    type Error = BoundError;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(&data)
    }
}

impl<const N: usize> fmt::Debug for BoundedPayload<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedPayload<{}>({})", N, hex::encode(self.as_slice()))
    }
}

impl<const N: usize> fmt::Display for BoundedPayload<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ 0x{} ]", hex::encode(self.as_slice()))
    }
}

impl<const N: usize> Serialize for BoundedPayload<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(self.as_slice()))
        } else {
            serializer.serialize_bytes(self.as_slice())
        }
    }
}

struct PayloadVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for PayloadVisitor<N> {
    type Value = BoundedPayload<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a hex string or byte array of at most {} bytes", N)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let bytes = hex::decode(value).map_err(E::custom)?;
        BoundedPayload::new(&bytes).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        BoundedPayload::new(value).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut payload = BoundedPayload::empty();
        while let Some(byte) = seq.next_element::<u8>()? {
            payload.write(&[byte]).map_err(de::Error::custom)?;
        }
        Ok(payload)
    }
}

impl<'de, const N: usize> Deserialize<'de> for BoundedPayload<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(PayloadVisitor::<N>)
        } else {
            deserializer.deserialize_bytes(PayloadVisitor::<N>)
        }
    }
}

/// Copies a wire field that must be exactly `N` bytes long.
pub(crate) fn fixed<const N: usize>(
    field: &'static str,
    data: &[u8],
) -> Result<[u8; N], ParsingError> {
    <[u8; N]>::try_from(data).map_err(|_| {
        log::debug!("rejecting field '{}': {} bytes, expected {}", field, data.len(), N);
        ParsingError::InvalidLength { field, expected: N, found: data.len() }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_payload_up_to_capacity() {
        let payload = BoundedPayload::<5>::new(&[1, 2, 3, 4, 5]).expect("fits");
        assert_eq!(payload.len(), 5);
        assert_eq!(payload.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(payload.capacity(), 5);
    }

    #[test]
    fn rejects_payload_over_capacity() {
        let err = BoundedPayload::<5>::new(&[0u8; 6]).expect_err("must not fit");
        assert_eq!(err, BoundError { len: 6, max: 5 });
    }

    #[test]
    fn failed_write_leaves_contents_untouched() {
        let mut payload = BoundedPayload::<4>::new(&[0xaa, 0xbb]).expect("fits");
        assert!(payload.write(&[1, 2, 3]).is_err());
        assert_eq!(payload.as_slice(), &[0xaa, 0xbb]);
        payload.write(&[0xcc, 0xdd]).expect("exactly fills");
        assert_eq!(payload.as_slice(), &[0xaa, 0xbb, 0xcc, 0xdd]);
    }

    #[test]
    fn equality_ignores_spare_capacity() {
        let mut a = BoundedPayload::<8>::new(&[1, 2, 3]).expect("fits");
        a.reset();
        a.write(&[9]).expect("fits");
        let b = BoundedPayload::<8>::new(&[9]).expect("fits");
        assert_eq!(a, b);
    }

    #[test]
    fn from_field_reports_field_name() {
        let err = BoundedPayload::<2>::from_field("ediv", &[1, 2, 3]).expect_err("too long");
        assert_eq!(err, ParsingError::bound("ediv", BoundError { len: 3, max: 2 }));
    }

    #[test]
    fn fixed_requires_exact_length() {
        assert_eq!(fixed::<2>("ediv", &[1, 2]).expect("exact"), [1, 2]);
        assert_eq!(
            fixed::<2>("ediv", &[1]),
            Err(ParsingError::InvalidLength { field: "ediv", expected: 2, found: 1 })
        );
    }

    #[test]
    fn json_uses_hex_and_checks_bound() {
        let payload = BoundedPayload::<4>::new(&[0xde, 0xad]).expect("fits");
        let json = serde_json::to_string(&payload).expect("serialize");
        assert_eq!(json, "\"dead\"");
        let back: BoundedPayload<4> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, payload);
        assert!(serde_json::from_str::<BoundedPayload<1>>(&json).is_err());
    }
}
