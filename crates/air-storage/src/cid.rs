//! Content identifiers
//!
//! [`Cid`] is the 32-byte Blake3 hash of a stored blob. Two identical
//! blobs always share one Cid, so the store is deduplicating by
//! construction.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Deserialize;

use crate::store::StoreError;

/// A 32-byte content identifier (Blake3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cid([u8; 32]);

impl Cid {
    /// Create a Cid from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Compute the Cid of a blob
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        let hash = blake3::hash(data);
        Self::new(*hash.as_bytes())
    }

    /// Short prefix for log lines (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for Cid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Cid {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| StoreError::InvalidCid(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(StoreError::InvalidCid(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl serde::Serialize for Cid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Cid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_is_deterministic() {
        let h1 = Cid::compute(b"metadata bytes");
        let h2 = Cid::compute(b"metadata bytes");
        assert_eq!(h1, h2);
    }

    #[test]
    fn compute_differs_on_content() {
        assert_ne!(Cid::compute(b"one"), Cid::compute(b"two"));
    }

    #[test]
    fn display_and_parse_round_trip() {
        let cid = Cid::compute(b"round trip");
        let parsed: Cid = cid.to_string().parse().unwrap();
        assert_eq!(cid, parsed);
    }

    #[test]
    fn parse_rejects_bad_length() {
        let err = "deadbeef".parse::<Cid>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidCid(_)));
    }

    #[test]
    fn short_is_hex_prefix() {
        let cid = Cid::compute(b"short");
        let short = cid.short();
        assert_eq!(short.len(), 16);
        assert!(cid.to_string().starts_with(&short));
    }

    #[test]
    fn serde_uses_hex_string() {
        let cid = Cid::compute(b"serde");
        let json = serde_json::to_string(&cid).unwrap();
        assert_eq!(json, format!("\"{cid}\""));
        let decoded: Cid = serde_json::from_str(&json).unwrap();
        assert_eq!(cid, decoded);
    }
}
