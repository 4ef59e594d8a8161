use sha2::{Digest, Sha256};
use std::fmt;

use super::item_id::ItemId;

/// Canonical byte encoding of an item, used to derive its render-cache key.
///
/// Implementations must write every field that identifies the item, each one
/// tagged and length-prefixed, so that distinct items never share an encoding.
pub trait StableKey {
    fn write_canonical(&self, out: &mut Vec<u8>);

    fn render_key(&self) -> RenderKey {
        let mut buf = Vec::new();
        self.write_canonical(&mut buf);
        RenderKey::from_canonical(&buf)
    }
}

/// SHA-256 of an item's canonical encoding, hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderKey(String);

impl RenderKey {
    pub fn from_canonical(bytes: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn write_field(out: &mut Vec<u8>, tag: &str, value: &[u8]) {
    out.extend_from_slice(&(tag.len() as u64).to_be_bytes());
    out.extend_from_slice(tag.as_bytes());
    out.extend_from_slice(&(value.len() as u64).to_be_bytes());
    out.extend_from_slice(value);
}

impl StableKey for ItemId {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        write_field(out, "item_id", self.as_str().as_bytes());
    }
}
