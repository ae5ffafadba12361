//! State-root commitment digest
//!
//! The anchored value is an opaque 32-byte commitment to externally-computed
//! application state. The anchor never interprets it; it only stores it,
//! timestamps it, and gates who may replace it.

use crate::hash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque 32-byte commitment to externally-computed state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct StateRoot(pub [u8; 32]);

impl StateRoot {
    /// The all-zero root an anchor starts from before its first update
    pub const ZERO: StateRoot = StateRoot([0u8; 32]);

    /// Create from a 32-byte digest
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Commit to arbitrary bytes using the system hash algorithm
    pub fn digest_of(data: &[u8]) -> Self {
        Self(hash::hash(data))
    }

    /// Whether this is the initial all-zero root
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for StateRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root:{}", hex::encode(self.0))
    }
}

impl FromStr for StateRoot {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Handle both raw hex and prefixed format
        let hex_str = s.strip_prefix("root:").unwrap_or(s);
        let bytes = hex::decode(hex_str)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(StateRoot(array))
    }
}
