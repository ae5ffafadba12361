//! Identifier types for anchor participants
//!
//! Every caller of a mutating anchor operation is named by an `AuthorityId`.
//! The guard and recovery identities recorded in an anchor are `AuthorityId`s
//! too; authorization is plain identity comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identity of a participant that can call anchor operations
///
/// Opaque identifier: it carries no role information. Whether an authority is
/// the guard, the recovery identity, or neither is decided by comparing it
/// against the identities recorded in the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AuthorityId(pub Uuid);

impl AuthorityId {
    /// Create a new random authority ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Convert to bytes
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.into_bytes()
    }
}

impl Default for AuthorityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authority-{}", self.0)
    }
}

impl FromStr for AuthorityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Handle both raw UUIDs and prefixed format
        let uuid_str = s.strip_prefix("authority-").unwrap_or(s);
        Ok(AuthorityId(Uuid::parse_str(uuid_str)?))
    }
}

impl From<Uuid> for AuthorityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<AuthorityId> for Uuid {
    fn from(authority_id: AuthorityId) -> Self {
        authority_id.0
    }
}
