//! Deployment configuration
//!
//! An anchor deployment is described by a small TOML document naming the two
//! identities and, optionally, the streaming buffer size:
//!
//! ```toml
//! guard = "5f8c1a9e-0d5b-4b2a-9b6e-3f1d2c4a8e7f"
//! recovery = "0b7e2d4c-6a1f-4e8d-b3c5-9a2f1e6d8c4b"
//! fact_channel_capacity = 128
//! ```
//!
//! The 365-day recovery threshold is a compiled-in constant, deliberately not
//! configurable: the takeover window is part of the anchor's contract, not a
//! deployment knob.

use anchor_core::{AnchorError, AuthorityId, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default buffer size for the fact streaming channel
pub const DEFAULT_FACT_CHANNEL_CAPACITY: usize = 64;

fn default_fact_channel_capacity() -> usize {
    DEFAULT_FACT_CHANNEL_CAPACITY
}

/// Configuration for one anchor deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorConfig {
    /// Identity initially authorized to update the root
    pub guard: AuthorityId,
    /// Identity authorized to take over after inactivity
    pub recovery: AuthorityId,
    /// Buffer size for the fact streaming channel
    #[serde(default = "default_fact_channel_capacity")]
    pub fact_channel_capacity: usize,
}

impl AnchorConfig {
    /// Configuration with default capacity for the given identity pair.
    pub fn new(guard: AuthorityId, recovery: AuthorityId) -> Self {
        Self {
            guard,
            recovery,
            fact_channel_capacity: DEFAULT_FACT_CHANNEL_CAPACITY,
        }
    }

    /// Parse from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| AnchorError::invalid(format!("invalid config: {e}")))
    }

    /// Load from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AnchorError::invalid(format!("failed to read config file: {e}")))?;
        Self::from_toml_str(&raw)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.guard == self.recovery {
            return Err(AnchorError::invalid(
                "guard and recovery identities must be distinct",
            ));
        }
        if self.fact_channel_capacity == 0 {
            return Err(AnchorError::invalid(
                "fact_channel_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}
