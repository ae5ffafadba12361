//! Real clock handler for production use

use anchor_core::effects::{ClockEffects, TimeError};
use async_trait::async_trait;
use std::time::{SystemTime, UNIX_EPOCH};

/// Real clock handler backed by the system wall clock
#[derive(Debug, Clone, Default)]
pub struct RealClockHandler;

impl RealClockHandler {
    /// Create a new real clock handler
    pub fn new() -> Self {
        Self
    }

    fn since_epoch() -> Result<std::time::Duration, TimeError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::Unavailable {
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl ClockEffects for RealClockHandler {
    async fn current_timestamp(&self) -> Result<u64, TimeError> {
        Self::since_epoch().map(|d| d.as_secs())
    }

    async fn current_timestamp_millis(&self) -> Result<u64, TimeError> {
        Self::since_epoch().map(|d| d.as_millis() as u64)
    }
}
