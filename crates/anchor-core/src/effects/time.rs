//! Clock effect trait definition
//!
//! The anchor never reads the wall clock directly: the current time is
//! injected through `ClockEffects` so production uses the real clock while
//! tests drive a simulated one. Recovery eligibility is a pure function of
//! recorded versus current time, so this is the only time-shaped effect the
//! system needs — no timers, no schedulers.

use crate::errors::AnchorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error type for clock operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum TimeError {
    /// The clock provider could not produce a reading
    #[error("clock unavailable: {reason}")]
    Unavailable {
        /// What the provider reported
        reason: String,
    },
}

impl From<TimeError> for AnchorError {
    fn from(err: TimeError) -> Self {
        AnchorError::time(err.to_string())
    }
}

/// Wall-clock provider for timestamps and eligibility checks.
#[async_trait]
pub trait ClockEffects: Send + Sync {
    /// Current Unix timestamp in seconds.
    async fn current_timestamp(&self) -> Result<u64, TimeError>;

    /// Current Unix timestamp in milliseconds.
    async fn current_timestamp_millis(&self) -> Result<u64, TimeError>;
}

/// Blanket implementation for Arc<T> where T: ClockEffects
#[async_trait]
impl<T: ClockEffects + ?Sized> ClockEffects for std::sync::Arc<T> {
    async fn current_timestamp(&self) -> Result<u64, TimeError> {
        (**self).current_timestamp().await
    }

    async fn current_timestamp_millis(&self) -> Result<u64, TimeError> {
        (**self).current_timestamp_millis().await
    }
}
