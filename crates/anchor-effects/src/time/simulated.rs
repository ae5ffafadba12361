//! Simulated clock handler for testing and simulation

use anchor_core::effects::{ClockEffects, TimeError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Simulated clock for testing and simulation
///
/// Cloning shares the underlying clock, so a test can keep a handle and
/// advance time underneath a coordinator that holds another handle. This is
/// how inactivity-threshold scenarios are exercised without waiting a year.
#[derive(Debug, Clone)]
pub struct SimulatedClockHandler {
    /// Current simulated time in milliseconds
    current_time: Arc<Mutex<u64>>,
}

impl SimulatedClockHandler {
    /// Create a new simulated clock starting at the given time
    pub fn new(start_time_ms: u64) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start_time_ms)),
        }
    }

    /// Create a simulated clock starting at Unix epoch
    pub fn new_at_epoch() -> Self {
        Self::new(0)
    }

    /// Advance simulated time by the given duration in milliseconds
    pub fn advance_time(&self, duration_ms: u64) {
        let mut time = self.current_time.lock().unwrap();
        *time += duration_ms;
    }

    /// Advance simulated time by the given duration in seconds
    pub fn advance_secs(&self, duration_secs: u64) {
        self.advance_time(duration_secs * 1000);
    }

    /// Set the absolute simulated time
    pub fn set_time(&self, time_ms: u64) {
        let mut time = self.current_time.lock().unwrap();
        *time = time_ms;
    }

    /// Get the current simulated time in milliseconds
    pub fn get_time(&self) -> u64 {
        *self.current_time.lock().unwrap()
    }
}

impl Default for SimulatedClockHandler {
    fn default() -> Self {
        Self::new_at_epoch()
    }
}

#[async_trait]
impl ClockEffects for SimulatedClockHandler {
    async fn current_timestamp(&self) -> Result<u64, TimeError> {
        Ok(*self.current_time.lock().unwrap() / 1000)
    }

    async fn current_timestamp_millis(&self) -> Result<u64, TimeError> {
        Ok(*self.current_time.lock().unwrap())
    }
}
