//! Effect trait definitions
//!
//! Traits only; handler implementations live in `anchor-effects`.

pub mod time;

pub use time::{ClockEffects, TimeError};
