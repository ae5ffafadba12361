//! # Anchor Effects - Layer 3: Effect Handler Implementations
//!
//! Standard implementations of the effect traits defined in `anchor-core`.
//! Protocol code receives a handler through trait objects and stays agnostic
//! about whether time is real or simulated.

#![forbid(unsafe_code)]

pub mod time;

pub use time::{RealClockHandler, SimulatedClockHandler};
