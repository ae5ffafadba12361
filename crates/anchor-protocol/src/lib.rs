//! # Anchor Protocol - Guarded State Anchor with Sovereign Takeover
//!
//! A single-owner-with-failover state anchor: one guard identity owns a
//! 32-byte state-root commitment, and a designated recovery identity may
//! assume guard control after 365 days of guard silence.
//!
//! ## Architecture Constraints
//!
//! This crate depends on:
//! - **Layer 1** (anchor-core): identifiers, state root, errors, clock trait
//!
//! Handlers for the clock effect live in `anchor-effects`; this crate only
//! consumes the trait, so protocol logic runs identically against real and
//! simulated time.
//!
//! ## What Belongs Here
//!
//! - The pure [`StateAnchor`] state machine and its invariants
//! - [`AnchorFact`] emission and the observable [`FactLog`]
//! - The [`AnchorCoordinator`] serialization surface
//! - Deployment configuration
//!
//! ## Design Principles
//!
//! - Every mutation is atomic: a rejected call leaves no partial effects
//! - Authorization is identity comparison, checked before any state change
//! - Eligibility is computed on demand from recorded time; no timers
//! - Liveness from the current guard always preempts a pending takeover

#![forbid(unsafe_code)]

/// The pure anchor state machine
pub mod anchor;

/// Deployment configuration
pub mod config;

/// Serialization surface over the state machine
pub mod coordinator;

/// Domain facts and the observable fact log
pub mod facts;

pub use anchor::{RecoveryStatus, StateAnchor, RECOVERY_THRESHOLD_SECS};
pub use config::AnchorConfig;
pub use coordinator::AnchorCoordinator;
pub use facts::{AnchorFact, FactLog};
