//! # Anchor Core - Layer 1: Core Types and Effects
//!
//! Foundational types for the chronos anchor: identifier newtypes, the
//! state-root digest, the unified error type, and the clock effect trait.
//!
//! ## What Belongs Here
//!
//! - Identifier newtypes (`AuthorityId`)
//! - The `StateRoot` commitment digest and the hashing entry point
//! - The unified `AnchorError` and `Result` alias
//! - Effect trait *definitions* (`ClockEffects`)
//!
//! ## What Does NOT Belong Here
//!
//! - Effect handler implementations (belong in anchor-effects)
//! - Anchor state-machine semantics (belong in anchor-protocol)

#![forbid(unsafe_code)]

pub mod effects;
pub mod errors;
pub mod hash;
pub mod identifiers;
pub mod state_root;

pub use effects::{ClockEffects, TimeError};
pub use errors::AnchorError;
pub use identifiers::AuthorityId;
pub use state_root::StateRoot;

/// Standard result type for anchor operations
pub type Result<T> = std::result::Result<T, AnchorError>;
