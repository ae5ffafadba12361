//! Unified error system for anchor operations
//!
//! One error type covers every failure an anchor operation can surface. All
//! failures are precondition violations the caller can resolve externally
//! (call from the authorized identity, or let time pass); there is no fatal
//! class and no partial application of effects.

use serde::{Deserialize, Serialize};

/// Unified error type for all anchor operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AnchorError {
    /// Caller lacks authorization for the attempted mutation
    #[error("access denied: {message}")]
    AccessDenied {
        /// Which authorization check failed
        message: String,
    },

    /// Recovery attempted while the guard is still considered active
    ///
    /// Distinguishable from `AccessDenied` so callers can tell "wrong person"
    /// from "right person, too early".
    #[error("recovery not yet eligible: guard active for another {remaining_secs}s")]
    RecoveryNotYetEligible {
        /// Seconds until the inactivity threshold is met
        remaining_secs: u64,
    },

    /// Invalid input or configuration
    #[error("invalid: {message}")]
    Invalid {
        /// What was invalid about the input
        message: String,
    },

    /// Clock effect failure
    #[error("time error: {message}")]
    Time {
        /// What the clock provider reported
        message: String,
    },
}

impl AnchorError {
    /// Create an access denied error
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }

    /// Create a not-yet-eligible error with the remaining wait
    pub fn not_yet_eligible(remaining_secs: u64) -> Self {
        Self::RecoveryNotYetEligible { remaining_secs }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a time error
    pub fn time(message: impl Into<String>) -> Self {
        Self::Time {
            message: message.into(),
        }
    }
}
