//! The anchor state machine
//!
//! `StateAnchor` is pure and synchronous: callers pass the caller identity and
//! the current time in explicitly, and every transition either applies fully
//! and returns the fact it produced, or rejects without touching state. The
//! async surface that injects real time lives in [`crate::coordinator`].
//!
//! Two logical states:
//! - **Active** — the guard is in control and recovery is blocked
//! - **Eligible** — the inactivity threshold has elapsed and the recovery
//!   identity may take over
//!
//! Active→Eligible is purely a function of elapsed time; no explicit
//! transition is stored. A guard update while Eligible re-arms back to Active
//! by refreshing the liveness timestamp.

use crate::facts::AnchorFact;
use anchor_core::{AnchorError, AuthorityId, Result, StateRoot};
use serde::{Deserialize, Serialize};

/// Guard inactivity required before recovery becomes eligible: 365 days.
pub const RECOVERY_THRESHOLD_SECS: u64 = 365 * 24 * 60 * 60;

/// Recovery eligibility, computed on demand from recorded time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryStatus {
    /// The guard is considered live; takeover is blocked.
    Active {
        /// Seconds until takeover becomes eligible
        remaining_secs: u64,
    },
    /// The inactivity threshold has elapsed; the recovery identity may take over.
    Eligible,
}

/// Single-owner-with-failover state anchor
///
/// Holds one mutable state-root commitment and the guard/recovery identity
/// pair, and enforces who may update the root and when control may transfer.
/// Created once per deployment; never destroyed, only updated or transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAnchor {
    /// Identity authorized to update state; reassigned only by recovery
    guard: AuthorityId,
    /// Identity authorized to take over after inactivity; immutable
    recovery: AuthorityId,
    /// Current state-root commitment
    state_root: StateRoot,
    /// Epoch seconds of the last successful update or creation
    last_update_secs: u64,
}

impl StateAnchor {
    /// Create an anchor controlled by `guard`, with `recovery` as failover.
    ///
    /// The two identities must be distinct; a same-identity deployment would
    /// have no failover at all.
    pub fn new(guard: AuthorityId, recovery: AuthorityId, now_secs: u64) -> Result<Self> {
        if guard == recovery {
            return Err(AnchorError::invalid(
                "guard and recovery identities must be distinct",
            ));
        }
        Ok(Self {
            guard,
            recovery,
            state_root: StateRoot::ZERO,
            last_update_secs: now_secs,
        })
    }

    /// Identity currently authorized to update the root
    pub fn guard(&self) -> AuthorityId {
        self.guard
    }

    /// Identity authorized to take over after inactivity
    pub fn recovery(&self) -> AuthorityId {
        self.recovery
    }

    /// Current state-root commitment
    pub fn state_root(&self) -> StateRoot {
        self.state_root
    }

    /// Epoch seconds of the last successful update or creation
    pub fn last_update_secs(&self) -> u64 {
        self.last_update_secs
    }

    /// Replace the anchored root.
    ///
    /// Only the current guard may call this. Re-submitting the current root is
    /// allowed and still refreshes the liveness timestamp, re-arming the
    /// recovery threshold.
    pub fn update_state_root(
        &mut self,
        caller: AuthorityId,
        new_root: StateRoot,
        now_secs: u64,
    ) -> Result<AnchorFact> {
        if caller != self.guard {
            return Err(AnchorError::access_denied("caller is not the guard"));
        }
        self.state_root = new_root;
        self.touch(now_secs);
        Ok(AnchorFact::StateUpdated {
            root: new_root,
            updated_at_secs: self.last_update_secs,
        })
    }

    /// Transfer guard control to the recovery identity.
    ///
    /// Identity is checked before eligibility: a non-recovery caller gets
    /// `AccessDenied` regardless of elapsed time. Eligibility requires the
    /// guard to have been silent for strictly more than
    /// [`RECOVERY_THRESHOLD_SECS`]. On success the threshold re-arms against
    /// the new guard.
    pub fn trigger_recovery(&mut self, caller: AuthorityId, now_secs: u64) -> Result<AnchorFact> {
        if caller != self.recovery {
            return Err(AnchorError::access_denied(
                "caller is not the recovery identity",
            ));
        }
        if let RecoveryStatus::Active { remaining_secs } = self.recovery_status(now_secs) {
            return Err(AnchorError::not_yet_eligible(remaining_secs));
        }
        self.guard = self.recovery;
        self.touch(now_secs);
        Ok(AnchorFact::RecoveryTriggered {
            new_guard: self.guard,
            triggered_at_secs: self.last_update_secs,
        })
    }

    /// Recovery eligibility at the given time.
    pub fn recovery_status(&self, now_secs: u64) -> RecoveryStatus {
        let elapsed = now_secs.saturating_sub(self.last_update_secs);
        if elapsed > RECOVERY_THRESHOLD_SECS {
            RecoveryStatus::Eligible
        } else {
            RecoveryStatus::Active {
                // Strict threshold: eligibility begins one second past it.
                remaining_secs: RECOVERY_THRESHOLD_SECS - elapsed + 1,
            }
        }
    }

    /// Refresh the liveness timestamp. Never moves backwards, so the
    /// monotonicity invariant holds even against a misbehaving clock.
    fn touch(&mut self, now_secs: u64) {
        self.last_update_secs = self.last_update_secs.max(now_secs);
    }
}
