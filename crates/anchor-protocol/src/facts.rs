//! Anchor domain facts and the observable fact log
//!
//! Every successful mutation emits exactly one fact. Facts are immutable and
//! appended in mutation order; the log supports both polling a snapshot and
//! streaming subsequent facts over a broadcast channel, so external watchers
//! can verify liveness and takeovers without querying anchor state.

use anchor_core::{AuthorityId, StateRoot};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tokio::sync::broadcast;

/// Fact type discriminant for [`AnchorFact::StateUpdated`]
pub const FACT_TYPE_STATE_UPDATED: &str = "state_updated";

/// Fact type discriminant for [`AnchorFact::RecoveryTriggered`]
pub const FACT_TYPE_RECOVERY_TRIGGERED: &str = "recovery_triggered";

/// Facts emitted by successful anchor mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorFact {
    /// The guard replaced (or re-committed) the anchored root
    StateUpdated {
        /// The root now anchored
        root: StateRoot,
        /// Epoch seconds recorded for the update
        updated_at_secs: u64,
    },

    /// Guard control transferred to the recovery identity
    RecoveryTriggered {
        /// The identity now in control
        new_guard: AuthorityId,
        /// Epoch seconds recorded for the takeover
        triggered_at_secs: u64,
    },
}

impl AnchorFact {
    /// Stable discriminant for filtering and storage
    pub fn fact_type(&self) -> &'static str {
        match self {
            AnchorFact::StateUpdated { .. } => FACT_TYPE_STATE_UPDATED,
            AnchorFact::RecoveryTriggered { .. } => FACT_TYPE_RECOVERY_TRIGGERED,
        }
    }

    /// Epoch seconds the fact was recorded at
    pub fn recorded_at_secs(&self) -> u64 {
        match self {
            AnchorFact::StateUpdated {
                updated_at_secs, ..
            } => *updated_at_secs,
            AnchorFact::RecoveryTriggered {
                triggered_at_secs, ..
            } => *triggered_at_secs,
        }
    }
}

/// Append-only, observable log of anchor facts
///
/// Appends happen inside the coordinator's serialization point, so log order
/// equals mutation order. Watchers either poll [`FactLog::facts`] or stream
/// from [`FactLog::subscribe`]; a slow streaming watcher can lag and miss
/// facts (broadcast semantics), but the polled snapshot is always complete.
#[derive(Debug)]
pub struct FactLog {
    facts: Mutex<Vec<AnchorFact>>,
    sender: broadcast::Sender<AnchorFact>,
}

impl FactLog {
    /// Create an empty log whose streaming channel buffers `capacity` facts.
    pub fn new(capacity: usize) -> Self {
        // broadcast requires a non-zero buffer
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            facts: Mutex::new(Vec::new()),
            sender,
        }
    }

    /// Append a fact and notify streaming watchers.
    pub fn append(&self, fact: AnchorFact) {
        self.facts.lock().unwrap().push(fact.clone());
        // Send fails only when no watcher is subscribed
        let _ = self.sender.send(fact);
    }

    /// Snapshot of all facts in emission order
    pub fn facts(&self) -> Vec<AnchorFact> {
        self.facts.lock().unwrap().clone()
    }

    /// Number of facts recorded so far
    pub fn len(&self) -> usize {
        self.facts.lock().unwrap().len()
    }

    /// Whether no fact has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.facts.lock().unwrap().is_empty()
    }

    /// Subscribe to facts appended after this call
    pub fn subscribe(&self) -> broadcast::Receiver<AnchorFact> {
        self.sender.subscribe()
    }
}
