//! Serialization surface over the anchor state machine
//!
//! `AnchorCoordinator` is the one place mutations are sequenced: the anchor
//! lives behind a single async mutex, and a mutation reads the clock, applies
//! the transition, and appends the resulting fact before the lock is
//! released. Competing update/takeover submissions therefore resolve by
//! whichever acquires the lock first, and fact order always equals mutation
//! order.

use crate::anchor::{RecoveryStatus, StateAnchor};
use crate::config::{AnchorConfig, DEFAULT_FACT_CHANNEL_CAPACITY};
use crate::facts::{AnchorFact, FactLog};
use anchor_core::{AuthorityId, ClockEffects, Result, StateRoot};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

/// Coordinator owning one deployed anchor
pub struct AnchorCoordinator {
    anchor: Mutex<StateAnchor>,
    clock: Arc<dyn ClockEffects>,
    log: FactLog,
}

impl std::fmt::Debug for AnchorCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnchorCoordinator")
            .field("anchor", &self.anchor)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

impl AnchorCoordinator {
    /// Deploy an anchor for the given identity pair with default settings.
    pub async fn deploy(
        guard: AuthorityId,
        recovery: AuthorityId,
        clock: Arc<dyn ClockEffects>,
    ) -> Result<Self> {
        Self::deploy_inner(guard, recovery, DEFAULT_FACT_CHANNEL_CAPACITY, clock).await
    }

    /// Deploy an anchor from a validated configuration.
    pub async fn deploy_with_config(
        config: &AnchorConfig,
        clock: Arc<dyn ClockEffects>,
    ) -> Result<Self> {
        config.validate()?;
        Self::deploy_inner(
            config.guard,
            config.recovery,
            config.fact_channel_capacity,
            clock,
        )
        .await
    }

    async fn deploy_inner(
        guard: AuthorityId,
        recovery: AuthorityId,
        fact_channel_capacity: usize,
        clock: Arc<dyn ClockEffects>,
    ) -> Result<Self> {
        let now = clock.current_timestamp().await?;
        let anchor = StateAnchor::new(guard, recovery, now)?;
        info!(guard = %guard, recovery = %recovery, deployed_at_secs = now, "state anchor deployed");
        Ok(Self {
            anchor: Mutex::new(anchor),
            clock,
            log: FactLog::new(fact_channel_capacity),
        })
    }

    /// Replace the anchored root on behalf of `caller`.
    pub async fn update_state_root(&self, caller: AuthorityId, new_root: StateRoot) -> Result<()> {
        let now = self.clock.current_timestamp().await?;
        let mut anchor = self.anchor.lock().await;
        match anchor.update_state_root(caller, new_root, now) {
            Ok(fact) => {
                info!(root = %new_root, updated_at_secs = fact.recorded_at_secs(), "state root updated");
                self.log.append(fact);
                Ok(())
            }
            Err(err) => {
                warn!(caller = %caller, error = %err, "state root update rejected");
                Err(err)
            }
        }
    }

    /// Attempt the dead-man's-switch takeover on behalf of `caller`.
    pub async fn trigger_recovery(&self, caller: AuthorityId) -> Result<()> {
        let now = self.clock.current_timestamp().await?;
        let mut anchor = self.anchor.lock().await;
        match anchor.trigger_recovery(caller, now) {
            Ok(fact) => {
                info!(new_guard = %caller, triggered_at_secs = fact.recorded_at_secs(), "recovery takeover completed");
                self.log.append(fact);
                Ok(())
            }
            Err(err) => {
                warn!(caller = %caller, error = %err, "recovery takeover rejected");
                Err(err)
            }
        }
    }

    /// Current state-root commitment
    pub async fn state_root(&self) -> StateRoot {
        self.anchor.lock().await.state_root()
    }

    /// Identity currently authorized to update the root
    pub async fn guard(&self) -> AuthorityId {
        self.anchor.lock().await.guard()
    }

    /// Identity authorized to take over after inactivity
    pub async fn recovery(&self) -> AuthorityId {
        self.anchor.lock().await.recovery()
    }

    /// Epoch seconds of the last successful update or creation
    pub async fn last_update_secs(&self) -> u64 {
        self.anchor.lock().await.last_update_secs()
    }

    /// Recovery eligibility at the current clock reading
    pub async fn recovery_status(&self) -> Result<RecoveryStatus> {
        let now = self.clock.current_timestamp().await?;
        Ok(self.anchor.lock().await.recovery_status(now))
    }

    /// Snapshot of all facts in emission order
    pub fn facts(&self) -> Vec<AnchorFact> {
        self.log.facts()
    }

    /// Subscribe to facts emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<AnchorFact> {
        self.log.subscribe()
    }
}
