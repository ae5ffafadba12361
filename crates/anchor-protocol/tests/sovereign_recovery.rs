use anchor_core::{AnchorError, AuthorityId, StateRoot};
use anchor_effects::SimulatedClockHandler;
use anchor_protocol::{AnchorCoordinator, AnchorFact, RecoveryStatus, RECOVERY_THRESHOLD_SECS};
use assert_matches::assert_matches;
use std::sync::Arc;

const DAY_SECS: u64 = 24 * 60 * 60;
// 2023-11-14T22:13:20Z, an arbitrary genesis instant
const GENESIS_MS: u64 = 1_700_000_000_000;

struct Deployment {
    coordinator: AnchorCoordinator,
    clock: SimulatedClockHandler,
    guard: AuthorityId,
    recovery: AuthorityId,
    attacker: AuthorityId,
}

async fn deploy() -> Deployment {
    let clock = SimulatedClockHandler::new(GENESIS_MS);
    let guard = AuthorityId::new();
    let recovery = AuthorityId::new();
    let attacker = AuthorityId::new();
    let coordinator = AnchorCoordinator::deploy(guard, recovery, Arc::new(clock.clone()))
        .await
        .expect("deployment should succeed");
    Deployment {
        coordinator,
        clock,
        guard,
        recovery,
        attacker,
    }
}

#[tokio::test]
async fn guard_can_update_the_state() {
    let d = deploy().await;
    let new_root = StateRoot::digest_of(b"State_V1");

    d.coordinator
        .update_state_root(d.guard, new_root)
        .await
        .expect("guard update should succeed");

    assert_eq!(d.coordinator.state_root().await, new_root);
    assert_matches!(
        d.coordinator.facts().as_slice(),
        [AnchorFact::StateUpdated { root, .. }] if *root == new_root
    );
}

#[tokio::test]
async fn attacker_update_is_rejected() {
    let d = deploy().await;
    let deployed_at = d.coordinator.last_update_secs().await;
    let fake_root = StateRoot::digest_of(b"Malicious_State");

    let err = d
        .coordinator
        .update_state_root(d.attacker, fake_root)
        .await
        .expect_err("attacker update must be rejected");

    assert_matches!(err, AnchorError::AccessDenied { .. });
    assert!(d.coordinator.state_root().await.is_zero());
    assert_eq!(d.coordinator.last_update_secs().await, deployed_at);
    assert!(d.coordinator.facts().is_empty());
}

#[tokio::test]
async fn recovery_is_rejected_while_the_guard_is_active() {
    let d = deploy().await;

    let err = d
        .coordinator
        .trigger_recovery(d.recovery)
        .await
        .expect_err("immediate recovery must be rejected");

    assert_matches!(err, AnchorError::RecoveryNotYetEligible { .. });
    assert_eq!(d.coordinator.guard().await, d.guard);
}

#[tokio::test]
async fn recovery_succeeds_after_a_year_of_silence() {
    let d = deploy().await;
    let mut watcher = d.coordinator.subscribe();

    d.clock.advance_secs(RECOVERY_THRESHOLD_SECS + 1);

    d.coordinator
        .trigger_recovery(d.recovery)
        .await
        .expect("takeover should succeed after 365 days of silence");

    assert_eq!(d.coordinator.guard().await, d.recovery);
    let fact = watcher.recv().await.expect("takeover fact should stream");
    assert_matches!(
        fact,
        AnchorFact::RecoveryTriggered { new_guard, .. } if new_guard == d.recovery
    );
}

#[tokio::test]
async fn old_guard_is_locked_out_after_takeover() {
    let d = deploy().await;
    d.clock.advance_secs(RECOVERY_THRESHOLD_SECS + 1);
    d.coordinator
        .trigger_recovery(d.recovery)
        .await
        .expect("takeover");

    let err = d
        .coordinator
        .update_state_root(d.guard, StateRoot::digest_of(b"State_V2"))
        .await
        .expect_err("former guard lost update authorization");
    assert_matches!(err, AnchorError::AccessDenied { .. });

    d.coordinator
        .update_state_root(d.recovery, StateRoot::digest_of(b"State_V2"))
        .await
        .expect("the new guard may update");
}

#[tokio::test]
async fn resubmitting_the_same_root_rearms_the_threshold() {
    let d = deploy().await;
    let root = StateRoot::digest_of(b"State_V1");

    d.coordinator
        .update_state_root(d.guard, root)
        .await
        .expect("initial update");

    // Half a year later the guard proves liveness with an identical root.
    d.clock.advance_secs(200 * DAY_SECS);
    d.coordinator
        .update_state_root(d.guard, root)
        .await
        .expect("identical resubmission still counts as liveness");

    // 364 days after the refresh: still inside the window.
    d.clock.advance_secs(364 * DAY_SECS);
    let err = d
        .coordinator
        .trigger_recovery(d.recovery)
        .await
        .expect_err("threshold was re-armed by the resubmission");
    assert_matches!(err, AnchorError::RecoveryNotYetEligible { .. });

    // Two more days pass the re-armed threshold.
    d.clock.advance_secs(2 * DAY_SECS);
    d.coordinator
        .trigger_recovery(d.recovery)
        .await
        .expect("takeover once the re-armed threshold elapses");
}

#[tokio::test]
async fn eligible_takeover_by_a_non_recovery_identity_is_access_denied() {
    let d = deploy().await;
    d.clock.advance_secs(RECOVERY_THRESHOLD_SECS + 1);

    let err = d
        .coordinator
        .trigger_recovery(d.attacker)
        .await
        .expect_err("identity check precedes the eligibility check");
    assert_matches!(err, AnchorError::AccessDenied { .. });
    assert_eq!(d.coordinator.guard().await, d.guard);
}

#[tokio::test]
async fn recovery_status_tracks_elapsed_time() {
    let d = deploy().await;

    assert_matches!(
        d.coordinator.recovery_status().await.expect("status"),
        RecoveryStatus::Active { remaining_secs } if remaining_secs == RECOVERY_THRESHOLD_SECS + 1
    );

    d.clock.advance_secs(RECOVERY_THRESHOLD_SECS);
    assert_matches!(
        d.coordinator.recovery_status().await.expect("status"),
        RecoveryStatus::Active { remaining_secs: 1 }
    );

    d.clock.advance_secs(1);
    assert_matches!(
        d.coordinator.recovery_status().await.expect("status"),
        RecoveryStatus::Eligible
    );
}

#[tokio::test]
async fn watchers_observe_facts_in_mutation_order() {
    let d = deploy().await;
    let mut watcher = d.coordinator.subscribe();

    let first = StateRoot::digest_of(b"State_V1");
    let second = StateRoot::digest_of(b"State_V2");
    d.coordinator
        .update_state_root(d.guard, first)
        .await
        .expect("first update");
    d.clock.advance_secs(60);
    d.coordinator
        .update_state_root(d.guard, second)
        .await
        .expect("second update");

    let streamed = [
        watcher.recv().await.expect("first fact"),
        watcher.recv().await.expect("second fact"),
    ];
    assert_matches!(&streamed[0], AnchorFact::StateUpdated { root, .. } if *root == first);
    assert_matches!(&streamed[1], AnchorFact::StateUpdated { root, .. } if *root == second);

    // The polled snapshot agrees with the stream.
    assert_eq!(d.coordinator.facts(), streamed);
}

#[tokio::test]
async fn deployment_requires_distinct_identities() {
    let clock = SimulatedClockHandler::new(GENESIS_MS);
    let id = AuthorityId::new();

    let err = AnchorCoordinator::deploy(id, id, Arc::new(clock))
        .await
        .expect_err("guard and recovery must differ");
    assert_matches!(err, AnchorError::Invalid { .. });
}
