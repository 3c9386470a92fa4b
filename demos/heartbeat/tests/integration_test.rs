//! Integration tests for the heartbeat subscription with Store
//!
//! These run the timer at a fast cadence via the environment and verify the
//! lifecycle guarantees: ticks while online, silence while offline, and
//! exactly one timer across re-arms.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use heartbeat::{HeartbeatAction, HeartbeatEnvironment, HeartbeatReducer, HeartbeatState};
use statecraft_runtime::Store;
use std::time::Duration;

fn fast_store() -> Store<HeartbeatState, HeartbeatAction, HeartbeatEnvironment, HeartbeatReducer> {
    Store::new(
        HeartbeatState::default(),
        HeartbeatReducer::new(),
        HeartbeatEnvironment::new(Duration::from_millis(20)),
    )
}

#[tokio::test]
async fn ticks_accumulate_while_online() {
    let store = fast_store();

    let _ = store.send(HeartbeatAction::Started).await.unwrap();
    tokio::time::sleep(Duration::from_millis(110)).await;

    let seconds = store.state(|s| s.seconds).await;
    assert!(seconds >= 3, "expected ticks while online, got {seconds}");
}

#[tokio::test]
async fn going_offline_stops_the_ticks() {
    let store = fast_store();

    let _ = store.send(HeartbeatAction::Started).await.unwrap();
    tokio::time::sleep(Duration::from_millis(70)).await;

    let _ = store.send(HeartbeatAction::ToggleOnline).await.unwrap();
    let at_offline = store.state(|s| s.seconds).await;

    tokio::time::sleep(Duration::from_millis(80)).await;
    let after = store.state(|s| s.seconds).await;
    assert!(
        after <= at_offline + 1,
        "ticks continued while offline: {at_offline} -> {after}"
    );
}

#[tokio::test]
async fn rearming_keeps_a_single_timer() {
    let store = fast_store();

    // Arm, tear down, re-arm twice in a row
    let _ = store.send(HeartbeatAction::Started).await.unwrap();
    let _ = store.send(HeartbeatAction::ToggleOnline).await.unwrap();
    let _ = store.send(HeartbeatAction::ToggleOnline).await.unwrap();
    let _ = store.send(HeartbeatAction::Started).await.unwrap();

    tokio::time::sleep(Duration::from_millis(110)).await;
    let _ = store.send(HeartbeatAction::ToggleOnline).await.unwrap();

    // A leaked duplicate timer would roughly double the tick rate
    let seconds = store.state(|s| s.seconds).await;
    assert!(
        (3..=7).contains(&seconds),
        "expected a single timer's ticks, got {seconds}"
    );
}

#[tokio::test]
async fn offline_start_never_subscribes() {
    let store = Store::new(
        HeartbeatState {
            online: false,
            ..HeartbeatState::default()
        },
        HeartbeatReducer::new(),
        HeartbeatEnvironment::new(Duration::from_millis(20)),
    );

    let _ = store.send(HeartbeatAction::Started).await.unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;

    let (seconds, log) = store.state(|s| (s.seconds, s.event_log.clone())).await;
    assert_eq!(seconds, 0);
    assert_eq!(log[0], "Skipped subscribing while offline.");
}
