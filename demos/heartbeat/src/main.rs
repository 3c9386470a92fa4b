//! Heartbeat example binary
//!
//! Demonstrates arming, tearing down and re-arming an owned periodic timer.

use heartbeat::{HeartbeatAction, HeartbeatEnvironment, HeartbeatReducer, HeartbeatState};
use statecraft_runtime::Store;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heartbeat=debug,statecraft_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Heartbeat: Cancellable Periodic Effects ===\n");

    let store = Store::new(
        HeartbeatState::default(),
        HeartbeatReducer::new(),
        HeartbeatEnvironment::default(),
    );

    println!(">>> Sending: Started (online, timer armed)");
    let _ = store.send(HeartbeatAction::Started).await;

    tokio::time::sleep(Duration::from_millis(3200)).await;
    let seconds = store.state(|s| s.seconds).await;
    println!("Heartbeat: {seconds}s");

    println!("\n>>> Sending: ToggleOnline (going offline, timer torn down)");
    let _ = store.send(HeartbeatAction::ToggleOnline).await;

    tokio::time::sleep(Duration::from_millis(2000)).await;
    let seconds = store.state(|s| s.seconds).await;
    println!("Heartbeat while offline: {seconds}s (unchanged)");

    println!("\n>>> Sending: ToggleOnline (back online, timer re-armed)");
    let _ = store.send(HeartbeatAction::ToggleOnline).await;

    tokio::time::sleep(Duration::from_millis(2200)).await;
    let (seconds, log) = store.state(|s| (s.seconds, s.event_log.clone())).await;
    println!("Heartbeat: {seconds}s");

    println!("\nLifecycle log (newest first):");
    for entry in log {
        println!("  - {entry}");
    }

    let _ = store.shutdown(Duration::from_secs(5)).await;
    println!("\n=== Walkthrough Complete ===");
}
