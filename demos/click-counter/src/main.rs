//! Click counter example binary
//!
//! Demonstrates the counter with its title-sync side effect.

use click_counter::{
    CounterAction, CounterEnvironment, CounterReducer, CounterState, TerminalTitleSink,
};
use statecraft_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "click_counter=debug,statecraft_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Click Counter: State With a Synced Side Effect ===\n");

    let env = CounterEnvironment::new(Arc::new(TerminalTitleSink));
    let store = Store::new(CounterState::default(), CounterReducer::new(), env);

    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Reset,
    ] {
        println!(">>> Sending: {action:?}");
        if let Ok(mut handle) = store.send(action).await {
            // Let the title sync land before reading the log
            let _ = handle.wait_with_timeout(Duration::from_secs(1)).await;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;

        let count = store.state(|s| s.count).await;
        println!("Current Count: {count}\n");
    }

    let log = store.state(|s| s.sync_log.clone()).await;
    println!("Sync log (newest first):");
    for entry in log {
        println!("  - {entry}");
    }

    println!("\n=== Walkthrough Complete ===");
}
