//! Watchlist example binary
//!
//! Walks the form through a rejected submit, a fix, and a few accepted
//! titles.

use statecraft_core::environment::SystemClock;
use statecraft_runtime::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchlist::{WatchlistAction, WatchlistEnvironment, WatchlistReducer, WatchlistState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchlist=debug,statecraft_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Watchlist: Form Handling & Validation ===\n");

    let env = WatchlistEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(WatchlistState::new(), WatchlistReducer::new(), env);

    // Submitting an empty field surfaces the inline message
    println!(">>> Sending: Submit (empty field)");
    let _ = store.send(WatchlistAction::Submit).await;
    if let Some(message) = store.state(|s| s.error.clone()).await {
        println!("Validation: {message}");
    }

    // Type a title and submit it
    for title in ["Pather Panchali", "Charulata"] {
        println!("\n>>> Typing: \"{title}\", then Submit");
        let _ = store
            .send(WatchlistAction::DraftChanged { text: title.to_string() })
            .await;
        let _ = store.send(WatchlistAction::Submit).await;

        let (count, succeeded) = store
            .state(|s| (s.count(), s.submission_succeeded()))
            .await;
        if succeeded {
            println!("Great! Title added successfully. ({count} so far)");
        }
    }

    let titles = store
        .state(|s| s.entries.iter().map(|e| e.title.clone()).collect::<Vec<_>>())
        .await;
    println!("\nWatchlist:");
    for title in titles {
        println!("  - {title}");
    }

    println!("\n=== Walkthrough Complete ===");
}
