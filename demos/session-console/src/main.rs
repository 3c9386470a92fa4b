//! Session console example binary
//!
//! Drives the composed screen through a banner change and a few typed
//! events, then prints the interaction log.

use session_console::{SessionAction, SessionEnvironment, SessionReducer, SessionState};
use statecraft_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "session_console=debug,statecraft_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Session Console: Composed Reducers ===\n");

    let store = Store::new(
        SessionState::default(),
        SessionReducer::new(),
        SessionEnvironment,
    );

    let banner = store.state(|s| s.banner.clone()).await;
    println!("Banner: {banner}");

    println!("\n>>> Sending: SetBanner");
    let _ = store
        .send(SessionAction::SetBanner {
            message: "Enjoy your training!".to_string(),
        })
        .await;
    let banner = store.state(|s| s.banner.clone()).await;
    println!("Banner: {banner}");

    println!("\n>>> Sending: PointerClicked, DraftChanged ×3, Submitted");
    let _ = store.send(SessionAction::PointerClicked { x: 120, y: 48 }).await;
    for text in ["h", "hi", "hi there"] {
        let _ = store
            .send(SessionAction::DraftChanged { text: text.to_string() })
            .await;
    }
    let _ = store.send(SessionAction::Submitted).await;

    let console = store.state(|s| s.console.clone()).await;
    println!("\nConsole Output (newest first):");
    for entry in console.entries {
        println!("  - {entry}");
    }

    println!("\n=== Walkthrough Complete ===");
}
