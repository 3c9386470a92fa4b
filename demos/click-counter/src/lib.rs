//! # Click Counter Example
//!
//! A counter that keeps the window title in sync with its state,
//! demonstrating the Statecraft architecture.
//!
//! This example showcases:
//! - A synchronous state machine (increment, decrement, reset)
//! - A side effect on every change: the count is mirrored to a title sink,
//!   the way a browser app mirrors state into `document.title`
//! - Effect feedback: the sync reports back and lands in a visible log
//!
//! ## Architecture
//!
//! The reducer mutates the count synchronously, then describes one `Future`
//! effect that pushes "Clicked N times" through the [`TitleSink`]. The sink
//! confirmation comes back as [`CounterAction::TitleSynced`] and is logged,
//! so the effect lifecycle is observable in state.
//!
//! ## Example
//!
//! ```no_run
//! use click_counter::{CounterAction, CounterEnvironment, CounterReducer, CounterState};
//! use click_counter::TerminalTitleSink;
//! use statecraft_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let env = CounterEnvironment::new(Arc::new(TerminalTitleSink));
//! let store = Store::new(CounterState::default(), CounterReducer::new(), env);
//!
//! let _ = store.send(CounterAction::Increment).await;
//! let count = store.state(|s| s.count).await;
//! assert_eq!(count, 1);
//! # }
//! ```

use statecraft_core::{SmallVec, async_effect, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Number of sync log entries kept (most recent first)
pub const SYNC_LOG_CAP: usize = 6;

/// Where the mirrored title is pushed
///
/// The production sink retitles the terminal window; tests record what
/// would have been shown.
pub trait TitleSink: Send + Sync {
    /// Replace the window title
    fn set_title(&self, title: &str);
}

/// Sink that retitles the terminal via the OSC 0 escape sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalTitleSink;

impl TitleSink for TerminalTitleSink {
    fn set_title(&self, title: &str) {
        use std::io::Write;

        // OSC 0 sets both icon name and window title
        print!("\x1b]0;{title}\x07");
        let _ = std::io::stdout().flush();
    }
}

/// Counter state
#[derive(Debug, Clone, Default)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
    /// Title sync confirmations, most recent first, capped at [`SYNC_LOG_CAP`]
    pub sync_log: Vec<String>,
}

/// Counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
    /// Reset the counter to 0 (a no-op while already at 0)
    Reset,
    /// The title sink accepted a new title (fed back by the sync effect)
    TitleSynced {
        /// The title that was pushed
        title: String,
    },
}

/// Counter environment
#[derive(Clone)]
pub struct CounterEnvironment {
    /// Sink the count is mirrored into
    pub titles: Arc<dyn TitleSink>,
}

impl CounterEnvironment {
    /// Create a new counter environment with the given title sink
    #[must_use]
    pub fn new(titles: Arc<dyn TitleSink>) -> Self {
        Self { titles }
    }
}

/// Counter reducer
///
/// Every change to the count emits one title-sync effect; the fed-back
/// confirmation is the only thing that writes the sync log.
#[derive(Debug, Clone, Copy)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Describe the effect that mirrors `count` into the title sink
    fn sync_title(env: &CounterEnvironment, count: i64) -> Effect<CounterAction> {
        let title = format!("Clicked {count} times");
        let sink = Arc::clone(&env.titles);

        async_effect! {
            sink.set_title(&title);
            Some(CounterAction::TitleSynced { title })
        }
    }
}

impl Default for CounterReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = CounterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.count += 1;
                smallvec![Self::sync_title(env, state.count)]
            },

            CounterAction::Decrement => {
                state.count -= 1;
                smallvec![Self::sync_title(env, state.count)]
            },

            CounterAction::Reset => {
                // Resetting an already-zero counter changes nothing, so
                // nothing is synced either
                if state.count == 0 {
                    return SmallVec::new();
                }
                state.count = 0;
                smallvec![Self::sync_title(env, state.count)]
            },

            CounterAction::TitleSynced { title } => {
                state.sync_log.insert(0, format!("Synced window title to \"{title}\""));
                state.sync_log.truncate(SYNC_LOG_CAP);
                smallvec![Effect::None]
            },
        }
    }
}
