//! Reducer logic for the watchlist form.
//!
//! Submission validates the draft, then either appends an entry and clears
//! the field or records the inline message. Nothing else is ever rejected.

use crate::types::{WatchlistAction, WatchlistEntry, WatchlistState};
use statecraft_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};

/// Environment dependencies for the watchlist reducer
#[derive(Clone)]
pub struct WatchlistEnvironment {
    /// Clock for stamping accepted entries
    pub clock: std::sync::Arc<dyn Clock>,
}

impl WatchlistEnvironment {
    /// Creates a new `WatchlistEnvironment`
    #[must_use]
    pub fn new(clock: std::sync::Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the watchlist form
#[derive(Clone, Debug)]
pub struct WatchlistReducer;

impl WatchlistReducer {
    /// Creates a new `WatchlistReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a submitted title
    fn validate_title(title: &str) -> Result<(), String> {
        if title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for WatchlistReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for WatchlistReducer {
    type State = WatchlistState;
    type Action = WatchlistAction;
    type Environment = WatchlistEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            WatchlistAction::DraftChanged { text } => {
                state.draft = text;
                smallvec![Effect::None]
            },

            WatchlistAction::Submit => {
                if let Err(message) = Self::validate_title(&state.draft) {
                    state.error = Some(message);
                    return SmallVec::new();
                }

                state.entries.push(WatchlistEntry {
                    title: state.draft.trim().to_string(),
                    added_at: env.clock.now(),
                });
                state.draft.clear();
                state.error = None;

                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statecraft_testing::{ReducerTest, assertions, test_clock};
    use std::sync::Arc;

    fn create_test_env() -> WatchlistEnvironment {
        WatchlistEnvironment::new(Arc::new(test_clock()))
    }

    fn state_with_draft(draft: &str) -> WatchlistState {
        WatchlistState {
            draft: draft.to_string(),
            ..WatchlistState::default()
        }
    }

    #[test]
    fn test_submit_success() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(create_test_env())
            .given_state(state_with_draft("  The Third Man "))
            .when_action(WatchlistAction::Submit)
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.entries[0].title, "The Third Man");
                assert!(state.draft.is_empty());
                assert!(state.error.is_none());
                assert!(state.submission_succeeded());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_submit_empty_draft() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(create_test_env())
            .given_state(WatchlistState::new())
            .when_action(WatchlistAction::Submit)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                assert_eq!(state.error.as_deref(), Some("Title cannot be empty"));
                assert!(!state.submission_succeeded());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_submit_whitespace_draft() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(create_test_env())
            .given_state(state_with_draft("   "))
            .when_action(WatchlistAction::Submit)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                assert_eq!(state.error.as_deref(), Some("Title cannot be empty"));
                // The draft is left for the user to fix
                assert_eq!(state.draft, "   ");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_draft_changed_updates_field() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(create_test_env())
            .given_state(WatchlistState::new())
            .when_action(WatchlistAction::DraftChanged {
                text: "Stalker".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.draft, "Stalker");
                assert_eq!(state.count(), 0);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_successful_submit_clears_previous_error() {
        let mut state = state_with_draft("");
        let env = create_test_env();
        let reducer = WatchlistReducer::new();

        // First submit fails and surfaces the message
        let _ = reducer.reduce(&mut state, WatchlistAction::Submit, &env);
        assert!(state.error.is_some());

        // Fixing the draft and resubmitting clears it
        let _ = reducer.reduce(
            &mut state,
            WatchlistAction::DraftChanged {
                text: "Ikiru".to_string(),
            },
            &env,
        );
        let _ = reducer.reduce(&mut state, WatchlistAction::Submit, &env);

        assert_eq!(state.count(), 1);
        assert!(state.error.is_none());
        assert!(state.submission_succeeded());
    }

    #[test]
    fn test_each_submit_adds_exactly_one_entry() {
        let mut state = WatchlistState::new();
        let env = create_test_env();
        let reducer = WatchlistReducer::new();

        for title in ["Ran", "Yojimbo", "High and Low"] {
            let _ = reducer.reduce(
                &mut state,
                WatchlistAction::DraftChanged {
                    text: title.to_string(),
                },
                &env,
            );
            let _ = reducer.reduce(&mut state, WatchlistAction::Submit, &env);
        }

        assert_eq!(state.count(), 3);
        let titles: Vec<_> = state.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Ran", "Yojimbo", "High and Low"]);
    }
}
