//! Reducers for the session console.
//!
//! Each section keeps its own reducer; the screen-level reducer is their
//! composition. The banner reducer runs over the whole state, the console
//! reducer is scoped to its slice, and both observe the same action stream.

use crate::types::{ConsoleState, SessionAction, SessionState};
use statecraft_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use statecraft_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Environment for the session screen
///
/// The screen is fully synchronous, so there is nothing to inject yet.
#[derive(Clone, Debug, Default)]
pub struct SessionEnvironment;

/// Reducer for the banner section
///
/// Handles banner replacement and nothing else.
#[derive(Clone, Debug, Default)]
pub struct BannerReducer;

impl Reducer for BannerReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = SessionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if let SessionAction::SetBanner { message } = action {
            state.banner = message;
        }
        smallvec![Effect::None]
    }
}

/// Reducer for the event console section
///
/// Mirrors the input field and records its own events in the console log.
/// Banner changes are not console events and leave it untouched.
#[derive(Clone, Debug, Default)]
pub struct ConsoleReducer;

impl Reducer for ConsoleReducer {
    type State = ConsoleState;
    type Action = SessionAction;
    type Environment = SessionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::PointerClicked { x, y } => {
                state.log(format!("Pointer click captured at ({x}, {y})"));
            },
            SessionAction::DraftChanged { text } => {
                state.log(format!("Input changed: \"{text}\""));
                state.draft = text;
            },
            SessionAction::Submitted => {
                state.log(format!("Form submitted with payload: \"{}\"", state.draft));
            },
            SessionAction::SetBanner { .. } => {},
        }
        smallvec![Effect::None]
    }
}

/// The composed screen reducer
///
/// Wraps the boxed composition in an `Arc` so the store can clone it into
/// effect tasks.
#[derive(Clone)]
pub struct SessionReducer {
    inner: Arc<CombinedReducer<SessionState, SessionAction, SessionEnvironment>>,
}

impl SessionReducer {
    /// Compose the banner reducer with the scoped console reducer
    #[must_use]
    pub fn new() -> Self {
        let console = scope_reducer(
            ConsoleReducer,
            |session: &SessionState| &session.console,
            |session: &mut SessionState, console: ConsoleState| {
                session.console = console;
            },
        );

        Self {
            inner: Arc::new(combine_reducers(vec![
                Box::new(BannerReducer),
                Box::new(console),
            ])),
        }
    }
}

impl Default for SessionReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = SessionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        self.inner.reduce(state, action, env)
    }
}
