//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//!
//! Composition is how a screen made of several independent sections (a
//! banner, an input console, an interaction log) becomes one reducer driving
//! one store: each section keeps its own small reducer, and the screen
//! combines them.

use crate::effect::Effect;
use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and
/// concatenated. This is useful when you want to split screen logic across
/// multiple implementations - for example a feature reducer paired with a
/// logging reducer that observes every action.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use statecraft_core::{Effect, Reducer, SmallVec, smallvec};
/// use statecraft_core::composition::combine_reducers;
///
/// #[derive(Clone, Default)]
/// struct ScreenState {
///     banner: String,
///     interactions: usize,
/// }
///
/// #[derive(Clone)]
/// enum ScreenAction {
///     SetBanner(String),
/// }
///
/// struct BannerReducer;
/// struct AuditReducer;
///
/// impl Reducer for BannerReducer {
///     type State = ScreenState;
///     type Action = ScreenAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut Self::State,
///         action: Self::Action,
///         _env: &Self::Environment,
///     ) -> SmallVec<[Effect<Self::Action>; 4]> {
///         let ScreenAction::SetBanner(message) = action;
///         state.banner = message;
///         smallvec![Effect::None]
///     }
/// }
///
/// impl Reducer for AuditReducer {
///     type State = ScreenState;
///     type Action = ScreenAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut Self::State,
///         _action: Self::Action,
///         _env: &Self::Environment,
///     ) -> SmallVec<[Effect<Self::Action>; 4]> {
///         state.interactions += 1;
///         smallvec![Effect::None]
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(BannerReducer), Box::new(AuditReducer)]);
///
/// let mut state = ScreenState::default();
/// let _ = combined.reduce(&mut state, ScreenAction::SetBanner("hi".into()), &());
/// assert_eq!(state.banner, "hi");
/// assert_eq!(state.interactions, 1);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// The parts are `Send + Sync` so the combination can drive a Store like any
/// single reducer.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> smallvec::SmallVec<[Effect<Self::Action>; 4]> {
        self.reducers
            .iter()
            .flat_map(|reducer| reducer.reduce(state, action.clone(), env))
            .collect()
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows you to reuse reducers designed for smaller state types
/// within a larger screen state - the child owns its slice, the parent owns
/// the composition.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (subset of `S`)
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use statecraft_core::{Effect, Reducer, SmallVec, smallvec};
/// use statecraft_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct ConsoleState {
///     draft: String,
/// }
///
/// #[derive(Clone)]
/// enum ScreenAction {
///     DraftChanged(String),
/// }
///
/// struct ConsoleReducer;
///
/// impl Reducer for ConsoleReducer {
///     type State = ConsoleState;
///     type Action = ScreenAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut Self::State,
///         action: Self::Action,
///         _env: &Self::Environment,
///     ) -> SmallVec<[Effect<Self::Action>; 4]> {
///         let ScreenAction::DraftChanged(text) = action;
///         state.draft = text;
///         smallvec![Effect::None]
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct ScreenState {
///     console: ConsoleState,
///     banner: String,
/// }
///
/// let scoped = scope_reducer(
///     ConsoleReducer,
///     |screen: &ScreenState| &screen.console,
///     |screen: &mut ScreenState, console: ConsoleState| {
///         screen.console = console;
///     },
/// );
///
/// let mut state = ScreenState::default();
/// let _ = scoped.reduce(&mut state, ScreenAction::DraftChanged("abc".into()), &());
/// assert_eq!(state.console.draft, "abc");
/// assert_eq!(state.banner, "");
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> smallvec::SmallVec<[Effect<Self::Action>; 4]> {
        // Run the child on a copy of its slice, then write the slice back
        let mut sub_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut sub_state, action, env);
        (self.set_state)(state, sub_state);

        effects
    }
}
