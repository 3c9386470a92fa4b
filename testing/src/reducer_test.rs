//! Given-When-Then harness for reducers
//!
//! Drives a reducer through one or more actions against a fixed environment
//! and asserts on the final state and the effects of the last step.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use statecraft_core::{effect::Effect, reducer::Reducer};

type StateAssertion<S> = Box<dyn FnOnce(&S)>;
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent reducer test: given a state, when actions arrive, then assert
///
/// # Example
///
/// ```ignore
/// use statecraft_testing::ReducerTest;
///
/// ReducerTest::new(HeartbeatReducer)
///     .with_env(test_environment())
///     .given_state(HeartbeatState { online: true, ..Default::default() })
///     .when_action(HeartbeatAction::ToggleOnline)
///     .then_state(|state| {
///         assert!(!state.online);
///     })
///     .then_effects(|effects| {
///         assertions::assert_has_cancel_effect(effects, HEARTBEAT);
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
    A: Clone,
{
    /// Start a test around `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Inject the environment the reducer runs against
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Given: the state before any action arrives
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// When: one action arrives (may be chained for a sequence)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// When: a whole sequence of actions arrives in order
    ///
    /// Effect assertions see the effects of the last action only; earlier
    /// steps exist to drive the state there.
    #[must_use]
    pub fn when_actions(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Then: assert on the state after the last action
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Then: assert on the effects of the last action
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Drive the reducer and run every assertion
    ///
    /// # Panics
    ///
    /// Panics if the state, environment or action list was never set, or if
    /// an assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("given_state() was never called");

        let env = self.environment.expect("with_env() was never called");

        assert!(
            !self.actions.is_empty(),
            "when_action() or when_actions() was never called"
        );

        let mut effects = statecraft_core::SmallVec::new();
        for action in self.actions {
            effects = self.reducer.reduce(&mut state, action, &env);
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Effect assertions shared across reducer tests
pub mod assertions {
    use statecraft_core::effect::{Effect, EffectId};

    /// Assert the reducer described no work (no effects, or a lone `None`)
    ///
    /// # Panics
    ///
    /// Panics if any real effect is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.is_empty() || matches!(effects, [Effect::None]),
            "expected no effects, found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert exactly `expected` effects came back
    ///
    /// # Panics
    ///
    /// Panics on any other count.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "expected {} effects, found {}",
            expected,
            effects.len()
        );
    }

    /// Assert at least one `Future` effect is present
    ///
    /// # Panics
    ///
    /// Panics if there is none.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "expected a Future effect, found none"
        );
    }

    /// Assert that effects contain a Periodic effect armed under `id`
    ///
    /// # Panics
    ///
    /// Panics if no Periodic effect with that id is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_periodic_effect<A>(effects: &[Effect<A>], id: EffectId) {
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::Periodic { id: armed, .. } if *armed == id)),
            "Expected a Periodic effect armed under {id}, but none found"
        );
    }

    /// Assert that effects contain a Cancel effect for `id`
    ///
    /// # Panics
    ///
    /// Panics if no Cancel effect with that id is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_cancel_effect<A>(effects: &[Effect<A>], id: EffectId) {
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::Cancel(cancelled) if *cancelled == id)),
            "Expected a Cancel effect for {id}, but none found"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statecraft_core::effect::{Effect, EffectId};
    use statecraft_core::reducer::Reducer;
    use statecraft_core::{SmallVec, smallvec};
    use std::time::Duration;

    const TICKER: EffectId = EffectId::new("ticker");

    #[derive(Clone, Debug)]
    struct TestState {
        online: bool,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        GoOnline,
        GoOffline,
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::GoOnline => {
                    state.online = true;
                    smallvec![Effect::Periodic {
                        id: TICKER,
                        period: Duration::from_secs(1),
                        action: Box::new(TestAction::GoOnline),
                    }]
                },
                TestAction::GoOffline => {
                    state.online = false;
                    smallvec![Effect::Cancel(TICKER)]
                },
            }
        }
    }

    #[test]
    fn test_reducer_test_arms_timer() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { online: false })
            .when_action(TestAction::GoOnline)
            .then_state(|state| {
                assert!(state.online);
            })
            .then_effects(|effects| {
                assertions::assert_has_periodic_effect(effects, TICKER);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_cancels_timer() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { online: true })
            .when_action(TestAction::GoOffline)
            .then_state(|state| {
                assert!(!state.online);
            })
            .then_effects(|effects| {
                assertions::assert_has_cancel_effect(effects, TICKER);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_drives_action_sequences() {
        // The last toggle wins; effect assertions see only its effects
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { online: false })
            .when_actions([
                TestAction::GoOnline,
                TestAction::GoOffline,
                TestAction::GoOnline,
            ])
            .then_state(|state| {
                assert!(state.online);
            })
            .then_effects(|effects| {
                assertions::assert_has_periodic_effect(effects, TICKER);
            })
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<TestAction>(&[Effect::None]);
        assertions::assert_no_effects::<TestAction>(&[]);
    }

    #[test]
    fn test_assertions_effects_count() {
        assertions::assert_effects_count(&[Effect::<TestAction>::None], 1);
        assertions::assert_effects_count::<TestAction>(&[], 0);
    }
}
