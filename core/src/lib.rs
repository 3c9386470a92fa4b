//! # Statecraft Core
//!
//! Core traits and types for the Statecraft architecture.
//!
//! This crate provides the fundamental abstractions for building
//! unidirectional, event-driven interactive features using the Reducer
//! pattern: counters, forms, subscriptions, and small stateful apps whose
//! entire state lives in memory.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: All possible inputs to a reducer (user commands, effect feedback)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Derived values recomputed from owned state, never cached
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_core::*;
//!
//! // Define your state
//! #[derive(Clone, Debug, Default)]
//! struct TallyState {
//!     count: i64,
//! }
//!
//! // Define your actions
//! #[derive(Clone, Debug)]
//! enum TallyAction {
//!     Increment,
//!     Reset,
//! }
//!
//! // Implement the reducer
//! impl Reducer for TallyReducer {
//!     type State = TallyState;
//!     type Action = TallyAction;
//!     type Environment = TallyEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TallyState,
//!         action: TallyAction,
//!         env: &TallyEnvironment,
//!     ) -> SmallVec<[Effect<TallyAction>; 4]> {
//!         // Feature logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub use composition::{combine_reducers, scope_reducer};
pub use effect::{Effect, EffectId};
pub use reducer::Reducer;

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Declarative macros for ergonomic effect construction
pub mod effect_macros;

/// Reducer module - The core trait for feature logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all feature logic and are deterministic and testable: every
/// state mutation happens synchronously inside `reduce`, and every side
/// effect leaves as an [`Effect`](crate::effect::Effect) description.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for feature logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for HeartbeatReducer {
    ///     type State = HeartbeatState;
    ///     type Action = HeartbeatAction;
    ///     type Environment = HeartbeatEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut HeartbeatState,
    ///         action: HeartbeatAction,
    ///         env: &HeartbeatEnvironment,
    ///     ) -> SmallVec<[Effect<HeartbeatAction>; 4]> {
    ///         match action {
    ///             HeartbeatAction::Tick => {
    ///                 state.seconds += 1;
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Mutates `state` in place synchronously and returns descriptions
        /// of any side effects for the runtime to execute. Dependencies come
        /// in through `env`, so the function stays deterministic under test.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable and cancellable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Identifier for a cancellable effect.
    ///
    /// The runtime keys its timer registry on this id: arming a
    /// [`Effect::Periodic`] under an id that is already armed tears the old
    /// timer down first, and [`Effect::Cancel`] tears it down explicitly.
    ///
    /// Ids are static names so reducers can refer to them from any code path:
    ///
    /// ```
    /// use statecraft_core::effect::EffectId;
    ///
    /// const HEARTBEAT: EffectId = EffectId::new("heartbeat");
    /// assert_eq!(HEARTBEAT.name(), "heartbeat");
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EffectId(&'static str);

    impl EffectId {
        /// Create an effect id from a static name
        #[must_use]
        pub const fn new(name: &'static str) -> Self {
            Self(name)
        }

        /// The name this id was created with
        #[must_use]
        pub const fn name(&self) -> &'static str {
            self.0
        }
    }

    impl std::fmt::Display for EffectId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timeouts, debounce)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),

        /// Owned repeating timer: dispatch `action` every `period`
        ///
        /// The runtime keeps at most one timer per id. Arming an id that is
        /// already armed cancels the running timer before the new one starts,
        /// so a reducer can re-arm on a condition change without ever
        /// producing duplicate ticks.
        Periodic {
            /// Registry key for cancellation and re-arming
            id: EffectId,
            /// Interval between dispatches
            period: Duration,
            /// Action dispatched on every tick
            action: Box<Action>,
        },

        /// Tear down the periodic timer armed under `id`
        ///
        /// No-op if nothing is armed under that id.
        Cancel(EffectId),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
                Effect::Periodic { id, period, action } => f
                    .debug_struct("Effect::Periodic")
                    .field("id", id)
                    .field("period", period)
                    .field("action", action)
                    .finish(),
                Effect::Cancel(id) => f.debug_tuple("Effect::Cancel").field(id).finish(),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter, so reducers stay deterministic under test.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use statecraft_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let stamped = clock.now();
    /// assert!(clock.now() >= stamped);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
