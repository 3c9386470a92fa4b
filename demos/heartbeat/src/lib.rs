//! # Heartbeat Example
//!
//! A subscription lifecycle demo built on the Statecraft architecture.
//!
//! This example showcases:
//! - An owned periodic timer armed and torn down from a reducer
//! - Teardown-before-rearm: toggling the gating condition never leaves two
//!   timers running
//! - A lifecycle log that makes effect runs and teardowns visible
//!
//! ## Architecture
//!
//! The heartbeat ticks once per period while the feature is "online". Going
//! offline emits a `Cancel` effect; going online arms `Periodic` again. The
//! runtime keeps at most one timer per effect id, so re-arming is always
//! safe.
//!
//! ## Example
//!
//! ```no_run
//! use heartbeat::{HeartbeatAction, HeartbeatEnvironment, HeartbeatReducer, HeartbeatState};
//! use statecraft_runtime::Store;
//!
//! # async fn example() {
//! let store = Store::new(
//!     HeartbeatState::default(),
//!     HeartbeatReducer::new(),
//!     HeartbeatEnvironment::default(),
//! );
//!
//! let _ = store.send(HeartbeatAction::Started).await;
//! let _ = store.send(HeartbeatAction::ToggleOnline).await; // goes offline, timer torn down
//! # }
//! ```

use statecraft_core::effect::EffectId;
use statecraft_core::{
    SmallVec, cancel_effect, effect::Effect, every, reducer::Reducer, smallvec,
};
use std::time::Duration;

/// Registry id of the heartbeat timer
pub const HEARTBEAT: EffectId = EffectId::new("heartbeat");

/// Number of lifecycle log entries kept (most recent first)
pub const EVENT_LOG_CAP: usize = 6;

/// Heartbeat state
///
/// `seconds` counts ticks received while online. The event log records when
/// the subscription was armed, skipped or torn down.
#[derive(Debug, Clone)]
pub struct HeartbeatState {
    /// Whether the subscription condition currently holds
    pub online: bool,
    /// Ticks received so far
    pub seconds: u64,
    /// Lifecycle log, most recent first, capped at [`EVENT_LOG_CAP`]
    pub event_log: Vec<String>,
}

impl Default for HeartbeatState {
    fn default() -> Self {
        // The feature starts online, mirroring a freshly mounted component
        Self {
            online: true,
            seconds: 0,
            event_log: Vec::new(),
        }
    }
}

/// Heartbeat actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeartbeatAction {
    /// The feature was mounted; arm the timer if online
    Started,
    /// Flip the online flag, arming or tearing down the timer
    ToggleOnline,
    /// One period elapsed (fed back by the periodic effect)
    Tick,
}

/// Heartbeat environment
///
/// Carries the tick period so tests can run the subscription at a fast
/// cadence; production uses the one-second default.
#[derive(Debug, Clone)]
pub struct HeartbeatEnvironment {
    /// Interval between ticks
    pub period: Duration,
}

impl HeartbeatEnvironment {
    /// Create an environment with a custom tick period
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Default for HeartbeatEnvironment {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Heartbeat reducer
///
/// Arms and tears down the periodic timer as the online condition changes.
/// The tick count only ever moves through `Tick` actions, so it is exactly
/// the number of periods the subscription was live.
#[derive(Debug, Clone, Copy)]
pub struct HeartbeatReducer;

impl HeartbeatReducer {
    /// Create a new heartbeat reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Prepend a lifecycle log entry, keeping the newest [`EVENT_LOG_CAP`]
    fn note(state: &mut HeartbeatState, entry: impl Into<String>) {
        state.event_log.insert(0, entry.into());
        state.event_log.truncate(EVENT_LOG_CAP);
    }
}

impl Default for HeartbeatReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for HeartbeatReducer {
    type State = HeartbeatState;
    type Action = HeartbeatAction;
    type Environment = HeartbeatEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            HeartbeatAction::Started => {
                if state.online {
                    Self::note(state, "Subscribed to heartbeat; teardown will clear it.");
                    smallvec![every! {
                        id: HEARTBEAT,
                        period: env.period,
                        action: HeartbeatAction::Tick
                    }]
                } else {
                    Self::note(state, "Skipped subscribing while offline.");
                    smallvec![Effect::None]
                }
            },

            HeartbeatAction::ToggleOnline => {
                state.online = !state.online;
                tracing::debug!(online = state.online, "Heartbeat condition changed");
                if state.online {
                    Self::note(state, "Subscribed to heartbeat; teardown will clear it.");
                    smallvec![every! {
                        id: HEARTBEAT,
                        period: env.period,
                        action: HeartbeatAction::Tick
                    }]
                } else {
                    Self::note(state, "Tore down heartbeat before going offline.");
                    smallvec![cancel_effect!(HEARTBEAT)]
                }
            },

            HeartbeatAction::Tick => {
                state.seconds += 1;
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statecraft_testing::{ReducerTest, assertions};

    #[test]
    fn started_online_arms_the_timer() {
        ReducerTest::new(HeartbeatReducer::new())
            .with_env(HeartbeatEnvironment::default())
            .given_state(HeartbeatState::default())
            .when_action(HeartbeatAction::Started)
            .then_state(|state| {
                assert!(state.online);
                assert_eq!(state.event_log.len(), 1);
            })
            .then_effects(|effects| {
                assertions::assert_has_periodic_effect(effects, HEARTBEAT);
            })
            .run();
    }

    #[test]
    fn started_offline_skips_subscribing() {
        let offline = HeartbeatState {
            online: false,
            ..HeartbeatState::default()
        };

        ReducerTest::new(HeartbeatReducer::new())
            .with_env(HeartbeatEnvironment::default())
            .given_state(offline)
            .when_action(HeartbeatAction::Started)
            .then_state(|state| {
                assert_eq!(state.event_log[0], "Skipped subscribing while offline.");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn going_offline_tears_the_timer_down() {
        ReducerTest::new(HeartbeatReducer::new())
            .with_env(HeartbeatEnvironment::default())
            .given_state(HeartbeatState::default())
            .when_action(HeartbeatAction::ToggleOnline)
            .then_state(|state| {
                assert!(!state.online);
            })
            .then_effects(|effects| {
                assertions::assert_has_cancel_effect(effects, HEARTBEAT);
            })
            .run();
    }

    #[test]
    fn going_online_rearms_the_timer() {
        let offline = HeartbeatState {
            online: false,
            ..HeartbeatState::default()
        };

        ReducerTest::new(HeartbeatReducer::new())
            .with_env(HeartbeatEnvironment::default())
            .given_state(offline)
            .when_action(HeartbeatAction::ToggleOnline)
            .then_state(|state| {
                assert!(state.online);
            })
            .then_effects(|effects| {
                assertions::assert_has_periodic_effect(effects, HEARTBEAT);
            })
            .run();
    }

    #[test]
    fn ticks_accumulate_seconds() {
        ReducerTest::new(HeartbeatReducer::new())
            .with_env(HeartbeatEnvironment::default())
            .given_state(HeartbeatState::default())
            .when_actions(std::iter::repeat_n(HeartbeatAction::Tick, 3))
            .then_state(|state| {
                assert_eq!(state.seconds, 3);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn event_log_keeps_the_newest_entries() {
        let mut state = HeartbeatState::default();
        let env = HeartbeatEnvironment::default();
        let reducer = HeartbeatReducer::new();

        // Each toggle writes one lifecycle entry
        for _ in 0..10 {
            let _ = reducer.reduce(&mut state, HeartbeatAction::ToggleOnline, &env);
        }

        assert_eq!(state.event_log.len(), EVENT_LOG_CAP);
        // 10 toggles end offline, so the newest entry is the teardown line
        assert_eq!(state.event_log[0], "Tore down heartbeat before going offline.");
    }
}
