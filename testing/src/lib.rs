//! # Statecraft Testing
//!
//! Testing utilities and helpers for the Statecraft architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(WatchlistReducer::new())
//!     .with_env(WatchlistEnvironment::new(Arc::new(test_clock())))
//!     .given_state(WatchlistState::default())
//!     .when_action(WatchlistAction::Submit)
//!     .then_state(|state| assert!(state.error.is_some()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use statecraft_core::environment::Clock;

/// Given-When-Then harness for reducers
pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// A clock pinned to one instant
    ///
    /// Every `now()` call returns the time it was created with, so entries
    /// stamped during a test compare equal across runs.
    ///
    /// ```
    /// use statecraft_testing::mocks::FixedClock;
    /// use statecraft_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Pin the clock to `time`
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// The fixed clock used across this workspace's tests: 2025-01-01 UTC
    ///
    /// # Panics
    ///
    /// Never in practice; the backing timestamp is a valid constant.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        // 2025-01-01T00:00:00Z as seconds since the epoch
        let midnight = DateTime::from_timestamp(1_735_689_600, 0)
            .expect("timestamp is in range");
        FixedClock::new(midnight)
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
