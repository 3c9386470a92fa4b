//! Declarative macros for ergonomic effect construction
//!
//! These macros reduce boilerplate when creating `Effect` variants,
//! particularly the timer effects used for subscription-style features.

/// Create an `Effect::Future` from an async block
///
/// # Example
///
/// ```rust,ignore
/// use statecraft_core::async_effect;
///
/// async_effect! {
///     titles.set_title(format!("Clicked {count} times"));
///     Some(CounterAction::TitleSynced { title })
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

/// Create an `Effect::Delay` for scheduling delayed actions
///
/// # Example
///
/// ```rust,ignore
/// use statecraft_core::delay;
/// use std::time::Duration;
///
/// delay! {
///     duration: Duration::from_secs(5),
///     action: SessionAction::BannerExpired
/// }
/// ```
#[macro_export]
macro_rules! delay {
    (
        duration: $duration:expr,
        action: $action:expr
    ) => {
        $crate::effect::Effect::Delay {
            duration: $duration,
            action: ::std::boxed::Box::new($action),
        }
    };
}

/// Create an `Effect::Periodic` - an owned repeating timer
///
/// Arming an id that is already armed tears down the running timer first,
/// so re-arming on a condition change never produces duplicate ticks.
///
/// # Example
///
/// ```rust,ignore
/// use statecraft_core::every;
/// use std::time::Duration;
///
/// const HEARTBEAT: EffectId = EffectId::new("heartbeat");
///
/// every! {
///     id: HEARTBEAT,
///     period: Duration::from_secs(1),
///     action: HeartbeatAction::Tick
/// }
/// ```
#[macro_export]
macro_rules! every {
    (
        id: $id:expr,
        period: $period:expr,
        action: $action:expr
    ) => {
        $crate::effect::Effect::Periodic {
            id: $id,
            period: $period,
            action: ::std::boxed::Box::new($action),
        }
    };
}

/// Create an `Effect::Cancel` tearing down the periodic timer with that id
///
/// # Example
///
/// ```rust,ignore
/// use statecraft_core::cancel_effect;
///
/// cancel_effect!(HEARTBEAT)
/// ```
#[macro_export]
macro_rules! cancel_effect {
    ($id:expr) => {
        $crate::effect::Effect::Cancel($id)
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::{Effect, EffectId};
    use std::time::Duration;

    const HEARTBEAT: EffectId = EffectId::new("heartbeat");

    #[derive(Clone, Debug)]
    enum TestAction {
        Tick,
        TitleSynced { title: String },
    }

    #[test]
    fn test_async_effect_macro() {
        let effect = async_effect! {
            // Simulate async work
            Some(TestAction::TitleSynced {
                title: "Clicked 1 times".to_string(),
            })
        };

        assert!(matches!(effect, Effect::Future(_)));
    }

    #[test]
    fn test_delay_macro() {
        let effect = delay! {
            duration: Duration::from_secs(5),
            action: TestAction::Tick
        };

        assert!(matches!(effect, Effect::Delay { .. }));
    }

    #[test]
    fn test_every_macro() {
        let effect = every! {
            id: HEARTBEAT,
            period: Duration::from_secs(1),
            action: TestAction::Tick
        };

        assert!(matches!(
            effect,
            Effect::Periodic { id, period, .. } if id == HEARTBEAT && period == Duration::from_secs(1)
        ));
    }

    #[test]
    fn test_cancel_effect_macro() {
        let effect: Effect<TestAction> = cancel_effect!(HEARTBEAT);

        assert!(matches!(effect, Effect::Cancel(id) if id == HEARTBEAT));
    }
}
