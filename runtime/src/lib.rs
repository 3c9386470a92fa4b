//! # Statecraft Runtime
//!
//! Runtime implementation for the Statecraft architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to reducers
//! - **Timer Registry**: Owns the cancellable periodic timers armed by reducers
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_runtime::Store;
//!
//! let store = Store::new(initial_state, reducer, environment);
//!
//! // Dispatch a user command
//! store.send(Action::ToggleSeat { seat }).await?;
//!
//! // Read a derived value from owned state
//! let total = store.state(|s| s.total()).await;
//! ```

use statecraft_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The store has begun shutting down and rejects `send()`
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Effects were still running when the shutdown timeout elapsed
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// `send_and_wait_for` saw no matching action before its deadline
        #[error("Timeout waiting for action")]
        Timeout,

        /// The action broadcast channel closed under a waiting observer
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;
pub use store::Store;

use statecraft_core::effect::EffectId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::watch;

/// Configuration for Store instances
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(256)
///     .with_shutdown_timeout(Duration::from_secs(60));
///
/// let store = Store::with_config(state, reducer, env, config);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Capacity of the action broadcast channel
    pub broadcast_capacity: usize,
    /// Default timeout for graceful shutdown
    pub default_shutdown_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration with explicit values
    #[must_use]
    pub const fn new(broadcast_capacity: usize, default_shutdown_timeout: Duration) -> Self {
        Self {
            broadcast_capacity,
            default_shutdown_timeout,
        }
    }

    /// Set the action broadcast capacity
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }

    /// Set the default shutdown timeout
    #[must_use]
    pub const fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.default_shutdown_timeout = timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
            default_shutdown_timeout: Duration::from_secs(30),
        }
    }
}

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] to allow waiting for effects to complete.
/// Each action gets a handle that can be awaited to know when its one-shot
/// effects are done.
///
/// Periodic timers are deliberately NOT tracked by handles - they live until
/// cancelled or the store shuts down, so waiting on them would never return.
///
/// # Example
///
/// ```ignore
/// let handle = store.send(Action::Start).await;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// // All one-shot effects from Action::Start are now complete
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    /// Create the handle for one send and the tracking its effects share
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Create a handle with nothing left to wait for
    ///
    /// Handy as the seed value when a loop keeps only the latest handle:
    ///
    /// ```ignore
    /// let mut last = EffectHandle::completed();
    /// for action in actions {
    ///     last = store.send(action).await?;
    /// }
    /// last.wait().await;
    /// ```
    #[must_use]
    pub fn completed() -> Self {
        let (tx, rx) = watch::channel(());
        let _ = tx.send(());

        Self {
            effects: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Wait until every one-shot effect of the originating `send` is done
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// Like [`wait`](Self::wait), bounded by a deadline
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if effects are still running when the
    /// timeout expires.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Per-send counter and notifier shared between a handle and its effects
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Last effect finished, wake the handle
            let _ = self.notifier.send(());
        }
    }
}

/// Decrements the per-send counter on drop, panics included
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Decrements the store-wide pending-effect count on drop
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Registry of armed periodic timers, keyed by effect id
///
/// Dropping a sender cancels the timer task watching it, so replacing or
/// removing an entry IS the teardown.
type TimerRegistry = Arc<Mutex<HashMap<EffectId, watch::Sender<()>>>>;

/// Store module - The runtime for reducers
///
/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, DecrementGuard, Duration, Effect,
        EffectHandle, EffectTracking, Ordering, Reducer, RwLock, StoreConfig, StoreError,
        TimerRegistry,
    };
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// Owns the state behind an `RwLock`, runs the reducer on every action,
    /// executes the effects the reducer describes, feeds effect-produced
    /// actions back in, and keeps the registry of armed periodic timers (at
    /// most one per effect id).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     BookingState::auditorium(),
    ///     BookingReducer::new(),
    ///     production_environment(),
    /// );
    ///
    /// store.send(BookingAction::ToggleSeat { seat: SeatId::new(3) }).await?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        /// Action broadcast channel for observing actions produced by effects.
        ///
        /// All actions produced by effects (ticks, async feedback) are
        /// broadcast to observers. This enables request-response patterns
        /// (`send_and_wait_for`) and live views over `subscribe_actions`.
        action_broadcast: broadcast::Sender<A>,
        /// Armed periodic timers, at most one per effect id.
        timers: TimerRegistry,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a store with the default [`StoreConfig`]
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a store with explicit configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default()
        ///     .with_broadcast_capacity(256)
        ///     .with_shutdown_timeout(Duration::from_secs(60));
        ///
        /// let store = Store::with_config(
        ///     MyState::default(),
        ///     MyReducer,
        ///     my_environment,
        ///     config,
        /// );
        /// ```
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
                timers: Arc::new(std::sync::Mutex::new(std::collections::HashMap::new())),
            }
        }

        /// Create a store with a custom action broadcast capacity
        ///
        /// Use this when many slow observers subscribe to the action stream;
        /// the default buffers 16 actions.
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            Self::with_config(
                initial_state,
                reducer,
                environment,
                StoreConfig::default().with_broadcast_capacity(capacity),
            )
        }

        /// Initiate graceful shutdown of the store
        ///
        /// New actions are rejected from this point on, every armed periodic
        /// timer is torn down, and the call then waits up to `timeout` for
        /// the one-shot effects still in flight.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires
        /// before all pending effects complete.
        ///
        /// # Example
        ///
        /// ```ignore
        /// // Graceful shutdown with 30 second timeout
        /// store.shutdown(Duration::from_secs(30)).await?;
        /// ```
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            metrics::counter!("store.shutdown.initiated").increment(1);

            self.shutdown.store(true, Ordering::Release);

            // Dropping the senders cancels every armed timer task
            let cancelled = {
                let mut timers = self
                    .timers
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                let count = timers.len();
                timers.clear();
                count
            };
            if cancelled > 0 {
                tracing::debug!(count = cancelled, "Tore down armed timers for shutdown");
            }

            // Poll the in-flight count down to zero
            let start = std::time::Instant::now();
            let poll_interval = Duration::from_millis(100);

            loop {
                let pending = self.pending_effects.load(Ordering::Acquire);

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    metrics::counter!("store.shutdown.completed").increment(1);
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        pending_effects = pending,
                        "Shutdown timeout: {} effects still running",
                        pending
                    );
                    metrics::counter!("store.shutdown.timeout").increment(1);
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Send an action to the store
        ///
        /// The write lock is held only while the reducer runs, so every
        /// mutation is a discrete synchronous step; the effects it describes
        /// then execute on spawned tasks, and any actions they produce come
        /// back through `send` again. Concurrent sends serialize at the lock.
        ///
        /// Returns an [`EffectHandle`] for waiting on the one-shot effects of
        /// this action. `send` itself returns as soon as execution has
        /// started, not when it finishes.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        ///
        /// # Example
        ///
        /// ```ignore
        /// let handle = store.send(HeartbeatAction::ToggleOnline).await?;
        /// ```
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError>
        where
            R: Clone,
            E: Clone,
        {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let (handle, tracking) = EffectHandle::new();

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut state, action, &self.environment);
                let duration = start.elapsed();
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(duration.as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                effects
            };

            // Execute effects with tracking
            for effect in effects {
                self.execute_effect_internal(effect, tracking.clone());
            }
            tracing::debug!("Action processing completed, returning handle");

            Ok(handle)
        }

        /// Send an action and wait for a matching result action
        ///
        /// This is the request-response shape: send a confirm command, wait
        /// for the confirmation-presented event its effect feeds back. The
        /// subscription is taken out before the send so the terminal action
        /// cannot slip past, and the first effect-produced action matching
        /// `predicate` is returned.
        ///
        /// # Errors
        ///
        /// - [`StoreError::Timeout`]: Timeout expired before matching action received
        /// - [`StoreError::ChannelClosed`]: Action broadcast channel closed
        /// - [`StoreError::ShutdownInProgress`]: Store is shutting down
        ///
        /// # Example
        ///
        /// ```ignore
        /// let result = store.send_and_wait_for(
        ///     BookingAction::Confirm,
        ///     |a| matches!(a, BookingAction::ConfirmationPresented { .. }),
        ///     Duration::from_secs(5),
        /// ).await?;
        /// ```
        ///
        /// # Notes
        ///
        /// - Only actions produced by effects are broadcast (not the initial action)
        /// - If the channel lags and drops actions, continues waiting (timeout catches it)
        pub async fn send_and_wait_for<F>(
            &self,
            action: A,
            predicate: F,
            timeout: Duration,
        ) -> Result<A, StoreError>
        where
            R: Clone,
            E: Clone,
            F: Fn(&A) -> bool,
        {
            // Subscribe before sending so the terminal action cannot be missed
            let mut rx = self.action_broadcast.subscribe();

            self.send(action).await?;

            tokio::time::timeout(timeout, async {
                loop {
                    match rx.recv().await {
                        Ok(action) if predicate(&action) => return Ok(action),
                        Ok(_) => {}, // Not the action we want, keep waiting
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            // Slow consumer; if the terminal action was
                            // dropped, the timeout catches it
                            tracing::warn!(skipped, "Action observer lagged");
                        },
                        Err(broadcast::error::RecvError::Closed) => {
                            return Err(StoreError::ChannelClosed);
                        },
                    }
                }
            })
            .await
            .map_err(|_| StoreError::Timeout)?
        }

        /// Subscribe to all actions produced by effects
        ///
        /// Returns a receiver that gets a clone of every action that effects
        /// feed back into the store: timer ticks, async results, delayed
        /// actions.
        ///
        /// # Notes
        ///
        /// - Actions sent directly via `send` are not broadcast
        /// - If the receiver lags, it will skip old actions and receive `Lagged`
        ///
        /// # Example
        ///
        /// ```ignore
        /// let mut rx = store.subscribe_actions();
        ///
        /// while let Ok(action) = rx.recv().await {
        ///     println!("effect produced: {action:?}");
        /// }
        /// ```
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let total = store.state(|s| s.total()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Execute one effect description
        ///
        /// One-shot effects (`Future`, `Delay`, `Sequential`) increment the
        /// per-send counter and decrement it through [`DecrementGuard`] when
        /// their task ends, panics included. `Periodic` is not counted: a
        /// subscription has no completion, it lives in the timer registry
        /// until a `Cancel` or shutdown removes it.
        ///
        /// Effect failures are logged and dropped; nothing is retried.
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned, so pass by value is intentional
        #[allow(clippy::too_many_lines)] // one arm per effect variant
        #[tracing::instrument(skip(self, effect, tracking), name = "execute_effect")]
        fn execute_effect_internal(&self, effect: Effect<A>, tracking: EffectTracking)
        where
            R: Clone,
            E: Clone,
            A: Clone + Send + 'static,
        {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    tracking.increment();

                    // Shutdown waits on this store-wide count
                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone.clone());
                        let _pending_guard = pending_guard;

                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");

                            // Observers first, then the feedback send
                            let _ = store.action_broadcast.send(action.clone());
                            let _ = store.send(action).await;
                        } else {
                            tracing::trace!("Effect::Future completed with no action");
                        }
                    });
                },
                Effect::Delay { duration, action } => {
                    tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                    tracking.increment();

                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone.clone());
                        let _pending_guard = pending_guard;

                        tokio::time::sleep(duration).await;
                        tracing::trace!("Effect::Delay completed, sending action");

                        let _ = store.action_broadcast.send((*action).clone());
                        let _ = store.send(*action).await;
                    });
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);

                    // Execute all effects concurrently, each with the same tracking
                    for effect in effects {
                        self.execute_effect_internal(effect, tracking.clone());
                    }
                },
                Effect::Sequential(effects) => {
                    let effect_count = effects.len();
                    tracing::trace!("Executing Effect::Sequential with {} effects", effect_count);
                    metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);

                    tracking.increment();

                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone.clone());
                        let _pending_guard = pending_guard;

                        for (idx, effect) in effects.into_iter().enumerate() {
                            tracing::trace!(
                                "Executing sequential effect {} of {}",
                                idx + 1,
                                effect_count
                            );

                            // Each step gets its own tracking so the next
                            // one starts only after it completes
                            let (sub_tx, mut sub_rx) = watch::channel(());
                            let sub_tracking = EffectTracking {
                                counter: Arc::new(AtomicUsize::new(0)),
                                notifier: sub_tx,
                            };

                            store.execute_effect_internal(effect, sub_tracking.clone());

                            if sub_tracking.counter.load(Ordering::SeqCst) > 0 {
                                let _ = sub_rx.changed().await;
                            }
                        }
                        tracing::trace!("Effect::Sequential completed");
                    });
                },
                Effect::Periodic { id, period, action } => {
                    tracing::trace!(%id, "Executing Effect::Periodic (period: {:?})", period);
                    metrics::counter!("store.effects.executed", "type" => "periodic").increment(1);

                    // Arm the timer under its id. Replacing an existing entry
                    // drops the old sender, which is the old task's cancel
                    // signal: teardown happens before the new timer ticks.
                    let (cancel_tx, mut cancel_rx) = watch::channel(());
                    let replaced = {
                        let mut timers = self
                            .timers
                            .lock()
                            .unwrap_or_else(std::sync::PoisonError::into_inner);
                        timers.insert(id, cancel_tx).is_some()
                    };
                    if replaced {
                        tracing::debug!(%id, "Replaced armed timer before re-arming");
                        metrics::counter!("store.timers.rearmed").increment(1);
                    } else {
                        metrics::counter!("store.timers.armed").increment(1);
                    }

                    let store = self.clone();

                    tokio::spawn(async move {
                        // First tick fires one full period after arming
                        let start = tokio::time::Instant::now() + period;
                        let mut ticker = tokio::time::interval_at(start, period);
                        ticker.set_missed_tick_behavior(
                            tokio::time::MissedTickBehavior::Skip,
                        );

                        loop {
                            tokio::select! {
                                _ = ticker.tick() => {
                                    let action = (*action).clone();
                                    let _ = store.action_broadcast.send(action.clone());
                                    if store.send(action).await.is_err() {
                                        // Store is shutting down
                                        break;
                                    }
                                },
                                _ = cancel_rx.changed() => {
                                    // Sender dropped or signalled: torn down
                                    break;
                                },
                            }
                        }
                        tracing::debug!(%id, "Periodic effect stopped");
                    });
                },
                Effect::Cancel(id) => {
                    tracing::trace!(%id, "Executing Effect::Cancel");
                    metrics::counter!("store.effects.executed", "type" => "cancel").increment(1);

                    let removed = {
                        let mut timers = self
                            .timers
                            .lock()
                            .unwrap_or_else(std::sync::PoisonError::into_inner);
                        timers.remove(&id).is_some()
                    };
                    if removed {
                        tracing::debug!(%id, "Tore down periodic effect");
                        metrics::counter!("store.timers.cancelled").increment(1);
                    } else {
                        tracing::trace!(%id, "Cancel for unarmed id ignored");
                    }
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                action_broadcast: self.action_broadcast.clone(),
                timers: Arc::clone(&self.timers),
            }
        }
    }
}
