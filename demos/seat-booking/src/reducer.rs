//! Reducer logic for the seat selection ledger.
//!
//! Toggle and reset mutate the selection synchronously; confirm is a pure
//! side effect that surfaces the current count and total through the
//! environment without touching state.

use crate::types::{BookingAction, BookingState};
use statecraft_core::{SmallVec, async_effect, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Where confirmations are surfaced to the user
///
/// The production sink writes to the terminal; tests record what would have
/// been shown.
pub trait ConfirmationSink: Send + Sync {
    /// Present a confirmation for `seats` selected seats costing `total`
    fn present(&self, seats: usize, total: u64);
}

/// Sink that prints the confirmation line to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmationSink;

impl ConfirmationSink for TerminalConfirmationSink {
    fn present(&self, seats: usize, total: u64) {
        println!("Booked {seats} seats for ₹{total}");
    }
}

/// Environment dependencies for the booking reducer
#[derive(Clone)]
pub struct BookingEnvironment {
    /// Sink the confirmation effect presents through
    pub confirmations: Arc<dyn ConfirmationSink>,
}

impl BookingEnvironment {
    /// Creates a new `BookingEnvironment`
    #[must_use]
    pub fn new(confirmations: Arc<dyn ConfirmationSink>) -> Self {
        Self { confirmations }
    }
}

/// Reducer for the seat selection ledger
#[derive(Clone, Debug)]
pub struct BookingReducer;

impl BookingReducer {
    /// Creates a new `BookingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BookingReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BookingAction::ToggleSeat { seat } => {
                // Membership toggle: present removes, absent inserts
                if !state.selected.remove(&seat) {
                    state.selected.insert(seat);
                }
                smallvec![Effect::None]
            },

            BookingAction::Reset => {
                state.selected.clear();
                smallvec![Effect::None]
            },

            BookingAction::Confirm => {
                // Confirming an empty selection is a no-op
                if state.selected.is_empty() {
                    return SmallVec::new();
                }

                let seats = state.selected_count();
                let total = state.total();
                let sink = Arc::clone(&env.confirmations);

                smallvec![async_effect! {
                    sink.present(seats, total);
                    Some(BookingAction::ConfirmationPresented { seats, total })
                }]
            },

            BookingAction::ConfirmationPresented { seats, total } => {
                // Side effect only: the selection is not mutated
                tracing::info!(seats, total, "Confirmation presented");
                smallvec![Effect::None]
            },
        }
    }
}
