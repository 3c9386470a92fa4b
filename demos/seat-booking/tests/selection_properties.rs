//! Property tests for the selection ledger
//!
//! The ledger's defining property: after any sequence of toggles, the
//! selection contains exactly the seats toggled an odd number of times, and
//! the total is always the selection count times the flat rate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use proptest::prelude::*;
use seat_booking::reducer::ConfirmationSink;
use seat_booking::{BookingAction, BookingEnvironment, BookingReducer, BookingState, SeatId};
use statecraft_core::reducer::Reducer;
use std::collections::HashMap;
use std::sync::Arc;

/// Sink that drops confirmations; properties never confirm
struct NullConfirmationSink;

impl ConfirmationSink for NullConfirmationSink {
    fn present(&self, _seats: usize, _total: u64) {}
}

fn apply_toggles(seats: &[u32]) -> BookingState {
    let mut state = BookingState::auditorium();
    let env = BookingEnvironment::new(Arc::new(NullConfirmationSink));
    let reducer = BookingReducer::new();

    for &seat in seats {
        let _ = reducer.reduce(
            &mut state,
            BookingAction::ToggleSeat { seat: SeatId::new(seat) },
            &env,
        );
    }
    state
}

proptest! {
    #[test]
    fn selection_holds_seats_toggled_an_odd_number_of_times(
        seats in prop::collection::vec(1u32..=50, 0..120),
    ) {
        let state = apply_toggles(&seats);

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for &seat in &seats {
            *counts.entry(seat).or_default() += 1;
        }

        for (seat, count) in counts {
            prop_assert_eq!(
                state.is_selected(SeatId::new(seat)),
                count % 2 == 1,
                "seat {} toggled {} times",
                seat,
                count,
            );
        }
    }

    #[test]
    fn total_is_always_count_times_rate(
        seats in prop::collection::vec(1u32..=50, 0..120),
    ) {
        let state = apply_toggles(&seats);
        prop_assert_eq!(state.total(), state.selected_count() as u64 * 150);
    }

    #[test]
    fn reset_always_yields_empty_and_zero(
        seats in prop::collection::vec(1u32..=50, 0..120),
    ) {
        let mut state = apply_toggles(&seats);
        let env = BookingEnvironment::new(Arc::new(NullConfirmationSink));
        let _ = BookingReducer::new().reduce(&mut state, BookingAction::Reset, &env);

        prop_assert_eq!(state.selected_count(), 0);
        prop_assert_eq!(state.total(), 0);
    }
}
