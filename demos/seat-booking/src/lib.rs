//! # Seat Booking Example
//!
//! A seat booking simulator demonstrating the Statecraft architecture.
//!
//! This example showcases:
//! - A selection ledger as a reducer over a `BTreeSet`
//! - Derived values (total price) recomputed from state on every read
//! - A side-effect-only command (`Confirm`) driven through the environment
//! - One reducer serving two grid variants (5×10 auditorium, 5×1 mini row)
//!
//! ## Architecture
//!
//! Toggle and reset are synchronous, deterministic mutations. Confirm never
//! mutates: it describes a `Future` effect that presents the current seat
//! count and total through a [`ConfirmationSink`](reducer::ConfirmationSink)
//! and feeds back a `ConfirmationPresented` event.
//!
//! ## Example
//!
//! ```no_run
//! use seat_booking::{BookingAction, BookingEnvironment, BookingReducer, BookingState, SeatId};
//! use seat_booking::reducer::TerminalConfirmationSink;
//! use statecraft_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let env = BookingEnvironment::new(Arc::new(TerminalConfirmationSink));
//! let store = Store::new(BookingState::auditorium(), BookingReducer::new(), env);
//!
//! let _ = store.send(BookingAction::ToggleSeat { seat: SeatId::new(3) }).await;
//! let total = store.state(BookingState::total).await;
//! assert_eq!(total, 150);
//! # }
//! ```

pub mod reducer;
pub mod types;

pub use reducer::{BookingEnvironment, BookingReducer, ConfirmationSink};
pub use types::{BookingAction, BookingState, SeatId, SeatingPlan};
