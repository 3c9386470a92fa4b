//! Seat booking example binary
//!
//! Walks the seat selection ledger through the full simulator flow and the
//! miniature single-row variant.

use seat_booking::reducer::TerminalConfirmationSink;
use seat_booking::{BookingAction, BookingEnvironment, BookingReducer, BookingState, SeatId};
use statecraft_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seat_booking=debug,statecraft_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Seat Booking: Statecraft Architecture ===\n");

    let env = BookingEnvironment::new(Arc::new(TerminalConfirmationSink));
    let store = Store::new(BookingState::auditorium(), BookingReducer::new(), env);

    let plan = store.state(|s| s.plan).await;
    println!(
        "Auditorium: {} rows × {} seats at ₹{} per seat",
        plan.rows, plan.cols, plan.price_per_seat
    );

    // Pick a few seats
    for seat in [3, 7, 12] {
        println!("\n>>> Sending: ToggleSeat {seat}");
        let _ = store.send(BookingAction::ToggleSeat { seat: SeatId::new(seat) }).await;
        let (label, total) = store.state(|s| (s.selected_label(), s.total())).await;
        println!("Seats Selected: {label}");
        println!("Total Price: ₹{total}");
    }

    // Change of heart about seat 3
    println!("\n>>> Sending: ToggleSeat 3 (again)");
    let _ = store.send(BookingAction::ToggleSeat { seat: SeatId::new(3) }).await;
    let (label, total) = store.state(|s| (s.selected_label(), s.total())).await;
    println!("Seats Selected: {label}");
    println!("Total Price: ₹{total}");

    // Confirm and wait for the dialog to be presented
    println!("\n>>> Sending: Confirm");
    match store
        .send_and_wait_for(
            BookingAction::Confirm,
            |a| matches!(a, BookingAction::ConfirmationPresented { .. }),
            Duration::from_secs(2),
        )
        .await
    {
        Ok(BookingAction::ConfirmationPresented { seats, total }) => {
            println!("Confirmation presented for {seats} seats, ₹{total}");
        },
        Ok(_) | Err(_) => println!("Confirmation was not presented"),
    }

    // Start over
    println!("\n>>> Sending: Reset");
    let _ = store.send(BookingAction::Reset).await;
    let (label, total) = store.state(|s| (s.selected_label(), s.total())).await;
    println!("Seats Selected: {label}");
    println!("Total Price: ₹{total}");

    // The miniature variant runs the exact same ledger over a smaller grid
    println!("\n=== Mini Seat Row ===\n");

    let env = BookingEnvironment::new(Arc::new(TerminalConfirmationSink));
    let mini = Store::new(BookingState::mini_row(), BookingReducer::new(), env);

    for seat in [2, 4] {
        let _ = mini.send(BookingAction::ToggleSeat { seat: SeatId::new(seat) }).await;
    }
    let label = mini.state(BookingState::selected_label).await;
    println!("Selected Seats: {label}");

    println!("\n=== Walkthrough Complete ===");
}
