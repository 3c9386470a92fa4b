//! Domain types for the seat booking simulator.
//!
//! A seating plan is a fixed rectangular grid; seats are numbered from 1 to
//! `rows × cols`. The selection is the set of seats the user has currently
//! chosen, and the total price is always derived from it, never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of one seat in a seating plan
///
/// Valid identifiers run from 1 to the plan's capacity, row by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(u32);

impl SeatId {
    /// Creates a seat identifier
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the seat number
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fixed rectangular seating grid with a flat per-seat rate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    /// Number of rows in the grid
    pub rows: u32,
    /// Number of seats per row
    pub cols: u32,
    /// Flat price per selected seat, in currency units
    pub price_per_seat: u64,
}

impl SeatingPlan {
    /// The full simulator grid: 5 rows of 10 seats at 150 per seat
    pub const AUDITORIUM: Self = Self {
        rows: 5,
        cols: 10,
        price_per_seat: 150,
    };

    /// The miniature variant: a single row of 5 seats at the same rate
    pub const MINI_ROW: Self = Self {
        rows: 1,
        cols: 5,
        price_per_seat: 150,
    };

    /// Total number of seats in the grid
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.rows * self.cols
    }

    /// Whether `seat` is a valid identifier for this plan
    #[must_use]
    pub const fn contains(&self, seat: SeatId) -> bool {
        seat.0 >= 1 && seat.0 <= self.capacity()
    }

    /// All seat identifiers of this plan, in grid order
    pub fn seats(&self) -> impl Iterator<Item = SeatId> {
        (1..=self.capacity()).map(SeatId)
    }
}

/// State of the seat selection ledger
///
/// Created empty; mutated only by toggle and reset actions. Membership in
/// `selected` is unique by construction, so toggling a selected seat always
/// removes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingState {
    /// The grid this selection is made against
    pub plan: SeatingPlan,
    /// The seats currently chosen
    pub selected: BTreeSet<SeatId>,
}

impl Default for SeatingPlan {
    fn default() -> Self {
        Self::AUDITORIUM
    }
}

impl BookingState {
    /// An empty selection against the full 5×10 auditorium
    #[must_use]
    pub fn auditorium() -> Self {
        Self {
            plan: SeatingPlan::AUDITORIUM,
            selected: BTreeSet::new(),
        }
    }

    /// An empty selection against the miniature single row
    #[must_use]
    pub fn mini_row() -> Self {
        Self {
            plan: SeatingPlan::MINI_ROW,
            selected: BTreeSet::new(),
        }
    }

    /// Number of seats currently selected
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether a given seat is currently selected
    #[must_use]
    pub fn is_selected(&self, seat: SeatId) -> bool {
        self.selected.contains(&seat)
    }

    /// Total price of the current selection
    ///
    /// Derived on every call: selection count times the plan's flat rate.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.selected.len() as u64 * self.plan.price_per_seat
    }

    /// The selection rendered for display: "3, 7" or "None"
    #[must_use]
    pub fn selected_label(&self) -> String {
        if self.selected.is_empty() {
            "None".to_string()
        } else {
            self.selected
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Actions for the seat selection ledger
///
/// Toggle, reset and confirm are user commands; `ConfirmationPresented` is
/// the event fed back once the confirmation effect has surfaced the dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingAction {
    /// Command: toggle a seat in or out of the selection
    ///
    /// Out-of-range identifiers are a caller error and are not defended
    /// against here.
    ToggleSeat {
        /// The seat to toggle
        seat: SeatId,
    },

    /// Command: clear the selection
    Reset,

    /// Command: surface a confirmation with the current count and total
    ///
    /// A no-op while the selection is empty.
    Confirm,

    /// Event: the confirmation dialog was presented
    ConfirmationPresented {
        /// Seats selected at the time of confirmation
        seats: usize,
        /// Total price at the time of confirmation
        total: u64,
    },
}
