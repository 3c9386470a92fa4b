//! Domain types for the watchlist form.
//!
//! A controlled input in miniature: the draft lives in state, every
//! keystroke flows through an action, and submission either appends an
//! entry or surfaces an inline validation message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single accepted title
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// The submitted title, trimmed
    pub title: String,
    /// When the title was accepted
    pub added_at: DateTime<Utc>,
}

/// State of the watchlist form
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WatchlistState {
    /// Current content of the input field
    pub draft: String,
    /// Accepted titles, oldest first
    pub entries: Vec<WatchlistEntry>,
    /// Inline validation message from the last rejected submit
    pub error: Option<String>,
}

impl WatchlistState {
    /// Creates a new empty form state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted titles
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the success line should show
    ///
    /// Derived, never stored: no validation message and at least one entry.
    #[must_use]
    pub fn submission_succeeded(&self) -> bool {
        self.error.is_none() && !self.entries.is_empty()
    }
}

/// Actions for the watchlist form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchlistAction {
    /// The input field changed
    DraftChanged {
        /// New content of the field
        text: String,
    },

    /// The form was submitted with the current draft
    Submit,
}
