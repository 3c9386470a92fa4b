//! # Watchlist Example
//!
//! A validated title form built on the Statecraft architecture.
//!
//! This example showcases:
//! - A controlled input: the draft lives in state and changes via actions
//! - Inline validation with no other error surface
//! - A derived success indicator recomputed on every read
//!
//! The only rejection in the whole feature is an empty or whitespace-only
//! title; everything else is accepted unconditionally.

pub mod reducer;
pub mod types;

pub use reducer::{WatchlistEnvironment, WatchlistReducer};
pub use types::{WatchlistAction, WatchlistEntry, WatchlistState};
