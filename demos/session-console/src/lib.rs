//! # Session Console Example
//!
//! A two-section screen built by composing reducers in the Statecraft
//! architecture.
//!
//! This example showcases:
//! - `combine_reducers`: one action stream observed by several reducers
//! - `scope_reducer`: the console reducer owns only its slice of the state
//! - Typed events: clicks, input changes and submits all flow through one
//!   action enum and land in a short interaction log
//!
//! The screen is fully synchronous; every action is a plain state
//! transition, which keeps the composition easy to follow.

pub mod reducer;
pub mod types;

pub use reducer::{BannerReducer, ConsoleReducer, SessionEnvironment, SessionReducer};
pub use types::{ConsoleState, SessionAction, SessionState};
