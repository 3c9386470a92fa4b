//! Domain types for the session console.
//!
//! The screen has two sections sharing one action type: a banner message and
//! an event console that mirrors a typed input field and keeps a short log
//! of recent interactions.

use serde::{Deserialize, Serialize};

/// Number of console entries kept (most recent first)
pub const CONSOLE_LOG_CAP: usize = 6;

/// State of the event console section
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleState {
    /// Current content of the input field
    pub draft: String,
    /// Recent interactions, most recent first, capped at [`CONSOLE_LOG_CAP`]
    pub entries: Vec<String>,
}

impl ConsoleState {
    /// Prepend a log entry, keeping the newest [`CONSOLE_LOG_CAP`]
    pub fn log(&mut self, entry: impl Into<String>) {
        self.entries.insert(0, entry.into());
        self.entries.truncate(CONSOLE_LOG_CAP);
    }
}

/// State of the whole screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The banner message shown at the top
    pub banner: String,
    /// The event console section
    pub console: ConsoleState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            banner: "Welcome!".to_string(),
            console: ConsoleState::default(),
        }
    }
}

/// Actions for the session screen
///
/// One action type serves both sections; each reducer matches the variants
/// it owns and ignores the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// Replace the banner message
    SetBanner {
        /// The new banner text
        message: String,
    },

    /// A pointer click landed at the given coordinates
    PointerClicked {
        /// Horizontal position
        x: i32,
        /// Vertical position
        y: i32,
    },

    /// The input field changed
    DraftChanged {
        /// New content of the field
        text: String,
    },

    /// The form was submitted with the current draft as payload
    Submitted,
}
