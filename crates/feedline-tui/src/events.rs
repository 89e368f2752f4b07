//! UI event types.
//!
//! Everything that can change state flows through here: terminal input, the
//! frame heartbeat, and completions of spawned async operations (delivered
//! via the runtime's inbox channel).

use crossterm::event::Event as TerminalEvent;
use feedline_core::feed::{Feed, FeedError};
use feedline_core::session::AuthError;

use crate::common::TaskId;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Animation/render heartbeat.
    Tick,

    /// Start-of-loop layout event with the current terminal size.
    Frame { width: u16, height: u16 },

    /// Raw terminal input (keys, mouse, resize).
    Terminal(TerminalEvent),

    /// The token store has been read; resolves the session exactly once.
    SessionResolved { token: Option<String> },

    /// The backend exchange finished for a login task.
    LoginResult {
        task: TaskId,
        result: Result<String, AuthError>,
    },

    /// A feed fetch + synthesis finished.
    FeedResult {
        task: TaskId,
        result: Result<Feed, FeedError>,
    },
}
