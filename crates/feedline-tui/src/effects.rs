//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use feedline_core::session::Credential;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Read the token store and resolve the session.
    ResolveSession,

    /// Exchange a locally-validated credential with the auth backend.
    SubmitLogin { task: TaskId, credential: Credential },

    /// Fetch the upstream source and synthesize the feed.
    FetchFeed { task: TaskId },

    /// Clear the persisted token and drop the in-memory feed.
    Logout,
}
