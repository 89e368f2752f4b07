//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── route: Route            (current navigation target)
//! ├── session: SessionManager (auth status, single source of truth)
//! ├── login: LoginState       (form fields, focus, pending flag)
//! ├── feed: FeedState         (feed snapshot, viewport window)
//! ├── tasks: Tasks            (async task lifecycle)
//! └── config: Config
//! ```
//!
//! All mutation happens in the reducer (`update`); the runtime only executes
//! effects and feeds completion events back in.

use feedline_core::config::Config;
use feedline_core::session::{SessionManager, TokenStore};

use crate::common::{TaskSeq, Tasks};
use crate::features::feed::FeedState;
use crate::features::login::LoginState;
use crate::route::Route;

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Current route, re-admitted against the session every frame.
    pub route: Route,
    /// Session state machine consumed by route admission.
    pub session: SessionManager,
    /// Login form state.
    pub login: LoginState,
    /// Feed view state.
    pub feed: FeedState,
    /// Loaded configuration.
    pub config: Config,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the initial state: unresolved session, requested route.
    pub fn new(config: Config, requested: Route) -> Self {
        Self::with_session(config, requested, SessionManager::new(TokenStore::new()))
    }

    /// Creates a state around an explicit session manager.
    ///
    /// Tests use this to back the session with a temp-dir token store.
    pub fn with_session(config: Config, requested: Route, session: SessionManager) -> Self {
        Self {
            should_quit: false,
            route: requested,
            session,
            login: LoginState::new(),
            feed: FeedState::new(),
            config,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }
}
