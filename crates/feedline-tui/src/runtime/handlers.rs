//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that perform I/O and return the
//! completion `UiEvent`. They never touch application state; the runtime
//! spawns them and feeds their result back through the inbox.

use feedline_core::config::Config;
use feedline_core::feed::{Feed, FeedClient, FeedError, synthesize};
use feedline_core::session::{AuthBackend, Credential, SimulatedBackend, TokenStore};
use tracing::{debug, info};

use crate::common::TaskId;
use crate::events::UiEvent;

/// Reads the token store so the reducer can resolve the session.
pub async fn resolve_session() -> UiEvent {
    let token = TokenStore::new().get();
    debug!(
        "session resolved: {}",
        if token.is_some() { "token found" } else { "no token" }
    );
    UiEvent::SessionResolved { token }
}

/// Exchanges a validated credential with the auth backend.
pub async fn submit_login(task: TaskId, credential: Credential) -> UiEvent {
    let backend = SimulatedBackend::new();
    let result = backend
        .login(&credential.email, &credential.password)
        .await;
    UiEvent::LoginResult { task, result }
}

/// Fetches the upstream source and synthesizes the feed.
pub async fn fetch_feed(task: TaskId, config: Config, token: Option<String>) -> UiEvent {
    let target = config.target_count;
    let result = match FeedClient::new(&config, token) {
        Ok(client) => client.fetch_source().await.map(|source| {
            let items = synthesize(&source, target);
            info!(
                "synthesized {} items from {} source items",
                items.len(),
                source.len()
            );
            Feed::new(items)
        }),
        Err(e) => Err(FeedError::Network(e.to_string())),
    };
    UiEvent::FeedResult { task, result }
}
