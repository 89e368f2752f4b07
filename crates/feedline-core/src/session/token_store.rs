//! Session token persistence.
//!
//! Stores the session token in `${FEEDLINE_HOME}/session.json` with restricted
//! permissions (0600). Tokens are never logged or displayed in full.
//!
//! Storage trouble (missing file, unreadable file, malformed JSON, failed
//! write) is not an error the caller sees: reads degrade to "no token" and
//! writes are best-effort, so the session machine always gets a well-defined
//! answer.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::paths;

/// Persisted session layout: exactly one durable key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
}

/// Durable store for the single session token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Creates a store at the default session path.
    pub fn new() -> Self {
        Self {
            path: paths::session_path(),
        }
    }

    /// Creates a store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the persisted token, if any.
    ///
    /// Absence of the file means "no session". Any read or parse failure
    /// degrades to `None`.
    pub fn get(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read session from {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<StoredSession>(&contents) {
            Ok(stored) => stored.token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Failed to parse session from {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Persists the token. Best-effort: failures are logged and swallowed.
    pub fn set(&self, token: &str) {
        let stored = StoredSession {
            token: Some(token.to_string()),
        };
        let contents = match serde_json::to_string_pretty(&stored) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to serialize session: {e}");
                return;
            }
        };

        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("Failed to create directory {}: {e}", parent.display());
            return;
        }

        if let Err(e) = self.write_restricted(&contents) {
            warn!("Failed to write session to {}: {e}", self.path.display());
        }
    }

    /// Removes the persisted token. Idempotent and best-effort.
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!("Failed to remove session at {}: {e}", self.path.display());
        }
    }

    // Write with restricted permissions (0600 on unix).
    fn write_restricted(&self, contents: &str) -> std::io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(contents.as_bytes())
        }

        #[cfg(not(unix))]
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)?;
            file.write_all(contents.as_bytes())
        }
    }
}

/// Returns a masked version of a token for display (first 8 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.len() <= 12 {
        return "***".to_string();
    }
    format!("{}...", &token[..8])
}
