//! Authentication collaborator contract.
//!
//! The session machine talks to its backend through [`AuthBackend`] so a real
//! service can replace the simulated one without touching the state machine.

use std::fmt;
use std::time::Duration;

/// Failure modes of the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend rejected the credentials.
    InvalidCredentials,
    /// The backend could not be reached or answered abnormally.
    Unreachable(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
            AuthError::Unreachable(reason) => write!(f, "authentication backend: {reason}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Exchange a credential for an opaque session token.
pub trait AuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<String, AuthError>;
}

/// Simulated backend: accepts any locally-valid credential after a short
/// artificial delay and mints a fresh opaque token.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    /// Artificial round-trip latency of the simulated service.
    const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// A backend that answers immediately. Useful in tests.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthBackend for SimulatedBackend {
    async fn login(&self, _email: &str, _password: &str) -> Result<String, AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(format!("fl-{}", uuid::Uuid::new_v4().simple()))
    }
}
