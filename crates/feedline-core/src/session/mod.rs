//! Session state machine.
//!
//! Owns the authentication status for the current process and is the single
//! source of truth consumed by route admission. The status starts
//! `Unresolved`, is resolved exactly once from the token store, and is then
//! mutated only by `login` and `logout`.
//!
//! The manager is an explicitly owned, injectable value: callers construct it
//! with a [`TokenStore`] and hold it where their architecture needs it, rather
//! than reaching into ambient globals.

pub mod backend;
pub mod token_store;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

pub use backend::{AuthBackend, AuthError, SimulatedBackend};
pub use token_store::{TokenStore, mask_token};

/// Simple address-shaped email pattern (same rule the login form previews).
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Authentication status of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not yet resolved from the token store; no admission decision is
    /// trustworthy in this state.
    Unresolved,
    /// Logged in with a non-empty opaque token.
    Authenticated(String),
    /// Resolved, no session.
    Unauthenticated,
}

/// A transient login credential. Never persisted, never logged.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Local validation: address-shaped email, non-empty password.
    ///
    /// Length bounds are a presentation concern enforced by the login form,
    /// not here.
    ///
    /// # Errors
    /// Returns `LoginError::InvalidCredentials` describing the first failing
    /// field.
    pub fn validate(&self) -> Result<(), LoginError> {
        if !EMAIL_RE.is_match(&self.email) {
            return Err(LoginError::InvalidCredentials(
                "invalid email format".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(LoginError::InvalidCredentials(
                "password is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Failure modes of `login`. The session state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Local validation failed; recovered by re-prompting.
    InvalidCredentials(String),
    /// The authentication collaborator failed; retryable.
    Backend(AuthError),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials(reason) => write!(f, "{reason}"),
            LoginError::Backend(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<AuthError> for LoginError {
    fn from(e: AuthError) -> Self {
        LoginError::Backend(e)
    }
}

/// Session state machine: `Unresolved` → `Authenticated` | `Unauthenticated`.
#[derive(Debug)]
pub struct SessionManager {
    store: TokenStore,
    status: SessionStatus,
}

impl SessionManager {
    /// Creates an unresolved session backed by the given store.
    pub fn new(store: TokenStore) -> Self {
        Self {
            store,
            status: SessionStatus::Unresolved,
        }
    }

    /// Resolves the session from the token store.
    ///
    /// Only transitions out of `Unresolved`; later calls are no-ops, so the
    /// resolve-once contract holds even if wired into a retriable path.
    pub fn initialize(&mut self) {
        let token = self.store.get();
        self.complete_initialize(token);
    }

    /// Applies an already-read stored token to an unresolved session.
    ///
    /// Split-phase half of [`Self::initialize`] for event-driven callers that
    /// read the store off the UI thread.
    pub fn complete_initialize(&mut self, token: Option<String>) {
        if self.status != SessionStatus::Unresolved {
            return;
        }
        self.status = match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                debug!("session restored from token store");
                SessionStatus::Authenticated(token)
            }
            None => SessionStatus::Unauthenticated,
        };
    }

    /// Validates the credential, exchanges it with the backend, persists the
    /// token, and transitions to `Authenticated`.
    ///
    /// On any failure the session state is left unchanged.
    ///
    /// # Errors
    /// `InvalidCredentials` on local validation failure, `Backend` when the
    /// collaborator fails.
    pub async fn login<B: AuthBackend>(
        &mut self,
        credential: &Credential,
        backend: &B,
    ) -> Result<(), LoginError> {
        credential.validate()?;
        let token = backend
            .login(&credential.email, &credential.password)
            .await?;
        self.complete_login(token);
        Ok(())
    }

    /// Persists a freshly issued token and transitions to `Authenticated`.
    ///
    /// Split-phase half of [`Self::login`] for event-driven callers that run
    /// the backend exchange off the UI thread. If several exchanges race, the
    /// last completed call wins. An empty token resolves to
    /// `Unauthenticated` to keep the status/token invariant.
    pub fn complete_login(&mut self, token: String) {
        if token.is_empty() {
            self.status = SessionStatus::Unauthenticated;
            return;
        }
        self.store.set(&token);
        info!("logged in (token {})", mask_token(&token));
        self.status = SessionStatus::Authenticated(token);
    }

    /// Clears the persisted token and transitions to `Unauthenticated`.
    /// Always succeeds; idempotent.
    pub fn logout(&mut self) {
        self.store.clear();
        if self.status != SessionStatus::Unauthenticated {
            info!("logged out");
        }
        self.status = SessionStatus::Unauthenticated;
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated(_))
    }

    pub fn is_resolving(&self) -> bool {
        self.status == SessionStatus::Unresolved
    }

    /// The current session token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Authenticated(token) => Some(token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnreachableBackend;

    impl AuthBackend for UnreachableBackend {
        async fn login(&self, _email: &str, _password: &str) -> Result<String, AuthError> {
            Err(AuthError::Unreachable("connection refused".to_string()))
        }
    }

    fn manager_in(dir: &tempfile::TempDir) -> SessionManager {
        SessionManager::new(TokenStore::at(dir.path().join("session.json")))
    }

    #[test]
    fn test_starts_unresolved() {
        let dir = tempfile::tempdir().unwrap();
        let session = manager_in(&dir);
        assert!(session.is_resolving());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_initialize_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();

        assert!(!session.is_resolving());
        assert!(!session.is_authenticated());
        assert_eq!(*session.status(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn test_initialize_with_stored_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("session.json"));
        store.set("fl-persisted");

        let mut session = SessionManager::new(store);
        session.initialize();

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("fl-persisted"));
    }

    #[test]
    fn test_initialize_runs_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();
        assert!(!session.is_authenticated());

        // A token appearing later must not flip an already-resolved session.
        TokenStore::at(dir.path().join("session.json")).set("fl-late");
        session.initialize();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_success_transitions_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();
        assert_eq!(*session.status(), SessionStatus::Unauthenticated);

        let credential = Credential::new("user@example.com", "secret1");
        session
            .login(&credential, &SimulatedBackend::instant())
            .await
            .unwrap();

        assert!(session.is_authenticated());
        // Round trip: the store now holds the same token the status reflects.
        let stored = TokenStore::at(dir.path().join("session.json")).get();
        assert_eq!(stored.as_deref(), session.token());
    }

    #[tokio::test]
    async fn test_login_invalid_email_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();

        let err = session
            .login(
                &Credential::new("bad", "x"),
                &SimulatedBackend::instant(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::InvalidCredentials(_)));
        assert_eq!(*session.status(), SessionStatus::Unauthenticated);
        assert_eq!(TokenStore::at(dir.path().join("session.json")).get(), None);
    }

    #[tokio::test]
    async fn test_login_empty_password_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();

        let err = session
            .login(
                &Credential::new("user@example.com", ""),
                &SimulatedBackend::instant(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn test_login_backend_failure_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();

        let err = session
            .login(
                &Credential::new("user@example.com", "secret1"),
                &UnreachableBackend,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::Backend(AuthError::Unreachable(_))));
        assert_eq!(*session.status(), SessionStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_logout_then_fresh_initialize_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();
        session
            .login(
                &Credential::new("user@example.com", "secret1"),
                &SimulatedBackend::instant(),
            )
            .await
            .unwrap();
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        // Idempotent.
        session.logout();

        let mut fresh = manager_in(&dir);
        fresh.initialize();
        assert_eq!(*fresh.status(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn test_last_completed_login_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();

        session.complete_login("fl-first".to_string());
        session.complete_login("fl-second".to_string());

        assert_eq!(session.token(), Some("fl-second"));
        let stored = TokenStore::at(dir.path().join("session.json")).get();
        assert_eq!(stored.as_deref(), Some("fl-second"));
    }

    #[test]
    fn test_empty_token_never_authenticates() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = manager_in(&dir);
        session.initialize();

        session.complete_login(String::new());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_credential_validation() {
        assert!(Credential::new("user@example.com", "secret1")
            .validate()
            .is_ok());
        assert!(Credential::new("no-at-sign.com", "secret1")
            .validate()
            .is_err());
        assert!(Credential::new("a@b", "secret1").validate().is_err());
        assert!(Credential::new("spaced user@example.com", "secret1")
            .validate()
            .is_err());
        assert!(Credential::new("user@example.com", "").validate().is_err());
    }
}
