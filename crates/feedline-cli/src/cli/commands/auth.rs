//! Headless session commands.

use anyhow::Result;
use feedline_core::session::{
    Credential, SessionManager, SimulatedBackend, TokenStore, mask_token,
};

/// Logs in against the simulated backend and persists the token.
pub async fn login(email: &str, password: &str) -> Result<()> {
    let mut session = SessionManager::new(TokenStore::new());
    session.initialize();

    let credential = Credential::new(email, password);
    session
        .login(&credential, &SimulatedBackend::new())
        .await
        .map_err(|e| anyhow::anyhow!("Login failed: {e}"))?;

    if let Some(token) = session.token() {
        println!("Logged in as {email} (token {})", mask_token(token));
    }
    Ok(())
}

/// Clears the persisted session token. Idempotent.
pub fn logout() -> Result<()> {
    let mut session = SessionManager::new(TokenStore::new());
    session.initialize();
    session.logout();
    println!("Logged out");
    Ok(())
}

/// Reports whether a session is stored.
pub fn status() -> Result<()> {
    let mut session = SessionManager::new(TokenStore::new());
    session.initialize();

    match session.token() {
        Some(token) => println!("Signed in (token {})", mask_token(token)),
        None => println!("Signed out"),
    }
    Ok(())
}
