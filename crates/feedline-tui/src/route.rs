//! Route admission.
//!
//! Two logical routes: the public login screen and the protected feed view.
//! Admission is a pure function of the current session status; the reducer
//! applies it every frame before a route is rendered. While the session is
//! unresolved, no redirect is ever issued; the UI shows a neutral
//! placeholder instead, so stale or partially-initialized state can neither
//! leak protected content nor bounce the user around.

use feedline_core::session::SessionStatus;

/// Navigation targets of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public entry point (login screen).
    Login,
    /// Protected feed view.
    Feed,
}

impl Route {
    /// Resolves a route name. Unknown names fall back to the public entry
    /// point (catch-all).
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "feed" | "home" => Route::Feed,
            _ => Route::Login,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Feed => "feed",
        }
    }
}

/// Outcome of admitting a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Render the route's content.
    Allow,
    /// Session still resolving: render a neutral loading placeholder.
    Placeholder,
    /// Send the user to another route and re-admit there.
    Redirect(Route),
}

/// Decides whether `route` may be entered given `status`.
pub fn admit(route: Route, status: &SessionStatus) -> Admission {
    if *status == SessionStatus::Unresolved {
        return Admission::Placeholder;
    }

    let authenticated = matches!(status, SessionStatus::Authenticated(_));
    match route {
        Route::Feed => {
            if authenticated {
                Admission::Allow
            } else {
                Admission::Redirect(Route::Login)
            }
        }
        Route::Login => {
            if authenticated {
                Admission::Redirect(Route::Feed)
            } else {
                Admission::Allow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated() -> SessionStatus {
        SessionStatus::Authenticated("fl-token".to_string())
    }

    #[test]
    fn test_no_redirect_while_resolving() {
        assert_eq!(
            admit(Route::Feed, &SessionStatus::Unresolved),
            Admission::Placeholder
        );
        assert_eq!(
            admit(Route::Login, &SessionStatus::Unresolved),
            Admission::Placeholder
        );
    }

    #[test]
    fn test_protected_route_admission() {
        assert_eq!(admit(Route::Feed, &authenticated()), Admission::Allow);
        assert_eq!(
            admit(Route::Feed, &SessionStatus::Unauthenticated),
            Admission::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_public_route_admission() {
        assert_eq!(
            admit(Route::Login, &SessionStatus::Unauthenticated),
            Admission::Allow
        );
        assert_eq!(
            admit(Route::Login, &authenticated()),
            Admission::Redirect(Route::Feed)
        );
    }

    #[test]
    fn test_parse_falls_back_to_public_entry() {
        assert_eq!(Route::parse("feed"), Route::Feed);
        assert_eq!(Route::parse("home"), Route::Feed);
        assert_eq!(Route::parse("Feed "), Route::Feed);
        assert_eq!(Route::parse("login"), Route::Login);
        assert_eq!(Route::parse("no-such-route"), Route::Login);
        assert_eq!(Route::parse(""), Route::Login);
    }
}
