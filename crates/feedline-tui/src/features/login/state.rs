//! Login form state.

use feedline_core::session::Credential;

/// Form-level length bounds. These are presentation rules; the session
/// machine enforces its own (smaller) contract independently.
const EMAIL_MIN_LEN: usize = 5;
const PASSWORD_MIN_LEN: usize = 6;
const PASSWORD_MAX_LEN: usize = 50;

/// Which input field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Login form state.
#[derive(Debug)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: Field,
    /// Validation or backend failure message shown under the form.
    pub error: Option<String>,
    /// True while a backend exchange is in flight (input disabled).
    pub pending: bool,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: Field::Email,
            error: None,
            pending: false,
        }
    }

    /// The value of the focused field.
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
    }

    /// Validates the form and produces a credential ready for submission.
    ///
    /// Checks the presentation-level length bounds first, then the
    /// credential's own contract (address-shaped email, non-empty password).
    ///
    /// # Errors
    /// Returns the first failing rule as a display message.
    pub fn validate_form(&self) -> Result<Credential, String> {
        let email = self.email.trim();
        if email.len() < EMAIL_MIN_LEN {
            return Err(format!(
                "email must be at least {EMAIL_MIN_LEN} characters"
            ));
        }
        if self.password.len() < PASSWORD_MIN_LEN {
            return Err(format!(
                "password must be at least {PASSWORD_MIN_LEN} characters"
            ));
        }
        if self.password.len() > PASSWORD_MAX_LEN {
            return Err(format!(
                "password must be at most {PASSWORD_MAX_LEN} characters"
            ));
        }

        let credential = Credential::new(email, self.password.clone());
        credential.validate().map_err(|e| e.to_string())?;
        Ok(credential)
    }

    /// Clears transient fields after a successful login.
    pub fn after_success(&mut self) {
        self.password.clear();
        self.error = None;
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginState {
        LoginState {
            email: email.to_string(),
            password: password.to_string(),
            ..LoginState::new()
        }
    }

    #[test]
    fn test_valid_form_produces_credential() {
        let credential = form("user@example.com", "secret1").validate_form().unwrap();
        assert_eq!(credential.email, "user@example.com");
        assert_eq!(credential.password, "secret1");
    }

    #[test]
    fn test_short_email_rejected() {
        assert!(form("a@b", "secret1").validate_form().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let err = form("not-an-email", "secret1").validate_form().unwrap_err();
        assert!(err.contains("email"));
    }

    #[test]
    fn test_password_bounds() {
        assert!(form("user@example.com", "short").validate_form().is_err());
        assert!(form("user@example.com", &"x".repeat(51))
            .validate_form()
            .is_err());
        assert!(form("user@example.com", &"x".repeat(50))
            .validate_form()
            .is_ok());
    }

    #[test]
    fn test_email_is_trimmed() {
        let credential = form("  user@example.com  ", "secret1")
            .validate_form()
            .unwrap();
        assert_eq!(credential.email, "user@example.com");
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = LoginState::new();
        assert_eq!(state.focus, Field::Email);
        state.cycle_focus();
        assert_eq!(state.focus, Field::Password);
        state.cycle_focus();
        assert_eq!(state.focus, Field::Email);
    }
}
