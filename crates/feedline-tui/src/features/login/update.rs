//! Login feature reducer.
//!
//! Handles form input and processes the backend exchange result.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feedline_core::session::{AuthError, LoginError, SessionManager};

use super::state::LoginState;
use crate::effects::UiEffect;
use crate::state::AppState;

/// Handles a key on the login screen.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Esc {
        return vec![UiEffect::Quit];
    }

    // Input is disabled while the exchange is in flight.
    if state.login.pending {
        return vec![];
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.login.cycle_focus();
            vec![]
        }
        KeyCode::Enter => submit(state),
        KeyCode::Backspace => {
            state.login.focused_value_mut().pop();
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.login.focused_value_mut().push(c);
            vec![]
        }
        _ => vec![],
    }
}

/// Validates the form and, on success, kicks off the backend exchange.
fn submit(state: &mut AppState) -> Vec<UiEffect> {
    match state.login.validate_form() {
        Ok(credential) => {
            state.login.error = None;
            state.login.pending = true;
            let task = state.task_seq.next_id();
            state.tasks.login.start(task);
            vec![UiEffect::SubmitLogin { task, credential }]
        }
        Err(message) => {
            state.login.error = Some(message);
            vec![]
        }
    }
}

/// Applies the backend exchange result to the session and the form.
///
/// On success the session transitions to authenticated (the next admission
/// pass redirects to the feed). On failure the form re-prompts with a
/// retryable message and the session state is unchanged.
pub fn handle_login_result(
    login: &mut LoginState,
    session: &mut SessionManager,
    result: Result<String, AuthError>,
) {
    match result {
        Ok(token) => {
            session.complete_login(token);
            login.after_success();
        }
        Err(e) => {
            login.pending = false;
            login.error = Some(LoginError::Backend(e).to_string());
        }
    }
}
