//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::feed::FEED_HEADER_HEIGHT;
use crate::render::STATUS_HEIGHT;
use crate::route::{self, Admission, Route};
use crate::state::AppState;
use crate::{feed, login};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(state, width, height);
            apply_admission(state)
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),
        UiEvent::SessionResolved { token } => {
            state.session.complete_initialize(token);
            apply_admission(state)
        }
        UiEvent::LoginResult { task, result } => {
            // A completion that no longer matches the active task is stale:
            // the last completed call wins and stragglers are discarded.
            if !state.tasks.login.finish_if_active(task) {
                return vec![];
            }
            login::handle_login_result(&mut state.login, &mut state.session, result);
            apply_admission(state)
        }
        UiEvent::FeedResult { task, result } => {
            if !state.tasks.feed_fetch.finish_if_active(task) {
                return vec![];
            }
            feed::handle_feed_result(&mut state.feed, result);
            vec![]
        }
    }
}

fn handle_frame(state: &mut AppState, _width: u16, height: u16) {
    let main_height = height.saturating_sub(STATUS_HEIGHT);
    state.feed.viewport_height = main_height.saturating_sub(FEED_HEADER_HEIGHT) as usize;
}

/// Applies route admission for the current session state.
///
/// Redirects are followed until a route is allowed (or the placeholder is
/// shown); no redirect is ever issued while the session is resolving.
/// Entering the feed with nothing loaded kicks off a fetch.
fn apply_admission(state: &mut AppState) -> Vec<UiEffect> {
    loop {
        match route::admit(state.route, state.session.status()) {
            Admission::Redirect(next) => state.route = next,
            Admission::Allow | Admission::Placeholder => break,
        }
    }

    if state.route == Route::Feed
        && state.session.is_authenticated()
        && state.feed.needs_fetch()
        && !state.tasks.feed_fetch.is_running()
    {
        let task = state.task_seq.next_id();
        state.tasks.feed_fetch.start(task);
        return vec![UiEffect::FetchFeed { task }];
    }
    vec![]
}

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(state, key),
        Event::Mouse(mouse) => {
            if state.route == Route::Feed && !state.session.is_resolving() {
                let step = state.feed.viewport.item_height as i32;
                match mouse.kind {
                    MouseEventKind::ScrollUp => feed::scroll_lines(state, -step),
                    MouseEventKind::ScrollDown => feed::scroll_lines(state, step),
                    _ => {}
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // Until the session is resolved only the placeholder is on screen; route
    // input would act on a screen the user cannot see yet.
    if state.session.is_resolving() {
        return vec![];
    }

    match state.route {
        Route::Login => login::handle_key(state, key),
        Route::Feed => feed::handle_key(state, key),
    }
}
