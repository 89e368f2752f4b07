//! Feed feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use feedline_core::feed::{Feed, FeedError};
use tracing::warn;

use super::state::FeedState;
use crate::effects::UiEffect;
use crate::state::AppState;

/// Handles a key on the feed screen.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let item_count = state.feed.item_count();
    let height = state.feed.viewport_height;
    let step = state.feed.viewport.item_height;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Char('l') => return vec![UiEffect::Logout],
        KeyCode::Char('r') => {
            // Retry path: clearing the error lets the next admission pass
            // kick off a fresh fetch.
            if state.feed.error.is_some() {
                state.feed.clear_error();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => state.feed.viewport.scroll_up(step),
        KeyCode::Down | KeyCode::Char('j') => {
            state.feed.viewport.scroll_down(step, item_count, height);
        }
        KeyCode::PageUp => state.feed.viewport.page_up(height),
        KeyCode::PageDown => state.feed.viewport.page_down(item_count, height),
        KeyCode::Home | KeyCode::Char('g') => state.feed.viewport.to_top(),
        KeyCode::End | KeyCode::Char('G') => state.feed.viewport.to_bottom(item_count, height),
        _ => {}
    }
    vec![]
}

/// Applies a mouse-wheel delta (positive scrolls down).
pub fn scroll_lines(state: &mut AppState, delta: i32) {
    let item_count = state.feed.item_count();
    let height = state.feed.viewport_height;
    if delta < 0 {
        state.feed.viewport.scroll_up(delta.unsigned_abs() as usize);
    } else {
        state
            .feed
            .viewport
            .scroll_down(delta as usize, item_count, height);
    }
}

/// Applies a completed fetch to the feed slice.
pub fn handle_feed_result(feed: &mut FeedState, result: Result<Feed, FeedError>) {
    match result {
        Ok(snapshot) => feed.set_feed(snapshot),
        Err(e) => {
            warn!("feed fetch failed: {e}");
            feed.set_error(e);
        }
    }
}
