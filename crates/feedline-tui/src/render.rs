//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects.
//!
//! The resolving placeholder is rendered before any route content: while the
//! session is unresolved, neither protected nor public content appears.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::layout::centered_rect;
use crate::route::Route;
use crate::state::AppState;
use crate::{feed, login};

/// Height of the status line at the bottom.
pub const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for pending-state animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Render frames per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 6;

/// Returns the spinner glyph for an animation frame counter.
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[(frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let main_area = Rect::new(
        area.x,
        area.y,
        area.width,
        area.height.saturating_sub(STATUS_HEIGHT),
    );
    let status_area = Rect::new(
        area.x,
        area.y + main_area.height,
        area.width,
        STATUS_HEIGHT.min(area.height),
    );

    if state.session.is_resolving() {
        render_resolving_placeholder(state, frame, main_area);
    } else {
        match state.route {
            Route::Login => login::render_login(state, frame, main_area),
            Route::Feed => feed::render_feed(state, frame, main_area),
        }
    }

    render_status_line(state, frame, status_area);
}

/// Neutral placeholder shown until the session is resolved. No route content,
/// no redirect.
fn render_resolving_placeholder(state: &AppState, frame: &mut Frame, area: Rect) {
    let rect = centered_rect(area, 30, 1);
    let line = Line::from(Span::styled(
        format!("{} Restoring session...", spinner_glyph(state.spinner_frame)),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
}

fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let (auth_glyph, auth_label, auth_color) = if state.session.is_resolving() {
        ("·", "resolving", Color::DarkGray)
    } else if state.session.is_authenticated() {
        ("●", "signed in", Color::Green)
    } else {
        ("○", "signed out", Color::DarkGray)
    };

    let hints = match state.route {
        Route::Login => "Tab fields · Enter sign in · Esc quit",
        Route::Feed => "j/k scroll · l log out · q quit",
    };

    let left = format!(" feedline · {}", state.route.label());
    let right = format!("{hints}  {auth_glyph} {auth_label} ");
    let gap = (area.width as usize).saturating_sub(left.len() + right.chars().count());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(gap)),
        Span::styled(hints.to_string(), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            format!("{auth_glyph} {auth_label} "),
            Style::default().fg(auth_color),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
