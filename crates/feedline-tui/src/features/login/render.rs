//! Login screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{Field, LoginState};
use crate::common::layout::centered_rect;
use crate::render::spinner_glyph;
use crate::state::AppState;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 14;

/// Renders the login screen (public route).
pub fn render_login(state: &AppState, frame: &mut Frame, area: Rect) {
    let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" feedline ");
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let para = Paragraph::new(form_lines(&state.login, state.spinner_frame));
    frame.render_widget(para, inner);
}

fn form_lines(login: &LoginState, spinner_frame: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Sign in to your account",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Email", &login.email, login.focus == Field::Email, false),
        Line::from(""),
        field_line(
            "Password",
            &login.password,
            login.focus == Field::Password,
            true,
        ),
        Line::from(""),
    ];

    if login.pending {
        lines.push(Line::from(Span::styled(
            format!("{} Signing in...", spinner_glyph(spinner_frame)),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &login.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab switch field · Enter sign in · Esc quit",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn field_line(label: &str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let pointer = if focused { ">" } else { " " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{pointer} {label:<9} "), label_style),
        Span::styled(shown, Style::default().fg(Color::White)),
        Span::styled(cursor.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}
