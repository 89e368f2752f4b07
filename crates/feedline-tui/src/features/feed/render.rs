//! Feed view rendering.
//!
//! Only the rows intersecting the viewport (plus overscan) are turned into
//! lines; the rest of the feed stays untouched data. `render_item` is a pure
//! function of `(index, feed, width)` so the windowing layer may call it in
//! any order, any number of times, and skip indices outside the window.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use feedline_core::feed::Feed;

use crate::common::layout::centered_rect;
use crate::common::text::{first_line, truncate_with_ellipsis};
use crate::render::spinner_glyph;
use crate::state::AppState;

/// Rows used by the feed header above the list.
pub const FEED_HEADER_HEIGHT: u16 = 2;

/// Renders the feed screen (protected route).
pub fn render_feed(state: &AppState, frame: &mut Frame, area: Rect) {
    if let Some(error) = &state.feed.error {
        render_error(frame, area, &error.to_string());
        return;
    }

    let Some(feed) = &state.feed.feed else {
        render_loading(state, frame, area);
        return;
    };

    let header_area = Rect::new(area.x, area.y, area.width, FEED_HEADER_HEIGHT.min(area.height));
    let list_area = Rect::new(
        area.x,
        area.y + header_area.height,
        area.width,
        area.height.saturating_sub(header_area.height),
    );

    render_header(state, feed, frame, header_area);
    render_list(state, feed, frame, list_area);
}

fn render_header(state: &AppState, feed: &Feed, frame: &mut Frame, area: Rect) {
    let viewport = &state.feed.viewport;
    let height = state.feed.viewport_height;
    let first_row = viewport.offset / viewport.item_height + 1;
    let last_row = ((viewport.offset + height) / viewport.item_height).min(feed.len());

    let lines = vec![
        Line::from(Span::styled(
            " Post Feed",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                " {} posts · fetched {} · rows {}–{}",
                feed.len(),
                feed.fetched_at.with_timezone(&Local).format("%H:%M:%S"),
                first_row.min(feed.len()),
                last_row,
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list(state: &AppState, feed: &Feed, frame: &mut Frame, area: Rect) {
    let viewport = &state.feed.viewport;
    let height = area.height as usize;
    let width = area.width as usize;

    let visible = viewport.visible_range(feed.len(), height);
    let mut lines = Vec::with_capacity(visible.len() * viewport.item_height);
    for index in visible.clone() {
        lines.extend(render_item(index, feed, width));
    }

    // The window starts at the overscan edge; skip down to the scroll offset.
    let offset = viewport.offset.min(viewport.max_offset(feed.len(), height));
    let skip = offset - visible.start * viewport.item_height;
    let window: Vec<Line<'static>> = lines.into_iter().skip(skip).take(height).collect();

    frame.render_widget(Paragraph::new(window), area);
}

/// Renders one feed item as its fixed-height block of lines.
///
/// Pure: depends only on `(index, feed, width)`.
pub fn render_item(index: usize, feed: &Feed, width: usize) -> Vec<Line<'static>> {
    let item = &feed.items[index];

    let id_part = format!(" #{:<5}", item.id);
    let owner_part = format!("u{:<3} ", item.owner_id);
    let title_width = width.saturating_sub(id_part.len() + owner_part.len());

    vec![
        Line::from(vec![
            Span::styled(id_part, Style::default().fg(Color::Cyan)),
            Span::styled(owner_part, Style::default().fg(Color::DarkGray)),
            Span::styled(
                truncate_with_ellipsis(&item.title, title_width),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "        {}",
                truncate_with_ellipsis(first_line(&item.body), width.saturating_sub(8))
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ]
}

fn render_loading(state: &AppState, frame: &mut Frame, area: Rect) {
    let rect = centered_rect(area, 30, 1);
    let line = Line::from(Span::styled(
        format!("{} Loading posts...", spinner_glyph(state.spinner_frame)),
        Style::default().fg(Color::Yellow),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let rect = centered_rect(area, 50, 5);
    let lines = vec![
        Line::from(Span::styled(
            "Failed to load the feed",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "r retry · l log out · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
