//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::common::text::truncate_with_ellipsis;
use crate::features::composer::render as composer_render;
use crate::features::transcript::render as transcript_render;
use crate::state::{AppState, FlashKind, Mode};

/// Height of the status line below the input.
const STATUS_HEIGHT: u16 = 1;

/// Horizontal padding on each side of the transcript.
const TRANSCRIPT_MARGIN: u16 = 1;

/// Column reserved for the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let input_height = composer_render::input_height(&app.composer.buffer, area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(input_height),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_transcript(app, frame, chunks[0]);
    composer_render::render_composer(app, frame, chunks[1]);
    render_status_line(app, frame, chunks[2]);
}

/// Content width available to transcript cells.
pub fn transcript_content_width(terminal_width: u16) -> usize {
    terminal_width.saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH) as usize
}

/// Lines available to the transcript pane for the given terminal height.
pub fn transcript_viewport_height(app: &AppState, terminal_height: u16) -> usize {
    let input_height = composer_render::input_height(&app.composer.buffer, terminal_height);
    terminal_height.saturating_sub(input_height + STATUS_HEIGHT) as usize
}

fn render_transcript(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = transcript_content_width(area.width);
    let viewport = area.height as usize;

    let transcript = app.editor.transcript();
    if transcript.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No messages yet. Type below and press Enter.",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )));
        let hint_area = Rect {
            x: area.x + TRANSCRIPT_MARGIN,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(TRANSCRIPT_MARGIN * 2),
            height: 1,
        };
        frame.render_widget(hint, hint_area);
        return;
    }

    let selected = match app.mode {
        Mode::Selecting { index } => Some(index),
        Mode::Composing => None,
    };

    let all_lines = transcript_render::render_lines(transcript, width, selected);
    let total = all_lines.len();

    let max_offset = total.saturating_sub(viewport);
    let offset = app.view.offset().min(max_offset);

    let visible: Vec<Line<'static>> = all_lines
        .into_iter()
        .skip(offset)
        .take(viewport)
        .collect();

    // Bottom-align: pad at the top when content doesn't fill the pane.
    let lines: Vec<Line<'static>> = if visible.len() < viewport {
        let mut padded = vec![Line::default(); viewport - visible.len()];
        padded.extend(visible);
        padded
    } else {
        visible
    };

    // Content is pre-wrapped; no Paragraph wrap here or lines double-wrap.
    let content_area = Rect {
        x: area.x + TRANSCRIPT_MARGIN,
        y: area.y,
        width: area.width.saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH),
        height: area.height,
    };
    frame.render_widget(Paragraph::new(lines), content_area);

    if total > viewport {
        let mut scrollbar_state = ScrollbarState::new(max_offset).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let line = if let Some(flash) = &app.flash {
        let style = match flash.kind {
            FlashKind::Info => Style::default().fg(Color::Green),
            FlashKind::Error => Style::default().fg(Color::Red),
        };
        let text = truncate_with_ellipsis(&flash.text, area.width.saturating_sub(2) as usize);
        Line::from(Span::styled(format!(" {text}"), style))
    } else {
        hint_line(app)
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the current mode.
fn hint_line(app: &AppState) -> Line<'static> {
    let key = Style::default().fg(Color::DarkGray);

    let hints: &[(&str, &str)] = if matches!(app.mode, Mode::Selecting { .. }) {
        &[("↑/↓", " move  "), ("Enter", " edit  "), ("Esc", " back")]
    } else if app.editor.is_amending() {
        &[
            ("Enter", " save  "),
            ("Esc", " cancel edit  "),
            ("Ctrl+E", " pick another"),
        ]
    } else {
        &[
            ("Enter", " send  "),
            ("Shift+Enter", " newline  "),
            ("Ctrl+E", " edit  "),
            ("Ctrl+S", " save  "),
            ("Ctrl+Y", " copy  "),
            ("Ctrl+L", " clear  "),
            ("Ctrl+C", " quit"),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    for (k, action) in hints {
        spans.push(Span::styled((*k).to_string(), key));
        spans.push(Span::raw((*action).to_string()));
    }
    Line::from(spans)
}
