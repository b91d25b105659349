//! Composer rendering: bordered input box with dynamic height and cursor.

use convo_core::Role;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::text_buffer::TextBuffer;
use crate::state::{AppState, Mode};

/// Minimum input height including borders (one content row).
pub const INPUT_HEIGHT_MIN: u16 = 3;

/// Maximum input height including borders.
pub const INPUT_HEIGHT_MAX: u16 = 12;

/// The input never takes more than this share of the terminal.
const INPUT_HEIGHT_MAX_PERCENT: f32 = 0.4;

/// Wrapped buffer content with the cursor's visual position.
struct WrappedBuffer {
    lines: Vec<Line<'static>>,
    cursor_row: usize,
    cursor_col: usize,
}

/// Dynamic input height: tracks content line count between the fixed
/// minimum and maximum, additionally capped at 40% of the terminal.
pub fn input_height(buffer: &TextBuffer, terminal_height: u16) -> u16 {
    let content_lines = buffer.lines().len() as u16;
    let desired = content_lines.saturating_add(2);

    let percent_cap = (f32::from(terminal_height) * INPUT_HEIGHT_MAX_PERCENT) as u16;
    let max = INPUT_HEIGHT_MAX.min(percent_cap.max(INPUT_HEIGHT_MIN));

    desired.clamp(INPUT_HEIGHT_MIN, max)
}

/// Renders the input area with mode-dependent border and title.
pub fn render_composer(app: &AppState, frame: &mut Frame, area: Rect) {
    let (border_style, title) = composer_chrome(app);
    let message_count = app.editor.transcript().len();
    let count_title = format!(
        " {message_count} message{} ",
        if message_count == 1 { "" } else { "s" }
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_bottom(
            Line::from(Span::styled(
                count_title,
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
        );

    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        frame.render_widget(block, area);
        return;
    }

    let wrapped = wrap_buffer(&app.composer.buffer, inner.width as usize);

    // Keep the cursor visible when content overflows the box.
    let viewport = inner.height as usize;
    let scroll = if wrapped.cursor_row >= viewport {
        wrapped.cursor_row - viewport + 1
    } else {
        0
    };

    let visible: Vec<Line> = wrapped
        .lines
        .into_iter()
        .skip(scroll)
        .take(viewport)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);

    // No terminal cursor while picking a message to edit.
    if matches!(app.mode, Mode::Selecting { .. }) {
        return;
    }

    let cursor_x = inner.x + wrapped.cursor_col as u16;
    let cursor_y = inner.y + (wrapped.cursor_row - scroll) as u16;
    if cursor_x < inner.x + inner.width && cursor_y < inner.y + inner.height {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Border style and title for the current editing mode.
fn composer_chrome(app: &AppState) -> (Style, Line<'static>) {
    if let Some(index) = app.editor.amend_target() {
        let role = app.editor.draft_role();
        let style = Style::default().fg(Color::Yellow);
        let title = Line::from(Span::styled(
            format!(
                " editing #{} ({}) — Enter saves, Esc cancels ",
                index + 1,
                role.label()
            ),
            style,
        ));
        return (style, title);
    }

    if matches!(app.mode, Mode::Selecting { .. }) {
        let style = Style::default().fg(Color::DarkGray);
        let title = Line::from(Span::styled(" pick a message to edit ", style));
        return (style, title);
    }

    let role = app.editor.draft_role();
    let role_style = match role {
        Role::Human => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Role::Gpt => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    };
    let title = Line::from(vec![
        Span::styled(format!(" {} ", role.label()), role_style),
        Span::styled("Ctrl+R switches ", Style::default().fg(Color::DarkGray)),
    ]);
    (Style::default().fg(Color::DarkGray), title)
}

/// Wraps buffer lines to the available width, tracking where the cursor
/// lands visually. Display-width aware (CJK and emoji take two columns).
fn wrap_buffer(buffer: &TextBuffer, width: usize) -> WrappedBuffer {
    let width = width.max(1);
    let (cursor_line, cursor_col) = buffer.cursor();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor_visual = (0usize, 0usize);

    for (line_idx, logical) in buffer.lines().iter().enumerate() {
        let is_cursor_line = line_idx == cursor_line;

        let mut current = String::new();
        let mut current_width = 0usize;

        for (char_idx, ch) in logical.chars().enumerate() {
            let ch_width = ch.width().unwrap_or(0);

            if current_width + ch_width > width && current_width > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
            }

            if is_cursor_line && char_idx == cursor_col {
                cursor_visual = (lines.len(), current_width);
            }

            current.push(ch);
            current_width += ch_width;
        }

        if is_cursor_line && cursor_col >= logical.chars().count() {
            // Cursor sits past the last char of this logical line.
            if current_width >= width {
                lines.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
            }
            cursor_visual = (lines.len(), current_width);
        }

        lines.push(Line::from(current));
    }

    WrappedBuffer {
        lines,
        cursor_row: cursor_visual.0,
        cursor_col: cursor_visual.1,
    }
}
