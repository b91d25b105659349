//! Transcript rendering: styled cells to ratatui lines.

use convo_core::Transcript;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::cell::MessageCell;
use super::style::{Style as CellStyle, StyledLine};

/// Renders the whole transcript into display lines.
///
/// One cell per message plus a blank separator line after each cell. When
/// `selected` names a message (edit-select mode), that cell is rendered
/// reversed.
pub fn render_lines(
    transcript: &Transcript,
    width: usize,
    selected: Option<usize>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, message) in transcript.messages().iter().enumerate() {
        let highlighted = selected == Some(index);
        for styled in MessageCell::new(index, message).display_lines(width) {
            lines.push(convert_line(styled, highlighted));
        }
        lines.push(Line::default());
    }

    lines
}

/// Total rendered line count for the current width.
///
/// Used by the frame handler to keep scroll math accurate; transcripts here
/// are small enough to re-wrap per frame.
pub fn line_count(transcript: &Transcript, width: usize) -> usize {
    transcript
        .messages()
        .iter()
        .enumerate()
        .map(|(index, message)| MessageCell::new(index, message).display_lines(width).len() + 1)
        .sum()
}

fn convert_line(styled: StyledLine, highlighted: bool) -> Line<'static> {
    let spans: Vec<Span<'static>> = styled
        .spans
        .into_iter()
        .map(|s| {
            let mut style = convert_style(s.style);
            if highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(s.text, style)
        })
        .collect();
    Line::from(spans)
}

fn convert_style(style: CellStyle) -> Style {
    match style {
        CellStyle::Plain => Style::default(),
        CellStyle::HumanLabel => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStyle::GptLabel => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        CellStyle::HumanPrefix => Style::default().fg(Color::Green),
        CellStyle::GptPrefix => Style::default().fg(Color::Cyan),
        CellStyle::Body => Style::default().fg(Color::White),
        CellStyle::TurnNumber => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    }
}
