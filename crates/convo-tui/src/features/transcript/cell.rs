//! Per-message display cells.
//!
//! Each committed message renders as a role label line followed by
//! gutter-prefixed, width-wrapped body lines. Wrapping happens at display
//! time for the current width.

use convo_core::{Message, Role};

use super::style::{Style, StyledLine, StyledSpan};
use super::wrap::prefixed_lines;

/// Gutter prefix for message body lines.
const BODY_PREFIX: &str = "│ ";

/// A transcript cell: one committed message at a transcript position.
#[derive(Debug, Clone, Copy)]
pub struct MessageCell<'a> {
    pub index: usize,
    pub message: &'a Message,
}

impl<'a> MessageCell<'a> {
    pub fn new(index: usize, message: &'a Message) -> Self {
        Self { index, message }
    }

    fn label_style(&self) -> Style {
        match self.message.role {
            Role::Human => Style::HumanLabel,
            Role::Gpt => Style::GptLabel,
        }
    }

    fn prefix_style(&self) -> Style {
        match self.message.role {
            Role::Human => Style::HumanPrefix,
            Role::Gpt => Style::GptPrefix,
        }
    }

    /// Renders this cell into display lines for the given width.
    pub fn display_lines(&self, width: usize) -> Vec<StyledLine> {
        let mut lines = vec![StyledLine::from_spans(vec![
            StyledSpan::new(self.message.role.label(), self.label_style()),
            StyledSpan::new(format!("  #{}", self.index + 1), Style::TurnNumber),
        ])];

        lines.extend(prefixed_lines(
            BODY_PREFIX,
            &self.message.text,
            width,
            self.prefix_style(),
            Style::Body,
        ));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: Role, text: &str) -> Message {
        Message::new(role, text).unwrap()
    }

    #[test]
    fn cell_has_label_then_body() {
        let msg = message(Role::Human, "Hello");
        let cell = MessageCell::new(0, &msg);
        let lines = cell.display_lines(40);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Human  #1");
        assert_eq!(lines[1].text(), "│ Hello");
    }

    #[test]
    fn gpt_cell_uses_gpt_label() {
        let msg = message(Role::Gpt, "Hi");
        let lines = MessageCell::new(2, &msg).display_lines(40);
        assert_eq!(lines[0].text(), "GPT  #3");
        assert_eq!(lines[0].spans[0].style, Style::GptLabel);
    }

    #[test]
    fn long_body_wraps_under_the_gutter() {
        let msg = message(Role::Human, "word ".repeat(20).trim());
        let lines = MessageCell::new(0, &msg).display_lines(20);

        assert!(lines.len() > 3);
        for body_line in &lines[1..] {
            assert_eq!(body_line.spans[0].text, BODY_PREFIX);
        }
    }

    #[test]
    fn multi_line_body_keeps_hard_breaks() {
        let msg = message(Role::Gpt, "one\ntwo");
        let lines = MessageCell::new(0, &msg).display_lines(40);
        assert_eq!(lines[1].text(), "│ one");
        assert_eq!(lines[2].text(), "│ two");
    }
}
