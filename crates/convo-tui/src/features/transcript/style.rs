//! UI-agnostic styled text for transcript cells.
//!
//! Cells produce `StyledLine`s with semantic styles; the renderer translates
//! them to terminal styles. This keeps cell layout testable without ratatui.

/// A styled span of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn from_spans(spans: Vec<StyledSpan>) -> Self {
        Self { spans }
    }

    /// Concatenated plain text of the line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Semantic style identifiers, translated by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No styling.
    Plain,
    /// "Human" role label.
    HumanLabel,
    /// "GPT" role label.
    GptLabel,
    /// Gutter prefix on human message lines.
    HumanPrefix,
    /// Gutter prefix on GPT message lines.
    GptPrefix,
    /// Message body text.
    Body,
    /// Dimmed turn number next to the label.
    TurnNumber,
}
