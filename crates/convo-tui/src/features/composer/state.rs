//! Composer state: the staged message under construction.

use super::text_buffer::TextBuffer;

/// The staged draft. The role and amendment target live in the core
/// `Editor`; this slice owns only the text being typed.
#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    pub buffer: TextBuffer,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw draft text (untrimmed; trimming happens at commit).
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Seeds the draft for an amendment (cursor at the end).
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }
}
