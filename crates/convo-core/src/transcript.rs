//! The transcript store: an ordered sequence of committed messages.

use crate::message::{Message, Role};

/// Ordered sequence of messages; insertion order is display and export order.
///
/// Messages are private to enforce the mutation API — every element is
/// guaranteed to hold non-empty trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    /// Appends a message at the end.
    ///
    /// A draft that trims to empty is rejected; returns whether the
    /// transcript changed.
    pub fn append(&mut self, role: Role, text: &str) -> bool {
        let Some(message) = Message::new(role, text) else {
            return false;
        };
        self.messages.push(message);
        true
    }

    /// Overwrites the message at `index` in place, preserving position.
    ///
    /// No-op when the text trims to empty or the index is out of bounds;
    /// returns whether the transcript changed.
    pub fn replace_at(&mut self, index: usize, role: Role, text: &str) -> bool {
        if index >= self.messages.len() {
            return false;
        }
        let Some(message) = Message::new(role, text) else {
            return false;
        };
        self.messages[index] = message;
        true
    }

    /// Empties the sequence unconditionally.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
