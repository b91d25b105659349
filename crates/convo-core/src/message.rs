//! The two conversation roles and the committed message type.

use serde::{Deserialize, Serialize};

/// One of the two fixed conversation participants.
///
/// Serializes as the literal strings `"human"` and `"gpt"` — the export
/// format depends on these exact spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Human,
    Gpt,
}

impl Role {
    /// Returns the other role.
    pub fn flip(self) -> Self {
        match self {
            Role::Human => Role::Gpt,
            Role::Gpt => Role::Human,
        }
    }

    /// Display label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Role::Human => "Human",
            Role::Gpt => "GPT",
        }
    }

    /// Wire name, as used in the export document.
    pub fn wire_name(self) -> &'static str {
        match self {
            Role::Human => "human",
            Role::Gpt => "gpt",
        }
    }
}

/// A committed transcript entry.
///
/// `text` is non-empty and trimmed; the store enforces this on every
/// mutation. Identity is position in the transcript — there is no stable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    /// Builds a message from raw draft text.
    ///
    /// Returns `None` if the text trims to empty.
    pub fn new(role: Role, text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            role,
            text: trimmed.to_string(),
        })
    }
}
