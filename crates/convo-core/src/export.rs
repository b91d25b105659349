//! Serializes the transcript to the ShareGPT-style JSON document.
//!
//! Document shape is fixed: one `conversations` key holding an array of
//! `{ "from": "human" | "gpt", "value": <text> }` objects, in transcript
//! order. Pretty form (2-space indent) goes to the file; compact form goes
//! to the clipboard.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::message::Role;
use crate::transcript::Transcript;

/// Fixed file name for the exported document.
pub const EXPORT_FILE_NAME: &str = "conversation.json";

/// The exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationDoc {
    pub conversations: Vec<ConversationEntry>,
}

/// One exported message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub from: Role,
    pub value: String,
}

impl ConversationDoc {
    /// Builds the document from a transcript. Read-only; works for any
    /// transcript state including empty.
    pub fn from_transcript(transcript: &Transcript) -> Self {
        Self {
            conversations: transcript
                .messages()
                .iter()
                .map(|m| ConversationEntry {
                    from: m.role,
                    value: m.text.clone(),
                })
                .collect(),
        }
    }
}

/// Pretty-printed document (2-space indentation), for file export.
pub fn to_pretty_json(transcript: &Transcript) -> String {
    let doc = ConversationDoc::from_transcript(transcript);
    // Infallible for this shape: no non-string keys, no non-finite floats.
    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| String::from("{\n  \"conversations\": []\n}"))
}

/// Compact document (no whitespace), for clipboard export.
pub fn to_compact_json(transcript: &Transcript) -> String {
    let doc = ConversationDoc::from_transcript(transcript);
    serde_json::to_string(&doc).unwrap_or_else(|_| String::from("{\"conversations\":[]}"))
}

/// Writes the pretty document to `<dir>/conversation.json` and returns the
/// written path.
pub fn write_file(transcript: &Transcript, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, to_pretty_json(transcript))
        .with_context(|| format!("write export to {}", path.display()))?;
    Ok(path)
}
