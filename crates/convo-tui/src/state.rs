//! Application state composition.
//!
//! `AppState` combines the core `Editor` (transcript + composer role +
//! amendment slot) with the UI-side slices: the draft text buffer, the
//! transcript viewport, the interaction mode, and a transient status flash.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use convo_core::Editor;
use convo_core::config::Config;

use crate::features::composer::ComposerState;
use crate::features::transcript::TranscriptView;

/// How long a status flash stays visible.
pub const FLASH_DURATION: Duration = Duration::from_millis(2500);

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing in the composer (append or amend, depending on the editor).
    Composing,
    /// Picking a transcript message to amend.
    Selecting { index: usize },
}

/// Severity of a status flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Error,
}

/// A transient status-line notice (save/copy/clear feedback, errors).
#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub kind: FlashKind,
    shown_at: Instant,
}

impl Flash {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Info,
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Error,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= FLASH_DURATION
    }
}

/// Full TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Transcript store plus composer role and amendment slot.
    pub editor: Editor,
    /// The staged draft text.
    pub composer: ComposerState,
    /// Transcript scroll/viewport state.
    pub view: TranscriptView,
    /// Current interaction mode.
    pub mode: Mode,
    /// Transient status-line notice.
    pub flash: Option<Flash>,
    /// Directory `conversation.json` is written into.
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            editor: Editor::with_role(config.default_role),
            composer: ComposerState::new(),
            view: TranscriptView::new(),
            mode: Mode::Composing,
            flash: None,
            export_dir: config.export_dir.clone(),
        }
    }

    pub fn flash_info(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash::info(text));
    }

    pub fn flash_error(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash::error(text));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
