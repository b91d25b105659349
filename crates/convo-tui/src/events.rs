//! UI event types.
//!
//! Everything the reducer reacts to is converted to `UiEvent` first:
//! terminal input, the per-frame layout pass, the tick timer, and results of
//! export effects.

use crossterm::event::Event as CrosstermEvent;

/// Which export surface an effect targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// `conversation.json` file write.
    File,
    /// System clipboard.
    Clipboard,
}

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (flash expiry).
    Tick,

    /// Per-frame layout pass with current terminal dimensions. Emitted once
    /// per loop iteration before other events.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, mouse, paste, resize).
    Terminal(CrosstermEvent),

    /// An export effect finished; `Ok` carries the flash text.
    ExportFinished {
        kind: ExportKind,
        result: Result<String, String>,
    },
}
