//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state; all I/O (file writes, clipboard) happens
//! in the runtime. Export effects report back via
//! `UiEvent::ExportFinished` — fire-and-forget from the reducer's side, no
//! retry.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Write the pretty-printed document to `conversation.json`.
    WriteExportFile,

    /// Put the compact document on the system clipboard.
    CopyExportToClipboard,
}
