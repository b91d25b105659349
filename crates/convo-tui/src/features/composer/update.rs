//! Composer key handling: readline-style editing and cursor movement.
//!
//! Application-level keys (submission, role toggle, exports, edit mode) are
//! routed by the main reducer before the composer sees anything.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::ComposerState;
use super::text_buffer::CursorMove;
use crate::common::text::sanitize_paste;

/// Parsed key modifiers for cleaner pattern matching.
#[derive(Debug, Clone, Copy)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn of(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
            alt: key.modifiers.contains(KeyModifiers::ALT),
        }
    }

    pub fn none(self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }

    pub fn only_ctrl(self) -> bool {
        self.ctrl && !self.shift && !self.alt
    }

    pub fn only_alt(self) -> bool {
        self.alt && !self.ctrl && !self.shift
    }
}

/// Handles an editing key inside the composer. Returns false for keys the
/// composer does not consume.
pub fn handle_key(composer: &mut ComposerState, key: KeyEvent) -> bool {
    if matches!(key.kind, KeyEventKind::Release) {
        return true;
    }

    let mods = Modifiers::of(&key);
    let buffer = &mut composer.buffer;

    match key.code {
        // Line editing: Ctrl+A/E/U/K.
        KeyCode::Char('a') if mods.only_ctrl() => buffer.move_cursor(CursorMove::LineStart),
        KeyCode::Char('e') if mods.only_ctrl() => buffer.move_cursor(CursorMove::LineEnd),
        KeyCode::Char('u') if mods.only_ctrl() => buffer.kill_to_line_start(),
        KeyCode::Char('k') if mods.only_ctrl() => buffer.kill_to_line_end(),

        // Word editing: Ctrl+W / Alt+Backspace, Alt+b/f, Alt+arrows.
        KeyCode::Char('w') if mods.only_ctrl() => buffer.delete_word_left(),
        KeyCode::Backspace if mods.only_alt() => buffer.delete_word_left(),
        KeyCode::Char('b') | KeyCode::Left if mods.only_alt() => buffer.move_word_left(),
        KeyCode::Char('f') | KeyCode::Right if mods.only_alt() => buffer.move_word_right(),

        // Cursor movement.
        KeyCode::Left if mods.none() => buffer.move_cursor(CursorMove::Left),
        KeyCode::Right if mods.none() => buffer.move_cursor(CursorMove::Right),
        KeyCode::Up if mods.none() => buffer.move_cursor(CursorMove::Up),
        KeyCode::Down if mods.none() => buffer.move_cursor(CursorMove::Down),
        KeyCode::Home => buffer.move_cursor(CursorMove::LineStart),
        KeyCode::End => buffer.move_cursor(CursorMove::LineEnd),

        // Deletion.
        KeyCode::Backspace => buffer.delete_prev_char(),
        KeyCode::Delete => buffer.delete_next_char(),

        // Tab inserts spaces; literal tabs have no stable terminal width.
        KeyCode::Tab => buffer.insert_str("    "),

        KeyCode::Char(ch) if !mods.ctrl && !mods.alt => buffer.insert_char(ch),

        _ => return false,
    }

    true
}

/// Inserts pasted text at the cursor, sanitized for display.
pub fn handle_paste(composer: &mut ComposerState, text: &str) {
    let sanitized = sanitize_paste(text);
    composer.buffer.insert_str(&sanitized);
}
