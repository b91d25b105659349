//! TUI reducer.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Key routing: mode first (the
//! edit-select picker swallows its keys), then application keys, then the
//! composer's editing keys.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::composer::update::{self as composer_update, Modifiers};
use crate::features::transcript::render as transcript_render;
use crate::render;
use crate::state::{AppState, Mode};

/// Lines scrolled per mouse wheel notch.
const WHEEL_SCROLL_LINES: usize = 3;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.flash.as_ref().is_some_and(crate::state::Flash::is_expired) {
                app.flash = None;
            }
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(app, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ExportFinished { kind: _, result } => {
            match result {
                Ok(text) => app.flash_info(text),
                Err(text) => app.flash_error(text),
            }
            vec![]
        }
    }
}

/// Per-frame layout pass: refresh viewport height and rendered line count so
/// scroll math stays accurate.
fn handle_frame(app: &mut AppState, width: u16, height: u16) {
    let content_width = render::transcript_content_width(width);
    let viewport_height = render::transcript_viewport_height(app, height);
    let line_count = transcript_render::line_count(app.editor.transcript(), content_width);
    app.view.update_layout(line_count, viewport_height);
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::ScrollUp => app.view.scroll_up(WHEEL_SCROLL_LINES),
                MouseEventKind::ScrollDown => app.view.scroll_down(WHEEL_SCROLL_LINES),
                _ => {}
            }
            vec![]
        }
        Event::Paste(text) => {
            if matches!(app.mode, Mode::Composing) {
                composer_update::handle_paste(&mut app.composer, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }

    match app.mode {
        Mode::Selecting { index } => handle_select_key(app, key, index),
        Mode::Composing => handle_composing_key(app, key),
    }
}

// =============================================================================
// Edit-select mode: pick a message to amend
// =============================================================================

fn handle_select_key(app: &mut AppState, key: KeyEvent, index: usize) -> Vec<UiEffect> {
    let mods = Modifiers::of(&key);
    let last = app.editor.transcript().len().saturating_sub(1);

    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Composing;
        }
        KeyCode::Char('c') if mods.only_ctrl() => {
            app.mode = Mode::Composing;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.mode = Mode::Selecting {
                index: index.saturating_sub(1),
            };
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.mode = Mode::Selecting {
                index: (index + 1).min(last),
            };
        }
        KeyCode::Enter => {
            begin_edit(app, index);
        }
        KeyCode::PageUp => app.view.page_up(),
        KeyCode::PageDown => app.view.page_down(),
        _ => {}
    }

    vec![]
}

/// Targets `index` for amendment and seeds the composer from the message.
/// Retargeting discards the previous draft (last call wins).
fn begin_edit(app: &mut AppState, index: usize) {
    let seeded = app.editor.begin_edit(index).map(|m| m.text.clone());
    if let Some(text) = seeded {
        app.composer.set_text(&text);
    }
    app.mode = Mode::Composing;
}

// =============================================================================
// Composing mode: application keys, then composer editing keys
// =============================================================================

fn handle_composing_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let mods = Modifiers::of(&key);

    match key.code {
        // Ctrl+C: clear a non-empty draft first, quit otherwise.
        KeyCode::Char('c') if mods.ctrl => {
            if app.composer.is_empty() {
                return vec![UiEffect::Quit];
            }
            app.composer.clear();
        }

        // Esc: abandon a pending amendment, or just clear the draft.
        KeyCode::Esc => {
            if app.editor.is_amending() {
                app.editor.cancel_edit();
            }
            app.composer.clear();
        }

        // Role selector.
        KeyCode::Char('r') if mods.only_ctrl() => {
            app.editor.toggle_draft_role();
        }

        // Enter edit-select mode (also retargets a pending amendment).
        KeyCode::Char('e') if mods.only_ctrl() => {
            if !app.editor.transcript().is_empty() {
                let last = app.editor.transcript().len() - 1;
                let index = app.editor.amend_target().unwrap_or(last);
                app.mode = Mode::Selecting { index };
            }
        }

        // Export and clear actions.
        KeyCode::Char('s') if mods.only_ctrl() => return vec![UiEffect::WriteExportFile],
        KeyCode::Char('y') if mods.only_ctrl() => return vec![UiEffect::CopyExportToClipboard],
        KeyCode::Char('l') if mods.only_ctrl() => {
            app.editor.clear();
            app.composer.clear();
            app.view.reset();
            app.flash_info("Cleared transcript");
        }

        // Transcript scrolling.
        KeyCode::PageUp => app.view.page_up(),
        KeyCode::PageDown => app.view.page_down(),
        KeyCode::Home if mods.ctrl => app.view.scroll_to_top(),
        KeyCode::End if mods.ctrl => app.view.scroll_to_bottom(),

        // Commit, or insert a line break with a modifier held.
        KeyCode::Enter if !mods.shift && !mods.alt => submit(app),
        KeyCode::Enter => app.composer.buffer.insert_newline(),
        KeyCode::Char('j') if mods.only_ctrl() => app.composer.buffer.insert_newline(),

        _ => {
            composer_update::handle_key(&mut app.composer, key);
        }
    }

    vec![]
}

/// Commits the draft. A whitespace-only draft is a silent no-op; on success
/// the draft is cleared and the view snaps back to the latest entry.
fn submit(app: &mut AppState) {
    let draft = app.composer.text();
    if app.editor.commit(&draft).is_some() {
        app.composer.clear();
        app.view.scroll_to_bottom();
    }
}

#[cfg(test)]
mod tests {
    use convo_core::Role;
    use crossterm::event::{KeyModifiers, MouseEvent};

    use super::*;
    use crate::features::transcript::ScrollMode;

    fn app() -> AppState {
        AppState::default()
    }

    fn press(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers))),
        )
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_and_enter_appends_and_alternates() {
        let mut a = app();
        type_str(&mut a, "Hi");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(a.editor.transcript().len(), 1);
        assert_eq!(a.editor.draft_role(), Role::Gpt);
        assert!(a.composer.is_empty());
        assert!(a.view.is_following());
    }

    #[test]
    fn empty_enter_is_a_silent_noop() {
        let mut a = app();
        type_str(&mut a, "   ");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        assert!(a.editor.transcript().is_empty());
        assert_eq!(a.editor.draft_role(), Role::Human);
        assert!(a.flash.is_none());
    }

    #[test]
    fn shift_enter_inserts_line_break() {
        let mut a = app();
        type_str(&mut a, "one");
        press(&mut a, KeyCode::Enter, KeyModifiers::SHIFT);
        type_str(&mut a, "two");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(a.editor.transcript().get(0).unwrap().text, "one\ntwo");
    }

    #[test]
    fn ctrl_r_toggles_role() {
        let mut a = app();
        press(&mut a, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(a.editor.draft_role(), Role::Gpt);
        press(&mut a, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(a.editor.draft_role(), Role::Human);
    }

    #[test]
    fn edit_flow_replaces_in_place() {
        let mut a = app();
        type_str(&mut a, "Hi");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut a, "Hello");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        // Open the picker (starts on the latest message), move to #1.
        press(&mut a, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(a.mode, Mode::Selecting { index: 1 });
        press(&mut a, KeyCode::Up, KeyModifiers::NONE);
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        // Composer is seeded from the message.
        assert_eq!(a.mode, Mode::Composing);
        assert_eq!(a.editor.amend_target(), Some(0));
        assert_eq!(a.composer.text(), "Hi");
        assert_eq!(a.editor.draft_role(), Role::Human);

        type_str(&mut a, " there");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(a.editor.transcript().get(0).unwrap().text, "Hi there");
        assert_eq!(a.editor.transcript().len(), 2);
        assert_eq!(a.editor.amend_target(), None);
    }

    #[test]
    fn esc_cancels_edit_without_touching_transcript() {
        let mut a = app();
        type_str(&mut a, "Hi");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);
        let before = a.editor.transcript().clone();

        press(&mut a, KeyCode::Char('e'), KeyModifiers::CONTROL);
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);
        let role_before = a.editor.draft_role();
        press(&mut a, KeyCode::Esc, KeyModifiers::NONE);

        assert_eq!(a.editor.transcript(), &before);
        assert_eq!(a.editor.amend_target(), None);
        assert!(a.composer.is_empty());
        // The cancel flips the role, mirroring a successful commit.
        assert_eq!(a.editor.draft_role(), role_before.flip());
    }

    #[test]
    fn select_mode_ignores_ctrl_e_on_empty_transcript() {
        let mut a = app();
        press(&mut a, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(a.mode, Mode::Composing);
    }

    #[test]
    fn select_mode_clamps_navigation() {
        let mut a = app();
        type_str(&mut a, "one");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);
        press(&mut a, KeyCode::Char('e'), KeyModifiers::CONTROL);

        press(&mut a, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(a.mode, Mode::Selecting { index: 0 });
        press(&mut a, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(a.mode, Mode::Selecting { index: 0 });
    }

    #[test]
    fn retarget_discards_previous_draft() {
        let mut a = app();
        type_str(&mut a, "one");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut a, "two");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        press(&mut a, KeyCode::Char('e'), KeyModifiers::CONTROL);
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE); // editing #2
        type_str(&mut a, " unsaved");

        press(&mut a, KeyCode::Char('e'), KeyModifiers::CONTROL);
        press(&mut a, KeyCode::Up, KeyModifiers::NONE);
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE); // retarget to #1

        assert_eq!(a.editor.amend_target(), Some(0));
        assert_eq!(a.composer.text(), "one");
    }

    #[test]
    fn ctrl_l_clears_everything() {
        let mut a = app();
        type_str(&mut a, "one");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);
        press(&mut a, KeyCode::Char('e'), KeyModifiers::CONTROL);
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        press(&mut a, KeyCode::Char('l'), KeyModifiers::CONTROL);

        assert!(a.editor.transcript().is_empty());
        assert_eq!(a.editor.amend_target(), None);
        assert!(a.composer.is_empty());
        assert!(a.flash.is_some());
    }

    #[test]
    fn export_keys_return_effects() {
        let mut a = app();
        assert_eq!(
            press(&mut a, KeyCode::Char('s'), KeyModifiers::CONTROL),
            vec![UiEffect::WriteExportFile]
        );
        assert_eq!(
            press(&mut a, KeyCode::Char('y'), KeyModifiers::CONTROL),
            vec![UiEffect::CopyExportToClipboard]
        );
    }

    #[test]
    fn ctrl_c_clears_draft_then_quits() {
        let mut a = app();
        type_str(&mut a, "draft");

        assert!(press(&mut a, KeyCode::Char('c'), KeyModifiers::CONTROL).is_empty());
        assert!(a.composer.is_empty());

        assert_eq!(
            press(&mut a, KeyCode::Char('c'), KeyModifiers::CONTROL),
            vec![UiEffect::Quit]
        );
    }

    #[test]
    fn export_result_sets_flash() {
        let mut a = app();
        update(
            &mut a,
            UiEvent::ExportFinished {
                kind: crate::events::ExportKind::File,
                result: Ok("Saved conversation.json".to_string()),
            },
        );
        assert_eq!(a.flash.as_ref().unwrap().text, "Saved conversation.json");

        update(
            &mut a,
            UiEvent::ExportFinished {
                kind: crate::events::ExportKind::Clipboard,
                result: Err("Copy failed".to_string()),
            },
        );
        assert_eq!(
            a.flash.as_ref().unwrap().kind,
            crate::state::FlashKind::Error
        );
    }

    #[test]
    fn wheel_scroll_anchors_and_returns() {
        let mut a = app();
        a.view.update_layout(100, 20);

        let wheel_up = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        update(&mut a, UiEvent::Terminal(Event::Mouse(wheel_up)));
        assert!(matches!(a.view.mode, ScrollMode::Anchored { .. }));

        let wheel_down = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        for _ in 0..40 {
            update(&mut a, UiEvent::Terminal(Event::Mouse(wheel_down)));
        }
        assert!(a.view.is_following());
    }

    #[test]
    fn paste_inserts_into_draft() {
        let mut a = app();
        update(
            &mut a,
            UiEvent::Terminal(Event::Paste("pasted\ntext".to_string())),
        );
        assert_eq!(a.composer.text(), "pasted\ntext");
    }

    #[test]
    fn frame_updates_layout() {
        let mut a = app();
        type_str(&mut a, "hello");
        press(&mut a, KeyCode::Enter, KeyModifiers::NONE);

        update(&mut a, UiEvent::Frame { width: 80, height: 24 });
        assert!(a.view.line_count > 0);
        assert!(a.view.viewport_height > 0);
    }
}
