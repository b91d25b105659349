//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! The reducer stays side-effect free and returns effects; this module
//! performs the I/O (file writes, clipboard) and feeds results back as
//! events. Everything is synchronous — each effect completes before the next
//! user-visible interaction is processed.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use convo_core::export;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::common::clipboard;
use crate::effects::UiEffect;
use crate::events::{ExportKind, UiEvent};
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence; only drives flash expiry, so it can be slow.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: Instant,
    dirty: bool,
}

impl Runtime {
    /// Sets up the terminal (panic hook first) and wraps the initial state.
    pub fn new(state: AppState) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("set up terminal")?;

        Ok(Self {
            terminal,
            state,
            last_tick: Instant::now(),
            dirty: true,
        })
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Layout pass first so scroll math sees current dimensions.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                self.dispatch(event);
            }

            if self.dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                self.dirty = false;
            }
        }

        Ok(())
    }

    /// Polls terminal events until the next tick is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let timeout = TICK_INTERVAL.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain whatever is buffered without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    /// Runs one event through the reducer and executes its effects.
    ///
    /// Frame and Tick are passive; they redraw only when a tick expires a
    /// flash. Everything else marks the frame dirty.
    fn dispatch(&mut self, event: UiEvent) {
        let passive = matches!(event, UiEvent::Tick | UiEvent::Frame { .. });
        let had_flash = self.state.flash.is_some();

        let effects = update::update(&mut self.state, event);

        if !passive || had_flash != self.state.flash.is_some() {
            self.dirty = true;
        }

        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                tracing::info!("quit requested");
                self.state.should_quit = true;
            }

            UiEffect::WriteExportFile => {
                let result = match export::write_file(
                    self.state.editor.transcript(),
                    &self.state.export_dir,
                ) {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "exported transcript");
                        Ok(format!("Saved {}", path.display()))
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "file export failed");
                        Err(format!("Save failed: {err:#}"))
                    }
                };
                self.dispatch(UiEvent::ExportFinished {
                    kind: ExportKind::File,
                    result,
                });
            }

            UiEffect::CopyExportToClipboard => {
                let transcript = self.state.editor.transcript();
                let count = transcript.len();
                let json = export::to_compact_json(transcript);
                let result = match clipboard::copy(&json) {
                    Ok(()) => {
                        tracing::info!(messages = count, "copied transcript to clipboard");
                        Ok(format!(
                            "Copied {count} message{} as JSON",
                            if count == 1 { "" } else { "s" }
                        ))
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "clipboard export failed");
                        Err(format!("Copy failed: {err:#}"))
                    }
                };
                self.dispatch(UiEvent::ExportFinished {
                    kind: ExportKind::Clipboard,
                    result,
                });
            }
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
