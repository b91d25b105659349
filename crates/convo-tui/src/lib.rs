//! Full-screen terminal UI for convo.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use convo_core::config::Config;
pub use runtime::Runtime;
use state::AppState;

/// Runs the interactive transcript editor.
pub fn run_editor(config: &Config) -> Result<()> {
    // The editor draws on stdout and needs a real terminal.
    if !stdout().is_terminal() {
        anyhow::bail!("convo is an interactive editor and requires a terminal");
    }

    let state = AppState::new(config);
    let mut runtime = Runtime::new(state)?;
    runtime.run()?;

    Ok(())
}
