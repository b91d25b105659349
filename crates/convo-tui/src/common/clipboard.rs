//! Clipboard access with transport fallback.
//!
//! Tries the OSC 52 escape sequence first (the terminal forwards it to the
//! system clipboard, and it works over SSH), then falls back to the system
//! clipboard via `arboard`.

use std::io::Write;

use anyhow::{Context, Result};
use base64::Engine;

/// Copies text to the clipboard. Succeeds if either transport does.
pub fn copy(text: &str) -> Result<()> {
    if copy_osc52(text).is_ok() {
        return Ok(());
    }
    copy_system(text)
}

/// OSC 52 format: `ESC ] 52 ; c ; <base64> ESC \` — `c` selects the system
/// clipboard.
fn copy_osc52(text: &str) -> Result<()> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1b]52;c;{encoded}\x1b\\").context("write OSC 52 sequence")?;
    stdout.flush().context("flush OSC 52 sequence")?;
    Ok(())
}

fn copy_system(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("open system clipboard")?;
    clipboard.set_text(text).context("set clipboard text")?;
    Ok(())
}
