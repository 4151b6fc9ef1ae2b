//! Clipboard writes through the terminal (OSC 52).
//!
//! The sequence asks the terminal emulator to place the payload on the
//! system clipboard, so it also works over SSH.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(#[from] std::io::Error),
}

/// Builds the OSC 52 sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Copies `text` to the clipboard by writing an OSC 52 sequence to `out`.
pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> Result<(), ClipboardError> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()?;
    tracing::debug!(len = text.len(), "copied to clipboard");
    Ok(())
}
