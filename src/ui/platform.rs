// Best-effort platform glue. Everything here may fail independently;
// failures are logged and swallowed, never surfaced as errors.

use crate::log::write_debug_log;
use crossterm::{execute, terminal::SetTitle};
use std::io::{Write, stdout};

/// Audible feedback on card activation, the kiosk analog of haptic
/// touch feedback (terminal bell).
pub fn touch_feedback() {
    let mut out = stdout();
    if out.write_all(b"\x07").and_then(|_| out.flush()).is_err() {
        let _ = write_debug_log("touch feedback: terminal bell failed");
    }
}

/// Set the terminal window title for the kiosk session.
pub fn set_title(title: &str) {
    if let Err(e) = execute!(stdout(), SetTitle(title)) {
        let _ = write_debug_log(&format!("failed to set terminal title: {}", e));
    }
}
