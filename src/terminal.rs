//! Terminal size detection.

use std::io::IsTerminal;

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Get the terminal size (width, height) in cells.
///
/// Returns `None` if the terminal size cannot be determined.
#[must_use]
pub fn get_terminal_size() -> Option<(usize, usize)> {
    crossterm::terminal::size()
        .ok()
        .filter(|&(w, _)| w > 0)
        .map(|(w, h)| (w as usize, h as usize))
}

/// Get the terminal width in cells, [`DEFAULT_WIDTH`] if unknown.
#[must_use]
pub fn get_terminal_width() -> usize {
    get_terminal_size().map_or(DEFAULT_WIDTH, |(w, _)| w)
}

/// Check if stdout is connected to a terminal.
#[must_use]
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}
