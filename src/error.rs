//! Render errors.

use std::fmt;
use std::io;

use crate::config::DisplayMode;

/// Errors produced while rendering a result set.
#[derive(Debug)]
pub enum RenderError {
    /// Not even one cell per column plus separators fits on the surface.
    TooManyColumns {
        mode: DisplayMode,
        columns: usize,
        width: usize,
    },
    /// Writing to the output sink failed.
    Io(io::Error),
}

impl RenderError {
    /// Whether the error concerns the layout rather than the output sink.
    #[must_use]
    pub const fn is_layout(&self) -> bool {
        matches!(self, Self::TooManyColumns { .. })
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyColumns { mode, .. } => {
                write!(f, "Too many columns to display in {mode} mode.")
            }
            Self::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TooManyColumns { .. } => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
