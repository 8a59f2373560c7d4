//! Rendering configuration.
//!
//! [`RenderConfig`] is the complete per-call input besides the result set:
//! layout mode, null placeholder and surface width. The core never reads
//! global state; [`crate::console::Console`] resolves the environment and the
//! terminal size into a fresh `RenderConfig` on every render.

use std::fmt;
use std::str::FromStr;

use crate::value::DEFAULT_NULL_VALUE;

/// Environment variable selecting the display mode.
pub const MODE_ENV: &str = "QUERY_RENDER_MODE";
/// Environment variable overriding the null placeholder.
pub const NULL_ENV: &str = "QUERY_RENDER_NULL";
/// Environment variable overriding the surface width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// How a result set is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Equal-width columns regardless of content.
    Fixed,
    /// Content-fitted columns.
    Columns,
    /// One `label: value` line per field, one block per row.
    Row,
    /// Unformatted values joined by `|`.
    #[default]
    Classic,
}

impl DisplayMode {
    /// All modes, in menu order.
    pub const ALL: [Self; 4] = [Self::Fixed, Self::Columns, Self::Row, Self::Classic];

    /// Upper-case name used in user-facing messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Columns => "COLUMNS",
            Self::Row => "ROW",
            Self::Classic => "CLASSIC",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unknown display mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDisplayModeError(String);

impl fmt::Display for ParseDisplayModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown display mode `{}` (expected fixed, columns, row or classic)",
            self.0
        )
    }
}

impl std::error::Error for ParseDisplayModeError {}

impl FromStr for DisplayMode {
    type Err = ParseDisplayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "columns" => Ok(Self::Columns),
            "row" => Ok(Self::Row),
            "classic" => Ok(Self::Classic),
            _ => Err(ParseDisplayModeError(s.to_string())),
        }
    }
}

/// Everything a render call needs besides the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Layout strategy.
    pub mode: DisplayMode,
    /// Placeholder printed for null values.
    pub null_value: String,
    /// Surface width in cells.
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            null_value: DEFAULT_NULL_VALUE.to_string(),
            width: 80,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn new(mode: DisplayMode, width: usize) -> Self {
        Self {
            mode,
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn null_value(mut self, null_value: impl Into<String>) -> Self {
        self.null_value = null_value.into();
        self
    }
}

/// Raw environment overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub mode: Option<String>,
    pub null_value: Option<String>,
    pub columns: Option<String>,
}

/// Snapshot the environment variables the console honours.
#[must_use]
pub fn read_env_settings() -> EnvSettings {
    EnvSettings {
        mode: std::env::var(MODE_ENV).ok(),
        null_value: std::env::var(NULL_ENV).ok(),
        columns: std::env::var(COLUMNS_ENV).ok(),
    }
}

impl EnvSettings {
    /// Parsed display mode; unparsable values are logged and ignored.
    #[must_use]
    pub fn display_mode(&self) -> Option<DisplayMode> {
        let raw = self.mode.as_deref()?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                log::warn!("ignoring {MODE_ENV}: {err}");
                None
            }
        }
    }

    /// Parsed positive width; anything else is logged and ignored.
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        let raw = self.columns.as_deref()?.trim();
        match raw.parse::<usize>() {
            Ok(width) if width > 0 => Some(width),
            _ => {
                log::warn!("ignoring {COLUMNS_ENV}={raw:?}: expected a positive integer");
                None
            }
        }
    }
}
