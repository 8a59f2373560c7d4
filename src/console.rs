//! Console - the output surface result sets are printed to.
//!
//! A [`Console`] holds the user-facing settings (display mode, null
//! placeholder, optional width override) and resolves them into a
//! [`RenderConfig`] on every call, so a resized terminal is picked up by the
//! next render.
//!
//! # Example
//!
//! ```
//! use query_render::prelude::*;
//! use query_render::row;
//!
//! let console = Console::builder().mode(DisplayMode::Columns).width(20).build();
//! let result = QueryResult::new(["id", "name"], vec![row![1, "Alice"]]);
//!
//! let mut out = Vec::new();
//! let outcome = console.print_results(&mut out, result).unwrap();
//! assert!(outcome.is_rendered());
//! ```

use std::io::{self, BufWriter, Write};

use crate::config::{self, DisplayMode, EnvSettings, RenderConfig};
use crate::error::RenderError;
use crate::renderables::{RenderStats, TableRenderer};
use crate::result::{QueryResult, ResultRow};
use crate::terminal;
use crate::value::DEFAULT_NULL_VALUE;

/// What happened to a result handed to [`Console::print_results`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The result was printed.
    Rendered(RenderStats),
    /// The result had no visible columns; nothing was printed.
    NoColumns,
    /// The columns could not fit; only the notice was printed.
    TooManyColumns(DisplayMode),
}

impl RenderOutcome {
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Output surface for query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Console {
    mode: DisplayMode,
    null_value: String,
    /// Override width.
    width: Option<usize>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console with default settings (CLASSIC, `NULL`, terminal width).
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: DisplayMode::default(),
            null_value: DEFAULT_NULL_VALUE.to_string(),
            width: None,
        }
    }

    /// Create a console builder for custom configuration.
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Create a console configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        ConsoleBuilder::from_env().build()
    }

    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[must_use]
    pub fn null_value(&self) -> &str {
        &self.null_value
    }

    /// Surface width: the override if set, else the current terminal width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width.unwrap_or_else(terminal::get_terminal_width)
    }

    /// Configuration for a render starting now.
    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            mode: self.mode,
            null_value: self.null_value.clone(),
            width: self.width(),
        }
    }

    /// Print `result` to `writer` in the configured mode.
    ///
    /// Output is buffered and flushed once, after the last line. When the
    /// columns cannot fit, a one-line notice is printed instead of the table.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if writing to `writer` fails.
    pub fn print_results<W, R>(&self, writer: &mut W, result: QueryResult<R>) -> Result<RenderOutcome, RenderError>
    where
        W: Write,
        R: Iterator<Item = ResultRow>,
    {
        if result.columns().is_empty() {
            log::debug!("result has no visible columns, nothing to print");
            return Ok(RenderOutcome::NoColumns);
        }

        let config = self.render_config();
        let mut out = BufWriter::new(writer);

        let outcome = match TableRenderer::new(&config).render(&mut out, result) {
            Ok(stats) => {
                log::debug!(
                    "printed {} rows in {} mode at width {}",
                    stats.rows,
                    config.mode,
                    config.width
                );
                RenderOutcome::Rendered(stats)
            }
            Err(err) if err.is_layout() => {
                log::warn!("{err} (surface width {})", config.width);
                writeln!(out, "{err}")?;
                RenderOutcome::TooManyColumns(config.mode)
            }
            Err(err) => return Err(err),
        };

        out.flush()?;
        Ok(outcome)
    }

    /// Print `result` to stdout.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if writing to stdout fails.
    pub fn print_results_stdout<R>(&self, result: QueryResult<R>) -> Result<RenderOutcome, RenderError>
    where
        R: Iterator<Item = ResultRow>,
    {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_results(&mut lock, result)
    }

    /// Report a query that failed before producing a result.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn report_execution_failure<W: Write>(&self, writer: &mut W, message: &str) -> io::Result<()> {
        log::debug!("query failed: {message}");
        write!(writer, "Query execution error: {message}\n\n")?;
        writer.flush()
    }
}

/// Builder for creating a Console with custom settings.
#[derive(Debug, Default, Clone)]
pub struct ConsoleBuilder {
    mode: Option<DisplayMode>,
    null_value: Option<String>,
    width: Option<usize>,
}

impl ConsoleBuilder {
    /// Start from the `QUERY_RENDER_MODE`, `QUERY_RENDER_NULL` and `COLUMNS`
    /// environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_settings(&config::read_env_settings())
    }

    /// Start from already captured environment settings.
    #[must_use]
    pub fn from_env_settings(env: &EnvSettings) -> Self {
        Self {
            mode: env.display_mode(),
            null_value: env.null_value.clone(),
            width: env.width(),
        }
    }

    /// Set the display mode.
    #[must_use]
    pub fn mode(mut self, mode: DisplayMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the null placeholder.
    #[must_use]
    pub fn null_value(mut self, null_value: impl Into<String>) -> Self {
        self.null_value = Some(null_value.into());
        self
    }

    /// Set console width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Build the console.
    #[must_use]
    pub fn build(self) -> Console {
        let mut console = Console::new();

        if let Some(mode) = self.mode {
            console.mode = mode;
        }
        if let Some(null_value) = self.null_value {
            console.null_value = null_value;
        }
        if let Some(width) = self.width {
            console.width = Some(width);
        }

        console
    }
}
