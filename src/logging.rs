//! Plain-text logger for the `log` facade.
//!
//! The library itself only emits records (`log::warn!` when column shrinking
//! stalls, `log::debug!`/`log::trace!` for allocation decisions). Binaries
//! that want to see them install a [`RenderLogger`]:
//!
//! ```no_run
//! use log::LevelFilter;
//! use query_render::logging::RenderLogger;
//!
//! RenderLogger::stderr().level(LevelFilter::Debug).init().unwrap();
//! ```
//!
//! Lines look like `12:04:31 WARN     message path/to/file.rs:42`.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

/// Shared destination for log lines.
pub type LogSink = Arc<Mutex<dyn Write + Send>>;

/// Logger writing one plain line per record.
///
/// All state is behind mutexes with poison recovery, so records from several
/// threads interleave line by line.
pub struct RenderLogger {
    sink: LogSink,
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_path: bool,
    time_format: OwnedFormatItem,
}

impl std::fmt::Debug for RenderLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderLogger")
            .field("level", &self.level)
            .field("show_time", &self.show_time)
            .field("show_level", &self.show_level)
            .field("show_path", &self.show_path)
            .finish_non_exhaustive()
    }
}

impl RenderLogger {
    /// Create a logger writing to `sink`, at `Info` level with timestamps,
    /// levels and paths.
    #[must_use]
    pub fn new(sink: LogSink) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| empty_format());
        Self {
            sink,
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_path: true,
            time_format,
        }
    }

    /// Create a logger writing to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Arc::new(Mutex::new(io::stderr())))
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable log levels.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the `file:line` suffix.
    #[must_use]
    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Override the time format (`time` format description syntax).
    /// Invalid descriptions keep the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    /// The line written for `record`, without terminator.
    #[must_use]
    pub fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&self.format_time());
            line.push(' ');
        }

        if self.show_level {
            line.push_str(&format!("{:<8} ", record.level()));
        }

        line.push_str(&record.args().to_string());

        if self.show_path
            && let Some(path) = record.file()
        {
            line.push(' ');
            line.push_str(path);
            if let Some(line_no) = record.line() {
                line.push_str(&format!(":{line_no}"));
            }
        }

        line
    }
}

/// A format description that renders nothing.
fn empty_format() -> OwnedFormatItem {
    OwnedFormatItem::Compound(Vec::new().into_boxed_slice())
}

impl Log for RenderLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut sink = lock_recover(&self.sink);
        // A logger has nowhere to report its own write failures.
        let _ = writeln!(sink, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.sink).flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn capture() -> (Arc<Mutex<Vec<u8>>>, RenderLogger) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink: LogSink = buffer.clone();
        (buffer, RenderLogger::new(sink))
    }

    fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_format_record_without_time() {
        let (_, logger) = capture();
        let logger = logger.show_time(false);
        let line = logger.format_record(
            &Record::builder()
                .args(format_args!("shrinking stalled"))
                .level(Level::Warn)
                .file(Some("src/width.rs"))
                .line(Some(42))
                .build(),
        );
        assert_eq!(line, "WARN     shrinking stalled src/width.rs:42");
    }

    #[test]
    fn test_format_record_minimal() {
        let (_, logger) = capture();
        let logger = logger.show_time(false).show_level(false).show_path(false);
        let line = logger.format_record(
            &Record::builder()
                .args(format_args!("plain"))
                .level(Level::Info)
                .build(),
        );
        assert_eq!(line, "plain");
    }

    #[test]
    fn test_log_respects_level() {
        let (buffer, logger) = capture();
        let logger = logger.level(LevelFilter::Warn).show_time(false).show_path(false);

        logger.log(
            &Record::builder()
                .args(format_args!("hidden"))
                .level(Level::Debug)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("shown"))
                .level(Level::Error)
                .build(),
        );
        logger.flush();

        assert_eq!(contents(&buffer), "ERROR    shown\n");
    }

    #[test]
    fn test_time_prefix_present() {
        let (buffer, logger) = capture();
        let logger = logger.time_format("[hour]:[minute]").show_path(false);
        logger.log(
            &Record::builder()
                .args(format_args!("tick"))
                .level(Level::Info)
                .build(),
        );
        let text = contents(&buffer);
        let (time, rest) = text.split_once(' ').unwrap();
        assert_eq!(time.len(), 5);
        assert_eq!(time.as_bytes()[2], b':');
        assert_eq!(rest.trim_start(), "INFO     tick\n".trim_start());
    }

    #[test]
    fn test_empty_format_renders_nothing() {
        let now = OffsetDateTime::now_utc();
        assert_eq!(now.format(&empty_format()).unwrap(), "");
    }

    #[test]
    fn test_invalid_time_format_keeps_previous() {
        let (_, logger) = capture();
        let logger = logger.time_format("[not a component]");
        assert!(!logger.format_time().is_empty());
    }
}
