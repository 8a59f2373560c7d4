//! Prints a built-in sample result set in any display mode.
//!
//! Uses a small hand-rolled parser; flags override the `QUERY_RENDER_*`
//! environment variables.

use log::LevelFilter;
use query_render::prelude::*;
use query_render::{row, terminal};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return;
    }

    if cfg.log_level != LevelFilter::Off
        && let Err(err) = RenderLogger::stderr().level(cfg.log_level).show_path(false).init()
    {
        eprintln!("Warning: Failed to initialize logger: {err}");
    }

    let console = build_console(&cfg);
    log::debug!(
        "stdout is {}a terminal, rendering at width {}",
        if terminal::is_terminal() { "" } else { "not " },
        console.width()
    );

    if let Some(message) = cfg.fail.as_deref() {
        if let Err(err) = console.report_execution_failure(&mut std::io::stdout(), message) {
            eprintln!("{err}");
            std::process::exit(1);
        }
        return;
    }

    match console.print_results_stdout(sample_result()) {
        Ok(RenderOutcome::TooManyColumns(_)) => std::process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn build_console(cfg: &Config) -> Console {
    let mut builder = ConsoleBuilder::from_env();
    if let Some(mode) = cfg.mode {
        builder = builder.mode(mode);
    }
    if let Some(null_value) = cfg.null_value.as_deref() {
        builder = builder.null_value(null_value);
    }
    if let Some(width) = cfg.width {
        builder = builder.width(width);
    }
    builder.build()
}

/// Four visible columns; each row leads with a hidden row id.
fn sample_result() -> QueryResult<std::vec::IntoIter<ResultRow>> {
    QueryResult::new(
        ["id", "name", "email", "note"],
        vec![
            row![101, 1, "Alice", "alice@example.com", "first customer"],
            row![102, 2, "Bob", None::<&str>, "prefers phone contact, call after 5pm"],
            row![103, 3, "Carol", "carol@example.org", None::<&str>],
            row![104, 4, "Dave", "dave@example.net", "日本語のメモ"],
        ],
    )
    .row_id_columns(1)
}

#[derive(Debug)]
struct Config {
    help: bool,
    mode: Option<DisplayMode>,
    width: Option<usize>,
    null_value: Option<String>,
    fail: Option<String>,
    log_level: LevelFilter,
}

impl Config {
    fn with_defaults() -> Self {
        Self {
            help: false,
            mode: None,
            width: None,
            null_value: None,
            fail: None,
            log_level: LevelFilter::Off,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::with_defaults();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "--mode" => {
                if cfg.mode.is_some() {
                    return Err("`--mode` provided more than once.".to_string());
                }
                let raw = next_value(&mut iter, "--mode")?;
                cfg.mode = Some(raw.parse::<DisplayMode>().map_err(|err| {
                    format!("{err}\n\nExpected one of: fixed|columns|row|classic.")
                })?);
            }
            "--width" => {
                let raw = next_value(&mut iter, "--width")?;
                cfg.width = Some(parse_usize_flag("--width", &raw)?);
            }
            "--null" => cfg.null_value = Some(next_value(&mut iter, "--null")?),
            "--fail" => cfg.fail = Some(next_value(&mut iter, "--fail")?),
            "--log-level" => {
                let raw = next_value(&mut iter, "--log-level")?;
                cfg.log_level = parse_log_level(&raw)?;
            }
            _ => {
                return Err(format!(
                    "Unknown flag: {arg}\n\nRun with `--help` to see valid options."
                ));
            }
        }
    }

    Ok(cfg)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}

fn parse_usize_flag(flag: &str, raw: &str) -> Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("Invalid {flag} value `{raw}` (expected a positive integer)."))?;
    if value == 0 {
        return Err(format!("Invalid {flag} value `{raw}` (expected >= 1)."));
    }
    Ok(value)
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(format!(
            "Invalid --log-level value `{value}` (expected: off|error|warn|info|debug|trace)."
        )),
    }
}

const HELP_TEXT: &str = r"query_render_demo - print a sample query result

USAGE:
    query_render_demo [OPTIONS]

OPTIONS:
    --mode <mode>               fixed|columns|row|classic (default: $QUERY_RENDER_MODE or classic)
    --width <cols>              Override surface width (default: $COLUMNS or terminal width)
    --null <text>               Placeholder for NULL values (default: $QUERY_RENDER_NULL or NULL)
    --fail <message>            Report a failed query instead of printing the sample
    --log-level <level>         Log to stderr (off|error|warn|info|debug|trace)

    -h, --help                  Print help and exit

EXAMPLES:
    query_render_demo --mode columns --width 40
    query_render_demo --mode row --null '<null>'
    query_render_demo --mode fixed --width 4 --log-level warn
";
