//! Common test utilities and logging infrastructure
//!
//! The library logs through the `log` facade; `tracing-subscriber` picks those
//! records up, so failing tests show the allocator's decisions.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=query_render::width=trace` - Trace every shrink pass
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use query_render::prelude::*;

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// The function is idempotent - calling it multiple times is safe.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("query_render=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_thread_ids(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Render `result` with a console in `mode` at `width` and return the text.
pub fn render<R>(mode: DisplayMode, width: usize, result: QueryResult<R>) -> String
where
    R: Iterator<Item = ResultRow>,
{
    let console = Console::builder().mode(mode).width(width).build();
    let mut out = Vec::new();
    console
        .print_results(&mut out, result)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("rendered output is UTF-8")
}

/// Make trailing padding visible for snapshots.
pub fn show_spaces(text: &str) -> String {
    text.replace(' ', "·")
}

/// Shared people fixture: `id`, `name`, `email`.
pub fn people() -> QueryResult<std::vec::IntoIter<ResultRow>> {
    QueryResult::new(
        ["id", "name", "email"],
        vec![
            query_render::row![1, "Alice", "alice@example.com"],
            query_render::row![2, "Bob", None::<&str>],
        ],
    )
}
