//! # query_render
//!
//! Adaptive tabular rendering of query results for terminal shells.
//!
//! A result set (column labels plus a stream of rows) is printed in one of
//! four layouts, chosen by [`DisplayMode`](config::DisplayMode):
//!
//! - **FIXED**: equal-width columns that fill the surface
//! - **COLUMNS**: columns sized to their content, shrunk or grown to fill the surface
//! - **ROW**: one `label: value` block per row
//! - **CLASSIC**: unpadded, `|` separated
//!
//! ## Quick Start
//!
//! ```
//! use query_render::prelude::*;
//! use query_render::row;
//!
//! let console = Console::builder().mode(DisplayMode::Classic).build();
//! let result = QueryResult::new(["id", "name"], vec![row![1, "Alice"], row![2, None::<&str>]]);
//!
//! let mut out = Vec::new();
//! console.print_results(&mut out, result).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "id|name\n1|Alice\n2|NULL\n");
//! ```
//!
//! ## Core Concepts
//!
//! - **Console**: settings holder and entry point for printing results
//! - **WidthAllocator**: decides column widths for the width-sensitive modes
//! - **ValueFormatter**: turns cell values into display text
//! - **TableRenderer**: writes a result set in the configured layout

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cells;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod renderables;
pub mod result;
pub mod sync;
pub mod terminal;
pub mod value;
pub mod width;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::config::{DisplayMode, RenderConfig};
    pub use crate::console::{Console, ConsoleBuilder, RenderOutcome};
    pub use crate::error::RenderError;
    pub use crate::logging::RenderLogger;
    pub use crate::renderables::{ClassicView, RecordView, RenderStats, Rule, TableRenderer};
    pub use crate::result::{QueryResult, ResultColumn, ResultRow};
    pub use crate::value::{CellValue, ValueFormatter};
    pub use crate::width::{Allocation, ColumnWidth, WidthAllocator};
}

// Re-export key types at crate root
pub use config::{DisplayMode, RenderConfig};
pub use console::{Console, RenderOutcome};
pub use error::RenderError;
pub use result::{QueryResult, ResultColumn, ResultRow};
pub use value::{CellValue, ValueFormatter};
pub use width::{ColumnWidth, WidthAllocator};
