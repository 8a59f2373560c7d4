//! Layouts for result sets.
//!
//! - [`TableRenderer`]: entry point; FIXED and COLUMNS grids
//! - [`RecordView`]: ROW layout, one block per row
//! - [`ClassicView`]: CLASSIC layout, delimiter separated
//! - [`Rule`]: horizontal line with a centered title

pub mod classic;
pub mod record;
pub mod rule;
pub mod table;

pub use classic::ClassicView;
pub use record::RecordView;
pub use rule::Rule;
pub use table::{RenderStats, TableRenderer};
