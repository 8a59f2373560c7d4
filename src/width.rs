//! Column width allocation.
//!
//! Fits a row of columns into a surface of `surface_width` cells where
//! neighbouring columns are separated by a single cell. Two strategies exist:
//!
//! - [`WidthAllocator::fixed`]: equal split that ignores the content.
//! - [`WidthAllocator::fit`]: content-driven widths. Slack goes to the last
//!   column; overflow is removed by [`shrink_columns`], which attacks long
//!   headers before it touches any data, one cell (or one oversized column)
//!   at a time, rightmost column first.
//!
//! # Example
//!
//! ```
//! use query_render::width::{ColumnWidth, WidthAllocator};
//!
//! let allocator = WidthAllocator::new(20);
//! let allocation = allocator
//!     .fit(vec![ColumnWidth::new(2, 1), ColumnWidth::new(4, 2), ColumnWidth::new(5, 7)])
//!     .unwrap();
//! assert_eq!(allocation.widths(), &[2, 4, 12]);
//! ```

use crate::config::DisplayMode;
use crate::error::RenderError;

/// Header and data widths tracked for one column.
///
/// `width()` is always `max(header_width, data_width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnWidth {
    header: usize,
    data: usize,
    width: usize,
}

impl ColumnWidth {
    /// Create a tracker for a header of `header` cells and data of `data` cells.
    #[must_use]
    pub const fn new(header: usize, data: usize) -> Self {
        let width = if header > data { header } else { data };
        Self {
            header,
            data,
            width,
        }
    }

    /// Current header width.
    #[must_use]
    pub const fn header_width(&self) -> usize {
        self.header
    }

    /// Current data width.
    #[must_use]
    pub const fn data_width(&self) -> usize {
        self.data
    }

    /// Effective width reserved for the column.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the header is what keeps this column wide.
    #[must_use]
    pub const fn is_header_longer(&self) -> bool {
        self.header > self.data
    }

    pub fn set_header_width(&mut self, value: usize) {
        self.header = value;
        self.update_width();
    }

    /// Lower the header width to `value` if it is above it.
    pub fn cap_header_width(&mut self, value: usize) {
        if self.header > value {
            self.header = value;
            self.update_width();
        }
    }

    pub fn set_data_width(&mut self, value: usize) {
        self.data = value;
        self.update_width();
    }

    /// Raise the data width to `value` if it is below it.
    pub fn widen_data(&mut self, value: usize) {
        if self.data < value {
            self.data = value;
            self.update_width();
        }
    }

    /// Grow the effective width by `extra`; header and data both take the new width.
    pub fn grow(&mut self, extra: usize) {
        self.width += extra;
        self.header = self.width;
        self.data = self.width;
    }

    fn update_width(&mut self) {
        self.width = self.header.max(self.data);
    }
}

/// Sum of effective widths plus one separator between neighbours.
#[must_use]
pub fn total_width(columns: &[ColumnWidth]) -> usize {
    let separators = columns.len().saturating_sub(1);
    columns.iter().map(ColumnWidth::width).sum::<usize>() + separators
}

/// Outcome of a [`shrink_columns`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShrinkReport {
    /// Number of passes performed.
    pub passes: usize,
    /// Whether the columns ended within the surface width.
    pub converged: bool,
}

/// Shrink `columns` until they fit in `surface_width` cells or stop changing.
///
/// Each pass modifies at most one column, scanning from the last column to
/// the first. While any header is longer than its data, only such headers are
/// shrunk; afterwards data widths are shrunk and headers capped to them. A
/// column larger than the whole surface can afford is clamped in one step.
///
/// Reaching a fixed point over budget is logged and reported, never fatal.
pub fn shrink_columns(columns: &mut [ColumnWidth], surface_width: usize) -> ShrinkReport {
    let separators = columns.len().saturating_sub(1);
    let max_single = surface_width
        .saturating_sub(separators * 2 + 1)
        .max(1);

    let mut total = total_width(columns);
    let mut previous = None;
    let mut passes = 0;

    while total > surface_width && previous != Some(total) {
        previous = Some(total);
        passes += 1;

        // Policy is decided on the width-ordered view, mutation happens on
        // the original order.
        let mut by_width: Vec<usize> = (0..columns.len()).collect();
        by_width.sort_by_key(|&i| columns[i].width());
        let shrink_data = !by_width.iter().any(|&i| columns[i].is_header_longer());

        if shrink_data {
            shrink_widest_data(columns, max_single);
        } else {
            shrink_longest_header(columns, max_single);
        }

        total = total_width(columns);
        log::trace!(
            "shrink pass {passes}: total={total} surface={surface_width} data={shrink_data}"
        );
    }

    let converged = total <= surface_width;
    if !converged {
        log::warn!(
            "column shrinking stalled at {total} cells for a {surface_width}-cell surface; \
             rendering with overflowing widths"
        );
    }

    ShrinkReport { passes, converged }
}

fn shrink_widest_data(columns: &mut [ColumnWidth], max_single: usize) {
    for col in columns.iter_mut().rev() {
        if col.data_width() > max_single {
            col.set_data_width(max_single);
            col.cap_header_width(max_single);
            return;
        }
        if col.data_width() > 1 {
            col.set_data_width(col.data_width() - 1);
            col.cap_header_width(col.data_width());
            return;
        }
    }
}

fn shrink_longest_header(columns: &mut [ColumnWidth], max_single: usize) {
    for col in columns.iter_mut().rev() {
        if !col.is_header_longer() {
            continue;
        }
        if col.header_width() > max_single {
            col.set_header_width(max_single);
            return;
        }
        if col.header_width() > 1 {
            col.set_header_width(col.header_width() - 1);
            return;
        }
    }
}

/// Final per-column widths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation {
    widths: Vec<usize>,
    converged: bool,
}

impl Allocation {
    /// Width of each column in presentation order.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// `false` when shrinking stalled and the widths overflow the surface.
    #[must_use]
    pub const fn converged(&self) -> bool {
        self.converged
    }

    #[must_use]
    pub fn into_widths(self) -> Vec<usize> {
        self.widths
    }
}

/// Computes column widths for a surface of a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthAllocator {
    surface_width: usize,
}

impl WidthAllocator {
    #[must_use]
    pub const fn new(surface_width: usize) -> Self {
        Self { surface_width }
    }

    /// Check that `columns` columns of one cell each, plus separators, fit.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TooManyColumns`] if they don't.
    pub fn check_capacity(&self, columns: usize, mode: DisplayMode) -> Result<(), RenderError> {
        if columns * 2 > self.surface_width + 1 {
            return Err(RenderError::TooManyColumns {
                mode,
                columns,
                width: self.surface_width,
            });
        }
        Ok(())
    }

    /// Equal split: every column gets `surface / n - 1`, the last one also
    /// takes the remainder.
    ///
    /// Returns an empty vector for zero columns.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TooManyColumns`] when not even one cell per
    /// column fits.
    pub fn fixed(&self, columns: usize) -> Result<Vec<usize>, RenderError> {
        if columns == 0 {
            return Ok(Vec::new());
        }
        self.check_capacity(columns, DisplayMode::Fixed)?;

        let base = self.surface_width / columns - 1;
        let mut widths = vec![base; columns];
        let used = columns * (base + 1) - 1;
        if let Some(last) = widths.last_mut() {
            *last += self.surface_width - used;
        }
        Ok(widths)
    }

    /// Content-driven widths.
    ///
    /// Returns an empty allocation for zero columns.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TooManyColumns`] when not even one cell per
    /// column fits.
    pub fn fit(&self, mut columns: Vec<ColumnWidth>) -> Result<Allocation, RenderError> {
        if columns.is_empty() {
            return Ok(Allocation {
                widths: Vec::new(),
                converged: true,
            });
        }
        self.check_capacity(columns.len(), DisplayMode::Columns)?;

        let total = total_width(&columns);
        let mut converged = true;

        if total > self.surface_width {
            let report = shrink_columns(&mut columns, self.surface_width);
            log::debug!(
                "shrunk {} columns from {total} to {} cells in {} passes",
                columns.len(),
                total_width(&columns),
                report.passes
            );
            converged = report.converged;
        }

        // A one-step clamp can overshoot, so slack is possible after shrinking too.
        let total = total_width(&columns);
        if total < self.surface_width
            && let Some(last) = columns.last_mut()
        {
            last.grow(self.surface_width - total);
        }

        Ok(Allocation {
            widths: columns.iter().map(ColumnWidth::width).collect(),
            converged,
        })
    }

    /// Width of the label column in ROW layout: the longest label.
    #[must_use]
    pub fn label_width<S: AsRef<str>>(labels: &[S]) -> usize {
        labels
            .iter()
            .map(|label| crate::cells::cell_len(label.as_ref()))
            .max()
            .unwrap_or(0)
    }
}
