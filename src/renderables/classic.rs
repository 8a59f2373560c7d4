//! Classic view - unformatted, delimiter separated output.
//!
//! No widths, no padding, no truncation: a header line of labels followed by
//! one line per row, fields joined by [`DELIMITER`]. The header is joined the
//! same way as the rows, so it carries no trailing delimiter (`id|name`, not
//! `id|name|`).

use std::io::{self, Write};

use crate::result::{QueryResult, ResultRow};
use crate::value::ValueFormatter;

/// Field delimiter.
pub const DELIMITER: &str = "|";

/// Streams rows in the CLASSIC layout.
#[derive(Debug, Clone, Copy)]
pub struct ClassicView<'a> {
    formatter: &'a ValueFormatter,
}

impl<'a> ClassicView<'a> {
    #[must_use]
    pub fn new(formatter: &'a ValueFormatter) -> Self {
        Self { formatter }
    }

    /// Write the header and every row, returning how many rows were written.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn render<W, R>(&self, out: &mut W, result: QueryResult<R>) -> io::Result<usize>
    where
        W: Write,
        R: Iterator<Item = ResultRow>,
    {
        writeln!(out, "{}", result.labels().join(DELIMITER))?;

        let (_, skip, rows) = result.into_parts();
        let mut count = 0;
        for row in rows {
            writeln!(out, "{}", self.line(&row, skip))?;
            count += 1;
        }
        Ok(count)
    }

    /// Visible values of `row` joined by [`DELIMITER`].
    #[must_use]
    pub fn line(&self, row: &ResultRow, skip: usize) -> String {
        row.visible(skip)
            .iter()
            .map(|value| self.formatter.format(value))
            .collect::<Vec<_>>()
            .join(DELIMITER)
    }
}
