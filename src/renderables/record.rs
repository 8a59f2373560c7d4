//! Record view - the ROW layout.
//!
//! Each row becomes a block: a banner followed by one `label: value` line per
//! field. Labels are padded to the longest label; values are printed in full.
//!
//! ```text
//! ------------- Row 1 --------------
//! id  : 1
//! name: Alice
//! ```

use std::io::{self, Write};

use crate::cells;
use crate::renderables::rule::Rule;
use crate::result::{QueryResult, ResultRow};
use crate::value::ValueFormatter;
use crate::width::WidthAllocator;

/// Separator between a label and its value.
pub const LABEL_SEPARATOR: &str = ": ";

/// Streams rows in the ROW layout.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    formatter: &'a ValueFormatter,
    width: usize,
}

impl<'a> RecordView<'a> {
    /// `width` is the banner width.
    #[must_use]
    pub fn new(formatter: &'a ValueFormatter, width: usize) -> Self {
        Self { formatter, width }
    }

    /// Banner line introducing the `number`-th row (1-based).
    #[must_use]
    pub fn banner(&self, number: usize) -> String {
        Rule::with_title(format!("Row {number}")).render_plain(self.width)
    }

    /// Write every row of `result`, returning how many were written.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn render<W, R>(&self, out: &mut W, result: QueryResult<R>) -> io::Result<usize>
    where
        W: Write,
        R: Iterator<Item = ResultRow>,
    {
        let labels = result.labels();
        let label_width = WidthAllocator::label_width(&labels);
        let labels: Vec<String> = labels
            .iter()
            .map(|label| cells::pad_right(label, label_width))
            .collect();

        let (_, skip, rows) = result.into_parts();
        let mut count = 0;
        for row in rows {
            count += 1;
            writeln!(out, "{}", self.banner(count))?;
            self.render_fields(out, &labels, &row, skip)?;
        }
        Ok(count)
    }

    fn render_fields<W: Write>(
        &self,
        out: &mut W,
        labels: &[String],
        row: &ResultRow,
        skip: usize,
    ) -> io::Result<()> {
        for (label, value) in labels.iter().zip(row.visible(skip)) {
            writeln!(out, "{label}{LABEL_SEPARATOR}{}", self.formatter.format(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn test_labels_padded_to_longest() {
        let formatter = ValueFormatter::default();
        let result = QueryResult::new(["id", "name"], vec![row![1, "Alice"]]);
        let mut out = Vec::new();
        let count = RecordView::new(&formatter, 20).render(&mut out, result).unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "------ Row 1 -------\nid  : 1\nname: Alice\n"
        );
    }

    #[test]
    fn test_values_never_truncated() {
        let formatter = ValueFormatter::default();
        let long = "x".repeat(50);
        let result = QueryResult::new(["v"], vec![row![long.as_str()]]);
        let mut out = Vec::new();
        RecordView::new(&formatter, 10).render(&mut out, result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|line| line == format!("v: {long}")));
    }

    #[test]
    fn test_banner_numbers_rows() {
        let formatter = ValueFormatter::new("-");
        let result = QueryResult::new(["a"], vec![row![1], row![None::<i64>], row![3]]);
        let mut out = Vec::new();
        let count = RecordView::new(&formatter, 11).render(&mut out, result).unwrap();
        assert_eq!(count, 3);
        let text = String::from_utf8(out).unwrap();
        let banners: Vec<&str> = text.lines().filter(|l| l.contains("Row")).collect();
        assert_eq!(banners, vec!["-- Row 1 --", "-- Row 2 --", "-- Row 3 --"]);
        assert!(text.contains("a: -\n"));
    }
}
