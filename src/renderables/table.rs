//! Table - the FIXED and COLUMNS layouts, and the entry point for all modes.
//!
//! A width-sensitive render produces:
//!
//! ```text
//! id|name|email
//! --+----+------------
//! 1 |Al  |a@x.com
//! ```
//!
//! Every header and cell is cut or padded to exactly its column width, cells
//! are separated by `|` and the rule under the header joins the column fills
//! with `+`.

use std::io::{self, Write};

use crate::cells;
use crate::config::{DisplayMode, RenderConfig};
use crate::error::RenderError;
use crate::renderables::classic::ClassicView;
use crate::renderables::record::RecordView;
use crate::renderables::rule::Rule;
use crate::result::{QueryResult, ResultColumn, ResultRow};
use crate::value::ValueFormatter;
use crate::width::{ColumnWidth, WidthAllocator};

/// Separator between two cells.
pub const COLUMN_SEPARATOR: &str = "|";
/// Fill character of the rule under the header.
pub const RULE_CHARACTER: char = '-';
/// Junction between two column fills of the rule.
pub const RULE_JUNCTION: &str = "+";

/// What a render call did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Data rows written.
    pub rows: usize,
    /// Column widths used; empty for ROW and CLASSIC.
    pub widths: Vec<usize>,
    /// `false` if column shrinking stalled over budget.
    pub converged: bool,
}

/// Renders a [`QueryResult`] according to a [`RenderConfig`].
#[derive(Debug, Clone)]
pub struct TableRenderer {
    mode: DisplayMode,
    width: usize,
    formatter: ValueFormatter,
}

impl TableRenderer {
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            mode: config.mode,
            width: config.width,
            formatter: ValueFormatter::new(config.null_value.clone()),
        }
    }

    /// Render `result` into `out`.
    ///
    /// A result without visible columns writes nothing.
    ///
    /// # Errors
    ///
    /// [`RenderError::TooManyColumns`] (before anything is written) when a
    /// width-sensitive layout cannot give each column one cell, and
    /// [`RenderError::Io`] when writing fails.
    pub fn render<W, R>(&self, out: &mut W, result: QueryResult<R>) -> Result<RenderStats, RenderError>
    where
        W: Write,
        R: Iterator<Item = ResultRow>,
    {
        if result.columns().is_empty() {
            return Ok(RenderStats {
                converged: true,
                ..RenderStats::default()
            });
        }

        match self.mode {
            DisplayMode::Fixed => self.render_fixed(out, result),
            DisplayMode::Columns => self.render_columns(out, result),
            DisplayMode::Row => {
                let rows = RecordView::new(&self.formatter, self.width).render(out, result)?;
                Ok(RenderStats {
                    rows,
                    widths: Vec::new(),
                    converged: true,
                })
            }
            DisplayMode::Classic => {
                let rows = ClassicView::new(&self.formatter).render(out, result)?;
                Ok(RenderStats {
                    rows,
                    widths: Vec::new(),
                    converged: true,
                })
            }
        }
    }

    fn render_fixed<W, R>(&self, out: &mut W, result: QueryResult<R>) -> Result<RenderStats, RenderError>
    where
        W: Write,
        R: Iterator<Item = ResultRow>,
    {
        let widths = WidthAllocator::new(self.width).fixed(result.columns().len())?;
        let (columns, skip, rows) = result.into_parts();
        let labels: Vec<&str> = columns.iter().map(ResultColumn::display_name).collect();

        self.render_header(out, &widths, &labels)?;
        let mut count = 0;
        for row in rows {
            self.render_row(out, &widths, &row, skip)?;
            count += 1;
        }

        Ok(RenderStats {
            rows: count,
            widths,
            converged: true,
        })
    }

    fn render_columns<W, R>(&self, out: &mut W, result: QueryResult<R>) -> Result<RenderStats, RenderError>
    where
        W: Write,
        R: Iterator<Item = ResultRow>,
    {
        let allocator = WidthAllocator::new(self.width);
        allocator.check_capacity(result.columns().len(), DisplayMode::Columns)?;

        let (columns, skip, rows) = result.into_parts();
        let labels: Vec<&str> = columns.iter().map(ResultColumn::display_name).collect();

        // Widths depend on every value, so the whole result is read first.
        let rows: Vec<ResultRow> = rows.collect();
        let measured = self.measure(&labels, &rows, skip);
        let allocation = allocator.fit(measured)?;
        let widths = allocation.widths();

        self.render_header(out, widths, &labels)?;
        for row in &rows {
            self.render_row(out, widths, row, skip)?;
        }

        Ok(RenderStats {
            rows: rows.len(),
            converged: allocation.converged(),
            widths: allocation.into_widths(),
        })
    }

    /// Header and data widths of each column as the content would need them.
    #[must_use]
    pub fn measure(&self, labels: &[&str], rows: &[ResultRow], skip: usize) -> Vec<ColumnWidth> {
        let mut measured: Vec<ColumnWidth> = labels
            .iter()
            .map(|label| ColumnWidth::new(cells::cell_len(label), 0))
            .collect();

        for row in rows {
            for (col, value) in measured.iter_mut().zip(row.visible(skip)) {
                col.widen_data(cells::cell_len(&self.formatter.format(value)));
            }
        }
        measured
    }

    /// Write the header line and the rule under it.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    #[allow(clippy::unused_self)]
    pub fn render_header<W: Write>(&self, out: &mut W, widths: &[usize], labels: &[&str]) -> io::Result<()> {
        writeln!(out, "{}", header_line(widths, labels))?;
        writeln!(out, "{}", rule_line(widths))
    }

    /// Write one data row, skipping the first `skip` values.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn render_row<W: Write>(
        &self,
        out: &mut W,
        widths: &[usize],
        row: &ResultRow,
        skip: usize,
    ) -> io::Result<()> {
        let line: Vec<String> = widths
            .iter()
            .zip(row.visible(skip))
            .map(|(&width, value)| cells::set_cell_size(&self.formatter.format(value), width))
            .collect();
        writeln!(out, "{}", line.join(COLUMN_SEPARATOR))
    }
}

/// Labels cut or padded to their widths, joined by [`COLUMN_SEPARATOR`].
#[must_use]
pub fn header_line(widths: &[usize], labels: &[&str]) -> String {
    widths
        .iter()
        .zip(labels)
        .map(|(&width, label)| cells::set_cell_size(label, width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// One [`RULE_CHARACTER`] per cell, columns joined by [`RULE_JUNCTION`].
#[must_use]
pub fn rule_line(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|&width| Rule::new().character(RULE_CHARACTER).render_plain(width))
        .collect::<Vec<_>>()
        .join(RULE_JUNCTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn render(config: &RenderConfig, result: QueryResult<std::vec::IntoIter<ResultRow>>) -> (String, RenderStats) {
        let mut out = Vec::new();
        let stats = TableRenderer::new(config).render(&mut out, result).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    fn sample() -> QueryResult<std::vec::IntoIter<ResultRow>> {
        QueryResult::new(["id", "name", "email"], vec![row![1, "Al", "a@x.com"]])
    }

    #[test]
    fn test_header_and_rule_lines() {
        assert_eq!(header_line(&[2, 4, 5], &["id", "name", "email"]), "id|name|email");
        assert_eq!(header_line(&[1, 2], &["id", "name"]), "i|na");
        assert_eq!(rule_line(&[2, 4, 5]), "--+----+-----");
        assert_eq!(rule_line(&[0, 1]), "+-");
    }

    #[test]
    fn test_columns_mode_fills_width() {
        let (output, stats) = render(&RenderConfig::new(DisplayMode::Columns, 20), sample());
        assert_eq!(stats.widths, vec![2, 4, 12]);
        assert!(stats.converged);
        assert_eq!(stats.rows, 1);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "id|name|email       ");
        assert_eq!(lines[1], "--+----+------------");
        assert_eq!(lines[2], "1 |Al  |a@x.com     ");
        for line in lines {
            assert_eq!(cells::cell_len(line), 20);
        }
    }

    #[test]
    fn test_fixed_mode_ignores_content() {
        let (output, stats) = render(&RenderConfig::new(DisplayMode::Fixed, 12), sample());
        assert_eq!(stats.widths, vec![3, 3, 4]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["id |nam|emai", "---+---+----", "1  |Al |a@x."]);
    }

    #[test]
    fn test_row_id_columns_are_skipped() {
        let result = QueryResult::new(["name"], vec![row![77, "Alice"]]).row_id_columns(1);
        let (output, _) = render(&RenderConfig::new(DisplayMode::Columns, 5), result);
        assert_eq!(output, "name \n-----\nAlice\n");
    }

    #[test]
    fn test_null_placeholder_in_cells() {
        let result = QueryResult::new(["v"], vec![row![None::<i64>]]);
        let config = RenderConfig::new(DisplayMode::Columns, 6).null_value("<nil>");
        let (output, _) = render(&config, result);
        assert_eq!(output.lines().nth(2), Some("<nil> "));
    }

    #[test]
    fn test_placeholder_counts_toward_width() {
        let result = QueryResult::new(["a", "b"], vec![row![None::<i64>, "x"]]);
        let (_, stats) = render(&RenderConfig::new(DisplayMode::Columns, 80), result);
        assert_eq!(stats.widths[0], 4);
    }

    #[test]
    fn test_too_many_columns_writes_nothing() {
        let mut out = Vec::new();
        let config = RenderConfig::new(DisplayMode::Columns, 3);
        let err = TableRenderer::new(&config).render(&mut out, sample()).unwrap_err();
        assert!(err.is_layout());
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_columns_writes_nothing() {
        for mode in DisplayMode::ALL {
            let result = QueryResult::new(Vec::<&str>::new(), vec![row![1]]);
            let (output, stats) = render(&RenderConfig::new(mode, 20), result);
            assert!(output.is_empty(), "{mode}");
            assert_eq!(stats.rows, 0);
        }
    }

    #[test]
    fn test_empty_result_renders_header_only() {
        let result = QueryResult::new(["id"], Vec::new());
        let (output, stats) = render(&RenderConfig::new(DisplayMode::Columns, 4), result);
        assert_eq!(output, "id  \n----\n");
        assert_eq!(stats.rows, 0);
    }

    #[test]
    fn test_measure_uses_longest_value() {
        let config = RenderConfig::default();
        let renderer = TableRenderer::new(&config);
        let rows = vec![row![1, "Al"], row![100, "Alexandra"]];
        let measured = renderer.measure(&["id", "name"], &rows, 0);
        assert_eq!(measured[0], ColumnWidth::new(2, 3));
        assert_eq!(measured[1], ColumnWidth::new(4, 9));
    }
}
