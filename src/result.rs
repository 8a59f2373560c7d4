//! Executed result sets as handed over by the query layer.

use crate::value::CellValue;

/// A visible output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultColumn {
    display_name: String,
}

impl ResultColumn {
    /// Create a column with the given header label.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// Header label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<&str> for ResultColumn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ResultColumn {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// One row of values, row-id columns first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    values: Vec<CellValue>,
}

impl ResultRow {
    /// Create a row from its values.
    #[must_use]
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    /// All values, including row-id columns.
    #[must_use]
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Values shown to the user: everything after the first `skip`.
    #[must_use]
    pub fn visible(&self, skip: usize) -> &[CellValue] {
        self.values.get(skip..).unwrap_or_default()
    }
}

impl From<Vec<CellValue>> for ResultRow {
    fn from(values: Vec<CellValue>) -> Self {
        Self::new(values)
    }
}

impl<V: Into<CellValue>> FromIterator<V> for ResultRow {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Build a [`ResultRow`] from anything convertible into [`CellValue`].
///
/// ```
/// use query_render::row;
/// use query_render::value::CellValue;
///
/// let r = row![1, "Alice", None::<i64>];
/// assert_eq!(r.values()[2], CellValue::Null);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        $crate::result::ResultRow::new(vec![$($crate::value::CellValue::from($value)),*])
    };
}

/// Columns plus a stream of rows for a finished query.
///
/// Rows are pulled lazily; only the COLUMNS layout collects them all.
#[derive(Debug, Clone)]
pub struct QueryResult<R> {
    columns: Vec<ResultColumn>,
    row_id_columns: usize,
    rows: R,
}

impl<R> QueryResult<R>
where
    R: Iterator<Item = ResultRow>,
{
    /// Create a result from its visible columns and rows.
    pub fn new<C, T>(columns: C, rows: T) -> Self
    where
        C: IntoIterator,
        C::Item: Into<ResultColumn>,
        T: IntoIterator<IntoIter = R, Item = ResultRow>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            row_id_columns: 0,
            rows: rows.into_iter(),
        }
    }

    /// Set how many leading values of each row are row-id bookkeeping.
    #[must_use]
    pub fn row_id_columns(mut self, count: usize) -> Self {
        self.row_id_columns = count;
        self
    }

    /// Visible columns in presentation order.
    #[must_use]
    pub fn columns(&self) -> &[ResultColumn] {
        &self.columns
    }

    /// Number of leading row-id values to skip.
    #[must_use]
    pub const fn skip_count(&self) -> usize {
        self.row_id_columns
    }

    /// Header labels in presentation order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(ResultColumn::display_name).collect()
    }

    /// Split into columns, skip count and the row stream.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ResultColumn>, usize, R) {
        (self.columns, self.row_id_columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_skips_row_ids() {
        let r = row![10, 1, "Alice"];
        assert_eq!(r.visible(1), &[CellValue::Integer(1), CellValue::from("Alice")]);
        assert_eq!(r.visible(0).len(), 3);
        assert!(r.visible(5).is_empty());
    }

    #[test]
    fn test_query_result_keeps_column_order() {
        let result = QueryResult::new(["id", "name", "email"], vec![row![1, "Al", "a@x.com"]]);
        assert_eq!(result.labels(), vec!["id", "name", "email"]);
        assert_eq!(result.skip_count(), 0);
    }

    #[test]
    fn test_into_parts_streams_rows() {
        let result = QueryResult::new(["a"], vec![row![1], row![2]]).row_id_columns(2);
        let (columns, skip, mut rows) = result.into_parts();
        assert_eq!(columns.len(), 1);
        assert_eq!(skip, 2);
        assert_eq!(rows.next(), Some(row![1]));
        assert_eq!(rows.next(), Some(row![2]));
        assert_eq!(rows.next(), None);
    }

    #[test]
    fn test_row_from_iter() {
        let r: ResultRow = ["x", "y"].into_iter().collect();
        assert_eq!(r.values().len(), 2);
    }
}
