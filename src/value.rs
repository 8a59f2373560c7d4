//! Cell values and their display strings.

use std::borrow::Cow;
use std::fmt;

/// Placeholder printed for null values unless configured otherwise.
pub const DEFAULT_NULL_VALUE: &str = "NULL";

/// A single value of a result row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Absent / SQL `NULL`.
    #[default]
    Null,
    /// Signed integer.
    Integer(i64),
    /// Floating point number.
    Real(f64),
    /// Text.
    Text(String),
    /// Raw bytes, shown as (lossy) UTF-8 text.
    Blob(Vec<u8>),
}

impl CellValue {
    /// Check whether this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Textual form of a non-null value, `None` for null.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Integer(i) => Some(Cow::Owned(i.to_string())),
            Self::Real(r) => Some(Cow::Owned(r.to_string())),
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Blob(b) => Some(String::from_utf8_lossy(b)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str(DEFAULT_NULL_VALUE),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for CellValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Turns cell values into display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormatter {
    null_value: String,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_NULL_VALUE)
    }
}

impl ValueFormatter {
    /// Create a formatter printing `null_value` for nulls.
    #[must_use]
    pub fn new(null_value: impl Into<String>) -> Self {
        Self {
            null_value: null_value.into(),
        }
    }

    /// The null placeholder.
    #[must_use]
    pub fn null_value(&self) -> &str {
        &self.null_value
    }

    /// Display string of `value`.
    #[must_use]
    pub fn format<'a>(&'a self, value: &'a CellValue) -> Cow<'a, str> {
        value
            .as_text()
            .unwrap_or(Cow::Borrowed(self.null_value.as_str()))
    }
}
