//! Export data model: scalar values, rows, header sets and formats.

use std::borrow::Cow;

use clap::ValueEnum;

use crate::config::{CSV_FILENAME_PREFIX, XLSX_FILENAME_PREFIX};

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, UTF-8 with a byte-order mark
    Csv,
    /// Excel workbook (Office Open XML)
    Xlsx,
}

impl ExportFormat {
    /// File name prefix of downloads in this format.
    pub fn filename_prefix(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_FILENAME_PREFIX,
            ExportFormat::Xlsx => XLSX_FILENAME_PREFIX,
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// A scalar database value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Integer column value
    Integer(i64),
    /// Floating point column value
    Real(f64),
    /// Text column value
    Text(String),
}

impl Value {
    /// Renders the value as a CSV field: NULL is empty, numbers use their
    /// shortest decimal form.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Integer(i) => Cow::Owned(i.to_string()),
            Value::Real(f) => Cow::Owned(f.to_string()),
            Value::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Real(f)
    }
}

/// One table row: column names mapped to values, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty row with room for `n` columns.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            columns: Vec::with_capacity(n),
        }
    }

    /// Appends a column. Later columns with the same name are shadowed by the first.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((name.into(), value.into()));
    }

    /// Looks a column up by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    /// Column names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Column names of an export, fixed by the first row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Derives the header from a row's keys.
    pub fn from_row(row: &Row) -> Self {
        Self {
            names: row.keys().map(str::to_string).collect(),
        }
    }

    /// Column names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the header has no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Values of `row` in header order; `None` where the row lacks a column.
    ///
    /// Rows produced by the same query share the header's layout, so the
    /// positional slot is checked before falling back to a name lookup.
    pub fn values<'r>(&'r self, row: &'r Row) -> impl Iterator<Item = Option<&'r Value>> + 'r {
        self.names.iter().enumerate().map(move |(i, name)| {
            match row.columns.get(i) {
                Some((column, value)) if column == name => Some(value),
                _ => row.get(name),
            }
        })
    }
}
