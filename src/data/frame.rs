//! Labeled two-dimensional tables.

use crate::data::{Series, Value};
use crate::error::{FrameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Column name given to an unnamed series when it becomes a single-column
/// frame, matching the positional placeholder of the original tooling.
pub const PLACEHOLDER_NAME: &str = "0";

/// A named column inside a [`DataFrame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values in row order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// A labeled table: an ordered set of named columns sharing one row-label
/// sequence.
///
/// Row labels are arbitrary values and are not required to be unique, and
/// neither are column names; [`DataFrame::column`] returns the first column
/// carrying a name. All operations on frames are side-effect-free and
/// return freshly constructed results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    labels: Vec<Value>,
    columns: Vec<Column>,
}

impl DataFrame {
    /// Create a frame from row labels and named columns.
    ///
    /// Every column must have exactly one value per row label.
    pub fn new(labels: Vec<Value>, columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        let n_rows = labels.len();
        let mut cols = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            if values.len() != n_rows {
                return Err(FrameError::DimensionMismatch {
                    expected: n_rows,
                    actual: values.len(),
                });
            }
            cols.push(Column { name, values });
        }
        Ok(Self {
            labels,
            columns: cols,
        })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Row labels in order.
    pub fn labels(&self) -> &[Value] {
        &self.labels
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order (duplicates preserved).
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether any column carries this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// First column with this name, materialized as a series that shares
    /// the frame's row labels.
    pub fn column(&self, name: &str) -> Result<Series> {
        let col = self
            .columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| FrameError::MissingColumn(name.to_string()))?;
        Series::with_labels(
            Some(col.name.clone()),
            self.labels.clone(),
            col.values.clone(),
        )
    }

    /// Column at a position, materialized as a series.
    pub fn column_at(&self, idx: usize) -> Option<Series> {
        let col = self.columns.get(idx)?;
        Series::with_labels(
            Some(col.name.clone()),
            self.labels.clone(),
            col.values.clone(),
        )
        .ok()
    }

    /// Cell at (row, column position).
    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get(col)?.values.get(row)
    }

    /// Values of one row, in column order.
    pub fn row(&self, row: usize) -> Option<Vec<&Value>> {
        if row >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[row]).collect())
    }

    /// Load a frame from a TSV file.
    ///
    /// Expected format:
    /// - First row: header; the first field is ignored, the rest are
    ///   column names.
    /// - Subsequent rows: row label followed by cell values.
    ///
    /// Cells parse as integer, then float, then boolean, falling back to
    /// string; empty and `NA`/`na` cells are missing. Short rows are padded
    /// with missing values.
    pub fn from_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        // Parse header
        let header_line = lines
            .next()
            .ok_or_else(|| FrameError::EmptyData("Empty TSV file".to_string()))??;
        let header: Vec<&str> = header_line.split('\t').collect();
        let names: Vec<String> = header[1..].iter().map(|s| s.to_string()).collect();
        let n_cols = names.len();

        let mut labels = Vec::new();
        let mut values: Vec<Vec<Value>> = vec![Vec::new(); n_cols];

        for line_result in lines {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            labels.push(parse_cell(fields[0]));
            for (col_idx, column) in values.iter_mut().enumerate() {
                let cell = fields
                    .get(col_idx + 1)
                    .map(|raw| parse_cell(raw))
                    .unwrap_or(Value::Missing);
                column.push(cell);
            }
        }

        Self::new(labels, names.into_iter().zip(values).collect())
    }

    /// Write the frame to a TSV file, missing cells as `NA`.
    pub fn to_tsv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        // Header; the label column gets an empty name
        for column in &self.columns {
            write!(writer, "\t{}", column.name)?;
        }
        writeln!(writer)?;

        for row in 0..self.n_rows() {
            write!(writer, "{}", self.labels[row])?;
            for column in &self.columns {
                write!(writer, "\t{}", column.values[row])?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    /// Render the frame as a JSON array of row records.
    ///
    /// Each record holds the row label under `"index"` plus one entry per
    /// column. With duplicate column names the later column wins within a
    /// record; use TSV output when duplicates must survive.
    pub fn to_json(&self) -> Result<String> {
        let mut records = Vec::with_capacity(self.n_rows());
        for row in 0..self.n_rows() {
            let mut record = serde_json::Map::new();
            record.insert("index".to_string(), serde_json::to_value(&self.labels[row])?);
            for column in &self.columns {
                record.insert(
                    column.name.clone(),
                    serde_json::to_value(&column.values[row])?,
                );
            }
            records.push(serde_json::Value::Object(record));
        }
        Ok(serde_json::to_string(&records)?)
    }
}

impl From<Series> for DataFrame {
    /// Treat a series as a single-column frame, using its name or the
    /// positional placeholder when unnamed.
    fn from(series: Series) -> Self {
        let name = series
            .name()
            .unwrap_or(PLACEHOLDER_NAME)
            .to_string();
        let labels = series.labels().to_vec();
        let values = series.values().to_vec();
        Self {
            labels,
            columns: vec![Column { name, values }],
        }
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .labels
            .iter()
            .map(|l| l.to_string().len())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| {
                c.values
                    .iter()
                    .map(|v| v.to_string().len())
                    .chain(std::iter::once(c.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:>label_width$}", "")?;
        for (column, width) in self.columns.iter().zip(widths.iter().copied()) {
            write!(f, "  {:>width$}", column.name)?;
        }
        writeln!(f)?;

        for row in 0..self.n_rows() {
            write!(f, "{:>label_width$}", self.labels[row].to_string())?;
            for (column, width) in self.columns.iter().zip(widths.iter().copied()) {
                write!(f, "  {:>width$}", column.values[row].to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_cell(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() || raw == "NA" || raw == "na" {
        return Value::Missing;
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Value::Int(v);
    }
    if let Ok(v) = raw.parse::<f64>() {
        return Value::from(v);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Str(raw.to_string()),
    }
}
