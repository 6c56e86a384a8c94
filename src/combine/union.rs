//! Vertical concatenation of frames aligned by column name.

use crate::combine::{flatten_inputs, TableInput};
use crate::data::{DataFrame, Value};
use crate::error::{FrameError, Result};
use std::collections::HashSet;

/// Concatenate any number of frames and/or columns vertically, aligning
/// rows by column name.
///
/// Inputs are flattened first; series are treated as single-column frames.
/// The result's columns are the union of every input's column names in
/// first-appearance order; an input lacking a column contributes missing
/// values for it. Row labels are preserved verbatim: duplicates across
/// inputs are retained and nothing is renumbered or deduplicated. Inputs
/// appear in the order given with their internal row order intact.
///
/// Column names must be unique within each single input
/// ([`FrameError::DuplicateColumns`]); zero inputs are rejected with
/// [`FrameError::EmptyInput`].
pub fn union_frames_by_name<I>(inputs: I) -> Result<DataFrame>
where
    I: IntoIterator<Item = TableInput>,
{
    let frames = flatten_inputs(inputs);
    if frames.is_empty() {
        return Err(FrameError::EmptyInput("no frames to union".to_string()));
    }

    // name-keyed alignment is ill-defined when one input reuses a name
    for frame in &frames {
        let mut seen = HashSet::new();
        for name in frame.column_names() {
            if !seen.insert(name) {
                return Err(FrameError::DuplicateColumns(name.to_string()));
            }
        }
    }

    // union of column names in first-appearance order
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names: Vec<String> = Vec::new();
    for frame in &frames {
        for name in frame.column_names() {
            if seen.insert(name) {
                names.push(name.to_string());
            }
        }
    }

    let total_rows: usize = frames.iter().map(|f| f.n_rows()).sum();
    let mut labels = Vec::with_capacity(total_rows);
    for frame in &frames {
        labels.extend(frame.labels().iter().cloned());
    }

    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        let mut values = Vec::with_capacity(total_rows);
        for frame in &frames {
            match frame.columns().iter().find(|c| c.name() == name.as_str()) {
                Some(column) => values.extend(column.values().iter().cloned()),
                None => values.extend(std::iter::repeat(Value::Missing).take(frame.n_rows())),
            }
        }
        columns.push((name.clone(), values));
    }

    DataFrame::new(labels, columns)
}
