//! Horizontal combination of frames aligned by row label.

use crate::combine::{flatten_inputs, TableInput};
use crate::data::{DataFrame, Value};
use crate::error::{FrameError, Result};
use std::collections::{HashMap, HashSet};

/// Join any number of frames and/or columns into one frame aligned by row
/// label (outer join).
///
/// Inputs are flattened first; series are treated as single-column frames.
/// The result's label sequence is the union of every input's labels in
/// first-appearance order, and a label absent from an input yields missing
/// values for that input's columns. Column order follows input order, and
/// duplicate column names are preserved as-is, never deduplicated or
/// renamed.
///
/// When all inputs carry the identical label sequence no realignment
/// happens and duplicate labels are allowed; otherwise every input must
/// have unique labels ([`FrameError::DuplicateLabels`]). Zero inputs are
/// rejected with [`FrameError::EmptyInput`].
pub fn join_frames_by_index<I>(inputs: I) -> Result<DataFrame>
where
    I: IntoIterator<Item = TableInput>,
{
    let frames = flatten_inputs(inputs);
    if frames.is_empty() {
        return Err(FrameError::EmptyInput("no frames to join".to_string()));
    }

    // identical label sequences need no realignment and may repeat
    let identical = frames
        .iter()
        .skip(1)
        .all(|frame| frame.labels() == frames[0].labels());
    if identical {
        let labels = frames[0].labels().to_vec();
        let mut columns = Vec::new();
        for frame in &frames {
            for column in frame.columns() {
                columns.push((column.name().to_string(), column.values().to_vec()));
            }
        }
        return DataFrame::new(labels, columns);
    }

    // outer alignment: map each input's labels to row positions
    let mut label_maps: Vec<HashMap<&Value, usize>> = Vec::with_capacity(frames.len());
    for frame in &frames {
        let mut map = HashMap::with_capacity(frame.n_rows());
        for (row, label) in frame.labels().iter().enumerate() {
            if map.insert(label, row).is_some() {
                return Err(FrameError::DuplicateLabels(label.to_string()));
            }
        }
        label_maps.push(map);
    }

    // union of labels in first-appearance order
    let mut seen: HashSet<&Value> = HashSet::new();
    let mut labels: Vec<Value> = Vec::new();
    for frame in &frames {
        for label in frame.labels() {
            if seen.insert(label) {
                labels.push(label.clone());
            }
        }
    }

    let mut columns = Vec::new();
    for (frame, map) in frames.iter().zip(&label_maps) {
        for column in frame.columns() {
            let values: Vec<Value> = labels
                .iter()
                .map(|label| {
                    map.get(label)
                        .map(|&row| column.values()[row].clone())
                        .unwrap_or(Value::Missing)
                })
                .collect();
            columns.push((column.name().to_string(), values));
        }
    }

    DataFrame::new(labels, columns)
}
