//! Variadic inputs for the combination functions.

use crate::data::{DataFrame, Series};

/// One argument to a combination function: a frame, a labeled column, or a
/// nested group of further inputs.
///
/// The `From` conversions let call sites mix frames, series, and
/// sequences of either in a single call, the way the combination helpers
/// accept them.
#[derive(Debug, Clone)]
pub enum TableInput {
    /// A labeled table.
    Frame(DataFrame),
    /// A labeled column, treated as a single-column table.
    Column(Series),
    /// A nested sequence of inputs.
    Group(Vec<TableInput>),
}

impl From<DataFrame> for TableInput {
    fn from(frame: DataFrame) -> Self {
        TableInput::Frame(frame)
    }
}

impl From<Series> for TableInput {
    fn from(series: Series) -> Self {
        TableInput::Column(series)
    }
}

impl From<Vec<DataFrame>> for TableInput {
    fn from(frames: Vec<DataFrame>) -> Self {
        TableInput::Group(frames.into_iter().map(TableInput::Frame).collect())
    }
}

impl From<Vec<Series>> for TableInput {
    fn from(series: Vec<Series>) -> Self {
        TableInput::Group(series.into_iter().map(TableInput::Column).collect())
    }
}

impl From<Vec<TableInput>> for TableInput {
    fn from(group: Vec<TableInput>) -> Self {
        TableInput::Group(group)
    }
}

/// Expand arbitrarily nested inputs into a flat sequence of frames,
/// preserving the original relative order.
///
/// Series become single-column frames named after the series, or after the
/// positional placeholder when unnamed. Applied exactly once at the entry
/// of each combination function.
pub fn flatten_inputs<I>(inputs: I) -> Vec<DataFrame>
where
    I: IntoIterator<Item = TableInput>,
{
    let mut frames = Vec::new();
    for input in inputs {
        push_input(input, &mut frames);
    }
    frames
}

fn push_input(input: TableInput, frames: &mut Vec<DataFrame>) {
    match input {
        TableInput::Frame(frame) => frames.push(frame),
        TableInput::Column(series) => frames.push(DataFrame::from(series)),
        TableInput::Group(group) => {
            for item in group {
                push_input(item, frames);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Value, PLACEHOLDER_NAME};

    fn small_frame(name: &str) -> DataFrame {
        DataFrame::new(
            vec![0.into()],
            vec![(name.to_string(), vec![1.into()])],
        )
        .unwrap()
    }

    #[test]
    fn test_flatten_preserves_order() {
        let inputs: Vec<TableInput> = vec![
            vec![small_frame("a"), small_frame("b")].into(),
            small_frame("c").into(),
        ];
        let frames = flatten_inputs(inputs);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].column_names(), vec!["a"]);
        assert_eq!(frames[1].column_names(), vec!["b"]);
        assert_eq!(frames[2].column_names(), vec!["c"]);
    }

    #[test]
    fn test_flatten_nested_groups() {
        let inner: TableInput = vec![small_frame("y"), small_frame("z")].into();
        let inputs: Vec<TableInput> = vec![small_frame("x").into(), vec![inner].into()];
        let frames = flatten_inputs(inputs);
        let names: Vec<_> = frames.iter().flat_map(|f| f.column_names()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_series_become_single_column_frames() {
        let named = Series::new("s", vec![1.into(), 2.into()]);
        let unnamed = Series::unnamed(vec![3.into()]);
        let frames = flatten_inputs([named.into(), unnamed.into()]);
        assert_eq!(frames[0].column_names(), vec!["s"]);
        assert_eq!(frames[1].column_names(), vec![PLACEHOLDER_NAME]);
        assert_eq!(frames[1].cell(0, 0), Some(&Value::Int(3)));
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_inputs(Vec::<TableInput>::new()).is_empty());
    }
}
