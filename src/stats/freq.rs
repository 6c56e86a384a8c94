//! Value frequencies and mode.

use crate::data::{DataFrame, Value};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Count distinct values, in first-encountered order.
///
/// With `dropna == true` missing-class entries (the `Missing` marker and
/// float NaN) are skipped; with `dropna == false` they are tallied together
/// under the single `Missing` key, which takes the position of the first
/// missing entry.
pub fn value_counts(values: &[Value], dropna: bool) -> Vec<(Value, u64)> {
    let mut order: Vec<Value> = Vec::new();
    let mut counts: HashMap<Value, u64> = HashMap::new();

    for value in values {
        let key = if value.is_missing() {
            if dropna {
                continue;
            }
            Value::Missing
        } else {
            value.clone()
        };
        match counts.entry(key) {
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(1);
            }
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
        }
    }

    order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect()
}

/// Build a frequency table for a collection of values.
///
/// One row per distinct value (the value is the row label), ordered by
/// descending count. Ties keep the order in which the values first appear
/// in the input; this tie-break is a deliberate contract shared with
/// [`mode`], not a sorting accident. Columns:
///
/// - `n`: count
/// - `N`: cumulative count in output row order
/// - `r`: relative frequency `n / total`
/// - `R`: cumulative relative frequency (last row is 1.0)
///
/// An empty input (after the dropna filter) yields an empty frame that
/// still carries the four columns.
///
/// ```
/// use frametools::prelude::*;
///
/// let values: Vec<Value> = ["a", "c", "b", "g", "h", "a", "g", "a"]
///     .iter().map(|&s| s.into()).collect();
/// let table = freq(&values, true);
/// assert_eq!(table.labels()[0], Value::from("a"));
/// assert_eq!(table.cell(0, 0), Some(&Value::Int(3)));
/// ```
pub fn freq(values: &[Value], dropna: bool) -> DataFrame {
    let mut counts = value_counts(values, dropna);
    // stable sort: equal counts stay in first-encountered order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: u64 = counts.iter().map(|(_, c)| c).sum();
    let mut labels = Vec::with_capacity(counts.len());
    let mut n = Vec::with_capacity(counts.len());
    let mut cum_n = Vec::with_capacity(counts.len());
    let mut r = Vec::with_capacity(counts.len());
    let mut cum_r = Vec::with_capacity(counts.len());

    let mut running = 0u64;
    let mut running_rel = 0.0f64;
    for (value, count) in counts {
        running += count;
        let rel = count as f64 / total as f64;
        running_rel += rel;
        labels.push(value);
        n.push(Value::Int(count as i64));
        cum_n.push(Value::Int(running as i64));
        r.push(Value::from(rel));
        cum_r.push(Value::from(running_rel));
    }

    DataFrame::new(
        labels,
        vec![
            ("n".to_string(), n),
            ("N".to_string(), cum_n),
            ("r".to_string(), r),
            ("R".to_string(), cum_r),
        ],
    )
    .expect("frequency columns are rectangular")
}

/// The most frequent value and its count.
///
/// `None` when nothing remains after the dropna filter. Ties resolve to the
/// value that appears first in the input, exactly the pair [`freq`] ranks
/// first. With `dropna == false` the missing marker is a representable mode
/// value.
pub fn mode(values: &[Value], dropna: bool) -> Option<(Value, u64)> {
    mode_from_counts(value_counts(values, dropna))
}

pub(crate) fn mode_from_counts(counts: Vec<(Value, u64)>) -> Option<(Value, u64)> {
    let mut best: Option<(Value, u64)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best
}
