//! Per-column profiling of labeled tables.

use crate::data::{infer_dtype, Column, DataFrame, Series, Value};
use crate::stats::entropy::efficiency_from_counts;
use crate::stats::freq::{mode_from_counts, value_counts};
use rayon::prelude::*;

/// Percentiles reported by [`profile`], with their column names.
const PERCENTILES: [(f64, &str); 5] = [
    (0.05, "5%"),
    (0.25, "25%"),
    (0.50, "50%"),
    (0.75, "75%"),
    (0.95, "95%"),
];

/// Everything [`profile`] reports about one column.
struct ColumnSummary {
    name: String,
    dtype: &'static str,
    count: u64,
    isnull: u64,
    unique: u64,
    top: Value,
    top_freq: Option<u64>,
    mean: f64,
    std: f64,
    min: f64,
    percentiles: [f64; 5],
    max: f64,
    skewness: f64,
    kurtosis: f64,
    efficiency: f64,
}

/// Profile every column of a frame.
///
/// The result has one row per input column (the column name is the row
/// label) and a fixed set of descriptive columns:
///
/// `type, count, isnull, unique, top, freq, mean, std, min, 5%, 25%, 50%,
/// 75%, 95%, max, skewness, kurtosis, efficiency, pct_isnull, pct_unique,
/// pct_freq`
///
/// `top`/`freq` are the mode value and its count with missing entries
/// dropped; the moment statistics and percentiles are computed only for
/// numeric (`int64`/`float64`) columns; boolean columns are categorical
/// and report missing there, like any other non-numeric column. Undefined
/// statistics are stored as `Missing`, the frame-level NaN.
pub fn profile(frame: &DataFrame) -> DataFrame {
    let summaries: Vec<ColumnSummary> =
        frame.columns().par_iter().map(summarize_column).collect();

    let n_rows = frame.n_rows() as f64;
    let len = summaries.len();
    let mut labels = Vec::with_capacity(len);
    let mut dtype = Vec::with_capacity(len);
    let mut count = Vec::with_capacity(len);
    let mut isnull = Vec::with_capacity(len);
    let mut unique = Vec::with_capacity(len);
    let mut top = Vec::with_capacity(len);
    let mut top_freq = Vec::with_capacity(len);
    let mut mean = Vec::with_capacity(len);
    let mut std = Vec::with_capacity(len);
    let mut min = Vec::with_capacity(len);
    let mut pct_cols: Vec<Vec<Value>> = vec![Vec::with_capacity(len); PERCENTILES.len()];
    let mut max = Vec::with_capacity(len);
    let mut skewness = Vec::with_capacity(len);
    let mut kurtosis = Vec::with_capacity(len);
    let mut efficiency = Vec::with_capacity(len);
    let mut pct_isnull = Vec::with_capacity(len);
    let mut pct_unique = Vec::with_capacity(len);
    let mut pct_freq = Vec::with_capacity(len);

    for summary in summaries {
        labels.push(Value::Str(summary.name));
        dtype.push(Value::from(summary.dtype));
        count.push(Value::Int(summary.count as i64));
        isnull.push(Value::Int(summary.isnull as i64));
        unique.push(Value::Int(summary.unique as i64));
        top.push(summary.top);
        top_freq.push(Value::from(summary.top_freq.map(|f| f as f64)));
        mean.push(Value::from(summary.mean));
        std.push(Value::from(summary.std));
        min.push(Value::from(summary.min));
        for (values, pct) in pct_cols.iter_mut().zip(summary.percentiles) {
            values.push(Value::from(pct));
        }
        max.push(Value::from(summary.max));
        skewness.push(Value::from(summary.skewness));
        kurtosis.push(Value::from(summary.kurtosis));
        efficiency.push(Value::from(summary.efficiency));
        pct_isnull.push(Value::from(summary.isnull as f64 / n_rows));
        pct_unique.push(Value::from(summary.unique as f64 / n_rows));
        pct_freq.push(Value::from(
            summary.top_freq.map(|f| f as f64 / n_rows),
        ));
    }

    let mut columns = vec![
        ("type".to_string(), dtype),
        ("count".to_string(), count),
        ("isnull".to_string(), isnull),
        ("unique".to_string(), unique),
        ("top".to_string(), top),
        ("freq".to_string(), top_freq),
        ("mean".to_string(), mean),
        ("std".to_string(), std),
        ("min".to_string(), min),
    ];
    for ((_, name), values) in PERCENTILES.iter().zip(pct_cols) {
        columns.push((name.to_string(), values));
    }
    columns.extend([
        ("max".to_string(), max),
        ("skewness".to_string(), skewness),
        ("kurtosis".to_string(), kurtosis),
        ("efficiency".to_string(), efficiency),
        ("pct_isnull".to_string(), pct_isnull),
        ("pct_unique".to_string(), pct_unique),
        ("pct_freq".to_string(), pct_freq),
    ]);

    DataFrame::new(labels, columns).expect("profile columns are rectangular")
}

fn summarize_column(column: &Column) -> ColumnSummary {
    let values = column.values();
    let counts = value_counts(values, true);
    let count: u64 = counts.iter().map(|(_, c)| c).sum();
    let unique = counts.len() as u64;
    let efficiency = efficiency_from_counts(&counts);
    let (top, top_freq) = match mode_from_counts(counts) {
        Some((value, freq)) => (value, Some(freq)),
        None => (Value::Missing, None),
    };

    let dtype = infer_dtype(values);
    let numeric = dtype == "int64" || dtype == "float64";
    let (mean, std, min, percentiles, max, skewness, kurtosis) = if numeric {
        let series = Series::unnamed(values.to_vec());
        let mut pcts = [f64::NAN; 5];
        for (slot, (q, _)) in pcts.iter_mut().zip(PERCENTILES) {
            *slot = series.quantile(q);
        }
        (
            series.mean(),
            series.std(),
            series.min(),
            pcts,
            series.max(),
            series.skewness(),
            series.kurtosis(),
        )
    } else {
        (
            f64::NAN,
            f64::NAN,
            f64::NAN,
            [f64::NAN; 5],
            f64::NAN,
            f64::NAN,
            f64::NAN,
        )
    };

    ColumnSummary {
        name: column.name().to_string(),
        dtype,
        count,
        isnull: values.len() as u64 - count,
        unique,
        top,
        top_freq,
        mean,
        std,
        min,
        percentiles,
        max,
        skewness,
        kurtosis,
        efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Cell lookup by row label and column name.
    fn cell(report: &DataFrame, row: &str, col: &str) -> Value {
        let row_idx = report
            .labels()
            .iter()
            .position(|l| l == &Value::from(row))
            .unwrap();
        let col_idx = report
            .column_names()
            .iter()
            .position(|&n| n == col)
            .unwrap();
        report.cell(row_idx, col_idx).unwrap().clone()
    }

    fn num(report: &DataFrame, row: &str, col: &str) -> f64 {
        cell(report, row, col).as_f64().unwrap()
    }

    fn create_test_frame() -> DataFrame {
        DataFrame::new(
            (0..6).map(Value::from).collect(),
            vec![
                (
                    "a".to_string(),
                    vec![
                        true.into(),
                        Value::Missing,
                        false.into(),
                        false.into(),
                        true.into(),
                        false.into(),
                    ],
                ),
                ("b".to_string(), vec![1.into(); 6]),
                ("c".to_string(), vec![Value::Missing; 6]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_profile_shape() {
        let report = profile(&create_test_frame());
        assert_eq!(report.n_rows(), 3);
        assert_eq!(
            report.labels(),
            &["a".into(), "b".into(), "c".into()] as &[Value]
        );
        assert_eq!(
            report.column_names(),
            vec![
                "type",
                "count",
                "isnull",
                "unique",
                "top",
                "freq",
                "mean",
                "std",
                "min",
                "5%",
                "25%",
                "50%",
                "75%",
                "95%",
                "max",
                "skewness",
                "kurtosis",
                "efficiency",
                "pct_isnull",
                "pct_unique",
                "pct_freq",
            ]
        );
    }

    #[test]
    fn test_profile_boolean_column_is_categorical() {
        let report = profile(&create_test_frame());

        assert_eq!(cell(&report, "a", "type"), "object".into());
        assert_eq!(cell(&report, "a", "count"), Value::Int(5));
        assert_eq!(cell(&report, "a", "isnull"), Value::Int(1));
        assert_eq!(cell(&report, "a", "unique"), Value::Int(2));
        assert_eq!(cell(&report, "a", "top"), Value::Bool(false));
        assert_eq!(cell(&report, "a", "freq"), Value::Float(3.0));

        for col in ["mean", "std", "min", "5%", "50%", "95%", "max", "skewness", "kurtosis"] {
            assert_eq!(cell(&report, "a", col), Value::Missing);
        }

        assert_relative_eq!(
            num(&report, "a", "efficiency"),
            0.9709505944546686,
            epsilon = 1e-12
        );
        assert_relative_eq!(num(&report, "a", "pct_isnull"), 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "a", "pct_unique"), 2.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "a", "pct_freq"), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_profile_constant_int_column() {
        let report = profile(&create_test_frame());

        assert_eq!(cell(&report, "b", "type"), "int64".into());
        assert_eq!(cell(&report, "b", "count"), Value::Int(6));
        assert_eq!(cell(&report, "b", "isnull"), Value::Int(0));
        assert_eq!(cell(&report, "b", "unique"), Value::Int(1));
        assert_eq!(cell(&report, "b", "top"), Value::Int(1));
        assert_eq!(cell(&report, "b", "freq"), Value::Float(6.0));

        for col in ["mean", "min", "5%", "25%", "50%", "75%", "95%", "max"] {
            assert_relative_eq!(num(&report, "b", col), 1.0, epsilon = 1e-12);
        }
        for col in ["std", "skewness", "kurtosis", "efficiency"] {
            assert_relative_eq!(num(&report, "b", col), 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(num(&report, "b", "pct_isnull"), 0.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "b", "pct_unique"), 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "b", "pct_freq"), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_profile_all_missing_column() {
        let report = profile(&create_test_frame());

        assert_eq!(cell(&report, "c", "type"), "object".into());
        assert_eq!(cell(&report, "c", "count"), Value::Int(0));
        assert_eq!(cell(&report, "c", "isnull"), Value::Int(6));
        assert_eq!(cell(&report, "c", "unique"), Value::Int(0));
        assert_eq!(cell(&report, "c", "top"), Value::Missing);
        assert_eq!(cell(&report, "c", "freq"), Value::Missing);
        assert_eq!(cell(&report, "c", "efficiency"), Value::Missing);
        assert_eq!(cell(&report, "c", "pct_freq"), Value::Missing);
        assert_relative_eq!(num(&report, "c", "pct_isnull"), 1.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "c", "pct_unique"), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_profile_numeric_spread() {
        let frame = DataFrame::new(
            (0..4).map(Value::from).collect(),
            vec![(
                "d".to_string(),
                vec![1.into(), 2.into(), 3.into(), 4.into()],
            )],
        )
        .unwrap();
        let report = profile(&frame);

        assert_eq!(cell(&report, "d", "type"), "int64".into());
        assert_eq!(cell(&report, "d", "unique"), Value::Int(4));
        assert_relative_eq!(num(&report, "d", "mean"), 2.5, epsilon = 1e-12);
        assert_relative_eq!(
            num(&report, "d", "std"),
            (5.0f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(num(&report, "d", "min"), 1.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "d", "25%"), 1.75, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "d", "50%"), 2.5, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "d", "75%"), 3.25, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "d", "max"), 4.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "d", "skewness"), 0.0, epsilon = 1e-12);
        assert_relative_eq!(num(&report, "d", "kurtosis"), -1.2, epsilon = 1e-12);
        // all distinct: maximally efficient
        assert_relative_eq!(num(&report, "d", "efficiency"), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_profile_empty_frame() {
        let frame = DataFrame::new(vec![], vec![]).unwrap();
        let report = profile(&frame);
        assert_eq!(report.n_rows(), 0);
        assert_eq!(report.n_cols(), 21);
    }
}
