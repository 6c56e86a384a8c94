//! Labeled one-dimensional sequences of values.

use crate::data::Value;
use crate::error::{FrameError, Result};
use serde::{Deserialize, Serialize};

/// A labeled column: an ordered sequence of values paired with row labels
/// and an optional name.
///
/// Labels are arbitrary values and are not required to be unique. A series
/// built with [`Series::new`] or [`Series::unnamed`] is labeled positionally
/// with integers `0..n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: Option<String>,
    labels: Vec<Value>,
    values: Vec<Value>,
}

impl Series {
    /// Create a named series with positional integer labels.
    pub fn new(name: &str, values: Vec<Value>) -> Self {
        let labels = (0..values.len()).map(Value::from).collect();
        Self {
            name: Some(name.to_string()),
            labels,
            values,
        }
    }

    /// Create an unnamed series with positional integer labels.
    pub fn unnamed(values: Vec<Value>) -> Self {
        let labels = (0..values.len()).map(Value::from).collect();
        Self {
            name: None,
            labels,
            values,
        }
    }

    /// Create a series with explicit row labels.
    pub fn with_labels(
        name: Option<String>,
        labels: Vec<Value>,
        values: Vec<Value>,
    ) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(FrameError::DimensionMismatch {
                expected: labels.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            name,
            labels,
            values,
        })
    }

    /// Series name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Row labels in order.
    pub fn labels(&self) -> &[Value] {
        &self.labels
    }

    /// Values in order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    /// Number of non-missing entries (of any type).
    pub fn count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_missing()).count()
    }

    /// Number of missing entries.
    pub fn n_missing(&self) -> usize {
        self.values.len() - self.count()
    }

    /// Numeric entries (integers and finite floats) in order.
    fn numeric(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_f64).collect()
    }

    /// Arithmetic mean of the numeric entries. NaN if there are none.
    pub fn mean(&self) -> f64 {
        mean(&self.numeric())
    }

    /// Sample standard deviation (n − 1 denominator) of the numeric
    /// entries. NaN for fewer than two points.
    pub fn std(&self) -> f64 {
        let xs = self.numeric();
        let n = xs.len();
        if n < 2 {
            return f64::NAN;
        }
        let m = mean(&xs);
        let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
        (ss / (n - 1) as f64).sqrt()
    }

    /// Minimum of the numeric entries. NaN if there are none.
    pub fn min(&self) -> f64 {
        self.numeric()
            .into_iter()
            .fold(f64::NAN, |acc, x| if x < acc || acc.is_nan() { x } else { acc })
    }

    /// Maximum of the numeric entries. NaN if there are none.
    pub fn max(&self) -> f64 {
        self.numeric()
            .into_iter()
            .fold(f64::NAN, |acc, x| if x > acc || acc.is_nan() { x } else { acc })
    }

    /// Quantile of the numeric entries with linear interpolation between
    /// order statistics, `q` in `[0, 1]`. NaN if there are none.
    pub fn quantile(&self, q: f64) -> f64 {
        let mut xs = self.numeric();
        if xs.is_empty() {
            return f64::NAN;
        }
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let pos = q.clamp(0.0, 1.0) * (xs.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        xs[lo] + (xs[hi] - xs[lo]) * (pos - lo as f64)
    }

    /// Adjusted Fisher-Pearson skewness (G1).
    ///
    /// NaN for fewer than three numeric entries, 0.0 for zero variance.
    pub fn skewness(&self) -> f64 {
        let xs = self.numeric();
        let n = xs.len();
        if n < 3 {
            return f64::NAN;
        }
        let m2 = central_moment(&xs, 2);
        if m2 == 0.0 {
            return 0.0;
        }
        let g1 = central_moment(&xs, 3) / m2.powf(1.5);
        g1 * ((n * (n - 1)) as f64).sqrt() / (n - 2) as f64
    }

    /// Adjusted excess kurtosis (G2).
    ///
    /// NaN for fewer than four numeric entries, 0.0 for zero variance.
    pub fn kurtosis(&self) -> f64 {
        let xs = self.numeric();
        let n = xs.len();
        if n < 4 {
            return f64::NAN;
        }
        let m2 = central_moment(&xs, 2);
        if m2 == 0.0 {
            return 0.0;
        }
        let g2 = central_moment(&xs, 4) / (m2 * m2) - 3.0;
        ((n + 1) as f64 * g2 + 6.0) * (n - 1) as f64 / ((n - 2) * (n - 3)) as f64
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Biased central moment of order `k` (denominator n).
fn central_moment(xs: &[f64], k: i32) -> f64 {
    let m = mean(xs);
    xs.iter().map(|x| (x - m).powi(k)).sum::<f64>() / xs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn numeric_series() -> Series {
        Series::new("x", vec![1.into(), 2.into(), 3.into(), 4.into()])
    }

    #[test]
    fn test_constructors() {
        let s = numeric_series();
        assert_eq!(s.name(), Some("x"));
        assert_eq!(s.len(), 4);
        assert_eq!(s.labels(), &[0.into(), 1.into(), 2.into(), 3.into()]);

        let err = Series::with_labels(None, vec![0.into()], vec![1.into(), 2.into()]);
        assert!(matches!(
            err,
            Err(FrameError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_counts_skip_missing() {
        let s = Series::new(
            "mixed",
            vec![1.into(), Value::Missing, "a".into(), f64::NAN.into()],
        );
        assert_eq!(s.count(), 2);
        assert_eq!(s.n_missing(), 2);
    }

    #[test]
    fn test_mean_std() {
        let s = numeric_series();
        assert_relative_eq!(s.mean(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(s.std(), (5.0f64 / 3.0).sqrt(), epsilon = 1e-12);

        let single = Series::new("one", vec![5.into()]);
        assert_relative_eq!(single.mean(), 5.0, epsilon = 1e-12);
        assert!(single.std().is_nan());

        let empty = Series::new("none", vec![]);
        assert!(empty.mean().is_nan());
    }

    #[test]
    fn test_min_max_quantile() {
        let s = numeric_series();
        assert_relative_eq!(s.min(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.max(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(s.quantile(0.25), 1.75, epsilon = 1e-12);
        assert_relative_eq!(s.quantile(0.5), 2.5, epsilon = 1e-12);
        assert_relative_eq!(s.quantile(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.quantile(1.0), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_kurtosis() {
        let s = numeric_series();
        assert_relative_eq!(s.skewness(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.kurtosis(), -1.2, epsilon = 1e-12);

        let constant = Series::new("c", vec![1.into(); 6]);
        assert_relative_eq!(constant.skewness(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(constant.kurtosis(), 0.0, epsilon = 1e-12);

        let short = Series::new("s", vec![1.into(), 2.into()]);
        assert!(short.skewness().is_nan());
        assert!(short.kurtosis().is_nan());
    }

    #[test]
    fn test_numeric_ignores_bools_and_strings() {
        let s = Series::new(
            "mixed",
            vec![true.into(), 2.into(), "3".into(), 4.0.into()],
        );
        assert_relative_eq!(s.mean(), 3.0, epsilon = 1e-12);

        let bools = Series::new("b", vec![true.into(), false.into()]);
        assert!(bools.mean().is_nan());
    }
}
