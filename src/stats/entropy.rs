//! Shannon entropy and normalized efficiency for discrete values.

use crate::data::Value;
use crate::stats::freq::value_counts;

/// Shannon entropy in bits of the empirical distribution of distinct
/// values.
///
/// H = −Σ p(x)·log2(p(x)) over counts/total probabilities. Missing-class
/// entries are excluded when `dropna` is true and otherwise participate as
/// one more distinct value.
///
/// Returns NaN when no values remain after the dropna filter and 0.0 when
/// exactly one distinct value remains. When every value is distinct the
/// distribution is uniform and the entropy is exactly `log2(total)`.
///
/// ```
/// use frametools::prelude::*;
///
/// let values: Vec<Value> = vec!["a".into(), "b".into()];
/// assert_eq!(entropy(&values, true), 1.0);
/// assert!(entropy(&[], true).is_nan());
/// ```
pub fn entropy(values: &[Value], dropna: bool) -> f64 {
    entropy_from_counts(&value_counts(values, dropna))
}

/// Normalized entropy `H / log2(k)` for `k` distinct values, in `[0, 1]`.
///
/// Returns NaN when no values remain after the dropna filter. A single
/// distinct value yields 0.0 (both numerator and denominator vanish, and
/// a constant collection carries no information). All-distinct input
/// yields 1.0.
pub fn efficiency(values: &[Value], dropna: bool) -> f64 {
    efficiency_from_counts(&value_counts(values, dropna))
}

pub(crate) fn entropy_from_counts(counts: &[(Value, u64)]) -> f64 {
    let total: u64 = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return f64::NAN;
    }
    if counts.len() == 1 {
        return 0.0;
    }
    let total_f = total as f64;
    if counts.len() as u64 == total {
        return total_f.log2();
    }
    let weighted: f64 = counts
        .iter()
        .map(|(_, c)| {
            let c = *c as f64;
            c * c.log2()
        })
        .sum();
    total_f.log2() - weighted / total_f
}

pub(crate) fn efficiency_from_counts(counts: &[(Value, u64)]) -> f64 {
    if counts.is_empty() {
        return f64::NAN;
    }
    if counts.len() == 1 {
        return 0.0;
    }
    entropy_from_counts(counts) / (counts.len() as f64).log2()
}
