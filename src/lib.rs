//! Statistical and tabular-data helpers for labeled in-memory tables.
//!
//! This library provides small, pure helper functions over labeled tables
//! ([`data::DataFrame`]) and labeled columns ([`data::Series`]).
//!
//! # Overview
//!
//! The library is organized into composable modules:
//!
//! - **data**: Core data structures (Value, Series, DataFrame)
//! - **stats**: Frequency, entropy, mode, and per-column profiling
//! - **combine**: Table combination (join by row label, union by column name)
//!
//! Every operation is side-effect-free: inputs are never mutated and
//! results are freshly constructed, so calls are idempotent and safe to
//! issue concurrently.
//!
//! # Example
//!
//! ```
//! use frametools::prelude::*;
//!
//! let animals = Series::new(
//!     "animal",
//!     vec!["cat".into(), "dog".into(), "cat".into(), "owl".into()],
//! );
//!
//! // Frequency table: one row per distinct value, most frequent first
//! let table = freq(animals.values(), true);
//! assert_eq!(table.labels()[0], Value::from("cat"));
//! assert_eq!(table.cell(0, 0), Some(&Value::Int(2)));
//!
//! // Shannon entropy of the value distribution, in bits
//! let bits = entropy(animals.values(), true);
//! assert!(bits > 0.0);
//!
//! // Combine labeled tables by row label
//! let left = DataFrame::new(
//!     vec![0.into(), 1.into()],
//!     vec![("a".to_string(), vec![1.into(), 2.into()])],
//! )?;
//! let right = Series::new("b", vec![3.into(), 4.into()]);
//! let joined = join_frames_by_index([left.into(), right.into()])?;
//! assert_eq!(joined.column_names(), vec!["a", "b"]);
//! # Ok::<(), FrameError>(())
//! ```

pub mod combine;
pub mod data;
pub mod error;
pub mod stats;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::combine::{
        flatten_inputs, join_frames_by_index, union_frames_by_name, TableInput,
    };
    pub use crate::data::{infer_dtype, Column, DataFrame, Series, Value, PLACEHOLDER_NAME};
    pub use crate::error::{FrameError, Result};
    pub use crate::stats::{efficiency, entropy, freq, mode, profile, value_counts};
}
