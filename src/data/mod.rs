//! Data structures for labeled in-memory tables.

mod frame;
mod series;
mod value;

pub use frame::{Column, DataFrame, PLACEHOLDER_NAME};
pub use series::Series;
pub use value::{infer_dtype, Value};
