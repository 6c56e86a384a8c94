//! Table combination: label-aligned joins and name-aligned unions.

mod input;
mod join;
mod union;

pub use input::{flatten_inputs, TableInput};
pub use join::join_frames_by_index;
pub use union::union_frames_by_name;
