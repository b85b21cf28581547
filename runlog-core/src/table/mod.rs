//! The in-memory table every stage of the pipeline reads and writes.

mod error;
mod frame;
mod value;

pub use error::*;
pub use frame::Table;
pub(crate) use frame::{scatter, union_columns};
pub use value::Value;
