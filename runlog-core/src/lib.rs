//! Decoding, normalization and summary statistics for experiment run logs.

pub mod cli;
pub mod codec;
pub mod conf;
pub mod discover;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod stats;
pub mod table;

pub use codec::{read_log, write_log};
pub use error::Error;
pub use normalize::{normalize, normalize_tables};
pub use stats::{basic_statistics, diversity_statistics, summarize};
pub use table::{Table, Value};
