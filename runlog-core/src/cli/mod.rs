//! Command line front end.
//!
//! The commands are stages of one pipeline:
//!
//! ```text
//! files / directories
//!   │ read_log            (dump, convert stop here)
//!   ▼
//! Table ──► normalize_tables   (normalize stops here)
//!   │
//!   ▼
//! metric_statistics / summarize ──► text | json | yaml
//! ```

pub mod convert;
pub mod dump;
mod input;
pub mod normalize;
mod output;
pub mod summarize;

pub use input::{InputArgs, PipelineArgs};
pub use output::OutputFormat;
