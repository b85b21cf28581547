//! Reading and writing compressed run logs.

mod decode;
mod encode;
mod error;
mod format;
mod raw;
#[cfg(test)]
mod tests;

pub use decode::{decode_log, decode_slice, read_log, read_log_as};
pub use encode::{encode_log, write_log};
pub use error::*;
pub use format::Format;
