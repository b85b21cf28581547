use crate::codec::{EncodeError, LogError};
use crate::table::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, discovering or writing log files.
///
/// Every file-level failure carries the path it happened on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read log file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode log file {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: LogError,
    },

    #[error("failed to write log file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode log file {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl Error {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn log(path: impl Into<PathBuf>, source: LogError) -> Self {
        Self::Log {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn encode(path: impl Into<PathBuf>, source: EncodeError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }
}
