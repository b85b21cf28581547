use crate::table::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed CBOR log: {source}")]
    Cbor {
        #[source]
        source: ciborium::de::Error<std::io::Error>,
    },

    #[error("malformed MessagePack log: {source}")]
    MessagePack {
        #[source]
        source: rmp_serde::decode::Error,
    },

    #[error("unexpected data after the end of the log")]
    TrailingData,

    #[error("failed to read log stream: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to write CBOR log: {source}")]
    Cbor {
        #[source]
        source: ciborium::ser::Error<std::io::Error>,
    },

    #[error("failed to write MessagePack log: {source}")]
    MessagePack {
        #[source]
        source: rmp_serde::encode::Error,
    },
}

/// Everything that can go wrong turning bytes into a [`Table`](crate::table::Table).
#[derive(Debug, Error)]
pub enum LogError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
