use crate::codec::raw::RawLog;
use crate::codec::{DecodeError, Format, LogError};
use crate::error::Error;
use crate::table::Table;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

/// Decodes one compressed run log from `reader`.
///
/// The resulting table has exactly the columns listed in the log's `names`,
/// in that order, and one row per entry in decode order.
///
/// # Errors
///
/// - `LogError::Decode` if the stream is malformed, truncated, or continues
///   past the end of the log
/// - `LogError::Schema` if an entry refers to a key with no field name, or
///   the names contain duplicates
pub fn decode_log(mut reader: impl Read, format: Format) -> Result<Table, LogError> {
    let raw: RawLog = match format {
        Format::Cbor => ciborium::de::from_reader(&mut reader)
            .map_err(|source| DecodeError::Cbor { source })?,
        Format::MessagePack => rmp_serde::decode::from_read(&mut reader)
            .map_err(|source| DecodeError::MessagePack { source })?,
    };
    ensure_exhausted(&mut reader)?;

    let table = raw.into_table()?;
    debug!(
        format = %format,
        rows = table.len(),
        columns = table.width(),
        "Decoded run log"
    );
    Ok(table)
}

/// One log per stream: anything after the top-level structure is an error.
fn ensure_exhausted(reader: &mut impl Read) -> Result<(), DecodeError> {
    let mut next = [0u8; 1];
    loop {
        match reader.read(&mut next) {
            Ok(0) => return Ok(()),
            Ok(_) => return Err(DecodeError::TrailingData),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(source) => return Err(DecodeError::Read { source }),
        }
    }
}

pub fn decode_slice(bytes: &[u8], format: Format) -> Result<Table, LogError> {
    decode_log(bytes, format)
}

/// Reads and decodes a log file, picking the format from its extension.
///
/// Files with an unknown extension are read as CBOR.
pub fn read_log(path: impl AsRef<Path>) -> Result<Table, Error> {
    let path = path.as_ref();
    read_log_as(path, Format::from_path(path).unwrap_or_default())
}

pub fn read_log_as(path: impl AsRef<Path>, format: Format) -> Result<Table, Error> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::read_file(path, e))?;
    let table = decode_slice(&bytes, format).map_err(|e| Error::log(path, e))?;

    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.width(),
        "Loaded run log"
    );
    Ok(table)
}
