use crate::codec::{EncodeError, Format};
use crate::error::Error;
use crate::table::{Table, Value};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct CompressedLog<'a> {
    names: &'a [String],
    entries: Vec<Vec<CompressedEntry<'a>>>,
}

#[derive(Serialize)]
struct CompressedEntry<'a> {
    key: usize,
    value: &'a Value,
}

impl<'a> From<&'a Table> for CompressedLog<'a> {
    fn from(table: &'a Table) -> Self {
        let entries = table
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, value)| !value.is_missing())
                    .map(|(key, value)| CompressedEntry { key, value })
                    .collect()
            })
            .collect();

        Self {
            names: table.columns(),
            entries,
        }
    }
}

/// Writes `table` in the compressed log layout.
///
/// Missing cells are left out of their entry.
pub fn encode_log(table: &Table, mut writer: impl Write, format: Format) -> Result<(), EncodeError> {
    let log = CompressedLog::from(table);
    match format {
        Format::Cbor => {
            ciborium::ser::into_writer(&log, writer).map_err(|source| EncodeError::Cbor { source })
        }
        Format::MessagePack => rmp_serde::encode::write_named(&mut writer, &log)
            .map_err(|source| EncodeError::MessagePack { source }),
    }
}

pub fn write_log(path: impl AsRef<Path>, table: &Table, format: Format) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::write_file(path, e))?;
    let mut writer = BufWriter::new(file);

    encode_log(table, &mut writer, format).map_err(|e| Error::encode(path, e))?;
    writer.flush().map_err(|e| Error::write_file(path, e))
}
