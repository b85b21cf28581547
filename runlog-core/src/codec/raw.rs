//! The on-disk shape of a compressed run log.
//!
//! A log stores every field name once in `names` and refers to it by key from
//! each entry. Writers disagree on the details, so all of these are accepted:
//!
//! - `names` as a list (key = position) or as a map from key to name
//! - an entry as a list of `{key, value}` maps, a list of `[key, value]`
//!   pairs, or a single map from key to value

use crate::table::{SchemaError, Table, Value};
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Deserialize)]
pub(crate) struct RawLog {
    names: RawNames,
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNames {
    Ordered(Vec<String>),
    Keyed(BTreeMap<u64, String>),
}

#[derive(Debug, Deserialize)]
struct RawField {
    key: u64,
    #[serde(default)]
    value: Value,
}

#[derive(Debug)]
struct RawEntry(Vec<(u64, Value)>);

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = RawEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of key/value fields or a map from field key to value")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawEntry, A::Error> {
        let mut fields = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(field) = seq.next_element::<RawField>()? {
            fields.push((field.key, field.value));
        }
        Ok(RawEntry(fields))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawEntry, A::Error> {
        let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<u64, Value>()? {
            fields.push((key, value));
        }
        Ok(RawEntry(fields))
    }
}

impl<'de> de::Deserialize<'de> for RawEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryVisitor)
    }
}

/// Resolves an entry key to a column position.
enum KeyIndex {
    Positional(usize),
    Keyed(HashMap<u64, usize>),
}

impl KeyIndex {
    fn position(&self, key: u64) -> Option<usize> {
        match self {
            Self::Positional(width) => usize::try_from(key).ok().filter(|k| k < width),
            Self::Keyed(keys) => keys.get(&key).copied(),
        }
    }
}

impl RawNames {
    fn into_columns(self) -> (Vec<String>, KeyIndex) {
        match self {
            Self::Ordered(names) => {
                let width = names.len();
                (names, KeyIndex::Positional(width))
            }
            Self::Keyed(names) => {
                let keys = names
                    .keys()
                    .enumerate()
                    .map(|(pos, key)| (*key, pos))
                    .collect();
                (names.into_values().collect(), KeyIndex::Keyed(keys))
            }
        }
    }
}

impl RawLog {
    /// Expands the keyed entries into positional rows.
    ///
    /// A key repeated within one entry keeps its last value.
    pub(crate) fn into_table(self) -> Result<Table, SchemaError> {
        let (columns, keys) = self.names.into_columns();
        let mut table = Table::new(columns)?;
        let width = table.width();

        for (entry, RawEntry(fields)) in self.entries.into_iter().enumerate() {
            let mut row = vec![Value::Missing; width];
            for (key, value) in fields {
                let pos = keys
                    .position(key)
                    .ok_or(SchemaError::UnknownKey { entry, key })?;
                row[pos] = value;
            }
            table.push_unchecked(row);
        }

        Ok(table)
    }
}
