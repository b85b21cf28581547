//! Writers for the two layouts the optimization framework produces.
//!
//! The library has its own encoder; these stay independent of it so the
//! decoder is checked against bytes it did not write itself.

use runlog_core::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One logged step: field names with their values, in logging order.
pub type Step = Vec<(&'static str, Value)>;

pub fn step<const N: usize>(fields: [(&'static str, Value); N]) -> Step {
    fields.into()
}

#[derive(Serialize)]
struct EventLog<'a> {
    names: Vec<&'static str>,
    entries: Vec<BTreeMap<usize, &'a Value>>,
}

#[derive(Serialize)]
struct TrackingLog<'a> {
    names: BTreeMap<usize, &'static str>,
    entries: Vec<Vec<TrackingEntry<'a>>>,
}

#[derive(Serialize)]
struct TrackingEntry<'a> {
    key: usize,
    value: &'a Value,
}

/// Writes CBOR with a name list and one `key -> value` map per step.
pub fn write_event_log(path: &Path, steps: &[Step]) {
    let mut log = EventLog {
        names: Vec::new(),
        entries: Vec::with_capacity(steps.len()),
    };

    for step in steps {
        let mut entry = BTreeMap::new();
        for (name, value) in step {
            let key = match log.names.iter().position(|n| n == name) {
                Some(key) => key,
                None => {
                    log.names.push(*name);
                    log.names.len() - 1
                }
            };
            entry.insert(key, value);
        }
        log.entries.push(entry);
    }

    let file = File::create(path).unwrap();
    ciborium::ser::into_writer(&log, BufWriter::new(file)).unwrap();
}

/// Writes compact MessagePack with names keyed from 1 and one list of
/// `[key, value]` pairs per step.
pub fn write_tracking_log(path: &Path, steps: &[Step]) {
    let mut log = TrackingLog {
        names: BTreeMap::new(),
        entries: Vec::with_capacity(steps.len()),
    };
    let mut keys: BTreeMap<&'static str, usize> = BTreeMap::new();

    for step in steps {
        let mut entry = Vec::with_capacity(step.len());
        for (name, value) in step {
            let next = keys.len() + 1;
            let key = *keys.entry(*name).or_insert(next);
            log.names.insert(key, *name);
            entry.push(TrackingEntry { key, value });
        }
        log.entries.push(entry);
    }

    let mut file = BufWriter::new(File::create(path).unwrap());
    rmp_serde::encode::write(&mut file, &log).unwrap();
}
