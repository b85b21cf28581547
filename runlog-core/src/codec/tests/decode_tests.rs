use super::test_helpers::{cbor_log, entry, int, names, text};
use crate::codec::{DecodeError, Format, LogError, decode_slice, read_log};
use crate::error::Error;
use crate::table::{SchemaError, Value};
use ciborium::Value as Cbor;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use tempfile::tempdir;

#[test]
fn decodes_entries_into_named_columns() {
    // Arrange
    let bytes = cbor_log(
        names(&["iter", "val"]),
        vec![
            entry(&[(0, int(1)), (1, int(10))]),
            entry(&[(0, int(2)), (1, int(20))]),
            entry(&[(0, int(1)), (1, int(99))]),
            entry(&[(0, int(2)), (1, int(5))]),
        ],
    );

    // Act
    let table = decode_slice(&bytes, Format::Cbor).unwrap();

    // Assert
    assert_eq!(table.columns(), ["iter", "val"]);
    assert_eq!(
        table.rows(),
        [
            vec![Value::Int(1), Value::Int(10)],
            vec![Value::Int(2), Value::Int(20)],
            vec![Value::Int(1), Value::Int(99)],
            vec![Value::Int(2), Value::Int(5)],
        ]
    );
}

#[test]
fn omitted_keys_become_missing_cells() {
    // Arrange
    let bytes = cbor_log(
        names(&["evaluations", "best_fx", "diversity"]),
        vec![
            entry(&[(0, int(1)), (1, Cbor::Float(0.5))]),
            entry(&[(2, Cbor::Float(0.1)), (0, int(2))]),
        ],
    );

    // Act
    let table = decode_slice(&bytes, Format::Cbor).unwrap();

    // Assert
    assert_eq!(
        table.rows(),
        [
            vec![Value::Int(1), Value::Float(0.5), Value::Missing],
            vec![Value::Int(2), Value::Missing, Value::Float(0.1)],
        ]
    );
}

#[test]
fn columns_keep_header_order_even_when_unused() {
    let bytes = cbor_log(names(&["a", "b", "c"]), vec![entry(&[(2, text("x"))])]);

    let table = decode_slice(&bytes, Format::Cbor).unwrap();

    assert_eq!(table.columns(), ["a", "b", "c"]);
    assert_eq!(
        table.rows(),
        [vec![Value::Missing, Value::Missing, Value::from("x")]]
    );
}

#[test]
fn out_of_range_key_is_a_schema_error() {
    // Arrange
    let bytes = cbor_log(
        names(&["iter", "val"]),
        vec![entry(&[(0, int(1))]), entry(&[(0, int(2)), (5, int(3))])],
    );

    // Act
    let result = decode_slice(&bytes, Format::Cbor);

    // Assert
    assert!(matches!(
        result,
        Err(LogError::Schema(SchemaError::UnknownKey { entry: 1, key: 5 }))
    ));
}

#[test]
fn duplicate_names_are_a_schema_error() {
    let bytes = cbor_log(names(&["iter", "iter"]), vec![]);

    let result = decode_slice(&bytes, Format::Cbor);

    assert!(matches!(
        result,
        Err(LogError::Schema(SchemaError::DuplicateName { .. }))
    ));
}

#[test]
fn truncated_input_is_a_decode_error() {
    // Arrange
    let bytes = cbor_log(
        names(&["iter", "val"]),
        vec![entry(&[(0, int(1)), (1, int(10))])],
    );
    let truncated = &bytes[..bytes.len() - 3];

    // Act
    let result = decode_slice(truncated, Format::Cbor);

    // Assert
    assert!(matches!(
        result,
        Err(LogError::Decode(DecodeError::Cbor { .. }))
    ));
}

#[test]
fn concatenated_logs_are_a_decode_error() {
    // Arrange
    let log = cbor_log(names(&["iter"]), vec![entry(&[(0, int(1))])]);
    let mut bytes = log.clone();
    bytes.extend_from_slice(&log);

    // Act
    let result = decode_slice(&bytes, Format::Cbor);

    // Assert
    assert!(matches!(
        result,
        Err(LogError::Decode(DecodeError::TrailingData))
    ));
}

#[test]
fn trailing_bytes_after_messagepack_are_a_decode_error() {
    #[derive(serde::Serialize)]
    struct ListLog {
        names: Vec<&'static str>,
        entries: Vec<Vec<(u64, i64)>>,
    }
    let log = ListLog {
        names: vec!["iter"],
        entries: vec![vec![(0, 1)]],
    };
    let mut bytes = rmp_serde::to_vec(&log).unwrap();
    bytes.push(0xc0);

    let result = decode_slice(&bytes, Format::MessagePack);

    assert!(matches!(
        result,
        Err(LogError::Decode(DecodeError::TrailingData))
    ));
}

#[test]
fn empty_input_is_a_decode_error() {
    assert!(matches!(
        decode_slice(&[], Format::Cbor),
        Err(LogError::Decode(DecodeError::Cbor { .. }))
    ));
    assert!(matches!(
        decode_slice(&[], Format::MessagePack),
        Err(LogError::Decode(DecodeError::MessagePack { .. }))
    ));
}

#[test]
fn missing_entries_field_is_a_decode_error() {
    let log = Cbor::Map(vec![(text("names"), names(&["iter"]))]);
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(&log, &mut bytes).unwrap();

    let result = decode_slice(&bytes, Format::Cbor);

    assert!(matches!(result, Err(LogError::Decode(_))));
}

#[test]
fn nested_map_values_are_a_decode_error() {
    let nested = Cbor::Map(vec![(text("x"), int(1))]);
    let bytes = cbor_log(names(&["solution"]), vec![entry(&[(0, nested)])]);

    let result = decode_slice(&bytes, Format::Cbor);

    assert!(matches!(result, Err(LogError::Decode(_))));
}

#[test]
fn accepts_entries_written_as_key_maps() {
    // Arrange
    let entries = vec![
        Cbor::Map(vec![(int(0), int(1)), (int(1), Cbor::Float(3.5))]),
        Cbor::Map(vec![(int(1), Cbor::Float(2.5))]),
    ];
    let bytes = cbor_log(names(&["iterations", "best_fx"]), entries);

    // Act
    let table = decode_slice(&bytes, Format::Cbor).unwrap();

    // Assert
    assert_eq!(
        table.rows(),
        [
            vec![Value::Int(1), Value::Float(3.5)],
            vec![Value::Missing, Value::Float(2.5)],
        ]
    );
}

#[test]
fn keeps_list_values() {
    let solution = Cbor::Array(vec![Cbor::Float(0.5), Cbor::Float(-1.0)]);
    let bytes = cbor_log(names(&["best_x"]), vec![entry(&[(0, solution)])]);

    let table = decode_slice(&bytes, Format::Cbor).unwrap();

    assert_eq!(
        table.rows(),
        [vec![Value::List(vec![Value::Float(0.5), Value::Float(-1.0)])]]
    );
}

#[test]
fn repeated_key_in_one_entry_keeps_last_value() {
    let bytes = cbor_log(names(&["val"]), vec![entry(&[(0, int(1)), (0, int(2))])]);

    let table = decode_slice(&bytes, Format::Cbor).unwrap();

    assert_eq!(table.rows(), [vec![Value::Int(2)]]);
}

#[test]
fn decodes_messagepack_with_keyed_names_and_pair_entries() {
    // Arrange
    #[derive(serde::Serialize)]
    struct KeyedLog {
        names: BTreeMap<u64, &'static str>,
        entries: Vec<Vec<(u64, f64)>>,
    }
    let log = KeyedLog {
        names: BTreeMap::from([(1, "evaluations"), (2, "best_fx")]),
        entries: vec![vec![(1, 10.0), (2, 0.75)], vec![(2, 0.5)]],
    };
    let bytes = rmp_serde::to_vec(&log).unwrap();

    // Act
    let table = decode_slice(&bytes, Format::MessagePack).unwrap();

    // Assert
    assert_eq!(table.columns(), ["evaluations", "best_fx"]);
    assert_eq!(
        table.rows(),
        [
            vec![Value::Float(10.0), Value::Float(0.75)],
            vec![Value::Missing, Value::Float(0.5)],
        ]
    );
}

#[test]
fn keyed_names_reject_unknown_keys() {
    #[derive(serde::Serialize)]
    struct KeyedLog {
        names: BTreeMap<u64, &'static str>,
        entries: Vec<Vec<(u64, i64)>>,
    }
    let log = KeyedLog {
        names: BTreeMap::from([(1, "iterations")]),
        entries: vec![vec![(0, 1)]],
    };
    let bytes = rmp_serde::to_vec(&log).unwrap();

    let result = decode_slice(&bytes, Format::MessagePack);

    assert!(matches!(
        result,
        Err(LogError::Schema(SchemaError::UnknownKey { entry: 0, key: 0 }))
    ));
}

#[test]
fn read_log_picks_format_from_extension() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("sphere_0.cbor");
    fs::write(
        &path,
        cbor_log(names(&["iter"]), vec![entry(&[(0, int(7))])]),
    )
    .unwrap();

    // Act
    let table = read_log(&path).unwrap();

    // Assert
    assert_eq!(table.rows(), [vec![Value::Int(7)]]);
}

#[test]
fn read_log_errors_carry_the_path() {
    // Arrange
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.log");
    fs::write(&broken, [0xff, 0x00]).unwrap();
    let absent = dir.path().join("absent.log");

    // Act
    let decode_err = read_log(&broken).unwrap_err();
    let read_err = read_log(&absent).unwrap_err();

    // Assert
    assert!(matches!(&decode_err, Error::Log { path, .. } if path == &broken));
    assert!(matches!(&read_err, Error::ReadFile { path, .. } if path == &absent));
    assert!(decode_err.to_string().contains("broken.log"));
}
