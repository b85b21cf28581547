use crate::codec::{Format, write_log};
use crate::discover::{discover, read_experiment_dir, read_log_dir};
use crate::error::Error;
use crate::table::{Table, Value};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_run(path: &Path, best_fx: f64) {
    let table = Table::from_rows(
        ["iterations", "best_fx"],
        vec![vec![Value::Int(1), Value::Float(best_fx)]],
    )
    .unwrap();
    write_log(path, &table, Format::Cbor).unwrap();
}

#[test]
fn discover_returns_sorted_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("z.log"), "").unwrap();
    fs::write(root.join("a.log"), "").unwrap();
    fs::write(root.join("m.txt"), "").unwrap();
    fs::create_dir(root.join("dir.log")).unwrap();

    // Act
    let result = discover(root, "*.log").unwrap();

    // Assert
    assert_eq!(result, vec![root.join("a.log"), root.join("z.log")]);
}

#[test]
fn discover_escapes_glob_syntax_in_the_root() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path().join("runs[1]");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.log"), "").unwrap();

    // Act
    let result = discover(&root, "*.log").unwrap();

    // Assert
    assert_eq!(result, vec![root.join("a.log")]);
}

#[test]
fn malformed_pattern_is_a_glob_error() {
    let dir = tempdir().unwrap();

    let result = discover(dir.path(), "***");

    assert!(matches!(result, Err(Error::Glob { .. })));
}

#[test]
fn read_log_dir_keys_tables_by_file_name() {
    // Arrange
    let dir = tempdir().unwrap();
    write_run(&dir.path().join("sphere_0.log"), 1.5);
    write_run(&dir.path().join("sphere_1.log"), 0.5);
    fs::write(dir.path().join("notes.txt"), "not a log").unwrap();

    // Act
    let logs = read_log_dir(dir.path(), ".log").unwrap();

    // Assert
    assert_eq!(
        logs.keys().collect::<Vec<_>>(),
        vec!["sphere_0.log", "sphere_1.log"]
    );
    assert_eq!(logs["sphere_1.log"].rows()[0][1], Value::Float(0.5));
}

#[test]
fn read_log_dir_surfaces_broken_files() {
    let dir = tempdir().unwrap();
    write_run(&dir.path().join("good.log"), 1.0);
    fs::write(dir.path().join("bad.log"), [0x1f]).unwrap();

    let result = read_log_dir(dir.path(), "log");

    assert!(matches!(result, Err(Error::Log { path, .. }) if path.ends_with("bad.log")));
}

#[test]
fn read_experiment_dir_walks_one_level_of_subdirectories() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("pso/nested")).unwrap();
    fs::create_dir(root.join("ga")).unwrap();
    fs::create_dir(root.join("empty")).unwrap();
    write_run(&root.join("pso/run_0.cbor"), 3.0);
    write_run(&root.join("pso/nested/ignored.cbor"), 9.0);
    write_run(&root.join("ga/run_0.cbor"), 2.0);
    write_run(&root.join("ga/run_1.cbor"), 1.0);
    write_run(&root.join("top_level.cbor"), 0.0);

    // Act
    let experiments = read_experiment_dir(root, "cbor").unwrap();

    // Assert
    assert_eq!(
        experiments.keys().collect::<Vec<_>>(),
        vec!["empty", "ga", "pso"]
    );
    assert!(experiments["empty"].is_empty());
    assert_eq!(experiments["ga"].len(), 2);
    assert_eq!(
        experiments["pso"].keys().collect::<Vec<_>>(),
        vec!["run_0.cbor"]
    );
}
