use crate::codec::Format;
use crate::conf::{ConfigError, PipelineConfig};
use crate::stats::Metric;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_path_means_defaults() {
    let config = PipelineConfig::load(None).unwrap();

    assert_eq!(config, PipelineConfig::default());
    assert_eq!(config.counter, "iterations");
    assert_eq!(config.metric, Metric::BestFx);
    assert!(config.fill);
}

#[test]
fn file_values_override_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("runlog.toml");
    fs::write(
        &path,
        r#"
counter = "evaluations"
metric = "diversity"
format = "msgpack"
fill = false
"#,
    )
    .unwrap();

    // Act
    let config = PipelineConfig::load(Some(path.as_path())).unwrap();

    // Assert
    assert_eq!(
        config,
        PipelineConfig {
            counter: "evaluations".to_string(),
            metric: Metric::Diversity,
            value: None,
            extension: "cbor".to_string(),
            fill: false,
            format: Some(Format::MessagePack),
        }
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("runlog.toml");
    fs::write(&path, "counterr = \"evaluations\"\n").unwrap();

    let result = PipelineConfig::load(Some(path.as_path()));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn bad_format_name_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("runlog.toml");
    fs::write(&path, "format = \"json\"\n").unwrap();

    let result = PipelineConfig::load(Some(path.as_path()));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn unreadable_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let result = PipelineConfig::load(Some(dir.path().join("absent.toml").as_path()));

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}
