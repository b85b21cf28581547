use crate::table::{Table, Value};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

pub(crate) fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub(crate) fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}

/// Prints `value` as JSON or YAML, or `table` as aligned text.
pub(crate) fn emit<T: Serialize>(value: &T, table: &Table, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => dump_json(value),
        OutputFormat::Yaml => dump_yaml(value),
        OutputFormat::Text => {
            print!("{}", render_table(table, io::stdout().is_terminal()));
            Ok(())
        }
    }
}

pub(crate) fn render_cell(value: &Value) -> String {
    match value {
        Value::Missing => "-".to_string(),
        Value::Float(v) if v.is_nan() => "NaN".to_string(),
        Value::Float(v) => format!("{v:.6}"),
        other => other.to_string(),
    }
}

/// Renders a table with right-aligned, space-separated columns.
pub(crate) fn render_table(table: &Table, color: bool) -> String {
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(render_cell).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();

    let header = join_padded(table.columns().iter().map(String::as_str), &widths);
    if color {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for row in &cells {
        out.push_str(&join_padded(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }

    out
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_aligned_plain_text() {
        // Arrange
        let table = Table::from_rows(
            ["iterations", "mean_opt", "std_opt"],
            vec![
                vec![Value::Int(1), Value::Float(2.5), Value::Float(f64::NAN)],
                vec![Value::Int(100), Value::Float(0.125), Value::Missing],
            ],
        )
        .unwrap();

        // Act
        let text = render_table(&table, false);

        // Assert
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "iterations  mean_opt  std_opt",
                "         1  2.500000      NaN",
                "       100  0.125000        -",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn parses_output_formats() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
