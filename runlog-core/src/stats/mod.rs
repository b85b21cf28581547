//! Grouped summary statistics over normalized run tables.

mod descriptive;
mod metric;
mod summary;

pub use descriptive::Descriptive;
pub use metric::Metric;
pub use summary::{SummaryRow, SummaryTable};

use crate::table::{SchemaError, Table, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Statistics of the best objective value found, grouped by `column`
/// (usually iterations or evaluations).
pub fn basic_statistics(table: &Table, column: &str) -> Result<SummaryTable, SchemaError> {
    metric_statistics(table, column, Metric::BestFx)
}

/// Statistics of the population diversity, grouped by `column`.
pub fn diversity_statistics(table: &Table, column: &str) -> Result<SummaryTable, SchemaError> {
    metric_statistics(table, column, Metric::Diversity)
}

pub fn metric_statistics(
    table: &Table,
    column: &str,
    metric: Metric,
) -> Result<SummaryTable, SchemaError> {
    aggregate(table, column, metric.column(), Some(metric.suffix()))
}

/// Statistics of an arbitrary numeric `value` column, grouped by `group`.
pub fn summarize(table: &Table, group: &str, value: &str) -> Result<SummaryTable, SchemaError> {
    aggregate(table, group, value, None)
}

/// Groups rows by the `group` column and reduces each group's `value` cells.
///
/// Rows with a missing grouping value are dropped. Missing or `NaN` values
/// are skipped, but their group still gets a summary row.
///
/// # Errors
///
/// - `SchemaError::MissingColumn` if either column is absent
/// - `SchemaError::NonNumeric` if a value cell holds text, a flag or a list
fn aggregate(
    table: &Table,
    group: &str,
    value: &str,
    suffix: Option<&str>,
) -> Result<SummaryTable, SchemaError> {
    let key = table.column_index(group)?;
    let sample = table.column_index(value)?;

    let mut groups: BTreeMap<&Value, Vec<f64>> = BTreeMap::new();
    let mut ungrouped = 0usize;

    for (i, row) in table.rows().iter().enumerate() {
        if row[key].is_missing() {
            ungrouped += 1;
            continue;
        }

        let samples = groups.entry(&row[key]).or_default();
        match &row[sample] {
            Value::Missing => {}
            cell if cell.is_numeric() => samples.extend(cell.as_f64()),
            cell => {
                return Err(SchemaError::NonNumeric {
                    column: value.to_string(),
                    row: i,
                    value: cell.to_string(),
                });
            }
        }
    }

    debug!(
        group,
        value,
        groups = groups.len(),
        ungrouped,
        "Aggregated summary statistics"
    );

    let rows = groups
        .into_iter()
        .map(|(key, mut samples)| SummaryRow {
            key: key.clone(),
            stats: Descriptive::from_samples(&mut samples),
        })
        .collect();

    Ok(SummaryTable::new(group, suffix, rows))
}
