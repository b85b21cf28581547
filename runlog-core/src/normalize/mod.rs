//! Densifying event-triggered run logs.
//!
//! Runs that log on events (an improvement, a fixed evaluation budget) only
//! write rows at the counter values where something happened. To compare
//! runs point by point, every run is expanded onto the full set of counter
//! values seen anywhere, and the gaps are forward-filled:
//!
//! ```text
//! tables ──► ReferenceGrid ──┐
//!    │                       ▼
//!    └────► split_runs ──► densify ──► forward_fill ──► table
//! ```

mod fill;
mod grid;
mod runs;
#[cfg(test)]
mod tests;

pub use fill::forward_fill;
pub use grid::ReferenceGrid;
pub use runs::{Run, closing_value, split_runs};

use crate::table::{SchemaError, Table, Value, scatter, union_columns};
use tracing::{debug, warn};

/// Normalizes the concatenated runs of one table on `counter`.
///
/// # Errors
///
/// Returns `SchemaError::MissingColumn` if the table has no `counter` column.
pub fn normalize(table: &Table, counter: &str) -> Result<Table, SchemaError> {
    normalize_tables(std::slice::from_ref(table), counter)
}

/// Normalizes several tables (usually one per log file) against one shared
/// grid.
///
/// Runs are split per table on that table's own largest counter value, and
/// the end of a table always closes its last run. The grid is shared, so
/// every run comes out with the same counter values. The output carries the
/// union of all columns in first-seen order.
pub fn normalize_tables(tables: &[Table], counter: &str) -> Result<Table, SchemaError> {
    let grid = ReferenceGrid::collect(tables, counter)?;
    let mut out = Table::new(union_columns(tables))?;
    if tables.is_empty() {
        return Ok(out);
    }

    let layout = Layout {
        key: out.column_index(counter)?,
        width: out.width(),
    };
    debug!(counter, grid = grid.len(), tables = tables.len(), "Normalizing run series");

    let mut run_count = 0usize;
    for table in tables {
        let key = table.column_index(counter)?;
        let positions = out.positions_of(table);
        let closing = closing_value(table.rows(), key);

        for run in split_runs(table.rows(), key, closing) {
            if !run.complete && closing.is_some() {
                warn!(
                    rows = run.rows.len(),
                    "Trailing run never reaches the final counter value"
                );
            }

            let mut rows = densify(&run, key, &positions, &layout, &grid);
            forward_fill(&mut rows);
            for row in rows {
                out.push_unchecked(row);
            }
            run_count += 1;
        }
    }

    debug!(runs = run_count, rows = out.len(), "Normalized run series");
    Ok(out)
}

/// Position of the counter column and row width of the output table.
struct Layout {
    key: usize,
    width: usize,
}

/// Right-joins one run against the grid.
///
/// Every source row lands on its grid position; rows sharing a counter value
/// all stay, in source order. Grid positions no row reached get one
/// placeholder row. Rows without a counter value have no grid position and
/// are dropped.
fn densify(
    run: &Run<'_>,
    key: usize,
    positions: &[usize],
    layout: &Layout,
    grid: &ReferenceGrid,
) -> Vec<Vec<Value>> {
    let mut slots: Vec<Vec<Vec<Value>>> = vec![Vec::new(); grid.len()];
    let mut dropped = 0usize;

    for row in run.rows {
        let Some(slot) = grid.position(&row[key]) else {
            dropped += 1;
            continue;
        };
        slots[slot].push(scatter(row, positions, layout.width));
    }

    if dropped > 0 {
        warn!(rows = dropped, "Dropping rows without a counter value");
    }

    let mut rows = Vec::with_capacity(run.rows.len().max(grid.len()));
    for (value, matched) in grid.values().iter().zip(slots) {
        if matched.is_empty() {
            let mut placeholder = vec![Value::Missing; layout.width];
            placeholder[layout.key] = value.clone();
            rows.push(placeholder);
        } else {
            rows.extend(matched);
        }
    }
    rows
}
