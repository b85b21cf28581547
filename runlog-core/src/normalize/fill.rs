use crate::table::Value;

/// Fills missing cells from the nearest earlier row of the same column.
///
/// The last-seen tracker starts empty, so gaps before a column's first value
/// stay missing. Call once per run.
pub fn forward_fill(rows: &mut [Vec<Value>]) {
    let Some(width) = rows.first().map(Vec::len) else {
        return;
    };

    let mut last_seen: Vec<Option<Value>> = vec![None; width];

    for row in rows.iter_mut() {
        for (cell, seen) in row.iter_mut().zip(last_seen.iter_mut()) {
            if cell.is_missing() {
                if let Some(value) = seen {
                    *cell = value.clone();
                }
            } else {
                *seen = Some(cell.clone());
            }
        }
    }
}
