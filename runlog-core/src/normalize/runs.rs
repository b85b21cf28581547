use crate::table::Value;

/// A contiguous slice of rows belonging to one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run<'a> {
    pub rows: &'a [Vec<Value>],
    /// Whether the run ends on the final counter value.
    pub complete: bool,
}

/// The largest counter value in `rows`, which closes every complete run.
///
/// Missing and `NaN` counters are ignored.
pub fn closing_value(rows: &[Vec<Value>], key: usize) -> Option<&Value> {
    rows.iter()
        .map(|row| &row[key])
        .filter(|value| !value.is_absent())
        .max()
}

/// Splits rows into runs on the counter column at `key`.
///
/// A run closes on (and includes) the first row whose counter equals `max`.
/// Rows left over after the last closing row form one trailing, incomplete
/// run.
pub fn split_runs<'a>(rows: &'a [Vec<Value>], key: usize, max: Option<&Value>) -> Vec<Run<'a>> {
    let mut runs = Vec::new();
    let mut start = 0;

    if let Some(max) = max {
        for (i, row) in rows.iter().enumerate() {
            if &row[key] == max {
                runs.push(Run {
                    rows: &rows[start..=i],
                    complete: true,
                });
                start = i + 1;
            }
        }
    }

    if start < rows.len() {
        runs.push(Run {
            rows: &rows[start..],
            complete: false,
        });
    }

    runs
}
