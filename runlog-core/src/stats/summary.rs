use crate::stats::Descriptive;
use crate::table::{SchemaError, Table, Value};
use serde::ser::{Error as _, Serialize, Serializer};

const STATISTICS: [&str; 5] = ["mean", "std", "min", "max", "median"];

/// One summary row: the grouping value and the statistics of its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub key: Value,
    pub stats: Descriptive,
}

/// Per-group statistics, sorted ascending by the grouping value.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    group: String,
    labels: [String; 5],
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub(crate) fn new(group: &str, suffix: Option<&str>, rows: Vec<SummaryRow>) -> Self {
        let labels = STATISTICS.map(|stat| match suffix {
            Some(suffix) => format!("{stat}_{suffix}"),
            None => stat.to_string(),
        });

        Self {
            group: group.to_string(),
            labels,
            rows,
        }
    }

    pub fn group_column(&self) -> &str {
        &self.group
    }

    /// Column labels of the five statistics, in `mean, std, min, max, median`
    /// order.
    pub fn labels(&self) -> &[String; 5] {
        &self.labels
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &Value) -> Option<&Descriptive> {
        self.rows
            .binary_search_by(|row| row.key.cmp(key))
            .ok()
            .map(|i| &self.rows[i].stats)
    }

    /// Flattens the summary into a table keyed by the grouping column.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateName` if the grouping column shares a
    /// name with one of the statistic labels.
    pub fn to_table(&self) -> Result<Table, SchemaError> {
        let columns = std::iter::once(self.group.clone()).chain(self.labels.iter().cloned());
        let rows = self
            .rows
            .iter()
            .map(|row| {
                std::iter::once(row.key.clone())
                    .chain(row.stats.as_array().map(Value::Float))
                    .collect()
            })
            .collect();

        Table::from_rows(columns, rows)
    }
}

impl Serialize for SummaryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_table()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
