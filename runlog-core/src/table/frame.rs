use crate::table::{SchemaError, Value};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::HashSet;

/// An ordered table of log rows.
///
/// Every row holds exactly one cell per column, in column order. Cells a run
/// did not record are [`Value::Missing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates an empty table with the given column order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateName` if a column name appears twice.
    pub fn new<I, S>(columns: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::duplicate_name(column.as_str()));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Creates a table and fills it with `rows`.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns)?;
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn column_index(&self, name: &str) -> Result<usize, SchemaError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SchemaError::missing_column(name))
    }

    /// Iterates the cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value> + '_, SchemaError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), SchemaError> {
        if row.len() != self.columns.len() {
            return Err(SchemaError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Stacks tables on top of each other.
    ///
    /// The result carries the union of all columns in first-seen order; cells
    /// for columns a table does not have are missing.
    pub fn concat<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Table {
        let tables: Vec<&Table> = tables.into_iter().collect();
        let columns = union_columns(tables.iter().copied());

        let mut out = Table {
            columns,
            rows: Vec::with_capacity(tables.iter().map(|t| t.len()).sum()),
        };

        for table in tables {
            let positions = out.positions_of(table);
            for row in &table.rows {
                out.rows.push(scatter(row, &positions, out.columns.len()));
            }
        }

        out
    }

    /// Maps every column of `other` to its position in `self`.
    ///
    /// Callers guarantee that `self` carries a superset of the columns.
    pub(crate) fn positions_of(&self, other: &Table) -> Vec<usize> {
        other
            .columns
            .iter()
            .map(|c| {
                self.columns
                    .iter()
                    .position(|own| own == c)
                    .unwrap_or_default()
            })
            .collect()
    }

    pub(crate) fn push_unchecked(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

/// Collects the column names of several tables in first-seen order.
pub(crate) fn union_columns<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for table in tables {
        for column in &table.columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }
    columns
}

/// Spreads the cells of `row` over a wider row at `positions`.
pub(crate) fn scatter(row: &[Value], positions: &[usize], width: usize) -> Vec<Value> {
    let mut out = vec![Value::Missing; width];
    for (cell, &pos) in row.iter().zip(positions) {
        out[pos] = cell.clone();
    }
    out
}

struct Record<'a> {
    columns: &'a [String],
    row: &'a [Value],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.row) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

// A list of records, each keyed in column order.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&Record {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}
