use crate::table::{SchemaError, Table, Value};
use std::collections::BTreeSet;

/// The sorted set of every counter value observed across the input.
///
/// Each normalized run carries exactly one row per grid value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceGrid {
    values: Vec<Value>,
}

impl ReferenceGrid {
    /// Collects the distinct values of `counter` over `tables`, skipping
    /// missing and `NaN` cells.
    pub fn collect<'a>(
        tables: impl IntoIterator<Item = &'a Table>,
        counter: &str,
    ) -> Result<Self, SchemaError> {
        let mut values = BTreeSet::new();
        for table in tables {
            for value in table.column(counter)? {
                if !value.is_absent() {
                    values.insert(value.clone());
                }
            }
        }

        Ok(Self {
            values: values.into_iter().collect(),
        })
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn position(&self, value: &Value) -> Option<usize> {
        self.values.binary_search(value).ok()
    }
}
