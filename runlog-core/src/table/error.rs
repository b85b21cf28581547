use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("duplicate field name '{name}'")]
    DuplicateName { name: String },

    #[error("entry {entry} references undefined field key {key}")]
    UnknownKey { entry: usize, key: u64 },

    #[error("column '{column}' not found")]
    MissingColumn { column: String },

    #[error("row has {found} cells but the table has {expected} columns")]
    RowWidth { expected: usize, found: usize },

    #[error("column '{column}' holds non-numeric value '{value}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

impl SchemaError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}
