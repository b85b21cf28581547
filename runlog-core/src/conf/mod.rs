//! Pipeline settings.
//!
//! Settings come from an optional TOML file; command line flags override
//! whatever the file sets.
//!
//! ```toml
//! counter = "evaluations"
//! metric = "diversity"
//! extension = "cbor"
//! fill = true
//! ```

mod error;
#[cfg(test)]
mod tests;

pub use error::ConfigError;

use crate::codec::Format;
use crate::stats::Metric;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Counter column that runs are split, densified and grouped on.
    pub counter: String,
    pub metric: Metric,
    /// Summarize this column instead of the metric's own column.
    pub value: Option<String>,
    /// Extension of the log files picked up from directories.
    pub extension: String,
    /// Forward-fill runs onto the shared counter grid before aggregating.
    pub fill: bool,
    /// Force a container format instead of guessing from the extension.
    #[serde(with = "format_name")]
    pub format: Option<Format>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            counter: "iterations".to_string(),
            metric: Metric::default(),
            value: None,
            extension: "cbor".to_string(),
            fill: true,
            format: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
    }

    /// Loads `path` if given, falling back to the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}

mod format_name {
    use crate::codec::Format;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(format: &Option<Format>, s: S) -> Result<S::Ok, S::Error> {
        match format {
            Some(format) => s.serialize_str(format.extension()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Format>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|name| name.parse().map_err(de::Error::custom))
            .transpose()
    }
}
