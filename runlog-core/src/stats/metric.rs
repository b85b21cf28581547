use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The logged quantity a summary is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Objective value of the best solution found so far.
    #[default]
    BestFx,
    /// Population diversity.
    Diversity,
}

impl Metric {
    pub fn column(self) -> &'static str {
        match self {
            Self::BestFx => "best_fx",
            Self::Diversity => "diversity",
        }
    }

    /// Suffix appended to the statistic labels, e.g. `mean_opt`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::BestFx => "opt",
            Self::Diversity => "div",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best_fx" | "opt" => Ok(Self::BestFx),
            "diversity" | "div" => Ok(Self::Diversity),
            _ => Err(format!("invalid metric: {s}")),
        }
    }
}
