use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::BenchTableError;

/// Statistical reduction applied across repeated trials of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Mean,
    Median,
}

impl AggregateKind {
    /// Kinds in the order a full report lists them.
    pub const ALL: [AggregateKind; 2] = [AggregateKind::Mean, AggregateKind::Median];

    /// The `aggregate_name` the benchmark tool writes for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::Mean => "mean",
            AggregateKind::Median => "median",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateKind {
    type Err = BenchTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(AggregateKind::Mean),
            "median" => Ok(AggregateKind::Median),
            other => Err(BenchTableError::invalid_aggregate(other)),
        }
    }
}
