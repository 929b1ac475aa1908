//! Decoded benchmark result records.
//!
//! The input is the JSON document written by a benchmark harness run with
//! `--benchmark_out_format=json`: an optional `context` object and an ordered
//! `benchmarks` array. Only the fields needed for a comparison table are kept;
//! everything else in each entry is ignored.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::BenchTableError;

const DEFAULT_TIME_UNIT: &str = "ns";

/// One measured run, as written by the benchmark harness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Structured as `<group>/<label>[/...]`.
    pub run_name: String,
    /// Empty for per-iteration entries, which carry no aggregate.
    #[serde(default)]
    pub aggregate_name: String,
    /// Absent on complexity rows (`BigO`, `RMS`), which report coefficients instead.
    #[serde(default)]
    pub cpu_time: Option<f64>,
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
}

impl BenchmarkRecord {
    pub fn new(run_name: &str, aggregate_name: &str, cpu_time: f64) -> Self {
        Self {
            run_name: run_name.to_string(),
            aggregate_name: aggregate_name.to_string(),
            cpu_time: Some(cpu_time),
            time_unit: default_time_unit(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkContext {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub executable: Option<String>,
    #[serde(default)]
    pub num_cpus: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDocument {
    #[serde(default)]
    pub context: Option<BenchmarkContext>,
    pub benchmarks: Vec<BenchmarkRecord>,
}

pub fn parse_document(json: &str) -> Result<BenchmarkDocument, BenchTableError> {
    serde_json::from_str(json).map_err(|e| BenchTableError::input_decoding(e.to_string()))
}

pub fn load_document(path: &Path) -> Result<BenchmarkDocument, BenchTableError> {
    let data = fs::read_to_string(path)
        .map_err(|e| BenchTableError::io(format!("{}: {e}", path.display())))?;
    let document = parse_document(&data)?;
    log::debug!(
        "loaded {} benchmark records from {}",
        document.benchmarks.len(),
        path.display()
    );
    Ok(document)
}

fn default_time_unit() -> String {
    DEFAULT_TIME_UNIT.to_string()
}
