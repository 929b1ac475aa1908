//! Comparison tables: per-run time and slowdown factor against a baseline.
//!
//! The baseline is the first record of the selected subset, in input order.
//! It is not searched for the minimum time, so a table whose first run is not
//! the fastest has factors below `1.0`. [`ComparisonTable::fastest`] reports
//! the true minimum separately.

use serde::Serialize;

use crate::{BenchTableError, aggregate::AggregateKind, record::BenchmarkRecord};

const RUN_NAME_SEPARATOR: char = '/';
const FACTOR_SCALE: f64 = 100.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub time: f64,
    pub factor: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub aggregate: AggregateKind,
    pub time_unit: String,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row every factor is relative to.
    pub fn baseline(&self) -> Option<&ComparisonRow> {
        self.rows.first()
    }

    /// Row with the smallest time; the first one wins ties.
    pub fn fastest(&self) -> Option<&ComparisonRow> {
        self.rows.iter().fold(None, |best, row| match best {
            Some(current) if current.time <= row.time => Some(current),
            _ => Some(row),
        })
    }
}

/// Builds the comparison table for `kind`.
///
/// Every selected record must report its time in the baseline's unit; factors
/// compare raw numbers. Fails as a whole on the first bad record; no partial
/// table is returned.
pub fn build(
    records: &[BenchmarkRecord],
    kind: AggregateKind,
) -> Result<ComparisonTable, BenchTableError> {
    let selected: Vec<&BenchmarkRecord> = records
        .iter()
        .filter(|record| record.aggregate_name == kind.as_str())
        .collect();
    let baseline = selected
        .first()
        .ok_or(BenchTableError::NoMatchingRecords(kind))?;
    let baseline_time = checked_time(baseline)?;
    if baseline_time == 0.0 {
        return Err(BenchTableError::zero_baseline(&baseline.run_name));
    }
    log::debug!(
        "{kind}: {} of {} records selected, baseline {}={}",
        selected.len(),
        records.len(),
        baseline.run_name,
        baseline_time
    );

    let rows = selected
        .iter()
        .map(|record| {
            let time = checked_time(record)?;
            if record.time_unit != baseline.time_unit {
                return Err(BenchTableError::MixedTimeUnits {
                    run_name: record.run_name.clone(),
                    expected: baseline.time_unit.clone(),
                    found: record.time_unit.clone(),
                });
            }
            let factor = round_factor(time / baseline_time);
            if !factor.is_finite() {
                return Err(BenchTableError::factor_overflow(&record.run_name));
            }
            Ok(ComparisonRow {
                label: run_label(&record.run_name)?.to_string(),
                time,
                factor,
            })
        })
        .collect::<Result<Vec<_>, BenchTableError>>()?;

    Ok(ComparisonTable {
        aggregate: kind,
        time_unit: baseline.time_unit.clone(),
        rows,
    })
}

/// Like [`build`], but validates the aggregate name before looking at any record.
pub fn build_named(
    records: &[BenchmarkRecord],
    kind: &str,
) -> Result<ComparisonTable, BenchTableError> {
    let kind: AggregateKind = kind.parse()?;
    build(records, kind)
}

/// Segment after the first separator, up to the next one.
pub fn run_label(run_name: &str) -> Result<&str, BenchTableError> {
    run_name
        .split(RUN_NAME_SEPARATOR)
        .nth(1)
        .ok_or_else(|| BenchTableError::malformed_run_name(run_name))
}

/// Two decimals, half away from zero on the scaled value.
///
/// Exact ties round up: `1.125` becomes `1.13`. Python's `round(1.125, 2)`
/// rounds ties to even and gives `1.12`, so reports from the older script can
/// differ in the last digit.
pub fn round_factor(ratio: f64) -> f64 {
    (ratio * FACTOR_SCALE).round() / FACTOR_SCALE
}

fn checked_time(record: &BenchmarkRecord) -> Result<f64, BenchTableError> {
    match record.cpu_time {
        None => Err(BenchTableError::missing_cpu_time(&record.run_name)),
        Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Some(value) => Err(BenchTableError::InvalidCpuTime {
            run_name: record.run_name.clone(),
            value,
        }),
    }
}
