use thiserror::Error;

use crate::aggregate::AggregateKind;

/// Error type for benchmark table operations.
#[derive(Debug, Error, PartialEq)]
pub enum BenchTableError {
    #[error("invalid aggregate kind: {0}")]
    InvalidAggregateKind(String),
    #[error("no records with aggregate {0}")]
    NoMatchingRecords(AggregateKind),
    #[error("malformed run name: {0}")]
    MalformedRunName(String),
    #[error("baseline run {0} has zero cpu time")]
    ZeroBaselineTime(String),
    #[error("invalid cpu time {value} for run {run_name}")]
    InvalidCpuTime { run_name: String, value: f64 },
    #[error("run {0} has no cpu time")]
    MissingCpuTime(String),
    #[error("factor for run {0} is not finite")]
    FactorOverflow(String),
    #[error("run {run_name} reports time in {found}, baseline uses {expected}")]
    MixedTimeUnits {
        run_name: String,
        expected: String,
        found: String,
    },
    #[error("input decoding error: {0}")]
    InputDecoding(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl BenchTableError {
    pub fn invalid_aggregate<T: Into<String>>(msg: T) -> Self {
        BenchTableError::InvalidAggregateKind(msg.into())
    }

    pub fn malformed_run_name<T: Into<String>>(msg: T) -> Self {
        BenchTableError::MalformedRunName(msg.into())
    }

    pub fn zero_baseline<T: Into<String>>(msg: T) -> Self {
        BenchTableError::ZeroBaselineTime(msg.into())
    }

    pub fn missing_cpu_time<T: Into<String>>(msg: T) -> Self {
        BenchTableError::MissingCpuTime(msg.into())
    }

    pub fn factor_overflow<T: Into<String>>(msg: T) -> Self {
        BenchTableError::FactorOverflow(msg.into())
    }

    pub fn input_decoding<T: Into<String>>(msg: T) -> Self {
        BenchTableError::InputDecoding(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        BenchTableError::Io(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BenchTableError::Serialization(msg.into())
    }
}
