//! Relative slowdown tables from benchmark harness JSON output.
//!
//! Records are filtered by aggregate kind, labelled from their run name and
//! compared against the first selected run. See [`table::build`].

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod record;
pub mod render;
pub mod report;
pub mod table;

pub use crate::aggregate::AggregateKind;
pub use crate::errors::BenchTableError;
pub use crate::record::{BenchmarkDocument, BenchmarkRecord};
pub use crate::table::{ComparisonRow, ComparisonTable, build, build_named};
