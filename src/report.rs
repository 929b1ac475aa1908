use crate::{
    BenchTableError,
    aggregate::AggregateKind,
    config::{OutputFormat, ReportConfig},
    record::{BenchmarkDocument, load_document},
    render::{render_json, render_text},
    table::{ComparisonTable, build},
};

/// One table per requested kind, in request order. Any failure aborts the report.
pub fn build_report(
    document: &BenchmarkDocument,
    kinds: &[AggregateKind],
) -> Result<Vec<ComparisonTable>, BenchTableError> {
    kinds
        .iter()
        .map(|kind| build(&document.benchmarks, *kind))
        .collect()
}

pub fn render_report(
    tables: &[ComparisonTable],
    format: OutputFormat,
) -> Result<String, BenchTableError> {
    match format {
        OutputFormat::Text => Ok(tables
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => render_json(tables).map(|json| json + "\n"),
    }
}

pub fn run(config: &ReportConfig) -> Result<String, BenchTableError> {
    let document = load_document(&config.input)?;
    if let Some(context) = &document.context {
        log::info!(
            "results from {} on {} ({} cpus) at {}",
            context.executable.as_deref().unwrap_or("unknown executable"),
            context.host_name.as_deref().unwrap_or("unknown host"),
            context
                .num_cpus
                .map_or_else(|| "?".to_string(), |cpus| cpus.to_string()),
            context.date.as_deref().unwrap_or("unknown date")
        );
    }
    let tables = build_report(&document, &config.aggregates)?;
    render_report(&tables, config.format)
}
