use benchtable::{
    AggregateKind, BenchmarkRecord, build,
    config::OutputFormat,
    render::{render_json, render_text},
    report::render_report,
};
use serde_json::Value;

fn sample_table(kind: AggregateKind) -> benchtable::ComparisonTable {
    let records = vec![
        BenchmarkRecord::new("BM/1", kind.as_str(), 100.0),
        BenchmarkRecord::new("BM/2", kind.as_str(), 250.0),
    ];
    build(&records, kind).expect("table")
}

#[test]
fn test_render_text_aligns_columns() {
    let text = render_text(&sample_table(AggregateKind::Mean));
    assert_eq!(
        text,
        "   Bins  Time [ns]  Factor\n\
         0     1        100    1.00\n\
         1     2        250    2.50\n"
    );
}

#[test]
fn test_render_text_prints_fractional_times() {
    let records = vec![
        BenchmarkRecord::new("BM/1", "mean", 8.0),
        BenchmarkRecord::new("BM/2", "mean", 9.0),
        BenchmarkRecord::new("BM/3", "mean", 10.25),
    ];
    let text = render_text(&build(&records, AggregateKind::Mean).expect("table"));
    assert!(text.contains("1.13"));
    assert!(text.contains("10.25"));
}

#[test]
fn test_render_json_serializes_tables() {
    let json = render_json(&[sample_table(AggregateKind::Mean)]).expect("json");
    let value: Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value[0]["aggregate"], "mean");
    assert_eq!(value[0]["time_unit"], "ns");
    assert_eq!(value[0]["rows"][1]["label"], "2");
    assert_eq!(value[0]["rows"][1]["factor"], 2.5);
}

#[test]
fn test_render_report_separates_text_tables() {
    let tables = vec![
        sample_table(AggregateKind::Mean),
        sample_table(AggregateKind::Median),
    ];
    let text = render_report(&tables, OutputFormat::Text).expect("report");
    assert_eq!(text.matches("Bins").count(), 2);
    assert!(text.contains("\n\n"));
}
