use std::time::Duration;

use benchtable::{AggregateKind, BenchmarkRecord, build};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn synthetic_records(runs: usize) -> Vec<BenchmarkRecord> {
    let mut records = Vec::with_capacity(runs * 3);
    for idx in 0..runs {
        let name = format!("BM/{}", 1usize << (idx % 16));
        let base = 1_000.0 + idx as f64 * 37.5;
        records.push(BenchmarkRecord::new(&name, "mean", base));
        records.push(BenchmarkRecord::new(&name, "median", base * 0.98));
        records.push(BenchmarkRecord::new(&name, "stddev", base * 0.01));
    }
    records
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for &runs in &[16usize, 128, 512] {
        let records = synthetic_records(runs);
        for kind in AggregateKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.as_str(), runs),
                &records,
                |b, records| b.iter(|| build(records, kind).expect("table")),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
