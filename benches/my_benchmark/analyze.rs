use crate::assets;
use criterion::{black_box, Criterion, Throughput};
use jsonl_sampler::analyze::analyzer::RecordProfiler;
use jsonl_sampler::analyze::record::extract_fields;

pub fn bench_record_profiling(c: &mut Criterion) {
    let records = assets::make_records(10_000, 42);
    let total_bytes: usize = records.iter().map(String::len).sum();

    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.bench_function("extract_fields_10k", |b| {
        b.iter(|| {
            for record in black_box(&records) {
                let _ = black_box(extract_fields(record));
            }
        })
    });
    group.bench_function("profile_10k", |b| {
        b.iter(|| {
            let mut profiler = RecordProfiler::new();
            for record in black_box(&records) {
                profiler.observe_line(record);
            }
            profiler.into_report(&[], Vec::new())
        })
    });
    group.finish();
}
