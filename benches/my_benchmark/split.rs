use crate::assets;
use criterion::{black_box, Criterion, Throughput};
use jsonl_sampler::api::input_file::total_size;
use jsonl_sampler::api::traits::progress::NoProgress;
use jsonl_sampler::split::splitter::split_files;
use std::num::NonZeroU64;
use tempfile::TempDir;

pub fn bench_split(c: &mut Criterion) {
    let input = TempDir::new().expect("Failed to create input directory");
    let output = TempDir::new().expect("Failed to create output directory");
    let records = assets::make_records(50_000, 7);
    let files = assets::write_data_files(input.path(), &records, 8);

    let mut group = c.benchmark_group("split");
    group.throughput(Throughput::Bytes(total_size(&files)));
    group.sample_size(20);
    for parts in [10u64, 100] {
        let target = NonZeroU64::new(parts).expect("Part count is non-zero");
        group.bench_function(format!("split_50k_into_{}", parts), |b| {
            b.iter(|| split_files(black_box(&files), output.path(), target, &NoProgress))
        });
    }
    group.finish();
}
