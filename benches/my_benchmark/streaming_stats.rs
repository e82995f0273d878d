use criterion::{black_box, Criterion, Throughput};
use jsonl_sampler::stats::streaming_stats::StreamingStats;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub fn bench_streaming_stats(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let values: Vec<u64> = (0..100_000)
        .map(|_| {
            let bits = rng.random_range(1..30u32);
            rng.random_range(0..1u64 << bits)
        })
        .collect();

    let mut group = c.benchmark_group("streaming_stats");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("add_100k", |b| {
        b.iter(|| {
            let mut stats = StreamingStats::new();
            for &value in black_box(&values) {
                stats.add(value);
            }
            stats
        })
    });

    let mut stats = StreamingStats::new();
    values.iter().for_each(|&value| stats.add(value));
    group.bench_function("summary", |b| b.iter(|| black_box(&stats).summary()));
    group.finish();
}
