// File: crates/decade-chart/benches/cloud_bench.rs
// Summary: Criterion bench for single-box word-cloud layout.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decade_chart::cloud::CLOUD_SIZE;
use decade_chart::{ApproxMetrics, CloudLayout, CloudWord};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn words(n: usize) -> Vec<CloudWord> {
    (0..n).map(|i| CloudWord::new(format!("genre{i}"), ((n - i) * (n - i)) as f64 * 4.0)).collect()
}

fn bench_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("cloud_layout");
    let metrics = ApproxMetrics;
    for n in [5usize, 10, 20] {
        let input = words(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(9);
                black_box(CloudLayout::new(CLOUD_SIZE, &metrics).layout(black_box(input), &mut rng))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cloud);
criterion_main!(benches);
