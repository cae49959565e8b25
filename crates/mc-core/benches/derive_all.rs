//! Criterion benchmarks for the full recomputation path.
//!
//! One slider move costs one `derive_all`; it has to stay well inside a
//! frame at the page's resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mc_core::{derive_all, EngineConfig, ParameterState};

fn bench_derive_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_all");
    let params = ParameterState::default();

    for resolution in [100usize, 500, 2_000] {
        let config = EngineConfig {
            curve_resolution: resolution,
            ..EngineConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &config,
            |b, config| {
                b.iter(|| derive_all(black_box(&params), config));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_derive_all);
criterion_main!(benches);
