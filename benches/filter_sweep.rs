use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use circuit_calc::circuits::filter::{solve, solve_with, FilterInputs, FilterTopology};
use circuit_calc::sweep::SweepConfig;

fn bench_filter_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_sweep");
    let inputs = FilterInputs::from_rc(1_000.0, 1.0e-6);

    for topology in [FilterTopology::LowPass, FilterTopology::HighPass] {
        group.bench_function(BenchmarkId::new("default", topology), |b| {
            b.iter(|| solve(black_box(&inputs), topology))
        });
    }

    let dense = SweepConfig {
        points: 10_001,
        ..SweepConfig::default()
    };
    group.bench_function(BenchmarkId::new("dense", dense.points), |b| {
        b.iter(|| solve_with(black_box(&inputs), FilterTopology::LowPass, &dense))
    });
    group.finish();
}

criterion_group!(benches, bench_filter_sweep);
criterion_main!(benches);
