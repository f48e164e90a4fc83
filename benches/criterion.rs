use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use synthdata::{
    dataset::{gen_multiple_linear, gen_multiple_logistic, gen_trigonometric},
    Trigonometric,
};

fn generators(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345u64);
    let betas: Vec<_> = (0..16).map(f64::from).collect();
    let mut group = c.benchmark_group("generators");
    for n_obs in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("multiple_linear", n_obs), &n_obs, |b, &n| {
            b.iter(|| black_box(gen_multiple_linear(&betas, n, &mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("multiple_logistic", n_obs), &n_obs, |b, &n| {
            b.iter(|| black_box(gen_multiple_logistic(&betas, n, &mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("sine", n_obs), &n_obs, |b, &n| {
            b.iter(|| black_box(gen_trigonometric(n, Trigonometric::Sine)))
        });
    }
    group.finish();
}

criterion_group!(bench_generators, generators);
criterion_main!(bench_generators);
