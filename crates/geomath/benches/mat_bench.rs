//! Criterion benchmarks for the 3x3 hot kernels (multiply, inverse, solve).
//! Inputs are seeded so runs are comparable across machines.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use geomath::{Mat3, Real, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_mat3(rng: &mut StdRng) -> Mat3 {
    let mut e: [Real; 9] = [0.0; 9];
    for x in &mut e {
        *x = rng.gen_range(-1.0..1.0);
    }
    Mat3::new(e[0], e[1], e[2], e[3], e[4], e[5], e[6], e[7], e[8])
}

fn random_vec3(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}

fn bench_mat3(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat3");
    group.bench_function("multiply", |b| {
        let mut rng = StdRng::seed_from_u64(43);
        b.iter_batched(
            || (random_mat3(&mut rng), random_mat3(&mut rng)),
            |(x, y)| x * y,
            BatchSize::SmallInput,
        );
    });
    group.bench_function("inverse", |b| {
        let mut rng = StdRng::seed_from_u64(44);
        b.iter_batched(
            || random_mat3(&mut rng),
            |m| m.inverse(),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("solve", |b| {
        let mut rng = StdRng::seed_from_u64(45);
        b.iter_batched(
            || (random_mat3(&mut rng), random_vec3(&mut rng)),
            |(m, v)| m.solve(v),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_mat3);
criterion_main!(benches);
