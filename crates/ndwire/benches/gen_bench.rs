//! Criterion microbenches for the shape generators and wireframe expansion.
//!
//! - polytopes: cross-polytope / hypercube / simplex across dimensions.
//! - sphere: all three sampling strategies at a fixed point count.
//! - expand: wireframe expansion on dense edge sets.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndwire::polytope::{cross_polytope, hypercube, simplex};
use ndwire::shape::expand_wireframe;
use ndwire::sphere::sample_hypersphere;

fn bench_polytopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("polytopes");
    for dim in [3usize, 6, 9] {
        group.bench_function(BenchmarkId::new("cross_polytope", dim), |b| {
            b.iter(|| cross_polytope(dim))
        });
        group.bench_function(BenchmarkId::new("simplex", dim), |b| b.iter(|| simplex(dim)));
    }
    for dim in [4usize, 8, 12] {
        group.bench_function(BenchmarkId::new("hypercube", dim), |b| {
            b.iter(|| hypercube(dim))
        });
    }
    group.finish();
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere");
    for dim in [2usize, 3, 4, 8] {
        group.bench_function(BenchmarkId::new("sample_1024", dim), |b| {
            b.iter(|| sample_hypersphere(1024, dim, Some(42)))
        });
    }
    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    let cube = hypercube(10);
    group.bench_function("hypercube_10", |b| b.iter(|| expand_wireframe(&cube)));
    let cross = cross_polytope(32);
    group.bench_function("cross_polytope_32", |b| b.iter(|| expand_wireframe(&cross)));
    group.finish();
}

criterion_group!(benches, bench_polytopes, bench_sphere, bench_expand);
criterion_main!(benches);
