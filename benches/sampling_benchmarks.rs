/// Performance benchmarks for spanning forest sampling
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use spanforest::components::decompose;
use spanforest::forest::assemble;
use spanforest::graph::Graph;
use spanforest::validate::validate;

/// Ring of `n` vertices: worst-ish case for the random walk (long mixing)
fn ring_graph(n: usize) -> Graph {
    let edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    Graph::load(n, &edges).unwrap()
}

/// Square grid on side x side vertices
fn grid_graph(side: usize) -> Graph {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                edges.push((v, v + 1));
            }
            if row + 1 < side {
                edges.push((v, v + side));
            }
        }
    }
    Graph::load(side * side, &edges).unwrap()
}

fn bench_ring_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("wilson_ring");
    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.sample_size(20);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let graph = ring_graph(size);
            let components = decompose(&graph);
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                let parent = assemble(&graph, &components, &mut rng).unwrap();
                black_box(parent)
            });
        });
    }
    group.finish();
}

fn bench_grid_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("wilson_grid");
    for side in [10, 32].iter() {
        group.throughput(Throughput::Elements((side * side) as u64));
        group.sample_size(20);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, &side| {
            let graph = grid_graph(side);
            let components = decompose(&graph);
            let mut rng = StdRng::seed_from_u64(2);
            b.iter(|| {
                let parent = assemble(&graph, &components, &mut rng).unwrap();
                black_box(parent)
            });
        });
    }
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.sample_size(20);
    let graph = grid_graph(32);
    let components = decompose(&graph);
    let mut rng = StdRng::seed_from_u64(3);
    let parent = assemble(&graph, &components, &mut rng).unwrap();
    group.bench_function("grid_32", |b| {
        b.iter(|| validate(black_box(&parent), components.count()).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_ring_sampling,
    bench_grid_sampling,
    bench_validation
);
criterion_main!(benches);
