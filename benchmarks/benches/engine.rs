use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use searchlab_benchmarks::{bench_grid, bench_pancake};
use searchlab_core::algo;
use searchlab_core::config::SearchConfig;
use searchlab_core::node::{NodeId, OpenKey};
use searchlab_core::open::OpenList;

// ---------------------------------------------------------------------------
// Open list push/pop
// ---------------------------------------------------------------------------

fn bench_open_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_list_push_pop");
    for &size in &[64u32, 512, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter_batched(
                || {
                    // Setup: scatter keys deterministically.
                    (0..n)
                        .map(|i| {
                            let f = f64::from(i.wrapping_mul(2_654_435_761) % 10_000);
                            (NodeId::from_index(i), OpenKey::new(f, 0.0, u64::from(i)))
                        })
                        .collect::<Vec<_>>()
                },
                |entries| {
                    let mut open = OpenList::new();
                    for (id, key) in entries {
                        open.insert(id, key);
                    }
                    while let Some(popped) = open.pop_min() {
                        black_box(popped);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Full runs on fixed instances
// ---------------------------------------------------------------------------

fn bench_grid_runs(c: &mut Criterion) {
    let grid = bench_grid();
    let mut group = c.benchmark_group("grid_10x10");
    group.bench_function("astar", |b| {
        b.iter(|| algo::run(black_box(&grid), &SearchConfig::astar()).unwrap());
    });
    group.bench_function("wastar_2", |b| {
        b.iter(|| algo::run(black_box(&grid), &SearchConfig::weighted_astar(2.0)).unwrap());
    });
    group.finish();
}

fn bench_pancake_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pancake_astar");
    for &ncakes in &[6usize, 8] {
        let pancake = bench_pancake(ncakes);
        group.bench_with_input(
            BenchmarkId::from_parameter(ncakes),
            &pancake,
            |b, instance| {
                b.iter(|| algo::run(black_box(instance), &SearchConfig::astar()).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_open_list, bench_grid_runs, bench_pancake_runs);
criterion_main!(benches);
