use criterion::*;
use rand::prelude::*;

use planar_datasets::{random, shuffle, Dataset};

fn generators(c: &mut Criterion) {
    for dataset in Dataset::all() {
        let mut group = c.benchmark_group(format!("Generate-{dataset}"));

        for num_samples in [100, 1_000, 10_000] {
            group.throughput(Throughput::Elements(num_samples as u64));

            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            group.bench_with_input(BenchmarkId::from_parameter(num_samples), &num_samples, |b, &n| {
                b.iter_with_large_drop(|| black_box(dataset.generate(n, 0.2, &mut rng)));
            });
        }
        group.finish();
    }
}

fn primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("Primitives");
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    group.bench_function("normal", |b| b.iter(|| black_box(random::normal(0.0, 1.0, &mut rng))));

    let mut items = (0..10_000).collect::<Vec<u32>>();
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("shuffle-10k", |b| b.iter(|| shuffle(black_box(&mut items), &mut rng)));

    group.finish();
}

criterion_group!(benches, generators, primitives);
criterion_main!(benches);
