use algokit::sorting::SortAlgorithm;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let input: Vec<i64> = (0..2_000).map(|_| rng.gen_range(-10_000..10_000)).collect();

    let mut group = c.benchmark_group("random_2000");
    for algo in SortAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algo), &input, |b, input| {
            b.iter(|| {
                let mut nums = input.clone();
                algo.sort(black_box(&mut nums));
                nums
            })
        });
    }
    group.finish();
}

fn bench_sorted(c: &mut Criterion) {
    let input: Vec<i64> = (0..2_000).collect();

    let mut group = c.benchmark_group("sorted_2000");
    for algo in SortAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algo), &input, |b, input| {
            b.iter(|| {
                let mut nums = input.clone();
                algo.sort(black_box(&mut nums));
                nums
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_sorted);
criterion_main!(benches);
