//! Criterion benches for the cost model and the evaluation harness.
//!
//! The model is a closed-form O(1) estimator; these benches pin that down
//! and measure evaluation throughput over a synthetic dataset.
//!
//! Run with: cargo bench --bench estimate

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gemm_roofline::{estimate, evaluate, evaluate_parallel, BenchmarkRecord, HardwareProfile, ProblemShape};

fn bench_estimate(c: &mut Criterion) {
    let profile = HardwareProfile::titan_v();
    let mut group = c.benchmark_group("estimate");

    // In-cache, boundary-adjacent, and spilling working sets.
    for &(m, n, k) in &[(256, 256, 256), (1760, 128, 1760), (4096, 7000, 4096)] {
        let shape = ProblemShape::new(m, n, k).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{shape}")),
            &shape,
            |bench, &shape| bench.iter(|| estimate(black_box(shape), black_box(&profile))),
        );
    }
    group.finish();
}

fn synthetic_records(count: usize) -> Vec<BenchmarkRecord> {
    (0..count)
        .map(|i| {
            let dim = 64 + (i as u64 % 64) * 64;
            BenchmarkRecord {
                shape: ProblemShape::new(dim, dim / 2 + 1, dim).unwrap(),
                measured_time_usec: 10.0 + i as f64,
            }
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let profile = HardwareProfile::titan_v();
    let mut group = c.benchmark_group("evaluate");

    for &count in &[100usize, 10_000] {
        let records = synthetic_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("serial", count), &records, |bench, records| {
            bench.iter(|| evaluate(black_box(records), black_box(&profile)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &records, |bench, records| {
            bench.iter(|| evaluate_parallel(black_box(records), black_box(&profile)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimate, bench_evaluate);
criterion_main!(benches);
