//! Benchmarks for kernel evaluation, training, and query paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rbfnet::kernel::ALL_KERNEL_TYPES;
use rbfnet::{RBFInterpolator, RBFType, SampleSet};

fn scattered_samples(n: usize) -> SampleSet {
    let mut set = SampleSet::new();
    for i in 0..n {
        // Deterministic pseudo-scattered points on a spiral
        let t = i as f64 * 0.37;
        set.add_sample(vec![t * t.cos(), t * t.sin()], t.sin())
            .expect("Failed to add sample");
    }
    set
}

fn bench_kernel_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel_value");
    for kernel_type in ALL_KERNEL_TYPES {
        let kernel = kernel_type.build();
        group.bench_function(kernel_type.to_string(), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..1000 {
                    let r = i as f64 * 0.01;
                    acc += kernel.value(black_box(r)) + kernel.derivative(black_box(r));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");
    for n in [16, 64, 128] {
        let samples = scattered_samples(n);
        group.bench_function(format!("gaussian_n{n}"), |b| {
            b.iter(|| {
                RBFInterpolator::new()
                    .with_kernel(RBFType::Gaussian)
                    .train(black_box(&samples))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let samples = scattered_samples(128);
    let network = RBFInterpolator::new()
        .with_kernel(RBFType::Multiquadric)
        .train(&samples)
        .unwrap();
    let query = [0.5, -0.25];

    let mut group = c.benchmark_group("eval");
    group.bench_function("value", |b| {
        b.iter(|| network.eval(black_box(&query)).unwrap())
    });
    group.bench_function("basis", |b| {
        b.iter(|| network.eval_basis(black_box(&query)).unwrap())
    });
    group.bench_function("jacobian", |b| {
        b.iter(|| network.eval_jacobian(black_box(&query)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_kernel_values,
    bench_training,
    bench_evaluation
);
criterion_main!(benches);
