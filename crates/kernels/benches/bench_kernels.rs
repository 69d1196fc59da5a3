use criterion::{criterion_group, criterion_main, Criterion};
use kernels::ops::{cofactor_kernel, matmul_kernel, transpose_kernel};
use rand::Rng;
use std::hint::black_box;

fn bench_matmul_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_kernel");
    let mut rng = rand::rng();

    let test_sizes = vec![2, 3, 4, 16];

    for size in test_sizes {
        let a: Vec<f32> = (0..size * size).map(|_| rng.random::<f32>()).collect();
        let b: Vec<f32> = (0..size * size).map(|_| rng.random::<f32>()).collect();
        let mut out = vec![0.0f32; size * size];

        group.bench_function(format!("f32_size_{}", size), |bencher| {
            bencher.iter(|| {
                matmul_kernel(&mut out, &a, size, size, &b, size, size).unwrap();
                black_box(&out);
            })
        });
    }

    group.finish();
}

fn bench_transpose_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose_kernel");
    let mut rng = rand::rng();

    for size in [2, 3, 4, 16] {
        let src: Vec<f32> = (0..size * size).map(|_| rng.random::<f32>()).collect();
        let mut dst = vec![0.0f32; size * size];

        group.bench_function(format!("f32_size_{}", size), |bencher| {
            bencher.iter(|| {
                transpose_kernel(black_box(&src), &mut dst, size, size);
                black_box(&dst);
            })
        });
    }

    group.finish();
}

fn bench_cofactor_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("cofactor_kernel");
    let mut rng = rand::rng();

    let minor: Vec<f32> = (0..16).map(|_| rng.random::<f32>()).collect();
    let mut out = vec![0.0f32; 16];

    group.bench_function("f32_size_4", |bencher| {
        bencher.iter(|| {
            cofactor_kernel(&mut out, black_box(&minor), 4, 4);
            black_box(&out);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_matmul_kernel,
    bench_transpose_kernel,
    bench_cofactor_kernel
);
criterion_main!(benches);
