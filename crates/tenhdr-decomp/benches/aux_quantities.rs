//! Benchmarks for the CP-ALS auxiliary quantities
//!
//! Compares the MTTKRP-based error estimate with explicit reconstruction, and
//! measures the pseudo-inverse for growing ranks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scirs2_core::ndarray_ext::{Array, Array2, IxDyn};
use std::hint::black_box;
use tenhdr_decomp::{estimate_error, pseudo_inverse, CpTensor};
use tenhdr_kernels::{frobenius_norm_sq, mttkrp};

/// Deterministic factor with entries in [-1, 1]
fn factor(rows: usize, rank: usize, seed: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, rank), |(i, r)| {
        ((i * 31 + r * 17 + seed * 7) as f64 * 0.1).sin()
    })
}

fn tensor(size: usize) -> Array<f64, IxDyn> {
    Array::from_shape_fn(IxDyn(&[size, size, size]), |idx| {
        ((idx[0] * size * size + idx[1] * size + idx[2]) as f64 * 0.01).cos()
    })
}

fn model(size: usize, rank: usize) -> CpTensor<f64> {
    CpTensor {
        weights: None,
        factors: (0..3).map(|seed| factor(size, rank, seed)).collect(),
    }
}

fn bench_pseudo_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_inverse");

    for &(size, rank) in &[(64, 8), (64, 32), (256, 32), (256, 64)] {
        let cp = model(size, rank);

        group.throughput(Throughput::Elements((3 * size * rank) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_r{}", size, rank)),
            &cp,
            |b, cp| b.iter(|| black_box(pseudo_inverse(black_box(&cp.factors), 0))),
        );
    }

    group.finish();
}

fn bench_error_estimate_vs_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_estimate");
    group.sample_size(20);

    for &(size, rank) in &[(16, 4), (32, 8), (48, 16)] {
        let x = tensor(size);
        let cp = model(size, rank);
        let norm_tensor = frobenius_norm_sq(&x.view());
        let m = mttkrp(&x.view(), &cp.factor_views(), 2).unwrap();

        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("estimate", format!("{}³_r{}", size, rank)),
            &(&cp, &m),
            |b, (cp, m)| {
                b.iter(|| black_box(estimate_error(black_box(*cp), &m.view(), norm_tensor)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("reconstruct", format!("{}³_r{}", size, rank)),
            &(&x, &cp),
            |b, (x, cp)| {
                b.iter(|| {
                    let recon = cp.reconstruct().unwrap();
                    black_box(frobenius_norm_sq(&(*x - &recon).view()).sqrt())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    aux_benches,
    bench_pseudo_inverse,
    bench_error_estimate_vs_reconstruction,
);
criterion_main!(aux_benches);
