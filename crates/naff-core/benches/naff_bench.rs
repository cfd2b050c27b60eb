//! Criterion benchmarks for naff-core
//!
//! Run with: cargo bench -p naff-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use naff_core::{
    Complex64, Naff, RefineConfig, Signal, Turns, WindowType, coarse_estimate, laskar_dft, refine,
};
use std::f64::consts::PI;

/// Three-tone complex test signal.
fn generate_signal(size: usize) -> Vec<Complex64> {
    (0..size)
        .map(|n| {
            let n = n as f64;
            Complex64::from_polar(1.0, 2.0 * PI * 0.2065 * n)
                + Complex64::from_polar(0.3, 2.0 * PI * -0.413 * n + 0.4)
                + Complex64::from_polar(0.05, 2.0 * PI * 0.0121 * n - 1.0)
        })
        .collect()
}

fn windowed(size: usize) -> Vec<Complex64> {
    WindowType::Hann
        .apply(&generate_signal(size), &Turns::from_zero(size), 1)
        .unwrap()
}

// ============================================================================
// Building blocks
// ============================================================================

fn bench_laskar_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("Laskar_DFT");

    for &size in &[1024, 4096, 16384] {
        let z = windowed(size);
        let turns = Turns::from_zero(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(laskar_dft(black_box(0.2065), &turns, &z)))
        });
    }

    group.finish();
}

fn bench_coarse_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Coarse_Estimate");

    for &size in &[1024, 4096, 16384] {
        let z = windowed(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(coarse_estimate(black_box(&z), None)))
        });
    }

    group.finish();
}

fn bench_refine(c: &mut Criterion) {
    let mut group = c.benchmark_group("Refine");

    for &size in &[1024, 4096] {
        let z = windowed(size);
        let turns = Turns::from_zero(size);
        let resolution = 1.0 / size as f64;
        let start = (0.2065 * size as f64).round() * resolution - resolution;
        let config = RefineConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(refine(&z, &turns, start, resolution, &config)))
        });
    }

    group.finish();
}

// ============================================================================
// Full extraction
// ============================================================================

fn bench_extract_harmonics(c: &mut Criterion) {
    let mut group = c.benchmark_group("Extract_Harmonics");
    let naff = Naff::default();
    let z = generate_signal(4096);

    for &count in &[1, 3, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(naff.extract_harmonics(black_box(&z), count)))
        });
    }

    group.finish();
}

fn bench_tunes_batch(c: &mut Criterion) {
    let naff = Naff::default();
    let signals: Vec<Signal> = (0..16)
        .map(|_| Signal::complex(generate_signal(2048)))
        .collect();

    c.bench_function("Tunes_Batch_16x2048", |b| {
        b.iter(|| black_box(naff.tunes(black_box(&signals))))
    });
}

criterion_group!(
    benches,
    bench_laskar_dft,
    bench_coarse_estimate,
    bench_refine,
    bench_extract_harmonics,
    bench_tunes_batch,
);

criterion_main!(benches);
