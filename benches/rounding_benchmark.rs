// ============================================================================
// Rounding Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Place Selection - Leading-digit scan over groups of different sizes
// 2. Group Formatting - End-to-end plain formatting through the engine
// 3. Renderer Comparison - Plain vs LaTeX interval rendering
// 4. Tie-Break Comparison - Half-away-from-zero vs half-even
// ============================================================================

use consistent_rounding::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Deterministic values spread over several orders of magnitude
fn sample_values(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let magnitude = 10f64.powi((i % 9) as i32 - 4);
            let sign = if i % 3 == 0 { -1.0 } else { 1.0 };
            sign * magnitude * (1.0 + i as f64 * 0.137)
        })
        .collect()
}

// ============================================================================
// Place Selection Benchmarks
// ============================================================================

fn benchmark_place_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_selection");
    let engine = RoundingEngine::default();

    for size in [3, 16, 256].iter() {
        let number_group = NumberGroup::from_f64s(&sample_values(*size)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &number_group,
            |b, number_group| {
                b.iter(|| black_box(engine.select_decimal_place(number_group)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Group Formatting Benchmarks
// ============================================================================

fn benchmark_format_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_group");
    let engine = RoundingEngine::default();

    for size in [3, 16, 256].iter() {
        let values = sample_values(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| black_box(engine.format_group(values)));
        });
    }

    group.finish();
}

// ============================================================================
// Renderer Comparison
// ============================================================================

fn benchmark_renderers(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_renderers");
    let engine = RoundingEngine::default();
    let interval = IntervalEstimate::from_f64(1.234, 0.056, 0.078).unwrap();

    let renderers: [(&str, &dyn Renderer); 2] = [
        ("plain", engine.plain_renderer()),
        ("latex", engine.latex_renderer()),
    ];
    for (name, renderer) in renderers {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(engine.format_interval(&interval, renderer)));
        });
    }

    group.finish();
}

// ============================================================================
// Tie-Break Comparison
// ============================================================================

fn benchmark_rounding_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding_modes");
    let values = sample_values(64);

    for mode in [RoundingMode::HalfAwayFromZero, RoundingMode::HalfEven].iter() {
        let engine = RoundingEngine::new(FormatConfig::new().with_rounding_mode(*mode)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", mode)),
            &values,
            |b, values| {
                b.iter(|| black_box(engine.round_consistently(values)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_place_selection,
    benchmark_format_group,
    benchmark_renderers,
    benchmark_rounding_modes
);
criterion_main!(benches);
