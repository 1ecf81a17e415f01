// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Circular Sum Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the outer-sum hot path.
//!
//! Covers:
//!   - Longitude reduction (cossin)
//!   - Order recurrence vs per-order sin_cos
//!   - Value and value+gradient evaluation at M = 360 and M = 2190
//!   - Dense sampling of one circle

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use harmonic_circle::{cossin, CircleBuilder, CircleConfig, CircularSum, OrderRotation};

// ── Helpers ───────────────────────────────────────────────────────────

fn make_circle(max_order: usize, gradient: bool) -> CircularSum {
    let cfg = CircleConfig::at_colatitude(max_order, gradient, 6378137.0, 6378137.0, 41.0);
    let mut b = CircleBuilder::new(&cfg);
    for m in 0..=max_order {
        let x = m as f64;
        b.set_coefficients_with_gradient(
            m,
            (x * 0.37).sin() / (x + 1.0),
            (x * 0.11).cos() / (x + 1.0),
            (x * 0.23).sin() / (x + 2.0),
            (x * 0.29).cos() / (x + 2.0),
            (x * 0.31).sin() / (x + 3.0),
            (x * 0.41).cos() / (x + 3.0),
        );
    }
    b.freeze().expect("all orders populated")
}

fn direct_sum(wc: &[f64], ws: &[f64], lon: f64) -> f64 {
    let x = lon.to_radians();
    wc.iter()
        .zip(ws)
        .enumerate()
        .map(|(m, (&a, &b))| {
            let (s, c) = (m as f64 * x).sin_cos();
            a * c + b * s
        })
        .sum()
}

// ── Primitives ───────────────────────────────────────────────────────

fn bench_cossin(c: &mut Criterion) {
    c.bench_function("cossin", |b| b.iter(|| cossin(black_box(-237.125))));
}

fn bench_rotation_vs_direct(c: &mut Criterion) {
    let m_max = 2190;
    let wc: Vec<f64> = (0..=m_max).map(|m| 1.0 / (m as f64 + 1.0)).collect();
    let ws = wc.clone();
    let (cl, sl) = cossin(17.3);

    c.bench_function("order_sum_rotation_2190", |b| {
        b.iter(|| {
            OrderRotation::new(black_box(cl), black_box(sl))
                .zip(wc.iter().zip(&ws))
                .fold(0.0, |acc, ((cm, sm), (&x, &y))| acc + x * cm + y * sm)
        })
    });
    c.bench_function("order_sum_direct_2190", |b| {
        b.iter(|| direct_sum(black_box(&wc), black_box(&ws), 17.3))
    });
}

// ── Evaluator ────────────────────────────────────────────────────────

fn bench_value(c: &mut Criterion) {
    let small = make_circle(360, false);
    let large = make_circle(2190, false);
    c.bench_function("value_m360", |b| b.iter(|| small.value(black_box(12.5))));
    c.bench_function("value_m2190", |b| b.iter(|| large.value(black_box(12.5))));
}

fn bench_value_with_gradient(c: &mut Criterion) {
    let small = make_circle(360, true);
    let large = make_circle(2190, true);
    c.bench_function("value_gradient_m360", |b| {
        b.iter(|| small.value_with_gradient(black_box(12.5)))
    });
    c.bench_function("value_gradient_m2190", |b| {
        b.iter(|| large.value_with_gradient(black_box(12.5)))
    });
}

fn bench_sample_circle(c: &mut Criterion) {
    let circle = make_circle(360, false);
    c.bench_function("sample_uniform_m360_x1440", |b| {
        b.iter(|| circle.sample_uniform(black_box(1440)))
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_and_freeze_m2190", |b| {
        b.iter(|| make_circle(black_box(2190), true))
    });
}

// ── Groups ───────────────────────────────────────────────────────────

criterion_group!(primitives, bench_cossin, bench_rotation_vs_direct,);

criterion_group!(
    evaluator,
    bench_value,
    bench_value_with_gradient,
    bench_sample_circle,
    bench_build,
);

criterion_main!(primitives, evaluator);
