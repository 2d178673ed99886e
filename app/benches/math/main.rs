/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use flamemath::FastMath;
use std::hint::black_box;

fn bench_unary(
    c: &mut Criterion,
    name: &str,
    inputs: &[f64],
    system: fn(f64) -> f64,
    libm: fn(f64) -> f64,
    fast: fn(f64) -> f64,
) {
    c.bench_function(&format!("system: {name}"), |b| {
        b.iter(|| {
            for &x in inputs {
                black_box(system(black_box(x)));
            }
        })
    });

    c.bench_function(&format!("libm: {name}"), |b| {
        b.iter(|| {
            for &x in inputs {
                black_box(libm(black_box(x)));
            }
        })
    });

    c.bench_function(&format!("flamemath: {name}"), |b| {
        b.iter(|| {
            for &x in inputs {
                black_box(fast(black_box(x)));
            }
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    flamemath::init();

    let angles = (0..1000).map(|i| i as f64 * 0.0137 - 6.0).collect::<Vec<f64>>();
    let unit = (0..1000).map(|i| i as f64 / 500.0 - 1.0).collect::<Vec<f64>>();
    let positive = (1..1000).map(|i| i as f64 * 0.731).collect::<Vec<f64>>();
    let moderate = (0..1000).map(|i| i as f64 / 50.0 - 10.0).collect::<Vec<f64>>();

    bench_unary(c, "sin", &angles, f64::sin, libm::sin, flamemath::sin);
    bench_unary(c, "cos", &angles, f64::cos, libm::cos, flamemath::cos);
    bench_unary(c, "tan", &angles, f64::tan, libm::tan, flamemath::tan);
    bench_unary(c, "asin", &unit, f64::asin, libm::asin, flamemath::asin);
    bench_unary(c, "acos", &unit, f64::acos, libm::acos, flamemath::acos);
    bench_unary(c, "atan", &moderate, f64::atan, libm::atan, flamemath::atan);
    bench_unary(c, "exp", &moderate, f64::exp, libm::exp, flamemath::exp);
    bench_unary(c, "log", &positive, f64::ln, libm::log, flamemath::log);
    bench_unary(c, "log10", &positive, f64::log10, libm::log10, flamemath::log10);
    bench_unary(c, "sqrt", &positive, f64::sqrt, libm::sqrt, flamemath::sqrt);
    bench_unary(c, "cbrt", &positive, f64::cbrt, libm::cbrt, flamemath::cbrt);
    bench_unary(c, "sinh", &moderate, f64::sinh, libm::sinh, flamemath::sinh);
    bench_unary(c, "cosh", &moderate, f64::cosh, libm::cosh, flamemath::cosh);
    bench_unary(c, "tanh", &moderate, f64::tanh, libm::tanh, flamemath::tanh);

    c.bench_function("system: sin_cos", |b| {
        b.iter(|| {
            for &x in &angles {
                black_box(f64::sin_cos(black_box(x)));
            }
        })
    });

    c.bench_function("flamemath: sin_cos", |b| {
        b.iter(|| {
            for &x in &angles {
                black_box(flamemath::sin_cos(black_box(x)));
            }
        })
    });

    c.bench_function("system: atan2", |b| {
        b.iter(|| {
            for (&y, &x) in moderate.iter().zip(angles.iter()) {
                black_box(f64::atan2(black_box(y), black_box(x)));
            }
        })
    });

    c.bench_function("libm: atan2", |b| {
        b.iter(|| {
            for (&y, &x) in moderate.iter().zip(angles.iter()) {
                black_box(libm::atan2(black_box(y), black_box(x)));
            }
        })
    });

    c.bench_function("flamemath: atan2", |b| {
        b.iter(|| {
            for (&y, &x) in moderate.iter().zip(angles.iter()) {
                black_box(flamemath::atan2(black_box(y), black_box(x)));
            }
        })
    });

    c.bench_function("system: pow", |b| {
        b.iter(|| {
            for (&v, &p) in positive.iter().zip(unit.iter()) {
                black_box(f64::powf(black_box(v), black_box(p * 3.0)));
            }
        })
    });

    c.bench_function("libm: pow", |b| {
        b.iter(|| {
            for (&v, &p) in positive.iter().zip(unit.iter()) {
                black_box(libm::pow(black_box(v), black_box(p * 3.0)));
            }
        })
    });

    c.bench_function("flamemath: pow", |b| {
        b.iter(|| {
            for (&v, &p) in positive.iter().zip(unit.iter()) {
                black_box(flamemath::pow(black_box(v), black_box(p * 3.0)));
            }
        })
    });

    c.bench_function("flamemath: fastpow", |b| {
        b.iter(|| {
            for (&v, &p) in positive.iter().zip(unit.iter()) {
                black_box(flamemath::fastpow(black_box(v), black_box(p * 3.0)));
            }
        })
    });

    c.bench_function("flamemath: exp_quick", |b| {
        b.iter(|| {
            for &x in &moderate {
                black_box(flamemath::exp_quick(black_box(x)));
            }
        })
    });

    let huge = (0..1000)
        .map(|i| 1e10 * 1.7f64.powi(i % 400))
        .collect::<Vec<f64>>();
    bench_unary(c, "sin huge", &huge, f64::sin, libm::sin, flamemath::sin);

    let context = FastMath::global();
    c.bench_function("flamemath: context sin", |b| {
        b.iter(|| {
            for &x in &angles {
                black_box(context.sin(black_box(x)));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
