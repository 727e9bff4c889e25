// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: general 4x4 inversion
//!
//! `inverse` pays for the nil-axis and determinant checks before the adjugate;
//! `inverse_fast` goes straight to it (ensure checks compile out in bench
//! builds). The nil case measures the identity short-circuit.
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::time::Duration;
use xform_core::{Mat4, Rotator, Vec3};

const BATCH: u16 = 256;

fn affine_inputs() -> Vec<Mat4> {
    (0..BATCH)
        .map(|i| {
            let t = f32::from(i);
            let mut m = Mat4::from_rotation_translation(
                &Rotator::new(t * 7.0 - 80.0, t * 13.0, t * -29.0),
                &Vec3::new(t, -t * 0.5, 10.0),
            );
            let scale = [1.0 + t * 0.01, 2.0, 0.5 + t * 0.02];
            for (row, s) in scale.into_iter().enumerate() {
                for col in 0..3 {
                    m[row][col] *= s;
                }
            }
            m
        })
        .collect()
}

fn bench_inverse(c: &mut Criterion) {
    let inputs = affine_inputs();
    let mut group = c.benchmark_group("matrix_inverse");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5))
        .throughput(Throughput::Elements(u64::from(BATCH)));

    group.bench_function("inverse", |b| {
        b.iter(|| {
            for m in &inputs {
                black_box(black_box(m).inverse());
            }
        });
    });
    group.bench_function("inverse_fast", |b| {
        b.iter(|| {
            for m in &inputs {
                black_box(black_box(m).inverse_fast());
            }
        });
    });
    group.bench_function("inverse_nil", |b| {
        let nil = Mat4::ZERO;
        b.iter(|| {
            for _ in 0..BATCH {
                black_box(black_box(&nil).inverse());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_inverse);
criterion_main!(benches);
