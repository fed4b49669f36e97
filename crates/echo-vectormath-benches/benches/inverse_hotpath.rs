// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Matrix inversion paths: general cofactor inverse versus the affine and
//! rigid shortcuts, over batches of freshly built transforms.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echo_vectormath::{Mat3, Mat4, Quat, Transform3, Vec3};
use std::{hint::black_box, time::Duration};

fn rigid_transforms(n: u16) -> Vec<Transform3> {
    (0..n)
        .map(|i| {
            let t = f32::from(i);
            let axis = Vec3::new(1.0, t * 0.01, -0.5).normalize();
            let q = Quat::from_axis_angle(axis, t * 0.003);
            Transform3::from_quat_translation(&q, Vec3::new(t, -t, 0.5 * t))
        })
        .collect()
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4_inverse");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.noise_threshold(0.02);
    for &n in &[1u16, 64, 1_024] {
        let transforms = rigid_transforms(n);
        let mats: Vec<Mat4> = transforms.iter().copied().map(Mat4::from).collect();
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("general", n), &mats, |b, mats| {
            b.iter(|| {
                for m in mats {
                    black_box(black_box(m).inverse());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("affine", n), &mats, |b, mats| {
            b.iter(|| {
                for m in mats {
                    black_box(black_box(m).affine_inverse());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("ortho", n), &mats, |b, mats| {
            b.iter(|| {
                for m in mats {
                    black_box(black_box(m).ortho_inverse());
                }
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("transform3_inverse");
    group.sample_size(50);
    group.noise_threshold(0.02);
    for &n in &[64u16, 1_024] {
        let transforms = rigid_transforms(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("general", n), &transforms, |b, ts| {
            b.iter(|| {
                for t in ts {
                    black_box(black_box(t).inverse());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("ortho", n), &transforms, |b, ts| {
            b.iter(|| {
                for t in ts {
                    black_box(black_box(t).ortho_inverse());
                }
            });
        });
    }
    group.finish();

    c.bench_function("mat3_inverse", |b| {
        let m = Mat3::rotation_zyx(Vec3::new(0.3, -0.2, 1.1)).append_scale(&Vec3::splat(2.0));
        b.iter(|| black_box(black_box(&m).inverse()));
    });
}

criterion_group!(benches, bench_inverse);
criterion_main!(benches);
