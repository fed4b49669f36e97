// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use echo_vectormath::{Mat3, Mat4, Quat, Transform3};

/// Absolute floor for comparisons near zero.
pub const ABS_TOL: f32 = 1e-6;
/// Relative tolerance scaled by the larger magnitude.
pub const REL_TOL: f32 = 1e-5;

/// Looser bounds for results that went through an inversion or a chain of
/// trig calls.
pub const LOOSE_ABS_TOL: f32 = 1e-4;
pub const LOOSE_REL_TOL: f32 = 1e-4;

pub fn assert_close_with(a: &[f32], b: &[f32], abs_tol: f32, rel_tol: f32) {
    assert_eq!(a.len(), b.len(), "length mismatch: {a:?} vs {b:?}");
    for (i, (&ai, &bi)) in a.iter().zip(b).enumerate() {
        let diff = (ai - bi).abs();
        let scale = ai.abs().max(bi.abs());
        let tol = abs_tol.max(rel_tol * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol} (scale={scale})"
        );
    }
}

pub fn assert_close(a: &[f32], b: &[f32]) {
    assert_close_with(a, b, ABS_TOL, REL_TOL);
}

pub fn assert_loose(a: &[f32], b: &[f32]) {
    assert_close_with(a, b, LOOSE_ABS_TOL, LOOSE_REL_TOL);
}

pub fn assert_scalar_close(a: f32, b: f32) {
    assert_close(&[a], &[b]);
}

pub fn assert_mat3_close(a: &Mat3, b: &Mat3) {
    assert_loose(&a.to_cols_array(), &b.to_cols_array());
}

pub fn assert_mat4_close(a: &Mat4, b: &Mat4) {
    assert_loose(&a.to_cols_array(), &b.to_cols_array());
}

pub fn assert_transform3_close(a: &Transform3, b: &Transform3) {
    assert_loose(&a.to_cols_array(), &b.to_cols_array());
}

/// `q` and `-q` encode the same rotation; compare up to that sign.
pub fn assert_same_rotation(a: &Quat, b: &Quat) {
    let flipped = if a.dot(b) < 0.0 { -*b } else { *b };
    assert_loose(&a.to_array(), &flipped.to_array());
}

/// A well-conditioned invertible matrix with no special structure.
pub fn sample_mat3() -> Mat3 {
    Mat3::from([2.0, 0.5, -1.0, 0.25, 3.0, 0.75, -0.5, 1.0, 4.0])
}

/// A well-conditioned invertible 4×4 with a non-trivial bottom row.
pub fn sample_mat4() -> Mat4 {
    Mat4::from([
        4.0, 1.0, 0.5, 0.2, // col 0
        -1.0, 3.0, 0.25, -0.1, // col 1
        0.5, -0.75, 5.0, 0.3, // col 2
        2.0, -3.0, 1.5, 1.0, // col 3
    ])
}
