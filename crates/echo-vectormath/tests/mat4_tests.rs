// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use core::f32::consts::FRAC_PI_2;
use common::{assert_close, assert_loose, assert_mat4_close, sample_mat4};
use echo_vectormath::{Mat3, Mat4, MathError, Point3, Transform3, Vec3, Vec4};

fn rigid() -> Mat4 {
    let axis = Vec3::new(0.3, -1.0, 0.6).normalize();
    Mat4::translation(Vec3::new(4.0, -2.0, 7.0)) * Mat4::rotation_axis(0.8, &axis)
}

fn affine() -> Mat4 {
    rigid() * Mat4::scale(Vec3::new(2.0, 0.5, 3.0)) * Mat4::rotation_x(0.4)
}

#[test]
fn identity_is_neutral() {
    let m = sample_mat4();
    assert_eq!(m * Mat4::identity(), m);
    assert_eq!(Mat4::identity() * m, m);
    let v = Vec4::new(2.0, 3.0, 5.0, 7.0);
    assert_eq!(Mat4::identity() * v, v);
    assert_eq!(Mat4::identity().mul_vec4(&v), Vec4::new(2.0, 3.0, 5.0, 7.0));
    assert_eq!(Mat4::default(), Mat4::identity());
}

#[test]
fn general_inverse_round_trips() {
    let m = sample_mat4();
    let inv = m.inverse();
    assert_mat4_close(&(m * inv), &Mat4::identity());
    assert_mat4_close(&(inv * m), &Mat4::identity());
    assert_eq!(m.checked_inverse(), Ok(inv));
}

#[test]
fn singular_inverse_is_reported_by_checked_variant() {
    let m = Mat4::splat(1.0);
    assert_eq!(m.determinant(), 0.0);
    assert!(m.inverse().to_cols_array().iter().any(|v| !v.is_finite()));
    assert!(matches!(
        m.checked_inverse(),
        Err(MathError::Singular { .. })
    ));
}

#[test]
fn determinant_laws() {
    let a = sample_mat4();
    let b = affine();
    assert_loose(&[a.transpose().determinant()], &[a.determinant()]);
    assert_loose(&[(a * b).determinant()], &[a.determinant() * b.determinant()]);
    assert_loose(&[a.inverse().determinant()], &[1.0 / a.determinant()]);
    assert_eq!(Mat4::scale(Vec3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
    assert_eq!(Mat4::translation(Vec3::new(5.0, 6.0, 7.0)).determinant(), 1.0);
}

#[test]
fn affine_and_ortho_inverses_match_general_inverse() {
    let a = affine();
    assert_mat4_close(&a.affine_inverse(), &a.inverse());
    assert_mat4_close(&(a * a.affine_inverse()), &Mat4::identity());

    let r = rigid();
    assert_mat4_close(&r.ortho_inverse(), &r.inverse());
    assert_mat4_close(&r.ortho_inverse(), &r.affine_inverse());
}

#[test]
fn affine_inverse_ignores_bottom_row() {
    let mut m = affine();
    m.set_row(3, Vec4::new(0.5, 0.5, 0.5, 2.0));
    assert_eq!(m.affine_inverse().row(3), Vec4::UNIT_W);
    assert_mat4_close(&m.affine_inverse(), &affine().affine_inverse());
}

#[test]
fn directions_ignore_translation_points_do_not() {
    let t = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
    let v = Vec3::new(2.0, 4.0, -1.0);
    assert_eq!(t.mul_vec3(&v).to_array(), [2.0, 4.0, -1.0, 0.0]);
    let p = Point3::new(2.0, 4.0, -1.0);
    assert_eq!(t.mul_point3(&p).to_array(), [7.0, 1.0, 1.0, 1.0]);
    assert_eq!(t * p, t.mul_point3(&p));
}

#[test]
fn rotation_z_quarter_turn_maps_x_to_y() {
    let y = Mat4::rotation_z(FRAC_PI_2).mul_vec3(&Vec3::UNIT_X);
    assert_close(&y.to_array(), &[0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn rotation_constructors_embed_the_mat3_versions() {
    let angles = Vec3::new(0.1, 0.2, 0.3);
    assert_eq!(
        Mat4::rotation_zyx(angles),
        Mat4::from_mat3_translation(&Mat3::rotation_zyx(angles), Vec3::ZERO)
    );
    let axis = Vec3::UNIT_Y;
    assert_eq!(
        Mat4::rotation_axis(0.5, &axis).upper3x3(),
        Mat3::rotation_axis(0.5, &axis)
    );
    assert_eq!(Mat4::rotation_y(0.5).upper3x3(), Mat3::rotation_y(0.5));
    assert_eq!(Mat4::rotation_x(0.5).row(3), Vec4::UNIT_W);
}

#[test]
fn mul_transform3_matches_promoted_product() {
    let m = sample_mat4();
    let t = Transform3::from_cols(
        Vec3::new(1.0, 0.5, 0.0),
        Vec3::new(-0.5, 2.0, 0.25),
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(4.0, 5.0, 6.0),
    );
    assert_mat4_close(&m.mul_transform3(&t), &(m * Mat4::from(t)));
    assert_eq!(m * t, m.mul_transform3(&t));
}

#[test]
fn scale_helpers() {
    let m = affine();
    let s = Vec3::new(2.0, -1.0, 0.5);
    let appended = m.append_scale(&s);
    assert_eq!(appended.col(3), m.col(3));
    assert_mat4_close(&appended, &(m * Mat4::scale(s)));

    let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
    let prepended = Mat4::prepend_scale(&s, &t);
    assert_eq!(prepended.col(3), Vec4::new(2.0, -2.0, 1.5, 1.0));
    assert_mat4_close(&Mat4::prepend_scale(&s, &m), &(Mat4::scale(s) * m));
}

#[test]
fn upper3x3_and_translation_accessors() {
    let mut m = Mat4::identity();
    let r = Mat3::rotation_z(0.3);
    m.set_upper3x3(&r);
    m.set_translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m.upper3x3(), r);
    assert_eq!(m.translation_part(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m.row(3), Vec4::UNIT_W);
    assert_eq!(m, Mat4::from_mat3_translation(&r, Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn look_at_moves_target_onto_negative_z() {
    let view = Mat4::look_at(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, Vec3::UNIT_Y);
    assert_close(&view.mul_point3(&Point3::ORIGIN).to_array(), &[0.0, 0.0, -5.0, 1.0]);

    let eye = Point3::new(3.0, 4.0, 5.0);
    let target = Point3::new(-1.0, 0.5, 2.0);
    let view = Mat4::look_at(eye, target, Vec3::UNIT_Y);
    let local = view.mul_point3(&target);
    assert_loose(&[local.x(), local.y()], &[0.0, 0.0]);
    assert_loose(&[local.z()], &[-eye.dist(&target)]);
    assert_loose(&view.mul_point3(&eye).to_array(), &[0.0, 0.0, 0.0, 1.0]);
    // Rigid: the upper 3×3 is orthonormal.
    let r = view.upper3x3();
    assert_loose(
        &(r * r.transpose()).to_cols_array(),
        &Mat3::identity().to_cols_array(),
    );
}

#[test]
fn rows_columns_and_checked_access() {
    let mut m = Mat4::from([
        1.0, 2.0, 3.0, 4.0, // col 0
        5.0, 6.0, 7.0, 8.0, // col 1
        9.0, 10.0, 11.0, 12.0, // col 2
        13.0, 14.0, 15.0, 16.0, // col 3
    ]);
    assert_eq!(m.row(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
    assert_eq!(m.elem(3, 1), 14.0);
    assert_eq!(m.transpose().col(2), m.row(2));
    m.set_elem(0, 0, -1.0);
    assert_eq!(m.col(0).x(), -1.0);
    assert_eq!(m.try_col(3), Ok(m.col(3)));
    assert_eq!(
        m.try_col(4),
        Err(MathError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(m.to_cols_array()[15], 16.0);
}

#[test]
fn elementwise_arithmetic() {
    let a = Mat4::splat(3.0);
    let b = Mat4::identity();
    assert_eq!((a + b).elem(2, 2), 4.0);
    assert_eq!((a - b).elem(3, 0), 3.0);
    assert_eq!(-a, Mat4::splat(-3.0));
    assert_eq!(a * 2.0, Mat4::splat(6.0));
    assert_eq!((-a).abs_per_elem(), a);
    assert_eq!(a.mul_per_elem(&b), Mat4::identity().mul_scalar(3.0));
    assert_eq!(Mat4::select(&a, &b, false), a);
}

#[test]
fn vec4_outer_product() {
    let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let b = Vec4::new(0.0, 1.0, -1.0, 2.0);
    let m = a.outer(&b);
    assert_eq!(m.col(0), Vec4::ZERO);
    assert_eq!(m.col(3), a.scale(2.0));
    assert_eq!(m.row(1), b.scale(2.0));
}

#[test]
fn display_prints_rows() {
    let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(
        m.to_string(),
        "( 1.000000 0.000000 0.000000 1.000000 )\n\
         ( 0.000000 1.000000 0.000000 2.000000 )\n\
         ( 0.000000 0.000000 1.000000 3.000000 )\n\
         ( 0.000000 0.000000 0.000000 1.000000 )"
    );
}
