// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use core::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};
use common::{assert_close, assert_loose, assert_same_rotation, assert_scalar_close};
use echo_vectormath::{Mat3, MathError, Quat, Vec3, Vec4};

#[test]
fn rotation_z_quarter_turn_maps_x_to_y() {
    let v = Quat::rotation_z(FRAC_PI_2).rotate(&Vec3::UNIT_X);
    assert_close(&v.to_array(), &[0.0, 1.0, 0.0]);
    let w = Quat::rotation_z(FRAC_PI_2) * Vec3::UNIT_X;
    assert_eq!(v, w);
}

#[test]
fn axis_constructors_agree_with_axis_angle() {
    let angle = 0.7;
    assert_eq!(
        Quat::from_axis_angle(Vec3::UNIT_X, angle),
        Quat::rotation_x(angle)
    );
    assert_eq!(
        Quat::from_axis_angle(Vec3::UNIT_Y, angle),
        Quat::rotation_y(angle)
    );
    assert_eq!(
        Quat::from_axis_angle(Vec3::UNIT_Z, angle),
        Quat::rotation_z(angle)
    );
}

#[test]
fn from_axis_angle_does_not_normalize_the_axis() {
    let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 2.0), PI);
    assert_scalar_close(q.z(), 2.0);
    assert!(q.length() > 1.5);
}

#[test]
fn multiply_composes_right_to_left() {
    let a = Quat::rotation_x(FRAC_PI_2);
    let b = Quat::rotation_z(FRAC_PI_2);
    let v = Vec3::UNIT_X;
    // b first: X -> Y, then a: Y -> Z.
    let composed = a.multiply(&b).rotate(&v);
    let stepwise = a.rotate(&b.rotate(&v));
    assert_close(&composed.to_array(), &stepwise.to_array());
    assert_close(&composed.to_array(), &[0.0, 0.0, 1.0]);
    assert_ne!(a * b, b * a);
}

#[test]
fn identity_is_neutral() {
    let q = Quat::rotation_y(0.3);
    assert_eq!(q * Quat::identity(), q);
    assert_eq!(Quat::identity() * q, q);
    assert_eq!(Quat::default(), Quat::identity());
    assert_eq!(Quat::identity().rotate(&Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn conjugate_undoes_a_unit_rotation() {
    let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -1.0).normalize(), 1.1);
    let v = Vec3::new(0.3, -4.0, 2.5);
    let back = q.conjugate().rotate(&q.rotate(&v));
    assert_loose(&back.to_array(), &v.to_array());
    assert_same_rotation(&(q * q.conjugate()), &Quat::identity());
}

#[test]
fn norm_is_squared_length() {
    let q = Quat::new(1.0, 2.0, 2.0, 4.0);
    assert_eq!(q.norm(), 25.0);
    assert_eq!(q.length(), 5.0);
    assert_scalar_close(q.normalize().length(), 1.0);
    assert_eq!(Quat::splat(0.0).try_normalize(), Err(MathError::ZeroLength));
}

#[test]
fn rotation_arc_takes_from_onto_to() {
    let from = Vec3::UNIT_X;
    let to = Vec3::new(0.0, 1.0, 1.0).normalize();
    let q = Quat::rotation_arc(&from, &to);
    assert_scalar_close(q.length(), 1.0);
    assert_loose(&q.rotate(&from).to_array(), &to.to_array());
}

#[test]
fn lerp_is_not_renormalized() {
    let a = Quat::identity();
    let b = Quat::rotation_z(PI);
    let mid = a.lerp(&b, 0.5);
    assert!(mid.length() < 0.75);
    assert_eq!(a.lerp(&b, 0.0), a);
}

#[test]
fn slerp_endpoints_and_unit_length() {
    let a = Quat::rotation_x(0.2);
    let b = Quat::rotation_y(1.3);
    assert_close(&a.slerp(&b, 0.0).to_array(), &a.to_array());
    assert_close(&a.slerp(&b, 1.0).to_array(), &b.to_array());
    for step in 0u8..=10 {
        let t = f32::from(step) / 10.0;
        assert_scalar_close(a.slerp(&b, t).length(), 1.0);
    }
}

#[test]
fn slerp_midpoint_halves_the_angle() {
    let a = Quat::identity();
    let b = Quat::rotation_z(FRAC_PI_2);
    let mid = a.slerp(&b, 0.5);
    assert_loose(&mid.to_array(), &Quat::rotation_z(FRAC_PI_2 / 2.0).to_array());
}

#[test]
fn slerp_takes_the_shorter_arc() {
    let a = Quat::rotation_z(0.25);
    let b = -Quat::rotation_z(0.75);
    assert!(a.dot(&b) < 0.0);
    let mid = a.slerp(&b, 0.5);
    assert_same_rotation(&mid, &Quat::rotation_z(0.5));
}

#[test]
fn slerp_near_parallel_falls_back_to_linear() {
    let a = Quat::rotation_y(0.01);
    let b = Quat::rotation_y(0.02);
    assert!(a.dot(&b) >= echo_vectormath::scalar::SLERP_TOLERANCE);
    let t = 0.3;
    assert_eq!(a.slerp(&b, t), a.scale(1.0 - t) + b.scale(t));
}

#[test]
fn slerp_of_a_rotation_with_itself_is_constant() {
    let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5).normalize(), 1.1);
    for step in 0u8..=10 {
        let t = f32::from(step) / 10.0;
        assert_close(&q.slerp(&q, t).to_array(), &q.to_array());
    }
}

#[test]
fn squad_interpolates_endpoints() {
    let q0 = Quat::rotation_x(0.1);
    let q1 = Quat::rotation_x(0.4);
    let q2 = Quat::rotation_x(0.8);
    let q3 = Quat::rotation_x(1.2);
    assert_close(&Quat::squad(0.0, &q0, &q1, &q2, &q3).to_array(), &q0.to_array());
    assert_close(&Quat::squad(1.0, &q0, &q1, &q2, &q3).to_array(), &q3.to_array());
    let mid = Quat::squad(0.5, &q0, &q1, &q2, &q3);
    assert_scalar_close(mid.length(), 1.0);
}

#[test]
fn euler_matches_matrix_rotation() {
    let angles = Vec3::new(0.3, -0.5, 1.1);
    let q = Quat::from_euler_zyx(angles);
    let m = Mat3::rotation_zyx(angles);
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_loose(&q.rotate(&v).to_array(), &(m * v).to_array());
}

#[test]
fn vector_part_accessors() {
    let mut q = Quat::from_vec3_w(Vec3::new(1.0, 2.0, 3.0), 4.0);
    assert_eq!(q.xyz(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(q.w(), 4.0);
    q.set_xyz(Vec3::ZERO);
    q.set_w(1.0);
    assert_eq!(q, Quat::identity());
    assert_eq!(q[3], 1.0);
    assert_eq!(
        q.try_elem(4),
        Err(MathError::IndexOutOfRange { index: 4, len: 4 })
    );
}

#[test]
fn vec4_round_trip_keeps_components() {
    let q = Quat::new(0.1, 0.2, 0.3, 0.4);
    let v = Vec4::from(q);
    assert_eq!(v.to_array(), [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(Quat::from(v), q);
}

#[test]
fn select_and_display() {
    let a = Quat::identity();
    let b = Quat::new(1.0, 0.0, 0.0, 0.0);
    assert_eq!(Quat::select(&a, &b, true), b);
    assert_eq!(Quat::select(&a, &b, false), a);
    assert_eq!(
        Quat::new(0.0, 0.0, FRAC_PI_3, 1.0).to_string(),
        "( 0.000000 0.000000 1.047198 1.000000 )"
    );
}
