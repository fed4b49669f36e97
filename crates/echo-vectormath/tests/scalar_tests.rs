// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use common::assert_scalar_close;
use echo_vectormath::scalar;

#[test]
fn clamp_bounds_inclusive() {
    assert_eq!(scalar::clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(scalar::clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(scalar::clamp(0.25, 0.0, 1.0), 0.25);
    assert_eq!(scalar::clamp(3.0, 3.0, 3.0), 3.0);
}

#[test]
#[should_panic(expected = "invalid clamp range")]
fn clamp_rejects_inverted_range() {
    let _ = scalar::clamp(0.5, 1.0, 0.0);
}

#[test]
fn degree_radian_conversion() {
    assert_scalar_close(scalar::deg_to_rad(180.0), PI);
    assert_scalar_close(scalar::deg_to_rad(-90.0), -FRAC_PI_2);
    assert_scalar_close(scalar::rad_to_deg(FRAC_PI_2), 90.0);
    assert_scalar_close(scalar::rad_to_deg(scalar::deg_to_rad(37.5)), 37.5);
}

#[test]
fn trig_reference_values() {
    assert_eq!(scalar::sin(0.0), 0.0);
    assert_eq!(scalar::cos(0.0), 1.0);
    assert_scalar_close(scalar::sin(FRAC_PI_2), 1.0);
    assert_scalar_close(scalar::tan(FRAC_PI_4), 1.0);
    assert_scalar_close(scalar::atan(1.0), FRAC_PI_4);
    assert_scalar_close(scalar::asin(1.0), FRAC_PI_2);
    assert_scalar_close(scalar::acos(-1.0), PI);
}

#[test]
fn out_of_domain_inputs_yield_nan() {
    assert!(scalar::sqrt(-1.0).is_nan());
    assert!(scalar::acos(1.5).is_nan());
    assert!(scalar::asin(-2.0).is_nan());
}

#[test]
fn min_max_abs_sqrt() {
    assert_eq!(scalar::max(-3.0, 2.0), 2.0);
    assert_eq!(scalar::min(-3.0, 2.0), -3.0);
    assert_eq!(scalar::abs(-0.5), 0.5);
    assert_eq!(scalar::sqrt(16.0), 4.0);
}

#[test]
fn min_max_propagate_nan() {
    assert!(scalar::max(f32::NAN, 1.0).is_nan());
    assert!(scalar::max(1.0, f32::NAN).is_nan());
    assert!(scalar::min(f32::NAN, -1.0).is_nan());
    assert!(scalar::min(-1.0, f32::NAN).is_nan());
    assert!(scalar::clamp(f32::NAN, 0.0, 1.0).is_nan());
}

#[test]
fn slerp_tolerance_constant() {
    assert_eq!(scalar::SLERP_TOLERANCE, 0.999);
    assert_eq!(scalar::FRAC_PI_2, FRAC_PI_2);
}
