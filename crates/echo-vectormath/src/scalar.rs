// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Single-precision scalar helpers.
//!
//! Every transcendental widens its argument to `f64`, evaluates with the
//! pure-Rust `libm` crate, and narrows the result back to `f32`. Routing
//! through `libm` keeps results independent of the host C library.

use core::f32::consts::PI;

/// Cosine threshold above which slerp falls back to a linear blend.
///
/// Inputs this close to parallel would divide by `sin(angle) ≈ 0`; the linear
/// weights `(1 - t, t)` are used instead.
pub const SLERP_TOLERANCE: f32 = 0.999;

/// `π / 2` as used by [`crate::Mat4::perspective`].
pub const FRAC_PI_2: f32 = core::f32::consts::FRAC_PI_2;

/// Larger of two values; NaN if either operand is NaN.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        return f32::NAN;
    }
    libm::fmax(f64::from(a), f64::from(b)) as f32
}

/// Smaller of two values; NaN if either operand is NaN.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        return f32::NAN;
    }
    libm::fmin(f64::from(a), f64::from(b)) as f32
}

/// Absolute value.
#[inline]
pub fn abs(a: f32) -> f32 {
    libm::fabs(f64::from(a)) as f32
}

/// Square root; negative inputs yield NaN.
#[inline]
pub fn sqrt(a: f32) -> f32 {
    libm::sqrt(f64::from(a)) as f32
}

/// Sine of `a` radians.
#[inline]
pub fn sin(a: f32) -> f32 {
    libm::sin(f64::from(a)) as f32
}

/// Cosine of `a` radians.
#[inline]
pub fn cos(a: f32) -> f32 {
    libm::cos(f64::from(a)) as f32
}

/// Tangent of `a` radians.
#[inline]
pub fn tan(a: f32) -> f32 {
    libm::tan(f64::from(a)) as f32
}

/// Arcsine in radians; inputs outside `[-1, 1]` yield NaN.
#[inline]
pub fn asin(a: f32) -> f32 {
    libm::asin(f64::from(a)) as f32
}

/// Arccosine in radians; inputs outside `[-1, 1]` yield NaN.
#[inline]
pub fn acos(a: f32) -> f32 {
    libm::acos(f64::from(a)) as f32
}

/// Arctangent in radians.
#[inline]
pub fn atan(a: f32) -> f32 {
    libm::atan(f64::from(a)) as f32
}

/// Clamps `value` to the inclusive `[lo, hi]` range.
///
/// Built on [`max`] and [`min`], so a NaN `value` stays NaN.
///
/// # Panics
/// Panics when `lo > hi`.
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    assert!(lo <= hi, "invalid clamp range: {lo} > {hi}");
    min(max(value, lo), hi)
}

/// Degrees to radians (`π / 180` per degree).
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Radians to degrees (`180 / π` per radian).
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}
