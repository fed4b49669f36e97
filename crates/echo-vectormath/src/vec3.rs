// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{check_index, check_length_squared, MathError};
use crate::scalar::{self, SLERP_TOLERANCE};

/// 3D vector: a direction or displacement with no fixed origin.
///
/// * Translation does not affect a `Vec3`; use [`crate::Point3`] for positions.
/// * Arithmetic is componentwise `f32`; division by zero follows IEEE-754
///   (infinities/NaN), never panics.
/// * "Unit vector" is a documented precondition of [`Vec3::slerp`] and of the
///   rotation constructors, not a checked invariant.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::splat(0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Same as [`Self::UNIT_X`].
    pub const fn x_axis() -> Self {
        Self::UNIT_X
    }

    /// Same as [`Self::UNIT_Y`].
    pub const fn y_axis() -> Self {
        Self::UNIT_Y
    }

    /// Same as [`Self::UNIT_Z`].
    pub const fn z_axis() -> Self {
        Self::UNIT_Z
    }

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Broadcasts `scalar` into every component.
    pub const fn splat(scalar: f32) -> Self {
        Self {
            data: [scalar, scalar, scalar],
        }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self.data[1] = y;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f32) {
        self.data[2] = z;
    }

    /// Component by index (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// # Panics
    /// Panics when `index > 2`; see [`Vec3::try_elem`] for a checked form.
    pub fn elem(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Overwrites the component at `index`.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn set_elem(&mut self, index: usize, value: f32) {
        self.data[index] = value;
    }

    /// Checked component lookup.
    pub fn try_elem(&self, index: usize) -> Result<f32, MathError> {
        check_index(index, 3).map(|i| self.data[i])
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]), f(self.data[2]))
    }

    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
        )
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a + b)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a - b)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        self.map(|a| a * scalar)
    }

    /// Divides every component by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        self.map(|a| a / scalar)
    }

    /// Componentwise product.
    pub fn mul_per_elem(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a * b)
    }

    /// Componentwise quotient.
    pub fn div_per_elem(&self, other: &Self) -> Self {
        self.zip(*other, |a, b| a / b)
    }

    /// Componentwise reciprocal `1 / c`.
    pub fn recip_per_elem(&self) -> Self {
        self.map(|a| 1.0 / a)
    }

    /// Componentwise square root.
    pub fn sqrt_per_elem(&self) -> Self {
        self.map(scalar::sqrt)
    }

    /// Componentwise reciprocal square root `1 / sqrt(c)`.
    pub fn rsqrt_per_elem(&self) -> Self {
        self.map(|a| 1.0 / scalar::sqrt(a))
    }

    /// Componentwise absolute value.
    pub fn abs_per_elem(&self) -> Self {
        self.map(scalar::abs)
    }

    /// Magnitudes of `self` carrying the signs of `sign`.
    ///
    /// A component of `sign` is treated as negative only when it compares
    /// `< 0.0`, so `-0.0` yields a positive result.
    pub fn copy_sign_per_elem(&self, sign: &Self) -> Self {
        self.zip(*sign, copy_sign)
    }

    /// Componentwise maximum.
    pub fn max_per_elem(&self, other: &Self) -> Self {
        self.zip(*other, scalar::max)
    }

    /// Componentwise minimum.
    pub fn min_per_elem(&self, other: &Self) -> Self {
        self.zip(*other, scalar::min)
    }

    /// Largest component.
    pub fn max_elem(&self) -> f32 {
        scalar::max(self.z(), scalar::max(self.x(), self.y()))
    }

    /// Smallest component.
    pub fn min_elem(&self) -> f32 {
        scalar::min(self.z(), scalar::min(self.x(), self.y()))
    }

    /// Sum of the components.
    pub fn sum(&self) -> f32 {
        self.x() + self.y() + self.z()
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        let mut result = self.x() * other.x();
        result += self.y() * other.y();
        result += self.z() * other.z();
        result
    }

    /// Right-handed cross product.
    ///
    /// # Examples
    /// ```
    /// use echo_vectormath::Vec3;
    /// assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Scales the vector to unit length.
    ///
    /// There is no zero guard: normalising the zero vector yields NaN
    /// components. Use [`Vec3::try_normalize`] when the input may be
    /// degenerate.
    pub fn normalize(&self) -> Self {
        let len_inv = 1.0 / scalar::sqrt(self.length_squared());
        self.scale(len_inv)
    }

    /// Normalises, reporting [`MathError::ZeroLength`] instead of producing NaN.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        check_length_squared(self.length_squared())?;
        Ok(self.normalize())
    }

    /// Linear interpolation `self + t * (other - self)`.
    ///
    /// Exact at `t = 0`; `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// Spherical linear interpolation between two unit vectors.
    ///
    /// Falls back to linear weights when the vectors are within
    /// [`SLERP_TOLERANCE`] of parallel. Unlike [`crate::Quat::slerp`] there is
    /// no shortest-path sign flip.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let (scale0, scale1) = slerp_weights(self.dot(other), t);
        self.scale(scale0) + other.scale(scale1)
    }

    /// Returns `b` when `select_b` is set, otherwise `a`.
    pub fn select(a: &Self, b: &Self, select_b: bool) -> Self {
        if select_b {
            *b
        } else {
            *a
        }
    }
}

/// Magnitude of `value` with a negative sign iff `sign < 0`.
pub(crate) fn copy_sign(value: f32, sign: f32) -> f32 {
    if sign < 0.0 {
        -scalar::abs(value)
    } else {
        scalar::abs(value)
    }
}

/// Blend weights shared by every slerp in the crate.
///
/// `cos_angle` is assumed to already be non-negative for callers that want
/// shortest-path behaviour.
pub(crate) fn slerp_weights(cos_angle: f32, t: f32) -> (f32, f32) {
    if cos_angle < SLERP_TOLERANCE {
        let angle = scalar::acos(cos_angle);
        let recip_sin_angle = 1.0 / scalar::sin(angle);
        (
            scalar::sin((1.0 - t) * angle) * recip_sin_angle,
            scalar::sin(t * angle) * recip_sin_angle,
        )
    } else {
        (1.0 - t, t)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use echo_vectormath::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {:.6} {:.6} {:.6} )", self.x(), self.y(), self.z())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
