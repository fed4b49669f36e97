// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{check_index, check_length_squared, MathError};
use crate::scalar;
use crate::vec3::{copy_sign, slerp_weights};
use crate::Vec3;

/// Homogeneous 4-component vector (or a generic 4-tuple).
///
/// `w = 0` encodes a direction and `w = 1` a position; see the `From`
/// conversions from [`Vec3`] and [`crate::Point3`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::splat(0.0);

    /// Unit X axis `(1, 0, 0, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y axis `(0, 1, 0, 0)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z axis `(0, 0, 1, 0)`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W axis `(0, 0, 0, 1)`.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

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

    /// Same as [`Self::UNIT_W`].
    pub const fn w_axis() -> Self {
        Self::UNIT_W
    }

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Broadcasts `scalar` into every component.
    pub const fn splat(scalar: f32) -> Self {
        Self {
            data: [scalar, scalar, scalar, scalar],
        }
    }

    /// Builds `(xyz, w)`.
    pub const fn from_vec3_w(xyz: Vec3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
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

    /// W component.
    pub const fn w(&self) -> f32 {
        self.data[3]
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

    /// Sets the W component.
    pub fn set_w(&mut self, w: f32) {
        self.data[3] = w;
    }

    /// The `(x, y, z)` part, dropping `w`.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Overwrites `(x, y, z)`, leaving `w` untouched.
    pub fn set_xyz(&mut self, xyz: Vec3) {
        self.data[0] = xyz.x();
        self.data[1] = xyz.y();
        self.data[2] = xyz.z();
    }

    /// Component by index.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn elem(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Overwrites the component at `index`.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn set_elem(&mut self, index: usize, value: f32) {
        self.data[index] = value;
    }

    /// Checked component lookup.
    pub fn try_elem(&self, index: usize) -> Result<f32, MathError> {
        check_index(index, 4).map(|i| self.data[i])
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(f(x), f(y), f(z), f(w))
    }

    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(f(ax, bx), f(ay, by), f(az, bz), f(aw, bw))
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

    /// Componentwise reciprocal.
    pub fn recip_per_elem(&self) -> Self {
        self.map(|a| 1.0 / a)
    }

    /// Componentwise square root.
    pub fn sqrt_per_elem(&self) -> Self {
        self.map(scalar::sqrt)
    }

    /// Componentwise reciprocal square root.
    pub fn rsqrt_per_elem(&self) -> Self {
        self.map(|a| 1.0 / scalar::sqrt(a))
    }

    /// Componentwise absolute value.
    pub fn abs_per_elem(&self) -> Self {
        self.map(scalar::abs)
    }

    /// Magnitudes of `self` carrying the signs of `sign`.
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
        let xy = scalar::max(self.x(), self.y());
        scalar::max(self.w(), scalar::max(self.z(), xy))
    }

    /// Smallest component.
    pub fn min_elem(&self) -> f32 {
        let xy = scalar::min(self.x(), self.y());
        scalar::min(self.w(), scalar::min(self.z(), xy))
    }

    /// Sum of the components.
    pub fn sum(&self) -> f32 {
        self.x() + self.y() + self.z() + self.w()
    }

    /// Dot product over all four components.
    pub fn dot(&self, other: &Self) -> f32 {
        let mut result = self.x() * other.x();
        result += self.y() * other.y();
        result += self.z() * other.z();
        result += self.w() * other.w();
        result
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Scales to unit length; the zero vector yields NaN.
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
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// Spherical linear interpolation between unit vectors (no sign flip).
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

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.data
    }
}

/// Promotes a direction: `w = 0`.
impl From<Vec3> for Vec4 {
    fn from(value: Vec3) -> Self {
        Self::from_vec3_w(value, 0.0)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "( {:.6} {:.6} {:.6} {:.6} )",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec4::add(&self, &rhs)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec4::sub(&self, &rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
