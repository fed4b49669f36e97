// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{check_index, check_length_squared, MathError};
use crate::scalar;
use crate::vec3::slerp_weights;
use crate::{Mat3, Vec3};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotation helpers assume a unit quaternion; this is documented, never
///   enforced. Nothing in this type renormalises implicitly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Builds a quaternion from a vector part and a scalar part.
    pub const fn from_vec3_w(xyz: Vec3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// Broadcasts `scalar` into every component.
    pub const fn splat(scalar: f32) -> Self {
        Self {
            data: [scalar, scalar, scalar, scalar],
        }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// X component of the vector part.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
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

    /// Sets the scalar part.
    pub fn set_w(&mut self, w: f32) {
        self.data[3] = w;
    }

    /// Vector part `(x, y, z)`.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Overwrites the vector part, leaving `w` untouched.
    pub fn set_xyz(&mut self, xyz: Vec3) {
        self.data[0] = xyz.x();
        self.data[1] = xyz.y();
        self.data[2] = xyz.z();
    }

    /// Component by index (`3` is the scalar part).
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

    /// Constructs a quaternion rotating `angle` radians about `unit_axis`.
    ///
    /// The axis is used as given: `(axis * sin(angle / 2), cos(angle / 2))`.
    /// A non-unit axis produces a non-unit quaternion.
    pub fn from_axis_angle(unit_axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = scalar::sin(half);
        let c = scalar::cos(half);
        Self::from_vec3_w(unit_axis.scale(s), c)
    }

    /// Rotation of `angle` radians about +X.
    pub fn rotation_x(angle: f32) -> Self {
        let half = angle * 0.5;
        Self::new(scalar::sin(half), 0.0, 0.0, scalar::cos(half))
    }

    /// Rotation of `angle` radians about +Y.
    pub fn rotation_y(angle: f32) -> Self {
        let half = angle * 0.5;
        Self::new(0.0, scalar::sin(half), 0.0, scalar::cos(half))
    }

    /// Rotation of `angle` radians about +Z.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_vectormath::{Quat, Vec3};
    /// let v = Quat::rotation_z(FRAC_PI_2).rotate(&Vec3::UNIT_X);
    /// assert!((v.y() - 1.0).abs() < 1e-5);
    /// ```
    pub fn rotation_z(angle: f32) -> Self {
        let half = angle * 0.5;
        Self::new(0.0, 0.0, scalar::sin(half), scalar::cos(half))
    }

    /// Shortest-arc rotation taking `unit_from` onto `unit_to`.
    ///
    /// Both inputs must be unit length. The result is undefined when the
    /// vectors are antiparallel: `cos_half_angle_x2` collapses to zero.
    pub fn rotation_arc(unit_from: &Vec3, unit_to: &Vec3) -> Self {
        let cos_half_angle_x2 = scalar::sqrt(2.0 * (1.0 + unit_from.dot(unit_to)));
        let recip_cos_half_angle_x2 = 1.0 / cos_half_angle_x2;
        Self::from_vec3_w(
            unit_from.cross(unit_to).scale(recip_cos_half_angle_x2),
            cos_half_angle_x2 * 0.5,
        )
    }

    /// Rotation equivalent to [`Mat3::rotation_zyx`] for the same angles.
    pub fn from_euler_zyx(radians_xyz: Vec3) -> Self {
        Self::from_mat3(&Mat3::rotation_zyx(radians_xyz))
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
            self.w() + other.w(),
        )
    }

    /// Componentwise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
            self.w() - other.w(),
        )
    }

    /// Scales every component.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.x() * scalar,
            self.y() * scalar,
            self.z() * scalar,
            self.w() * scalar,
        )
    }

    /// Divides every component by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(
            self.x() / scalar,
            self.y() / scalar,
            self.z() / scalar,
            self.w() / scalar,
        )
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        let mut result = self.x() * other.x();
        result += self.y() * other.y();
        result += self.z() * other.z();
        result += self.w() * other.w();
        result
    }

    /// Squared length (the quaternion norm `q·q`).
    pub fn norm(&self) -> f32 {
        self.dot(self)
    }

    /// Length.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.norm())
    }

    /// Scales to unit length; the zero quaternion yields NaN.
    pub fn normalize(&self) -> Self {
        let len_inv = 1.0 / scalar::sqrt(self.norm());
        self.scale(len_inv)
    }

    /// Normalises, reporting [`MathError::ZeroLength`] instead of producing NaN.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        check_length_squared(self.norm())?;
        Ok(self.normalize())
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: rotating by the result is the same as rotating
    /// by `other` and then by `self`. Quaternion multiplication is
    /// non-commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_vectormath::Quat;
    /// let yaw = Quat::rotation_y(FRAC_PI_2);
    /// let pitch = Quat::rotation_x(FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x(), self.y(), self.z(), self.w());
        let (bx, by, bz, bw) = (other.x(), other.y(), other.z(), other.w());
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `vec` by this (unit) quaternion: `q * v * conj(q)`.
    ///
    /// Expanded as two products without forming the conjugate.
    pub fn rotate(&self, vec: &Vec3) -> Vec3 {
        let (qx, qy, qz, qw) = (self.x(), self.y(), self.z(), self.w());
        let (vx, vy, vz) = (vec.x(), vec.y(), vec.z());
        let tmp_x = qw * vx + qy * vz - qz * vy;
        let tmp_y = qw * vy + qz * vx - qx * vz;
        let tmp_z = qw * vz + qx * vy - qy * vx;
        let tmp_w = qx * vx + qy * vy + qz * vz;
        Vec3::new(
            tmp_w * qx + tmp_x * qw - tmp_y * qz + tmp_z * qy,
            tmp_w * qy + tmp_y * qw - tmp_z * qx + tmp_x * qz,
            tmp_w * qz + tmp_z * qw - tmp_x * qy + tmp_y * qx,
        )
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Linear blend `self + t * (other - self)`.
    ///
    /// The result is not renormalised; callers that need a rotation must
    /// call [`Quat::normalize`] themselves.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// Spherical linear interpolation between two unit quaternions.
    ///
    /// Takes the shorter arc (negating `self` when the dot product is
    /// negative) and switches to linear weights once the inputs are within
    /// [`crate::scalar::SLERP_TOLERANCE`] of parallel.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut cos_angle = self.dot(other);
        let start = if cos_angle < 0.0 {
            cos_angle = -cos_angle;
            -*self
        } else {
            *self
        };
        let (scale0, scale1) = slerp_weights(cos_angle, t);
        start.scale(scale0) + other.scale(scale1)
    }

    /// Spherical quadrangle interpolation through control quaternions
    /// `q1`, `q2` between endpoints `q0` and `q3`.
    pub fn squad(t: f32, q0: &Self, q1: &Self, q2: &Self, q3: &Self) -> Self {
        let outer = q0.slerp(q3, t);
        let inner = q1.slerp(q2, t);
        outer.slerp(&inner, (2.0 * t) * (1.0 - t))
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

/// Converts a 4-element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Quat {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Quat {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl fmt::Display for Quat {
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

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Quat::add(&self, &rhs)
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Quat::sub(&self, &rhs)
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x(), -self.y(), -self.z(), -self.w())
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate(&rhs)
    }
}
