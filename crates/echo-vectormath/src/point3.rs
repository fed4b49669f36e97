// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use crate::error::{check_index, MathError};
use crate::scalar;
use crate::vec3::copy_sign;
use crate::Vec3;

/// A position in space.
///
/// Shares its layout with [`Vec3`] but differs in its arithmetic partners:
/// `Point3 - Point3` is a [`Vec3`], `Point3 ± Vec3` is a `Point3`, and
/// affine transforms apply their translation to points only. There is no
/// cross product or normalisation; a position has no direction.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3 {
    data: [f32; 3],
}

impl Point3 {
    /// The origin.
    pub const ORIGIN: Self = Self::splat(0.0);

    /// Creates a point from coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Broadcasts `scalar` into every coordinate.
    pub const fn splat(scalar: f32) -> Self {
        Self {
            data: [scalar, scalar, scalar],
        }
    }

    /// Returns the coordinates as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X coordinate.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y coordinate.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z coordinate.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Sets the X coordinate.
    pub fn set_x(&mut self, x: f32) {
        self.data[0] = x;
    }

    /// Sets the Y coordinate.
    pub fn set_y(&mut self, y: f32) {
        self.data[1] = y;
    }

    /// Sets the Z coordinate.
    pub fn set_z(&mut self, z: f32) {
        self.data[2] = z;
    }

    /// Coordinate by index.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn elem(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Overwrites the coordinate at `index`.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn set_elem(&mut self, index: usize, value: f32) {
        self.data[index] = value;
    }

    /// Checked coordinate lookup.
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

    /// Displacement from `other` to `self`.
    pub fn sub_point(&self, other: &Self) -> Vec3 {
        Vec3::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Translates the point by `offset`.
    pub fn add_vec(&self, offset: &Vec3) -> Self {
        Self::new(
            self.x() + offset.x(),
            self.y() + offset.y(),
            self.z() + offset.z(),
        )
    }

    /// Translates the point by `-offset`.
    pub fn sub_vec(&self, offset: &Vec3) -> Self {
        Self::new(
            self.x() - offset.x(),
            self.y() - offset.y(),
            self.z() - offset.z(),
        )
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

    /// Largest coordinate.
    pub fn max_elem(&self) -> f32 {
        scalar::max(self.z(), scalar::max(self.x(), self.y()))
    }

    /// Smallest coordinate.
    pub fn min_elem(&self) -> f32 {
        scalar::min(self.z(), scalar::min(self.x(), self.y()))
    }

    /// Sum of the coordinates.
    pub fn sum(&self) -> f32 {
        self.x() + self.y() + self.z()
    }

    /// Uniform scale about the origin.
    pub fn scale(&self, factor: f32) -> Self {
        self.mul_per_elem(&Self::splat(factor))
    }

    /// Per-axis scale about the origin.
    pub fn non_uniform_scale(&self, factors: &Vec3) -> Self {
        self.mul_per_elem(&Self::from(*factors))
    }

    /// Signed distance of the point along `unit_vec`.
    pub fn projection(&self, unit_vec: &Vec3) -> f32 {
        let mut result = self.x() * unit_vec.x();
        result += self.y() * unit_vec.y();
        result += self.z() * unit_vec.z();
        result
    }

    /// Squared distance from the origin.
    pub fn dist_sqr_from_origin(&self) -> f32 {
        Vec3::from(*self).length_squared()
    }

    /// Distance from the origin.
    pub fn dist_from_origin(&self) -> f32 {
        Vec3::from(*self).length()
    }

    /// Squared distance to `other`.
    pub fn dist_sqr(&self, other: &Self) -> f32 {
        other.sub_point(self).length_squared()
    }

    /// Distance to `other`.
    pub fn dist(&self, other: &Self) -> f32 {
        other.sub_point(self).length()
    }

    /// Linear interpolation between two points.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.add_vec(&other.sub_point(self).scale(t))
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

impl From<[f32; 3]> for Point3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Point3> for [f32; 3] {
    fn from(value: Point3) -> Self {
        value.data
    }
}

impl Index<usize> for Point3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Point3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {:.6} {:.6} {:.6} )", self.x(), self.y(), self.z())
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_point(&rhs)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;
    fn add(self, rhs: Vec3) -> Self::Output {
        self.add_vec(&rhs)
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Self;
    fn sub(self, rhs: Vec3) -> Self::Output {
        self.sub_vec(&rhs)
    }
}

/// `vector + point` stays a vector.
impl Add<Point3> for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Point3) -> Self::Output {
        Vec3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl AddAssign<Vec3> for Point3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vec3> for Point3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}
