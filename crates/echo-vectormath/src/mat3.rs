// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{check_determinant, check_index, MathError};
use crate::scalar;
use crate::{Quat, Vec3};

/// Column-major 3×3 matrix: a linear map (rotation, scale, shear).
///
/// Columns are the images of the basis vectors, so `M * v` is
/// `col0 * v.x + col1 * v.y + col2 * v.z`. Element accessors take
/// `(col, row)` in that order.
///
/// # Examples
/// ```
/// use echo_vectormath::{Mat3, Vec3};
/// let m = Mat3::scale(Vec3::new(2.0, 3.0, 4.0));
/// assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 4.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    cols: [Vec3; 3],
}

impl Mat3 {
    /// Builds a matrix from its columns.
    pub const fn from_cols(col0: Vec3, col1: Vec3, col2: Vec3) -> Self {
        Self {
            cols: [col0, col1, col2],
        }
    }

    /// Broadcasts `scalar` into all nine elements.
    pub const fn splat(scalar: f32) -> Self {
        Self::from_cols(
            Vec3::splat(scalar),
            Vec3::splat(scalar),
            Vec3::splat(scalar),
        )
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::from_cols(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z)
    }

    /// Returns the matrix as a column-major array.
    pub fn to_cols_array(&self) -> [f32; 9] {
        let [a, b, c] = self.cols;
        [
            a.x(),
            a.y(),
            a.z(),
            b.x(),
            b.y(),
            b.z(),
            c.x(),
            c.y(),
            c.z(),
        ]
    }

    /// Column `index`.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn col(&self, index: usize) -> Vec3 {
        self.cols[index]
    }

    /// Checked column lookup.
    pub fn try_col(&self, index: usize) -> Result<Vec3, MathError> {
        check_index(index, 3).map(|i| self.cols[i])
    }

    /// Replaces column `index`.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn set_col(&mut self, index: usize, col: Vec3) {
        self.cols[index] = col;
    }

    /// Row `index`, gathered across the columns.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn row(&self, index: usize) -> Vec3 {
        Vec3::new(
            self.cols[0].elem(index),
            self.cols[1].elem(index),
            self.cols[2].elem(index),
        )
    }

    /// Scatters `row` into row `index`.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn set_row(&mut self, index: usize, row: Vec3) {
        self.cols[0].set_elem(index, row.x());
        self.cols[1].set_elem(index, row.y());
        self.cols[2].set_elem(index, row.z());
    }

    /// Element at `(col, row)`.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn elem(&self, col: usize, row: usize) -> f32 {
        self.cols[col].elem(row)
    }

    /// Overwrites the element at `(col, row)`.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn set_elem(&mut self, col: usize, row: usize, value: f32) {
        self.cols[col].set_elem(row, value);
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::from_cols(
            Vec3::new(c0.x(), c1.x(), c2.x()),
            Vec3::new(c0.y(), c1.y(), c2.y()),
            Vec3::new(c0.z(), c1.z(), c2.z()),
        )
    }

    /// Scalar triple product `col2 · (col0 × col1)`.
    pub fn determinant(&self) -> f32 {
        let [c0, c1, c2] = self.cols;
        c2.dot(&c0.cross(&c1))
    }

    /// Inverse via the adjugate (cross products of column pairs).
    ///
    /// There is no zero-determinant guard: a singular matrix yields
    /// infinities or NaNs. See [`Mat3::checked_inverse`].
    pub fn inverse(&self) -> Self {
        let [c0, c1, c2] = self.cols;
        let tmp0 = c1.cross(&c2);
        let tmp1 = c2.cross(&c0);
        let tmp2 = c0.cross(&c1);
        let det_inv = 1.0 / c2.dot(&tmp2);
        adjugate_columns(tmp0, tmp1, tmp2, det_inv)
    }

    /// Inverse that rejects singular input with [`MathError::Singular`].
    pub fn checked_inverse(&self) -> Result<Self, MathError> {
        check_determinant(self.determinant())?;
        Ok(self.inverse())
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Elementwise absolute value.
    pub fn abs_per_elem(&self) -> Self {
        self.map(|c| c.abs_per_elem())
    }

    /// Multiplies every element by `scalar`.
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        self.map(|c| c.scale(scalar))
    }

    /// Elementwise (Hadamard) product; not the matrix product.
    pub fn mul_per_elem(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a.mul_per_elem(&b))
    }

    /// Matrix-vector product `self * vec`.
    pub fn mul_vec3(&self, vec: &Vec3) -> Vec3 {
        let [c0, c1, c2] = self.cols;
        Vec3::new(
            c0.x() * vec.x() + c1.x() * vec.y() + c2.x() * vec.z(),
            c0.y() * vec.x() + c1.y() * vec.y() + c2.y() * vec.z(),
            c0.z() * vec.x() + c1.z() * vec.y() + c2.z() * vec.z(),
        )
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        rhs.map(|c| self.mul_vec3(&c))
    }

    /// Rotation of `angle` radians about +X.
    pub fn rotation_x(angle: f32) -> Self {
        let s = scalar::sin(angle);
        let c = scalar::cos(angle);
        Self::from_cols(Vec3::UNIT_X, Vec3::new(0.0, c, s), Vec3::new(0.0, -s, c))
    }

    /// Rotation of `angle` radians about +Y.
    pub fn rotation_y(angle: f32) -> Self {
        let s = scalar::sin(angle);
        let c = scalar::cos(angle);
        Self::from_cols(Vec3::new(c, 0.0, -s), Vec3::UNIT_Y, Vec3::new(s, 0.0, c))
    }

    /// Rotation of `angle` radians about +Z.
    pub fn rotation_z(angle: f32) -> Self {
        let s = scalar::sin(angle);
        let c = scalar::cos(angle);
        Self::from_cols(Vec3::new(c, s, 0.0), Vec3::new(-s, c, 0.0), Vec3::UNIT_Z)
    }

    /// Euler rotation `Rz(z) * Ry(y) * Rx(x)`: X is applied first.
    pub fn rotation_zyx(radians_xyz: Vec3) -> Self {
        let [c0, c1, c2] = rotation_zyx_cols(radians_xyz);
        Self::from_cols(c0, c1, c2)
    }

    /// Rotation of `angle` radians about `unit_axis` (Rodrigues' formula).
    pub fn rotation_axis(angle: f32, unit_axis: &Vec3) -> Self {
        let [c0, c1, c2] = rotation_axis_cols(angle, unit_axis);
        Self::from_cols(c0, c1, c2)
    }

    /// Rotation matrix for a unit quaternion; same as [`Mat3::from_quat`].
    pub fn rotation_quat(unit_quat: &Quat) -> Self {
        Self::from_quat(unit_quat)
    }

    /// Non-uniform scale along the axes.
    pub fn scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec3::new(scale.x(), 0.0, 0.0),
            Vec3::new(0.0, scale.y(), 0.0),
            Vec3::new(0.0, 0.0, scale.z()),
        )
    }

    /// `self * diag(scale)`: column `i` is multiplied by `scale[i]`.
    pub fn append_scale(&self, scale: &Vec3) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::from_cols(c0.scale(scale.x()), c1.scale(scale.y()), c2.scale(scale.z()))
    }

    /// `diag(scale) * mat`: row `i` is multiplied by `scale[i]`.
    pub fn prepend_scale(scale: &Vec3, mat: &Self) -> Self {
        mat.map(|c| c.mul_per_elem(scale))
    }

    /// Returns `b` when `select_b` is set, otherwise `a`.
    pub fn select(a: &Self, b: &Self, select_b: bool) -> Self {
        if select_b {
            *b
        } else {
            *a
        }
    }

    fn map(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::from_cols(f(c0), f(c1), f(c2))
    }

    fn zip(&self, other: &Self, f: impl Fn(Vec3, Vec3) -> Vec3) -> Self {
        Self::from_cols(
            f(self.cols[0], other.cols[0]),
            f(self.cols[1], other.cols[1]),
            f(self.cols[2], other.cols[2]),
        )
    }
}

/// Transposes the cross-product columns into the inverse and scales them.
pub(crate) fn adjugate_columns(tmp0: Vec3, tmp1: Vec3, tmp2: Vec3, det_inv: f32) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(tmp0.x() * det_inv, tmp1.x() * det_inv, tmp2.x() * det_inv),
        Vec3::new(tmp0.y() * det_inv, tmp1.y() * det_inv, tmp2.y() * det_inv),
        Vec3::new(tmp0.z() * det_inv, tmp1.z() * det_inv, tmp2.z() * det_inv),
    )
}

/// Columns of `Rz * Ry * Rx` with each sine/cosine evaluated once.
pub(crate) fn rotation_zyx_cols(radians_xyz: Vec3) -> [Vec3; 3] {
    let (s_x, c_x) = (scalar::sin(radians_xyz.x()), scalar::cos(radians_xyz.x()));
    let (s_y, c_y) = (scalar::sin(radians_xyz.y()), scalar::cos(radians_xyz.y()));
    let (s_z, c_z) = (scalar::sin(radians_xyz.z()), scalar::cos(radians_xyz.z()));
    let tmp0 = c_z * s_y;
    let tmp1 = s_z * s_y;
    [
        Vec3::new(c_z * c_y, s_z * c_y, -s_y),
        Vec3::new(tmp0 * s_x - s_z * c_x, tmp1 * s_x + c_z * c_x, c_y * s_x),
        Vec3::new(tmp0 * c_x + s_z * s_x, tmp1 * c_x - c_z * s_x, c_y * c_x),
    ]
}

/// Columns of `I cosθ + (1 - cosθ) a⊗a + sinθ [a]×`.
pub(crate) fn rotation_axis_cols(angle: f32, unit_axis: &Vec3) -> [Vec3; 3] {
    let s = scalar::sin(angle);
    let c = scalar::cos(angle);
    let (x, y, z) = (unit_axis.x(), unit_axis.y(), unit_axis.z());
    let xy = x * y;
    let yz = y * z;
    let zx = z * x;
    let one_minus_c = 1.0 - c;
    [
        Vec3::new(
            x * x * one_minus_c + c,
            xy * one_minus_c + z * s,
            zx * one_minus_c - y * s,
        ),
        Vec3::new(
            xy * one_minus_c - z * s,
            y * y * one_minus_c + c,
            yz * one_minus_c + x * s,
        ),
        Vec3::new(
            zx * one_minus_c + y * s,
            yz * one_minus_c - x * s,
            z * z * one_minus_c + c,
        ),
    ]
}

impl Vec3 {
    /// Outer product `self ⊗ other`: column `i` is `self * other[i]`.
    pub fn outer(&self, other: &Self) -> Mat3 {
        Mat3::from_cols(
            self.scale(other.x()),
            self.scale(other.y()),
            self.scale(other.z()),
        )
    }

    /// Row-vector product `selfᵀ * mat`.
    pub fn row_mul(&self, mat: &Mat3) -> Self {
        Self::new(self.dot(&mat.col(0)), self.dot(&mat.col(1)), self.dot(&mat.col(2)))
    }

    /// Skew-symmetric matrix `[self]×` with `[self]× * v == self × v`.
    pub fn cross_matrix(&self) -> Mat3 {
        Mat3::from_cols(
            Self::new(0.0, self.z(), -self.y()),
            Self::new(-self.z(), 0.0, self.x()),
            Self::new(self.y(), -self.x(), 0.0),
        )
    }

    /// `[self]× * mat`, computed column by column with cross products.
    pub fn cross_matrix_mul(&self, mat: &Mat3) -> Mat3 {
        mat.map(|c| self.cross(&c))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self::from_cols(
            Vec3::new(value[0], value[1], value[2]),
            Vec3::new(value[3], value[4], value[5]),
            Vec3::new(value[6], value[7], value[8]),
        )
    }
}

/// One transposed row per line.
impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.transpose();
        writeln!(f, "{}", t.cols[0])?;
        writeln!(f, "{}", t.cols[1])?;
        write!(f, "{}", t.cols[2])
    }
}

impl Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Mat3::add(&self, &rhs)
    }
}

impl Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Mat3::sub(&self, &rhs)
    }
}

impl Neg for Mat3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.mul_vec3(&rhs)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.mul_scalar(rhs)
    }
}
