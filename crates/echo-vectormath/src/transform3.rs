// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use crate::error::{check_determinant, check_index, MathError};
use crate::mat3::{adjugate_columns, rotation_axis_cols, rotation_zyx_cols};
use crate::{Mat3, Mat4, Point3, Quat, Vec3, Vec4};

/// Affine transform stored as a 3×4 column-major matrix.
///
/// Columns 0..2 are the linear part and column 3 is the translation; the
/// implicit bottom row is `(0, 0, 0, 1)`. Compared with [`Mat4`] this saves
/// the bottom row and lets [`Transform3::inverse`] skip the full 4×4
/// cofactor expansion.
///
/// # Examples
/// ```
/// use echo_vectormath::{Point3, Transform3, Vec3};
/// let t = Transform3::translation(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(t.mul_point3(&Point3::ORIGIN), Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(t.mul_vec3(&Vec3::UNIT_X), Vec3::UNIT_X);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform3 {
    cols: [Vec3; 4],
}

impl Transform3 {
    /// Builds a transform from its four columns.
    pub const fn from_cols(col0: Vec3, col1: Vec3, col2: Vec3, col3: Vec3) -> Self {
        Self {
            cols: [col0, col1, col2, col3],
        }
    }

    /// Broadcasts `scalar` into all twelve elements.
    pub const fn splat(scalar: f32) -> Self {
        Self::from_cols(
            Vec3::splat(scalar),
            Vec3::splat(scalar),
            Vec3::splat(scalar),
            Vec3::splat(scalar),
        )
    }

    /// Identity: unit axes and zero translation.
    pub const fn identity() -> Self {
        Self::from_cols(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z, Vec3::ZERO)
    }

    /// Linear part `mat` followed by `translation`.
    pub fn from_mat3_translation(mat: &Mat3, translation: Vec3) -> Self {
        Self::from_cols(mat.col(0), mat.col(1), mat.col(2), translation)
    }

    /// Rotation by `unit_quat` followed by `translation`.
    pub fn from_quat_translation(unit_quat: &Quat, translation: Vec3) -> Self {
        Self::from_mat3_translation(&Mat3::from_quat(unit_quat), translation)
    }

    /// Keeps the upper 3×4 block of `mat`, dropping its bottom row.
    pub fn from_mat4_affine(mat: &Mat4) -> Self {
        Self::from_cols(
            mat.col(0).xyz(),
            mat.col(1).xyz(),
            mat.col(2).xyz(),
            mat.col(3).xyz(),
        )
    }

    /// Returns the transform as a column-major array.
    pub fn to_cols_array(&self) -> [f32; 12] {
        let mut out = [0.0; 12];
        for (chunk, col) in out.chunks_exact_mut(3).zip(self.cols) {
            chunk.copy_from_slice(&col.to_array());
        }
        out
    }

    /// Column `index`; column 3 is the translation.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn col(&self, index: usize) -> Vec3 {
        self.cols[index]
    }

    /// Checked column lookup.
    pub fn try_col(&self, index: usize) -> Result<Vec3, MathError> {
        check_index(index, 4).map(|i| self.cols[i])
    }

    /// Replaces column `index`.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn set_col(&mut self, index: usize, col: Vec3) {
        self.cols[index] = col;
    }

    /// Row `index` as a 4-tuple (three linear terms then the translation).
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn row(&self, index: usize) -> Vec4 {
        let [c0, c1, c2, c3] = self.cols;
        Vec4::new(c0[index], c1[index], c2[index], c3[index])
    }

    /// Replaces row `index`.
    ///
    /// # Panics
    /// Panics when `index > 2`.
    pub fn set_row(&mut self, index: usize, row: Vec4) {
        for (col, value) in self.cols.iter_mut().zip(row.to_array()) {
            col.set_elem(index, value);
        }
    }

    /// Element at `(col, row)`.
    ///
    /// # Panics
    /// Panics when `col > 3` or `row > 2`.
    pub fn elem(&self, col: usize, row: usize) -> f32 {
        self.cols[col][row]
    }

    /// Overwrites the element at `(col, row)`.
    ///
    /// # Panics
    /// Panics when `col > 3` or `row > 2`.
    pub fn set_elem(&mut self, col: usize, row: usize, value: f32) {
        self.cols[col][row] = value;
    }

    /// Linear part.
    pub fn upper3x3(&self) -> Mat3 {
        let [c0, c1, c2, _] = self.cols;
        Mat3::from_cols(c0, c1, c2)
    }

    /// Replaces the linear part, keeping the translation.
    pub fn set_upper3x3(&mut self, mat: &Mat3) {
        for (index, col) in self.cols.iter_mut().take(3).enumerate() {
            *col = mat.col(index);
        }
    }

    /// Translation column.
    pub fn translation_part(&self) -> Vec3 {
        self.cols[3]
    }

    /// Replaces the translation column.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.cols[3] = translation;
    }

    /// Pure translation.
    pub const fn translation(translation: Vec3) -> Self {
        Self::from_cols(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z, translation)
    }

    /// Non-uniform scale with zero translation.
    pub const fn scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec3::new(scale.x(), 0.0, 0.0),
            Vec3::new(0.0, scale.y(), 0.0),
            Vec3::new(0.0, 0.0, scale.z()),
            Vec3::ZERO,
        )
    }

    /// Rotation of `angle` radians about +X.
    pub fn rotation_x(angle: f32) -> Self {
        Self::from_mat3_translation(&Mat3::rotation_x(angle), Vec3::ZERO)
    }

    /// Rotation of `angle` radians about +Y.
    pub fn rotation_y(angle: f32) -> Self {
        Self::from_mat3_translation(&Mat3::rotation_y(angle), Vec3::ZERO)
    }

    /// Rotation of `angle` radians about +Z.
    pub fn rotation_z(angle: f32) -> Self {
        Self::from_mat3_translation(&Mat3::rotation_z(angle), Vec3::ZERO)
    }

    /// Euler rotation `Rz(z) * Ry(y) * Rx(x)`.
    pub fn rotation_zyx(radians_xyz: Vec3) -> Self {
        let [c0, c1, c2] = rotation_zyx_cols(radians_xyz);
        Self::from_cols(c0, c1, c2, Vec3::ZERO)
    }

    /// Rotation of `angle` radians about `unit_axis`.
    pub fn rotation_axis(angle: f32, unit_axis: &Vec3) -> Self {
        let [c0, c1, c2] = rotation_axis_cols(angle, unit_axis);
        Self::from_cols(c0, c1, c2, Vec3::ZERO)
    }

    /// Rotation for a unit quaternion.
    pub fn rotation_quat(unit_quat: &Quat) -> Self {
        Self::from_quat_translation(unit_quat, Vec3::ZERO)
    }

    /// `self * scale(v)`: linear columns scaled, translation kept.
    pub fn append_scale(&self, scale: &Vec3) -> Self {
        let [c0, c1, c2, c3] = self.cols;
        Self::from_cols(
            c0.scale(scale.x()),
            c1.scale(scale.y()),
            c2.scale(scale.z()),
            c3,
        )
    }

    /// `scale(v) * tfrm`: every column, translation included, is scaled
    /// elementwise by `v`.
    pub fn prepend_scale(scale: &Vec3, tfrm: &Self) -> Self {
        tfrm.map(|c| c.mul_per_elem(scale))
    }

    /// General affine inverse.
    ///
    /// The linear part is inverted through cross products of its columns and
    /// the translation becomes `-(inv * t)`. A singular linear part yields
    /// infinities or NaNs; see [`Transform3::checked_inverse`].
    pub fn inverse(&self) -> Self {
        let [c0, c1, c2, _] = self.cols;
        let tmp0 = c1.cross(&c2);
        let tmp1 = c2.cross(&c0);
        let tmp2 = c0.cross(&c1);
        let det_inv = 1.0 / c2.dot(&tmp2);
        self.with_inverse_linear(&adjugate_columns(tmp0, tmp1, tmp2, det_inv))
    }

    /// Inverse that rejects a singular linear part with [`MathError::Singular`].
    pub fn checked_inverse(&self) -> Result<Self, MathError> {
        check_determinant(self.upper3x3().determinant())?;
        Ok(self.inverse())
    }

    /// Inverse of a rigid transform: transposes the linear part.
    ///
    /// Only valid when the linear part is orthonormal.
    pub fn ortho_inverse(&self) -> Self {
        self.with_inverse_linear(&self.upper3x3().transpose())
    }

    fn with_inverse_linear(&self, inv: &Mat3) -> Self {
        let t = self.cols[3];
        let (inv0, inv1, inv2) = (inv.col(0), inv.col(1), inv.col(2));
        let translation = -(inv0.scale(t.x()) + (inv1.scale(t.y()) + inv2.scale(t.z())));
        Self::from_cols(inv0, inv1, inv2, translation)
    }

    /// Elementwise absolute value.
    pub fn abs_per_elem(&self) -> Self {
        self.map(|c| c.abs_per_elem())
    }

    /// Elementwise product of every column.
    pub fn mul_per_elem(&self, other: &Self) -> Self {
        Self::from_cols(
            self.cols[0].mul_per_elem(&other.cols[0]),
            self.cols[1].mul_per_elem(&other.cols[1]),
            self.cols[2].mul_per_elem(&other.cols[2]),
            self.cols[3].mul_per_elem(&other.cols[3]),
        )
    }

    /// Applies the linear part only.
    pub fn mul_vec3(&self, vec: &Vec3) -> Vec3 {
        let [c0, c1, c2, _] = self.cols;
        c0.scale(vec.x()) + c1.scale(vec.y()) + c2.scale(vec.z())
    }

    /// Applies the linear part then the translation.
    pub fn mul_point3(&self, point: &Point3) -> Point3 {
        let moved = self.mul_vec3(&Vec3::from(*point)) + self.cols[3];
        Point3::from(moved)
    }

    /// Composition `self * rhs`: `rhs` is applied first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let [c0, c1, c2, c3] = rhs.cols;
        Self::from_cols(
            self.mul_vec3(&c0),
            self.mul_vec3(&c1),
            self.mul_vec3(&c2),
            Vec3::from(self.mul_point3(&Point3::from(c3))),
        )
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
        let [c0, c1, c2, c3] = self.cols;
        Self::from_cols(f(c0), f(c1), f(c2), f(c3))
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 12]> for Transform3 {
    fn from(value: [f32; 12]) -> Self {
        Self::from_cols(
            Vec3::new(value[0], value[1], value[2]),
            Vec3::new(value[3], value[4], value[5]),
            Vec3::new(value[6], value[7], value[8]),
            Vec3::new(value[9], value[10], value[11]),
        )
    }
}

/// Three rows, each printed as a 4-tuple.
impl fmt::Display for Transform3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.row(0))?;
        writeln!(f, "{}", self.row(1))?;
        write!(f, "{}", self.row(2))
    }
}

impl Mul for Transform3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Transform3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.mul_vec3(&rhs)
    }
}

impl Mul<Point3> for Transform3 {
    type Output = Point3;
    fn mul(self, rhs: Point3) -> Self::Output {
        self.mul_point3(&rhs)
    }
}
