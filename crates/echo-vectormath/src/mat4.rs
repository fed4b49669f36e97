// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{check_determinant, check_index, MathError};
use crate::mat3::{rotation_axis_cols, rotation_zyx_cols};
use crate::scalar;
use crate::{Mat3, Point3, Quat, Transform3, Vec3, Vec4};

/// Column-major 4×4 matrix for homogeneous transforms and projections.
///
/// * Points are treated as `(x, y, z, 1)`; vectors as `(x, y, z, 0)`.
/// * Multiplication order follows standard column-major linear algebra:
///   `self * other` applies `other` first, then `self`.
/// * The camera helpers ([`Mat4::look_at`], [`Mat4::perspective`],
///   [`Mat4::frustum`], [`Mat4::orthographic`]) produce right-handed,
///   OpenGL-style clip space (`z` in `[-1, 1]`, camera looking down `-Z`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat4 {
    /// Builds a matrix from its columns.
    pub const fn from_cols(col0: Vec4, col1: Vec4, col2: Vec4, col3: Vec4) -> Self {
        Self {
            cols: [col0, col1, col2, col3],
        }
    }

    /// Broadcasts `scalar` into all sixteen elements.
    pub const fn splat(scalar: f32) -> Self {
        Self::from_cols(
            Vec4::splat(scalar),
            Vec4::splat(scalar),
            Vec4::splat(scalar),
            Vec4::splat(scalar),
        )
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::from_cols(Vec4::UNIT_X, Vec4::UNIT_Y, Vec4::UNIT_Z, Vec4::UNIT_W)
    }

    /// Builds `[mat | translation]` with a `(0, 0, 0, 1)` bottom row.
    pub fn from_mat3_translation(mat: &Mat3, translation: Vec3) -> Self {
        Self::from_cols(
            Vec4::from_vec3_w(mat.col(0), 0.0),
            Vec4::from_vec3_w(mat.col(1), 0.0),
            Vec4::from_vec3_w(mat.col(2), 0.0),
            Vec4::from_vec3_w(translation, 1.0),
        )
    }

    /// Rotation by `unit_quat` followed by `translation`.
    pub fn from_quat_translation(unit_quat: &Quat, translation: Vec3) -> Self {
        Self::from_mat3_translation(&Mat3::from_quat(unit_quat), translation)
    }

    /// Returns the matrix as a column-major array.
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (chunk, col) in out.chunks_exact_mut(4).zip(self.cols) {
            chunk.copy_from_slice(&col.to_array());
        }
        out
    }

    /// Column `index`.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn col(&self, index: usize) -> Vec4 {
        self.cols[index]
    }

    /// Checked column lookup.
    pub fn try_col(&self, index: usize) -> Result<Vec4, MathError> {
        check_index(index, 4).map(|i| self.cols[i])
    }

    /// Replaces column `index`.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn set_col(&mut self, index: usize, col: Vec4) {
        self.cols[index] = col;
    }

    /// Row `index`, gathered across the columns.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn row(&self, index: usize) -> Vec4 {
        let [c0, c1, c2, c3] = self.cols;
        Vec4::new(c0[index], c1[index], c2[index], c3[index])
    }

    /// Replaces row `index`.
    ///
    /// # Panics
    /// Panics when `index > 3`.
    pub fn set_row(&mut self, index: usize, row: Vec4) {
        for (col, value) in self.cols.iter_mut().zip(row.to_array()) {
            col.set_elem(index, value);
        }
    }

    /// Element at `(col, row)`.
    ///
    /// # Panics
    /// Panics when either index exceeds 3.
    pub fn elem(&self, col: usize, row: usize) -> f32 {
        self.cols[col][row]
    }

    /// Overwrites the element at `(col, row)`.
    ///
    /// # Panics
    /// Panics when either index exceeds 3.
    pub fn set_elem(&mut self, col: usize, row: usize, value: f32) {
        self.cols[col][row] = value;
    }

    /// The upper-left 3×3 block.
    pub fn upper3x3(&self) -> Mat3 {
        let [c0, c1, c2, _] = self.cols;
        Mat3::from_cols(c0.xyz(), c1.xyz(), c2.xyz())
    }

    /// Overwrites the upper-left 3×3 block; the bottom row and column 3 stay.
    pub fn set_upper3x3(&mut self, mat: &Mat3) {
        for (index, col) in self.cols.iter_mut().take(3).enumerate() {
            col.set_xyz(mat.col(index));
        }
    }

    /// The `xyz` part of column 3.
    pub fn translation_part(&self) -> Vec3 {
        self.cols[3].xyz()
    }

    /// Overwrites the `xyz` part of column 3, keeping its `w`.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.cols[3].set_xyz(translation);
    }

    /// Pure translation.
    pub const fn translation(translation: Vec3) -> Self {
        Self::from_cols(
            Vec4::UNIT_X,
            Vec4::UNIT_Y,
            Vec4::UNIT_Z,
            Vec4::from_vec3_w(translation, 1.0),
        )
    }

    /// Non-uniform scale along the axes.
    pub const fn scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x(), 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y(), 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z(), 0.0),
            Vec4::UNIT_W,
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
        Self::from_cols(c0.into(), c1.into(), c2.into(), Vec4::UNIT_W)
    }

    /// Rotation of `angle` radians about `unit_axis`.
    pub fn rotation_axis(angle: f32, unit_axis: &Vec3) -> Self {
        let [c0, c1, c2] = rotation_axis_cols(angle, unit_axis);
        Self::from_cols(c0.into(), c1.into(), c2.into(), Vec4::UNIT_W)
    }

    /// Rotation for a unit quaternion; same as [`Mat4::from_quat`].
    pub fn rotation_quat(unit_quat: &Quat) -> Self {
        Self::from_quat(unit_quat)
    }

    /// `self * scale(v)`: columns 0..2 are scaled, column 3 is kept.
    pub fn append_scale(&self, scale: &Vec3) -> Self {
        let [c0, c1, c2, c3] = self.cols;
        Self::from_cols(
            c0.scale(scale.x()),
            c1.scale(scale.y()),
            c2.scale(scale.z()),
            c3,
        )
    }

    /// `scale(v) * mat`: every column is multiplied elementwise by `(v, 1)`.
    pub fn prepend_scale(scale: &Vec3, mat: &Self) -> Self {
        let scale4 = Vec4::from_vec3_w(*scale, 1.0);
        mat.map(|c| c.mul_per_elem(&scale4))
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Determinant by cofactor expansion along the first column.
    pub fn determinant(&self) -> f32 {
        let c = Cofactors::new(self);
        let res0 = c.first_column();
        c.m_a * res0.x() + c.m_e * res0.y() + c.m_i * res0.z() + c.m_m * res0.w()
    }

    /// General inverse via cofactors.
    ///
    /// There is no zero-determinant guard; a singular matrix produces
    /// infinities or NaNs. See [`Mat4::checked_inverse`], and prefer
    /// [`Mat4::affine_inverse`] or [`Mat4::ortho_inverse`] when the matrix
    /// is known to be affine or rigid.
    pub fn inverse(&self) -> Self {
        let c = Cofactors::new(self);
        let Cofactors {
            m_a,
            m_b,
            m_c,
            m_d,
            m_e,
            m_f,
            m_g,
            m_h,
            m_i,
            m_j,
            m_k,
            m_l,
            m_m,
            m_n,
            m_o,
            m_p,
            ..
        } = c;
        let res0 = c.first_column();
        let det_inv = 1.0 / (m_a * res0.x() + m_e * res0.y() + m_i * res0.z() + m_m * res0.w());

        let [tmp0, tmp1, tmp2, tmp3, tmp4, tmp5] = c.tmp;
        let mut res1 = Vec4::new(m_i * tmp1, m_m * tmp0, m_a * tmp1, m_e * tmp0);
        let mut res3 = Vec4::new(m_i * tmp3, m_m * tmp2, m_a * tmp3, m_e * tmp2);
        let mut res2 = Vec4::new(m_i * tmp5, m_m * tmp4, m_a * tmp5, m_e * tmp4);

        let tmp0 = m_i * m_b - m_a * m_j;
        let tmp1 = m_m * m_f - m_e * m_n;
        let tmp2 = m_i * m_d - m_a * m_l;
        let tmp3 = m_m * m_h - m_e * m_p;
        let tmp4 = m_i * m_c - m_a * m_k;
        let tmp5 = m_m * m_g - m_e * m_o;

        res2 = Vec4::new(
            (m_l * tmp1 - m_j * tmp3) + res2.x(),
            (m_p * tmp0 - m_n * tmp2) + res2.y(),
            (m_b * tmp3 - m_d * tmp1) - res2.z(),
            (m_f * tmp2 - m_h * tmp0) - res2.w(),
        );
        res3 = Vec4::new(
            (m_j * tmp5 - m_k * tmp1) + res3.x(),
            (m_n * tmp4 - m_o * tmp0) + res3.y(),
            (m_c * tmp1 - m_b * tmp5) - res3.z(),
            (m_g * tmp0 - m_f * tmp4) - res3.w(),
        );
        res1 = Vec4::new(
            (m_k * tmp3 - m_l * tmp5) - res1.x(),
            (m_o * tmp2 - m_p * tmp4) - res1.y(),
            (m_d * tmp5 - m_c * tmp3) + res1.z(),
            (m_h * tmp4 - m_g * tmp2) + res1.w(),
        );

        Self::from_cols(
            res0.scale(det_inv),
            res1.scale(det_inv),
            res2.scale(det_inv),
            res3.scale(det_inv),
        )
    }

    /// Inverse that rejects singular input with [`MathError::Singular`].
    pub fn checked_inverse(&self) -> Result<Self, MathError> {
        check_determinant(self.determinant())?;
        Ok(self.inverse())
    }

    /// Inverse of an affine matrix (bottom row `(0, 0, 0, 1)`).
    ///
    /// The bottom row of the input is ignored and the result always has a
    /// `(0, 0, 0, 1)` bottom row.
    pub fn affine_inverse(&self) -> Self {
        Self::from(Transform3::from_mat4_affine(self).inverse())
    }

    /// Inverse of a rigid transform (orthonormal upper 3×3 plus translation).
    ///
    /// Cheaper than [`Mat4::affine_inverse`]; the result is meaningless when
    /// the upper 3×3 is not orthonormal.
    pub fn ortho_inverse(&self) -> Self {
        Self::from(Transform3::from_mat4_affine(self).ortho_inverse())
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

    /// Elementwise (Hadamard) product.
    pub fn mul_per_elem(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a.mul_per_elem(&b))
    }

    /// Matrix-vector product `self * vec`.
    pub fn mul_vec4(&self, vec: &Vec4) -> Vec4 {
        let [c0, c1, c2, c3] = self.cols;
        c0.scale(vec.x()) + c1.scale(vec.y()) + c2.scale(vec.z()) + c3.scale(vec.w())
    }

    /// Transforms a direction: `vec` is treated as `(x, y, z, 0)`.
    pub fn mul_vec3(&self, vec: &Vec3) -> Vec4 {
        let [c0, c1, c2, _] = self.cols;
        c0.scale(vec.x()) + c1.scale(vec.y()) + c2.scale(vec.z())
    }

    /// Transforms a position: `point` is treated as `(x, y, z, 1)`.
    ///
    /// The result keeps its `w` so callers can perform the perspective divide.
    pub fn mul_point3(&self, point: &Point3) -> Vec4 {
        let [c0, c1, c2, c3] = self.cols;
        c0.scale(point.x()) + c1.scale(point.y()) + c2.scale(point.z()) + c3
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        rhs.map(|c| self.mul_vec4(&c))
    }

    /// `self * Mat4::from(*tfrm)` without materialising the promoted matrix.
    pub fn mul_transform3(&self, tfrm: &Transform3) -> Self {
        Self::from_cols(
            self.mul_vec3(&tfrm.col(0)),
            self.mul_vec3(&tfrm.col(1)),
            self.mul_vec3(&tfrm.col(2)),
            self.mul_point3(&Point3::from(tfrm.col(3))),
        )
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Builds the orthonormal camera frame (`z` points from `target` to
    /// `eye`) and returns its rigid inverse. `up` must not be parallel to
    /// the view direction.
    ///
    /// # Examples
    /// ```
    /// use echo_vectormath::{Mat4, Point3, Vec3};
    /// let view = Mat4::look_at(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, Vec3::UNIT_Y);
    /// let p = view.mul_point3(&Point3::ORIGIN);
    /// assert!((p.z() + 5.0).abs() < 1e-6);
    /// ```
    pub fn look_at(eye: Point3, target: Point3, up: Vec3) -> Self {
        let y = up.normalize();
        let z = (eye - target).normalize();
        let x = y.cross(&z).normalize();
        let y = z.cross(&x);
        let eye_frame = Self::from_cols(x.into(), y.into(), z.into(), eye.into());
        eye_frame.ortho_inverse()
    }

    /// Perspective projection from a vertical field of view (radians).
    ///
    /// `f = tan(π/2 - fovy/2)` and the depth range maps `[-near, -far]` to
    /// `[-1, 1]`. `near == far` or `aspect == 0` yields infinities.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = scalar::tan(scalar::FRAC_PI_2 - 0.5 * fovy);
        let range_inv = 1.0 / (near - far);
        Self::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (near + far) * range_inv, -1.0),
            Vec4::new(0.0, 0.0, near * far * range_inv * 2.0, 0.0),
        )
    }

    /// Perspective projection for an off-centre view volume.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let sum_rl = right + left;
        let sum_tb = top + bottom;
        let sum_nf = near + far;
        let inv_rl = 1.0 / (right - left);
        let inv_tb = 1.0 / (top - bottom);
        let inv_nf = 1.0 / (near - far);
        let n2 = near + near;
        Self::from_cols(
            Vec4::new(n2 * inv_rl, 0.0, 0.0, 0.0),
            Vec4::new(0.0, n2 * inv_tb, 0.0, 0.0),
            Vec4::new(sum_rl * inv_rl, sum_tb * inv_tb, sum_nf * inv_nf, -1.0),
            Vec4::new(0.0, 0.0, n2 * inv_nf * far, 0.0),
        )
    }

    /// Orthographic projection of the box `[left, right] × [bottom, top] ×
    /// [-near, -far]` onto the `[-1, 1]` cube.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let sum_rl = right + left;
        let sum_tb = top + bottom;
        let sum_nf = near + far;
        let inv_rl = 1.0 / (right - left);
        let inv_tb = 1.0 / (top - bottom);
        let inv_nf = 1.0 / (near - far);
        Self::from_cols(
            Vec4::new(inv_rl + inv_rl, 0.0, 0.0, 0.0),
            Vec4::new(0.0, inv_tb + inv_tb, 0.0, 0.0),
            Vec4::new(0.0, 0.0, inv_nf + inv_nf, 0.0),
            Vec4::new(-sum_rl * inv_rl, -sum_tb * inv_tb, sum_nf * inv_nf, 1.0),
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

    fn map(&self, f: impl Fn(Vec4) -> Vec4) -> Self {
        let [c0, c1, c2, c3] = self.cols;
        Self::from_cols(f(c0), f(c1), f(c2), f(c3))
    }

    fn zip(&self, other: &Self, f: impl Fn(Vec4, Vec4) -> Vec4) -> Self {
        Self::from_cols(
            f(self.cols[0], other.cols[0]),
            f(self.cols[1], other.cols[1]),
            f(self.cols[2], other.cols[2]),
            f(self.cols[3], other.cols[3]),
        )
    }
}

/// Named elements plus the six 2×2 minors shared by `determinant` and
/// `inverse`.
///
/// Elements are lettered column by column: `a..d` is column 0, `m..p` is
/// column 3.
#[derive(Clone, Copy)]
struct Cofactors {
    m_a: f32,
    m_b: f32,
    m_c: f32,
    m_d: f32,
    m_e: f32,
    m_f: f32,
    m_g: f32,
    m_h: f32,
    m_i: f32,
    m_j: f32,
    m_k: f32,
    m_l: f32,
    m_m: f32,
    m_n: f32,
    m_o: f32,
    m_p: f32,
    tmp: [f32; 6],
}

impl Cofactors {
    fn new(mat: &Mat4) -> Self {
        let [m_a, m_b, m_c, m_d] = mat.cols[0].to_array();
        let [m_e, m_f, m_g, m_h] = mat.cols[1].to_array();
        let [m_i, m_j, m_k, m_l] = mat.cols[2].to_array();
        let [m_m, m_n, m_o, m_p] = mat.cols[3].to_array();
        let tmp = [
            m_k * m_d - m_c * m_l,
            m_o * m_h - m_g * m_p,
            m_b * m_k - m_j * m_c,
            m_f * m_o - m_n * m_g,
            m_j * m_d - m_b * m_l,
            m_n * m_h - m_f * m_p,
        ];
        Self {
            m_a,
            m_b,
            m_c,
            m_d,
            m_e,
            m_f,
            m_g,
            m_h,
            m_i,
            m_j,
            m_k,
            m_l,
            m_m,
            m_n,
            m_o,
            m_p,
            tmp,
        }
    }

    /// First column of the adjugate; dotted with column 0 it is the determinant.
    fn first_column(&self) -> Vec4 {
        let [tmp0, tmp1, tmp2, tmp3, tmp4, tmp5] = self.tmp;
        Vec4::new(
            (self.m_j * tmp1 - self.m_l * tmp3) - self.m_k * tmp5,
            (self.m_n * tmp0 - self.m_p * tmp2) - self.m_o * tmp4,
            (self.m_d * tmp3 + self.m_c * tmp5) - self.m_b * tmp1,
            (self.m_h * tmp2 + self.m_g * tmp4) - self.m_f * tmp0,
        )
    }
}

impl Vec4 {
    /// Outer product `self ⊗ other`: column `i` is `self * other[i]`.
    pub fn outer(&self, other: &Self) -> Mat4 {
        Mat4::from_cols(
            self.scale(other.x()),
            self.scale(other.y()),
            self.scale(other.z()),
            self.scale(other.w()),
        )
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::from_cols(
            Vec4::new(value[0], value[1], value[2], value[3]),
            Vec4::new(value[4], value[5], value[6], value[7]),
            Vec4::new(value[8], value[9], value[10], value[11]),
            Vec4::new(value[12], value[13], value[14], value[15]),
        )
    }
}

/// Promotes an affine transform with a `(0, 0, 0, 1)` bottom row.
impl From<Transform3> for Mat4 {
    fn from(value: Transform3) -> Self {
        Self::from_cols(
            Vec4::from_vec3_w(value.col(0), 0.0),
            Vec4::from_vec3_w(value.col(1), 0.0),
            Vec4::from_vec3_w(value.col(2), 0.0),
            Vec4::from_vec3_w(value.col(3), 1.0),
        )
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.row(0))?;
        writeln!(f, "{}", self.row(1))?;
        writeln!(f, "{}", self.row(2))?;
        write!(f, "{}", self.row(3))
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Mat4::add(&self, &rhs)
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Mat4::sub(&self, &rhs)
    }
}

impl Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.mul_vec4(&rhs)
    }
}

impl Mul<Point3> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Point3) -> Self::Output {
        self.mul_point3(&rhs)
    }
}

impl Mul<Transform3> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Transform3) -> Self::Output {
        self.mul_transform3(&rhs)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.mul_scalar(rhs)
    }
}
