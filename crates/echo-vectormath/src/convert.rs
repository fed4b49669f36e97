// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Conversions between the value types.
//!
//! Quaternion⇄matrix conversion lives here together with the cheap
//! promotions and demotions (vector⇄point, 3⇄4 components).

use crate::scalar;
use crate::{Mat3, Mat4, Point3, Quat, Vec3, Vec4};

impl Quat {
    /// Extracts the rotation from an orthonormal 3×3 matrix.
    ///
    /// Selects the branch by the largest diagonal term so the square root is
    /// always taken of the largest available radicand (never near zero, even
    /// for half-turns where `trace ≈ -1`). The result may be `q` or `-q`;
    /// both describe the same rotation.
    ///
    /// # Examples
    /// ```
    /// use echo_vectormath::{Mat3, Quat};
    /// let q = Quat::from_mat3(&Mat3::identity());
    /// assert_eq!(q, Quat::identity());
    /// ```
    pub fn from_mat3(mat: &Mat3) -> Self {
        let (c0, c1, c2) = (mat.col(0), mat.col(1), mat.col(2));
        let (mut xx, yx, mut zx) = (c0.x(), c0.y(), c0.z());
        let (mut xy, mut yy, zy) = (c1.x(), c1.y(), c1.z());
        let (xz, mut yz, mut zz) = (c2.x(), c2.y(), c2.z());

        let trace = xx + yy + zz;
        let neg_trace = trace < 0.0;
        let z_gt_x = zz > xx;
        let z_gt_y = zz > yy;
        let y_gt_x = yy > xx;
        let largest_x_or_y = (!z_gt_x || !z_gt_y) && neg_trace;
        let largest_y_or_z = (y_gt_x || z_gt_x) && neg_trace;
        let largest_z_or_x = (z_gt_y || !y_gt_x) && neg_trace;

        if largest_x_or_y {
            zz = -zz;
            xy = -xy;
        }
        if largest_y_or_z {
            xx = -xx;
            yz = -yz;
        }
        if largest_z_or_x {
            yy = -yy;
            zx = -zx;
        }

        let radicand = xx + yy + zz + 1.0;
        let scale = 0.5 * (1.0 / scalar::sqrt(radicand));
        let tmp_x = (zy - yz) * scale;
        let tmp_y = (xz - zx) * scale;
        let tmp_z = (yx - xy) * scale;
        let tmp_w = radicand * scale;

        let (mut qx, mut qy, mut qz, mut qw) = (tmp_x, tmp_y, tmp_z, tmp_w);
        if largest_x_or_y {
            (qx, qy, qz, qw) = (tmp_w, tmp_z, tmp_y, tmp_x);
        }
        if largest_y_or_z {
            (qx, qy, qz, qw) = (qy, qx, qw, qz);
        }
        Self::new(qx, qy, qz, qw)
    }
}

impl Mat3 {
    /// Rotation matrix for a unit quaternion.
    ///
    /// Expands `1 - 2(y² + z²)` and friends with the doubled products shared.
    pub fn from_quat(unit_quat: &Quat) -> Self {
        let [c0, c1, c2] = quat_cols(unit_quat);
        Self::from_cols(c0, c1, c2)
    }
}

impl Mat4 {
    /// Rotation for a unit quaternion with zero translation.
    pub fn from_quat(unit_quat: &Quat) -> Self {
        let [c0, c1, c2] = quat_cols(unit_quat);
        Self::from_cols(c0.into(), c1.into(), c2.into(), Vec4::UNIT_W)
    }
}

fn quat_cols(unit_quat: &Quat) -> [Vec3; 3] {
    let (qx, qy, qz, qw) = (unit_quat.x(), unit_quat.y(), unit_quat.z(), unit_quat.w());
    let qx2 = qx + qx;
    let qy2 = qy + qy;
    let qz2 = qz + qz;
    let qxqx2 = qx * qx2;
    let qxqy2 = qx * qy2;
    let qxqz2 = qx * qz2;
    let qxqw2 = qw * qx2;
    let qyqy2 = qy * qy2;
    let qyqz2 = qy * qz2;
    let qyqw2 = qw * qy2;
    let qzqz2 = qz * qz2;
    let qzqw2 = qw * qz2;
    [
        Vec3::new((1.0 - qyqy2) - qzqz2, qxqy2 + qzqw2, qxqz2 - qyqw2),
        Vec3::new(qxqy2 - qzqw2, (1.0 - qxqx2) - qzqz2, qyqz2 + qxqw2),
        Vec3::new(qxqz2 + qyqw2, qyqz2 - qxqw2, (1.0 - qxqx2) - qyqy2),
    ]
}

impl From<Point3> for Vec3 {
    fn from(value: Point3) -> Self {
        Self::new(value.x(), value.y(), value.z())
    }
}

impl From<Vec3> for Point3 {
    fn from(value: Vec3) -> Self {
        Self::new(value.x(), value.y(), value.z())
    }
}

/// Promotes a position: `w = 1`.
impl From<Point3> for Vec4 {
    fn from(value: Point3) -> Self {
        Self::new(value.x(), value.y(), value.z(), 1.0)
    }
}

impl From<Quat> for Vec4 {
    fn from(value: Quat) -> Self {
        Self::from(value.to_array())
    }
}

impl From<Vec4> for Quat {
    fn from(value: Vec4) -> Self {
        Self::from(value.to_array())
    }
}

impl From<Quat> for Mat3 {
    fn from(value: Quat) -> Self {
        Self::from_quat(&value)
    }
}

impl From<Mat3> for Quat {
    fn from(value: Mat3) -> Self {
        Self::from_mat3(&value)
    }
}
