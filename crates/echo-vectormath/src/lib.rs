// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-vectormath: scalar single-precision 3D math.
//!
//! Vectors, points, quaternions, 3×3/4×4 matrices and 3×4 affine transforms
//! with the operations real-time graphics code leans on: cofactor and
//! rigid/affine inversion, quaternion⇄matrix conversion, slerp, and the
//! look-at / perspective / frustum / orthographic builders.
//!
//! Conventions:
//! * Storage is column-major; `M * v` treats `v` as a column vector.
//! * Angles are radians. Frames are right-handed.
//! * [`Vec3`] is a direction (unaffected by translation) and [`Point3`] a
//!   position. Promoting to [`Vec4`] gives `w = 0` and `w = 1` respectively.
//! * Nothing here fails: division by zero, normalising the zero vector, and
//!   inverting a singular matrix propagate IEEE-754 infinities/NaNs. The
//!   `try_*` and `checked_*` helpers report those cases as [`MathError`].
//!
//! # Examples
//! ```
//! use echo_vectormath::{Mat4, Point3, Quat, Vec3};
//!
//! let spin = Quat::rotation_y(core::f32::consts::FRAC_PI_2);
//! let model = Mat4::from_quat_translation(&spin, Vec3::new(0.0, 0.0, -10.0));
//! let clip = Mat4::perspective(1.0, 16.0 / 9.0, 0.1, 100.0) * model;
//! let p = clip.mul_point3(&Point3::new(0.0, 0.0, 1.0));
//! assert!(p.w() > 0.0);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::use_self
)]

mod convert;
mod error;
mod mat3;
mod mat4;
mod point3;
mod quat;
/// Scalar `f32` helpers backed by `libm`.
pub mod scalar;
mod transform3;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use point3::Point3;
pub use quat::Quat;
pub use transform3::Transform3;
pub use vec3::Vec3;
pub use vec4::Vec4;
