// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Errors for the checked entry points.
//!
//! The arithmetic surface never fails: division by zero, zero-length
//! normalisation, and singular inversion propagate IEEE-754 infinities and
//! NaNs. Only the opt-in `try_*` / `checked_*` helpers report problems, and
//! they do so through [`MathError`].

use thiserror::Error;

/// Error returned by the checked accessors and checked inversions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A component, column, or row index was outside the type's extent.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of addressable slots.
        len: usize,
    },
    /// The matrix determinant was zero or not finite.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant that failed the check.
        determinant: f32,
    },
    /// Normalisation was requested for a zero-length (or non-finite) value.
    #[error("cannot normalize a zero-length value")]
    ZeroLength,
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, MathError> {
    if index < len {
        Ok(index)
    } else {
        tracing::debug!(index, len, "checked index out of range");
        Err(MathError::IndexOutOfRange { index, len })
    }
}

pub(crate) fn check_determinant(determinant: f32) -> Result<f32, MathError> {
    if determinant != 0.0 && determinant.is_finite() {
        Ok(determinant)
    } else {
        tracing::debug!(determinant, "rejecting singular matrix");
        Err(MathError::Singular { determinant })
    }
}

pub(crate) fn check_length_squared(length_squared: f32) -> Result<f32, MathError> {
    if length_squared > 0.0 && length_squared.is_finite() {
        Ok(length_squared)
    } else {
        tracing::debug!(length_squared, "rejecting zero-length normalisation");
        Err(MathError::ZeroLength)
    }
}
