//! ARKit pose to Z-up camera pose conversion.
//!
//! # Translation lives in row 3 of the input
//!
//! Captured poses arrive as 16 values that are assembled row by row. The capture
//! side writes every basis column of the pose as one row, so the translation
//! ends up in **row 3** (`values[12..15]`), not column 3. The converter reads it
//! from there. Treating the assembled matrix as if it already held the pose
//! silently produces a transposed transform whose translation is lost.
//!
//! With the pose `P` recovered from the assembled matrix, the converted pose is
//!
//! ```text
//! result = (B * P) * Rx(180°)
//! ```
//!
//! where `B` is [`BASIS_CHANGE`] (applied on the left) and `Rx(180°)` is
//! [`CAMERA_FLIP`] (applied on the right). The order matters.

use crate::convention::{BASIS_CHANGE, CAMERA_FLIP};
use crate::error::{PoseBridgeError, Result};
use crate::matrix::{PoseMatrix, MATRIX_LEN};

/// Default threshold below which a rotation block counts as singular.
pub const DEFAULT_DEGENERATE_TOLERANCE: f64 = 1e-6;

/// Converts one ARKit pose (16 row-major values) into a Z-up camera pose.
///
/// # Errors
///
/// Returns [`PoseBridgeError::InvalidInput`] when `values` does not hold exactly
/// 16 finite numbers.
pub fn convert_pose(values: &[f64]) -> Result<PoseMatrix> {
    let assembled = assemble(values)?;
    Ok(convert_assembled(&assembled))
}

/// Inverse of [`convert_pose`]: recovers the 16 source values from a converted pose.
#[must_use]
pub fn unconvert_pose(converted: &PoseMatrix) -> [f64; MATRIX_LEN] {
    // Both B and the flip are orthonormal; the flip is its own inverse.
    let pose = BASIS_CHANGE.transpose() * *converted * CAMERA_FLIP;
    pose.transpose().to_row_major()
}

/// Converts every frame independently.
///
/// One malformed frame yields an error in its own slot and nothing else.
pub fn convert_batch<'a, I>(frames: I) -> Vec<Result<PoseMatrix>>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    frames.into_iter().map(convert_pose).collect()
}

/// Pose converter with an optional singularity check.
#[derive(Debug, Clone, Copy)]
pub struct PoseConverter {
    /// Rotation blocks with `|det| <` this value are rejected. Zero disables the check.
    pub degenerate_tolerance: f64,
}

impl Default for PoseConverter {
    fn default() -> Self {
        Self {
            degenerate_tolerance: DEFAULT_DEGENERATE_TOLERANCE,
        }
    }
}

impl PoseConverter {
    /// Creates a converter with the given singularity threshold.
    pub fn new(degenerate_tolerance: f64) -> Self {
        Self {
            degenerate_tolerance,
        }
    }

    /// Converts one pose, also rejecting near-singular rotation blocks.
    ///
    /// # Errors
    ///
    /// [`PoseBridgeError::InvalidInput`] as for [`convert_pose`], and
    /// [`PoseBridgeError::DegenerateTransform`] when the rotation block's
    /// determinant is below the tolerance.
    pub fn convert(&self, values: &[f64]) -> Result<PoseMatrix> {
        let assembled = assemble(values)?;

        let determinant = assembled.determinant3();
        if determinant.abs() < self.degenerate_tolerance {
            return Err(PoseBridgeError::DegenerateTransform { determinant });
        }

        Ok(convert_assembled(&assembled))
    }
}

fn assemble(values: &[f64]) -> Result<PoseMatrix> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(PoseBridgeError::invalid_input(format!(
            "value {index} is not finite ({})",
            values[index]
        )));
    }
    PoseMatrix::from_row_major(values)
}

fn convert_assembled(assembled: &PoseMatrix) -> PoseMatrix {
    // Row 3 of `assembled` becomes column 3 of `pose`.
    let pose = assembled.transpose();
    log::trace!("source translation {:?}", pose.translation());
    BASIS_CHANGE * pose * CAMERA_FLIP
}
