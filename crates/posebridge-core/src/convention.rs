//! Coordinate conventions of the capture device and the destination scene.
//!
//! Both systems are right-handed with X pointing right:
//!
//! | convention | up | camera forward |
//! |---|---|---|
//! | [`Convention::ArKit`] | +Y | −Z (local) |
//! | [`Convention::ZUp`] | +Z | −Y |

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::matrix::PoseMatrix;

/// A named axis system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convention {
    /// ARKit world space: Y-up, X-right.
    ArKit,
    /// Destination scene space: Z-up, X-right.
    ZUp,
}

impl Convention {
    /// Up direction.
    #[must_use]
    pub fn up(self) -> DVec3 {
        match self {
            Convention::ArKit => DVec3::Y,
            Convention::ZUp => DVec3::Z,
        }
    }

    /// Right direction.
    #[must_use]
    pub fn right(self) -> DVec3 {
        DVec3::X
    }

    /// Direction a camera looks along.
    #[must_use]
    pub fn camera_forward(self) -> DVec3 {
        match self {
            Convention::ArKit => DVec3::NEG_Z,
            Convention::ZUp => DVec3::NEG_Y,
        }
    }
}

/// Change of basis from ARKit axes to Z-up axes.
///
/// Destination X = source X, destination Y = −(source Z), destination Z = source Y.
pub const BASIS_CHANGE: PoseMatrix = PoseMatrix::from_rows([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
]);

/// Rotation of 180 degrees about local X, written out exactly.
///
/// Reconciles the opposite camera-forward polarity of the two conventions. It is
/// its own inverse.
pub const CAMERA_FLIP: PoseMatrix = PoseMatrix::from_rows([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, -1.0, 0.0, 0.0],
    [0.0, 0.0, -1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
]);

/// Returns the change-of-basis matrix between two conventions.
///
/// Same-convention requests yield the identity.
#[must_use]
pub fn basis_change(from: Convention, to: Convention) -> PoseMatrix {
    match (from, to) {
        (Convention::ArKit, Convention::ZUp) => BASIS_CHANGE,
        // B is orthonormal, so its inverse is its transpose.
        (Convention::ZUp, Convention::ArKit) => BASIS_CHANGE.transpose(),
        _ => PoseMatrix::IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(m: &PoseMatrix, v: DVec3) -> DVec3 {
        m.rotation_block() * v
    }

    #[test]
    fn test_basis_change_maps_axes() {
        let b = basis_change(Convention::ArKit, Convention::ZUp);
        assert_eq!(apply(&b, Convention::ArKit.up()), Convention::ZUp.up());
        assert_eq!(apply(&b, Convention::ArKit.right()), Convention::ZUp.right());
        assert_eq!(apply(&b, DVec3::Z), DVec3::NEG_Y);
    }

    #[test]
    fn test_basis_change_inverse() {
        let forward = basis_change(Convention::ArKit, Convention::ZUp);
        let back = basis_change(Convention::ZUp, Convention::ArKit);
        assert_eq!(forward * back, PoseMatrix::IDENTITY);
        assert_eq!(
            basis_change(Convention::ZUp, Convention::ZUp),
            PoseMatrix::IDENTITY
        );
    }

    #[test]
    fn test_camera_flip_matches_rotation() {
        let rotated = PoseMatrix::rotation_x(std::f64::consts::PI);
        assert!(CAMERA_FLIP.approx_eq(&rotated, 1e-15));
        assert_eq!(CAMERA_FLIP * CAMERA_FLIP, PoseMatrix::IDENTITY);
    }
}
