//! Property tests for the pose converter.

use glam::{DMat4, DQuat, DVec3};
use posebridge_core::{
    convert_pose, unconvert_pose, PoseBridgeError, PoseMatrix, BASIS_CHANGE, CAMERA_FLIP,
};
use proptest::prelude::*;

/// Lays out a rigid pose the way the capture device exports it: each column
/// of the pose written as one row, translation last.
fn exported_values(rotation: DQuat, translation: DVec3) -> [f64; 16] {
    let pose = PoseMatrix::from_dmat4(DMat4::from_rotation_translation(rotation, translation));
    pose.transpose().to_row_major()
}

fn rotation_strategy() -> impl Strategy<Value = DQuat> {
    (
        -1.0f64..1.0,
        -1.0f64..1.0,
        -1.0f64..1.0,
        -std::f64::consts::PI..std::f64::consts::PI,
    )
        .prop_filter("axis must not vanish", |(x, y, z, _)| {
            DVec3::new(*x, *y, *z).length() > 1e-3
        })
        .prop_map(|(x, y, z, angle)| {
            DQuat::from_axis_angle(DVec3::new(x, y, z).normalize(), angle)
        })
}

fn translation_strategy() -> impl Strategy<Value = DVec3> {
    (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

proptest! {
    #[test]
    fn orthonormality_is_preserved(
        rotation in rotation_strategy(),
        translation in translation_strategy(),
    ) {
        let values = exported_values(rotation, translation);
        let input = PoseMatrix::from_row_major(&values).unwrap().transpose();
        prop_assert!(input.is_rigid(1e-9));

        let result = convert_pose(&values).unwrap();
        prop_assert!(result.is_rigid(1e-9));
    }

    #[test]
    fn translation_maps_to_z_up(
        rotation in rotation_strategy(),
        translation in translation_strategy(),
    ) {
        let values = exported_values(rotation, translation);
        let result = convert_pose(&values).unwrap();
        let expected = DVec3::new(translation.x, -translation.z, translation.y);
        prop_assert!((result.translation() - expected).length() < 1e-9);
    }

    #[test]
    fn inverse_reconstructs_input(
        rotation in rotation_strategy(),
        translation in translation_strategy(),
    ) {
        let values = exported_values(rotation, translation);
        let back = unconvert_pose(&convert_pose(&values).unwrap());
        for (a, b) in back.iter().zip(values.iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn wrong_length_is_rejected(len in 0usize..40) {
        prop_assume!(len != 16);
        let values = vec![0.5; len];
        let rejected = matches!(
            convert_pose(&values),
            Err(PoseBridgeError::InvalidInput { .. })
        );
        prop_assert!(rejected);
    }
}

#[test]
fn identity_pose_literal() {
    let values = PoseMatrix::IDENTITY.to_row_major();
    let result = convert_pose(&values).unwrap();
    assert_eq!(result, BASIS_CHANGE * CAMERA_FLIP);
    assert_eq!(
        result.rows(),
        &[
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    );
}

#[test]
fn camera_looks_along_destination_forward() {
    // A camera looks down its local -Z; after conversion an identity capture
    // faces the destination convention's forward direction.
    let result = convert_pose(&PoseMatrix::IDENTITY.to_row_major()).unwrap();
    let look = result.rotation_block() * DVec3::NEG_Z;
    assert_eq!(look, posebridge_core::Convention::ZUp.camera_forward());
}
