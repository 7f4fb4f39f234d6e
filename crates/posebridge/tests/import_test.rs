//! Integration tests importing a complete export directory.

use std::fs;
use std::path::Path;

use posebridge::*;

fn write_export(dir: &Path, frames: &serde_json::Value) {
    fs::write(
        dir.join("camera_transforms.json"),
        serde_json::to_string_pretty(frames).unwrap(),
    )
    .unwrap();
}

fn write_image(dir: &Path, index: usize, width: u32, height: u32) {
    image::RgbImage::new(width, height)
        .save(dir.join(format!("image_{index}.jpg")))
        .unwrap();
}

fn frames() -> serde_json::Value {
    serde_json::json!([
        [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1],
        [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 2, 3, 4, 1],
        [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 2, 3, 4],
        [0, 0, -1, 0, 0, 1, 0, 0, 1, 0, 0, 0, -1.5, 0.25, 7, 1]
    ])
}

#[test]
fn test_import_export_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), &frames());
    write_image(dir.path(), 0, 16, 12);
    write_image(dir.path(), 3, 12, 16);
    fs::write(
        dir.path().join("export_info.json"),
        r#"{ "totalImages": 4, "exportDate": "2024-05-01", "exportTimestamp": 1714557600.0 }"#,
    )
    .unwrap();

    let options = ImportOptions::new(dir.path());
    let mut scene = Scene::new();
    let report = import_directory(&mut scene, &options).unwrap();

    assert_eq!(report.frame_count, 4);
    assert_eq!(report.created_cameras, ["Camera_0", "Camera_1", "Camera_3"]);
    assert_eq!(report.skipped_frames.len(), 1);
    assert_eq!(report.skipped_frames[0].index, 2);
    assert_eq!(report.export_info.as_ref().map(|i| i.total_images), Some(4));

    // Frame 1 has no image: camera created, background dropped.
    assert_eq!(report.missing_backgrounds.len(), 1);
    assert_eq!(report.missing_backgrounds[0].camera, "Camera_1");

    let first = scene.camera("Camera_0").unwrap();
    let background = first.background().unwrap();
    assert_eq!((background.width(), background.height()), (16, 12));
    assert!(first.show_background_images());

    let second = scene.camera("Camera_1").unwrap();
    assert!(second.background().is_none());
    assert!(!second.show_background_images());
    assert_eq!(
        second.matrix_world().rows(),
        &[
            [1.0, 0.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, -4.0],
            [0.0, -1.0, 0.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    );

    let last = scene.camera("Camera_3").unwrap();
    assert_eq!(last.position(), DVec3::new(-1.5, -7.0, 0.25));
    assert!(last.matrix_world().is_rigid(1e-12));

    assert_eq!(scene.active_camera_name(), Some("Camera_0"));
}

#[test]
fn test_missing_pose_list_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = Scene::new();
    let err = import_directory(&mut scene, &ImportOptions::new(dir.path())).unwrap_err();
    assert!(matches!(err, PoseBridgeError::Io(_)));
    assert_eq!(scene.camera_count(), 0);
}

#[test]
fn test_backgrounds_disabled() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), &frames());
    write_image(dir.path(), 0, 4, 4);

    let options = ImportOptions::new(dir.path()).with_backgrounds(false);
    let mut scene = Scene::new();
    let report = import_directory(&mut scene, &options).unwrap();

    assert!(report.missing_backgrounds.is_empty());
    assert!(scene.cameras().all(|c| c.background().is_none()));
}

#[test]
fn test_manifest_of_imported_scene() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), &frames());

    let mut scene = Scene::new();
    import_directory(&mut scene, &ImportOptions::new(dir.path())).unwrap();

    let json = serde_json::to_value(scene.manifest()).unwrap();
    assert_eq!(json["active_camera"], "Camera_0");
    assert_eq!(json["cameras"].as_array().unwrap().len(), 3);
    assert_eq!(json["cameras"][1]["name"], "Camera_1");
    assert_eq!(json["cameras"][1]["lens"]["fov_degrees"], 65.0);
    assert_eq!(json["cameras"][1]["matrix_world"][1][3], -4.0);
}

#[test]
fn test_reimport_replaces_cameras() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), &frames());
    let options = ImportOptions::new(dir.path()).with_backgrounds(false);

    let mut scene = Scene::new();
    import_directory(&mut scene, &options).unwrap();
    let report = import_directory(&mut scene, &options).unwrap();

    assert_eq!(report.removed_cameras, 3);
    assert_eq!(scene.camera_count(), 3);
}
