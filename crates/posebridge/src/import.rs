//! Importing captured poses into a scene.
//!
//! Every frame is handled on its own: a frame that is not a list of numbers or
//! fails conversion is logged and skipped, and a frame whose image is missing
//! still gets its camera. Only an unreadable pose list or invalid options abort
//! the import.

use posebridge_core::{ImportOptions, PoseConverter, Result};
use posebridge_scene::{BackgroundImage, Lens, SceneCamera, SceneHost};

use crate::export::{frame_values, load_export_info, load_transforms};
use crate::report::{ImportReport, MissingBackground, SkippedFrame};

/// Imports the export directory named by `options` into `host`.
///
/// # Errors
///
/// Fails when the options are invalid or the pose list is not a readable JSON
/// array. Per-frame problems are recorded in the returned report instead.
pub fn import_directory<H: SceneHost + ?Sized>(
    host: &mut H,
    options: &ImportOptions,
) -> Result<ImportReport> {
    options.validate()?;

    let transforms_path = options.transforms_path();
    log::info!("importing poses from {}", transforms_path.display());
    let frames = load_transforms(&transforms_path)?;

    let export_info = load_export_info(options.info_path());
    if let Some(info) = &export_info {
        if info.total_images != frames.len() {
            log::warn!(
                "export info lists {} images but {} poses were found",
                info.total_images,
                frames.len()
            );
        }
    }

    let frames = frames.iter().map(frame_values).collect();
    let mut report = import_parsed(host, frames, options)?;
    report.export_info = export_info;
    Ok(report)
}

/// Creates one camera per frame in `host`.
///
/// # Errors
///
/// Fails when the options are invalid or the host refuses to make the first
/// camera active.
pub fn import_frames<H: SceneHost + ?Sized>(
    host: &mut H,
    frames: &[Vec<f64>],
    options: &ImportOptions,
) -> Result<ImportReport> {
    options.validate()?;
    import_parsed(host, frames.iter().cloned().map(Ok).collect(), options)
}

/// Imports frames that were read one by one; a read failure skips its frame.
fn import_parsed<H: SceneHost + ?Sized>(
    host: &mut H,
    frames: Vec<Result<Vec<f64>>>,
    options: &ImportOptions,
) -> Result<ImportReport> {
    let mut report = ImportReport {
        frame_count: frames.len(),
        ..ImportReport::default()
    };

    if options.clear_existing_cameras {
        report.removed_cameras = host.remove_all_cameras();
        if report.removed_cameras > 0 {
            log::info!("removed {} existing cameras", report.removed_cameras);
        }
    }

    let converter = PoseConverter::new(options.degenerate_tolerance);
    let lens = Lens::new(options.fov_degrees);

    for (index, values) in frames.into_iter().enumerate() {
        let matrix_world = match values.and_then(|values| converter.convert(&values)) {
            Ok(matrix) => matrix,
            Err(e) => {
                log::warn!("skipping frame {index}: {e}");
                report.skipped_frames.push(SkippedFrame {
                    index,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let name = options.camera_name(index);
        let mut camera = SceneCamera::new(name.clone(), matrix_world, lens);

        if options.attach_backgrounds {
            let path = options.image_path(index);
            match BackgroundImage::open(&path) {
                Ok(background) => {
                    camera.attach_background(background);
                }
                Err(e) => {
                    log::warn!("{name}: no background image: {e}");
                    report.missing_backgrounds.push(MissingBackground {
                        camera: name.clone(),
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if let Err(e) = host.add_camera(camera) {
            log::warn!("skipping frame {index}: {e}");
            report.skipped_frames.push(SkippedFrame {
                index,
                reason: e.to_string(),
            });
            continue;
        }

        log::info!("created {name}");
        report.created_cameras.push(name);
    }

    if let Some(first) = report.created_cameras.first() {
        host.set_active_camera(first)?;
        log::info!("set {first} as active camera");
        report.active_camera = Some(first.clone());
    }

    log::info!(
        "created {} cameras from {} poses ({} skipped)",
        report.created(),
        report.frame_count,
        report.skipped_frames.len()
    );
    Ok(report)
}
