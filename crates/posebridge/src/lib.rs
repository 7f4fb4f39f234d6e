//! posebridge: import ARKit camera poses as cameras of a Z-up 3D scene.
//!
//! An ARKit capture app exports a directory with one 4x4 pose per captured frame
//! (`camera_transforms.json`), an optional photo per frame (`image_<i>.jpg`) and
//! an optional summary (`export_info.json`). posebridge converts each pose from
//! ARKit's Y-up convention into a Z-up scene convention and creates one camera
//! per frame.
//!
//! # Quick Start
//!
//! ```no_run
//! use posebridge::*;
//!
//! fn main() -> Result<()> {
//!     let options = ImportOptions::new("./data").with_fov_degrees(65.0);
//!
//!     let mut scene = Scene::new();
//!     let report = import_directory(&mut scene, &options)?;
//!     println!("created {} cameras", report.created());
//!
//!     Ok(())
//! }
//! ```
//!
//! Converting a single pose needs no scene at all:
//!
//! ```
//! use posebridge::convert_pose;
//!
//! let values = [
//!     1.0, 0.0, 0.0, 0.0,
//!     0.0, 1.0, 0.0, 0.0,
//!     0.0, 0.0, 1.0, 0.0,
//!     2.0, 3.0, 4.0, 1.0, // translation is stored in the last row
//! ];
//! let pose = convert_pose(&values).unwrap();
//! assert_eq!(pose.translation(), posebridge::DVec3::new(2.0, -4.0, 3.0));
//! ```

pub mod export;
pub mod import;
pub mod report;

// Re-export core types
pub use posebridge_core::{
    basis_change, convert_batch, convert_pose, unconvert_pose, Convention, DMat4, DVec3,
    ImportOptions, PoseBridgeError, PoseConverter, PoseMatrix, Result, BASIS_CHANGE,
    CAMERA_FLIP,
};

// Re-export scene types
pub use posebridge_scene::{
    BackgroundImage, Lens, Registry, Scene, SceneCamera, SceneHost, SceneManifest,
};

pub use export::{frame_values, load_export_info, load_transforms, ExportInfo};
pub use import::{import_directory, import_frames};
pub use report::{ImportReport, MissingBackground, SkippedFrame};
