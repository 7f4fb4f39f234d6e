//! Configuration options for an import.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::DEFAULT_DEGENERATE_TOLERANCE;
use crate::error::{PoseBridgeError, Result};

/// Options controlling how an ARKit export directory is imported.
///
/// Every field has a default, so a config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Directory holding the exported files.
    pub export_dir: PathBuf,

    /// Name of the pose list inside `export_dir`.
    pub transforms_file: String,

    /// Name of the optional export summary inside `export_dir`.
    pub info_file: String,

    /// File name prefix of per-frame images (`image_` gives `image_0.jpg`).
    pub image_prefix: String,

    /// File extension of per-frame images, without the dot.
    pub image_extension: String,

    /// Name prefix of created cameras (`Camera_` gives `Camera_0`).
    pub camera_prefix: String,

    /// Field of view applied to every camera, in degrees.
    ///
    /// A fixed value for the capture device's lens; not derived from intrinsics.
    pub fov_degrees: f64,

    /// Frames whose rotation block determinant falls below this are skipped.
    pub degenerate_tolerance: f64,

    /// Whether cameras already in the scene are removed first.
    pub clear_existing_cameras: bool,

    /// Whether per-frame images are attached as camera backgrounds.
    pub attach_backgrounds: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("./data"),
            transforms_file: "camera_transforms.json".to_string(),
            info_file: "export_info.json".to_string(),
            image_prefix: "image_".to_string(),
            image_extension: "jpg".to_string(),
            camera_prefix: "Camera_".to_string(),
            fov_degrees: 65.0,
            degenerate_tolerance: DEFAULT_DEGENERATE_TOLERANCE,
            clear_existing_cameras: true,
            attach_backgrounds: true,
        }
    }
}

impl ImportOptions {
    /// Creates options for the given export directory, defaults elsewhere.
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            ..Self::default()
        }
    }

    /// Loads options from a JSON file. Missing fields keep their defaults.
    ///
    /// The loaded values are checked with [`ImportOptions::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&data)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks the numeric options.
    ///
    /// The field of view must be finite and in `(0, 180)` degrees. The
    /// degenerate tolerance must be finite and non-negative (zero disables the
    /// check); a `NaN` tolerance would otherwise disable it silently.
    pub fn validate(&self) -> Result<()> {
        if !self.fov_degrees.is_finite() || self.fov_degrees <= 0.0 || self.fov_degrees >= 180.0 {
            return Err(PoseBridgeError::InvalidOption {
                option: "fov_degrees",
                reason: format!("{} is not in (0, 180) degrees", self.fov_degrees),
            });
        }
        if !self.degenerate_tolerance.is_finite() || self.degenerate_tolerance < 0.0 {
            return Err(PoseBridgeError::InvalidOption {
                option: "degenerate_tolerance",
                reason: format!(
                    "{} is not a finite, non-negative number",
                    self.degenerate_tolerance
                ),
            });
        }
        Ok(())
    }

    /// Sets the field of view in degrees.
    #[must_use]
    pub fn with_fov_degrees(mut self, fov_degrees: f64) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    /// Sets whether backgrounds are attached.
    #[must_use]
    pub fn with_backgrounds(mut self, attach: bool) -> Self {
        self.attach_backgrounds = attach;
        self
    }

    /// Sets whether existing cameras are removed first.
    #[must_use]
    pub fn with_clear_existing(mut self, clear: bool) -> Self {
        self.clear_existing_cameras = clear;
        self
    }

    /// Path of the pose list.
    #[must_use]
    pub fn transforms_path(&self) -> PathBuf {
        self.export_dir.join(&self.transforms_file)
    }

    /// Path of the export summary.
    #[must_use]
    pub fn info_path(&self) -> PathBuf {
        self.export_dir.join(&self.info_file)
    }

    /// Path of the image captured with frame `index`.
    #[must_use]
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.export_dir.join(format!(
            "{}{index}.{}",
            self.image_prefix, self.image_extension
        ))
    }

    /// Name of the camera created for frame `index`.
    #[must_use]
    pub fn camera_name(&self, index: usize) -> String {
        format!("{}{index}", self.camera_prefix)
    }
}
