//! Outcome of an import.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::export::ExportInfo;

/// A frame that produced no camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFrame {
    /// Index of the frame in the pose list.
    pub index: usize,
    /// Why it was skipped.
    pub reason: String,
}

/// A camera created without its background image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingBackground {
    /// Camera that was created.
    pub camera: String,
    /// Image that was looked for.
    pub path: PathBuf,
    /// Why it was not attached.
    pub reason: String,
}

/// Summary of an import, one entry per frame outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Number of frames in the pose list.
    pub frame_count: usize,
    /// Cameras removed before importing.
    pub removed_cameras: usize,
    /// Names of created cameras, in frame order.
    pub created_cameras: Vec<String>,
    /// Frames that failed conversion or registration.
    pub skipped_frames: Vec<SkippedFrame>,
    /// Cameras created without a background.
    pub missing_backgrounds: Vec<MissingBackground>,
    /// Camera made active, if any.
    pub active_camera: Option<String>,
    /// Export summary, when one was found.
    pub export_info: Option<ExportInfo>,
}

impl ImportReport {
    /// Number of cameras created.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created_cameras.len()
    }

    /// Returns true when every frame produced a camera.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped_frames.is_empty() && self.created() == self.frame_count
    }
}
