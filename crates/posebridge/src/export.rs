//! Reading the files of an ARKit export directory.

use std::path::Path;

use posebridge_core::{PoseBridgeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary written next to the poses by the capture app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportInfo {
    /// Number of images captured.
    pub total_images: usize,
    /// Human-readable export date.
    #[serde(default)]
    pub export_date: Option<String>,
    /// Export time in seconds since the Unix epoch.
    #[serde(default)]
    pub export_timestamp: Option<f64>,
}

/// Reads the pose list: a JSON array with one entry per frame.
///
/// Only the outer array is checked here. Each entry is turned into numbers by
/// [`frame_values`] during import, so one malformed frame does not reject the file.
pub fn load_transforms(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;
    let frames: Vec<Value> = serde_json::from_str(&data)?;
    log::debug!("read {} frames from {}", frames.len(), path.display());
    Ok(frames)
}

/// Reads one frame of the pose list as a list of numbers.
///
/// Fails with [`PoseBridgeError::InvalidInput`] when the frame is not an array or
/// holds something other than numbers. The count is left to the converter.
pub fn frame_values(frame: &Value) -> Result<Vec<f64>> {
    let Some(items) = frame.as_array() else {
        return Err(PoseBridgeError::invalid_input(format!(
            "frame is not an array ({frame})"
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64().ok_or_else(|| {
                PoseBridgeError::invalid_input(format!("value {index} is not a number ({item})"))
            })
        })
        .collect()
}

/// Reads the export summary if present.
///
/// A missing or malformed file is logged and yields `None`.
pub fn load_export_info(path: impl AsRef<Path>) -> Option<ExportInfo> {
    let path = path.as_ref();
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("no export info at {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&data) {
        Ok(info) => Some(info),
        Err(e) => {
            log::warn!("ignoring malformed export info {}: {e}", path.display());
            None
        }
    }
}
