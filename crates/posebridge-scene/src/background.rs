//! Background images shown behind a camera's view.

use std::path::{Path, PathBuf};

use posebridge_core::{PoseBridgeError, Result};
use serde::{Deserialize, Serialize};

/// A per-frame photo attached to a camera.
///
/// Only the header is read; pixel data stays on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundImage {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl BackgroundImage {
    /// Opens the image at `path` and reads its dimensions.
    ///
    /// Fails with [`PoseBridgeError::ImageLoad`] when the file is missing or not a
    /// readable image.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PoseBridgeError::ImageLoad(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let (width, height) = image::image_dimensions(path)
            .map_err(|e| PoseBridgeError::ImageLoad(format!("{}: {e}", path.display())))?;
        log::debug!("read background {} ({width}x{height})", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }

    /// Path of the image file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_0.png");
        image::RgbImage::new(8, 6).save(&path).unwrap();

        let background = BackgroundImage::open(&path).unwrap();
        assert_eq!(background.width(), 8);
        assert_eq!(background.height(), 6);
        assert!((background.aspect_ratio() - 8.0 / 6.0).abs() < 1e-12);
        assert_eq!(background.path(), path);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BackgroundImage::open(dir.path().join("image_9.jpg")).unwrap_err();
        assert!(matches!(err, PoseBridgeError::ImageLoad(_)));
    }

    #[test]
    fn test_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_1.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        let err = BackgroundImage::open(&path).unwrap_err();
        assert!(matches!(err, PoseBridgeError::ImageLoad(_)));
    }
}
