//! Error types for posebridge.

use thiserror::Error;

/// The main error type for posebridge operations.
#[derive(Error, Debug)]
pub enum PoseBridgeError {
    /// The pose values are malformed (wrong count or non-finite entries).
    #[error("invalid pose input: {reason}")]
    InvalidInput { reason: String },

    /// The rotation block of a pose is near-singular.
    #[error("degenerate transform: rotation block determinant is {determinant:e}")]
    DegenerateTransform { determinant: f64 },

    /// An import option is out of range.
    #[error("invalid option {option}: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    /// A camera with the given name already exists in the scene.
    #[error("camera '{0}' already exists")]
    CameraExists(String),

    /// A camera with the given name was not found in the scene.
    #[error("camera '{0}' not found")]
    CameraNotFound(String),

    /// Failed to load a background image.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PoseBridgeError {
    /// Shorthand for [`PoseBridgeError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for posebridge operations.
pub type Result<T> = std::result::Result<T, PoseBridgeError>;
