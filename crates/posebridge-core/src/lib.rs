//! Core abstractions for posebridge.
//!
//! This crate provides the host-independent pieces of an ARKit pose import:
//! - [`PoseMatrix`], a 4x4 `f64` matrix with explicit row-major storage
//! - [`Convention`] and the fixed ARKit to Z-up basis change
//! - [`convert_pose`], the pure pose converter, and [`PoseConverter`] with a
//!   singularity check
//! - [`ImportOptions`] and the shared [`PoseBridgeError`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod convention;
pub mod convert;
pub mod error;
pub mod matrix;
pub mod options;

pub use convention::{basis_change, Convention, BASIS_CHANGE, CAMERA_FLIP};
pub use convert::{
    convert_batch, convert_pose, unconvert_pose, PoseConverter, DEFAULT_DEGENERATE_TOLERANCE,
};
pub use error::{PoseBridgeError, Result};
pub use matrix::{PoseMatrix, MATRIX_LEN};
pub use options::ImportOptions;

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DVec3};
