//! Scene layer for posebridge.
//!
//! Cameras produced by an import land in a [`SceneHost`]. This crate provides
//! the camera object ([`SceneCamera`]), its optional [`BackgroundImage`], an
//! ordered camera [`Registry`], and [`Scene`], an in-memory host that can be
//! written out as a [`SceneManifest`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod background;
pub mod camera;
pub mod host;
pub mod registry;
pub mod scene;

pub use background::BackgroundImage;
pub use camera::{Lens, SceneCamera};
pub use host::SceneHost;
pub use registry::Registry;
pub use scene::{Scene, SceneManifest};
